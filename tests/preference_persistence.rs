//! Preference Persistence Tests
//!
//! Theme and locale preferences across a restart with on-disk storage.

use std::sync::Arc;
use std::time::Duration;

use optatv::app_ui::{
    find_theme, keys, AppShell, LocaleSaveStatus, PreferenceConfig, PreferenceStore,
    RecordingOpener, ShellConfig,
};
use optatv::networking::ManualNetwork;
use optatv::storage::{KvConfig, KvStore, LocalStorage};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> ShellConfig {
    let path = dir.path().join("prefs.db");
    ShellConfig::default().storage(KvConfig::new(path.to_string_lossy().to_string()))
}

fn start(config: ShellConfig) -> AppShell {
    AppShell::with_opener(
        config,
        Arc::new(ManualNetwork::new(true)),
        Arc::new(RecordingOpener::new()),
    )
}

/// Empty storage starts on Neon Green; Cyber Blue survives a restart exactly
#[test]
fn test_theme_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    // Phase 1: fresh storage, pick a theme
    {
        let mut shell = start(config_in(&temp_dir));
        assert_eq!(shell.active_theme().name, "Neon Green");
        shell.select_theme("Cyber Blue").unwrap();
    }

    // Phase 2: restart and verify
    {
        let shell = start(config_in(&temp_dir));
        let expected = find_theme("Cyber Blue").unwrap();
        assert_eq!(shell.active_theme(), expected);
        assert_eq!(shell.theme_context().primary_color(), "#00f3ff");
        assert_eq!(shell.theme_context().primary_rgb().to_string(), "0,243,255");
    }
}

/// Locale defaults to English and a valid choice survives a restart
#[test]
fn test_locale_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut shell = start(config_in(&temp_dir));
        assert_eq!(shell.active_locale(), "en");
        shell.select_locale("pt").unwrap();
    }

    {
        let shell = start(config_in(&temp_dir));
        assert_eq!(shell.active_locale(), "pt");
    }
}

/// Stored values use the plain keys and formats a browser build reads
#[test]
fn test_stored_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.db");

    {
        let mut shell = start(config_in(&temp_dir));
        shell.select_theme("Hot Pink").unwrap();
        shell.select_locale("ar").unwrap();
    }

    let store = KvStore::new(KvConfig::new(path.to_string_lossy().to_string())).unwrap();
    assert_eq!(store.get_item(keys::THEME_COLOR).unwrap().as_deref(), Some("#ff0099"));
    assert_eq!(store.get_item(keys::THEME_RGB).unwrap().as_deref(), Some("255,0,153"));
    assert_eq!(store.get_item(keys::APP_LANGUAGE).unwrap().as_deref(), Some("ar"));
}

/// Garbage in storage is ignored in favor of defaults
#[test]
fn test_corrupt_values_use_defaults() {
    let store = Arc::new(KvStore::in_memory().unwrap());
    store.set_item(keys::THEME_COLOR, "rgb(1,2,3)").unwrap();
    store.set_item(keys::APP_LANGUAGE, "zz").unwrap();

    let prefs = PreferenceStore::new(store, PreferenceConfig::default());
    assert_eq!(prefs.active_theme().name, "Neon Green");
    assert_eq!(prefs.active_locale(), "en");
}

/// Unopenable storage degrades to in-memory preferences
#[test]
fn test_unavailable_storage_is_silent() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();
    let path = blocker.join("prefs.db");

    let mut shell =
        start(ShellConfig::default().storage(KvConfig::new(path.to_string_lossy().to_string())));
    assert_eq!(shell.active_theme().name, "Neon Green");
    shell.select_theme("Sunset Orange").unwrap();
    assert_eq!(shell.active_theme().name, "Sunset Orange");
}

/// Two rapid locale changes produce one confirmation, for the latest
#[tokio::test(start_paused = true)]
async fn test_locale_save_debounce() {
    let temp_dir = TempDir::new().unwrap();
    let mut shell = start(config_in(&temp_dir));
    let mut rx = shell.preferences().subscribe_save_status();

    shell.select_locale("fr").unwrap();
    assert_eq!(shell.save_notice().as_deref(), Some("Enregistrement..."));
    tokio::time::sleep(Duration::from_millis(200)).await;
    shell.select_locale("es").unwrap();

    let mut seen = Vec::new();
    let deadline = tokio::time::Instant::now() + Duration::from_secs(4);
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                seen.push(rx.borrow_and_update().clone());
            }
            _ = tokio::time::sleep_until(deadline) => break,
        }
    }

    let confirmations: Vec<_> = seen.iter().filter(|s| s.is_saved()).collect();
    assert_eq!(confirmations, vec![&LocaleSaveStatus::Saved { code: "es".into() }]);
    assert_eq!(shell.save_status(), LocaleSaveStatus::Idle);
}

/// The confirmation notice names the language in the new locale
#[tokio::test(start_paused = true)]
async fn test_save_notice_text() {
    let mut shell = start(ShellConfig::default());

    shell.select_locale("en").unwrap();
    tokio::time::sleep(Duration::from_millis(900)).await;
    assert_eq!(shell.save_notice().as_deref(), Some("Language set to English"));

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(shell.save_notice(), None);
}
