//! Shell Integration Tests
//!
//! End-to-end behavior of the application shell across navigation,
//! connectivity, outbound links and league logos.

use std::sync::Arc;

use optatv::app_ui::{
    AppShell, LogoDisplay, LogoError, LogoImage, LogoLoader, ModalKind, RecordingOpener,
    ShellConfig, View, WatchOutcome, OFFLINE_MESSAGE,
};
use optatv::networking::ManualNetwork;

fn start(online: bool) -> (AppShell, Arc<ManualNetwork>, Arc<RecordingOpener>) {
    optatv::init_logging();
    let network = Arc::new(ManualNetwork::new(online));
    let opener = Arc::new(RecordingOpener::new());
    let shell = AppShell::with_opener(ShellConfig::default(), network.clone(), opener.clone());
    (shell, network, opener)
}

/// Loader that fails for one league's logo
struct FlakyLoader {
    broken: &'static str,
}

impl LogoLoader for FlakyLoader {
    fn load(&self, locator: &str) -> Result<LogoImage, LogoError> {
        if locator.contains(self.broken) {
            Err(LogoError::Decode("truncated image".into()))
        } else {
            Ok(LogoImage { source: locator.to_string() })
        }
    }
}

/// Exactly one view is active after any sequence of selections
#[test]
fn test_single_active_view() {
    let (mut shell, _, _) = start(true);
    let sequence = [View::Opta, View::Opta, View::Settings, View::Live, View::News];

    for view in sequence {
        shell.select_view(view);
        assert_eq!(shell.active_view(), view);
    }
    assert_eq!(shell.active_view(), View::News);
}

/// A modal never survives a view switch, and closing it keeps the view
#[test]
fn test_modal_scoped_to_view() {
    let (mut shell, _, _) = start(true);

    shell.select_view(View::Settings);
    shell.open_modal(ModalKind::Privacy);
    assert_eq!(shell.active_modal(), Some(ModalKind::Privacy));

    shell.open_modal(ModalKind::Tips);
    assert_eq!(shell.active_modal(), Some(ModalKind::Tips));

    assert!(shell.close_modal());
    assert_eq!(shell.active_view(), View::Settings);

    shell.open_modal(ModalKind::Tips);
    shell.select_view(View::Live);
    assert_eq!(shell.active_modal(), None);

    shell.select_view(View::Settings);
    assert_eq!(shell.active_modal(), None);
}

/// Offline watch opens nothing and shows one dismissible error
#[test]
fn test_offline_guard() {
    let (mut shell, network, opener) = start(true);
    network.set_online(false);

    for _ in 0..3 {
        assert_eq!(shell.watch_hot_match(), WatchOutcome::Offline);
    }
    assert!(opener.opened().is_empty());
    assert_eq!(shell.stream_panel().error(), Some(OFFLINE_MESSAGE));
    assert!(shell.offline_banner().is_some());

    assert!(shell.dismiss_stream_error());
    assert_eq!(shell.stream_panel().error(), None);
    assert!(!shell.is_online());

    network.set_online(true);
    assert!(shell.offline_banner().is_none());
    assert_eq!(shell.watch_hot_match(), WatchOutcome::Opened);
    assert_eq!(opener.opened_urls(), vec!["https://www.camel1.live/q/home/hotmatch".to_string()]);
}

/// Starting offline is reflected immediately
#[test]
fn test_starts_offline() {
    let (mut shell, _, opener) = start(false);
    assert!(!shell.is_online());
    assert_eq!(shell.watch_hot_match(), WatchOutcome::Offline);
    assert!(opener.opened().is_empty());
}

/// One league's broken logo never affects another
#[test]
fn test_logo_fallback_independence() {
    let (shell, _, _) = start(true);
    let loader = FlakyLoader { broken: "Serie_A" };

    let serie_a = shell.league_logo("serie-a", &loader).unwrap();
    assert_eq!(serie_a, LogoDisplay::Icon("fa-shield"));

    for league in shell.leagues().list().iter().filter(|l| l.id != "serie-a") {
        let display = shell.league_logo(league.id, &loader).unwrap();
        assert!(matches!(display, LogoDisplay::Image(_)), "{}", league.id);
    }

    // Sticky for the session, even with a loader that would now succeed
    let healthy = FlakyLoader { broken: "nothing-matches" };
    assert!(shell.league_logo("serie-a", &healthy).unwrap().is_icon());
    assert!(shell.league_logo("unknown", &healthy).is_none());
}

/// League tiles open each league's own site
#[test]
fn test_league_links() {
    let (shell, _, opener) = start(true);
    for league in shell.leagues().list() {
        assert!(shell.open_league(league.id));
    }
    let links: Vec<String> = shell.leagues().list().iter().map(|l| l.link.to_string()).collect();
    assert_eq!(opener.opened_urls(), links);
}

/// Theme changes reach every theme context immediately
#[test]
fn test_theme_context_follows_selection() {
    let (mut shell, _, _) = start(true);
    let ctx = shell.theme_context();
    assert_eq!(ctx.primary_color(), "#39ff14");

    shell.select_theme("Golden Yellow").unwrap();
    assert_eq!(ctx.primary_color(), "#facc15");
    assert_eq!(ctx.primary_rgb().to_string(), "250,204,21");
    assert!(shell.select_theme("Midnight").is_err());
    assert_eq!(ctx.primary_color(), "#facc15");
}
