//! Display preferences
//!
//! Two independent preferences are persisted to local storage: the accent
//! theme and the UI locale. The store is the only writer of the theme context.
//! Storage problems never reach the caller: reads fall back to defaults and
//! failed writes still update the in-memory state.

use std::sync::Arc;
use std::time::Duration;

use i18n::{validate_locale, I18nError, DEFAULT_LOCALE};
use serde::Serialize;
use storage::LocalStorage;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::theme::{
    default_theme, find_theme, find_theme_by_color, parse_hex_color, theme_context, Rgb, Theme,
    ThemeContext, ThemePublisher, CUSTOM_THEME_NAME,
};

/// Storage keys
pub mod keys {
    /// Active locale code
    pub const APP_LANGUAGE: &str = "appLanguage";
    /// Active accent color, `#rrggbb`
    pub const THEME_COLOR: &str = "themeColor";
    /// Active accent color as `r,g,b`
    pub const THEME_RGB: &str = "themeRgb";
}

/// Preference error types
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// No catalog theme has this name
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Theme color is not `#rrggbb`
    #[error("Invalid theme color: {0}")]
    InvalidColor(String),

    /// Locale code rejected
    #[error(transparent)]
    Locale(#[from] I18nError),
}

/// Result type for preference operations
pub type Result<T> = std::result::Result<T, PreferenceError>;

// =============================================================================
// Configuration
// =============================================================================

/// Timing of the locale save feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceConfig {
    /// Minimum time the "saving" state stays visible
    pub save_delay: Duration,
    /// How long the confirmation notice stays visible
    pub notice_duration: Duration,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self { save_delay: Duration::from_millis(800), notice_duration: Duration::from_secs(2) }
    }
}

impl PreferenceConfig {
    /// Set the minimum visible saving latency
    pub fn save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = delay;
        self
    }

    /// Set how long the confirmation stays visible
    pub fn notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }
}

// =============================================================================
// Locale save status
// =============================================================================

/// Feedback state of the most recent locale change
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LocaleSaveStatus {
    /// Nothing to show
    #[default]
    Idle,
    /// Saving indicator for `code`
    Saving {
        /// Locale being saved
        code: String,
    },
    /// Confirmation notice for `code`
    Saved {
        /// Locale that was saved
        code: String,
    },
}

impl LocaleSaveStatus {
    /// Whether the confirmation notice is visible
    pub fn is_saved(&self) -> bool {
        matches!(self, LocaleSaveStatus::Saved { .. })
    }
}

// =============================================================================
// Loading
// =============================================================================

fn read(storage: &dyn LocalStorage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "preference read failed, using default");
            None
        }
    }
}

fn write(storage: &dyn LocalStorage, key: &str, value: &str) {
    if let Err(e) = storage.set_item(key, value) {
        tracing::warn!(key, error = %e, "preference write failed, change kept in memory only");
    }
}

/// Read the persisted theme, or the default theme when nothing valid is stored
pub fn load_theme(storage: &dyn LocalStorage) -> Theme {
    let Some(color) = read(storage, keys::THEME_COLOR) else {
        return default_theme();
    };

    let Some((r, g, b)) = parse_hex_color(&color) else {
        tracing::warn!(%color, "persisted theme color is malformed, using default");
        return default_theme();
    };

    let rgb = read(storage, keys::THEME_RGB)
        .and_then(|value| value.parse::<Rgb>().ok())
        .unwrap_or(Rgb(r, g, b));

    let name = find_theme_by_color(&color)
        .map(|t| t.name)
        .unwrap_or_else(|| CUSTOM_THEME_NAME.to_string());

    Theme::new(name, color, rgb)
}

/// Read the persisted locale code, or `en` when nothing valid is stored
pub fn load_locale(storage: &dyn LocalStorage) -> String {
    match read(storage, keys::APP_LANGUAGE) {
        Some(code) => match validate_locale(&code) {
            Ok(locale) => locale.code.to_string(),
            Err(e) => {
                tracing::warn!(%code, error = %e, "persisted locale rejected, using default");
                DEFAULT_LOCALE.to_string()
            }
        },
        None => DEFAULT_LOCALE.to_string(),
    }
}

// =============================================================================
// Preference Store
// =============================================================================

/// Owns the theme and locale preferences and their persistence
pub struct PreferenceStore {
    storage: Arc<dyn LocalStorage>,
    config: PreferenceConfig,
    theme: ThemePublisher,
    locale: String,
    save_status: Arc<watch::Sender<LocaleSaveStatus>>,
    pending_save: Option<JoinHandle<()>>,
}

impl PreferenceStore {
    /// Load both preferences and publish the theme to a new context
    pub fn new(storage: Arc<dyn LocalStorage>, config: PreferenceConfig) -> Self {
        let theme = load_theme(storage.as_ref());
        let locale = load_locale(storage.as_ref());
        tracing::info!(theme = %theme.name, %locale, "preferences loaded");

        let (publisher, _context) = theme_context(theme);
        let (status, _rx) = watch::channel(LocaleSaveStatus::Idle);

        Self {
            storage,
            config,
            theme: publisher,
            locale,
            save_status: Arc::new(status),
            pending_save: None,
        }
    }

    /// Store backed by a fresh in-memory map
    pub fn in_memory(config: PreferenceConfig) -> Self {
        Self::new(Arc::new(storage::MemoryStorage::new()), config)
    }

    /// Read handle for rendering consumers
    pub fn theme_context(&self) -> ThemeContext {
        self.theme.context()
    }

    /// Active theme
    pub fn active_theme(&self) -> Theme {
        self.theme.current()
    }

    /// Persist and publish a theme
    pub fn set_active_theme(&mut self, theme: &Theme) -> Result<()> {
        if !theme.is_valid() {
            return Err(PreferenceError::InvalidColor(theme.color.clone()));
        }

        write(self.storage.as_ref(), keys::THEME_COLOR, &theme.color);
        write(self.storage.as_ref(), keys::THEME_RGB, &theme.rgb.to_string());
        self.theme.publish(theme.clone());
        tracing::info!(name = %theme.name, "theme changed");
        Ok(())
    }

    /// Select a catalog theme by name
    pub fn select_theme(&mut self, name: &str) -> Result<Theme> {
        let theme = find_theme(name).ok_or_else(|| PreferenceError::UnknownTheme(name.into()))?;
        self.set_active_theme(&theme)?;
        Ok(theme)
    }

    /// Active locale code
    pub fn active_locale(&self) -> &str {
        &self.locale
    }

    /// Persist a locale and start the saving/saved feedback. A pending
    /// feedback cycle from an earlier call is cancelled.
    pub fn set_active_locale(&mut self, code: &str) -> Result<()> {
        let code = validate_locale(code)?.code.to_string();

        write(self.storage.as_ref(), keys::APP_LANGUAGE, &code);
        self.locale = code.clone();
        tracing::info!(locale = %code, "locale changed");

        if let Some(pending) = self.pending_save.take() {
            pending.abort();
        }
        self.save_status.send_replace(LocaleSaveStatus::Saving { code: code.clone() });

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("no runtime for save feedback, skipping notice");
            self.save_status.send_replace(LocaleSaveStatus::Idle);
            return Ok(());
        };

        let status = Arc::clone(&self.save_status);
        let PreferenceConfig { save_delay, notice_duration } = self.config.clone();
        self.pending_save = Some(handle.spawn(async move {
            tokio::time::sleep(save_delay).await;
            status.send_replace(LocaleSaveStatus::Saved { code });
            tokio::time::sleep(notice_duration).await;
            status.send_replace(LocaleSaveStatus::Idle);
        }));

        Ok(())
    }

    /// Current save feedback state
    pub fn save_status(&self) -> LocaleSaveStatus {
        self.save_status.borrow().clone()
    }

    /// Subscribe to save feedback changes
    pub fn subscribe_save_status(&self) -> watch::Receiver<LocaleSaveStatus> {
        self.save_status.subscribe()
    }
}

impl Drop for PreferenceStore {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_save.take() {
            pending.abort();
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("theme", &self.theme.current().name)
            .field("locale", &self.locale)
            .field("save_status", &*self.save_status.borrow())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
