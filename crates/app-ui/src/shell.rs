//! Application shell
//!
//! Wires the preference store, connectivity monitor, navigation controller and
//! league directory together and routes user actions to them. Nothing here is
//! fatal: storage, launch and logo failures are logged and absorbed.

use std::sync::Arc;

use i18n::{find_locale, Translator};
use networking::{ConnectivityMonitor, NetworkEnvironment};
use storage::{open_or_memory, KvConfig};
use tokio::sync::watch;

use crate::leagues::{LeagueDirectory, LogoDisplay, LogoLoader, LogoResolver};
use crate::navigation::{ModalKind, NavigationController, View};
use crate::outbound::{
    launch, Opener, SystemBrowser, ANALYST_DASHBOARD_URL, LIVE_SCORES_URL, NEWS_FEED_URL,
};
use crate::preferences::{LocaleSaveStatus, PreferenceConfig, PreferenceStore, Result};
use crate::theme::{Theme, ThemeContext};
use crate::views::{HotMatch, StreamPanel, WatchOutcome};

/// Shell configuration
#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
    /// Durable preference storage; `None` keeps preferences in memory
    pub storage: Option<KvConfig>,
    /// Locale save feedback timing
    pub preferences: PreferenceConfig,
}

impl ShellConfig {
    /// Persist preferences with the given store configuration
    pub fn storage(mut self, config: KvConfig) -> Self {
        self.storage = Some(config);
        self
    }

    /// Set the preference timing
    pub fn preferences(mut self, config: PreferenceConfig) -> Self {
        self.preferences = config;
        self
    }
}

/// Blocking banner shown while offline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineBanner {
    /// Localized banner text
    pub message: String,
    /// Localized label of the reload action
    pub reload_label: String,
}

/// The running application
pub struct AppShell {
    preferences: PreferenceStore,
    navigation: NavigationController,
    connectivity: ConnectivityMonitor,
    leagues: LeagueDirectory,
    logos: LogoResolver,
    opener: Arc<dyn Opener>,
    stream: StreamPanel,
    translator: Translator,
    reload_requested: bool,
}

impl AppShell {
    /// Start the shell: open storage, load preferences, start monitoring
    pub fn new(config: ShellConfig, network: Arc<dyn NetworkEnvironment>) -> Self {
        Self::with_opener(config, network, Arc::new(SystemBrowser))
    }

    /// Start the shell with a custom outbound opener
    pub fn with_opener(
        config: ShellConfig,
        network: Arc<dyn NetworkEnvironment>,
        opener: Arc<dyn Opener>,
    ) -> Self {
        let (storage, fell_back) = open_or_memory(config.storage);
        if fell_back {
            tracing::info!("running with in-memory preferences");
        }

        let preferences = PreferenceStore::new(storage, config.preferences);
        let connectivity = ConnectivityMonitor::new(network);
        let translator = translator_for(preferences.active_locale());

        tracing::info!(
            online = connectivity.is_online(),
            locale = preferences.active_locale(),
            "shell started"
        );

        Self {
            preferences,
            navigation: NavigationController::new(),
            connectivity,
            leagues: LeagueDirectory::new(),
            logos: LogoResolver::new(),
            opener,
            stream: StreamPanel::new(HotMatch::default()),
            translator,
            reload_requested: false,
        }
    }

    // ===== Navigation =====

    /// Active top-level view
    pub fn active_view(&self) -> View {
        self.navigation.active_view()
    }

    /// Open modal, if any
    pub fn active_modal(&self) -> Option<ModalKind> {
        self.navigation.active_modal()
    }

    /// Switch views; closes any open modal. Leaving Live discards the
    /// stream panel's error.
    pub fn select_view(&mut self, view: View) {
        if view != View::Live && self.stream.dismiss_error() {
            tracing::debug!(?view, "stream error discarded on leaving live view");
        }
        self.navigation.select_view(view);
    }

    /// Open a modal on the current view
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.navigation.open_modal(kind);
    }

    /// Close the open modal
    pub fn close_modal(&mut self) -> bool {
        self.navigation.close_modal()
    }

    /// Navigation state (read-only)
    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    // ===== Live view =====

    /// Stream panel state
    pub fn stream_panel(&self) -> &StreamPanel {
        &self.stream
    }

    /// Watch the hot match, checking connectivity now. Only the Live view
    /// offers the action.
    pub fn watch_hot_match(&mut self) -> WatchOutcome {
        if self.navigation.active_view() != View::Live {
            tracing::debug!(view = ?self.navigation.active_view(), "watch ignored outside live view");
            return WatchOutcome::Inactive;
        }
        let online = self.connectivity.is_online();
        self.stream.watch(online, self.opener.as_ref())
    }

    /// Dismiss the stream error
    pub fn dismiss_stream_error(&mut self) -> bool {
        self.stream.dismiss_error()
    }

    /// League catalog
    pub fn leagues(&self) -> &LeagueDirectory {
        &self.leagues
    }

    /// Open a league's official site
    pub fn open_league(&self, id: &str) -> bool {
        match self.leagues.lookup(id) {
            Some(league) => launch(self.opener.as_ref(), league.link),
            None => {
                tracing::warn!(id, "unknown league");
                false
            }
        }
    }

    /// What a league tile shows
    pub fn league_logo(&self, id: &str, loader: &dyn LogoLoader) -> Option<LogoDisplay> {
        self.leagues.lookup(id).map(|league| self.logos.resolve(league, loader))
    }

    // ===== Outbound links =====

    /// Open the news feed
    pub fn open_news(&self) -> bool {
        launch(self.opener.as_ref(), NEWS_FEED_URL)
    }

    /// Open the analyst dashboard
    pub fn open_dashboard(&self) -> bool {
        launch(self.opener.as_ref(), ANALYST_DASHBOARD_URL)
    }

    /// Top bar shortcut to live scores
    pub fn open_live_scores(&self) -> bool {
        launch(self.opener.as_ref(), LIVE_SCORES_URL)
    }

    // ===== Preferences =====

    /// Read handle on the active theme
    pub fn theme_context(&self) -> ThemeContext {
        self.preferences.theme_context()
    }

    /// Active theme
    pub fn active_theme(&self) -> Theme {
        self.preferences.active_theme()
    }

    /// Select a catalog theme by name
    pub fn select_theme(&mut self, name: &str) -> Result<Theme> {
        self.preferences.select_theme(name)
    }

    /// Active locale code
    pub fn active_locale(&self) -> &str {
        self.preferences.active_locale()
    }

    /// Change the UI language
    pub fn select_locale(&mut self, code: &str) -> Result<()> {
        self.preferences.set_active_locale(code)?;
        self.translator = translator_for(self.preferences.active_locale());
        Ok(())
    }

    /// Locale save feedback
    pub fn save_status(&self) -> LocaleSaveStatus {
        self.preferences.save_status()
    }

    /// Localized text of the save feedback, if any is visible
    pub fn save_notice(&self) -> Option<String> {
        match self.save_status() {
            LocaleSaveStatus::Idle => None,
            LocaleSaveStatus::Saving { .. } => Some(self.translator.text("language-saving")),
            LocaleSaveStatus::Saved { code } => {
                let name = find_locale(&code).map(|l| l.name).unwrap_or(code.as_str());
                Some(self.translator.text_with("language-saved", &[("language", name)]))
            }
        }
    }

    /// Preference store (read-only)
    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Localized message
    pub fn text(&self, id: &str) -> String {
        self.translator.text(id)
    }

    /// Localized label of a view
    pub fn view_label(&self, view: View) -> String {
        self.translator.text(view.label_id())
    }

    // ===== Connectivity =====

    /// Current connectivity
    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    /// Subscribe to connectivity changes
    pub fn subscribe_connectivity(&self) -> watch::Receiver<bool> {
        self.connectivity.subscribe()
    }

    /// Blocking banner while offline
    pub fn offline_banner(&self) -> Option<OfflineBanner> {
        if self.connectivity.is_online() {
            return None;
        }
        Some(OfflineBanner {
            message: self.translator.text("offline-banner"),
            reload_label: self.translator.text("reload"),
        })
    }

    /// The banner's reload action. Only records the request; the host
    /// performs one full reload and nothing is retried here.
    pub fn request_reload(&mut self) {
        tracing::info!("reload requested");
        self.reload_requested = true;
    }

    /// Take a pending reload request
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// Stop observing the environment
    pub fn shutdown(&mut self) {
        self.connectivity.teardown();
    }
}

impl std::fmt::Debug for AppShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppShell")
            .field("navigation", &self.navigation)
            .field("connectivity", &self.connectivity)
            .field("preferences", &self.preferences)
            .field("stream", &self.stream)
            .finish()
    }
}

fn translator_for(code: &str) -> Translator {
    match Translator::new(code) {
        Ok(translator) => translator,
        Err(e) => {
            tracing::warn!(code, error = %e, "translation unavailable, using message ids");
            Translator::empty()
        }
    }
}
