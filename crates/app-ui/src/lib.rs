//! User interface state for OPTATV
//!
//! This crate provides the presentation layer: the theme context, display
//! preferences, navigation, the league directory, outbound links, view
//! content, and the application shell that wires them together.
//!
//! # Modules
//!
//! - [`theme`] - Accent theme catalog and the shared theme context
//! - [`preferences`] - Persisted theme and locale preferences
//! - [`navigation`] - Active view and view-scoped modal
//! - [`leagues`] - League catalog and logo fallback
//! - [`outbound`] - Isolated, fire-and-forget outbound links
//! - [`views`] - Hot match, stream panel and static view content
//! - [`shell`] - Application shell
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use app_ui::{AppShell, ShellConfig, View, ModalKind, RecordingOpener};
//! use networking::ManualNetwork;
//!
//! let network = Arc::new(ManualNetwork::new(true));
//! let mut shell = AppShell::with_opener(
//!     ShellConfig::default(),
//!     network,
//!     Arc::new(RecordingOpener::new()),
//! );
//!
//! shell.select_view(View::Settings);
//! shell.open_modal(ModalKind::Tips);
//! shell.select_view(View::News);
//! assert_eq!(shell.active_modal(), None);
//!
//! let theme = shell.select_theme("Cyber Blue").unwrap();
//! assert_eq!(shell.theme_context().primary_color(), theme.color);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod leagues;
pub mod navigation;
pub mod outbound;
pub mod preferences;
pub mod shell;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use theme::{
    all_themes, default_theme, find_theme, find_theme_by_color, theme_context, Rgb, Theme,
    ThemeContext, ThemePublisher,
};

pub use preferences::{
    keys, load_locale, load_theme, LocaleSaveStatus, PreferenceConfig, PreferenceError,
    PreferenceStore,
};

pub use navigation::{ModalKind, NavigationController, View};

pub use leagues::{
    Accent, League, LeagueDirectory, LogoDisplay, LogoError, LogoImage, LogoLoader, LogoResolver,
};

pub use outbound::{
    launch, Opener, OutboundError, OutboundRequest, RecordingOpener, SystemBrowser,
};

pub use views::{
    theme_swatches, language_options, HotMatch, MatchStatus, StreamPanel, WatchOutcome,
    OFFLINE_MESSAGE,
};

pub use shell::{AppShell, OfflineBanner, ShellConfig};
