//! OPTATV
//!
//! Football streaming front-end shell: navigation views, a view-scoped modal,
//! a connectivity guard on the watch action, and theme and locale preferences
//! persisted to local storage.
//!
//! The member crates are re-exported here so hosts depend on one crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_ui;
pub use i18n;
pub use networking;
pub use storage;

pub use app_ui::{AppShell, ShellConfig};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a formatted `tracing` subscriber filtered by `RUST_LOG`
/// (default `info`). Returns false if a global subscriber already exists.
pub fn init_logging() -> bool {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
