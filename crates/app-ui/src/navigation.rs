//! Navigation system for OPTATV
//!
//! The app has four fixed top-level views and one modal slot. Modals are
//! scoped to the view they were opened on: switching views always closes the
//! open modal, and closing a modal never changes the view.

use serde::{Deserialize, Serialize};

// =============================================================================
// Views
// =============================================================================

/// Top-level views, in bottom navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Hot match stream and competitions
    #[default]
    Live,
    /// News portal link
    News,
    /// Statistics dashboard link
    Opta,
    /// Display preferences, tips and legal
    Settings,
}

impl View {
    /// Get icon name for this view
    pub fn icon(&self) -> &'static str {
        match self {
            View::Live => "fa-tower-broadcast",
            View::News => "fa-newspaper",
            View::Opta => "fa-chart-simple",
            View::Settings => "fa-gear",
        }
    }

    /// Message id of this view's label
    pub fn label_id(&self) -> &'static str {
        match self {
            View::Live => "view-live",
            View::News => "view-news",
            View::Opta => "view-opta",
            View::Settings => "view-settings",
        }
    }

    /// Untranslated label
    pub fn label(&self) -> &'static str {
        match self {
            View::Live => "Live",
            View::News => "News",
            View::Opta => "OPTA",
            View::Settings => "Settings",
        }
    }

    /// Get all views in order
    pub fn all() -> [View; 4] {
        [View::Live, View::News, View::Opta, View::Settings]
    }
}

// =============================================================================
// Modals
// =============================================================================

/// Secondary dialogs that overlay the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    /// Tips & Tricks
    Tips,
    /// Privacy Policy
    Privacy,
}

impl ModalKind {
    /// Message id of the modal title
    pub fn title_id(&self) -> &'static str {
        match self {
            ModalKind::Tips => "modal-tips",
            ModalKind::Privacy => "modal-privacy",
        }
    }

    /// Untranslated title
    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::Tips => "Tips & Tricks",
            ModalKind::Privacy => "Privacy Policy",
        }
    }
}

// =============================================================================
// Navigation Controller
// =============================================================================

/// Owns the active view and the view-scoped modal slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationController {
    active_view: View,
    modal: Option<ModalKind>,
}

impl NavigationController {
    /// Start on the Live view with no modal
    pub fn new() -> Self {
        Self::default()
    }

    /// Current active view
    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Switch to a view. Any open modal belongs to the previous view context
    /// and is closed, even when re-selecting the active view.
    pub fn select_view(&mut self, view: View) {
        if let Some(modal) = self.modal.take() {
            tracing::debug!(?modal, "modal closed by view change");
        }
        if self.active_view != view {
            tracing::debug!(from = ?self.active_view, to = ?view, "view changed");
            self.active_view = view;
        }
    }

    /// Currently open modal, if any
    pub fn active_modal(&self) -> Option<ModalKind> {
        self.modal
    }

    /// Open a modal over the current view, replacing any open one
    pub fn open_modal(&mut self, kind: ModalKind) {
        if let Some(previous) = self.modal.replace(kind) {
            tracing::debug!(?previous, ?kind, "modal replaced");
        } else {
            tracing::debug!(?kind, view = ?self.active_view, "modal opened");
        }
    }

    /// Close the open modal (returns true if one was open)
    pub fn close_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavigationController::new();
        assert_eq!(nav.active_view(), View::Live);
        assert_eq!(nav.active_modal(), None);
    }

    #[test]
    fn test_last_selected_view_wins() {
        let mut nav = NavigationController::new();
        let sequence = [
            View::News,
            View::Settings,
            View::Settings,
            View::Opta,
            View::Live,
            View::News,
        ];

        for view in sequence {
            nav.select_view(view);
            assert_eq!(nav.active_view(), view);
        }
    }

    #[test]
    fn test_switching_views_closes_modal() {
        let mut nav = NavigationController::new();
        nav.select_view(View::Settings);
        nav.open_modal(ModalKind::Privacy);
        assert_eq!(nav.active_modal(), Some(ModalKind::Privacy));

        nav.select_view(View::News);
        assert_eq!(nav.active_view(), View::News);
        assert_eq!(nav.active_modal(), None);
    }

    #[test]
    fn test_reselecting_view_closes_modal() {
        let mut nav = NavigationController::new();
        nav.select_view(View::Settings);
        nav.open_modal(ModalKind::Tips);

        nav.select_view(View::Settings);
        assert_eq!(nav.active_view(), View::Settings);
        assert_eq!(nav.active_modal(), None);
    }

    #[test]
    fn test_close_modal_keeps_view() {
        let mut nav = NavigationController::new();
        nav.select_view(View::Settings);
        nav.open_modal(ModalKind::Tips);

        assert!(nav.close_modal());
        assert_eq!(nav.active_view(), View::Settings);
        assert!(!nav.close_modal());
    }

    #[test]
    fn test_modals_do_not_stack() {
        let mut nav = NavigationController::new();
        nav.select_view(View::Settings);
        nav.open_modal(ModalKind::Tips);
        nav.open_modal(ModalKind::Privacy);

        assert_eq!(nav.active_modal(), Some(ModalKind::Privacy));
        assert!(nav.close_modal());
        assert_eq!(nav.active_modal(), None);
    }

    #[test]
    fn test_view_labels_and_order() {
        let labels: Vec<_> = View::all().iter().map(|v| v.label()).collect();
        assert_eq!(labels, ["Live", "News", "OPTA", "Settings"]);
        assert_eq!(View::Opta.label_id(), "view-opta");
    }

    #[test]
    fn test_view_serialization() {
        assert_eq!(serde_json::to_string(&View::Opta).unwrap(), "\"opta\"");
        let parsed: View = serde_json::from_str("\"settings\"").unwrap();
        assert_eq!(parsed, View::Settings);
    }
}
