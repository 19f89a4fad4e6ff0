//! View content
//!
//! Views are stateless presentations over fixed content, the league directory
//! and the preference store. The one piece of view-local state is the stream
//! panel's dismissible connection error.

use i18n::{all_locales, Locale};
use serde::{Deserialize, Serialize};

use crate::outbound::{
    launch, Opener, ANALYST_DASHBOARD_URL, HOT_MATCH_STREAM_URL, NEWS_FEED_URL,
};
use crate::theme::{all_themes, Theme};

// =============================================================================
// Hot match
// =============================================================================

/// Match state as shown on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// In play
    #[serde(rename = "LIVE")]
    Live,
    /// Half time
    #[serde(rename = "HT")]
    HalfTime,
    /// Finished
    #[serde(rename = "FT")]
    FullTime,
    /// Not started
    #[serde(rename = "UPCOMING")]
    Upcoming,
}

/// The match promoted on the Live view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotMatch {
    /// Home side
    pub home: String,
    /// Away side
    pub away: String,
    /// Clock or kickoff time
    pub time: String,
    /// Score line, or `vs` before kickoff
    pub score: String,
    /// Match state
    pub status: MatchStatus,
    /// Competition name
    pub league: String,
    /// Stream destination; the default hot match stream when absent
    pub stream_url: Option<String>,
}

impl Default for HotMatch {
    fn default() -> Self {
        Self {
            home: "Real Madrid".into(),
            away: "Man City".into(),
            time: "78'".into(),
            score: "2 - 2".into(),
            status: MatchStatus::Live,
            league: "Champions League".into(),
            stream_url: Some(HOT_MATCH_STREAM_URL.into()),
        }
    }
}

impl HotMatch {
    /// Where the watch action goes
    pub fn stream_target(&self) -> &str {
        self.stream_url.as_deref().unwrap_or(HOT_MATCH_STREAM_URL)
    }
}

// =============================================================================
// Stream panel
// =============================================================================

/// Shown when the watch action is taken while offline
pub const OFFLINE_MESSAGE: &str = "No internet connection. Please check your network.";

/// Result of the watch action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The stream destination was launched
    Opened,
    /// Offline; nothing was opened and the error is showing
    Offline,
    /// Online, but the launch itself failed
    LaunchFailed,
    /// The Live view is not showing; nothing happened
    Inactive,
}

/// Live view stream card with its local error slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamPanel {
    hot_match: HotMatch,
    error: Option<&'static str>,
}

impl StreamPanel {
    /// Panel for a given match
    pub fn new(hot_match: HotMatch) -> Self {
        Self { hot_match, error: None }
    }

    /// Match on display
    pub fn hot_match(&self) -> &HotMatch {
        &self.hot_match
    }

    /// Visible error message, if any
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Watch action. `online` must be read at the moment of the action.
    /// Offline repeats do not stack errors: the slot holds one message.
    pub fn watch(&mut self, online: bool, opener: &dyn Opener) -> WatchOutcome {
        if !online {
            tracing::warn!("stream requested while offline");
            self.error = Some(OFFLINE_MESSAGE);
            return WatchOutcome::Offline;
        }

        self.error = None;
        if launch(opener, self.hot_match.stream_target()) {
            WatchOutcome::Opened
        } else {
            WatchOutcome::LaunchFailed
        }
    }

    /// Clear the error. Returns whether one was showing.
    pub fn dismiss_error(&mut self) -> bool {
        self.error.take().is_some()
    }
}

// =============================================================================
// News and OPTA
// =============================================================================

/// A full-bleed card whose only action is an outbound link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkCard {
    /// View heading
    pub heading: &'static str,
    /// Content provider
    pub provider: &'static str,
    /// Card headline
    pub headline: &'static str,
    /// Blurb under the headline
    pub description: &'static str,
    /// Message id of the action button
    pub action_id: &'static str,
    /// Destination
    pub url: &'static str,
}

/// News view card
pub const NEWS_CARD: LinkCard = LinkCard {
    heading: "Headlines",
    provider: "Google News",
    headline: "World Football News Hub",
    description: "Get breaking stories, live transfer updates, and in-depth match analysis from top sources around the globe.",
    action_id: "open-news-feed",
    url: NEWS_FEED_URL,
};

/// OPTA view card
pub const OPTA_CARD: LinkCard = LinkCard {
    heading: "Statistics",
    provider: "The Analyst",
    headline: "Elite Football Intelligence",
    description: "Deep dive into advanced player metrics, team performance data, and predictive models across all major leagues.",
    action_id: "launch-dashboard",
    url: ANALYST_DASHBOARD_URL,
};

// =============================================================================
// Settings
// =============================================================================

/// A theme swatch on the Settings view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSwatch {
    /// The theme
    pub theme: Theme,
    /// Whether it is the active theme
    pub selected: bool,
}

/// Swatches for every catalog theme, marking the active one
pub fn theme_swatches(active: &Theme) -> Vec<ThemeSwatch> {
    all_themes()
        .into_iter()
        .map(|theme| {
            let selected = theme.name == active.name;
            ThemeSwatch { theme, selected }
        })
        .collect()
}

/// A language row on the Settings view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// The locale
    pub locale: Locale,
    /// Whether it is the active locale
    pub selected: bool,
}

/// Rows for every catalog locale, marking the active one
pub fn language_options(active_code: &str) -> Vec<LanguageOption> {
    all_locales()
        .iter()
        .map(|locale| LanguageOption { locale: *locale, selected: locale.code == active_code })
        .collect()
}

/// A numbered entry in the tips dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    /// Position, starting at 1
    pub number: u8,
    /// Title
    pub title: &'static str,
    /// Body text
    pub body: &'static str,
}

/// Tips & Tricks dialog content
pub const TIPS: [Tip; 4] = [
    Tip {
        number: 1,
        title: "Customize Your Vibe",
        body: "Head to the General settings above to toggle between 6 neon themes. \"Neon Green\" is classic, but \"Cyber Blue\" offers great contrast for night viewing.",
    },
    Tip {
        number: 2,
        title: "Seamless Streaming",
        body: "On the Live tab, the large \"Stream Now\" button always connects to the hottest match of the moment. Use the \"Mini Apps\" below it to visit official league sites for schedules.",
    },
    Tip {
        number: 3,
        title: "Deep Dive Stats",
        body: "The OPTA tab links directly to \"The Analyst\". Open it in a new tab alongside the stream to watch the game and track xG (Expected Goals) in real-time.",
    },
    Tip {
        number: 4,
        title: "Install as App",
        body: "For the best experience on mobile, tap \"Share\" then \"Add to Home Screen\" on your browser to use OPTATV like a native app.",
    },
];

/// A section of the privacy dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicySection {
    /// Section icon
    pub icon: &'static str,
    /// Section title
    pub title: &'static str,
    /// Section text
    pub body: &'static str,
}

/// Privacy Policy dialog content
pub const PRIVACY_SECTIONS: [PolicySection; 3] = [
    PolicySection {
        icon: "fa-user-shield",
        title: "Data Collection",
        body: "OPTATV prioritizes your anonymity. We do not require account registration for basic streaming. Any data collected (such as app preferences) is stored locally on your device unless you choose to sync via cloud sign-in.",
    },
    PolicySection {
        icon: "fa-up-right-from-square",
        title: "External Links",
        body: "Our service provides access to third-party content (streaming sources, news feeds, statistical dashboards). These external sites operate independently. We are not responsible for their content or privacy practices. We recommend reviewing the policies of any external site you visit.",
    },
    PolicySection {
        icon: "fa-cookie-bite",
        title: "Cookies & Local Storage",
        body: "We use local storage technologies to remember your theme settings and preferred language. No tracking cookies are used for advertising purposes within the app interface.",
    },
];

/// Footer of the privacy dialog
pub const PRIVACY_LAST_UPDATED: &str = "Last Updated: January 2025";

/// Footer of the Settings view
pub const VERSION_LINE: &str = "Version 1.0.1 (Build 2025) by MENKIR";

/// A row in the Community section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommunityRow {
    /// Row icon
    pub icon: &'static str,
    /// Row label
    pub label: &'static str,
}

/// Community section rows
pub const COMMUNITY_ROWS: [CommunityRow; 2] = [
    CommunityRow { icon: "fa-share-nodes", label: "Share OPTATV" },
    CommunityRow { icon: "fa-twitter", label: "Follow Updates" },
];

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::RecordingOpener;
    use crate::theme::{default_theme, find_theme};

    #[test]
    fn test_default_hot_match() {
        let hot = HotMatch::default();
        assert_eq!(hot.home, "Real Madrid");
        assert_eq!(hot.status, MatchStatus::Live);
        assert_eq!(hot.stream_target(), HOT_MATCH_STREAM_URL);
    }

    #[test]
    fn test_stream_target_falls_back() {
        let hot = HotMatch { stream_url: None, ..HotMatch::default() };
        assert_eq!(hot.stream_target(), HOT_MATCH_STREAM_URL);

        let custom = HotMatch {
            stream_url: Some("https://example.com/stream".into()),
            ..HotMatch::default()
        };
        assert_eq!(custom.stream_target(), "https://example.com/stream");
    }

    #[test]
    fn test_watch_online_opens_stream() {
        let opener = RecordingOpener::new();
        let mut panel = StreamPanel::default();

        assert_eq!(panel.watch(true, &opener), WatchOutcome::Opened);
        assert_eq!(opener.opened_urls(), vec![HOT_MATCH_STREAM_URL.to_string()]);
        assert_eq!(panel.error(), None);
    }

    #[test]
    fn test_watch_offline_shows_single_error() {
        let opener = RecordingOpener::new();
        let mut panel = StreamPanel::default();

        assert_eq!(panel.watch(false, &opener), WatchOutcome::Offline);
        assert_eq!(panel.watch(false, &opener), WatchOutcome::Offline);
        assert_eq!(panel.error(), Some(OFFLINE_MESSAGE));
        assert!(opener.opened().is_empty());

        assert!(panel.dismiss_error());
        assert_eq!(panel.error(), None);
        assert!(!panel.dismiss_error());
    }

    #[test]
    fn test_successful_watch_clears_error() {
        let opener = RecordingOpener::new();
        let mut panel = StreamPanel::default();
        panel.watch(false, &opener);
        panel.watch(true, &opener);
        assert_eq!(panel.error(), None);
    }

    #[test]
    fn test_match_status_wire_names() {
        assert_eq!(serde_json::to_string(&MatchStatus::HalfTime).unwrap(), "\"HT\"");
        let status: MatchStatus = serde_json::from_str("\"UPCOMING\"").unwrap();
        assert_eq!(status, MatchStatus::Upcoming);
    }

    #[test]
    fn test_hot_match_json() {
        let json = serde_json::to_value(HotMatch::default()).unwrap();
        assert_eq!(json["streamUrl"], HOT_MATCH_STREAM_URL);
        assert_eq!(json["status"], "LIVE");
    }

    #[test]
    fn test_theme_swatches_mark_active() {
        let active = find_theme("Electric Purple").unwrap();
        let swatches = theme_swatches(&active);
        assert_eq!(swatches.len(), 6);
        let selected: Vec<_> = swatches.iter().filter(|s| s.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].theme, active);
        assert!(theme_swatches(&default_theme())[0].selected);
    }

    #[test]
    fn test_language_options_mark_active() {
        let options = language_options("pt");
        assert_eq!(options.len(), 6);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).map(|o| o.locale.code).collect();
        assert_eq!(selected, ["pt"]);
    }

    #[test]
    fn test_static_content() {
        let numbers: Vec<_> = TIPS.iter().map(|t| t.number).collect();
        assert_eq!(numbers, [1, 2, 3, 4]);
        let titles: Vec<_> = PRIVACY_SECTIONS.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Data Collection", "External Links", "Cookies & Local Storage"]);
        assert_eq!(NEWS_CARD.url, NEWS_FEED_URL);
        assert_eq!(OPTA_CARD.url, ANALYST_DASHBOARD_URL);
    }
}
