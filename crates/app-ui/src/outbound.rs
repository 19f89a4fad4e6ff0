//! Outbound navigation
//!
//! Every watch, read and explore action opens an absolute URL in a new,
//! unrelated browsing context: no handle to it is kept, no referrer is sent,
//! and the opened page cannot navigate the app. Launches are fire and forget.

use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;

/// Default stream target for the hot match
pub const HOT_MATCH_STREAM_URL: &str = "https://www.camel1.live/q/home/hotmatch";

/// Football news aggregator
pub const NEWS_FEED_URL: &str = "https://news.google.com/topics/CAAqJQgKIh9DQkFTRVFvSUwyMHZNREoyZURRU0JXVnVMVWRDS0FBUAE?hl=en-ET&gl=ET&ceid=ET%3Aen";

/// Analyst statistics dashboard
pub const ANALYST_DASHBOARD_URL: &str = "https://theanalyst.com/competition/premier-league";

/// Live scores site behind the top bar shortcut
pub const LIVE_SCORES_URL: &str = "https://www.livescore.com/en/";

/// Browsing context every outbound link opens in
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// Link relation that severs the opener and referrer
pub const ISOLATED_REL: &str = "noopener noreferrer";

/// Outbound navigation error types
#[derive(Debug, Error)]
pub enum OutboundError {
    /// Not an absolute http(s) URL
    #[error("Invalid outbound URL: {0}")]
    InvalidUrl(String),

    /// The platform could not launch the destination
    #[error("Failed to launch {url}: {source}")]
    Launch {
        /// Destination that failed
        url: String,
        /// Platform error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for outbound navigation
pub type Result<T> = std::result::Result<T, OutboundError>;

/// A request to open a destination in a new, unrelated browsing context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundRequest {
    url: String,
    target: &'static str,
    rel: &'static str,
}

impl OutboundRequest {
    /// Build a request for an absolute `http`/`https` URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if !is_absolute_http_url(&url) {
            return Err(OutboundError::InvalidUrl(url));
        }
        Ok(Self { url, target: NEW_CONTEXT_TARGET, rel: ISOLATED_REL })
    }

    /// Destination URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Browsing context target (always `_blank`)
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Link relation (always `noopener noreferrer`)
    pub fn rel(&self) -> &'static str {
        self.rel
    }
}

fn is_absolute_http_url(url: &str) -> bool {
    let rest = match url.split_once("://") {
        Some(("http", rest)) | Some(("https", rest)) => rest,
        _ => return false,
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty() && !url.chars().any(char::is_whitespace)
}

/// Something that can open an outbound request
pub trait Opener: Send + Sync {
    /// Open the destination. Must not block on the destination loading.
    fn open(&self, request: &OutboundRequest) -> Result<()>;
}

/// Opens destinations in the system's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Opener for SystemBrowser {
    fn open(&self, request: &OutboundRequest) -> Result<()> {
        // A separate browser process shares nothing with this app, which is
        // what noopener/noreferrer ask for.
        open::that_detached(request.url()).map_err(|source| OutboundError::Launch {
            url: request.url().to_string(),
            source,
        })
    }
}

/// Records requests instead of launching them, for headless hosts and tests
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<OutboundRequest>>,
}

impl RecordingOpener {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request opened so far, oldest first
    pub fn opened(&self) -> Vec<OutboundRequest> {
        self.opened.lock().clone()
    }

    /// URLs opened so far, oldest first
    pub fn opened_urls(&self) -> Vec<String> {
        self.opened.lock().iter().map(|r| r.url.clone()).collect()
    }
}

impl Opener for RecordingOpener {
    fn open(&self, request: &OutboundRequest) -> Result<()> {
        self.opened.lock().push(request.clone());
        Ok(())
    }
}

/// Fire-and-forget launch. Failures are logged and reported as `false`; they
/// are never retried.
pub fn launch(opener: &dyn Opener, url: &str) -> bool {
    let request = match OutboundRequest::new(url) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "outbound link rejected");
            return false;
        }
    };

    match opener.open(&request) {
        Ok(()) => {
            tracing::info!(url = request.url(), "opened outbound link");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "outbound link failed to open");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingOpener;

    impl Opener for FailingOpener {
        fn open(&self, request: &OutboundRequest) -> Result<()> {
            Err(OutboundError::Launch {
                url: request.url().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"),
            })
        }
    }

    #[test]
    fn test_request_is_isolated() {
        let request = OutboundRequest::new(LIVE_SCORES_URL).unwrap();
        assert_eq!(request.url(), LIVE_SCORES_URL);
        assert_eq!(request.target(), "_blank");
        assert_eq!(request.rel(), "noopener noreferrer");
    }

    #[test]
    fn test_fixed_destinations_are_valid() {
        for url in [HOT_MATCH_STREAM_URL, NEWS_FEED_URL, ANALYST_DASHBOARD_URL, LIVE_SCORES_URL] {
            assert!(OutboundRequest::new(url).is_ok(), "{}", url);
        }
    }

    #[test]
    fn test_rejects_non_absolute_urls() {
        for url in [
            "/relative/path",
            "www.example.com",
            "javascript:alert(1)",
            "ftp://example.com",
            "https://",
            "https:///path",
            "https://exa mple.com",
        ] {
            assert!(
                matches!(OutboundRequest::new(url), Err(OutboundError::InvalidUrl(_))),
                "{} should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_launch_records_request() {
        let opener = RecordingOpener::new();
        assert!(launch(&opener, ANALYST_DASHBOARD_URL));
        assert_eq!(opener.opened_urls(), vec![ANALYST_DASHBOARD_URL.to_string()]);
    }

    #[test]
    fn test_launch_invalid_url_opens_nothing() {
        let opener = RecordingOpener::new();
        assert!(!launch(&opener, "not a url"));
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn test_launch_failure_is_not_fatal() {
        assert!(!launch(&FailingOpener, NEWS_FEED_URL));
    }

    #[test]
    fn test_request_serialization() {
        let request = OutboundRequest::new(LIVE_SCORES_URL).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["target"], "_blank");
        assert_eq!(json["rel"], "noopener noreferrer");
    }
}
