//! League directory
//!
//! An immutable, ordered catalog of competitions. Each entry carries its own
//! styling, so rendering never switches on the display name.
//!
//! Logos are optional decorations: when one fails to load, that league shows
//! its icon for the rest of the session while every other league keeps trying
//! its own logo.

use std::collections::HashSet;

use parking_lot::RwLock;
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Entries
// =============================================================================

/// Accent styling of a league tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    /// Gradient start color
    pub gradient_from: &'static str,
    /// Gradient end color
    pub gradient_to: &'static str,
    /// Icon color
    pub text: &'static str,
    /// Border color, `#rrggbbaa`
    pub border: &'static str,
}

const TILE_BASE: &str = "#0f172a";

/// A competition with its link and tile styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct League {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Compact label shown under the tile
    pub short_label: &'static str,
    /// Icon shown when no logo is available
    pub icon: &'static str,
    /// Logo image locator
    pub logo: Option<&'static str>,
    /// Tile styling
    pub accent: Accent,
    /// Official site
    pub link: &'static str,
}

const LEAGUES: &[League] = &[
    League {
        id: "champions-league",
        name: "Champions League",
        short_label: "UCL",
        icon: "fa-star",
        logo: Some("https://upload.wikimedia.org/wikipedia/en/b/bf/UEFA_Champions_League_logo_2.svg"),
        accent: Accent {
            gradient_from: "#1e40af",
            gradient_to: TILE_BASE,
            text: "#60a5fa",
            border: "#3b82f64d",
        },
        link: "https://www.uefa.com/uefachampionsleague/",
    },
    League {
        id: "premier-league",
        name: "Premier League",
        short_label: "Premier",
        icon: "fa-crown",
        logo: Some("https://upload.wikimedia.org/wikipedia/en/f/f2/Premier_League_Logo.svg"),
        accent: Accent {
            gradient_from: "#6b21a8",
            gradient_to: TILE_BASE,
            text: "#c084fc",
            border: "#a855f74d",
        },
        link: "https://www.premierleague.com/en/",
    },
    League {
        id: "la-liga",
        name: "La Liga",
        short_label: "La Liga",
        icon: "fa-futbol",
        logo: Some("https://upload.wikimedia.org/wikipedia/commons/thumb/0/0f/LaLiga_logo_2023.svg/800px-LaLiga_logo_2023.svg.png"),
        accent: Accent {
            gradient_from: "#9a3412",
            gradient_to: TILE_BASE,
            text: "#fb923c",
            border: "#f973164d",
        },
        link: "https://www.laliga.com/en-GB",
    },
    League {
        id: "serie-a",
        name: "Serie A",
        short_label: "Serie A",
        icon: "fa-shield",
        logo: Some("https://upload.wikimedia.org/wikipedia/commons/thumb/e/e9/Serie_A_logo_2019.svg/800px-Serie_A_logo_2019.svg.png"),
        accent: Accent {
            gradient_from: "#155e75",
            gradient_to: TILE_BASE,
            text: "#22d3ee",
            border: "#06b6d44d",
        },
        link: "https://www.legaseriea.it/en",
    },
    League {
        id: "bundesliga",
        name: "Bundesliga",
        short_label: "Bundesliga",
        icon: "fa-person-running",
        logo: Some("https://upload.wikimedia.org/wikipedia/en/d/df/Bundesliga_logo_%282017%29.svg"),
        accent: Accent {
            gradient_from: "#991b1b",
            gradient_to: TILE_BASE,
            text: "#f87171",
            border: "#ef44444d",
        },
        link: "https://www.bundesliga.com/en/bundesliga/table",
    },
    League {
        id: "ligue-1",
        name: "Ligue 1",
        short_label: "Ligue 1",
        icon: "fa-certificate",
        logo: Some("https://upload.wikimedia.org/wikipedia/en/c/c2/Ligue_1_Logo.svg"),
        accent: Accent {
            gradient_from: "#3f6212",
            gradient_to: TILE_BASE,
            text: "#a3e635",
            border: "#84cc164d",
        },
        link: "https://ligue1.com/en",
    },
    League {
        id: "mls",
        name: "MLS",
        short_label: "MLS",
        icon: "fa-flag-usa",
        logo: Some("https://upload.wikimedia.org/wikipedia/commons/thumb/7/76/MLS_crest_logo_RGB_gradient.svg/800px-MLS_crest_logo_RGB_gradient.svg.png"),
        accent: Accent {
            gradient_from: "#3730a3",
            gradient_to: TILE_BASE,
            text: "#818cf8",
            border: "#6366f14d",
        },
        link: "https://www.mlssoccer.com/schedule/scores#competition=all&club=all&date=2025-11-30",
    },
];

/// Derive the compact tile label from a display name
pub fn short_label_for(name: &str) -> String {
    name.replace(" League", "").replace("Champions", "UCL")
}

/// Read-only access to the league catalog
#[derive(Debug, Clone, Copy)]
pub struct LeagueDirectory {
    leagues: &'static [League],
}

impl Default for LeagueDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl LeagueDirectory {
    /// The built-in catalog
    pub fn new() -> Self {
        Self { leagues: LEAGUES }
    }

    /// Leagues in display order
    pub fn list(&self) -> &'static [League] {
        self.leagues
    }

    /// Find a league by id
    pub fn lookup(&self, id: &str) -> Option<&'static League> {
        self.leagues.iter().find(|l| l.id == id)
    }

    /// Number of leagues
    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }
}

// =============================================================================
// Logo resolution
// =============================================================================

/// Why a logo could not be shown
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LogoError {
    /// The image could not be fetched
    #[error("Logo fetch failed: {0}")]
    Network(String),

    /// The image data could not be decoded
    #[error("Logo decode failed: {0}")]
    Decode(String),
}

/// A loaded logo, ready for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    /// Locator the image was loaded from
    pub source: String,
}

/// Loads logo images. The host's image pipeline implements this.
pub trait LogoLoader: Send + Sync {
    /// Load the logo behind `locator`
    fn load(&self, locator: &str) -> Result<LogoImage, LogoError>;
}

/// What a league tile shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoDisplay {
    /// The league's logo
    Image(LogoImage),
    /// The league's fallback icon
    Icon(&'static str),
}

impl LogoDisplay {
    /// Check if this is the fallback icon
    pub fn is_icon(&self) -> bool {
        matches!(self, LogoDisplay::Icon(_))
    }
}

/// Resolves tiles to a logo or icon, remembering failures per league
#[derive(Debug, Default)]
pub struct LogoResolver {
    failed: RwLock<HashSet<&'static str>>,
}

impl LogoResolver {
    /// Create a resolver with no recorded failures
    pub fn new() -> Self {
        Self::default()
    }

    /// Logo for `league`, or its icon when it has none or it failed before
    pub fn resolve(&self, league: &League, loader: &dyn LogoLoader) -> LogoDisplay {
        let Some(locator) = league.logo else {
            return LogoDisplay::Icon(league.icon);
        };
        if self.has_failed(league.id) {
            return LogoDisplay::Icon(league.icon);
        }

        match loader.load(locator) {
            Ok(image) => LogoDisplay::Image(image),
            Err(e) => {
                tracing::debug!(league = league.id, error = %e, "logo unavailable, using icon");
                self.failed.write().insert(league.id);
                LogoDisplay::Icon(league.icon)
            }
        }
    }

    /// Whether a league's logo already failed this session
    pub fn has_failed(&self, id: &str) -> bool {
        self.failed.read().contains(id)
    }
}

// =============================================================================
// Tests
// =============================================================================
