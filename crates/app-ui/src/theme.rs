//! Color themes and the shared theme context
//!
//! A theme is a single accent color plus the same color as an `r,g,b`
//! triple, which renderers use for translucent glows and shadows.
//!
//! Renderers never read a global: they hold a [`ThemeContext`] and take
//! snapshots from it. The [`ThemePublisher`] half is owned by the preference
//! store, which is the only writer.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{default_theme, theme_context};
//!
//! let (publisher, context) = theme_context(default_theme());
//! assert_eq!(context.current().name, "Neon Green");
//! assert_eq!(context.primary_rgb().to_string(), "57,255,20");
//! # drop(publisher);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio::sync::watch;

/// CSS variable carrying the accent color
pub const PRIMARY_COLOR_VAR: &str = "--primary-color";

/// CSS variable carrying the accent color as an `r,g,b` triple
pub const PRIMARY_RGB_VAR: &str = "--primary-rgb";

/// Name given to a valid persisted color that matches no catalog entry
pub const CUSTOM_THEME_NAME: &str = "Custom";

// =============================================================================
// Color Types
// =============================================================================

/// Parse a `#rrggbb` hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to a lowercase hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// A color as a numeric channel triple, written `r,g,b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Channels of a `#rrggbb` color
    pub fn from_hex(hex: &str) -> Option<Self> {
        parse_hex_color(hex).map(|(r, g, b)| Rgb(r, g, b))
    }

    /// The same color as `#rrggbb`
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

/// Error parsing an `r,g,b` triple
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color triple: {0}")]
pub struct ParseRgbError(pub String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    /// Accepts `0,243,255` as well as the spaced `0, 243, 255` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels: Vec<u8> = s
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| ParseRgbError(s.to_string()))?;

        match channels.as_slice() {
            [r, g, b] => Ok(Rgb(*r, *g, *b)),
            _ => Err(ParseRgbError(s.to_string())),
        }
    }
}

// =============================================================================
// Themes
// =============================================================================

/// A named accent color configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theme {
    /// Display name
    pub name: String,
    /// Accent color as `#rrggbb`
    pub color: String,
    /// Accent color as a channel triple
    pub rgb: Rgb,
}

impl Theme {
    /// Create a theme from its parts
    pub fn new(name: impl Into<String>, color: impl Into<String>, rgb: Rgb) -> Self {
        Self { name: name.into(), color: color.into(), rgb }
    }

    /// Whether the color string is a well-formed `#rrggbb` value
    pub fn is_valid(&self) -> bool {
        parse_hex_color(&self.color).is_some()
    }

    /// CSS variables this theme sets on the presentation root
    pub fn css_variables(&self) -> [(&'static str, String); 2] {
        [
            (PRIMARY_COLOR_VAR, self.color.clone()),
            (PRIMARY_RGB_VAR, self.rgb.to_string()),
        ]
    }
}

/// Theme catalog in display order; the first entry is the default
const THEME_CATALOG: &[(&str, &str, Rgb)] = &[
    ("Neon Green", "#39ff14", Rgb(57, 255, 20)),
    ("Cyber Blue", "#00f3ff", Rgb(0, 243, 255)),
    ("Electric Purple", "#d946ef", Rgb(217, 70, 239)),
    ("Hot Pink", "#ff0099", Rgb(255, 0, 153)),
    ("Sunset Orange", "#ff5f1f", Rgb(255, 95, 31)),
    ("Golden Yellow", "#facc15", Rgb(250, 204, 21)),
];

/// Get all catalog themes in display order
pub fn all_themes() -> Vec<Theme> {
    THEME_CATALOG.iter().map(|(name, color, rgb)| Theme::new(*name, *color, *rgb)).collect()
}

/// The default theme (catalog entry 0)
pub fn default_theme() -> Theme {
    let (name, color, rgb) = THEME_CATALOG[0];
    Theme::new(name, color, rgb)
}

/// Look up a catalog theme by name
pub fn find_theme(name: &str) -> Option<Theme> {
    all_themes().into_iter().find(|t| t.name == name)
}

/// Look up a catalog theme by accent color (case-insensitive)
pub fn find_theme_by_color(color: &str) -> Option<Theme> {
    all_themes().into_iter().find(|t| t.color.eq_ignore_ascii_case(color))
}

// =============================================================================
// Theme Context
// =============================================================================

/// Read side of the active theme, handed to every rendering consumer
#[derive(Debug, Clone)]
pub struct ThemeContext {
    rx: watch::Receiver<Theme>,
}

impl ThemeContext {
    /// Snapshot of the active theme
    pub fn current(&self) -> Theme {
        self.rx.borrow().clone()
    }

    /// Value of `--primary-color`
    pub fn primary_color(&self) -> String {
        self.rx.borrow().color.clone()
    }

    /// Value of `--primary-rgb`
    pub fn primary_rgb(&self) -> Rgb {
        self.rx.borrow().rgb
    }

    /// Both CSS variables of the active theme
    pub fn css_variables(&self) -> [(&'static str, String); 2] {
        self.rx.borrow().css_variables()
    }

    /// Wait until the theme changes. Returns `false` once the publisher is
    /// gone and no further change can happen.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

/// Write side of the active theme
#[derive(Debug)]
pub struct ThemePublisher {
    tx: watch::Sender<Theme>,
}

impl ThemePublisher {
    /// Make `theme` the active theme for every context
    pub fn publish(&self, theme: Theme) {
        tracing::debug!(name = %theme.name, color = %theme.color, "theme applied");
        self.tx.send_replace(theme);
    }

    /// Currently published theme
    pub fn current(&self) -> Theme {
        self.tx.borrow().clone()
    }

    /// A new read handle
    pub fn context(&self) -> ThemeContext {
        ThemeContext { rx: self.tx.subscribe() }
    }
}

/// Create a publisher/context pair seeded with `initial`
pub fn theme_context(initial: Theme) -> (ThemePublisher, ThemeContext) {
    let (tx, rx) = watch::channel(initial);
    (ThemePublisher { tx }, ThemeContext { rx })
}

// =============================================================================
// Tests
// =============================================================================
