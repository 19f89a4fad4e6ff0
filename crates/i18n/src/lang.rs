//! Supported locales
//!
//! The catalog is fixed at compile time; its first entry is the default.

use serde::Serialize;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Locale code used when nothing valid is persisted
pub const DEFAULT_LOCALE: &str = "en";

/// i18n error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Not a syntactically valid language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidIdentifier(String),

    /// Valid identifier, but not one the app offers
    #[error("Unsupported locale: {0}")]
    Unsupported(String),

    /// A bundled translation resource failed to load
    #[error("Translation resource for {locale} is invalid: {reason}")]
    Resource {
        /// Locale of the broken resource
        locale: String,
        /// Parser or bundle error description
        reason: String,
    },
}

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// A selectable UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Locale {
    /// Short code, e.g. `en`
    pub code: &'static str,
    /// Name shown in the language picker
    pub name: &'static str,
    /// Region label shown under the name
    pub region: &'static str,
}

impl Locale {
    /// Parse this locale's code as a language identifier
    pub fn language_id(&self) -> LanguageIdentifier {
        // Catalog codes are checked by `test_catalog_codes_parse`
        self.code.parse().unwrap_or_default()
    }
}

/// All locales in display order
pub const LOCALES: &[Locale] = &[
    Locale { code: "en", name: "English", region: "Global" },
    Locale { code: "am", name: "Amharic", region: "Ethiopia" },
    Locale { code: "fr", name: "French", region: "France" },
    Locale { code: "es", name: "Spanish", region: "Spain" },
    Locale { code: "pt", name: "Portuguese", region: "Brazil" },
    Locale { code: "ar", name: "Arabic", region: "Middle East" },
];

/// Get all locales in display order
pub fn all_locales() -> &'static [Locale] {
    LOCALES
}

/// The default locale (first catalog entry)
pub fn default_locale() -> &'static Locale {
    &LOCALES[0]
}

/// Look up a catalog entry by exact code
pub fn find_locale(code: &str) -> Option<&'static Locale> {
    LOCALES.iter().find(|l| l.code == code)
}

/// Validate a locale code: it must parse as a language identifier and belong
/// to the catalog. Case and separators are normalized, so `EN` matches `en`.
pub fn validate_locale(code: &str) -> Result<&'static Locale> {
    let id: LanguageIdentifier = code
        .trim()
        .parse()
        .map_err(|_| I18nError::InvalidIdentifier(code.to_string()))?;

    let normalized = id.to_string();
    find_locale(&normalized).ok_or(I18nError::Unsupported(normalized))
}
