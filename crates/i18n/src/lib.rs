//! Internationalization for OPTATV
//!
//! This crate provides the locale catalog, locale validation, language
//! negotiation, and Fluent message formatting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::{
    all_locales, default_locale, find_locale, validate_locale, I18nError, Locale, Result,
    DEFAULT_LOCALE, LOCALES,
};
pub use translator::{negotiate, Translator};
