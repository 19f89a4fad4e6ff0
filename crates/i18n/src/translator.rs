//! Fluent-backed message translation
//!
//! Bundled `.ftl` resources cover a subset of the locale catalog. A requested
//! locale without its own resource negotiates down to English, and a message
//! missing from a translation falls back to the English text.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

use crate::lang::{I18nError, Result, DEFAULT_LOCALE};

/// Bundled translation resources, keyed by locale code
const RESOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.ftl")),
    ("fr", include_str!("../locales/fr.ftl")),
    ("es", include_str!("../locales/es.ftl")),
    ("pt", include_str!("../locales/pt.ftl")),
];

/// Locale codes that have a bundled translation
pub fn translated_locales() -> impl Iterator<Item = &'static str> {
    RESOURCES.iter().map(|(code, _)| *code)
}

fn resource_for(id: &LanguageIdentifier) -> Option<&'static str> {
    let code = id.to_string();
    RESOURCES.iter().find(|(c, _)| *c == code).map(|(_, src)| *src)
}

fn build_bundle(id: &LanguageIdentifier, source: &str) -> Result<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
        I18nError::Resource { locale: id.to_string(), reason: format!("{:?}", errors) }
    })?;

    let mut bundle = FluentBundle::new(vec![id.clone()]);
    // Plain strings for a terminal or test harness; no bidi isolation marks.
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).map_err(|errors| I18nError::Resource {
        locale: id.to_string(),
        reason: format!("{:?}", errors),
    })?;

    Ok(bundle)
}

/// Pick the best bundled locale for a requested code
pub fn negotiate(requested: &str) -> LanguageIdentifier {
    let default: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
    let available: Vec<LanguageIdentifier> =
        translated_locales().filter_map(|code| code.parse().ok()).collect();
    let requested: Vec<LanguageIdentifier> = requested.parse().ok().into_iter().collect();

    let negotiated =
        negotiate_languages(&requested, &available, Some(&default), NegotiationStrategy::Lookup)
            .first()
            .map(|id| (*id).clone());
    negotiated.unwrap_or(default)
}

/// Translates UI message ids for one locale
pub struct Translator {
    locale: LanguageIdentifier,
    bundle: FluentBundle<FluentResource>,
    fallback: Option<FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").field("locale", &self.locale).finish()
    }
}

impl Translator {
    /// Create a translator for the requested locale code
    pub fn new(requested: &str) -> Result<Self> {
        let locale = negotiate(requested);
        let source = resource_for(&locale)
            .ok_or_else(|| I18nError::Unsupported(locale.to_string()))?;
        let bundle = build_bundle(&locale, source)?;

        let fallback = if locale.to_string() == DEFAULT_LOCALE {
            None
        } else {
            let en: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
            let src = resource_for(&en).ok_or_else(|| I18nError::Unsupported(en.to_string()))?;
            Some(build_bundle(&en, src)?)
        };

        tracing::debug!(requested, resolved = %locale, "translator ready");
        Ok(Self { locale, bundle, fallback })
    }

    /// English translator
    pub fn english() -> Result<Self> {
        Self::new(DEFAULT_LOCALE)
    }

    /// Translator without any messages; every lookup renders the message id
    pub fn empty() -> Self {
        let locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let bundle = FluentBundle::new(vec![locale.clone()]);
        Self { locale, bundle, fallback: None }
    }

    /// The locale messages are actually rendered in
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Translate a message without arguments
    pub fn text(&self, id: &str) -> String {
        self.render(id, None)
    }

    /// Translate a message with named string arguments
    pub fn text_with(&self, id: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.render(id, Some(&fluent_args))
    }

    fn render(&self, id: &str, args: Option<&FluentArgs>) -> String {
        format_message(&self.bundle, id, args)
            .or_else(|| self.fallback.as_ref().and_then(|b| format_message(b, id, args)))
            .unwrap_or_else(|| {
                tracing::warn!(id, locale = %self.locale, "missing translation");
                id.to_string()
            })
    }
}

fn format_message(
    bundle: &FluentBundle<FluentResource>,
    id: &str,
    args: Option<&FluentArgs>,
) -> Option<String> {
    let message = bundle.get_message(id)?;
    let pattern = message.value()?;
    let mut errors = Vec::new();
    let value = bundle.format_pattern(pattern, args, &mut errors);
    if !errors.is_empty() {
        tracing::warn!(id, ?errors, "message formatted with errors");
    }
    Some(value.into_owned())
}
