//! Localization
//!
//! Translations are Fluent resources compiled into the binary. [`init`]
//! picks the active language once at startup; lookups that miss in the
//! active language fall back to English, then to the key itself.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use once_cell::sync::{Lazy, OnceCell};
use unic_langid::LanguageIdentifier;

/// Language used when nothing better matches
pub const DEFAULT_LOCALE: &str = "en";

/// Languages with a bundled translation
pub const SUPPORTED_LOCALES: &[&str] = &["en", "de"];

const EN_FTL: &str = include_str!("../locales/en.ftl");
const DE_FTL: &str = include_str!("../locales/de.ftl");

type Bundle = FluentBundle<FluentResource>;

static FALLBACK: Lazy<Bundle> = Lazy::new(|| build_bundle(DEFAULT_LOCALE));

static ACTIVE: OnceCell<Bundle> = OnceCell::new();

/// Select the UI language
///
/// `preferred` comes from the settings; without it the system locale is
/// used. Only the first call has an effect. Returns the chosen language.
pub fn init(preferred: Option<&str>) -> &'static str {
    let requested = preferred
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let locale = resolve_locale(&requested);
    if ACTIVE.set(build_bundle(locale)).is_err() {
        tracing::debug!("localization already initialised");
    }
    locale
}

/// Map a locale tag like `de-AT` or `de_DE.UTF-8` to a bundled language
pub fn resolve_locale(requested: &str) -> &'static str {
    let language = requested
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| *supported == language)
        .unwrap_or(DEFAULT_LOCALE)
}

/// Translate a key
pub fn t(key: &str) -> String {
    t_args(key, &[])
}

/// Translate a key with named arguments
pub fn t_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut fluent_args = FluentArgs::new();
    for (name, value) in args {
        fluent_args.set(*name, *value);
    }
    let fluent_args = (!args.is_empty()).then_some(&fluent_args);

    ACTIVE
        .get()
        .and_then(|bundle| format(bundle, key, fluent_args))
        .or_else(|| format(&FALLBACK, key, fluent_args))
        .unwrap_or_else(|| key.to_string())
}

fn format(bundle: &Bundle, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
    let message = bundle.get_message(key)?;
    let pattern = message.value()?;
    let mut errors = Vec::new();
    let formatted = bundle.format_pattern(pattern, args, &mut errors);
    if !errors.is_empty() {
        tracing::debug!(key, ?errors, "translation formatted with errors");
    }
    Some(formatted.into_owned())
}

fn build_bundle(locale: &str) -> Bundle {
    let source = match locale {
        "de" => DE_FTL,
        _ => EN_FTL,
    };
    let langid: LanguageIdentifier = locale.parse().unwrap_or_default();
    let mut bundle = FluentBundle::new_concurrent(vec![langid]);
    // Bidi isolation marks render as boxes in most fonts
    bundle.set_use_isolating(false);

    let resource = match FluentResource::try_new(source.to_string()) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(locale, ?errors, "translation file has syntax errors");
            resource
        }
    };
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(locale, ?errors, "duplicate translation keys");
    }
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("de"), "de");
        assert_eq!(resolve_locale("de-AT"), "de");
        assert_eq!(resolve_locale("de_DE.UTF-8"), "de");
        assert_eq!(resolve_locale("en-US"), "en");
        assert_eq!(resolve_locale("fr-FR"), "en");
        assert_eq!(resolve_locale(""), "en");
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(t("no-such-key"), "no-such-key");
    }

    #[test]
    fn test_english_fallback_has_every_key() {
        assert_eq!(format(&FALLBACK, "users-title", None).as_deref(), Some("Users"));
    }

    #[test]
    fn test_german_bundle() {
        let bundle = build_bundle("de");
        assert_eq!(
            format(&bundle, "users-title", None).as_deref(),
            Some("Benutzer")
        );
    }

    #[test]
    fn test_arguments_are_interpolated() {
        let mut args = FluentArgs::new();
        args.set("max", 64);
        let text = format(&FALLBACK, "err-username-too-long", Some(&args)).unwrap();
        assert_eq!(text, "Username is too long (max 64 characters)");
    }

    #[test]
    fn test_t_args_falls_back_to_english_text() {
        let text = t_args("connection-failed", &[("error", "refused")]);
        assert!(text.contains("refused"));
    }

    #[test]
    fn test_translations_have_same_keys() {
        let keys = |source: &str| -> Vec<String> {
            let mut keys: Vec<String> = source
                .lines()
                .filter(|line| !line.starts_with('#') && line.contains(" = "))
                .filter_map(|line| line.split(" = ").next())
                .map(str::to_string)
                .collect();
            keys.sort();
            keys
        };
        assert_eq!(keys(EN_FTL), keys(DE_FTL));
    }
}
