use std::collections::HashMap;

/// Language used when the browser asks for one we do not ship.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                translation: include_str!("../translations/en.json"),
            },
        ),
        (
            "es",
            LanguageInfo {
                code: "es",
                translation: include_str!("../translations/es.json"),
            },
        ),
        (
            "de",
            LanguageInfo {
                code: "de",
                translation: include_str!("../translations/de.json"),
            },
        ),
        (
            "fr",
            LanguageInfo {
                code: "fr",
                translation: include_str!("../translations/fr.json"),
            },
        ),
    ])
}

/// Translation tables keyed by language code, as the i18n provider wants them.
pub fn translations() -> HashMap<&'static str, &'static str> {
    supported_languages()
        .into_iter()
        .map(|(key, value)| (key, value.translation))
        .collect()
}

/// Map a BCP 47 tag such as `es-MX` onto a shipped language code.
pub fn resolve_language(tag: &str) -> &'static str {
    let primary = tag
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    supported_languages()
        .get(primary.as_str())
        .map_or(FALLBACK_LANGUAGE, |info| info.code)
}

/// The browser's preferred UI language, resolved against what we ship.
pub fn browser_language() -> &'static str {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map_or(FALLBACK_LANGUAGE, |tag| resolve_language(&tag))
}
