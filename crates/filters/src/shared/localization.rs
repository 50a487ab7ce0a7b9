use contracts::shared::localized_text::LocalizedText;

/// Preferred language of the dashboard
pub const PRIMARY_LANGUAGE: &str = "lt";
/// Used when the primary translation is missing
pub const FALLBACK_LANGUAGE: &str = "en";

/// Pick the display string from a localized value.
///
/// Order: a plain string as-is, then the `lt` entry, the `en` entry, a
/// `name` entry inside the map, and finally `default`. Blank values count
/// as missing.
pub fn localized_text(languages: Option<&LocalizedText>, default: &str) -> String {
    let Some(languages) = languages else {
        return default.to_string();
    };
    match languages {
        LocalizedText::Plain(text) if !text.trim().is_empty() => text.clone(),
        LocalizedText::Plain(_) => default.to_string(),
        LocalizedText::Map(_) => languages
            .get(PRIMARY_LANGUAGE)
            .or_else(|| languages.get(FALLBACK_LANGUAGE))
            .or_else(|| languages.get("name"))
            .unwrap_or(default)
            .to_string(),
    }
}
