use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Display text that is either a plain string or a per-language map
/// (`{"lt": "...", "en": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Map(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Entry for a language code, ignoring blank values
    pub fn get(&self, lang: &str) -> Option<&str> {
        match self {
            LocalizedText::Plain(_) => None,
            LocalizedText::Map(map) => map
                .get(lang)
                .map(String::as_str)
                .filter(|s| !s.trim().is_empty()),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        LocalizedText::Plain(value.to_string())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedText {
    fn from(entries: [(&str, &str); N]) -> Self {
        LocalizedText::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Lenient `languages` field: strings and objects are accepted, non-string
/// map values are skipped, anything else becomes `None`.
pub fn deserialize_lenient_languages<'de, D>(
    deserializer: D,
) -> Result<Option<LocalizedText>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(LocalizedText::Plain(s)),
        Some(Value::Object(map)) => Some(LocalizedText::Map(
            map.into_iter()
                .filter_map(|(k, v)| match v {
                    Value::String(s) => Some((k, s)),
                    _ => None,
                })
                .collect(),
        )),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_lenient_languages")]
        languages: Option<LocalizedText>,
    }

    #[test]
    fn test_untagged_shapes() {
        let plain: LocalizedText = serde_json::from_str(r#""Variklis""#).unwrap();
        assert_eq!(plain, LocalizedText::from("Variklis"));

        let map: LocalizedText = serde_json::from_str(r#"{"lt":"Variklis","en":"Engine"}"#).unwrap();
        assert_eq!(map.get("en"), Some("Engine"));
        assert_eq!(map.get("ru"), None);
    }

    #[test]
    fn test_lenient_languages() {
        let h: Holder = serde_json::from_str(r#"{"languages":{"lt":"Ratai","en":null,"x":5}}"#).unwrap();
        assert_eq!(h.languages, Some(LocalizedText::from([("lt", "Ratai")])));

        let h: Holder = serde_json::from_str(r#"{"languages":42}"#).unwrap();
        assert_eq!(h.languages, None);

        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.languages, None);
    }

    #[test]
    fn test_blank_entry_is_absent() {
        let text = LocalizedText::from([("lt", "  "), ("en", "Doors")]);
        assert_eq!(text.get("lt"), None);
        assert_eq!(text.get("en"), Some("Doors"));
    }
}
