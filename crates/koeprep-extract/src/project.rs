use std::collections::HashMap;

use serde::Deserialize;

use crate::ExtractError;

/// One utterance record from `audioItems`.
///
/// `text` stays optional at the type level: a record without it only matters
/// once an `audioKeys` entry actually references it, and that is reported per
/// key instead of failing the whole document at parse time.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioItem {
    #[serde(default)]
    pub text: Option<String>,
}

/// The two fields a talk root carries, wherever it lives in the document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TalkFields {
    #[serde(default)]
    audio_keys: Option<Vec<String>>,
    #[serde(default)]
    audio_items: Option<HashMap<String, AudioItem>>,
}

/// A project document as found on disk.
///
/// Older project files nest `audioKeys`/`audioItems` under a `talk` object;
/// newer ones carry them at the root. Parsing accepts both, and
/// [`RawProject::resolve`] collapses the duality into a single [`Talk`].
#[derive(Debug, Deserialize)]
struct RawProject {
    #[serde(default)]
    talk: Option<TalkFields>,
    #[serde(flatten)]
    root: TalkFields,
}

/// Normalized talk root: utterance order plus the item map.
#[derive(Debug)]
pub struct Talk {
    pub audio_keys: Vec<String>,
    pub audio_items: HashMap<String, AudioItem>,
}

impl RawProject {
    /// Use the `talk` object when present and non-null, else the root-level
    /// fields. A document with `audioKeys` in neither place is rejected. An
    /// absent `audioItems` map resolves to empty, so every lookup against it
    /// fails with the offending key.
    fn resolve(self) -> Result<Talk, ExtractError> {
        let fields = match self.talk {
            Some(talk) => talk,
            None => self.root,
        };
        let audio_keys = fields.audio_keys.ok_or(ExtractError::MissingAudioKeys)?;
        Ok(Talk {
            audio_keys,
            audio_items: fields.audio_items.unwrap_or_default(),
        })
    }
}

/// Parse project-file content and resolve it to a normalized [`Talk`].
pub fn parse_project(content: &str) -> Result<Talk, ExtractError> {
    let raw: RawProject = serde_json::from_str(content)?;
    raw.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_talk_schema() {
        let talk = parse_project(
            r#"{"talk":{"audioKeys":["a","b"],"audioItems":{"a":{"text":"Hello"},"b":{"text":"World"}}}}"#,
        )
        .unwrap();
        assert_eq!(talk.audio_keys, vec!["a", "b"]);
        assert_eq!(talk.audio_items["a"].text.as_deref(), Some("Hello"));
    }

    #[test]
    fn parse_root_level_schema() {
        let talk =
            parse_project(r#"{"audioKeys":["x"],"audioItems":{"x":{"text":"Hi"}}}"#).unwrap();
        assert_eq!(talk.audio_keys, vec!["x"]);
        assert_eq!(talk.audio_items["x"].text.as_deref(), Some("Hi"));
    }

    #[test]
    fn null_talk_falls_back_to_root() {
        let talk = parse_project(
            r#"{"talk":null,"audioKeys":["x"],"audioItems":{"x":{"text":"Hi"}}}"#,
        )
        .unwrap();
        assert_eq!(talk.audio_keys, vec!["x"]);
    }

    #[test]
    fn nested_talk_wins_over_root_fields() {
        let talk = parse_project(
            r#"{"talk":{"audioKeys":["n"],"audioItems":{"n":{"text":"nested"}}},"audioKeys":["r"],"audioItems":{"r":{"text":"root"}}}"#,
        )
        .unwrap();
        assert_eq!(talk.audio_keys, vec!["n"]);
    }

    #[test]
    fn missing_audio_keys_is_schema_error() {
        let err = parse_project(r#"{"talk":{"audioItems":{}}}"#).unwrap_err();
        assert!(matches!(err, ExtractError::MissingAudioKeys));
    }

    #[test]
    fn absent_audio_items_resolves_to_empty_map() {
        let talk = parse_project(r#"{"talk":{"audioKeys":[]}}"#).unwrap();
        assert!(talk.audio_items.is_empty());
    }

    #[test]
    fn item_without_text_parses() {
        let talk =
            parse_project(r#"{"audioKeys":["x"],"audioItems":{"x":{"voice":3}}}"#).unwrap();
        assert!(talk.audio_items["x"].text.is_none());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_project("not json").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }
}
