use std::collections::HashMap;

use zbus::zvariant::{OwnedValue, Value};

use super::utils;

/// A raw metadata entry as players publish it.
///
/// Players disagree on whether `xesam:artist` is a string or a list of
/// strings, so the value is captured as one of these shapes and then
/// flattened with [`MetadataValue::into_display`] before it leaves this module.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum MetadataValue {
    /// Key missing or of an unexpected type
    #[default]
    Absent,
    /// Single string
    Text(String),
    /// List of strings
    List(Vec<String>),
}

impl MetadataValue {
    fn decode(value: Option<&Value<'_>>) -> Self {
        match value {
            Some(Value::Str(s)) => Self::Text(s.as_str().to_string()),
            Some(Value::Array(array)) => Self::List(
                array
                    .iter()
                    .filter_map(|item| match item {
                        Value::Str(s) => Some(s.as_str().to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Some(Value::Value(inner)) => Self::decode(Some(inner.as_ref())),
            _ => Self::Absent,
        }
    }

    /// Flatten into the string shown to users; lists are joined with `", "`.
    pub(crate) fn into_display(self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Text(text) => text,
            Self::List(items) => items.join(", "),
        }
    }
}

/// Metadata information for the current track, normalized for display
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackMetadata {
    /// Track title, empty when unknown
    pub title: String,

    /// Track artist(s), empty when unknown
    pub artist: String,

    /// Track length in seconds, 0 when unknown
    pub length: f64,

    /// MPRIS track identifier
    pub track_id: Option<String>,
}

impl From<HashMap<String, OwnedValue>> for TrackMetadata {
    fn from(metadata: HashMap<String, OwnedValue>) -> Self {
        let field = |key: &str| metadata.get(key).map(|value| &**value);

        let length = match field("mpris:length") {
            Some(Value::I64(micros)) => utils::from_mpris_micros(*micros),
            Some(Value::U64(micros)) => utils::from_mpris_micros(*micros as i64),
            Some(Value::I32(micros)) => utils::from_mpris_micros(i64::from(*micros)),
            Some(Value::U32(micros)) => utils::from_mpris_micros(i64::from(*micros)),
            _ => 0.0,
        };

        let track_id = match field("mpris:trackid") {
            Some(Value::ObjectPath(path)) => Some(path.as_str().to_string()),
            Some(Value::Str(s)) => Some(s.as_str().to_string()),
            _ => None,
        };

        Self {
            title: MetadataValue::decode(field("xesam:title")).into_display(),
            artist: MetadataValue::decode(field("xesam:artist")).into_display(),
            length: length.max(0.0),
            track_id,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use zbus::zvariant::ObjectPath;

    fn owned(value: Value<'_>) -> OwnedValue {
        OwnedValue::try_from(value).unwrap()
    }

    #[test]
    fn artist_list_is_joined() {
        let mut map = HashMap::new();
        map.insert("xesam:title".to_string(), owned(Value::from("Song")));
        map.insert(
            "xesam:artist".to_string(),
            owned(Value::from(vec!["A", "B"])),
        );

        let metadata = TrackMetadata::from(map);
        assert_eq!(metadata.title, "Song");
        assert_eq!(metadata.artist, "A, B");
    }

    #[test]
    fn artist_string_is_kept() {
        let mut map = HashMap::new();
        map.insert("xesam:artist".to_string(), owned(Value::from("Solo")));

        assert_eq!(TrackMetadata::from(map).artist, "Solo");
    }

    #[test]
    fn missing_keys_give_empty_metadata() {
        let metadata = TrackMetadata::from(HashMap::new());
        assert_eq!(metadata, TrackMetadata::default());
    }

    #[test]
    fn length_and_track_id_are_decoded() {
        let mut map = HashMap::new();
        map.insert("mpris:length".to_string(), owned(Value::from(200_000_000_i64)));
        map.insert(
            "mpris:trackid".to_string(),
            owned(Value::from(ObjectPath::try_from("/track/1").unwrap())),
        );

        let metadata = TrackMetadata::from(map);
        assert_eq!(metadata.length, 200.0);
        assert_eq!(metadata.track_id.as_deref(), Some("/track/1"));
    }

    #[test]
    fn unexpected_artist_type_is_absent() {
        assert_eq!(
            MetadataValue::decode(Some(&Value::from(42_u32))),
            MetadataValue::Absent
        );
    }
}
