//! Object descriptions as returned by container listings.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One object in a container listing.
///
/// Read-only description reconstructed per listing request; nothing is
/// cached. Field names follow the JSON listing body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// Object name within the container.
    pub name: String,
    /// MD5 checksum of the object content.
    pub hash: String,
    /// Object size in bytes.
    pub bytes: u64,
    /// Content type/MIME type.
    pub content_type: String,
    /// Last modified timestamp.
    #[serde(with = "swift_timestamp")]
    pub last_modified: OffsetDateTime,
}

/// Serde support for Swift listing timestamps.
///
/// Listings carry `last_modified` as ISO-8601 with fractional seconds and no
/// offset ("2009-11-10T23:00:00.123456"); UTC is implied.
pub(crate) mod swift_timestamp {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;
    use time::{OffsetDateTime, PrimitiveDateTime};

    const FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
        version = 2,
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );

    pub fn serialize<S>(datetime: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = datetime
            .to_offset(time::UtcOffset::UTC)
            .format(FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        PrimitiveDateTime::parse(&value, FORMAT)
            .map(PrimitiveDateTime::assume_utc)
            .map_err(|e| de::Error::custom(format!("invalid last_modified '{value}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_deserialize_listing_entry() {
        let json = r#"{
            "hash": "451e372e48e0f6b1114fa0724aa79fa1",
            "last_modified": "2009-11-10T23:00:00.000000",
            "bytes": 14,
            "name": "goodbye",
            "content_type": "application/octet-stream"
        }"#;

        let object: Object = serde_json::from_str(json).unwrap();
        assert_eq!(object.name, "goodbye");
        assert_eq!(object.hash, "451e372e48e0f6b1114fa0724aa79fa1");
        assert_eq!(object.bytes, 14);
        assert_eq!(object.content_type, "application/octet-stream");
        assert_eq!(object.last_modified, datetime!(2009-11-10 23:00:00 UTC));
    }

    #[test]
    fn test_deserialize_without_subseconds() {
        let json = r#"{
            "hash": "d41d8cd98f00b204e9800998ecf8427e",
            "last_modified": "2026-01-15T16:41:49",
            "bytes": 0,
            "name": "empty",
            "content_type": "text/plain"
        }"#;

        let object: Object = serde_json::from_str(json).unwrap();
        assert_eq!(object.last_modified, datetime!(2026-01-15 16:41:49 UTC));
    }

    #[test]
    fn test_serialize_round_trip() {
        let object = Object {
            name: "goodbye".to_string(),
            hash: "451e372e48e0f6b1114fa0724aa79fa1".to_string(),
            bytes: 14,
            content_type: "application/octet-stream".to_string(),
            last_modified: datetime!(2009-11-10 23:00:00.39027 UTC),
        };

        let json = serde_json::to_string(&object).unwrap();
        let parsed: Object = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, object);
    }
}
