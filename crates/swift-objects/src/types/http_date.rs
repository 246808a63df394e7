//! HTTP-date (IMF-fixdate) formatting and parsing for header values.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{Error, Result};

// "Tue, 10 Nov 2009 23:00:00 GMT"
const IMF_FIXDATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Formats a timestamp as an IMF-fixdate header value.
pub(crate) fn format(datetime: OffsetDateTime) -> Result<String> {
    datetime
        .to_offset(time::UtcOffset::UTC)
        .format(IMF_FIXDATE)
        .map_err(|e| Error::InvalidRequest(format!("Cannot format HTTP date: {e}")))
}

/// Parses an IMF-fixdate header value, e.g. from `Last-Modified`.
pub(crate) fn parse(value: &str) -> Result<OffsetDateTime> {
    PrimitiveDateTime::parse(value, IMF_FIXDATE)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| Error::Decode(format!("Invalid HTTP date '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_format_http_date() {
        let formatted = format(datetime!(2009-11-10 23:00:00 UTC)).unwrap();
        assert_eq!(formatted, "Tue, 10 Nov 2009 23:00:00 GMT");
    }

    #[test]
    fn test_parse_http_date() {
        let parsed = parse("Tue, 10 Nov 2009 23:00:00 GMT").unwrap();
        assert_eq!(parsed, datetime!(2009-11-10 23:00:00 UTC));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_err());
    }
}
