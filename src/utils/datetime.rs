//! XMLTV timestamp formatting
//!
//! XMLTV consumers expect `YYYYMMDDHHmmss +0000`: fourteen digits, one
//! space, then the signed four digit zone offset. All guide timestamps are
//! rendered in UTC.

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

/// chrono format string for XMLTV date-times
pub const XMLTV_DATETIME_FORMAT: &str = "%Y%m%d%H%M%S %z";

/// Errors that can occur during datetime operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateTimeError {
    /// Epoch seconds that chrono cannot represent, or whose year needs more than four digits
    #[error("Date out of range: {input}")]
    OutOfRange { input: i64 },
}

/// Convert Unix epoch seconds to a UTC date-time
pub fn from_epoch_seconds(epoch_secs: i64) -> Result<DateTime<Utc>, DateTimeError> {
    DateTime::<Utc>::from_timestamp(epoch_secs, 0)
        .filter(|dt| (0..=9999).contains(&dt.year()))
        .ok_or(DateTimeError::OutOfRange { input: epoch_secs })
}

/// Format Unix epoch seconds as an XMLTV date-time
///
/// ```rust
/// use xmltv_guide::utils::datetime::format_xmltv_timestamp;
///
/// assert_eq!(format_xmltv_timestamp(1700000000).unwrap(), "20231114221320 +0000");
/// ```
pub fn format_xmltv_timestamp(epoch_secs: i64) -> Result<String, DateTimeError> {
    Ok(from_epoch_seconds(epoch_secs)?
        .format(XMLTV_DATETIME_FORMAT)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(1_700_000_000, "20231114221320 +0000")]
    #[case(0, "19700101000000 +0000")]
    #[case(-1, "19691231235959 +0000")]
    #[case(951_782_400, "20000229000000 +0000")]
    #[case(253_402_300_799, "99991231235959 +0000")]
    fn test_format_xmltv_timestamp(#[case] epoch: i64, #[case] expected: &str) {
        assert_eq!(format_xmltv_timestamp(epoch).unwrap(), expected);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            format_xmltv_timestamp(253_402_300_800),
            Err(DateTimeError::OutOfRange {
                input: 253_402_300_800
            })
        );
        assert!(format_xmltv_timestamp(i64::MAX).is_err());
    }

    proptest! {
        #[test]
        fn prop_fixed_width(epoch in -62_167_219_200i64..253_402_300_799i64) {
            let formatted = format_xmltv_timestamp(epoch).unwrap();
            prop_assert_eq!(formatted.len(), 20);
            prop_assert!(formatted[..14].bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(formatted.ends_with(" +0000"));
            prop_assert_eq!(format_xmltv_timestamp(epoch).unwrap(), formatted);
        }
    }
}
