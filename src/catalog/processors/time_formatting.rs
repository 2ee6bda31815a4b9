use chrono::{DateTime, Utc};

use super::timezone::ResolvedZone;

/// Formats an upstream RFC 3339 timestamp in the requested zone.
///
/// Unparseable input is returned unchanged; upstream occasionally sends dates
/// we cannot read, and the raw value is still more useful than nothing.
///
/// # Examples
///
/// ```
/// use epic_freebies::catalog::processors::{format_promotion_date, resolve_timezone};
///
/// let zone = resolve_timezone("UTC+3");
/// assert_eq!(
///     format_promotion_date("2025-04-03T15:00:00.000Z", &zone),
///     "2025-04-03 18:00:00 UTC+3"
/// );
/// assert_eq!(format_promotion_date("next week", &zone), "next week");
/// ```
pub fn format_promotion_date(timestamp: &str, zone: &ResolvedZone) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => zone.format(parsed.with_timezone(&Utc)),
        Err(e) => {
            if !timestamp.is_empty() {
                tracing::debug!("Keeping unparseable promotion date '{timestamp}': {e}");
            }
            timestamp.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::processors::timezone::resolve_timezone;

    #[test]
    fn test_formats_in_named_zone() {
        let zone = resolve_timezone("Europe/London");
        // BST in April
        assert_eq!(
            format_promotion_date("2025-04-03T15:00:00.000Z", &zone),
            "2025-04-03 16:00:00 BST"
        );
    }

    #[test]
    fn test_respects_source_offset() {
        let zone = resolve_timezone("UTC");
        assert_eq!(
            format_promotion_date("2025-04-03T17:00:00+02:00", &zone),
            "2025-04-03 15:00:00 UTC"
        );
    }

    #[test]
    fn test_date_rolls_over_in_target_zone() {
        let zone = resolve_timezone("UTC+8");
        assert_eq!(
            format_promotion_date("2025-04-03T20:30:00Z", &zone),
            "2025-04-04 04:30:00 UTC+8"
        );
    }

    #[test]
    fn test_invalid_input_is_returned_unchanged() {
        let zone = resolve_timezone("UTC");
        assert_eq!(format_promotion_date("2025-04-03", &zone), "2025-04-03");
        assert_eq!(format_promotion_date("", &zone), "");
    }
}
