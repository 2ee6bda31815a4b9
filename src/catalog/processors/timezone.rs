use chrono::{DateTime, Days, Duration, FixedOffset, Offset, Utc};
use chrono_tz::Tz;

use crate::constants::DATE_FORMAT;
use crate::constants::promotion::{FALLBACK_OFFSET_HOURS, FALLBACK_ZONE_NAME};

const SECONDS_PER_HOUR: i32 = 3600;

/// A timezone the pipeline can render dates in.
///
/// IANA zones keep their own abbreviations; fixed offsets carry the name they
/// are displayed with (the caller's identifier, `UTC`, or the `UTC+8` fallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedZone {
    Named(Tz),
    Fixed { offset: FixedOffset, name: String },
}

impl ResolvedZone {
    /// The zone used whenever an identifier cannot be resolved.
    pub fn fallback() -> Self {
        Self::Fixed {
            offset: FixedOffset::east_opt(FALLBACK_OFFSET_HOURS * SECONDS_PER_HOUR)
                .unwrap_or_else(|| Utc.fix()),
            name: FALLBACK_ZONE_NAME.to_string(),
        }
    }

    fn fixed_hours(hours: i32, name: impl Into<String>) -> Option<Self> {
        let seconds = hours.checked_mul(SECONDS_PER_HOUR)?;
        FixedOffset::east_opt(seconds).map(|offset| ResolvedZone::Fixed {
            offset,
            name: name.into(),
        })
    }

    /// Offset from UTC in seconds at the given instant.
    pub fn offset_seconds_at(&self, instant: DateTime<Utc>) -> i32 {
        match self {
            ResolvedZone::Named(tz) => instant.with_timezone(tz).offset().fix().local_minus_utc(),
            ResolvedZone::Fixed { offset, .. } => offset.local_minus_utc(),
        }
    }

    /// Moves `instant` forward by whole calendar days, keeping the wall-clock
    /// time of this zone where the zone observes daylight saving.
    pub fn add_days(&self, instant: DateTime<Utc>, days: u64) -> DateTime<Utc> {
        let shifted = match self {
            ResolvedZone::Named(tz) => instant
                .with_timezone(tz)
                .checked_add_days(Days::new(days))
                .map(|local| local.with_timezone(&Utc)),
            ResolvedZone::Fixed { .. } => instant.checked_add_days(Days::new(days)),
        };
        shifted.unwrap_or_else(|| instant + Duration::days(days as i64))
    }

    /// Renders `instant` as `YYYY-MM-DD HH:MM:SS <zone abbreviation>`.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        match self {
            ResolvedZone::Named(tz) => instant.with_timezone(tz).format(DATE_FORMAT).to_string(),
            ResolvedZone::Fixed { offset, name } => format!(
                "{} {}",
                instant.with_timezone(offset).format("%Y-%m-%d %H:%M:%S"),
                name
            ),
        }
    }
}

/// Resolves a user-supplied timezone identifier. Never fails.
///
/// Resolution order:
/// 1. IANA zone name (`Asia/Manila`, `UTC`, `Europe/London`)
/// 2. `UTC`/`GMT` followed by nothing (UTC) or a signed hour count (`UTC+3`, `GMT-5`)
/// 3. anything else resolves to the fixed `UTC+8` fallback
///
/// # Examples
///
/// ```
/// use epic_freebies::catalog::processors::resolve_timezone;
/// use chrono::Utc;
///
/// let zone = resolve_timezone("UTC+3");
/// assert_eq!(zone.offset_seconds_at(Utc::now()), 3 * 3600);
///
/// let zone = resolve_timezone("Mars/Phobos");
/// assert_eq!(zone.offset_seconds_at(Utc::now()), 8 * 3600);
/// ```
pub fn resolve_timezone(identifier: &str) -> ResolvedZone {
    if let Ok(tz) = identifier.parse::<Tz>() {
        return ResolvedZone::Named(tz);
    }

    let remainder = identifier
        .strip_prefix("UTC")
        .or_else(|| identifier.strip_prefix("GMT"));

    let Some(remainder) = remainder else {
        tracing::debug!("Unrecognized timezone '{identifier}', using {FALLBACK_ZONE_NAME}");
        return ResolvedZone::fallback();
    };

    if remainder.is_empty() {
        return ResolvedZone::Fixed {
            offset: Utc.fix(),
            name: "UTC".to_string(),
        };
    }

    match remainder.parse::<i32>() {
        Ok(hours) => ResolvedZone::fixed_hours(hours, identifier).unwrap_or_else(|| {
            tracing::debug!("Offset out of range in '{identifier}', using {FALLBACK_ZONE_NAME}");
            ResolvedZone::fallback()
        }),
        Err(_) => {
            tracing::debug!("Invalid offset in '{identifier}', using {FALLBACK_ZONE_NAME}");
            ResolvedZone::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 3, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_iana_zone_resolves_to_named() {
        let zone = resolve_timezone("Asia/Manila");
        assert_eq!(zone, ResolvedZone::Named(chrono_tz::Asia::Manila));
        assert_eq!(zone.offset_seconds_at(reference_instant()), 8 * 3600);
    }

    #[test]
    fn test_plain_utc_is_an_iana_name() {
        let zone = resolve_timezone("UTC");
        assert!(matches!(zone, ResolvedZone::Named(_)));
        assert_eq!(zone.offset_seconds_at(reference_instant()), 0);
        assert_eq!(zone.format(reference_instant()), "2025-04-03 15:00:00 UTC");
    }

    #[test]
    fn test_utc_plus_offset() {
        let zone = resolve_timezone("UTC+3");
        assert_eq!(zone.offset_seconds_at(reference_instant()), 3 * 3600);
        assert_eq!(zone.format(reference_instant()), "2025-04-03 18:00:00 UTC+3");
    }

    #[test]
    fn test_gmt_minus_offset() {
        let zone = resolve_timezone("GMT-5");
        assert_eq!(zone.offset_seconds_at(reference_instant()), -5 * 3600);
        assert_eq!(zone.format(reference_instant()), "2025-04-03 10:00:00 GMT-5");
    }

    #[test]
    fn test_invalid_offset_falls_back() {
        let zone = resolve_timezone("UTC+abc");
        assert_eq!(zone, ResolvedZone::fallback());
        assert_eq!(zone.format(reference_instant()), "2025-04-03 23:00:00 UTC+8");
    }

    #[test]
    fn test_out_of_range_offset_falls_back() {
        let zone = resolve_timezone("UTC+99");
        assert_eq!(zone, ResolvedZone::fallback());
    }

    #[test]
    fn test_unrecognized_name_falls_back() {
        let zone = resolve_timezone("Mars/Phobos");
        assert_eq!(zone.offset_seconds_at(reference_instant()), 8 * 3600);

        let zone = resolve_timezone("");
        assert_eq!(zone, ResolvedZone::fallback());
    }

    #[test]
    fn test_add_days_keeps_wall_clock_across_dst() {
        let zone = resolve_timezone("America/New_York");
        // 2025-03-05 12:00 EST, one week later is 12:00 EDT
        let start = Utc.with_ymd_and_hms(2025, 3, 5, 17, 0, 0).unwrap();
        let end = zone.add_days(start, 7);
        assert_eq!(zone.format(start), "2025-03-05 12:00:00 EST");
        assert_eq!(zone.format(end), "2025-03-12 12:00:00 EDT");
    }

    #[test]
    fn test_add_days_fixed_zone() {
        let zone = resolve_timezone("UTC+3");
        let end = zone.add_days(reference_instant(), 7);
        assert_eq!(zone.format(end), "2025-04-10 18:00:00 UTC+3");
    }

    #[test]
    fn test_named_zone_uses_abbreviation() {
        let zone = resolve_timezone("America/New_York");
        // 2025-04-03 is daylight saving time in New York
        assert_eq!(zone.format(reference_instant()), "2025-04-03 11:00:00 EDT");
    }
}
