//! Promotion classification: decides whether a catalog entry is currently
//! free, free soon, or not free at all, and which date window describes it.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::time_formatting::format_promotion_date;
use super::timezone::ResolvedZone;
use crate::catalog::models::{
    CatalogElement, DatePrecision, GameStatus, PromotionalOffer, PromotionalOfferGroup,
};
use crate::constants::UNKNOWN_DATE;
use crate::constants::promotion::{ESTIMATED_WINDOW_DAYS, FREE_DISCOUNT_PERCENTAGE};

/// Status and date window assigned to an entry that will be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionWindow {
    pub status: GameStatus,
    pub start_date: String,
    pub end_date: String,
    pub precision: DatePrecision,
}

impl PromotionWindow {
    fn exact(status: GameStatus, offer: &PromotionalOffer, zone: &ResolvedZone) -> Self {
        Self {
            status,
            start_date: format_promotion_date(offer.start(), zone),
            end_date: format_promotion_date(offer.end(), zone),
            precision: DatePrecision::Exact,
        }
    }

    fn has_no_dates(&self) -> bool {
        self.start_date.is_empty() && self.end_date.is_empty()
    }
}

/// Why an entry produces no output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// No free promotion and a non-zero price
    Paid,
    /// Only free in the future and upcoming games were not requested
    UpcomingNotRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Listed(PromotionWindow),
    Excluded(ExclusionReason),
}

/// Returns true for price strings that denote a zero-cost entry.
///
/// # Examples
///
/// ```
/// use epic_freebies::catalog::processors::is_zero_price;
///
/// assert!(is_zero_price("$0.00"));
/// assert!(is_zero_price("FREE"));
/// assert!(!is_zero_price("₱0.00"));
/// assert!(!is_zero_price("$19.99"));
/// ```
pub fn is_zero_price(price: &str) -> bool {
    price == "$0.00" || price == "0" || price.is_empty() || price.to_lowercase().contains("free")
}

/// Scans every offer of every group; the last 100% offer encountered wins.
fn last_free_offer(groups: &[PromotionalOfferGroup]) -> Option<&PromotionalOffer> {
    groups
        .iter()
        .flat_map(PromotionalOfferGroup::offers)
        .filter(|offer| offer.discount_percentage() == Some(FREE_DISCOUNT_PERCENTAGE))
        .last()
}

/// First group whose first offer carries both dates, whatever its discount.
fn first_dated_offer(groups: &[PromotionalOfferGroup]) -> Option<&PromotionalOffer> {
    groups
        .iter()
        .filter_map(|group| group.offers().first())
        .find(|offer| !offer.start().is_empty() && !offer.end().is_empty())
}

fn estimated_window(zone: &ResolvedZone, now: DateTime<Utc>) -> PromotionWindow {
    let end = zone.add_days(now, ESTIMATED_WINDOW_DAYS as u64);
    PromotionWindow {
        status: GameStatus::Free,
        start_date: zone.format(now),
        end_date: zone.format(end),
        precision: DatePrecision::Estimated,
    }
}

/// Classifies one catalog entry.
///
/// The steps run in a fixed order:
/// 1. a 100% current offer marks the entry free with exact dates
/// 2. otherwise, if requested, a 100% upcoming offer marks it coming soon
/// 3. otherwise a zero price marks it free with a synthesized one-week window,
///    and anything else is excluded as paid
/// 4. coming-soon entries are excluded when upcoming games were not requested
/// 5. free entries without trustworthy dates borrow the dates of the first
///    dated current offer
/// 6. entries still without dates get the `Unknown` literal
///
/// Steps 1 and 2 keep the last matching offer while step 5 keeps the first.
pub fn classify_promotions(
    element: &CatalogElement,
    include_upcoming: bool,
    zone: &ResolvedZone,
    now: DateTime<Utc>,
) -> Classification {
    let current = element.current_offers();

    let mut window = last_free_offer(current)
        .map(|offer| PromotionWindow::exact(GameStatus::Free, offer, zone));

    if window.is_none() && include_upcoming {
        window = last_free_offer(element.upcoming_offers())
            .map(|offer| PromotionWindow::exact(GameStatus::ComingSoon, offer, zone));
    }

    let mut window = match window {
        Some(window) => window,
        None => {
            let price = element.discount_price();
            if !is_zero_price(price) {
                debug!("Skipping '{}': price {price:?} is not free", element.title);
                return Classification::Excluded(ExclusionReason::Paid);
            }
            estimated_window(zone, now)
        }
    };

    if !include_upcoming && window.status == GameStatus::ComingSoon {
        return Classification::Excluded(ExclusionReason::UpcomingNotRequested);
    }

    if window.status == GameStatus::Free
        && (window.has_no_dates() || window.precision == DatePrecision::Estimated)
    {
        if let Some(offer) = first_dated_offer(current) {
            window.start_date = format_promotion_date(offer.start(), zone);
            window.end_date = format_promotion_date(offer.end(), zone);
            window.precision = DatePrecision::Exact;
        }

        if window.precision == DatePrecision::Estimated {
            warn!(
                "Game with estimated dates: {} (Status: {})",
                element.title,
                window.status.as_str()
            );
        }
    }

    if window.has_no_dates() {
        window.start_date = UNKNOWN_DATE.to_string();
        window.end_date = UNKNOWN_DATE.to_string();
        window.precision = DatePrecision::Unknown;
    }

    Classification::Listed(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::processors::timezone::resolve_timezone;
    use crate::testing_utils::TestDataBuilder;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 4, 0, 0).unwrap()
    }

    fn utc() -> ResolvedZone {
        resolve_timezone("UTC")
    }

    fn listed(classification: Classification) -> PromotionWindow {
        match classification {
            Classification::Listed(window) => window,
            other => panic!("expected a listed entry, got {other:?}"),
        }
    }

    #[test]
    fn test_current_free_offer_is_exact() {
        let element = TestDataBuilder::element("Now Free")
            .price("$19.99")
            .current_offer("2025-04-03T15:00:00.000Z", "2025-04-10T15:00:00.000Z", 100)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.status, GameStatus::Free);
        assert_eq!(window.precision, DatePrecision::Exact);
        assert_eq!(window.start_date, "2025-04-03 15:00:00 UTC");
        assert_eq!(window.end_date, "2025-04-10 15:00:00 UTC");
    }

    #[test]
    fn test_last_free_current_offer_wins() {
        let element = TestDataBuilder::element("Two Windows")
            .price("$19.99")
            .current_offer("2025-04-01T15:00:00Z", "2025-04-02T15:00:00Z", 100)
            .current_offer("2025-04-03T15:00:00Z", "2025-04-04T15:00:00Z", 50)
            .current_offer("2025-04-05T15:00:00Z", "2025-04-06T15:00:00Z", 100)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.start_date, "2025-04-05 15:00:00 UTC");
        assert_eq!(window.end_date, "2025-04-06 15:00:00 UTC");
    }

    #[test]
    fn test_current_offer_beats_upcoming_offer() {
        let element = TestDataBuilder::element("Both")
            .current_offer("2025-04-01T15:00:00Z", "2025-04-02T15:00:00Z", 100)
            .upcoming_offer("2025-04-08T15:00:00Z", "2025-04-15T15:00:00Z", 100)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.status, GameStatus::Free);
        assert_eq!(window.start_date, "2025-04-01 15:00:00 UTC");
    }

    #[test]
    fn test_upcoming_free_offer_is_coming_soon() {
        let element = TestDataBuilder::element("Next Week")
            .price("$29.99")
            .upcoming_offer("2025-04-08T15:00:00Z", "2025-04-15T15:00:00Z", 100)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.status, GameStatus::ComingSoon);
        assert_eq!(window.precision, DatePrecision::Exact);
        assert_eq!(window.start_date, "2025-04-08 15:00:00 UTC");
    }

    #[test]
    fn test_upcoming_offer_ignored_when_not_requested() {
        let element = TestDataBuilder::element("Next Week")
            .price("$29.99")
            .upcoming_offer("2025-04-08T15:00:00Z", "2025-04-15T15:00:00Z", 100)
            .build();

        assert_eq!(
            classify_promotions(&element, false, &utc(), now()),
            Classification::Excluded(ExclusionReason::Paid)
        );
    }

    #[test]
    fn test_upcoming_free_with_zero_price_not_requested_is_listed_free() {
        // Step 2 is skipped, so the zero price classifies it as free right now
        let element = TestDataBuilder::element("Already Zero")
            .price("0")
            .upcoming_offer("2025-04-08T15:00:00Z", "2025-04-15T15:00:00Z", 100)
            .build();

        let window = listed(classify_promotions(&element, false, &utc(), now()));
        assert_eq!(window.status, GameStatus::Free);
        assert_eq!(window.precision, DatePrecision::Estimated);
    }

    #[test]
    fn test_zero_price_without_promotions_is_estimated() {
        let element = TestDataBuilder::element("Always Free").price("$0.00").build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.status, GameStatus::Free);
        assert_eq!(window.precision, DatePrecision::Estimated);
        assert_eq!(window.start_date, "2025-04-01 04:00:00 UTC");
        assert_eq!(window.end_date, "2025-04-08 04:00:00 UTC");
    }

    #[test]
    fn test_estimated_window_uses_requested_zone() {
        let element = TestDataBuilder::element("Always Free").price("Free").build();
        let zone = resolve_timezone("UTC+3");

        let window = listed(classify_promotions(&element, true, &zone, now()));
        assert_eq!(window.start_date, "2025-04-01 07:00:00 UTC+3");
        assert_eq!(window.end_date, "2025-04-08 07:00:00 UTC+3");
    }

    #[test]
    fn test_zero_price_variants() {
        for price in ["$0.00", "0", "", "Free", "FREE TO PLAY", "free"] {
            let element = TestDataBuilder::element("Variant").price(price).build();
            let window = listed(classify_promotions(&element, true, &utc(), now()));
            assert_eq!(window.precision, DatePrecision::Estimated, "price {price:?}");
        }
    }

    #[test]
    fn test_missing_price_block_counts_as_empty_price() {
        let element = TestDataBuilder::element("No Price").build();
        assert!(element.price.is_none());

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.precision, DatePrecision::Estimated);
    }

    #[test]
    fn test_paid_entry_is_excluded() {
        let element = TestDataBuilder::element("Discounted")
            .price("$9.99")
            .current_offer("2025-04-01T15:00:00Z", "2025-04-08T15:00:00Z", 50)
            .build();

        assert_eq!(
            classify_promotions(&element, true, &utc(), now()),
            Classification::Excluded(ExclusionReason::Paid)
        );
    }

    #[test]
    fn test_estimated_dates_upgraded_from_first_dated_current_offer() {
        let element = TestDataBuilder::element("Zero With Sale")
            .price("0")
            .current_offer("2025-04-01T15:00:00Z", "2025-04-08T15:00:00Z", 20)
            .current_offer("2025-04-09T15:00:00Z", "2025-04-16T15:00:00Z", 30)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.precision, DatePrecision::Exact);
        assert_eq!(window.start_date, "2025-04-01 15:00:00 UTC");
        assert_eq!(window.end_date, "2025-04-08 15:00:00 UTC");
    }

    #[test]
    fn test_upgrade_only_looks_at_first_offer_of_each_group() {
        let element = TestDataBuilder::element("Grouped")
            .price("0")
            .current_group(vec![
                TestDataBuilder::offer("", "2025-04-08T15:00:00Z", 20),
                TestDataBuilder::offer("2025-04-02T15:00:00Z", "2025-04-03T15:00:00Z", 20),
            ])
            .current_group(vec![TestDataBuilder::offer(
                "2025-04-05T15:00:00Z",
                "2025-04-06T15:00:00Z",
                10,
            )])
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.start_date, "2025-04-05 15:00:00 UTC");
        assert_eq!(window.end_date, "2025-04-06 15:00:00 UTC");
    }

    #[test]
    fn test_free_offer_without_dates_becomes_unknown() {
        let element = TestDataBuilder::element("Dateless")
            .current_offer("", "", 100)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.status, GameStatus::Free);
        assert_eq!(window.precision, DatePrecision::Unknown);
        assert_eq!(window.start_date, "Unknown");
        assert_eq!(window.end_date, "Unknown");
    }

    #[test]
    fn test_coming_soon_without_dates_becomes_unknown() {
        let element = TestDataBuilder::element("Dateless Upcoming")
            .price("$5.00")
            .upcoming_offer("", "", 100)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.status, GameStatus::ComingSoon);
        assert_eq!(window.precision, DatePrecision::Unknown);
    }

    #[test]
    fn test_dateless_free_offer_borrows_dates_from_dated_group() {
        let element = TestDataBuilder::element("Borrowed Dates")
            .price("$19.99")
            .current_offer("", "", 100)
            .current_offer("2025-04-05T15:00:00Z", "2025-04-12T15:00:00Z", 50)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.status, GameStatus::Free);
        assert_eq!(window.precision, DatePrecision::Exact);
        assert_eq!(window.start_date, "2025-04-05 15:00:00 UTC");
        assert_eq!(window.end_date, "2025-04-12 15:00:00 UTC");
    }

    #[test]
    fn test_dateless_coming_soon_ignores_dated_current_offer() {
        let element = TestDataBuilder::element("Upcoming On Sale")
            .price("$5.00")
            .current_offer("2025-04-05T15:00:00Z", "2025-04-12T15:00:00Z", 50)
            .upcoming_offer("", "", 100)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.status, GameStatus::ComingSoon);
        assert_eq!(window.precision, DatePrecision::Unknown);
        assert_eq!(window.start_date, "Unknown");
        assert_eq!(window.end_date, "Unknown");
    }

    #[test]
    fn test_unparseable_offer_dates_are_kept_verbatim() {
        let element = TestDataBuilder::element("Odd Dates")
            .current_offer("soon", "later", 100)
            .build();

        let window = listed(classify_promotions(&element, true, &utc(), now()));
        assert_eq!(window.start_date, "soon");
        assert_eq!(window.end_date, "later");
        assert_eq!(window.precision, DatePrecision::Exact);
    }
}
