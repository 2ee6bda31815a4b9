use chrono::{DateTime, Utc};
use tracing::debug;

use super::images::select_thumbnail;
use super::promotions::{Classification, classify_promotions};
use super::slugs::resolve_store_url;
use super::timezone::{ResolvedZone, resolve_timezone};
use crate::catalog::models::{CatalogElement, NormalizedGame};

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Converts one catalog element into an output record.
///
/// Returns `None` when the promotion classifier excludes the entry.
pub fn build_game_record(
    element: &CatalogElement,
    include_upcoming: bool,
    zone: &ResolvedZone,
    now: DateTime<Utc>,
) -> Option<NormalizedGame> {
    let window = match classify_promotions(element, include_upcoming, zone, now) {
        Classification::Listed(window) => window,
        Classification::Excluded(reason) => {
            debug!("Excluded '{}': {:?}", element.title, reason);
            return None;
        }
    };

    Some(NormalizedGame {
        title: element.title.clone(),
        description: non_empty(element.description.as_deref()),
        image_url: select_thumbnail(element.key_images.as_deref().unwrap_or(&[])),
        url: resolve_store_url(element),
        status: window.status,
        start_date: window.start_date,
        end_date: window.end_date,
        date_precision: window.precision,
        publisher: non_empty(element.seller_name()),
    })
}

/// Normalizes a whole upstream result set.
///
/// Records keep upstream order; duplicate titles are kept as they are.
/// The result depends only on the arguments, `now` included.
///
/// # Arguments
/// * `elements` - Catalog entries in upstream order
/// * `include_upcoming` - Whether entries that only become free later are listed
/// * `timezone` - Timezone identifier used for every rendered date
/// * `now` - Reference instant for synthesized date windows
pub fn build_games(
    elements: &[CatalogElement],
    include_upcoming: bool,
    timezone: &str,
    now: DateTime<Utc>,
) -> Vec<NormalizedGame> {
    let zone = resolve_timezone(timezone);
    let games: Vec<NormalizedGame> = elements
        .iter()
        .filter_map(|element| build_game_record(element, include_upcoming, &zone, now))
        .collect();

    debug!(
        "Normalized {} of {} catalog entries (include_upcoming={include_upcoming}, timezone={timezone})",
        games.len(),
        elements.len()
    );
    games
}
