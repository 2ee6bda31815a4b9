pub mod core;
pub mod images;
pub mod promotions;
pub mod slugs;
pub mod time_formatting;
pub mod timezone;

// Re-export the pipeline entry points
pub use self::core::{build_game_record, build_games};
pub use images::select_thumbnail;
pub use promotions::{
    Classification, ExclusionReason, PromotionWindow, classify_promotions, is_zero_price,
};
pub use slugs::{resolve_page_slug, resolve_store_url};
pub use time_formatting::format_promotion_date;
pub use timezone::{ResolvedZone, resolve_timezone};
