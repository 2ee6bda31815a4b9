//! URL building utilities for store pages

use crate::constants::STORE_PAGE_BASE_URL;

/// Builds the canonical store page URL for a product slug.
/// An empty slug yields a URL with an empty trailing segment.
///
/// # Arguments
/// * `slug` - The product page slug
///
/// # Returns
/// * `String` - The complete store page URL
///
/// # Example
/// ```
/// use epic_freebies::catalog::urls::build_store_page_url;
///
/// let url = build_store_page_url("hades");
/// assert_eq!(url, "https://store.epicgames.com/en-US/p/hades");
///
/// let url = build_store_page_url("");
/// assert_eq!(url, "https://store.epicgames.com/en-US/p/");
/// ```
pub fn build_store_page_url(slug: &str) -> String {
    format!("{STORE_PAGE_BASE_URL}{slug}")
}
