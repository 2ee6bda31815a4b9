use crate::catalog::models::{CatalogElement, PageMapping};
use crate::catalog::urls::build_store_page_url;

/// First non-empty page slug in a mapping list, in list order.
fn first_page_slug(mappings: Option<&[PageMapping]>) -> Option<&str> {
    mappings?
        .iter()
        .filter_map(|mapping| mapping.page_slug.as_deref())
        .find(|slug| !slug.is_empty())
}

/// Resolves the page slug of an entry.
///
/// Offer mappings take priority over the catalog namespace mappings. An entry
/// with no usable slug in either list resolves to the empty slug.
pub fn resolve_page_slug(element: &CatalogElement) -> &str {
    let offer_mappings = element.offer_mappings.as_deref();
    let catalog_mappings = element
        .catalog_ns
        .as_ref()
        .and_then(|ns| ns.mappings.as_deref());

    first_page_slug(offer_mappings)
        .or_else(|| first_page_slug(catalog_mappings))
        .unwrap_or("")
}

/// Canonical store page URL of an entry.
pub fn resolve_store_url(element: &CatalogElement) -> String {
    build_store_page_url(resolve_page_slug(element))
}
