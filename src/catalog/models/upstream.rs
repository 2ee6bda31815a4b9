//! Wire model of the storefront `searchStore` GraphQL response.
//!
//! Upstream sends `null` for many fields, so anything that can be missing is
//! an `Option`. Lists stay `Option<Vec<_>>` where an absent list and an empty
//! list must not be confused.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Option<CatalogData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl CatalogResponse {
    /// Elements of the search result, empty when upstream sent none.
    pub fn elements(&self) -> &[CatalogElement] {
        self.data
            .as_ref()
            .and_then(|data| data.catalog.as_ref())
            .and_then(|catalog| catalog.search_store.as_ref())
            .and_then(|store| store.elements.as_deref())
            .unwrap_or(&[])
    }

    pub fn into_elements(self) -> Vec<CatalogElement> {
        self.data
            .and_then(|data| data.catalog)
            .and_then(|catalog| catalog.search_store)
            .and_then(|store| store.elements)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogData {
    #[serde(rename = "Catalog", default)]
    pub catalog: Option<Catalog>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(rename = "searchStore", default)]
    pub search_store: Option<SearchStore>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchStore {
    #[serde(default)]
    pub elements: Option<Vec<CatalogElement>>,
}

/// One catalog entry as returned by the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogElement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub seller: Option<Seller>,
    #[serde(rename = "keyImages", default)]
    pub key_images: Option<Vec<KeyImage>>,
    #[serde(rename = "productSlug", default)]
    pub product_slug: Option<String>,
    #[serde(rename = "urlSlug", default)]
    pub url_slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "offerMappings", default)]
    pub offer_mappings: Option<Vec<PageMapping>>,
    #[serde(rename = "catalogNs", default)]
    pub catalog_ns: Option<CatalogNamespace>,
    #[serde(rename = "linkedOffer", default)]
    pub linked_offer: Option<LinkedOffer>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub promotions: Option<Promotions>,
}

impl CatalogElement {
    pub fn seller_name(&self) -> Option<&str> {
        self.seller.as_ref().and_then(|s| s.name.as_deref())
    }

    /// Discounted price as formatted by the storefront; empty when missing.
    pub fn discount_price(&self) -> &str {
        self.price
            .as_ref()
            .and_then(|p| p.total_price.as_ref())
            .and_then(|t| t.fmt_price.as_ref())
            .and_then(|f| f.discount_price.as_deref())
            .unwrap_or("")
    }

    pub fn current_offers(&self) -> &[PromotionalOfferGroup] {
        self.promotions
            .as_ref()
            .and_then(|p| p.promotional_offers.as_deref())
            .unwrap_or(&[])
    }

    pub fn upcoming_offers(&self) -> &[PromotionalOfferGroup] {
        self.promotions
            .as_ref()
            .and_then(|p| p.upcoming_promotional_offers.as_deref())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Seller {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeyImage {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub image_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageMapping {
    #[serde(rename = "pageSlug", default)]
    pub page_slug: Option<String>,
    #[serde(rename = "pageType", default)]
    pub page_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogNamespace {
    #[serde(default)]
    pub mappings: Option<Vec<PageMapping>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkedOffer {
    #[serde(rename = "effectiveDate", default)]
    pub effective_date: Option<String>,
    #[serde(rename = "customAttributes", default)]
    pub custom_attributes: Option<Vec<CustomAttribute>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomAttribute {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Price {
    #[serde(rename = "totalPrice", default)]
    pub total_price: Option<TotalPrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TotalPrice {
    #[serde(rename = "fmtPrice", default)]
    pub fmt_price: Option<FormattedPrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormattedPrice {
    #[serde(rename = "originalPrice", default)]
    pub original_price: Option<String>,
    #[serde(rename = "discountPrice", default)]
    pub discount_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Promotions {
    #[serde(rename = "promotionalOffers", default)]
    pub promotional_offers: Option<Vec<PromotionalOfferGroup>>,
    #[serde(rename = "upcomingPromotionalOffers", default)]
    pub upcoming_promotional_offers: Option<Vec<PromotionalOfferGroup>>,
}

/// An offer bucket; each bucket holds the individual discount windows.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PromotionalOfferGroup {
    #[serde(rename = "promotionalOffers", default)]
    pub promotional_offers: Option<Vec<PromotionalOffer>>,
}

impl PromotionalOfferGroup {
    pub fn offers(&self) -> &[PromotionalOffer] {
        self.promotional_offers.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PromotionalOffer {
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(rename = "discountSetting", default)]
    pub discount_setting: Option<DiscountSetting>,
}

impl PromotionalOffer {
    pub fn discount_percentage(&self) -> Option<i32> {
        self.discount_setting
            .as_ref()
            .and_then(|d| d.discount_percentage)
    }

    pub fn start(&self) -> &str {
        self.start_date.as_deref().unwrap_or("")
    }

    pub fn end(&self) -> &str {
        self.end_date.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiscountSetting {
    #[serde(rename = "discountType", default)]
    pub discount_type: Option<String>,
    #[serde(rename = "discountPercentage", default)]
    pub discount_percentage: Option<i32>,
}
