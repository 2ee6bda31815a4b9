//! GraphQL query text and request body for the storefront search

use serde::Serialize;

use crate::constants::query;

/// Storefront search query; selects every field the normalizer reads.
pub const SEARCH_STORE_QUERY: &str = r#"
query searchStoreQuery(
  $category: String,
  $count: Int,
  $country: String!,
  $locale: String,
  $freeGame: Boolean,
  $onSale: Boolean,
  $withPrice: Boolean = true
) {
  Catalog {
    searchStore(
      category: $category
      count: $count
      country: $country
      freeGame: $freeGame
      onSale: $onSale
      locale: $locale
    ) {
      elements {
        title
        description
        seller {
          name
        }
        keyImages {
          type
          url
        }
        productSlug
        urlSlug
        url
        offerMappings {
          pageSlug
          pageType
        }
        catalogNs {
          mappings(pageType: "productHome") {
            pageSlug
            pageType
          }
        }
        linkedOffer {
          effectiveDate
          customAttributes {
            key
            value
          }
        }
        categories {
          path
        }
        namespace
        id
        price(country: $country) @include(if: $withPrice) {
          totalPrice {
            fmtPrice(locale: $locale) {
              discountPrice
              originalPrice
            }
          }
        }
        promotions {
          promotionalOffers {
            promotionalOffers {
              startDate
              endDate
              discountSetting {
                discountType
                discountPercentage
              }
            }
          }
          upcomingPromotionalOffers {
            promotionalOffers {
              startDate
              endDate
              discountSetting {
                discountType
                discountPercentage
              }
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStoreVariables {
    pub category: String,
    pub count: u32,
    pub country: String,
    pub locale: String,
    pub free_game: bool,
    pub on_sale: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: SearchStoreVariables,
}

impl GraphQlRequest {
    /// Builds the free-game search for a storefront country and locale.
    pub fn search_store(country: &str, locale: &str) -> Self {
        Self {
            query: SEARCH_STORE_QUERY,
            variables: SearchStoreVariables {
                category: query::CATEGORY.to_string(),
                count: query::COUNT,
                country: country.to_string(),
                locale: locale.to_string(),
                free_game: query::FREE_GAME,
                on_sale: query::ON_SALE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_store_variables() {
        let request = GraphQlRequest::search_store("US", "en-US");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["variables"],
            json!({
                "category": "games/edition/base|bundles/games|editors",
                "count": 100,
                "country": "US",
                "locale": "en-US",
                "freeGame": true,
                "onSale": true
            })
        );
        assert!(value["query"].as_str().unwrap().contains("searchStore("));
    }

    #[test]
    fn test_query_selects_promotions_and_mappings() {
        for field in [
            "upcomingPromotionalOffers",
            "discountPercentage",
            "offerMappings",
            "catalogNs",
            "keyImages",
            "fmtPrice",
        ] {
            assert!(SEARCH_STORE_QUERY.contains(field), "missing {field}");
        }
    }
}
