use crate::catalog::models::{
    CatalogElement, CatalogNamespace, DatePrecision, DiscountSetting, FormattedPrice, GameStatus,
    KeyImage, NormalizedGame, PageMapping, Price, PromotionalOffer, PromotionalOfferGroup,
    Promotions, Seller, TotalPrice,
};

/// Test utilities for creating catalog fixtures and output records
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Starts a catalog element with the given title and nothing else
    pub fn element(title: &str) -> ElementBuilder {
        ElementBuilder {
            element: CatalogElement {
                title: title.to_string(),
                ..Default::default()
            },
        }
    }

    /// Creates a single promotional offer
    pub fn offer(start: &str, end: &str, discount_percentage: i32) -> PromotionalOffer {
        PromotionalOffer {
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            discount_setting: Some(DiscountSetting {
                discount_type: Some("PERCENTAGE".to_string()),
                discount_percentage: Some(discount_percentage),
            }),
        }
    }

    /// Creates a normalized record, as the pipeline would emit it
    pub fn game(title: &str, status: GameStatus, precision: DatePrecision) -> NormalizedGame {
        let (start_date, end_date) = match precision {
            DatePrecision::Unknown => ("Unknown".to_string(), "Unknown".to_string()),
            _ => (
                "2025-04-03 23:00:00 PST".to_string(),
                "2025-04-10 23:00:00 PST".to_string(),
            ),
        };
        NormalizedGame {
            title: title.to_string(),
            description: Some(format!("{title} description")),
            image_url: Some(format!("https://cdn.example.com/{}.jpg", title.len())),
            url: format!("https://store.epicgames.com/en-US/p/{}", title.to_lowercase()),
            status,
            start_date,
            end_date,
            date_precision: precision,
            publisher: Some("Test Publisher".to_string()),
        }
    }

    /// Creates `count` free records with distinct titles
    pub fn games(count: usize) -> Vec<NormalizedGame> {
        (0..count)
            .map(|i| Self::game(&format!("Game {i}"), GameStatus::Free, DatePrecision::Exact))
            .collect()
    }
}

/// Fluent builder for [`CatalogElement`] fixtures
pub struct ElementBuilder {
    element: CatalogElement,
}

impl ElementBuilder {
    pub fn description(mut self, description: &str) -> Self {
        self.element.description = Some(description.to_string());
        self
    }

    pub fn seller(mut self, name: &str) -> Self {
        self.element.seller = Some(Seller {
            name: Some(name.to_string()),
        });
        self
    }

    pub fn image(mut self, image_type: &str, url: &str) -> Self {
        self.element
            .key_images
            .get_or_insert_with(Vec::new)
            .push(KeyImage {
                image_type: image_type.to_string(),
                url: url.to_string(),
            });
        self
    }

    pub fn offer_mapping(mut self, slug: &str) -> Self {
        self.element
            .offer_mappings
            .get_or_insert_with(Vec::new)
            .push(page_mapping(slug));
        self
    }

    pub fn catalog_mapping(mut self, slug: &str) -> Self {
        self.element
            .catalog_ns
            .get_or_insert_with(CatalogNamespace::default)
            .mappings
            .get_or_insert_with(Vec::new)
            .push(page_mapping(slug));
        self
    }

    /// Sets the formatted discount price
    pub fn price(mut self, discount_price: &str) -> Self {
        self.element.price = Some(Price {
            total_price: Some(TotalPrice {
                fmt_price: Some(FormattedPrice {
                    original_price: Some("$19.99".to_string()),
                    discount_price: Some(discount_price.to_string()),
                }),
            }),
        });
        self
    }

    /// Adds a current promotion group holding a single offer
    pub fn current_offer(self, start: &str, end: &str, discount_percentage: i32) -> Self {
        self.current_group(vec![TestDataBuilder::offer(start, end, discount_percentage)])
    }

    /// Adds an upcoming promotion group holding a single offer
    pub fn upcoming_offer(self, start: &str, end: &str, discount_percentage: i32) -> Self {
        self.upcoming_group(vec![TestDataBuilder::offer(start, end, discount_percentage)])
    }

    pub fn current_group(mut self, offers: Vec<PromotionalOffer>) -> Self {
        self.promotions()
            .promotional_offers
            .get_or_insert_with(Vec::new)
            .push(PromotionalOfferGroup {
                promotional_offers: Some(offers),
            });
        self
    }

    pub fn upcoming_group(mut self, offers: Vec<PromotionalOffer>) -> Self {
        self.promotions()
            .upcoming_promotional_offers
            .get_or_insert_with(Vec::new)
            .push(PromotionalOfferGroup {
                promotional_offers: Some(offers),
            });
        self
    }

    fn promotions(&mut self) -> &mut Promotions {
        self.element
            .promotions
            .get_or_insert_with(Promotions::default)
    }

    pub fn build(self) -> CatalogElement {
        self.element
    }
}

fn page_mapping(slug: &str) -> PageMapping {
    PageMapping {
        page_slug: Some(slug.to_string()),
        page_type: Some("productHome".to_string()),
    }
}
