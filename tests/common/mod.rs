#![allow(dead_code)]

use epic_freebies::config::Config;
use epic_freebies::server::{AppState, app_router};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Catalog with one current giveaway, one upcoming giveaway, one
/// zero-priced entry without promotions and one paid entry.
pub fn catalog_body() -> Value {
    json!({
        "data": { "Catalog": { "searchStore": { "elements": [
            {
                "title": "Current Giveaway",
                "description": "Free this week",
                "seller": { "name": "Studio A" },
                "keyImages": [
                    { "type": "OfferImageWide", "url": "https://cdn.example.com/wide.jpg" },
                    { "type": "Thumbnail", "url": "https://cdn.example.com/thumb.jpg" }
                ],
                "offerMappings": [{ "pageSlug": "current-giveaway", "pageType": "productHome" }],
                "price": { "totalPrice": { "fmtPrice": { "originalPrice": "$19.99", "discountPrice": "0" } } },
                "promotions": {
                    "promotionalOffers": [{ "promotionalOffers": [{
                        "startDate": "2025-04-03T15:00:00.000Z",
                        "endDate": "2025-04-10T15:00:00.000Z",
                        "discountSetting": { "discountType": "PERCENTAGE", "discountPercentage": 100 }
                    }] }],
                    "upcomingPromotionalOffers": []
                }
            },
            {
                "title": "Next Giveaway",
                "description": "",
                "seller": { "name": "" },
                "keyImages": [{ "type": "DieselGameBox", "url": "https://cdn.example.com/box.jpg" }],
                "offerMappings": [],
                "catalogNs": { "mappings": [{ "pageSlug": "next-giveaway", "pageType": "productHome" }] },
                "price": { "totalPrice": { "fmtPrice": { "originalPrice": "$29.99", "discountPrice": "$29.99" } } },
                "promotions": {
                    "promotionalOffers": [],
                    "upcomingPromotionalOffers": [{ "promotionalOffers": [{
                        "startDate": "2025-04-10T15:00:00.000Z",
                        "endDate": "2025-04-17T15:00:00.000Z",
                        "discountSetting": { "discountType": "PERCENTAGE", "discountPercentage": 100 }
                    }] }]
                }
            },
            {
                "title": "Always Free",
                "seller": { "name": "Indie Co" },
                "keyImages": null,
                "productSlug": "always-free",
                "price": { "totalPrice": { "fmtPrice": { "originalPrice": "$0.00", "discountPrice": "$0.00" } } },
                "promotions": null
            },
            {
                "title": "Paid Game",
                "price": { "totalPrice": { "fmtPrice": { "originalPrice": "$9.99", "discountPrice": "$9.99" } } },
                "promotions": { "promotionalOffers": [], "upcomingPromotionalOffers": [] }
            }
        ] } } }
    })
}

/// Starts a mock GraphQL endpoint answering every POST with `body`.
pub async fn mock_catalog(body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Starts a mock GraphQL endpoint that always fails with `status`.
pub async fn failing_catalog(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;
    server
}

pub fn config_for(catalog: &MockServer) -> Config {
    Config {
        api_url: format!("{}/graphql", catalog.uri()),
        timezone: "UTC".to_string(),
        ..Config::default()
    }
}

/// Serves the application on an ephemeral port and returns its base URL.
pub async fn spawn_app(config: Config) -> String {
    let state = AppState::new(config).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app_router(state)).await.unwrap();
    });
    format!("http://{addr}")
}
