use epic_freebies::catalog::api::create_http_client_with_timeout;
use epic_freebies::testing_utils::TestDataBuilder;
use epic_freebies::{AppError, DatePrecision, GameStatus, send_discord_notification};
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn webhook_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

/// Twelve records produce a single message carrying the first ten
#[tokio::test]
async fn test_notification_caps_at_ten_embeds() {
    let server = webhook_server(204).await;
    let client = create_http_client_with_timeout(10).unwrap();
    let games = TestDataBuilder::games(12);

    send_discord_notification(&client, &format!("{}/webhook", server.uri()), &games)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["content"], "🎮 Free Games from Epic Games Store 🎮");
    let embeds = body["embeds"].as_array().unwrap();
    assert_eq!(embeds.len(), 10);
    assert_eq!(embeds[0]["title"], "Game 0");
    assert_eq!(embeds[9]["title"], "Game 9");
}

/// No records, no request
#[tokio::test]
async fn test_notification_skips_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;
    let client = create_http_client_with_timeout(10).unwrap();

    send_discord_notification(&client, &format!("{}/webhook", server.uri()), &[])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_notification_embed_contents() {
    let server = webhook_server(200).await;
    let client = create_http_client_with_timeout(10).unwrap();
    let games = vec![
        TestDataBuilder::game("Now Free", GameStatus::Free, DatePrecision::Exact),
        TestDataBuilder::game("Soon Free", GameStatus::ComingSoon, DatePrecision::Unknown),
    ];

    send_discord_notification(&client, &format!("{}/webhook", server.uri()), &games)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let free = &body["embeds"][0];
    let soon = &body["embeds"][1];

    assert_eq!(free["color"], 0x2ECC71);
    assert_eq!(free["fields"].as_array().unwrap().len(), 4);
    assert_eq!(free["footer"]["text"], "Dates are exact");
    assert!(free["thumbnail"]["url"].is_string());

    assert_eq!(soon["color"], 0xF1C40F);
    let soon_fields = soon["fields"].as_array().unwrap();
    assert_eq!(soon_fields.len(), 2);
    assert_eq!(soon_fields[1]["name"], "Status");
    assert_eq!(soon_fields[1]["value"], "Coming Soon");
    assert_eq!(soon["footer"]["text"], "Dates are unknown");
}

#[tokio::test]
async fn test_notification_non_2xx_is_error() {
    let server = webhook_server(500).await;
    let client = create_http_client_with_timeout(10).unwrap();
    let games = TestDataBuilder::games(1);

    let result =
        send_discord_notification(&client, &format!("{}/webhook", server.uri()), &games).await;

    match result {
        Err(AppError::Webhook { status }) => assert_eq!(status, 500),
        other => panic!("expected webhook error, got {other:?}"),
    }
}
