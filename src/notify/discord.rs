use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::catalog::models::{GameStatus, NormalizedGame};
use crate::constants::{UNKNOWN_DATE, webhook};
use crate::error::AppError;

/// Body of a Discord webhook call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebhookMessage {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub color: u32,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

impl EmbedField {
    fn new(name: &str, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmbedThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
}

fn status_color(status: GameStatus) -> u32 {
    match status {
        GameStatus::Free => webhook::COLOR_FREE,
        GameStatus::ComingSoon => webhook::COLOR_COMING_SOON,
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Free => "Currently Free",
        GameStatus::ComingSoon => "Coming Soon",
    }
}

/// Builds the embed describing one game.
pub fn create_game_embed(game: &NormalizedGame, now: DateTime<Utc>) -> Embed {
    let mut fields = Vec::with_capacity(4);

    if let Some(publisher) = &game.publisher {
        fields.push(EmbedField::new("Publisher", publisher.as_str(), true));
    }
    fields.push(EmbedField::new("Status", status_label(game.status), true));
    if game.start_date != UNKNOWN_DATE {
        fields.push(EmbedField::new("Available From", game.start_date.as_str(), false));
    }
    if game.end_date != UNKNOWN_DATE {
        fields.push(EmbedField::new("Available Until", game.end_date.as_str(), false));
    }

    Embed {
        title: game.title.clone(),
        description: game.description.clone(),
        url: game.url.clone(),
        color: status_color(game.status),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        fields,
        thumbnail: game
            .image_url
            .as_ref()
            .map(|url| EmbedThumbnail { url: url.clone() }),
        footer: EmbedFooter {
            text: format!("Dates are {}", game.date_precision.as_str()),
        },
    }
}

/// Builds the webhook body; games past the Discord embed limit are left out.
pub fn build_webhook_message(games: &[NormalizedGame], now: DateTime<Utc>) -> WebhookMessage {
    WebhookMessage {
        content: webhook::MESSAGE_CONTENT.to_string(),
        embeds: games
            .iter()
            .take(webhook::MAX_EMBEDS_PER_MESSAGE)
            .map(|game| create_game_embed(game, now))
            .collect(),
    }
}

/// Posts the games to a Discord webhook.
///
/// An empty list is a no-op and makes no request. The caller supplies a client
/// with the webhook timeout applied.
///
/// # Errors
/// * `AppError::Webhook` - Discord answered with a non-2xx status
/// * `AppError::NetworkTimeout` / `AppError::ApiFetch` - the request itself failed
#[instrument(skip(client, webhook_url, games), fields(games = games.len()))]
pub async fn send_discord_notification(
    client: &Client,
    webhook_url: &str,
    games: &[NormalizedGame],
) -> Result<(), AppError> {
    if games.is_empty() {
        info!("No games to notify about, skipping webhook");
        return Ok(());
    }

    let message = build_webhook_message(games, Utc::now());
    let response = client
        .post(webhook_url)
        .json(&message)
        .send()
        .await
        .map_err(|e| {
            error!("Webhook request failed: {e}");
            if e.is_timeout() {
                AppError::network_timeout("discord webhook")
            } else {
                AppError::ApiFetch(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        error!("Discord webhook returned HTTP {}", status.as_u16());
        return Err(AppError::webhook_error(status.as_u16()));
    }

    info!(
        "Sent Discord notification with {} embed(s)",
        message.embeds.len()
    );
    Ok(())
}
