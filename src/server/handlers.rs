use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, info, warn};

use super::state::AppState;
use crate::catalog::api::{FetchParams, fetch_free_games};
use crate::catalog::models::ApiResponse;
use crate::config::env::parse_bool;
use crate::notify::send_discord_notification;

const INDEX_HTML: &str = include_str!("index.html");

/// Query string of `/api/free-games`. Empty values count as absent.
#[derive(Debug, Default)]
pub struct FreeGamesQuery {
    pub upcoming: Option<String>,
    pub notify: Option<String>,
    pub country: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FreeGamesQuery {
    /// Builds the query from raw pairs. A repeated key keeps its first value
    /// and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "upcoming" => &mut query.upcoming,
                "notify" => &mut query.notify,
                "country" => &mut query.country,
                "locale" => &mut query.locale,
                "timezone" => &mut query.timezone,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Invalid values keep the default of `true`.
    pub fn include_upcoming(&self) -> bool {
        non_empty(&self.upcoming)
            .and_then(parse_bool)
            .unwrap_or(true)
    }

    /// Absent means "notify if a webhook exists"; present but invalid means no.
    pub fn should_notify(&self, webhook_configured: bool) -> bool {
        match non_empty(&self.notify) {
            None => webhook_configured,
            Some(raw) => parse_bool(raw).unwrap_or(false) && webhook_configured,
        }
    }

    pub fn fetch_params(&self, state: &AppState) -> FetchParams {
        let config = &state.config;
        FetchParams {
            country: non_empty(&self.country)
                .unwrap_or(config.country_code.as_str())
                .to_string(),
            locale: non_empty(&self.locale).unwrap_or(config.locale.as_str()).to_string(),
            include_upcoming: self.include_upcoming(),
            timezone: non_empty(&self.timezone)
                .unwrap_or(config.timezone.as_str())
                .to_string(),
        }
    }
}

/// Pretty-printed JSON body with the given status.
fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!("Failed to serialize response: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to serialize response").into_response()
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn free_games(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = FreeGamesQuery::from_pairs(pairs);
    let params = query.fetch_params(&state);
    let send_notification = query.should_notify(state.webhook_url().is_some());

    let games = match fetch_free_games(&state.catalog_client, &state.config, &params).await {
        Ok(games) => games,
        Err(e) => {
            if e.is_transient() {
                warn!("Error fetching games: {e}");
            } else {
                error!("Error fetching games: {e}");
            }
            return pretty_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ApiResponse::failure(format!("Error fetching games: {e}")),
            );
        }
    };

    if send_notification && let Some(webhook_url) = state.webhook_url() {
        match send_discord_notification(&state.webhook_client, webhook_url, &games).await {
            Ok(()) => info!("Discord notification sent for {} games", games.len()),
            Err(e) => error!("Error sending Discord notification: {e}"),
        }
    }

    pretty_json(StatusCode::OK, &ApiResponse::success(games))
}

#[derive(Debug, Serialize)]
struct NotifyResponse {
    success: bool,
    message: String,
}

pub async fn notify(State(state): State<AppState>) -> Response {
    let Some(webhook_url) = state.webhook_url() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Discord webhook URL not configured",
        )
            .into_response();
    };

    let params = FetchParams::from_config(&state.config, true);
    let games = match fetch_free_games(&state.catalog_client, &state.config, &params).await {
        Ok(games) => games,
        Err(e) => {
            error!("Error fetching games: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching games: {e}"),
            )
                .into_response();
        }
    };

    if let Err(e) = send_discord_notification(&state.webhook_client, webhook_url, &games).await {
        error!("Error sending Discord notification: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error sending Discord notification: {e}"),
        )
            .into_response();
    }

    Json(NotifyResponse {
        success: true,
        message: format!("Notification sent for {} games", games.len()),
    })
    .into_response()
}
