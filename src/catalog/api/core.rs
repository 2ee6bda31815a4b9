use chrono::Utc;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch_utils::post_json;
use super::query::GraphQlRequest;
use crate::catalog::models::{CatalogResponse, NormalizedGame};
use crate::catalog::processors::build_games;
use crate::config::Config;
use crate::error::AppError;

/// Parameters of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub country: String,
    pub locale: String,
    pub include_upcoming: bool,
    pub timezone: String,
}

impl FetchParams {
    /// Uses the configured storefront country, locale and timezone.
    pub fn from_config(config: &Config, include_upcoming: bool) -> Self {
        Self {
            country: config.country_code.clone(),
            locale: config.locale.clone(),
            include_upcoming,
            timezone: config.timezone.clone(),
        }
    }
}

/// Runs the storefront search and returns the raw catalog response.
///
/// A response carrying GraphQL `errors` but no `data` is an error; errors
/// reported alongside data are logged and otherwise ignored.
#[instrument(skip(client))]
pub async fn fetch_catalog(
    client: &Client,
    api_url: &str,
    country: &str,
    locale: &str,
) -> Result<CatalogResponse, AppError> {
    let request = GraphQlRequest::search_store(country, locale);
    let response: CatalogResponse = post_json(client, api_url, &request).await?;

    if let Some(errors) = response.errors.as_ref().filter(|errors| !errors.is_empty()) {
        let joined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        if response.data.is_none() {
            return Err(AppError::graphql_error(joined, api_url));
        }
        warn!("GraphQL reported errors alongside data: {joined}");
    }

    Ok(response)
}

/// Fetches the storefront catalog and normalizes it into free-game records.
///
/// This is the single pipeline entry point shared by the HTTP handlers, the
/// scheduler and the one-shot CLI mode. Each call is independent: it performs
/// one upstream request and builds its own result list.
///
/// # Arguments
/// * `client` - HTTP client used for the upstream request
/// * `config` - Service configuration (provides the GraphQL endpoint)
/// * `params` - Country, locale, timezone and upcoming-inclusion flag
///
/// # Returns
/// * `Result<Vec<NormalizedGame>, AppError>` - Records in upstream order, or the
///   transport/decode failure that aborted the invocation
#[instrument(skip(client, config))]
pub async fn fetch_free_games(
    client: &Client,
    config: &Config,
    params: &FetchParams,
) -> Result<Vec<NormalizedGame>, AppError> {
    let response = fetch_catalog(client, &config.api_url, &params.country, &params.locale).await?;
    let elements = response.into_elements();
    let games = build_games(
        &elements,
        params.include_upcoming,
        &params.timezone,
        Utc::now(),
    );

    info!(
        "Found {} free game(s) among {} catalog entries",
        games.len(),
        elements.len()
    );
    Ok(games)
}
