//! JSON-over-HTTP POST with status mapping and decode diagnostics

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Number of body characters kept in error messages
const BODY_PREVIEW_CHARS: usize = 200;

fn body_preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

/// Maps a non-success status onto a typed error.
fn status_error(status: reqwest::StatusCode, body: &str, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    let preview = body_preview(body);
    let message = if preview.trim().is_empty() {
        reason.to_string()
    } else {
        format!("{reason}, response: {preview}")
    };

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(message, url),
        400..=499 => AppError::api_client_error(status_code, message, url),
        502 | 503 => AppError::api_service_unavailable(status_code, message, url),
        _ => AppError::api_server_error(status_code, message, url),
    }
}

/// POSTs `body` as JSON and decodes the JSON answer.
///
/// Transport failures, non-success statuses and undecodable bodies each map
/// onto their own [`AppError`] variant. Nothing is retried.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - Endpoint to post to
/// * `body` - Request payload
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client, body))]
pub(super) async fn post_json<B, T>(client: &Client, url: &str, body: &B) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    info!("Posting query to URL: {url}");

    let response = match client.post(url).json(body).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    if !status.is_success() {
        error!("HTTP {} (URL: {})", status.as_u16(), url);
        return Err(status_error(status, &response_text, url));
    }

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!("Response text (first 200 chars): {}", body_preview(&response_text));

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
