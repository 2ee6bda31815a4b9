use std::sync::Arc;

use reqwest::Client;

use crate::catalog::api::create_http_client_with_timeout;
use crate::config::Config;
use crate::error::AppError;

/// Shared, read-only state handed to every request and scheduled tick.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Client for storefront catalog requests
    pub catalog_client: Client,
    /// Client for Discord deliveries, with the shorter webhook timeout
    pub webhook_client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let catalog_client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let webhook_client = create_http_client_with_timeout(config.webhook_timeout_seconds)?;
        Ok(Self {
            config: Arc::new(config),
            catalog_client,
            webhook_client,
        })
    }

    /// Webhook URL, when notifications are configured.
    pub fn webhook_url(&self) -> Option<&str> {
        self.config
            .discord_webhook_url
            .as_deref()
            .filter(|_| self.config.webhook_configured())
    }
}
