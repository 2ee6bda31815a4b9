use crate::constants::{self, defaults};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub mod env;
pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the service.
///
/// Values are layered: built-in defaults, then the optional TOML file, then
/// environment variables, then command-line flags.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Discord webhook for notifications. Notifications are disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_webhook_url: Option<String>,
    /// Storefront country sent with catalog queries.
    pub country_code: String,
    /// Storefront locale sent with catalog queries.
    pub locale: String,
    /// IANA name or `UTC±N` offset used when rendering promotion dates.
    pub timezone: String,
    /// Enables the periodic check-and-notify task in server mode.
    pub enable_cron: bool,
    /// Seconds-first cron expression for the periodic task.
    pub cron_schedule: String,
    /// GraphQL endpoint of the storefront.
    pub api_url: String,
    /// HTTP timeout in seconds for catalog requests.
    pub http_timeout_seconds: u64,
    /// HTTP timeout in seconds for webhook deliveries.
    pub webhook_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: defaults::PORT,
            discord_webhook_url: None,
            country_code: defaults::COUNTRY_CODE.to_string(),
            locale: defaults::LOCALE.to_string(),
            timezone: defaults::TIMEZONE.to_string(),
            enable_cron: false,
            cron_schedule: defaults::CRON_SCHEDULE.to_string(),
            api_url: constants::DEFAULT_API_URL.to_string(),
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            webhook_timeout_seconds: constants::DEFAULT_WEBHOOK_TIMEOUT_SECONDS,
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location and the
    /// process environment.
    ///
    /// # Environment Variables
    /// - `PORT`, `DISCORD_WEBHOOK_URL`, `COUNTRY_CODE`, `LOCALE`, `TIMEZONE`
    /// - `ENABLE_CRON`, `CRON_SCHEDULE`
    /// - `EPIC_API_URL`, `EPIC_HTTP_TIMEOUT`, `EPIC_LOG_FILE`
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - The config file exists but could not be read or parsed
    ///
    /// # Notes
    /// - A missing config file is not an error; defaults are used
    /// - Environment variables take precedence over config file
    /// - Validation is left to the caller so command-line flags can be applied first
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            debug!("Loading config file from {config_path}");
            Self::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Whether Discord notifications can be sent.
    pub fn webhook_configured(&self) -> bool {
        self.discord_webhook_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration on stdout.
    ///
    /// The webhook URL embeds a secret token and is only reported as set or unset.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Server Port:");
        println!("{}", self.port);
        println!("────────────────────────────────────");
        println!("Storefront:");
        println!("country={} locale={}", self.country_code, self.locale);
        println!("────────────────────────────────────");
        println!("Timezone:");
        println!("{}", self.timezone);
        println!("────────────────────────────────────");
        println!("API URL:");
        println!("{}", self.api_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeouts:");
        println!(
            "catalog {} seconds, webhook {} seconds",
            self.http_timeout_seconds, self.webhook_timeout_seconds
        );
        println!("────────────────────────────────────");
        println!("Discord Webhook:");
        println!(
            "{}",
            if self.webhook_configured() {
                "configured"
            } else {
                "not configured"
            }
        );
        println!("────────────────────────────────────");
        println!("Scheduled Checks:");
        if self.enable_cron {
            println!("enabled ({})", self.cron_schedule);
        } else {
            println!("disabled");
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/epic_freebies.log");
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path. Missing keys take their defaults.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
