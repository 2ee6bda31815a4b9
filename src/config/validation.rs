use std::path::Path;
use std::str::FromStr;

use super::Config;
use crate::error::AppError;

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Port must be non-zero
/// - Country code, locale and timezone cannot be empty
/// - API URL and webhook URL (if set) must be http(s) URLs
/// - Timeouts must be positive
/// - Cron expression must parse when scheduled checks are enabled
/// - Log file parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.port == 0 {
        return Err(AppError::config_error("Port must be between 1 and 65535"));
    }

    for (name, value) in [
        ("Country code", &config.country_code),
        ("Locale", &config.locale),
        ("Timezone", &config.timezone),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::config_error(format!("{name} cannot be empty")));
        }
    }

    if !is_http_url(&config.api_url) {
        return Err(AppError::config_error(format!(
            "API URL must start with http:// or https:// (got '{}')",
            config.api_url
        )));
    }

    if let Some(webhook) = &config.discord_webhook_url
        && !webhook.trim().is_empty()
        && !is_http_url(webhook)
    {
        return Err(AppError::config_error(
            "Discord webhook URL must start with http:// or https://",
        ));
    }

    if config.http_timeout_seconds == 0 || config.webhook_timeout_seconds == 0 {
        return Err(AppError::config_error("Timeouts must be at least one second"));
    }

    if config.enable_cron {
        cron::Schedule::from_str(&config.cron_schedule)
            .map_err(|e| AppError::schedule_error(&config.cron_schedule, e.to_string()))?;
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
