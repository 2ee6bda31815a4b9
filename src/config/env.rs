//! Environment-variable overrides for the configuration

use tracing::warn;

use super::Config;
use crate::constants::env_vars;

/// Parses a boolean the way the service accepts it on the command line,
/// in the environment and in query strings.
///
/// Accepted values are `1`, `t`, `T`, `TRUE`, `true`, `True` and their
/// false counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`. Anything else
/// yields `None`.
///
/// # Examples
///
/// ```
/// use epic_freebies::config::env::parse_bool;
///
/// assert_eq!(parse_bool("True"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, raw: &str, current: T) -> T {
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!("Ignoring invalid value '{raw}' for {key}");
            current
        }
    }
}

impl Config {
    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. Values that fail to parse are
    /// logged and leave the current setting untouched.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(port) = get(env_vars::PORT) {
            self.port = parse_or_warn(env_vars::PORT, &port, self.port);
        }
        if let Some(url) = get(env_vars::DISCORD_WEBHOOK_URL) {
            self.discord_webhook_url = Some(url);
        }
        if let Some(country) = get(env_vars::COUNTRY_CODE) {
            self.country_code = country;
        }
        if let Some(locale) = get(env_vars::LOCALE) {
            self.locale = locale;
        }
        if let Some(timezone) = get(env_vars::TIMEZONE) {
            self.timezone = timezone;
        }
        if let Some(raw) = get(env_vars::ENABLE_CRON) {
            match parse_bool(raw.trim()) {
                Some(enabled) => self.enable_cron = enabled,
                None => warn!("Ignoring invalid value '{raw}' for {}", env_vars::ENABLE_CRON),
            }
        }
        if let Some(schedule) = get(env_vars::CRON_SCHEDULE) {
            self.cron_schedule = schedule;
        }
        if let Some(api_url) = get(env_vars::API_URL) {
            self.api_url = api_url;
        }
        if let Some(timeout) = get(env_vars::HTTP_TIMEOUT) {
            self.http_timeout_seconds =
                parse_or_warn(env_vars::HTTP_TIMEOUT, &timeout, self.http_timeout_seconds);
        }
        if let Some(log_file) = get(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file);
        }
    }
}
