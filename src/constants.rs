//! Application-wide constants and configuration values
//!
//! Centralizes upstream query parameters, URLs, timeouts and notification
//! limits so the processors and the service layer agree on them.

/// Default timeout for upstream catalog requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Default timeout for outbound webhook requests in seconds
pub const DEFAULT_WEBHOOK_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default GraphQL endpoint of the storefront
pub const DEFAULT_API_URL: &str = "https://graphql.epicgames.com/graphql";

/// Store detail page template; the page slug is appended
pub const STORE_PAGE_BASE_URL: &str = "https://store.epicgames.com/en-US/p/";

/// User agent sent with upstream requests
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Date literal used when no promotion window could be resolved
pub const UNKNOWN_DATE: &str = "Unknown";

/// Output format for promotion dates
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Default service settings
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const COUNTRY_CODE: &str = "PH";
    pub const LOCALE: &str = "en-PH";
    pub const TIMEZONE: &str = "Asia/Manila";
    /// Daily at midnight (seconds-first cron syntax)
    pub const CRON_SCHEDULE: &str = "0 0 0 * * *";
}

/// Search parameters sent with every catalog query
pub mod query {
    pub const CATEGORY: &str = "games/edition/base|bundles/games|editors";
    pub const COUNT: u32 = 100;
    pub const FREE_GAME: bool = true;
    pub const ON_SALE: bool = true;
}

/// Promotion classification
pub mod promotion {
    /// Discount percentage that marks an offer as free of charge
    pub const FREE_DISCOUNT_PERCENTAGE: i32 = 100;

    /// Length of the synthesized window for zero-priced entries
    pub const ESTIMATED_WINDOW_DAYS: i64 = 7;

    /// Hours east of UTC used when a timezone identifier cannot be resolved
    pub const FALLBACK_OFFSET_HOURS: i32 = 8;

    /// Display name of the fallback zone
    pub const FALLBACK_ZONE_NAME: &str = "UTC+8";

    /// Image labels accepted as thumbnails
    pub const THUMBNAIL_IMAGE_TYPES: [&str; 2] = ["Thumbnail", "DieselGameBox"];
}

/// Discord webhook payload constants
pub mod webhook {
    /// Discord accepts at most ten embeds per message
    pub const MAX_EMBEDS_PER_MESSAGE: usize = 10;

    pub const MESSAGE_CONTENT: &str = "🎮 Free Games from Epic Games Store 🎮";

    pub const COLOR_FREE: u32 = 0x2ECC71;
    pub const COLOR_COMING_SOON: u32 = 0xF1C40F;
}

/// Environment variable names
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
    pub const COUNTRY_CODE: &str = "COUNTRY_CODE";
    pub const LOCALE: &str = "LOCALE";
    pub const TIMEZONE: &str = "TIMEZONE";
    pub const ENABLE_CRON: &str = "ENABLE_CRON";
    pub const CRON_SCHEDULE: &str = "CRON_SCHEDULE";

    /// Override for the GraphQL endpoint
    pub const API_URL: &str = "EPIC_API_URL";

    /// Upstream HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "EPIC_HTTP_TIMEOUT";

    /// Log file path override
    pub const LOG_FILE: &str = "EPIC_LOG_FILE";
}
