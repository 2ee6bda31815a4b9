//! Epic Games Store free games service library
//!
//! Fetches the storefront catalog over GraphQL, classifies each entry's
//! promotions and turns the free (or soon free) ones into normalized records.
//! The records are served over HTTP and can be posted to a Discord webhook.
//!
//! # Examples
//!
//! ```rust,no_run
//! use epic_freebies::catalog::api::{FetchParams, create_http_client_with_timeout, fetch_free_games};
//! use epic_freebies::config::Config;
//! use epic_freebies::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let params = FetchParams::from_config(&config, true);
//!
//!     for game in fetch_free_games(&client, &config, &params).await? {
//!         println!("{} ({}) until {}", game.title, game.status.as_str(), game.end_date);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod notify;
pub mod scheduler;
pub mod server;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use catalog::api::{FetchParams, fetch_free_games};
pub use catalog::models::{ApiResponse, DatePrecision, GameStatus, NormalizedGame};
pub use catalog::processors::build_games;
pub use config::Config;
pub use error::AppError;
pub use notify::send_discord_notification;
pub use server::{AppState, app_router};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
