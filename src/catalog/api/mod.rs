pub mod http_client;
pub mod query;
mod core;
mod fetch_utils;

// Re-export HTTP client utilities
pub use http_client::*;
// Re-export core API functions
pub use self::core::*;
