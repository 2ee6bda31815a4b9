pub mod api;
pub mod models;
pub mod processors;
pub mod urls;

pub use api::{FetchParams, fetch_free_games};
pub use models::{ApiResponse, DatePrecision, GameStatus, NormalizedGame};
pub use processors::build_games;
