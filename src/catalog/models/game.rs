use serde::{Deserialize, Serialize};

/// Availability of a normalized game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "coming soon")]
    ComingSoon,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Free => "free",
            GameStatus::ComingSoon => "coming soon",
        }
    }
}

/// How trustworthy the start/end dates of a record are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    /// Dates come straight from a promotion offer
    Exact,
    /// Dates were synthesized from a zero price
    Estimated,
    /// No date basis was found
    Unknown,
}

impl DatePrecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePrecision::Exact => "exact",
            DatePrecision::Estimated => "estimated",
            DatePrecision::Unknown => "unknown",
        }
    }
}

/// One output record per surviving catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedGame {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub url: String,
    pub status: GameStatus,
    pub start_date: String,
    pub end_date: String,
    pub date_precision: DatePrecision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

/// Envelope returned by the `/api/free-games` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub count: usize,
    pub data: Vec<NormalizedGame>,
}

impl ApiResponse {
    pub fn success(games: Vec<NormalizedGame>) -> Self {
        Self {
            success: true,
            message: None,
            count: games.len(),
            data: games,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: 0,
            data: Vec::new(),
        }
    }
}
