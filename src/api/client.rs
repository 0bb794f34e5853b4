//! HTTP adapter for superheroapi.com.
//!
//! `SuperheroClient` is the real reqwest-backed implementation; the
//! `CharacterSource` trait is the seam that lets the TUI run against a stub
//! in tests. Random-pick helpers live here too so both the grid and the
//! single-character lookup share one ID policy.

use std::fmt;

use async_trait::async_trait;
use futures::future::try_join_all;
use log::{debug, warn};
use rand::Rng;

use super::types::{Character, SearchResponse};

pub const DEFAULT_BASE_URL: &str = "https://superheroapi.com/api";

/// The API serves character IDs 1..=731.
pub const MAX_CHARACTER_ID: u32 = 731;

/// Number of characters fetched for the browsing grid.
pub const GRID_SIZE: usize = 4;

/// Errors that can occur while talking to the character API.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API reported an error, either as a non-2xx status or as an
    /// `{"response":"error"}` envelope.
    Api { status: u16, message: String },
    /// The search endpoint reported `error: "limit"` — quota exhausted.
    RateLimited,
    /// Failed to parse the API's response body.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::RateLimited => write!(f, "rate limited: too many requests"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Anything that can serve characters by ID and by name.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetches a single character by its numeric ID.
    async fn character(&self, id: u32) -> Result<Character, ApiError>;

    /// Searches characters by name. `Err(ApiError::RateLimited)` signals a
    /// quota error as opposed to a generic failure.
    async fn search(&self, name: &str) -> Result<Vec<Character>, ApiError>;
}

/// reqwest-backed client for superheroapi.com.
pub struct SuperheroClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl SuperheroClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - superheroapi.com access token
    /// * `base_url` - Optional custom base URL (defaults to the public API;
    ///   tests point this at a mock server)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/{}/{}", self.base_url, self.api_key, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("API error: {} - {}", status, message);
            return Err(ApiError::Api { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CharacterSource for SuperheroClient {
    async fn character(&self, id: u32) -> Result<Character, ApiError> {
        let value = self.get_json(&id.to_string()).await?;

        // The by-ID endpoint reports failures inside a 200 body.
        if value.get("response").and_then(|v| v.as_str()) == Some("error") {
            let message = value
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown error")
                .to_string();
            warn!("Character lookup failed for id {}: {}", id, message);
            return Err(ApiError::Api {
                status: 200,
                message,
            });
        }

        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn search(&self, name: &str) -> Result<Vec<Character>, ApiError> {
        let value = self.get_json(&format!("search/{name}")).await?;
        let parsed: SearchResponse =
            serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))?;

        if parsed.response == "error" {
            return match parsed.error.as_deref() {
                Some("limit") => {
                    warn!("Search for '{}' hit the API rate limit", name);
                    Err(ApiError::RateLimited)
                }
                other => Err(ApiError::Api {
                    status: 200,
                    message: other.unwrap_or("unknown error").to_string(),
                }),
            };
        }

        Ok(parsed.results.unwrap_or_default())
    }
}

/// Picks one pseudo-random ID in [1, 731] for the single-character lookup.
pub fn random_detail_id() -> u32 {
    rand::thread_rng().gen_range(1..=MAX_CHARACTER_ID)
}

/// Picks the grid's pseudo-random IDs, each in [0, 731).
pub fn random_grid_ids() -> [u32; GRID_SIZE] {
    let mut rng = rand::thread_rng();
    std::array::from_fn(|_| rng.gen_range(0..MAX_CHARACTER_ID))
}

/// Fetches one random character.
pub async fn random_character(source: &dyn CharacterSource) -> Result<Character, ApiError> {
    source.character(random_detail_id()).await
}

/// Fetches the grid's random characters with concurrent lookups, joined
/// before returning. Any single failure collapses the whole batch.
pub async fn random_characters(
    source: &dyn CharacterSource,
) -> Result<Vec<Character>, ApiError> {
    let ids = random_grid_ids();
    try_join_all(ids.iter().map(|&id| source.character(id))).await
}
