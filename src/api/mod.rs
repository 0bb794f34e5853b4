pub mod client;
pub mod types;

pub use client::{ApiError, CharacterSource, SuperheroClient};
pub use types::{Character, SearchResponse};
