//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::client::{ApiError, CharacterSource};
use crate::api::types::{Appearance, Biography, Character, Image, Powerstats};
use crate::core::state::App;

/// Builds a fully-populated character without touching the network.
pub fn sample_character(id: u32, name: &str) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        image: Some(Image {
            url: format!("https://example.com/{id}.jpg"),
        }),
        biography: Biography {
            full_name: format!("{name} Prime"),
            place_of_birth: String::from("Gotham City"),
            aliases: vec![String::from("The Caped One")],
        },
        appearance: Appearance {
            gender: String::from("Male"),
            race: String::from("Human"),
            height: vec![String::from("6'2"), String::from("188 cm")],
            weight: vec![String::from("210 lb"), String::from("95 kg")],
        },
        powerstats: Powerstats {
            intelligence: String::from("81"),
            strength: String::from("40"),
            speed: String::from("29"),
            durability: String::from("55"),
            power: String::from("63"),
            combat: String::from("90"),
        },
    }
}

/// An in-memory source that records every requested ID.
pub struct StubSource {
    requested_ids: Mutex<Vec<u32>>,
    fail: bool,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            requested_ids: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A source whose every lookup fails with a network error.
    pub fn failing() -> Self {
        Self {
            requested_ids: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn requested_ids(&self) -> Vec<u32> {
        self.requested_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl CharacterSource for StubSource {
    async fn character(&self, id: u32) -> Result<Character, ApiError> {
        self.requested_ids.lock().unwrap().push(id);
        if self.fail {
            return Err(ApiError::Network(String::from("stub failure")));
        }
        Ok(sample_character(id, &format!("Character {id}")))
    }

    async fn search(&self, name: &str) -> Result<Vec<Character>, ApiError> {
        if self.fail {
            return Err(ApiError::Network(String::from("stub failure")));
        }
        Ok(vec![sample_character(1, name)])
    }
}

/// Creates a test App backed by a StubSource.
pub fn test_app() -> App {
    App::new(Arc::new(StubSource::new()))
}
