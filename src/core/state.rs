//! # Application State
//!
//! Core view state for Herodex. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CharacterSource>  // character API
//! ├── query: String                     // search input
//! ├── results: Vec<Character>           // current grid / search results
//! ├── selected: Option<Character>       // detail view (excludes results)
//! ├── is_loading: bool                  // initial fetch in flight
//! ├── rate_limited: bool                // search hit the API quota
//! └── status_message: String            // status bar text
//! ```
//!
//! `results` and `selected` are mutually exclusive: opening a character
//! clears the list, going back clears the selection. State changes only
//! happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::client::CharacterSource;
use crate::api::types::Character;

pub struct App {
    pub source: Arc<dyn CharacterSource>,
    pub query: String,
    pub results: Vec<Character>,
    pub selected: Option<Character>,
    pub is_loading: bool,
    pub rate_limited: bool,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self {
            source,
            query: String::new(),
            results: Vec::new(),
            selected: None,
            is_loading: true,
            rate_limited: false,
            status_message: String::from("Fetching random characters..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.is_loading);
        assert!(!app.rate_limited);
        assert!(app.query.is_empty());
        assert!(app.results.is_empty());
        assert!(app.selected.is_none());
    }
}
