//! # Actions
//!
//! Everything that can happen in Herodex becomes an `Action`.
//! User presses Enter on a query? That's `Action::SubmitSearch`.
//! A fetch lands? That's `Action::GridLoaded(characters)`.
//!
//! The `update()` function mutates the state and returns an `Effect`
//! describing the I/O the run loop must perform. No side effects here;
//! fetching happens in the TUI's spawned tasks.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```

use crate::api::types::Character;
use crate::core::state::App;

/// Why a search came back empty-handed.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFailure {
    /// The API reported `error: "limit"` — quota exhausted.
    RateLimited,
    /// Any other failure, collapsed to a message.
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A character typed into the search input.
    QueryInput(char),
    QueryBackspace,
    /// Enter with a non-empty query.
    SubmitSearch,
    SearchLoaded(Vec<Character>),
    SearchFailed(SearchFailure),
    /// The startup / post-Back random grid arrived.
    GridLoaded(Vec<Character>),
    GridFailed(String),
    /// Enter on a grid card.
    SelectResult(usize),
    /// Ctrl+R — fetch one random character straight into the detail view.
    RandomCharacter,
    CharacterLoaded(Character),
    CharacterFailed(String),
    /// Esc in the detail view.
    Back,
    /// Esc on the rate-limited screen — return to browsing for a retry.
    DismissRateLimit,
    Quit,
}

/// I/O the run loop must perform after an `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FetchRandomGrid,
    FetchRandomOne,
    Search(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::QueryInput(c) => {
            app.query.push(c);
            Effect::None
        }
        Action::QueryBackspace => {
            app.query.pop();
            Effect::None
        }
        Action::SubmitSearch => {
            let query = app.query.trim().to_string();
            if query.is_empty() {
                return Effect::None;
            }
            app.query.clear();
            app.status_message = format!("Searching for \"{query}\"...");
            Effect::Search(query)
        }
        Action::SearchLoaded(results) => {
            app.status_message = match results.len() {
                0 => String::from("No characters found"),
                1 => String::from("1 character found"),
                n => format!("{n} characters found"),
            };
            app.results = results;
            app.selected = None;
            app.rate_limited = false;
            Effect::None
        }
        Action::SearchFailed(failure) => {
            app.results.clear();
            app.selected = None;
            match failure {
                SearchFailure::RateLimited => {
                    app.rate_limited = true;
                    app.status_message = String::from("Too many requests");
                }
                SearchFailure::Other(message) => {
                    app.status_message = message;
                }
            }
            Effect::None
        }
        Action::GridLoaded(results) => {
            app.results = results;
            app.is_loading = false;
            app.status_message = String::from("Showing random characters");
            Effect::None
        }
        Action::GridFailed(message) => {
            app.results.clear();
            app.is_loading = false;
            app.status_message = message;
            Effect::None
        }
        Action::SelectResult(index) => {
            if let Some(character) = app.results.get(index).cloned() {
                app.selected = Some(character);
                app.results.clear();
            }
            Effect::None
        }
        Action::RandomCharacter => {
            app.status_message = String::from("Fetching a random character...");
            Effect::FetchRandomOne
        }
        Action::CharacterLoaded(character) => {
            app.status_message = character.name.clone();
            app.selected = Some(character);
            app.results.clear();
            Effect::None
        }
        Action::CharacterFailed(message) => {
            app.results.clear();
            app.status_message = message;
            Effect::None
        }
        Action::Back => {
            if app.selected.take().is_some() {
                app.status_message = String::from("Fetching random characters...");
                Effect::FetchRandomGrid
            } else {
                Effect::None
            }
        }
        Action::DismissRateLimit => {
            app.rate_limited = false;
            app.status_message = String::from("Try another search later");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
