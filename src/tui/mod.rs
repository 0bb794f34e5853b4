//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (loading screen): draws every ~80ms for a smooth spinner.
//! - **Idle** (browsing, detail): sleeps up to 250ms, only redraws on events
//!   or completed fetches.
//!
//! Background fetches run on tokio tasks and report back as `Action`s over
//! an `std::sync::mpsc` channel drained once per frame.

mod component;
mod components;
mod event;
mod ui;

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};

use crate::api::client::{self, ApiError, CharacterSource, SuperheroClient};
use crate::core::action::{Action, Effect, SearchFailure, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::components::GRID_COLUMNS;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core view state).
pub struct TuiState {
    /// Index of the highlighted grid card.
    pub cursor: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the API client from a resolved config.
pub fn build_client(config: &ResolvedConfig) -> Arc<dyn CharacterSource> {
    let api_key = config
        .api_key
        .clone()
        .expect("superhero API key must be set (config file, SUPERHERO_API_KEY env var, or --api-key)");
    Arc::new(SuperheroClient::new(api_key, Some(config.base_url.clone())))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_client(&config);
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Initial load: a grid of random characters
    spawn_effect(&app, Effect::FetchRandomGrid, &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            let Some(action) = translate_event(tui_event, &app, &mut tui) else {
                continue;
            };
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
            } else {
                spawn_effect(&app, effect, &tx);
            }
            clamp_cursor(&mut tui, app.results.len());
        }

        // Handle background fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
            } else {
                spawn_effect(&app, effect, &tx);
            }
            clamp_cursor(&mut tui, app.results.len());
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Maps a terminal event to a core action, given the current view.
///
/// Cursor movement is presentation-only and handled here directly; it never
/// reaches the reducer.
fn translate_event(tui_event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    // Ctrl+C always quits regardless of view
    if matches!(tui_event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if app.rate_limited {
        // Terminal-until-retry overlay: only Esc leaves it
        return match tui_event {
            TuiEvent::Back => Some(Action::DismissRateLimit),
            _ => None,
        };
    }

    if app.selected.is_some() {
        // Detail view: no text input, no grid navigation
        return match tui_event {
            TuiEvent::Back => Some(Action::Back),
            TuiEvent::Random => Some(Action::RandomCharacter),
            _ => None,
        };
    }

    match tui_event {
        TuiEvent::InputChar(c) => Some(Action::QueryInput(c)),
        TuiEvent::Backspace => Some(Action::QueryBackspace),
        TuiEvent::Random => Some(Action::RandomCharacter),
        TuiEvent::Submit => {
            if !app.query.trim().is_empty() {
                Some(Action::SubmitSearch)
            } else if !app.results.is_empty() {
                Some(Action::SelectResult(tui.cursor))
            } else {
                None
            }
        }
        TuiEvent::CursorLeft => {
            tui.cursor = tui.cursor.saturating_sub(1);
            None
        }
        TuiEvent::CursorRight => {
            tui.cursor = step_right(tui.cursor, app.results.len());
            None
        }
        TuiEvent::CursorUp => {
            tui.cursor = tui.cursor.saturating_sub(GRID_COLUMNS);
            None
        }
        TuiEvent::CursorDown => {
            tui.cursor = step_down(tui.cursor, app.results.len());
            None
        }
        TuiEvent::Back | TuiEvent::ForceQuit | TuiEvent::Resize => None,
    }
}

fn step_right(cursor: usize, len: usize) -> usize {
    if cursor + 1 < len { cursor + 1 } else { cursor }
}

fn step_down(cursor: usize, len: usize) -> usize {
    if cursor + GRID_COLUMNS < len {
        cursor + GRID_COLUMNS
    } else {
        cursor
    }
}

fn clamp_cursor(tui: &mut TuiState, len: usize) {
    tui.cursor = tui.cursor.min(len.saturating_sub(1));
}

/// Spawns the tokio task for an effect, reporting back over `tx`.
fn spawn_effect(app: &App, effect: Effect, tx: &mpsc::Sender<Action>) {
    let source = app.source.clone();
    let tx = tx.clone();
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::FetchRandomGrid => {
            info!("Spawning random grid fetch");
            tokio::spawn(async move {
                let action = match client::random_characters(source.as_ref()).await {
                    Ok(characters) => Action::GridLoaded(characters),
                    Err(e) => {
                        warn!("Random grid fetch failed: {}", e);
                        Action::GridFailed(format!("API error: {e}"))
                    }
                };
                if tx.send(action).is_err() {
                    warn!("Failed to send grid result: receiver dropped");
                }
            });
        }
        Effect::FetchRandomOne => {
            info!("Spawning random character fetch");
            tokio::spawn(async move {
                let action = match client::random_character(source.as_ref()).await {
                    Ok(character) => Action::CharacterLoaded(character),
                    Err(e) => {
                        warn!("Random character fetch failed: {}", e);
                        Action::CharacterFailed(format!("API error: {e}"))
                    }
                };
                if tx.send(action).is_err() {
                    warn!("Failed to send character result: receiver dropped");
                }
            });
        }
        Effect::Search(query) => {
            info!("Spawning search for '{}'", query);
            tokio::spawn(async move {
                let action = match source.search(&query).await {
                    Ok(results) => Action::SearchLoaded(results),
                    Err(ApiError::RateLimited) => {
                        Action::SearchFailed(SearchFailure::RateLimited)
                    }
                    Err(e) => {
                        warn!("Search for '{}' failed: {}", query, e);
                        Action::SearchFailed(SearchFailure::Other(format!("API error: {e}")))
                    }
                };
                if tx.send(action).is_err() {
                    warn!("Failed to send search result: receiver dropped");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_character, test_app};

    #[test]
    fn test_step_right_stops_at_last_card() {
        assert_eq!(step_right(0, 4), 1);
        assert_eq!(step_right(3, 4), 3);
        assert_eq!(step_right(0, 0), 0);
    }

    #[test]
    fn test_step_down_moves_one_row() {
        assert_eq!(step_down(1, 8), 5);
        assert_eq!(step_down(5, 8), 5);
    }

    #[test]
    fn test_clamp_cursor_after_shrinking_results() {
        let mut tui = TuiState::new();
        tui.cursor = 7;
        clamp_cursor(&mut tui, 2);
        assert_eq!(tui.cursor, 1);
        clamp_cursor(&mut tui, 0);
        assert_eq!(tui.cursor, 0);
    }

    #[test]
    fn test_enter_with_query_submits_search() {
        let mut app = test_app();
        app.is_loading = false;
        app.query = String::from("batman");
        let mut tui = TuiState::new();
        let action = translate_event(TuiEvent::Submit, &app, &mut tui);
        assert_eq!(action, Some(Action::SubmitSearch));
    }

    #[test]
    fn test_enter_with_empty_query_opens_highlighted_card() {
        let mut app = test_app();
        app.is_loading = false;
        app.results = vec![sample_character(1, "A"), sample_character(2, "B")];
        let mut tui = TuiState::new();
        tui.cursor = 1;
        let action = translate_event(TuiEvent::Submit, &app, &mut tui);
        assert_eq!(action, Some(Action::SelectResult(1)));
    }

    #[test]
    fn test_detail_view_ignores_text_input() {
        let mut app = test_app();
        app.is_loading = false;
        app.selected = Some(sample_character(1, "A"));
        let mut tui = TuiState::new();
        assert_eq!(translate_event(TuiEvent::InputChar('x'), &app, &mut tui), None);
        assert_eq!(translate_event(TuiEvent::Back, &app, &mut tui), Some(Action::Back));
    }

    #[test]
    fn test_rate_limited_view_only_dismisses_on_back() {
        let mut app = test_app();
        app.is_loading = false;
        app.rate_limited = true;
        let mut tui = TuiState::new();
        assert_eq!(translate_event(TuiEvent::InputChar('x'), &app, &mut tui), None);
        assert_eq!(translate_event(TuiEvent::Submit, &app, &mut tui), None);
        assert_eq!(
            translate_event(TuiEvent::Back, &app, &mut tui),
            Some(Action::DismissRateLimit)
        );
    }

    #[test]
    fn test_ctrl_c_quits_from_any_view() {
        let mut app = test_app();
        app.rate_limited = true;
        let mut tui = TuiState::new();
        assert_eq!(
            translate_event(TuiEvent::ForceQuit, &app, &mut tui),
            Some(Action::Quit)
        );
    }
}
