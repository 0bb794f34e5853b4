//! # Core Application Logic
//!
//! This module contains Herodex's view-state logic.
//! It knows nothing about any specific UI technology.
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all view state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Layered configuration (file, env, CLI)

pub mod action;
pub mod config;
pub mod state;
