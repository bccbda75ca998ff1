//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and recognises the
//! quit keys, which never reach the simulation.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{handle_key_event, should_quit};
