//! Terminal Flappy Bird (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_flappy::{audio,core,input,term,types}` and owns the
//! runtime configuration used by the binary.

pub mod config;

pub use tui_flappy_audio as audio;
pub use tui_flappy_core as core;
pub use tui_flappy_input as input;
pub use tui_flappy_term as term;
pub use tui_flappy_types as types;

pub use config::AppConfig;
