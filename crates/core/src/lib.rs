//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Flappy Bird rules: physics, the pipe stream,
//! collision and scoring, and the session lifecycle.
//! It has **zero dependencies** on the terminal, audio, or any other I/O:
//!
//! - **Deterministic**: the only randomness is the gap height of new pipes,
//!   drawn from an injected `rand::Rng`; same seed, same game
//! - **Testable**: every rule is a small function with unit tests
//! - **Portable**: runs headless, in a terminal, or in a benchmark
//!
//! # Module Structure
//!
//! - [`config`]: world geometry and tuning, validated before the first tick
//! - [`entity`]: bird and pipe data
//! - [`rng`]: gap-top sampling
//! - [`physics`]: gravity and scrolling
//! - [`pipes`]: spawn/despawn of the pipe sequence
//! - [`collision`]: pipe/ground/ceiling hits and scoring
//! - [`events`]: per-tick feedback queue (jump, score, collision)
//! - [`game_state`]: the session state machine tying everything together
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Game Rules
//!
//! - **Gravity**: +0.5 px/tick velocity every tick while running
//! - **Jump**: sets velocity to -10 px/tick (not additive)
//! - **Pipes**: scroll 3 px/tick; a new one enters once the newest is 300 px
//!   from the right edge
//! - **Score**: +1 the first time a pipe's trailing edge is left of the bird
//! - **Game over**: hitting a pipe segment, the ground, or flying above the
//!   screen
//! - **Restart**: any jump after game over resets the session, bird at rest
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::{GameConfig, GameState};
//! use tui_flappy_types::{GameAction, GameEvent, GamePhase};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//! assert_eq!(game.phase(), GamePhase::NotStarted);
//!
//! // The first jump starts the game and flaps.
//! game.apply_action(GameAction::Jump);
//! assert_eq!(game.phase(), GamePhase::Running);
//!
//! game.tick();
//! let events: Vec<GameEvent> = game.drain_events().collect();
//! assert_eq!(events, vec![GameEvent::Jump]);
//! ```
//!
//! # Timing
//!
//! The physics constants are tuned per tick for a nominal 60 ticks/second.
//! The core never reads a clock: call
//! [`GameState::tick`](game_state::GameState::tick) once per fixed timestep.

pub mod collision;
pub mod config;
pub mod entity;
pub mod events;
pub mod game_state;
pub mod physics;
pub mod pipes;
pub mod rng;
pub mod snapshot;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use collision::Evaluation;
pub use config::{ConfigError, GameConfig};
pub use entity::{Bird, Pipe};
pub use events::EventQueue;
pub use game_state::GameState;
pub use pipes::PipeStream;
pub use rng::GapSampler;
pub use snapshot::{BirdSnapshot, GameSnapshot, PipeSnapshot, WorldSnapshot};
