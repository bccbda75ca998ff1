//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, audio feedback).
//!
//! # World Dimensions
//!
//! The simulation works in abstract pixels. The terminal view scales them down
//! to character cells.
//!
//! - **Screen**: 400 x 600 px
//! - **Ground**: bottom 100 px of the screen
//! - **Bird**: 40 x 30 px, fixed at x = 60, spawned at mid-screen
//! - **Pipe**: 70 px wide with a 160 px gap
//!
//! # Physics Constants
//!
//! All physics values are expressed **per tick**, not per second. The tuning
//! assumes a nominal 60 ticks per second:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.5 | Velocity added every tick (px/tick²) |
//! | `JUMP_IMPULSE` | -10.0 | Velocity set by a jump (negative = upward) |
//! | `PIPE_SPEED` | 3.0 | Horizontal pipe scroll (px/tick) |
//! | `SPAWN_THRESHOLD` | 300 | Distance from the right edge that triggers a new pipe |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{GamePhase, GameEvent, CollisionKind, SCREEN_WIDTH};
//!
//! assert_eq!(GamePhase::default(), GamePhase::NotStarted);
//! assert!(!GamePhase::default().is_running());
//! assert!(GameEvent::Collision(CollisionKind::Ground).is_terminal());
//! assert_eq!(SCREEN_WIDTH, 400);
//! ```

/// Screen width in pixels
pub const SCREEN_WIDTH: i32 = 400;

/// Screen height in pixels
pub const SCREEN_HEIGHT: i32 = 600;

/// Height of the ground strip at the bottom of the screen
pub const GROUND_HEIGHT: i32 = 100;

/// Bird width in pixels
pub const BIRD_WIDTH: i32 = 40;

/// Bird height in pixels
pub const BIRD_HEIGHT: i32 = 30;

/// Fixed horizontal offset of the bird from the left edge
pub const BIRD_START_X: i32 = 60;

/// Pipe width in pixels
pub const PIPE_WIDTH: i32 = 70;

/// Vertical opening between the top and bottom pipe segments
pub const PIPE_GAP: i32 = 160;

/// Lowest allowed gap-top height
pub const MIN_GAP_TOP: i32 = 100;

/// A new pipe spawns once the newest one is this far from the right edge
pub const SPAWN_THRESHOLD: i32 = 300;

/// Velocity assigned on jump (negative = upward)
pub const JUMP_IMPULSE: f32 = -10.0;

/// Velocity gained every tick
pub const GRAVITY: f32 = 0.5;

/// Horizontal pipe movement every tick
pub const PIPE_SPEED: f32 = 3.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Player actions that can be applied to the game state
///
/// Quitting is not a game action: the host loop handles it before the
/// simulation ever sees the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start, flap, or restart depending on the current phase
    Jump,
}

/// Lifecycle phase of a game session
///
/// The cycle goes: NotStarted → Running → GameOver → Running → ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Waiting for the first jump; nothing moves
    #[default]
    NotStarted,
    /// Simulation advances every tick
    Running,
    /// Frozen after a terminal collision until the next jump
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "notStarted",
            GamePhase::Running => "running",
            GamePhase::GameOver => "gameOver",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }
}

/// What the bird hit when a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    /// Top or bottom segment of a pipe
    Pipe,
    /// The ground strip
    Ground,
    /// Above the top of the screen
    Ceiling,
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::Pipe => "pipe",
            CollisionKind::Ground => "ground",
            CollisionKind::Ceiling => "ceiling",
        }
    }
}

/// Side-effect request emitted by the simulation during a tick.
///
/// The host drains these after each tick and forwards them to audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The bird flapped
    Jump,
    /// A pipe was passed and the score went up by one
    Scored,
    /// The run ended
    Collision(CollisionKind),
}

impl GameEvent {
    /// Whether this event ends the running phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Collision(_))
    }
}
