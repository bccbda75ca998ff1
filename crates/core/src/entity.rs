//! Entity state - plain data for the bird and the pipes.

use crate::config::GameConfig;

/// The player-controlled bird
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Left edge (constant for the whole session)
    pub x: f32,
    /// Top edge, grows downward
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity in px/tick (positive = downward)
    pub velocity: f32,
    pub alive: bool,
}

impl Bird {
    /// Create a bird at its spawn position, at rest
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x as f32,
            y: config.bird_start_y() as f32,
            width: config.bird_width as f32,
            height: config.bird_height as f32,
            velocity: 0.0,
            alive: true,
        }
    }

    /// Put the bird back at its spawn position, at rest and alive
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A top/bottom pipe pair with a gap between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge, decreases every tick
    pub x: f32,
    /// Height of the top segment; the gap starts here
    gap_top: i32,
    /// Set once the pipe has been scored
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_top: i32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    /// Height of the top segment. Fixed for the lifetime of the pipe.
    pub fn gap_top(&self) -> i32 {
        self.gap_top
    }

    /// Top edge of the bottom segment
    pub fn gap_bottom(&self, gap: i32) -> i32 {
        self.gap_top + gap
    }

    /// Right edge of the pipe
    pub fn trailing_edge(&self, width: i32) -> f32 {
        self.x + width as f32
    }
}
