//! Game tuning and world geometry.
//!
//! Every spatial value is in world pixels; every kinematic value is per tick.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::types::*;

/// Fatal configuration problems, detected before the first tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pipe gap-top range is empty: [{min}, {max}]")]
    EmptyGapRange { min: i32, max: i32 },

    #[error("ground height {ground} leaves no playfield on a {screen_height}px screen")]
    GroundTooTall { ground: i32, screen_height: i32 },

    #[error("{0} must be positive")]
    NonPositive(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub ground_height: i32,
    pub bird_x: i32,
    pub bird_width: i32,
    pub bird_height: i32,
    pub pipe_width: i32,
    pub pipe_gap: i32,
    pub min_gap_top: i32,
    pub spawn_threshold: i32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub pipe_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            bird_x: BIRD_START_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            min_gap_top: MIN_GAP_TOP,
            spawn_threshold: SPAWN_THRESHOLD,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            pipe_speed: PIPE_SPEED,
        }
    }
}

impl GameConfig {
    /// Top edge of the ground strip.
    pub fn ground_y(&self) -> i32 {
        self.screen_height - self.ground_height
    }

    /// Vertical spawn position of the bird (mid-screen).
    pub fn bird_start_y(&self) -> i32 {
        self.screen_height / 2
    }

    /// Inclusive range a freshly spawned pipe draws its gap top from.
    pub fn gap_top_range(&self) -> Result<RangeInclusive<i32>, ConfigError> {
        let min = self.min_gap_top;
        let max = self.screen_height - self.pipe_gap - self.ground_height;
        if min > max {
            return Err(ConfigError::EmptyGapRange { min, max });
        }
        Ok(min..=max)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("spawn_threshold", self.spawn_threshold),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NonPositive(name));
            }
        }
        if self.pipe_speed <= 0.0 {
            return Err(ConfigError::NonPositive("pipe_speed"));
        }

        if self.ground_height < 0 || self.ground_height >= self.screen_height {
            return Err(ConfigError::GroundTooTall {
                ground: self.ground_height,
                screen_height: self.screen_height,
            });
        }

        self.gap_top_range().map(|_| ())
    }
}
