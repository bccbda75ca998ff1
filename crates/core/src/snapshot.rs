use crate::config::GameConfig;
use crate::entity::{Bird, Pipe};
use crate::types::{CollisionKind, GamePhase};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BirdSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: f32,
    pub alive: bool,
}

impl From<Bird> for BirdSnapshot {
    fn from(value: Bird) -> Self {
        Self {
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
            velocity: value.velocity,
            alive: value.alive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSnapshot {
    pub x: f32,
    pub gap_top: i32,
    pub passed: bool,
}

impl From<Pipe> for PipeSnapshot {
    fn from(value: Pipe) -> Self {
        Self {
            x: value.x,
            gap_top: value.gap_top(),
            passed: value.passed,
        }
    }
}

/// World geometry the renderer needs to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldSnapshot {
    pub screen_width: i32,
    pub screen_height: i32,
    pub ground_height: i32,
    pub pipe_width: i32,
    pub pipe_gap: i32,
}

impl From<&GameConfig> for WorldSnapshot {
    fn from(value: &GameConfig) -> Self {
        Self {
            screen_width: value.screen_width,
            screen_height: value.screen_height,
            ground_height: value.ground_height,
            pipe_width: value.pipe_width,
            pipe_gap: value.pipe_gap,
        }
    }
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

/// Read-only copy of a session, handed to the renderer once per frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub world: WorldSnapshot,
    pub phase: GamePhase,
    pub bird: BirdSnapshot,
    pub pipes: Vec<PipeSnapshot>,
    pub score: u32,
    pub episode_id: u32,
    pub tick: u64,
    pub last_collision: Option<CollisionKind>,
}
