//! Physics step - gravity on the bird, scrolling for the pipes.

use crate::config::GameConfig;
use crate::entity::{Bird, Pipe};

/// Apply one tick of gravity. Dead birds do not move.
pub fn apply_gravity(bird: &mut Bird, gravity: f32) {
    if !bird.alive {
        return;
    }
    bird.velocity += gravity;
    bird.y += bird.velocity;
}

/// Move every pipe left by `speed`.
pub fn scroll_pipes(pipes: &mut [Pipe], speed: f32) {
    for pipe in pipes {
        pipe.x -= speed;
    }
}

/// Advance the bird and all pipes by one tick.
pub fn step(bird: &mut Bird, pipes: &mut [Pipe], config: &GameConfig) {
    apply_gravity(bird, config.gravity);
    scroll_pipes(pipes, config.pipe_speed);
}
