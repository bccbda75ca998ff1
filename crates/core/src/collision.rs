//! Collision and scoring evaluation.
//!
//! The geometry predicates are pure functions of the bird and pipe positions.
//! [`evaluate`] applies them once per running tick and mutates the passed and
//! alive flags.

use crate::config::GameConfig;
use crate::entity::{Bird, Pipe};
use crate::events::EventQueue;
use crate::types::{CollisionKind, GameEvent};

/// Outcome of one evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Pipes newly passed this tick
    pub scored: u32,
    /// Terminal collision, if any
    pub collision: Option<CollisionKind>,
}

/// Whether the bird's leading edge has moved past the pipe's trailing edge
pub fn has_passed(bird: &Bird, pipe: &Pipe, config: &GameConfig) -> bool {
    pipe.trailing_edge(config.pipe_width) < bird.x
}

/// Whether the bird overlaps either segment of the pipe.
///
/// Horizontal overlap is strict on both sides; touching edges do not collide.
pub fn overlaps_pipe(bird: &Bird, pipe: &Pipe, config: &GameConfig) -> bool {
    let horizontal = bird.right() > pipe.x && bird.x < pipe.trailing_edge(config.pipe_width);
    if !horizontal {
        return false;
    }
    let gap_top = pipe.gap_top() as f32;
    let gap_bottom = pipe.gap_bottom(config.pipe_gap) as f32;
    bird.y < gap_top || bird.bottom() > gap_bottom
}

/// Ground or ceiling violation, ground taking precedence
pub fn bounds_violation(bird: &Bird, config: &GameConfig) -> Option<CollisionKind> {
    if bird.bottom() > config.ground_y() as f32 {
        Some(CollisionKind::Ground)
    } else if bird.y < 0.0 {
        Some(CollisionKind::Ceiling)
    } else {
        None
    }
}

/// Score passed pipes and detect terminal collisions for this tick.
///
/// Pipes are visited in spawn order. The first pipe collision kills the bird
/// and stops the pass; the bounds check only runs when no pipe was hit. At
/// most one `Collision` event is queued per call.
pub fn evaluate(
    bird: &mut Bird,
    pipes: &mut [Pipe],
    score: &mut u32,
    config: &GameConfig,
    events: &mut EventQueue,
) -> Evaluation {
    let mut out = Evaluation::default();

    for pipe in pipes.iter_mut() {
        if !pipe.passed && has_passed(bird, pipe, config) {
            pipe.passed = true;
            *score = score.saturating_add(1);
            out.scored += 1;
            events.push(GameEvent::Scored);
        }

        if overlaps_pipe(bird, pipe, config) {
            out.collision = Some(CollisionKind::Pipe);
            break;
        }
    }

    if out.collision.is_none() {
        out.collision = bounds_violation(bird, config);
    }

    if let Some(kind) = out.collision {
        bird.alive = false;
        events.push(GameEvent::Collision(kind));
    }

    out
}
