//! Game state module - manages the complete session
//!
//! This module ties together all core components: config, entities, gap RNG,
//! physics, the pipe stream and collision evaluation. It owns the lifecycle
//! (not started → running → game over → restart) and the per-tick ordering.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::collision;
use crate::config::{ConfigError, GameConfig};
use crate::entity::{Bird, Pipe};
use crate::events::EventQueue;
use crate::physics;
use crate::pipes::PipeStream;
use crate::rng::GapSampler;
use crate::snapshot::{GameSnapshot, PipeSnapshot, WorldSnapshot};
use crate::types::*;

/// Complete session state
///
/// Generic over the random source so tests and replays can inject any
/// seeded `rand::Rng`.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    config: GameConfig,
    gaps: GapSampler,
    rng: R,
    bird: Bird,
    pipes: PipeStream,
    score: u32,
    phase: GamePhase,
    /// Ticks simulated in the current episode.
    tick_count: u64,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// What ended the last run, if anything.
    last_collision: Option<CollisionKind>,
    /// Events emitted since the last drain.
    events: EventQueue,
}

impl GameState<StdRng> {
    /// Create a new session seeded with `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new session drawing gap heights from `rng`.
    ///
    /// Fails if the configuration is invalid (e.g. an empty gap-top range).
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let gaps = GapSampler::new(&config)?;
        let bird = Bird::new(&config);
        let mut pipes = PipeStream::new();
        pipes.reset(&config, &gaps, &mut rng);

        Ok(Self {
            config,
            gaps,
            rng,
            bird,
            pipes,
            score: 0,
            phase: GamePhase::NotStarted,
            tick_count: 0,
            episode_id: 0,
            last_collision: None,
            events: EventQueue::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        self.pipes.as_slice()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn last_collision(&self) -> Option<CollisionKind> {
        self.last_collision
    }

    /// Events emitted since the last drain, without consuming them
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.as_slice()
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    #[cfg(test)]
    pub(crate) fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    #[cfg(test)]
    pub(crate) fn pipes_mut(&mut self) -> &mut PipeStream {
        &mut self.pipes
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.world = WorldSnapshot::from(&self.config);
        out.phase = self.phase;
        out.bird = self.bird.into();
        out.pipes.clear();
        out.pipes.extend(self.pipes.iter().map(|p| PipeSnapshot::from(*p)));
        out.score = self.score;
        out.episode_id = self.episode_id;
        out.tick = self.tick_count;
        out.last_collision = self.last_collision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Flap: set the vertical velocity to the jump impulse
    fn jump(&mut self) {
        self.bird.velocity = self.config.jump_impulse;
        self.events.push(GameEvent::Jump);
    }

    /// Start the first run. The starting jump is applied by the caller.
    fn start(&mut self) {
        self.phase = GamePhase::Running;
        info!(episode = self.episode_id, phase = self.phase.as_str(), "game started");
    }

    /// Full reset after a game over. The bird starts at rest.
    pub fn restart(&mut self) {
        self.bird.reset(&self.config);
        self.pipes.reset(&self.config, &self.gaps, &mut self.rng);
        self.score = 0;
        self.tick_count = 0;
        self.last_collision = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = GamePhase::Running;
        info!(episode = self.episode_id, phase = self.phase.as_str(), "game restarted");
    }

    /// Apply a player action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Jump => match self.phase {
                GamePhase::NotStarted => {
                    self.start();
                    self.jump();
                    true
                }
                GamePhase::Running => {
                    self.jump();
                    true
                }
                GamePhase::GameOver => {
                    self.restart();
                    true
                }
            },
        }
    }

    /// Main game tick: physics, pipe stream update, then collision/scoring.
    ///
    /// Returns false without touching anything unless the game is running.
    pub fn tick(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }

        physics::step(&mut self.bird, self.pipes.as_mut_slice(), &self.config);
        self.pipes.update(&self.config, &self.gaps, &mut self.rng);

        let eval = collision::evaluate(
            &mut self.bird,
            self.pipes.as_mut_slice(),
            &mut self.score,
            &self.config,
            &mut self.events,
        );
        self.tick_count += 1;

        if let Some(kind) = eval.collision {
            self.phase = GamePhase::GameOver;
            self.last_collision = Some(kind);
            info!(
                episode = self.episode_id,
                score = self.score,
                ticks = self.tick_count,
                cause = kind.as_str(),
                phase = self.phase.as_str(),
                "game over"
            );
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 12345).unwrap()
    }

    /// Park the bird inside the gap of the next unpassed pipe so ticks never collide.
    fn keep_alive(state: &mut GameState) {
        let width = state.config().pipe_width;
        let bird_x = state.bird().x;
        let y = state
            .pipes()
            .iter()
            .find(|p| p.trailing_edge(width) >= bird_x)
            .map(|p| (p.gap_top() + 50) as f32)
            .unwrap_or(300.0);
        let bird = state.bird_mut();
        bird.y = y;
        bird.velocity = 0.0;
    }

    #[test]
    fn test_new_game_state() {
        let state = new_state();
        assert_eq!(state.phase(), GamePhase::NotStarted);
        assert!(!state.started());
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_count(), 0);
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.pipes().len(), 1);
        assert_eq!(state.pipes()[0].x, 400.0);
        assert_eq!(state.bird().y, 300.0);
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_invalid_config_refuses_to_start() {
        let config = GameConfig {
            min_gap_top: 400,
            ..GameConfig::default()
        };
        assert_eq!(
            GameState::new(config, 1).err(),
            Some(ConfigError::EmptyGapRange { min: 400, max: 340 })
        );
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut state = new_state();
        assert!(!state.tick());
        assert_eq!(state.bird().y, 300.0);
        assert_eq!(state.pipes()[0].x, 400.0);
        assert_eq!(state.tick_count(), 0);
    }

    #[test]
    fn test_first_jump_starts_and_flaps() {
        let mut state = new_state();
        assert!(state.apply_action(GameAction::Jump));
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.bird().velocity, -10.0);
        assert_eq!(state.pending_events(), &[GameEvent::Jump]);
    }

    #[test]
    fn test_jump_while_running_overrides_velocity() {
        let mut state = new_state();
        state.apply_action(GameAction::Jump);
        for _ in 0..5 {
            state.tick();
        }
        assert!(state.bird().velocity > -10.0);

        state.apply_action(GameAction::Jump);
        assert_eq!(state.bird().velocity, -10.0);
        assert_eq!(state.phase(), GamePhase::Running);
    }

    #[test]
    fn test_rapid_jumps_are_idempotent() {
        let mut state = new_state();
        for _ in 0..5 {
            state.apply_action(GameAction::Jump);
        }
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.bird().velocity, -10.0);
        assert_eq!(state.bird().y, 300.0);
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = new_state();
        state.apply_action(GameAction::Jump);
        state.bird_mut().velocity = 0.0;

        assert!(state.tick());
        assert_eq!(state.bird().velocity, 0.5);
        assert_eq!(state.bird().y, 300.5);
        assert_eq!(state.pipes()[0].x, 397.0);
        assert_eq!(state.tick_count(), 1);
    }

    #[test]
    fn test_free_fall_hits_ground() {
        let mut state = new_state();
        state.apply_action(GameAction::Jump);
        state.drain_events().for_each(drop);

        let mut ticks = 0;
        while state.tick() {
            ticks += 1;
            assert!(ticks < 1000, "bird never landed");
        }

        assert_eq!(state.phase(), GamePhase::GameOver);
        assert!(!state.bird().alive);
        let collision = state.last_collision().unwrap();
        assert!(matches!(collision, CollisionKind::Ground | CollisionKind::Pipe));
        let events: Vec<GameEvent> = state.drain_events().collect();
        assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
    }

    #[test]
    fn test_game_over_stops_game() {
        let mut state = new_state();
        state.apply_action(GameAction::Jump);
        state.bird_mut().y = 480.0;
        state.tick();
        assert!(state.game_over());

        let bird = *state.bird();
        let pipes = state.pipes().to_vec();
        for _ in 0..10 {
            assert!(!state.tick());
        }
        assert_eq!(*state.bird(), bird);
        assert_eq!(state.pipes(), pipes.as_slice());
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = new_state();
        state.apply_action(GameAction::Jump);
        state.bird_mut().y = -5.0;
        state.tick();
        assert_eq!(state.last_collision(), Some(CollisionKind::Ceiling));
        state.drain_events().for_each(drop);

        assert!(state.apply_action(GameAction::Jump));
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.tick_count(), 0);
        assert_eq!(state.last_collision(), None);
        assert_eq!(state.pipes().len(), 1);
        assert_eq!(state.pipes()[0].x, 400.0);
        assert_eq!(*state.bird(), Bird::new(state.config()));
        // Restart does not flap.
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_scoring_through_ticks() {
        let mut state = new_state();
        state.apply_action(GameAction::Jump);
        state.pipes_mut().as_mut_slice()[0].x = 0.0;

        let mut scored_at = None;
        for i in 0..40 {
            keep_alive(&mut state);
            state.tick();
            assert_eq!(state.phase(), GamePhase::Running);
            if scored_at.is_none() && state.score() == 1 {
                scored_at = Some(i);
            }
        }

        // x: 0 -> -3 -> ... -> -12 after 4 ticks; -12 + 70 < 60.
        assert_eq!(scored_at, Some(3));
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_spawn_during_ticks() {
        let mut state = new_state();
        state.apply_action(GameAction::Jump);

        for _ in 0..101 {
            keep_alive(&mut state);
            state.tick();
        }
        // 400 - 3 * 101 = 97 < 100 triggers the second pipe.
        assert_eq!(state.pipes().len(), 2);
        assert_eq!(state.pipes()[1].x, 400.0);
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut state = new_state();
        state.apply_action(GameAction::Jump);
        state.tick();

        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.tick, 1);
        assert_eq!(snap.bird.y, state.bird().y);
        assert_eq!(snap.pipes.len(), state.pipes().len());
        assert_eq!(snap.pipes[0].gap_top, state.pipes()[0].gap_top());
        assert_eq!(snap.world.screen_width, 400);
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let mut a = new_state();
        let mut b = new_state();
        a.apply_action(GameAction::Jump);
        b.apply_action(GameAction::Jump);

        for _ in 0..300 {
            keep_alive(&mut a);
            keep_alive(&mut b);
            a.tick();
            b.tick();
        }
        let tops_a: Vec<i32> = a.pipes().iter().map(|p| p.gap_top()).collect();
        let tops_b: Vec<i32> = b.pipes().iter().map(|p| p.gap_top()).collect();
        assert_eq!(tops_a, tops_b);
    }
}
