//! Pipe stream - owns the ordered sequence of live pipes.
//!
//! Pipes are stored in spawn order, which is also the order closest to the
//! bird first. New pipes always enter at the right edge of the screen.
//!
//! The spawn rule only ever adds one pipe per tick. With the default tuning a
//! pipe travels 3 px per tick and the threshold is 300 px, so the stream
//! cannot starve; a configuration with a threshold close to the pipe speed
//! would space pipes irregularly.

use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::entity::Pipe;
use crate::rng::GapSampler;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipeStream {
    pipes: Vec<Pipe>,
}

impl PipeStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn as_slice(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn as_mut_slice(&mut self) -> &mut [Pipe] {
        &mut self.pipes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    /// Most recently spawned pipe
    pub fn newest(&self) -> Option<&Pipe> {
        self.pipes.last()
    }

    /// Replace the whole sequence with a single fresh pipe at the right edge
    pub fn reset<R: Rng + ?Sized>(&mut self, config: &GameConfig, gaps: &GapSampler, rng: &mut R) {
        self.pipes.clear();
        self.spawn(config, gaps, rng);
    }

    /// Append a fresh pipe at the right edge
    fn spawn<R: Rng + ?Sized>(&mut self, config: &GameConfig, gaps: &GapSampler, rng: &mut R) {
        let pipe = Pipe::new(config.screen_width as f32, gaps.sample(rng));
        debug!(gap_top = pipe.gap_top(), live = self.pipes.len() + 1, "pipe spawned");
        self.pipes.push(pipe);
    }

    /// Whether the newest pipe has moved far enough left to make room
    pub fn spawn_due(&self, config: &GameConfig) -> bool {
        match self.newest() {
            Some(pipe) => pipe.x < (config.screen_width - config.spawn_threshold) as f32,
            None => true,
        }
    }

    /// Spawn at most one pipe if due. Returns true if a pipe was added.
    pub fn spawn_if_due<R: Rng + ?Sized>(
        &mut self,
        config: &GameConfig,
        gaps: &GapSampler,
        rng: &mut R,
    ) -> bool {
        if !self.spawn_due(config) {
            return false;
        }
        self.spawn(config, gaps, rng);
        true
    }

    /// Drop pipes whose trailing edge is past the left side of the screen.
    ///
    /// Returns the number of pipes removed. Relative order is preserved.
    pub fn despawn_offscreen(&mut self, pipe_width: i32) -> usize {
        let before = self.pipes.len();
        self.pipes.retain(|p| p.trailing_edge(pipe_width) >= 0.0);
        let removed = before - self.pipes.len();
        if removed > 0 {
            debug!(removed, live = self.pipes.len(), "pipes despawned");
        }
        removed
    }

    /// Per-tick stream maintenance: spawn check, then despawn pass
    pub fn update<R: Rng + ?Sized>(&mut self, config: &GameConfig, gaps: &GapSampler, rng: &mut R) {
        self.spawn_if_due(config, gaps, rng);
        self.despawn_offscreen(config.pipe_width);
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }
}
