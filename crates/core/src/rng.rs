//! RNG module - gap-top sampling for new pipes
//!
//! The gap height of a new pipe is the only source of randomness in the
//! simulation. The random source itself is injected by the caller (any
//! `rand::Rng`), so a seeded `StdRng` makes a whole session reproducible.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::config::{ConfigError, GameConfig};

/// Uniform sampler over the validated gap-top range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapSampler {
    range: RangeInclusive<i32>,
}

impl GapSampler {
    /// Build a sampler, failing if the configured range is empty
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            range: config.gap_top_range()?,
        })
    }

    pub fn range(&self) -> &RangeInclusive<i32> {
        &self.range
    }

    /// Draw a gap top uniformly from the inclusive range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.range.clone())
    }
}
