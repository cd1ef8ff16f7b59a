//! Simulation context: one double-buffered grid pair per colour channel.
//!
//! After [`World::step`] the spare grid of each channel still holds the
//! generation that was current before the step. Fade rendering reads it as
//! the previous generation until the next step overwrites it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::grid::BitGrid;
use super::rules;
use crate::config::ValidConfig;
use crate::io::ByteSource;

#[derive(Clone, Debug)]
pub struct Channel {
    current: BitGrid,
    spare: BitGrid,
}

impl Channel {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            current: BitGrid::zeroed(cols, rows),
            spare: BitGrid::zeroed(cols, rows),
        }
    }

    #[inline]
    pub fn current(&self) -> &BitGrid {
        &self.current
    }

    /// The generation before `current`.
    #[inline]
    pub fn previous(&self) -> &BitGrid {
        &self.spare
    }

    fn step(&mut self) {
        rules::step(&self.current, &mut self.spare);
        std::mem::swap(&mut self.current, &mut self.spare);
    }

    fn settle(&mut self) {
        self.spare.copy_from(&self.current);
    }
}

pub struct World {
    channels: Vec<Channel>,
    generation: u64,
}

impl World {
    pub fn new(config: &ValidConfig) -> Self {
        let count = config.channels.count();
        log::info!(
            "world {}x{} with {} channel(s)",
            config.cols,
            config.rows,
            count
        );
        Self {
            channels: (0..count)
                .map(|_| Channel::new(config.cols, config.rows))
                .collect(),
            generation: 0,
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.channels[0].current.cols()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.channels[0].current.rows()
    }

    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    #[inline]
    pub fn channel(&self, index: usize) -> &Channel {
        &self.channels[index]
    }

    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    #[inline]
    pub fn current(&self, channel: usize) -> &BitGrid {
        &self.channels[channel].current
    }

    #[inline]
    pub fn previous(&self, channel: usize) -> &BitGrid {
        &self.channels[channel].spare
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Edit the current generation. The previous generation is left as is.
    pub fn set_cell(&mut self, channel: usize, col: usize, row: usize, alive: bool) {
        self.channels[channel].current.set(col, row, alive);
    }

    /// Replace every channel with random content and make it its own
    /// previous generation.
    pub fn seed<S: ByteSource + ?Sized>(&mut self, source: &mut S) {
        for channel in &mut self.channels {
            channel.current.randomize(source);
            channel.settle();
        }
        self.generation = 0;
        log::debug!("seeded world, population {}", self.population());
    }

    /// Mark the current generation as settled, so a fade shows it steadily.
    pub fn settle(&mut self) {
        for channel in &mut self.channels {
            channel.settle();
        }
    }

    pub fn clear(&mut self) {
        for channel in &mut self.channels {
            channel.current.clear();
            channel.spare.clear();
        }
        self.generation = 0;
    }

    /// Advance every channel by one generation.
    pub fn step(&mut self) {
        for channel in &mut self.channels {
            channel.step();
        }
        self.generation += 1;
        log::debug!(
            "generation {} population {}",
            self.generation,
            self.population()
        );
    }

    /// Live cells summed over all channels.
    pub fn population(&self) -> usize {
        self.channels.iter().map(|c| c.current.population()).sum()
    }

    pub fn is_extinct(&self) -> bool {
        self.channels.iter().all(|c| c.current.is_empty())
    }

    /// Hash of every channel's current generation.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for channel in &self.channels {
            channel.current.as_bytes().hash(&mut hasher);
        }
        hasher.finish()
    }
}
