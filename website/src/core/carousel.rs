//! Hero image carousel

use std::time::Duration;

/// Time each slide stays up before the next one
pub const HERO_ROTATE_INTERVAL: Duration = Duration::from_secs(5);

/// Wrap-around slide index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCarousel {
    index: usize,
    len: usize,
}

impl HeroCarousel {
    /// Start at the first slide. An empty carousel stays at index 0.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Start at `index`, wrapping values past the end
    pub fn starting_at(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { index, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_index(&self) -> usize {
        if self.len == 0 { 0 } else { (self.index + 1) % self.len }
    }

    pub fn prev_index(&self) -> usize {
        if self.len == 0 { 0 } else { (self.index + self.len - 1) % self.len }
    }

    pub fn next(&mut self) -> usize {
        self.index = self.next_index();
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = self.prev_index();
        self.index
    }
}
