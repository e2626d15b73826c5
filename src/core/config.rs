//! # Configuration
//!
//! Engine parameters, fixed at construction.

/// Spread level used when none is given
pub const DEFAULT_SPREAD_LEVEL: usize = 2;

/// Configuration for a [`LexOrder`](crate::LexOrder) engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexOrderConfig {
    /// Symbol depth a word must reach before `next`/`previous` use
    /// arithmetic. Shallower words grow by appending instead.
    ///
    /// Must be at least 1; checked when the engine is built.
    pub spread_level: usize,
}

impl LexOrderConfig {
    /// Create a config with the given spread level
    pub fn new(spread_level: usize) -> Self {
        Self { spread_level }
    }

    /// Set the spread level
    pub fn with_spread_level(mut self, spread_level: usize) -> Self {
        self.spread_level = spread_level;
        self
    }
}

impl Default for LexOrderConfig {
    fn default() -> Self {
        Self {
            spread_level: DEFAULT_SPREAD_LEVEL,
        }
    }
}
