//! Obscurity ladder tracking within a single round
//!
//! `RoundProgress` holds the mutable per-round numbers: how many wrong
//! guesses have accumulated and the current obscurity level. The level is
//! kept as typed numeric state here and only pushed outward as display
//! directives; it is never re-derived from the presentation layer.

use crate::config::RevealConfig;

/// Mutable counters for one round in flight
///
/// Invariants (maintained by the methods below):
/// - `min_level <= level <= max_level`
/// - the level never increases within a round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundProgress {
    incorrect_guesses: u32,
    level: f32,
}

impl RoundProgress {
    /// Fresh progress for a new round: zero wrong guesses, maximum obscurity
    pub fn start(config: &RevealConfig) -> Self {
        Self {
            incorrect_guesses: 0,
            level: config.max_level(),
        }
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Records one wrong guess and steps the level down
    ///
    /// The new level is `current - step`, clamped to the configured floor.
    ///
    /// # Returns
    /// true if the clamped level reached the floor (the round is lost)
    pub fn record_incorrect(&mut self, config: &RevealConfig) -> bool {
        self.incorrect_guesses += 1;
        self.level = config.clamp_level(self.level - config.step());
        config.is_floor(self.level)
    }

    /// Drops straight to full clarity on a correct guess
    ///
    /// The wrong-guess count is left untouched so the win message can
    /// report it.
    pub fn reveal(&mut self, config: &RevealConfig) {
        self.level = config.min_level();
    }

    /// True once the level sits at the full-clarity floor
    pub fn at_floor(&self, config: &RevealConfig) -> bool {
        config.is_floor(self.level)
    }
}
