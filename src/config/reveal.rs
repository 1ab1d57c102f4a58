use thiserror::Error;

/// Errors produced when validating reveal settings
#[derive(Debug, Error)]
pub enum RevealConfigError {
    #[error("reveal step must be positive, got {step}")]
    NonPositiveStep { step: f32 },
    #[error("minimum obscurity level must be positive, got {min_level}")]
    NonPositiveMinLevel { min_level: f32 },
    #[error("minimum obscurity level {min_level} exceeds maximum {max_level}")]
    InvertedBounds { min_level: f32, max_level: f32 },
}

/// Numeric bounds and step size for the obscurity ladder
///
/// The obscurity level is a scale factor: the higher it is, the more
/// pixelated/zoomed the card appears. A round starts at `max_level` and
/// loses `step` per wrong guess until it is clamped at `min_level`
/// (full clarity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    max_level: f32,
    min_level: f32,
    step: f32,
}

impl RevealConfig {
    pub const DEFAULT_MAX_LEVEL: f32 = 40.0;
    pub const DEFAULT_MIN_LEVEL: f32 = 1.0;
    pub const DEFAULT_STEP: f32 = 4.0;

    /// Creates a validated configuration
    ///
    /// # Arguments
    /// * `max_level` - Obscurity at round start
    /// * `min_level` - Obscurity at full clarity (must be positive, <= max)
    /// * `step` - Obscurity removed per wrong guess (must be positive)
    ///
    /// # Returns
    /// The configuration, or RevealConfigError if the bounds are unusable
    pub fn new(max_level: f32, min_level: f32, step: f32) -> Result<Self, RevealConfigError> {
        if step <= 0.0 {
            return Err(RevealConfigError::NonPositiveStep { step });
        }
        if min_level <= 0.0 {
            return Err(RevealConfigError::NonPositiveMinLevel { min_level });
        }
        if min_level > max_level {
            return Err(RevealConfigError::InvertedBounds {
                min_level,
                max_level,
            });
        }

        Ok(Self {
            max_level,
            min_level,
            step,
        })
    }

    pub fn max_level(&self) -> f32 {
        self.max_level
    }

    pub fn min_level(&self) -> f32 {
        self.min_level
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Clamps an arbitrary level into the valid range
    pub fn clamp_level(&self, level: f32) -> f32 {
        level.clamp(self.min_level, self.max_level)
    }

    /// Level reached after a number of wrong guesses
    ///
    /// Computes `max(min_level, max_level - count * step)`, which is the
    /// closed form of applying the per-guess step with a floor clamp.
    pub fn level_after(&self, incorrect_count: u32) -> f32 {
        self.clamp_level(self.max_level - incorrect_count as f32 * self.step)
    }

    /// True if the given level sits at the full-clarity floor
    pub fn is_floor(&self, level: f32) -> bool {
        level <= self.min_level
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            max_level: Self::DEFAULT_MAX_LEVEL,
            min_level: Self::DEFAULT_MIN_LEVEL,
            step: Self::DEFAULT_STEP,
        }
    }
}
