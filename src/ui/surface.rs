//! Presentation surface abstraction
//!
//! The game core never touches a renderer directly. It pushes typed
//! display directives through the [`PresentationSurface`] trait and lets
//! the implementation decide what they look like. Asset loading is
//! asynchronous from the core's point of view: every load request carries
//! a [`LoadToken`], and the front end reports readiness back with that
//! token so stale callbacks from abandoned rounds can be discarded.

/// Generation token identifying one asset load request
///
/// Minted by the controller per round start. A ready/failed report only
/// counts if it carries the token of the latest, still-pending load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

impl LoadToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    /// Raw generation counter, mostly useful for logging
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Image opacity directive: the card is either hidden or fully shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    Hidden,
    Visible,
}

/// Sink for display directives issued by the game core
///
/// Implementations receive directives in the order the core issues them
/// and must not feed state back into the core; the core keeps its own
/// numeric state and only pushes outward.
pub trait PresentationSurface {
    /// Requests the given asset be loaded and displayed
    ///
    /// The surface (or its front end) is expected to report back via
    /// `GameController::asset_ready` / `asset_failed` with the same token.
    fn load_and_display(&mut self, asset: &str, token: LoadToken);

    /// Applies the current obscurity level (scale factor, higher = blurrier)
    fn set_obscurity_level(&mut self, level: f32);

    fn set_opacity(&mut self, opacity: Opacity);

    /// Enables or suppresses the reveal transition effect
    ///
    /// Suppressed while a fresh round applies maximum obscurity, so the
    /// new card does not animate into place.
    fn set_transition_enabled(&mut self, enabled: bool);

    /// Toggles the pixelation rendering effect
    fn set_pixelation_effect(&mut self, enabled: bool);

    /// Updates the user-facing feedback message
    fn set_feedback(&mut self, text: &str);

    /// Updates the visible wrong-guess counter
    fn set_guess_counter(&mut self, count: u32);

    /// Enables or disables guess submission
    fn set_input_enabled(&mut self, enabled: bool);

    /// Clears the guess input field; must be a no-op when already empty
    /// or disabled
    fn clear_input(&mut self);
}

/// One recorded display directive, used by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    LoadAndDisplay { asset: String, token: LoadToken },
    ObscurityLevel(f32),
    Opacity(Opacity),
    TransitionEnabled(bool),
    PixelationEffect(bool),
    Feedback(String),
    GuessCounter(u32),
    InputEnabled(bool),
    ClearInput,
}

/// Surface that records every directive instead of rendering
///
/// The test double for the game core, also usable for headless driving.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    directives: Vec<Directive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All directives recorded so far, oldest first
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Most recent feedback text, if any was issued
    pub fn last_feedback(&self) -> Option<&str> {
        self.directives.iter().rev().find_map(|d| match d {
            Directive::Feedback(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Most recent obscurity level directive, if any
    pub fn last_obscurity_level(&self) -> Option<f32> {
        self.directives.iter().rev().find_map(|d| match d {
            Directive::ObscurityLevel(level) => Some(*level),
            _ => None,
        })
    }

    /// Most recent guess counter directive, if any
    pub fn last_guess_counter(&self) -> Option<u32> {
        self.directives.iter().rev().find_map(|d| match d {
            Directive::GuessCounter(count) => Some(*count),
            _ => None,
        })
    }

    /// Whether the last input-enabled directive allowed submission
    pub fn input_enabled(&self) -> bool {
        self.directives
            .iter()
            .rev()
            .find_map(|d| match d {
                Directive::InputEnabled(enabled) => Some(*enabled),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Forgets everything recorded so far
    pub fn reset(&mut self) {
        self.directives.clear();
    }
}

impl PresentationSurface for RecordingSurface {
    fn load_and_display(&mut self, asset: &str, token: LoadToken) {
        self.directives.push(Directive::LoadAndDisplay {
            asset: asset.to_string(),
            token,
        });
    }

    fn set_obscurity_level(&mut self, level: f32) {
        self.directives.push(Directive::ObscurityLevel(level));
    }

    fn set_opacity(&mut self, opacity: Opacity) {
        self.directives.push(Directive::Opacity(opacity));
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        self.directives.push(Directive::TransitionEnabled(enabled));
    }

    fn set_pixelation_effect(&mut self, enabled: bool) {
        self.directives.push(Directive::PixelationEffect(enabled));
    }

    fn set_feedback(&mut self, text: &str) {
        self.directives.push(Directive::Feedback(text.to_string()));
    }

    fn set_guess_counter(&mut self, count: u32) {
        self.directives.push(Directive::GuessCounter(count));
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.directives.push(Directive::InputEnabled(enabled));
    }

    fn clear_input(&mut self) {
        self.directives.push(Directive::ClearInput);
    }
}
