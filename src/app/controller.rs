//! Game controller and coordination layer
//!
//! The controller orchestrates between the catalog, the round state
//! machine, and the presentation surface. It owns the stable
//! configuration (catalog, reveal settings) plus the transient round
//! state, and is the only writer of that state: the surface receives
//! directives but never feeds numbers back.

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::app::state::{RoundEvent, RoundPhase, StateMachine};
use crate::config::{RevealConfig, RevealConfigError};
use crate::domain::catalog::{Catalog, CatalogEntry, CatalogError};
use crate::domain::guess::{self, Verdict};
use crate::domain::round::RoundProgress;
use crate::ui::surface::{LoadToken, Opacity, PresentationSurface};

/// Errors that can occur during controller operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("invalid reveal configuration: {0}")]
    Config(#[from] RevealConfigError),
}

/// Main game controller
///
/// Generic over the presentation surface so the binary can plug in a
/// terminal renderer and tests a recording double.
pub struct GameController<S: PresentationSurface> {
    /// Guessable items (stable configuration)
    catalog: Catalog,
    /// Obscurity ladder settings (stable configuration)
    config: RevealConfig,
    /// Sink for display directives
    surface: S,
    /// Lifecycle phase of the current round
    phase: RoundPhase,
    /// Target of the current round, None before the first start
    target: Option<CatalogEntry>,
    /// Wrong-guess count and obscurity level for the current round
    progress: RoundProgress,
    /// Monotonic load generation; mints one token per round start
    generation: u64,
    /// Token of the load still awaiting a ready/failed report
    pending_load: Option<LoadToken>,
}

impl<S: PresentationSurface> GameController<S> {
    /// Creates a controller with no round in flight
    ///
    /// # Arguments
    /// * `catalog` - Fixed set of guessable entries
    /// * `config` - Obscurity ladder settings (already validated)
    /// * `surface` - Display directive sink
    pub fn new(catalog: Catalog, config: RevealConfig, surface: S) -> Self {
        Self {
            catalog,
            config,
            surface,
            phase: RoundPhase::default(),
            target: None,
            progress: RoundProgress::start(&config),
            generation: 0,
            pending_load: None,
        }
    }

    /// Starts a new round using the thread-local RNG
    ///
    /// Convenience wrapper around [`GameController::start_round_with`].
    pub fn start_round(&mut self) -> Result<LoadToken, GameError> {
        self.start_round_with(&mut rand::thread_rng())
    }

    /// Starts a new round, picking the target with the given RNG
    ///
    /// Selects one catalog entry uniformly at random, resets the round
    /// state, and asks the surface to load the entry's asset at maximum
    /// obscurity with the reveal transition suppressed (so the fresh card
    /// does not animate into place). Guess submission stays disabled until
    /// [`GameController::asset_ready`] is called with the returned token.
    ///
    /// Starting a round while another is in flight abandons the old one;
    /// its pending load token becomes stale and late reports for it are
    /// ignored.
    ///
    /// # Returns
    /// The load token for this round, or `GameError::Catalog` if the
    /// catalog is empty
    pub fn start_round_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<LoadToken, GameError> {
        let target = self.catalog.choose(rng)?.clone();

        self.generation += 1;
        let token = LoadToken::new(self.generation);
        debug!(
            "starting round #{} with target '{}'",
            self.generation,
            target.name()
        );

        self.phase = StateMachine::process_event(self.phase, RoundEvent::RoundRestarted);
        self.progress = RoundProgress::start(&self.config);
        self.pending_load = Some(token);

        // Transition off first: applying maximum obscurity must not animate
        self.surface.set_transition_enabled(false);
        self.surface.set_obscurity_level(self.config.max_level());
        self.surface.set_opacity(Opacity::Hidden);
        self.surface.set_pixelation_effect(true);
        self.surface.clear_input();
        self.surface.set_input_enabled(false);
        self.surface.load_and_display(target.asset(), token);

        self.target = Some(target);
        Ok(token)
    }

    /// Confirms that the asset for the given load token is displayable
    ///
    /// A stale token (from an abandoned round, or a duplicate report for
    /// an already-confirmed load) is discarded without touching any state.
    /// On the current token the round goes Active: the card becomes
    /// visible with the transition re-enabled and guess submission opens.
    ///
    /// # Returns
    /// true if the token was current and the round activated
    pub fn asset_ready(&mut self, token: LoadToken) -> bool {
        if self.pending_load != Some(token) {
            debug!("ignoring stale asset-ready for load #{}", token.value());
            return false;
        }
        self.pending_load = None;

        self.surface.set_transition_enabled(true);
        self.surface.set_opacity(Opacity::Visible);
        self.surface.set_guess_counter(0);
        self.surface.set_feedback(messages::ROUND_START);
        self.surface.set_input_enabled(true);
        self.phase = StateMachine::process_event(self.phase, RoundEvent::AssetReady);
        true
    }

    /// Reports that the asset for the given load token failed to load
    ///
    /// Stale tokens are discarded like in [`GameController::asset_ready`].
    /// On the current token the player is told to start a new round;
    /// the round stays Inactive with submission disabled, and a later
    /// `start_round` recovers with a fresh target and token.
    ///
    /// # Returns
    /// true if the token was current
    pub fn asset_failed(&mut self, token: LoadToken) -> bool {
        if self.pending_load != Some(token) {
            debug!("ignoring stale asset-failed for load #{}", token.value());
            return false;
        }
        self.pending_load = None;

        self.surface.set_feedback(messages::LOAD_FAILED);
        true
    }

    /// Evaluates one submitted guess
    ///
    /// Outside the Active phase this is a no-op: guesses race neither the
    /// asset load nor a finished round. Empty (after trimming) input only
    /// produces a feedback message. A correct guess wins the round and
    /// reveals the card at once; a wrong one steps the obscurity down and
    /// loses the round if the clamped level reaches the floor.
    pub fn submit_guess(&mut self, raw: &str) {
        if self.phase != RoundPhase::Active {
            debug!("guess ignored in phase {:?}", self.phase);
            return;
        }
        let Some(target) = self.target.as_ref() else {
            // Active without a target cannot happen; bail out quietly
            return;
        };

        match guess::evaluate(raw, target.name()) {
            Verdict::Empty => {
                self.surface.set_feedback(messages::EMPTY_GUESS);
                return;
            }
            Verdict::Correct => {
                self.progress.reveal(&self.config);
                self.surface.set_obscurity_level(self.config.min_level());
                self.surface.set_pixelation_effect(false);
                self.surface.set_feedback(&messages::won(
                    target.name(),
                    self.progress.incorrect_guesses(),
                ));
                self.surface.set_input_enabled(false);
                self.phase = StateMachine::process_event(self.phase, RoundEvent::CorrectGuess);
            }
            Verdict::Incorrect => {
                let reached_floor = self.progress.record_incorrect(&self.config);
                self.surface
                    .set_guess_counter(self.progress.incorrect_guesses());
                self.surface.set_obscurity_level(self.progress.level());
                self.surface.set_feedback(messages::INCORRECT);

                if reached_floor {
                    // One-way ratchet: the fully revealed card ends the round
                    self.surface.set_pixelation_effect(false);
                    self.surface.set_feedback(&messages::lost(target.name()));
                    self.surface.set_input_enabled(false);
                }
                self.phase = StateMachine::process_event(
                    self.phase,
                    RoundEvent::IncorrectGuess { reached_floor },
                );
            }
        }

        self.surface.clear_input();
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Current obscurity level (maximum before the first round starts)
    pub fn obscurity_level(&self) -> f32 {
        self.progress.level()
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.progress.incorrect_guesses()
    }

    /// Display name of the current round's target, if a round was started
    pub fn target_name(&self) -> Option<&str> {
        self.target.as_ref().map(|entry| entry.name())
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// User-facing feedback texts
mod messages {
    pub const ROUND_START: &str = "Guess the highly pixelated card!";
    pub const EMPTY_GUESS: &str = "Please enter a card name!";
    pub const INCORRECT: &str = "\u{274c} INCORRECT! Try again.";
    pub const LOAD_FAILED: &str = "Could not load the card image. Start a new game to try again.";

    pub fn won(name: &str, incorrect_guesses: u32) -> String {
        format!(
            "\u{1f389} CORRECT! The card was the {name}! It took you {incorrect_guesses} wrong guesses."
        )
    }

    pub fn lost(name: &str) -> String {
        format!("GAME OVER! The card was the {name}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::{Directive, RecordingSurface};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn knight_game() -> GameController<RecordingSurface> {
        let catalog = Catalog::new(vec![CatalogEntry::new("Knight", "images/knight.png")]);
        GameController::new(catalog, RevealConfig::default(), RecordingSurface::new())
    }

    fn started_knight_game() -> GameController<RecordingSurface> {
        let mut game = knight_game();
        let token = game.start_round().unwrap();
        assert!(game.asset_ready(token));
        game
    }

    #[test]
    fn start_round_issues_directives_in_order() {
        let mut game = knight_game();
        let token = game.start_round().unwrap();

        assert_eq!(
            game.surface().directives(),
            &[
                Directive::TransitionEnabled(false),
                Directive::ObscurityLevel(40.0),
                Directive::Opacity(Opacity::Hidden),
                Directive::PixelationEffect(true),
                Directive::ClearInput,
                Directive::InputEnabled(false),
                Directive::LoadAndDisplay {
                    asset: "images/knight.png".to_string(),
                    token,
                },
            ]
        );
        assert_eq!(game.phase(), RoundPhase::Inactive);
        assert_eq!(game.obscurity_level(), 40.0);
    }

    #[test]
    fn asset_ready_activates_and_opens_input() {
        let mut game = knight_game();
        let token = game.start_round().unwrap();

        assert!(game.asset_ready(token));
        assert_eq!(game.phase(), RoundPhase::Active);
        assert!(game.surface().input_enabled());
        assert_eq!(
            game.surface().last_feedback(),
            Some(messages::ROUND_START)
        );
        assert_eq!(game.surface().last_guess_counter(), Some(0));
    }

    #[test]
    fn duplicate_asset_ready_is_stale() {
        let mut game = knight_game();
        let token = game.start_round().unwrap();

        assert!(game.asset_ready(token));
        assert!(!game.asset_ready(token));
        assert_eq!(game.phase(), RoundPhase::Active);
    }

    #[test]
    fn stale_token_from_abandoned_round_is_ignored() {
        let mut game = knight_game();
        let old_token = game.start_round().unwrap();
        let new_token = game.start_round().unwrap();

        // The abandoned round's load resolves late: nothing happens
        assert!(!game.asset_ready(old_token));
        assert_eq!(game.phase(), RoundPhase::Inactive);
        assert!(!game.surface().input_enabled());

        // The current round's load still activates normally
        assert!(game.asset_ready(new_token));
        assert_eq!(game.phase(), RoundPhase::Active);
    }

    #[test]
    fn empty_catalog_start_fails() {
        let catalog = Catalog::new(Vec::new());
        let mut game =
            GameController::new(catalog, RevealConfig::default(), RecordingSurface::new());

        let result = game.start_round_with(&mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(GameError::Catalog(CatalogError::Empty))));
        assert_eq!(game.phase(), RoundPhase::Inactive);
    }

    #[test]
    fn correct_guess_wins_and_reveals_fully() {
        let mut game = started_knight_game();
        game.submit_guess("archers");
        game.submit_guess("  kNiGhT ");

        assert_eq!(game.phase(), RoundPhase::Won);
        assert_eq!(game.obscurity_level(), 1.0);
        assert_eq!(
            game.surface().last_feedback(),
            Some("\u{1f389} CORRECT! The card was the Knight! It took you 1 wrong guesses.")
        );
        assert!(!game.surface().input_enabled());
    }

    #[test]
    fn incorrect_guess_steps_level_down() {
        let mut game = started_knight_game();
        game.submit_guess("archers");

        assert_eq!(game.phase(), RoundPhase::Active);
        assert_eq!(game.incorrect_guesses(), 1);
        assert_eq!(game.obscurity_level(), 36.0);
        assert_eq!(game.surface().last_guess_counter(), Some(1));
        assert_eq!(game.surface().last_feedback(), Some(messages::INCORRECT));
    }

    #[test]
    fn empty_guess_changes_nothing() {
        let mut game = started_knight_game();
        for _ in 0..5 {
            game.submit_guess("   ");
        }

        assert_eq!(game.phase(), RoundPhase::Active);
        assert_eq!(game.incorrect_guesses(), 0);
        assert_eq!(game.obscurity_level(), 40.0);
        assert_eq!(game.surface().last_feedback(), Some(messages::EMPTY_GUESS));
        // No ClearInput after an empty submission
        assert!(!game
            .surface()
            .directives()
            .iter()
            .rev()
            .take_while(|d| !matches!(d, Directive::InputEnabled(_)))
            .any(|d| matches!(d, Directive::ClearInput)));
    }

    #[test]
    fn tenth_wrong_guess_loses_the_round() {
        let mut game = started_knight_game();
        for _ in 0..9 {
            game.submit_guess("archers");
            assert_eq!(game.phase(), RoundPhase::Active);
        }

        game.submit_guess("archers");
        assert_eq!(game.phase(), RoundPhase::Lost);
        assert_eq!(game.incorrect_guesses(), 10);
        assert_eq!(game.obscurity_level(), 1.0);
        assert_eq!(
            game.surface().last_feedback(),
            Some("GAME OVER! The card was the Knight.")
        );
        assert!(!game.surface().input_enabled());
    }

    #[test]
    fn terminal_phases_lock_out_guesses() {
        let mut game = started_knight_game();
        game.submit_guess("knight");
        assert_eq!(game.phase(), RoundPhase::Won);

        let directives_before = game.surface().directives().len();
        game.submit_guess("knight");
        game.submit_guess("archers");

        assert_eq!(game.surface().directives().len(), directives_before);
        assert_eq!(game.incorrect_guesses(), 0);
    }

    #[test]
    fn guess_before_asset_ready_is_ignored() {
        let mut game = knight_game();
        let _token = game.start_round().unwrap();

        game.submit_guess("knight");
        assert_eq!(game.phase(), RoundPhase::Inactive);
        assert_eq!(game.incorrect_guesses(), 0);
    }

    #[test]
    fn asset_failure_leaves_round_inactive_but_recoverable() {
        let mut game = knight_game();
        let token = game.start_round().unwrap();

        assert!(game.asset_failed(token));
        assert_eq!(game.phase(), RoundPhase::Inactive);
        assert!(!game.surface().input_enabled());
        assert_eq!(game.surface().last_feedback(), Some(messages::LOAD_FAILED));

        // A failed load's token is spent
        assert!(!game.asset_ready(token));

        // Starting over recovers
        let token = game.start_round().unwrap();
        assert!(game.asset_ready(token));
        assert_eq!(game.phase(), RoundPhase::Active);
    }

    #[test]
    fn restart_resets_round_state() {
        let mut game = started_knight_game();
        game.submit_guess("archers");
        game.submit_guess("archers");
        assert_eq!(game.incorrect_guesses(), 2);

        let token = game.start_round().unwrap();
        assert_eq!(game.phase(), RoundPhase::Inactive);
        assert_eq!(game.incorrect_guesses(), 0);
        assert_eq!(game.obscurity_level(), 40.0);

        assert!(game.asset_ready(token));
        assert_eq!(game.phase(), RoundPhase::Active);
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let catalog = Catalog::builtin();
        let mut game_a = GameController::new(
            catalog.clone(),
            RevealConfig::default(),
            RecordingSurface::new(),
        );
        let mut game_b =
            GameController::new(catalog, RevealConfig::default(), RecordingSurface::new());

        let _ = game_a
            .start_round_with(&mut StdRng::seed_from_u64(99))
            .unwrap();
        let _ = game_b
            .start_round_with(&mut StdRng::seed_from_u64(99))
            .unwrap();

        assert_eq!(game_a.target_name(), game_b.target_name());
    }
}
