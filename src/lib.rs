//! pixguess: a pixel-reveal card guessing game
//!
//! A hidden card is shown at maximum obscurity and becomes clearer with
//! every wrong guess, until the player names it or the image reaches full
//! clarity. This crate provides:
//! - The round state machine and guess evaluation (`app` module)
//! - Pure domain logic: catalog, guess normalization, obscurity ladder (`domain`)
//! - The `PresentationSurface` abstraction plus a terminal renderer (`ui`)
//!
//! Quick start:
//! ```
//! use pixguess::{Catalog, CatalogEntry, GameController, RevealConfig, RoundPhase};
//! use pixguess::ui::RecordingSurface;
//!
//! let catalog = Catalog::new(vec![CatalogEntry::new("Knight", "images/knight.png")]);
//! let mut game = GameController::new(catalog, RevealConfig::default(), RecordingSurface::new());
//!
//! let token = game.start_round().unwrap();
//! game.asset_ready(token);
//! game.submit_guess("  KNIGHT ");
//! assert_eq!(game.phase(), RoundPhase::Won);
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;

pub use app::controller::{GameController, GameError};
pub use app::state::RoundPhase;
pub use config::RevealConfig;
pub use domain::catalog::{Catalog, CatalogEntry};
pub use ui::{ConsoleSurface, LoadToken, PresentationSurface};
