//! Player input handling
//!
//! Translates raw terminal lines into application actions.

pub mod commands;

pub use commands::{PlayerAction, parse_action};
