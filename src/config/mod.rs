//! Configuration module for pixguess
//!
//! Concentrates the numeric tuning shared between the round controller and
//! the presentation layer: how obscured a fresh card starts, how much each
//! wrong guess reveals, and where full clarity sits.

pub mod reveal;

pub use reveal::{RevealConfig, RevealConfigError};
