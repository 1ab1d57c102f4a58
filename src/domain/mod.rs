//! Domain logic and core data structures
//!
//! This module contains pure game logic that is independent of any
//! presentation surface or input source.

pub mod catalog;
pub mod guess;
pub mod round;
