//! Application orchestration layer
//!
//! This module coordinates between input, domain, and UI layers. It
//! manages the round lifecycle and routes guess submissions through the
//! state machine.

pub mod controller;
pub mod state;
