//! Terminal rendering of display directives
//!
//! Turns the core's directives into plain terminal output: an obscurity
//! meter instead of a pixelation shader, feedback lines instead of a DOM
//! element. Directives that only make sense for a graphical surface
//! (opacity, transition suppression) are logged at debug level and
//! otherwise ignored.

use log::debug;

use crate::config::RevealConfig;
use crate::ui::surface::{LoadToken, Opacity, PresentationSurface};

const METER_WIDTH: usize = 20;

/// Presentation surface that renders to stdout
#[derive(Debug)]
pub struct ConsoleSurface {
    config: RevealConfig,
}

impl ConsoleSurface {
    pub fn new(config: RevealConfig) -> Self {
        Self { config }
    }

    /// Renders the obscurity level as a fixed-width meter
    ///
    /// Fully obscured prints all blocks, full clarity prints none.
    fn meter(&self, level: f32) -> String {
        let min = self.config.min_level();
        let max = self.config.max_level();
        let span = (max - min).max(f32::EPSILON);
        let ratio = ((level - min) / span).clamp(0.0, 1.0);
        let filled = (ratio * METER_WIDTH as f32).round() as usize;

        let mut bar = String::with_capacity(METER_WIDTH);
        for i in 0..METER_WIDTH {
            bar.push(if i < filled { '#' } else { '.' });
        }
        bar
    }
}

impl PresentationSurface for ConsoleSurface {
    fn load_and_display(&mut self, asset: &str, token: LoadToken) {
        debug!("loading asset {asset} (load #{})", token.value());
        println!("(shuffling... a new card is on the table)");
    }

    fn set_obscurity_level(&mut self, level: f32) {
        println!("  obscurity [{}] {level:.0}", self.meter(level));
    }

    fn set_opacity(&mut self, opacity: Opacity) {
        debug!("opacity -> {opacity:?}");
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        debug!("transition effect -> {enabled}");
    }

    fn set_pixelation_effect(&mut self, enabled: bool) {
        debug!("pixelation effect -> {enabled}");
    }

    fn set_feedback(&mut self, text: &str) {
        println!("{text}");
    }

    fn set_guess_counter(&mut self, count: u32) {
        println!("  incorrect guesses: {count}");
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        debug!("guess input -> {}", if enabled { "enabled" } else { "disabled" });
    }

    fn clear_input(&mut self) {
        // Line-based stdin has no persistent input field to clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_spans_full_range() {
        let surface = ConsoleSurface::new(RevealConfig::default());

        assert_eq!(surface.meter(40.0), "#".repeat(METER_WIDTH));
        assert_eq!(surface.meter(1.0), ".".repeat(METER_WIDTH));
    }

    #[test]
    fn meter_is_monotonic_in_level() {
        let surface = ConsoleSurface::new(RevealConfig::default());

        let filled_at = |level: f32| surface.meter(level).chars().filter(|&c| c == '#').count();
        assert!(filled_at(36.0) >= filled_at(20.0));
        assert!(filled_at(20.0) >= filled_at(5.0));
    }

    #[test]
    fn meter_clamps_out_of_range_levels() {
        let surface = ConsoleSurface::new(RevealConfig::default());

        assert_eq!(surface.meter(100.0), "#".repeat(METER_WIDTH));
        assert_eq!(surface.meter(-5.0), ".".repeat(METER_WIDTH));
    }
}
