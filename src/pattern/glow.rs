//! Glow-fill pattern.
//!
//! Accumulator animation: the current LED's brightness creeps up one step
//! per update until it crosses the medium threshold, then the fill moves on
//! to the next LED. Past the right edge the whole fill starts over. Updates
//! are gated on the shared position being below 6, which throttles the
//! animation to a fraction of the loop rate; the gate constant is tuned,
//! not derived.

use super::Pattern;
use crate::cursor::ScanState;
use crate::frame::{Frame, MAX_BRIGHTNESS, MAX_LED_INDEX, MEDIUM_BRIGHTNESS};
use crate::settings::Settings;

/// Shared-position gate below which updates run.
const UPDATE_GATE: u8 = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlowPattern {
    current: usize,
}

impl GlowPattern {
    pub const fn new() -> Self {
        Self { current: 0 }
    }
}

impl Pattern for GlowPattern {
    fn render(&mut self, scan: &ScanState, _settings: &Settings, frame: &mut Frame) {
        if scan.position >= UPDATE_GATE {
            return;
        }

        // Inherited levels may already sit near the top of the scale;
        // saturate so the creep can never leave the brightness range.
        frame[self.current] = frame[self.current].saturating_add(1).min(MAX_BRIGHTNESS);
        if frame[self.current] >= MEDIUM_BRIGHTNESS {
            self.current += 1;
            if self.current > MAX_LED_INDEX {
                // Start over from the left edge.
                self.current = 0;
                frame[0] = 0;
            }
        }

        // Everything beyond the fill point stays dark.
        for level in frame.iter_mut().skip(self.current + 1) {
            *level = 0;
        }
    }

    fn reset(&mut self) {
        self.current = 0;
    }
}
