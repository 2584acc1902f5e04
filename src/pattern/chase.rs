//! Three-LED chase pattern.

use super::Pattern;
use crate::cursor::ScanState;
use crate::frame::{Frame, LOW_BRIGHTNESS, MAX_LED_INDEX, MEDIUM_HIGH_BRIGHTNESS, NUM_LEDS};
use crate::settings::Settings;

/// Lights the cursor LED at medium-high brightness and its in-range
/// neighbors dimly; everything else is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChasePattern;

impl Pattern for ChasePattern {
    fn render(&mut self, scan: &ScanState, _settings: &Settings, frame: &mut Frame) {
        let center = usize::from(scan.position - 1);

        let mut next = [0u8; NUM_LEDS];
        next[center] = MEDIUM_HIGH_BRIGHTNESS;
        if center > 0 {
            next[center - 1] = LOW_BRIGHTNESS;
        }
        if center < MAX_LED_INDEX {
            next[center + 1] = LOW_BRIGHTNESS;
        }

        *frame = next;
    }
}
