//! Knight Rider style trail pattern.
//!
//! A bright head at the cursor with a brightness ramp that decays by a
//! fixed delta per LED. The ramp only extends on the trailing side of the
//! travel direction; the leading side gets exactly one dim LED.

use super::Pattern;
use crate::cursor::{Direction, ScanState};
use crate::frame::{Frame, LOW_BRIGHTNESS, MAX_LED_INDEX, MEDIUM_HIGH_BRIGHTNESS, NUM_LEDS};
use crate::settings::Settings;

/// Ramp step-down per LED.
const TRAIL_DELTA: i8 = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct KnightRiderPattern;

impl Pattern for KnightRiderPattern {
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn render(&mut self, scan: &ScanState, _settings: &Settings, frame: &mut Frame) {
        let center = scan.position as i8 - 1;

        let mut next = [0u8; NUM_LEDS];
        next[center as usize] = MEDIUM_HIGH_BRIGHTNESS;

        // Walk down from the center; stop after one LED when this is the
        // leading side.
        let mut index = center - 1;
        let mut level = LOW_BRIGHTNESS as i8;
        while index >= 0 {
            if level > 0 {
                next[index as usize] = level as u8;
                level -= TRAIL_DELTA;
            } else {
                next[index as usize] = 0;
            }
            index -= 1;
            if scan.direction == Direction::Backward {
                break;
            }
        }

        // Same walk upward from the center.
        let mut index = center + 1;
        let mut level = LOW_BRIGHTNESS as i8;
        while index <= MAX_LED_INDEX as i8 {
            if level > 0 {
                next[index as usize] = level as u8;
                level -= TRAIL_DELTA;
            } else {
                next[index as usize] = 0;
            }
            index += 1;
            if scan.direction == Direction::Forward {
                break;
            }
        }

        *frame = next;
    }
}
