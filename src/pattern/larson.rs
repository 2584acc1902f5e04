//! The original scanning-eye pattern.
//!
//! Runs its own fine-grained position counter (1..=127) independent of the
//! shared cursor. The counter splits into a coarse center LED (top nibble)
//! and a 0-15 fractional blend weight (bottom nibble) between the center
//! LED and its neighbor, so the eye glides between LEDs instead of
//! stepping. All arithmetic is integer shift/mask work; the rendered
//! brightness is sensitive to rounding, so keep it that way.

use super::Pattern;
use crate::cursor::{Direction, ScanState};
use crate::frame::{Frame, MAX_BRIGHTNESS, MAX_LED_INDEX, NUM_LEDS};
use crate::settings::Settings;

/// Upper bound of the fine position counter.
const FINE_POSITION_LIMIT: u8 = 127;

/// Fine counter steps per call: base, plus extra at speeds 2 and 3.
const BASE_STEP: u8 = 25;
const SPEED2_EXTRA: u8 = 5;
const SPEED3_EXTRA: u8 = 10;

/// Eye slots, leading edge through tail.
const NUM_EYE_SLOTS: usize = 5;

#[derive(Debug, Clone)]
pub struct LarsonPattern {
    fine_position: u8,
    direction: Direction,
}

impl Default for LarsonPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl LarsonPattern {
    pub const fn new() -> Self {
        Self {
            fine_position: 1,
            direction: Direction::Forward,
        }
    }

    /// Map the five logical eye slots onto physical LED indices,
    /// reflecting back at both ends of the strip (triangle, not wrap).
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn eye_indices(&self, center: u8) -> [usize; NUM_EYE_SLOTS] {
        let mut indices = [0; NUM_EYE_SLOTS];
        for (slot, index) in indices.iter_mut().enumerate() {
            let offset = match self.direction {
                Direction::Forward => 2 - slot as i8,
                Direction::Backward => slot as i8 - 2,
            };
            let mut led = center as i8 + offset;

            if led > MAX_LED_INDEX as i8 {
                led = 2 * MAX_LED_INDEX as i8 - led;
            }
            if led < 0 {
                led = -led;
            }
            *index = led as usize;
        }
        indices
    }

    /// Advance the fine counter; bounce at the limit.
    fn step(&mut self, speed_level: u8) {
        self.fine_position += BASE_STEP;
        if speed_level == 3 {
            self.fine_position += SPEED3_EXTRA;
        } else if speed_level != 1 {
            self.fine_position += SPEED2_EXTRA;
        }

        if self.fine_position > FINE_POSITION_LIMIT {
            self.fine_position = 1;
            self.direction = self.direction.toggled();
        }
    }
}

impl Pattern for LarsonPattern {
    fn render(&mut self, _scan: &ScanState, settings: &Settings, frame: &mut Frame) {
        // Split the fine counter into a coarse center index (top nibble)
        // and complementary 0-15 blend weights (bottom nibble).
        let (center, blend_r, blend_m) = match self.direction {
            Direction::Forward => {
                let scaled = 0x0F + self.fine_position;
                let center = scaled >> 4;
                let blend_r = scaled - (center << 4);
                (center, blend_r, 0xF - blend_r)
            }
            Direction::Backward => {
                let scaled = FINE_POSITION_LIMIT - self.fine_position;
                let center = scaled >> 4;
                let blend_m = scaled - (center << 4);
                (center, 0xF - blend_m, blend_m)
            }
        };

        let indices = self.eye_indices(center);

        // Each weight splits across two adjacent slots by the blend
        // fraction. Slots folded onto the same physical LED accumulate;
        // they must not overwrite each other.
        let mut accumulated = [0u16; NUM_LEDS];
        for slot in 0..NUM_EYE_SLOTS - 1 {
            let weight = u16::from(settings.eye_weights[slot]);
            accumulated[indices[slot]] += weight * u16::from(blend_r);
            accumulated[indices[slot + 1]] += weight * u16::from(blend_m);
        }

        #[allow(clippy::cast_possible_truncation)]
        for (out, &level) in frame.iter_mut().zip(accumulated.iter()) {
            *out = level.min(u16::from(MAX_BRIGHTNESS)) as u8;
        }

        self.step(settings.speed_level);
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
