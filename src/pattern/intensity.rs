//! Intensity bar patterns.
//!
//! Display a scalar intensity on the strip, VU-meter style: each lit LED
//! consumes a fixed slice of the intensity, and LEDs past the point where
//! it runs out are forced dark. Two fill variants share the decrement
//! logic.

use super::Pattern;
use crate::cursor::ScanState;
use crate::frame::{Frame, MEDIUM_BRIGHTNESS, NUM_LEDS};
use crate::settings::Settings;

/// Intensity consumed per lit step.
const INTENSITY_DELTA: u8 = 10;

const MIDDLE_LED_INDEX: usize = NUM_LEDS / 2;

/// Fill shape for the intensity bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fill {
    /// Grow symmetrically outward from the middle LED.
    FromMiddle,
    /// Grow left to right.
    FromLeft,
}

#[derive(Debug, Clone, Copy)]
pub struct IntensityPattern {
    fill: Fill,
}

impl IntensityPattern {
    pub const fn new(fill: Fill) -> Self {
        Self { fill }
    }

    /// Scalar displayed by both variants, derived from the shared cursor.
    fn intensity(scan: &ScanState) -> u8 {
        scan.position * 11 - 5
    }
}

impl Pattern for IntensityPattern {
    fn render(&mut self, scan: &ScanState, _settings: &Settings, frame: &mut Frame) {
        let mut intensity = Self::intensity(scan);

        match self.fill {
            Fill::FromMiddle => {
                for step in 0..NUM_LEDS - MIDDLE_LED_INDEX {
                    if intensity > INTENSITY_DELTA {
                        intensity -= INTENSITY_DELTA;
                        frame[MIDDLE_LED_INDEX + step] = MEDIUM_BRIGHTNESS;
                        frame[MIDDLE_LED_INDEX - step] = MEDIUM_BRIGHTNESS;
                    } else {
                        frame[MIDDLE_LED_INDEX + step] = 0;
                        frame[MIDDLE_LED_INDEX - step] = 0;
                    }
                }
            }
            Fill::FromLeft => {
                for level in frame.iter_mut() {
                    if intensity > INTENSITY_DELTA {
                        intensity -= INTENSITY_DELTA;
                        *level = MEDIUM_BRIGHTNESS;
                    } else {
                        *level = 0;
                    }
                }
            }
        }
    }
}
