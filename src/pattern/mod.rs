//! Display patterns with compile-time known variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait and writes the full
//! nine-element frame from the shared position/direction/settings scalars.

mod chase;
mod glow;
mod intensity;
mod knight_rider;
mod larson;

pub use chase::ChasePattern;
pub use glow::GlowPattern;
pub use intensity::{Fill, IntensityPattern};
pub use knight_rider::KnightRiderPattern;
pub use larson::LarsonPattern;

use crate::cursor::ScanState;
use crate::frame::Frame;
use crate::settings::Settings;

const MODE_NAME_ORIGINAL_LARSON: &str = "original_larson";
const MODE_NAME_THREE_LED_CHASE: &str = "three_led_chase";
const MODE_NAME_KNIGHT_RIDER: &str = "knight_rider";
const MODE_NAME_INTENSITY_MIDDLE: &str = "intensity_middle";
const MODE_NAME_INTENSITY_LEFT: &str = "intensity_left";
const MODE_NAME_GLOW_LEFT: &str = "glow_left";

const MODE_ID_ORIGINAL_LARSON: u8 = 0;
const MODE_ID_THREE_LED_CHASE: u8 = 1;
const MODE_ID_KNIGHT_RIDER: u8 = 2;
const MODE_ID_INTENSITY_MIDDLE: u8 = 3;
const MODE_ID_INTENSITY_LEFT: u8 = 4;
const MODE_ID_GLOW_LEFT: u8 = 5;

/// Number of selectable display modes.
pub const NUM_DISPLAY_MODES: u8 = 6;

pub trait Pattern {
    /// Render a single frame from the shared scalars.
    fn render(&mut self, scan: &ScanState, settings: &Settings, frame: &mut Frame);

    /// Reset pattern-private state
    fn reset(&mut self) {}
}

/// Known display modes that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    OriginalLarson = MODE_ID_ORIGINAL_LARSON,
    ThreeLedChase = MODE_ID_THREE_LED_CHASE,
    KnightRider = MODE_ID_KNIGHT_RIDER,
    IntensityMiddle = MODE_ID_INTENSITY_MIDDLE,
    IntensityLeft = MODE_ID_INTENSITY_LEFT,
    GlowLeft = MODE_ID_GLOW_LEFT,
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// Classic scanning eye with fractional blending
    OriginalLarson(LarsonPattern),
    /// Three adjacent LEDs chasing the cursor
    ThreeLedChase(ChasePattern),
    /// Bright head with a decaying trail behind it
    KnightRider(KnightRiderPattern),
    /// Intensity bar growing out from the middle
    IntensityMiddle(IntensityPattern),
    /// Intensity bar growing left to right
    IntensityLeft(IntensityPattern),
    /// Accumulating glow fill
    GlowLeft(GlowPattern),
}

impl Default for PatternSlot {
    fn default() -> Self {
        DisplayMode::OriginalLarson.to_slot()
    }
}

impl DisplayMode {
    /// Decode a raw mode value. Callers fall back to [`Self::OriginalLarson`]
    /// on `None`.
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_ORIGINAL_LARSON => Self::OriginalLarson,
            MODE_ID_THREE_LED_CHASE => Self::ThreeLedChase,
            MODE_ID_KNIGHT_RIDER => Self::KnightRider,
            MODE_ID_INTENSITY_MIDDLE => Self::IntensityMiddle,
            MODE_ID_INTENSITY_LEFT => Self::IntensityLeft,
            MODE_ID_GLOW_LEFT => Self::GlowLeft,
            _ => return None,
        })
    }

    /// Next mode in the cycle, wrapping after the last one.
    pub fn next(self) -> Self {
        Self::from_raw((self as u8 + 1) % NUM_DISPLAY_MODES).unwrap_or(Self::OriginalLarson)
    }

    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::OriginalLarson => PatternSlot::OriginalLarson(LarsonPattern::new()),
            Self::ThreeLedChase => PatternSlot::ThreeLedChase(ChasePattern),
            Self::KnightRider => PatternSlot::KnightRider(KnightRiderPattern),
            Self::IntensityMiddle => {
                PatternSlot::IntensityMiddle(IntensityPattern::new(Fill::FromMiddle))
            }
            Self::IntensityLeft => {
                PatternSlot::IntensityLeft(IntensityPattern::new(Fill::FromLeft))
            }
            Self::GlowLeft => PatternSlot::GlowLeft(GlowPattern::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OriginalLarson => MODE_NAME_ORIGINAL_LARSON,
            Self::ThreeLedChase => MODE_NAME_THREE_LED_CHASE,
            Self::KnightRider => MODE_NAME_KNIGHT_RIDER,
            Self::IntensityMiddle => MODE_NAME_INTENSITY_MIDDLE,
            Self::IntensityLeft => MODE_NAME_INTENSITY_LEFT,
            Self::GlowLeft => MODE_NAME_GLOW_LEFT,
        }
    }
}

impl PatternSlot {
    /// Render the current pattern
    pub fn render(&mut self, scan: &ScanState, settings: &Settings, frame: &mut Frame) {
        match self {
            Self::OriginalLarson(pattern) => pattern.render(scan, settings, frame),
            Self::ThreeLedChase(pattern) => pattern.render(scan, settings, frame),
            Self::KnightRider(pattern) => pattern.render(scan, settings, frame),
            Self::IntensityMiddle(pattern) => pattern.render(scan, settings, frame),
            Self::IntensityLeft(pattern) => pattern.render(scan, settings, frame),
            Self::GlowLeft(pattern) => pattern.render(scan, settings, frame),
        }
    }

    /// Reset the pattern state
    pub fn reset(&mut self) {
        match self {
            Self::OriginalLarson(pattern) => Pattern::reset(pattern),
            Self::ThreeLedChase(pattern) => Pattern::reset(pattern),
            Self::KnightRider(pattern) => Pattern::reset(pattern),
            Self::IntensityMiddle(pattern) => Pattern::reset(pattern),
            Self::IntensityLeft(pattern) => Pattern::reset(pattern),
            Self::GlowLeft(pattern) => Pattern::reset(pattern),
        }
    }

    /// Get the display mode for external observation
    pub fn id(&self) -> DisplayMode {
        match self {
            Self::OriginalLarson(_) => DisplayMode::OriginalLarson,
            Self::ThreeLedChase(_) => DisplayMode::ThreeLedChase,
            Self::KnightRider(_) => DisplayMode::KnightRider,
            Self::IntensityMiddle(_) => DisplayMode::IntensityMiddle,
            Self::IntensityLeft(_) => DisplayMode::IntensityLeft,
            Self::GlowLeft(_) => DisplayMode::GlowLeft,
        }
    }
}
