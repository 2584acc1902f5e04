//! Brightness frame shared between the control loop and the tick handler.
//!
//! The control loop renders whole frames; the soft-PWM tick handler reads
//! single elements from interrupt context. Elements are stored as `AtomicU8`
//! so per-element access never tears, and `publish` runs inside a critical
//! section so a single-core tick handler always observes whole frames.

use core::sync::atomic::{AtomicU8, Ordering};

/// Number of LEDs on the strip. The board is fixed at nine.
pub const NUM_LEDS: usize = 9;

/// Highest valid LED index.
pub const MAX_LED_INDEX: usize = NUM_LEDS - 1;

/// Top of the brightness scale. A level of 100 is on for the full duty
/// period.
pub const MAX_BRIGHTNESS: u8 = 100;

/// Brightness ladder used by the patterns.
pub const HIGH_BRIGHTNESS: u8 = 85;
pub const MEDIUM_HIGH_BRIGHTNESS: u8 = 70;
pub const MEDIUM_BRIGHTNESS: u8 = 50;
pub const MEDIUM_LOW_BRIGHTNESS: u8 = 30;
pub const LOW_BRIGHTNESS: u8 = 15;
pub const NO_BRIGHTNESS: u8 = 0;

/// One rendered frame: a brightness level per LED, left to right.
///
/// Every element stays within `[0, MAX_BRIGHTNESS]`.
pub type Frame = [u8; NUM_LEDS];

/// Interrupt-safe brightness buffer.
///
/// The control loop is the only writer (via [`SharedFrame::publish`]); the
/// tick handler is the only reader on the hot path (via
/// [`SharedFrame::level`]).
#[derive(Debug)]
pub struct SharedFrame {
    levels: [AtomicU8; NUM_LEDS],
}

impl SharedFrame {
    /// Create a dark frame.
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            levels: [const { AtomicU8::new(0) }; NUM_LEDS],
        }
    }

    /// Publish a rendered frame.
    ///
    /// The stores run inside a critical section so the tick handler cannot
    /// interleave with a half-written frame on single-core targets.
    pub fn publish(&self, frame: &Frame) {
        critical_section::with(|_cs| {
            for (slot, &level) in self.levels.iter().zip(frame.iter()) {
                slot.store(level, Ordering::Relaxed);
            }
        });
    }

    /// Read one LED level.
    ///
    /// A single relaxed load; safe to call from interrupt context.
    #[inline]
    pub fn level(&self, index: usize) -> u8 {
        self.levels[index].load(Ordering::Relaxed)
    }

    /// Copy the current frame out, element by element.
    pub fn snapshot(&self) -> Frame {
        let mut frame = [0; NUM_LEDS];
        for (out, slot) in frame.iter_mut().zip(self.levels.iter()) {
            *out = slot.load(Ordering::Relaxed);
        }
        frame
    }
}
