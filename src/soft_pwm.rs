//! Software PWM tick routine.
//!
//! None of the nine output lines has a hardware PWM channel, so apparent
//! brightness comes from time-averaging: a free-running phase counter sweeps
//! `0..=MAX_BRIGHTNESS` and each line is high while its level exceeds the
//! phase. Over one 101-tick sweep a line is on for `level / 100` of the
//! time.

use embassy_time::Duration;

use crate::frame::{MAX_BRIGHTNESS, NUM_LEDS, SharedFrame};
use crate::OutputBank;

/// Ticks in one full duty sweep.
pub const TICKS_PER_PERIOD: u32 = MAX_BRIGHTNESS as u32 + 1;

/// Suggested tick interval for platform adapters.
///
/// A 174 us tick gives a ~57 Hz duty sweep - fast enough that the
/// modulation reads as steady brightness.
pub const RECOMMENDED_TICK_INTERVAL: Duration = Duration::from_micros(174);

/// Fixed-frequency duty-cycle renderer.
///
/// [`SoftPwm::tick`] is meant to run from a timer interrupt that preempts
/// the control loop. It does a fixed amount of work per call: nine compares,
/// nine line writes, one counter update. Keep it that way - any
/// variable-length work here shows up as visible jitter.
#[derive(Debug, Default)]
pub struct SoftPwm {
    phase: u8,
}

impl SoftPwm {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Drive all output lines for one tick of the duty sweep.
    #[inline]
    pub fn tick<O: OutputBank>(&mut self, frame: &SharedFrame, bank: &mut O) {
        for index in 0..NUM_LEDS {
            bank.set_line(index, frame.level(index) > self.phase);
        }
        self.phase += 1;
        if self.phase > MAX_BRIGHTNESS {
            self.phase = 0;
        }
    }

    /// Current position in the duty sweep.
    pub const fn phase(&self) -> u8 {
        self.phase
    }
}
