//! Pattern engine - owns the working frame and the active pattern.

use crate::cursor::ScanState;
use crate::frame::{Frame, NUM_LEDS};
use crate::pattern::{DisplayMode, PatternSlot};
use crate::settings::Settings;

/// Computes brightness frames from the shared scalars.
///
/// The working frame persists across calls: most patterns overwrite all
/// nine elements, but the glow fill deliberately accumulates into it. Mode
/// switches do not clear the frame; the incoming pattern overwrites or
/// inherits whatever the previous one left behind.
#[derive(Debug, Default)]
pub struct PatternEngine {
    slot: PatternSlot,
    frame: Frame,
}

impl PatternEngine {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            slot: mode.to_slot(),
            frame: [0; NUM_LEDS],
        }
    }

    /// Render one frame from the current pattern.
    pub fn render(&mut self, scan: &ScanState, settings: &Settings) -> &Frame {
        self.slot.render(scan, settings, &mut self.frame);
        &self.frame
    }

    /// Switch patterns, resetting only the incoming pattern's private state.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        if self.slot.id() == mode {
            return;
        }
        self.slot = mode.to_slot();
        self.slot.reset();
    }

    pub fn mode(&self) -> DisplayMode {
        self.slot.id()
    }

    pub const fn frame(&self) -> &Frame {
        &self.frame
    }
}
