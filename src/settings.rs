//! Settings, boot-time option sampling, and persistence throttling.
//!
//! The device keeps one configuration byte in a single persistent slot:
//! speed level in the high nibble, low nibble reserved as zero. `0xFF`
//! marks an unprogrammed slot and falls back to built-in defaults. Writes
//! are rate-limited so rapid button activity cannot wear out the medium;
//! the cost is a bounded window in which a power loss drops an unflushed
//! change.

use crate::pattern::DisplayMode;

/// Unprogrammed-slot sentinel.
pub const UNPROGRAMMED: u8 = 0xFF;

/// Lowest and highest speed levels.
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 3;

/// Default pacing factor: higher is slower.
pub const DEFAULT_SLOWNESS: u8 = 5;

/// Wrap ceiling for the flush cycle counter.
pub const CYCLE_WRAP: u8 = 250;

/// Cycle count the store must pass before a dirty flush is written.
pub const FLUSH_COOLDOWN: u8 = 100;

const EYE_WEIGHTS_DEFAULT: [u8; 4] = [1, 4, 2, 1];
const EYE_WEIGHTS_SKINNY: [u8; 4] = [0, 4, 1, 0];

/// Single-slot persistent byte store.
///
/// Implement this over the platform's EEPROM/flash slot. Reads and writes
/// are infallible by design; there is no error channel on this device.
pub trait SettingsBackend {
    /// Read the configuration byte. An unprogrammed slot reads [`UNPROGRAMMED`].
    fn read(&mut self) -> u8;

    /// Write the configuration byte.
    fn write(&mut self, raw: u8);
}

/// Inputs sampled exactly once at power-up and never re-read.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootOptions {
    /// Option-1 jumper. Reserved; currently unassigned.
    pub option1_jumper: bool,
    /// Option-2 jumper: makes the skinny eye profile the default.
    pub skinny_jumper: bool,
    /// Button held down at power-up: toggles the skinny eye default.
    pub button_held: bool,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Scan speed, `MIN_SPEED..=MAX_SPEED`.
    pub speed_level: u8,
    /// Control-loop pacing factor.
    pub slowness: u8,
    pub display_mode: DisplayMode,
    pub skinny_eye_enabled: bool,
    /// Relative brightness of the scanning eye positions, lead to tail.
    pub eye_weights: [u8; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_level: 2,
            slowness: DEFAULT_SLOWNESS,
            display_mode: DisplayMode::OriginalLarson,
            skinny_eye_enabled: false,
            eye_weights: EYE_WEIGHTS_DEFAULT,
        }
    }
}

impl Settings {
    /// Load settings from the persistent slot and boot-time option inputs.
    pub fn load<B: SettingsBackend>(backend: &mut B, boot: BootOptions) -> Self {
        let mut settings = Self::default();

        let raw = backend.read();
        if raw != UNPROGRAMMED {
            settings.speed_level = raw >> 4;
            settings.normalize_speed();
        }

        settings.skinny_eye_enabled = boot.skinny_jumper;
        if boot.button_held {
            settings.skinny_eye_enabled = !settings.skinny_eye_enabled;
        }
        settings.apply_eye_profile();

        settings
    }

    /// Pack the persisted byte: speed in the high nibble, low nibble zero.
    pub const fn encode(&self) -> u8 {
        self.speed_level << 4
    }

    /// Pull an out-of-range speed back to the minimum.
    pub fn normalize_speed(&mut self) {
        if self.speed_level > MAX_SPEED || self.speed_level < MIN_SPEED {
            self.speed_level = MIN_SPEED;
        }
    }

    /// Select the eye weight table for the current skinny-eye flag.
    pub fn apply_eye_profile(&mut self) {
        self.eye_weights = if self.skinny_eye_enabled {
            EYE_WEIGHTS_SKINNY
        } else {
            EYE_WEIGHTS_DEFAULT
        };
    }
}

/// Dirty tracking and write throttling for the persistent slot.
#[derive(Debug, Default)]
pub struct SettingsStore {
    dirty: bool,
    cycle_count: u8,
}

impl SettingsStore {
    pub const fn new() -> Self {
        Self {
            dirty: false,
            cycle_count: 0,
        }
    }

    /// Record that in-memory settings differ from the persisted byte.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Advance the cycle counter and write the settings byte if a flush is
    /// both pending and past the cooldown.
    ///
    /// Returns `true` when a write happened. The write itself causes a
    /// momentary brightness glitch on real hardware, another reason to keep
    /// it rare.
    pub fn flush_if_due<B: SettingsBackend>(
        &mut self,
        settings: &Settings,
        backend: &mut B,
    ) -> bool {
        self.cycle_count += 1;
        if self.cycle_count > CYCLE_WRAP {
            self.cycle_count = 0;
        }

        if self.dirty && self.cycle_count > FLUSH_COOLDOWN {
            self.dirty = false;
            // Restart the window so sustained button activity still yields
            // at most one write per cooldown span.
            self.cycle_count = 0;
            backend.write(settings.encode());
            return true;
        }
        false
    }
}
