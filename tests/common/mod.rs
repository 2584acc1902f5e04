//! Shared fakes for integration tests.
#![allow(dead_code)]

use larson_light_engine::{OutputBank, SettingsBackend, NUM_LEDS};

/// In-memory single-slot settings backend that records every write.
pub struct MemoryBackend {
    pub value: u8,
    pub writes: Vec<u8>,
}

impl MemoryBackend {
    pub fn new(value: u8) -> Self {
        Self {
            value,
            writes: Vec::new(),
        }
    }
}

impl SettingsBackend for MemoryBackend {
    fn read(&mut self) -> u8 {
        self.value
    }

    fn write(&mut self, raw: u8) {
        self.value = raw;
        self.writes.push(raw);
    }
}

/// Output bank that counts high ticks per line.
#[derive(Default)]
pub struct CountingBank {
    pub highs: [u32; NUM_LEDS],
    pub last_levels: [bool; NUM_LEDS],
}

impl OutputBank for CountingBank {
    fn set_line(&mut self, index: usize, level: bool) {
        if level {
            self.highs[index] += 1;
        }
        self.last_levels[index] = level;
    }
}
