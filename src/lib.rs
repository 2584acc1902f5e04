#![no_std]

pub mod button;
pub mod cursor;
pub mod frame;
pub mod pattern;
pub mod scheduler;
pub mod settings;
pub mod soft_pwm;

mod engine;

pub use button::{ButtonEvent, Debouncer, EventQueue, LONG_PRESS_ITERATIONS};
pub use cursor::{Cursor, Direction, ScanState, POSITION_LIMIT, POSITION_MIN};
pub use engine::PatternEngine;
pub use frame::{Frame, SharedFrame, MAX_BRIGHTNESS, MAX_LED_INDEX, NUM_LEDS};
pub use pattern::{DisplayMode, PatternSlot};
pub use scheduler::MainScheduler;
pub use settings::{BootOptions, Settings, SettingsBackend, SettingsStore, UNPROGRAMMED};
pub use soft_pwm::{SoftPwm, RECOMMENDED_TICK_INTERVAL};

pub use embassy_time::Duration;

/// Abstract digital output bank
///
/// Implement this trait to map LED indices to physical output lines.
/// The engine is generic over this trait; all register and pin mapping
/// stays in the platform adapter.
pub trait OutputBank {
    /// Drive a single output line high or low
    fn set_line(&mut self, index: usize, level: bool);
}
