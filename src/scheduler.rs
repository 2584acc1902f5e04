//! Cooperative control loop.
//!
//! Sequences debouncing, cursor integration, pattern rendering, and
//! settings flushing once per iteration, then tells the caller how long to
//! pause before the next one. The soft-PWM tick runs independently at a
//! much higher fixed rate and only ever reads the published frame.

use embassy_time::Duration;

use crate::button::{ButtonEvent, Debouncer, EventQueue};
use crate::cursor::Cursor;
use crate::engine::PatternEngine;
use crate::frame::SharedFrame;
use crate::pattern::DisplayMode;
use crate::settings::{BootOptions, Settings, SettingsBackend, SettingsStore};

/// Wall-clock value of one slowness unit.
pub const SLOWNESS_UNIT: Duration = Duration::from_millis(1);

/// Control loop state and sequencing.
///
/// # Usage
///
/// ```ignore
/// let shared = SharedFrame::new();
/// let mut scheduler = MainScheduler::boot(&shared, &mut backend, boot_options);
///
/// loop {
///     let pace = scheduler.step(button_is_pressed(), &mut backend);
///     // Platform-specific blocking wait; the soft-PWM tick keeps
///     // preempting during it.
///     delay(pace);
/// }
/// ```
pub struct MainScheduler<'a> {
    shared: &'a SharedFrame,
    debouncer: Debouncer,
    events: EventQueue,
    cursor: Cursor,
    engine: PatternEngine,
    settings: Settings,
    store: SettingsStore,
}

impl<'a> MainScheduler<'a> {
    /// Load persisted settings, sample the boot-time options, and build the
    /// control loop around `shared`.
    pub fn boot<B: SettingsBackend>(
        shared: &'a SharedFrame,
        backend: &mut B,
        boot: BootOptions,
    ) -> Self {
        let settings = Settings::load(backend, boot);
        let engine = PatternEngine::new(settings.display_mode);
        Self {
            shared,
            debouncer: Debouncer::new(),
            events: EventQueue::new(),
            cursor: Cursor::new(),
            engine,
            settings,
            store: SettingsStore::new(),
        }
    }

    /// Run one control-loop iteration.
    ///
    /// Returns the pacing delay the caller should block for before the next
    /// iteration.
    pub fn step<B: SettingsBackend>(&mut self, button_pressed: bool, backend: &mut B) -> Duration {
        self.debouncer.sample(button_pressed, &mut self.events);
        self.apply_events();

        let scan = self.cursor.advance();
        let frame = self.engine.render(&scan, &self.settings);
        self.shared.publish(frame);

        self.store.flush_if_due(&self.settings, backend);

        self.pace()
    }

    /// Apply queued button events to the settings.
    fn apply_events(&mut self) {
        while let Some(event) = self.events.pop_front() {
            match event {
                ButtonEvent::ShortPress => {
                    self.settings.speed_level += 1;
                    self.settings.normalize_speed();
                    self.settings.display_mode = self.settings.display_mode.next();
                    self.engine.set_mode(self.settings.display_mode);
                }
                ButtonEvent::LongPress => {
                    self.settings.skinny_eye_enabled = !self.settings.skinny_eye_enabled;
                    self.settings.apply_eye_profile();
                }
            }
            self.store.mark_dirty();
        }
    }

    /// Pacing delay for the current mode.
    ///
    /// The scanning-eye pattern carries its own timing in its fine counter
    /// step and runs unpaced; every other mode stretches the loop by the
    /// slowness factor.
    fn pace(&self) -> Duration {
        if self.engine.mode() == DisplayMode::OriginalLarson {
            return Duration::from_millis(0);
        }
        SLOWNESS_UNIT * u32::from(self.settings.slowness)
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> DisplayMode {
        self.engine.mode()
    }

    pub const fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }
}
