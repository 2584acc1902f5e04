//! Button sampling and debouncing.
//!
//! No edge interrupts: the raw (active-low, already inverted by the
//! platform adapter) button line is sampled once per control-loop iteration
//! and debounced purely by counting iterations. A press that crosses
//! [`LONG_PRESS_ITERATIONS`] fires one long-press event for the whole hold;
//! a shorter press fires one short-press event on release.

use heapless::Deque;

/// Iterations a press must be held to count as a long press.
pub const LONG_PRESS_ITERATIONS: u8 = 100;

/// Capacity of the pending-event queue.
///
/// The scheduler drains the queue every iteration and one sample produces at
/// most one event, so the queue cannot fill in normal use. If a caller lets
/// events pile up anyway, the oldest ones are kept and the overflow is
/// dropped.
pub const EVENT_QUEUE_DEPTH: usize = 4;

/// Discrete events produced from the raw button line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Released before the long-press threshold.
    ShortPress,
    /// Held past the long-press threshold. Fired at most once per hold.
    LongPress,
}

/// Pending events, drained by the scheduler each iteration.
pub type EventQueue = Deque<ButtonEvent, EVENT_QUEUE_DEPTH>;

/// Iteration-count debouncer.
///
/// Transient state only; everything resets implicitly on release.
#[derive(Debug, Default)]
pub struct Debouncer {
    /// Iterations the button has been seen pressed.
    held: u8,
    /// Set once the button was seen pressed at all during this hold.
    was_pressed: bool,
    /// Set once the long-press event fired, cleared only on release.
    long_press_handled: bool,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            held: 0,
            was_pressed: false,
            long_press_handled: false,
        }
    }

    /// Feed one raw sample; queue any event it completes.
    pub fn sample(&mut self, pressed: bool, events: &mut EventQueue) {
        if pressed {
            self.held = self.held.saturating_add(1);

            if self.held > LONG_PRESS_ITERATIONS {
                if !self.long_press_handled {
                    self.held = 0;
                    self.long_press_handled = true;
                    // A long press supersedes the short press.
                    self.was_pressed = false;
                    let _ = events.push_back(ButtonEvent::LongPress);
                }
            } else if !self.long_press_handled {
                self.was_pressed = true;
            }
        } else {
            self.held = 0;
            self.long_press_handled = false;

            if self.was_pressed {
                self.was_pressed = false;
                let _ = events.push_back(ButtonEvent::ShortPress);
            }
        }
    }
}
