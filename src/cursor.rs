//! Position integrator for the scanning cursor.
//!
//! Advances a bounded position/direction pair once per control-loop
//! iteration. The bounce is overshoot-then-correct: the position steps one
//! past a bound inside the call, then the direction flips and the position
//! is pulled back one short of the bound. The asymmetric landing spot
//! (`bound - 1` rather than `bound`) is deliberate; it gives the bounce
//! its characteristic one-step skip at each end.

/// Lower position bound (inclusive).
pub const POSITION_MIN: u8 = 1;

/// Upper position bound (inclusive).
pub const POSITION_LIMIT: u8 = 9;

/// Travel direction of the scanning cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Moving right, as viewed from the front.
    Forward,
    /// Moving left.
    Backward,
}

impl Direction {
    /// Signed position increment for one step.
    pub const fn step(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Position and direction shared by every pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanState {
    pub position: u8,
    pub direction: Direction,
}

/// Bounded position/direction integrator.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    state: ScanState,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Start at the left bound, moving forward.
    pub const fn new() -> Self {
        Self {
            state: ScanState {
                position: POSITION_MIN,
                direction: Direction::Forward,
            },
        }
    }

    /// Advance one step, bouncing at the bounds.
    #[allow(clippy::cast_possible_wrap)]
    pub fn advance(&mut self) -> ScanState {
        // Signed arithmetic: the transient value ranges over [0, 10].
        let mut next = self.state.position as i8 + self.state.direction.step();

        if next > POSITION_LIMIT as i8 {
            self.state.direction = self.state.direction.toggled();
            next = POSITION_LIMIT as i8 - 1;
        } else if next < POSITION_MIN as i8 {
            self.state.direction = self.state.direction.toggled();
            next = POSITION_MIN as i8 + 1;
        }

        #[allow(clippy::cast_sign_loss)]
        {
            self.state.position = next as u8;
        }
        self.state
    }

    pub const fn state(&self) -> ScanState {
        self.state
    }
}
