//! Slider state and core simulation types
//!
//! All state that must survive a tick or a patch lives here.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Direction of travel along the oscillation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Direction {
    /// Moving right (+1)
    #[default]
    Right,
    /// Moving left (-1)
    Left,
}

impl Direction {
    /// Signed unit step: +1 for right, -1 for left
    pub fn signum(self) -> i32 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
        }
    }

    /// The opposite direction
    pub fn flip(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// Map a signed value back to a direction, for callers holding raw ints.
    /// Returns `None` for anything other than +1 or -1.
    pub fn from_signum(value: i32) -> Option<Self> {
        match value {
            1 => Some(Direction::Right),
            -1 => Some(Direction::Left),
            _ => None,
        }
    }
}

/// One slider's kinematic configuration at an instant.
///
/// Field ranges are a boundary concern (see [`crate::sim::validate`]); the
/// simulation itself assumes well-formed input and never re-checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderState {
    /// Storage identity, assigned by the owning store. Never touched by
    /// `advance` or patch application.
    pub id: Option<u64>,
    /// Visual footprint in pixels (1..=SIZE_LIMIT)
    pub size: i32,
    /// Horizontal position (0..=X_LIMIT)
    pub x: i32,
    /// Vertical position (0..=Y_LIMIT)
    pub y: i32,
    /// Current oscillation amplitude (0..=MAX_TRAVEL_LIMIT, 0 = frozen)
    pub max_travel: i32,
    /// Signed displacement from the oscillation origin
    pub current_travel: i32,
    /// Current direction of travel
    pub direction: Direction,
    /// Reversals since the last decay event
    pub dir_change_count: u32,
}

impl SliderState {
    /// Create a slider at the given position with the given amplitude.
    /// Remaining fields take their documented defaults.
    pub fn new(x: i32, y: i32, max_travel: i32) -> Self {
        Self {
            id: None,
            size: INITIAL_SIZE,
            x,
            y,
            max_travel,
            current_travel: 0,
            direction: Direction::Right,
            dir_change_count: 0,
        }
    }

    /// A slider whose amplitude has reached zero never moves again.
    pub fn is_frozen(&self) -> bool {
        self.max_travel <= 0
    }

    /// Rendered x position: origin plus the current displacement.
    /// Display-only; the tick operates on `current_travel` alone.
    pub fn display_x(&self) -> i32 {
        self.x + self.current_travel
    }
}
