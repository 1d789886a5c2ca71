//! Slider Sim - bounce-and-decay slider kinematics
//!
//! Core modules:
//! - `sim`: Deterministic simulation (slider state, tick advance, patch merge, validation)
//! - `settings`: Data-driven runtime configuration

pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Direction, SliderPatch, SliderState, ValidationError, advance, validate};

/// Simulation configuration constants
pub mod consts {
    /// Demo tick cadence (ticks per second)
    pub const TICK_HZ: u32 = 10;

    /// Field bounds enforced at the validation boundary
    pub const SIZE_LIMIT: i32 = 200;
    pub const X_LIMIT: i32 = 800;
    pub const Y_LIMIT: i32 = 600;
    pub const MAX_TRAVEL_LIMIT: i32 = 100;

    /// Default visual footprint in pixels
    pub const INITIAL_SIZE: i32 = 50;

    /// Displacement applied per tick, in the current direction
    pub const TRAVEL_SPEED: i32 = 5;
    /// Reversals tolerated before the amplitude decays
    pub const MAX_DIR_CHANGES: u32 = 10;
    /// Amplitude lost per decay event
    pub const DECREASE_RATE: i32 = 1;
}
