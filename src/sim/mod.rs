//! Deterministic simulation module
//!
//! All slider logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no wall-clock time
//! - O(1) per call, no allocation on the advance path
//! - No I/O or platform dependencies

pub mod patch;
pub mod state;
pub mod tick;
pub mod validate;

pub use patch::SliderPatch;
pub use state::{Direction, SliderState};
pub use tick::advance;
pub use validate::{ValidationError, validate, validate_patch};
