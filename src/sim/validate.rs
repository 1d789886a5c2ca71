//! Boundary validation for slider fields
//!
//! The simulation assumes well-formed input; range checks live here and run
//! at the edges, before a state is created, merged, or persisted.

use thiserror::Error;

use crate::consts::*;

use super::patch::SliderPatch;
use super::state::SliderState;

/// A field value outside its permitted range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} = {value} is out of range {min}..={max}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

fn check(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check every constrained field of a slider.
///
/// `max_travel` accepts 0: a frozen slider is a legal persistent state.
/// `current_travel` and the reversal count are unconstrained; direction is
/// valid by construction.
pub fn validate(slider: &SliderState) -> Result<(), ValidationError> {
    check("size", slider.size, 1, SIZE_LIMIT)?;
    check("x", slider.x, 0, X_LIMIT)?;
    check("y", slider.y, 0, Y_LIMIT)?;
    check("max_travel", slider.max_travel, 0, MAX_TRAVEL_LIMIT)?;
    Ok(())
}

/// Check whichever constrained fields a patch carries, so a bad sparse
/// update can be rejected before it touches a stored state.
pub fn validate_patch(patch: &SliderPatch) -> Result<(), ValidationError> {
    if let Some(size) = patch.size {
        check("size", size, 1, SIZE_LIMIT)?;
    }
    if let Some(x) = patch.x {
        check("x", x, 0, X_LIMIT)?;
    }
    if let Some(y) = patch.y {
        check("y", y, 0, Y_LIMIT)?;
    }
    if let Some(max_travel) = patch.max_travel {
        check("max_travel", max_travel, 0, MAX_TRAVEL_LIMIT)?;
    }
    Ok(())
}
