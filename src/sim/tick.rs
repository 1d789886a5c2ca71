//! Fixed tick advance
//!
//! The bounce-and-decay rule that moves a slider one unit of time forward.

use crate::consts::*;

use super::state::SliderState;

/// Advance the slider by one tick.
///
/// Displacement grows by `TRAVEL_SPEED` in the current direction. Reaching or
/// passing the amplitude bound reverses the direction; after more than
/// `MAX_DIR_CHANGES` reversals the amplitude decays by `DECREASE_RATE` and the
/// reversal count resets. A slider with zero amplitude is frozen and never
/// changes.
///
/// Deterministic, O(1), no allocation. Assumes the state satisfies the field
/// constraints; callers validate at the boundary.
pub fn advance(slider: &mut SliderState) {
    if slider.is_frozen() {
        return;
    }

    slider.current_travel += slider.direction.signum() * TRAVEL_SPEED;

    // Bound check is >=, not >: landing exactly on the edge reverses.
    if slider.current_travel.abs() >= slider.max_travel {
        slider.direction = slider.direction.flip();
        slider.dir_change_count += 1;
        if slider.dir_change_count > MAX_DIR_CHANGES {
            slider.max_travel -= DECREASE_RATE;
            slider.dir_change_count = 0;
        }
    }
}
