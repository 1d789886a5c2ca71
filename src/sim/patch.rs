//! Sparse slider updates
//!
//! A patch carries only the fields a client chose to send; presence is
//! type-level (`Option`), not a null sentinel. Applying a patch overlays the
//! present fields and leaves the rest of the target alone.

use serde::{Deserialize, Serialize};

use super::state::{Direction, SliderState};

/// A sparse update for one slider. Every field is independently optional;
/// the storage identity is deliberately absent and can never be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderPatch {
    pub size: Option<i32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub current_travel: Option<i32>,
    pub max_travel: Option<i32>,
    pub direction: Option<Direction>,
    pub dir_change_count: Option<u32>,
}

impl SliderPatch {
    /// True when no field is present; applying such a patch is a no-op.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay every present field onto `target`.
    ///
    /// Per-field and order-independent; no cross-field checks happen here.
    /// A patch can transiently leave an inconsistent combination (say, a
    /// displacement beyond the amplitude), so callers re-validate before
    /// persisting the result.
    pub fn apply(&self, target: &mut SliderState) {
        if let Some(size) = self.size {
            target.size = size;
        }
        if let Some(x) = self.x {
            target.x = x;
        }
        if let Some(y) = self.y {
            target.y = y;
        }
        if let Some(current_travel) = self.current_travel {
            target.current_travel = current_travel;
        }
        if let Some(max_travel) = self.max_travel {
            target.max_travel = max_travel;
        }
        if let Some(direction) = self.direction {
            target.direction = direction;
        }
        if let Some(dir_change_count) = self.dir_change_count {
            target.dir_change_count = dir_change_count;
        }
    }

    /// A patch carrying every non-identity field of `state`.
    pub fn full(state: &SliderState) -> Self {
        Self {
            size: Some(state.size),
            x: Some(state.x),
            y: Some(state.y),
            current_travel: Some(state.current_travel),
            max_travel: Some(state.max_travel),
            direction: Some(state.direction),
            dir_change_count: Some(state.dir_change_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn target() -> SliderState {
        let mut slider = SliderState::new(100, 100, 20);
        slider.id = Some(7);
        slider
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut slider = target();
        let before = slider.clone();
        let patch = SliderPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut slider);
        assert_eq!(slider, before);
    }

    #[test]
    fn test_partial_patch_leaves_rest_alone() {
        let mut slider = target();
        let patch = SliderPatch {
            x: Some(200),
            size: Some(100),
            direction: Some(Direction::Left),
            ..Default::default()
        };
        patch.apply(&mut slider);

        assert_eq!(slider.x, 200);
        assert_eq!(slider.size, 100);
        assert_eq!(slider.direction, Direction::Left);
        // Untouched fields
        assert_eq!(slider.y, 100);
        assert_eq!(slider.max_travel, 20);
        assert_eq!(slider.current_travel, 0);
        assert_eq!(slider.dir_change_count, 0);
    }

    #[test]
    fn test_full_patch_overwrites_everything_but_id() {
        let mut slider = target();
        let mut other = SliderState::new(300, 400, 60);
        other.size = 120;
        other.current_travel = -15;
        other.direction = Direction::Left;
        other.dir_change_count = 4;
        other.id = Some(99);

        SliderPatch::full(&other).apply(&mut slider);

        assert_eq!(slider.id, Some(7), "identity is never merged");
        assert_eq!(slider.size, 120);
        assert_eq!(slider.x, 300);
        assert_eq!(slider.y, 400);
        assert_eq!(slider.max_travel, 60);
        assert_eq!(slider.current_travel, -15);
        assert_eq!(slider.direction, Direction::Left);
        assert_eq!(slider.dir_change_count, 4);
    }

    #[test]
    fn test_patch_can_unfreeze() {
        let mut slider = target();
        slider.max_travel = 0;
        let patch = SliderPatch {
            max_travel: Some(30),
            ..Default::default()
        };
        patch.apply(&mut slider);
        assert!(!slider.is_frozen());
    }

    proptest! {
        #[test]
        fn prop_apply_is_per_field(
            x in proptest::option::of(0i32..=800),
            y in proptest::option::of(0i32..=600),
            size in proptest::option::of(1i32..=200),
            max_travel in proptest::option::of(0i32..=100),
        ) {
            let mut slider = target();
            let before = slider.clone();
            let patch = SliderPatch {
                x,
                y,
                size,
                max_travel,
                ..Default::default()
            };
            patch.apply(&mut slider);

            prop_assert_eq!(slider.x, x.unwrap_or(before.x));
            prop_assert_eq!(slider.y, y.unwrap_or(before.y));
            prop_assert_eq!(slider.size, size.unwrap_or(before.size));
            prop_assert_eq!(slider.max_travel, max_travel.unwrap_or(before.max_travel));
            prop_assert_eq!(slider.id, before.id);
        }
    }
}
