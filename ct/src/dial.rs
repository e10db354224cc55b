//! Angular timeline dial
//!
//! A circular control that selects one of N entries from the pointer's angle
//! around the dial center. Angles are measured in degrees clockwise from
//! straight up, in screen coordinates where `y` grows downward. The circle
//! is split into N equal arcs starting at 0°; arc `i` selects entry `i`.
//!
//! The idle selection is the last entry. It is restored when the pointer
//! leaves the dial.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

const FULL_TURN: f64 = 360.0;

/// A position in the dial's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer angle around `center`, in `[0, 360)` with straight up at 0
pub fn pointer_angle(pointer: Point, center: Point) -> f64 {
    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;
    let degrees = dy.atan2(dx).to_degrees();
    (degrees + 90.0 + FULL_TURN) % FULL_TURN
}

/// Point at `angle` degrees (same convention as [`pointer_angle`]) and `radius` from `center`
pub fn point_at_angle(center: Point, radius: f64, angle: f64) -> Point {
    let radians = angle.to_radians();
    Point::new(center.x + radius * radians.sin(), center.y - radius * radians.cos())
}

/// A change of the selected entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: usize,
    pub current: usize,
}

/// Selection state for one rendered dial
#[derive(Debug, Clone, PartialEq)]
pub struct DialSelector {
    len: usize,
    active: usize,
}

impl DialSelector {
    /// A dial over `len` entries in its idle state, `None` when there is nothing to select
    pub fn new(len: usize) -> Option<Self> {
        debug!(len, "DialSelector::new: called");
        if len == 0 {
            return None;
        }
        Some(Self { len, active: len - 1 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A dial always has at least one entry
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Single-entry dials ignore the pointer
    pub fn is_interactive(&self) -> bool {
        self.len > 1
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// `active_index / len`, in `[0, 1)`
    pub fn progress_fraction(&self) -> f64 {
        self.active as f64 / self.len as f64
    }

    /// Angular size of each entry's arc
    pub fn arc_degrees(&self) -> f64 {
        FULL_TURN / self.len as f64
    }

    /// Start and end angle of the arc for `index`
    pub fn arc_range(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.len {
            return None;
        }
        let arc = self.arc_degrees();
        Some((index as f64 * arc, (index + 1) as f64 * arc))
    }

    /// Angle at the middle of the arc for `index`
    pub fn arc_midpoint(&self, index: usize) -> Option<f64> {
        self.arc_range(index).map(|(start, end)| (start + end) / 2.0)
    }

    /// Entry selected by `angle`, clamped into range
    pub fn index_for_angle(&self, angle: f64) -> usize {
        if !self.is_interactive() {
            return 0;
        }
        // `as` saturates: negative and NaN become 0
        let index = (angle / self.arc_degrees()).floor() as usize;
        index.min(self.len - 1)
    }

    /// Track the pointer, returning the change if the selection moved
    pub fn on_pointer_move(&mut self, pointer: Point, center: Point) -> Option<SelectionChange> {
        if !self.is_interactive() {
            trace!("DialSelector::on_pointer_move: single entry, ignored");
            return None;
        }
        let angle = pointer_angle(pointer, center);
        let index = self.index_for_angle(angle);
        trace!(angle, index, "DialSelector::on_pointer_move: computed");
        self.select(index)
    }

    /// Pointer left the dial, return to the most recent entry
    pub fn on_pointer_leave(&mut self) -> Option<SelectionChange> {
        debug!(active = self.active, "DialSelector::on_pointer_leave: called");
        self.select(self.len - 1)
    }

    fn select(&mut self, index: usize) -> Option<SelectionChange> {
        if index == self.active {
            return None;
        }
        let change = SelectionChange {
            previous: self.active,
            current: index,
        };
        self.active = index;
        debug!(?change, "DialSelector::select: selection changed");
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CENTER: Point = Point { x: 10.0, y: 10.0 };

    #[test]
    fn test_pointer_angle_cardinal_directions() {
        assert_eq!(pointer_angle(Point::new(10.0, 0.0), CENTER), 0.0);
        assert_eq!(pointer_angle(Point::new(20.0, 10.0), CENTER), 90.0);
        assert_eq!(pointer_angle(Point::new(10.0, 20.0), CENTER), 180.0);
        assert_eq!(pointer_angle(Point::new(0.0, 10.0), CENTER), 270.0);
    }

    #[test]
    fn test_empty_dial() {
        assert!(DialSelector::new(0).is_none());
    }

    #[test]
    fn test_initial_state_is_last_entry() {
        let dial = DialSelector::new(4).unwrap();
        assert_eq!(dial.active_index(), 3);
        assert_eq!(dial.progress_fraction(), 0.75);
        assert_eq!(dial.len(), 4);
    }

    #[test]
    fn test_quadrants_select_entries() {
        let mut dial = DialSelector::new(4).unwrap();
        // up-right
        assert_eq!(
            dial.on_pointer_move(Point::new(15.0, 2.0), CENTER),
            Some(SelectionChange { previous: 3, current: 0 })
        );
        // down-right
        dial.on_pointer_move(Point::new(15.0, 18.0), CENTER);
        assert_eq!(dial.active_index(), 1);
        // down-left
        dial.on_pointer_move(Point::new(5.0, 18.0), CENTER);
        assert_eq!(dial.active_index(), 2);
        assert_eq!(dial.progress_fraction(), 0.5);
    }

    #[test]
    fn test_no_event_when_index_unchanged() {
        let mut dial = DialSelector::new(3).unwrap();
        assert!(dial.on_pointer_move(Point::new(11.0, 0.0), CENTER).is_some());
        assert_eq!(dial.on_pointer_move(Point::new(12.0, 1.0), CENTER), None);
        assert_eq!(dial.active_index(), 0);
    }

    #[test]
    fn test_leave_resets_to_last_entry() {
        let mut dial = DialSelector::new(3).unwrap();
        dial.on_pointer_move(Point::new(11.0, 0.0), CENTER);
        assert_eq!(
            dial.on_pointer_leave(),
            Some(SelectionChange { previous: 0, current: 2 })
        );
        assert_eq!(dial.active_index(), 2);
        assert_eq!(dial.on_pointer_leave(), None);
    }

    #[test]
    fn test_single_entry_is_not_interactive() {
        let mut dial = DialSelector::new(1).unwrap();
        assert!(!dial.is_interactive());
        for (x, y) in [(0.0, 0.0), (20.0, 10.0), (10.0, 20.0), (-5.0, 3.0)] {
            assert_eq!(dial.on_pointer_move(Point::new(x, y), CENTER), None);
            assert_eq!(dial.active_index(), 0);
        }
        assert_eq!(dial.on_pointer_leave(), None);
        assert_eq!(dial.progress_fraction(), 0.0);
    }

    #[test]
    fn test_index_for_angle_clamps() {
        let dial = DialSelector::new(3).unwrap();
        assert_eq!(dial.index_for_angle(-10.0), 0);
        assert_eq!(dial.index_for_angle(360.0), 2);
        assert_eq!(dial.index_for_angle(f64::NAN), 0);
        assert_eq!(dial.index_for_angle(119.999), 0);
        assert_eq!(dial.index_for_angle(120.0), 1);
    }

    #[test]
    fn test_arc_ranges() {
        let dial = DialSelector::new(3).unwrap();
        assert_eq!(dial.arc_range(0), Some((0.0, 120.0)));
        assert_eq!(dial.arc_range(2), Some((240.0, 360.0)));
        assert_eq!(dial.arc_range(3), None);
        assert_eq!(dial.arc_midpoint(1), Some(180.0));
    }

    proptest! {
        #[test]
        fn prop_every_angle_maps_to_one_containing_arc(len in 2usize..32, angle in 0.0f64..360.0) {
            let dial = DialSelector::new(len).unwrap();
            let index = dial.index_for_angle(angle);
            prop_assert!(index < len);
            let containing: Vec<usize> = (0..len)
                .filter(|&i| {
                    let (start, end) = dial.arc_range(i).unwrap();
                    angle >= start && angle < end
                })
                .collect();
            prop_assert!(containing.len() <= 1);
            if let Some(&i) = containing.first() {
                prop_assert_eq!(i, index);
            }
        }

        #[test]
        fn prop_arcs_partition_circle(len in 2usize..64) {
            let dial = DialSelector::new(len).unwrap();
            let total: f64 = (0..len)
                .map(|i| {
                    let (start, end) = dial.arc_range(i).unwrap();
                    end - start
                })
                .sum();
            prop_assert!((total - 360.0).abs() < 1e-9);
            for i in 1..len {
                prop_assert_eq!(dial.arc_range(i - 1).unwrap().1, dial.arc_range(i).unwrap().0);
            }
        }

        #[test]
        fn prop_arc_midpoint_selects_its_entry(len in 2usize..32, radius in 1.0f64..500.0, pick in 0usize..32) {
            let index = pick % len;
            let mut dial = DialSelector::new(len).unwrap();
            let angle = dial.arc_midpoint(index).unwrap();
            dial.on_pointer_move(point_at_angle(CENTER, radius, angle), CENTER);
            prop_assert_eq!(dial.active_index(), index);
            prop_assert!(dial.progress_fraction() < 1.0);
        }

        #[test]
        fn prop_leave_always_returns_to_last(len in 1usize..16, x in -100.0f64..100.0, y in -100.0f64..100.0) {
            let mut dial = DialSelector::new(len).unwrap();
            dial.on_pointer_move(Point::new(x, y), CENTER);
            dial.on_pointer_leave();
            prop_assert_eq!(dial.active_index(), len - 1);
        }
    }
}
