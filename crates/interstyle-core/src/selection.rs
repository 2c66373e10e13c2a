//! Rubber-band selection state
//!
//! Tracks whether rubber-band selection is enabled, whether a drag is in
//! progress, and the device-space corners of the current (or most recent)
//! rectangle.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

use crate::event::DevicePosition;

/// Rubber-band rectangle in device coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SelectionRect {
    /// Corner where the drag started
    pub start: DevicePosition,

    /// Corner following the pointer
    pub end: DevicePosition,
}

impl SelectionRect {
    /// Degenerate rectangle anchored at one point
    pub fn anchored(position: DevicePosition) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// `(start_x, start_y, end_x, end_y)`
    pub fn positions(&self) -> (i32, i32, i32, i32) {
        (self.start.x, self.start.y, self.end.x, self.end.y)
    }

    /// Minimum corner, whichever direction the drag went
    pub fn min(&self) -> DevicePosition {
        DevicePosition::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y))
    }

    /// Maximum corner
    pub fn max(&self) -> DevicePosition {
        DevicePosition::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y))
    }

    pub fn width(&self) -> u32 {
        self.start.x.abs_diff(self.end.x)
    }

    pub fn height(&self) -> u32 {
        self.start.y.abs_diff(self.end.y)
    }

    /// Check if a point lies inside the rectangle (edges included)
    pub fn contains(&self, point: DevicePosition) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// Selection mode, drag flag and rectangle of one style
#[derive(Debug, Default)]
pub struct SelectionTracker {
    selection_mode: Cell<bool>,
    moving: Cell<bool>,
    rect: Cell<SelectionRect>,
}

impl SelectionTracker {
    pub fn new(selection_mode: bool) -> Self {
        Self {
            selection_mode: Cell::new(selection_mode),
            ..Self::default()
        }
    }

    pub fn selection_mode(&self) -> bool {
        self.selection_mode.get()
    }

    /// Enable or disable rubber-band selection.
    ///
    /// Disabling cancels a drag in progress; enabling leaves the drag flag
    /// untouched.
    pub fn set_selection_mode(&self, enabled: bool) {
        self.selection_mode.set(enabled);
        if !enabled {
            self.moving.set(false);
        }
    }

    pub fn is_moving(&self) -> bool {
        self.moving.get()
    }

    pub fn rect(&self) -> SelectionRect {
        self.rect.get()
    }

    /// Anchor a new rectangle at `position` and start dragging
    pub fn start(&self, position: DevicePosition) {
        self.rect.set(SelectionRect::anchored(position));
        self.moving.set(true);
    }

    /// Move the end corner; ignored unless a drag is in progress
    pub fn update_end(&self, position: DevicePosition) {
        if self.moving.get() {
            let mut rect = self.rect.get();
            rect.end = position;
            self.rect.set(rect);
        }
    }

    /// Stop dragging; the last rectangle is kept
    pub fn end(&self) {
        self.moving.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> DevicePosition {
        DevicePosition::new(x, y)
    }

    #[test]
    fn test_drag_lifecycle() {
        let tracker = SelectionTracker::new(true);
        tracker.start(pos(10, 20));
        assert!(tracker.is_moving());
        assert_eq!(tracker.rect().positions(), (10, 20, 10, 20));

        tracker.update_end(pos(30, 40));
        assert_eq!(tracker.rect().positions(), (10, 20, 30, 40));

        tracker.end();
        assert!(!tracker.is_moving());
        assert_eq!(tracker.rect().positions(), (10, 20, 30, 40));
    }

    #[test]
    fn test_end_corner_frozen_when_not_moving() {
        let tracker = SelectionTracker::new(true);
        tracker.update_end(pos(5, 5));
        assert_eq!(tracker.rect(), SelectionRect::default());
    }

    #[test]
    fn test_disabling_cancels_drag() {
        let tracker = SelectionTracker::new(true);
        tracker.start(pos(1, 1));
        tracker.set_selection_mode(false);
        assert!(!tracker.is_moving());
        assert!(!tracker.selection_mode());
    }

    #[test]
    fn test_enabling_keeps_drag_flag() {
        let tracker = SelectionTracker::new(true);
        tracker.start(pos(1, 1));
        tracker.set_selection_mode(true);
        assert!(tracker.is_moving());
    }

    #[test]
    fn test_rect_normalization() {
        let rect = SelectionRect {
            start: pos(30, 40),
            end: pos(10, 20),
        };
        assert_eq!(rect.min(), pos(10, 20));
        assert_eq!(rect.max(), pos(30, 40));
        assert_eq!((rect.width(), rect.height()), (20, 20));
        assert!(rect.contains(pos(10, 40)));
        assert!(!rect.contains(pos(31, 25)));
    }
}
