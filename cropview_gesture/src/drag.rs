// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: movement deltas and accumulated travel.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`] at the press position.
//! 2) On each move, call [`DragState::update`] to get the delta since the last position.
//! 3) Read [`DragState::travel`] for the Manhattan length of the path so far.
//! 4) Call [`DragState::end`] to reset; it returns the final travel.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use cropview_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! let delta = drag.update(Point::new(15.0, 17.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, -3.0));
//!
//! // Going back to the start does not cancel out the travel.
//! drag.update(Point::new(10.0, 20.0));
//! assert_eq!(drag.travel(), 16.0);
//! assert_eq!(drag.end(), Some(16.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks a single pointer drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    last_pos: Option<Point>,
    travel: f64,
}

impl DragState {
    /// Start tracking a new drag from the given position.
    ///
    /// Any drag in progress is discarded.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
        self.travel = 0.0;
    }

    /// Update with a new position, returning the delta since the last one.
    ///
    /// Returns `None` if no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last_pos = self.last_pos?;
        self.last_pos = Some(pos);
        let delta = pos - last_pos;
        self.travel += delta.x.abs() + delta.y.abs();
        Some(delta)
    }

    /// Manhattan length of every delta reported since [`DragState::start`].
    pub fn travel(&self) -> f64 {
        self.travel
    }

    /// End the drag and reset state, returning the final travel if a drag was active.
    pub fn end(&mut self) -> Option<f64> {
        let travel = self.last_pos.map(|_| self.travel);
        *self = Self::default();
        travel
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }
}
