// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press/move/release recognizer that tells pans apart from taps.
//!
//! Every move while pressed produces a pan delta. On release, the gesture is
//! classified as a [`Release::Tap`] when the pointer travelled less than the
//! slop distance in total, and as a [`Release::Pan`] otherwise. Travel is the
//! Manhattan length of the path, so jitter back and forth still counts.
//!
//! ```
//! use kurbo::Point;
//! use cropview_gesture::tap::{Release, TapRecognizer};
//!
//! let mut gesture = TapRecognizer::default();
//!
//! gesture.press(Point::new(100.0, 100.0));
//! gesture.motion(Point::new(104.0, 103.0));
//! assert_eq!(gesture.release(), Release::Tap);
//!
//! gesture.press(Point::new(100.0, 100.0));
//! let delta = gesture.motion(Point::new(160.0, 100.0)).unwrap();
//! assert_eq!(delta.x, 60.0);
//! assert_eq!(gesture.release(), Release::Pan);
//! ```

use kurbo::{Point, Vec2};

use crate::drag::DragState;

/// How a press ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// The pointer barely moved.
    Tap,
    /// The pointer moved at least the slop distance.
    Pan,
    /// There was no press to release.
    Unpressed,
}

/// Classifies a press/release pair as a tap or a pan.
#[derive(Clone, Copy, Debug)]
pub struct TapRecognizer {
    drag: DragState,
    slop: f64,
}

impl Default for TapRecognizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SLOP)
    }
}

impl TapRecognizer {
    /// Default slop in pixels.
    pub const DEFAULT_SLOP: f64 = 25.0;

    /// Creates a recognizer that reports a tap below `slop` pixels of travel.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            drag: DragState::default(),
            slop,
        }
    }

    /// Travel distance below which a release is a tap.
    #[must_use]
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Begins a press at `pos`, discarding any press in progress.
    pub fn press(&mut self, pos: Point) {
        self.drag.start(pos);
    }

    /// Pointer moved to `pos`; returns the pan delta while pressed.
    pub fn motion(&mut self, pos: Point) -> Option<Vec2> {
        self.drag.update(pos)
    }

    /// Ends the press and classifies it.
    pub fn release(&mut self) -> Release {
        match self.drag.end() {
            Some(travel) if travel < self.slop => Release::Tap,
            Some(_) => Release::Pan,
            None => Release::Unpressed,
        }
    }

    /// Abandons the press without classifying it.
    pub fn cancel(&mut self) {
        self.drag.end();
    }

    /// Returns `true` between [`TapRecognizer::press`] and release/cancel.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Travel accumulated by the current press.
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.drag.travel()
    }
}
