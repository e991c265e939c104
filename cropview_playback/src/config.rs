// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cropview_geometry::AspectRatio;
use cropview_gesture::tap::TapRecognizer;

/// Host-facing configuration of a [`PlaybackCoordinator`](crate::PlaybackCoordinator).
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CropViewConfig {
    /// Ratio the viewport is measured to. Defaults to `3:4`.
    pub aspect_ratio: AspectRatio,
    /// Whether engines loop the media. Defaults to `true`, so
    /// [`PlaybackState::Completed`](crate::PlaybackState::Completed) is only
    /// reached once this is turned off.
    pub looping: bool,
    /// Pointer travel in pixels below which a press/release toggles playback.
    pub tap_slop: f64,
}

impl Default for CropViewConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::default(),
            looping: true,
            tap_slop: TapRecognizer::DEFAULT_SLOP,
        }
    }
}
