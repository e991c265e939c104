// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

use crate::media::MediaDimensions;

/// One of the two viewport axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    Horizontal,
    /// The Y axis.
    Vertical,
}

/// Result of clamping a pan delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanStep {
    /// New absolute pan offset.
    pub offset: Vec2,
    /// Delta that was actually applied to reach `offset`.
    pub applied: Vec2,
}

/// Crop-to-fill transform from a viewport-stretched surface to the viewport.
///
/// The transform is `translate(offset) * scale(scale_x, scale_y)`. One axis is
/// pinned at a scale of exactly `1.0`; the other is inflated so the media keeps
/// its native aspect ratio, and may be panned within `[bound, 0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropTransform {
    scale_x: f64,
    scale_y: f64,
    scale: f64,
    offset: Vec2,
    bound: Vec2,
}

impl Default for CropTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CropTransform {
    /// The no-op transform used while either size is unknown.
    ///
    /// Both axes are pinned, so every pan is clamped to zero.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        scale: 1.0,
        offset: Vec2::ZERO,
        bound: Vec2::ZERO,
    };

    /// Computes the crop transform for `media` shown in `viewport`.
    ///
    /// Returns [`CropTransform::IDENTITY`] if the media size is unknown or the
    /// viewport is empty; callers retry once both are known. The pan offset of
    /// the result is always zero.
    ///
    /// ```
    /// use kurbo::Size;
    /// use cropview_geometry::{Axis, CropTransform, MediaDimensions};
    ///
    /// let t = CropTransform::compute(Size::new(1080.0, 1920.0), MediaDimensions::new(1280, 720));
    /// assert!(t.is_pinned(Axis::Vertical));
    /// assert_eq!(t.scale(), 0.375);
    /// assert!((t.bound().x - (1080.0 - 1280.0 / 0.375)).abs() < 1e-9);
    ///
    /// let unknown = CropTransform::compute(Size::new(1080.0, 1920.0), MediaDimensions::UNKNOWN);
    /// assert_eq!(unknown, CropTransform::IDENTITY);
    /// ```
    #[must_use]
    pub fn compute(viewport: Size, media: MediaDimensions) -> Self {
        if !media.is_known() || !(viewport.width > 0.0 && viewport.height > 0.0) {
            return Self::IDENTITY;
        }
        let media = media.size();

        let scale_x = media.width / viewport.width;
        let scale_y = media.height / viewport.height;

        // Each bound uses the other axis's scale: it is how far the larger
        // axis overflows once the smaller axis has been normalized.
        let bound_x = viewport.width - media.width / scale_y;
        let bound_y = viewport.height - media.height / scale_x;

        if scale_x < scale_y {
            Self {
                scale_x: 1.0,
                scale_y: scale_y / scale_x,
                scale: scale_x,
                offset: Vec2::ZERO,
                bound: Vec2::new(0.0, bound_y),
            }
        } else {
            Self {
                scale_x: scale_x / scale_y,
                scale_y: 1.0,
                scale: scale_y,
                offset: Vec2::ZERO,
                bound: Vec2::new(bound_x, 0.0),
            }
        }
    }

    /// Horizontal scale factor.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Vertical scale factor.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Dominant scale: the media-to-viewport ratio of the pinned axis.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset in viewport pixels, within `[bound, 0]` per axis.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Pan bounds per axis; `0` on the pinned axis and `<= 0` on the other.
    #[must_use]
    pub fn bound(&self) -> Vec2 {
        self.bound
    }

    /// Returns `true` if panning along `axis` is disallowed.
    #[must_use]
    pub fn is_pinned(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.scale_x == 1.0,
            Axis::Vertical => self.scale_y == 1.0,
        }
    }

    /// Pan offset converted to media pixels, as a positive distance from the
    /// media's top-left corner.
    #[must_use]
    pub fn real_offset(&self) -> Vec2 {
        self.offset * -self.scale
    }

    /// Pans by `delta`, clamping it to the bounds, and returns the delta that
    /// was actually applied.
    ///
    /// The applied delta is what a renderer holding a previously built matrix
    /// would post-translate by.
    pub fn pan_by(&mut self, delta: Vec2) -> Vec2 {
        let step = clamp_pan(self.offset, delta, self.bound, self.scale_x, self.scale_y);
        self.offset = step.offset;
        step.applied
    }

    /// Returns the matrix to apply to the viewport-stretched surface.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }
}

/// Clamps a pan `delta` so that `current + delta` stays within `[bound, 0]`.
///
/// Each axis is handled independently. An axis whose scale is exactly `1.0`
/// is pinned and never moves. Otherwise the move is snapped to `0` if it would
/// go positive, snapped to `bound` if it would go past it, and accepted as-is
/// in between.
///
/// ```
/// use kurbo::Vec2;
/// use cropview_geometry::clamp_pan;
///
/// let bound = Vec2::new(-200.0, 0.0);
/// let step = clamp_pan(Vec2::new(-150.0, 0.0), Vec2::new(-100.0, 40.0), bound, 2.0, 1.0);
/// assert_eq!(step.offset, Vec2::new(-200.0, 0.0));
/// assert_eq!(step.applied, Vec2::new(-50.0, 0.0));
/// ```
#[must_use]
pub fn clamp_pan(current: Vec2, delta: Vec2, bound: Vec2, scale_x: f64, scale_y: f64) -> PanStep {
    let (x, dx) = clamp_axis(current.x, delta.x, bound.x, scale_x);
    let (y, dy) = clamp_axis(current.y, delta.y, bound.y, scale_y);
    PanStep {
        offset: Vec2::new(x, y),
        applied: Vec2::new(dx, dy),
    }
}

/// Returns the new offset and the applied delta for one axis.
///
/// Snapped offsets are assigned directly rather than accumulated, so they land
/// exactly on `0` or `bound`. A move that is not finite is dropped.
fn clamp_axis(current: f64, delta: f64, bound: f64, scale: f64) -> (f64, f64) {
    if scale == 1.0 {
        return (current, 0.0);
    }
    let next = current + delta;
    if !next.is_finite() {
        return (current, 0.0);
    }
    if next > 0.0 {
        (0.0, -current)
    } else if next < bound {
        (bound, bound - current)
    } else {
        (next, delta)
    }
}
