// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Error returned when an aspect ratio component is not a positive, finite number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidAspectRatio {
    /// The rejected width units.
    pub width: f64,
    /// The rejected height units.
    pub height: f64,
}

impl fmt::Display for InvalidAspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aspect ratio {}:{} must have positive, finite components",
            self.width, self.height
        )
    }
}

impl core::error::Error for InvalidAspectRatio {}

/// Target aspect ratio of the viewport, in width units to height units.
///
/// Both components are always positive and finite. The default is `3:4`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(f64, f64)", into = "(f64, f64)"))]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            width: 3.0,
            height: 4.0,
        }
    }
}

impl AspectRatio {
    /// Creates an aspect ratio of `width:height`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAspectRatio`] if either component is zero, negative,
    /// NaN, or infinite.
    pub fn new(width: f64, height: f64) -> Result<Self, InvalidAspectRatio> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(InvalidAspectRatio { width, height })
        }
    }

    /// Reduces native media dimensions to their lowest terms.
    ///
    /// Returns `None` when either dimension is zero (media size not yet known).
    ///
    /// ```
    /// use cropview_geometry::AspectRatio;
    ///
    /// let ratio = AspectRatio::from_media(1920, 1080).unwrap();
    /// assert_eq!((ratio.width(), ratio.height()), (16.0, 9.0));
    /// assert!(AspectRatio::from_media(0, 1080).is_none());
    /// ```
    #[must_use]
    pub fn from_media(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let divisor = gcd(width, height);
        Some(Self {
            width: f64::from(width / divisor),
            height: f64::from(height / divisor),
        })
    }

    /// Width units of the ratio.
    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    /// Height units of the ratio.
    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }

    /// Measures the largest viewport with this ratio that fits in `available`.
    ///
    /// Each candidate dimension is derived from the other one and truncated to
    /// whole pixels. Whichever dimension overflows is shrunk; if neither does,
    /// `available` is returned unchanged.
    ///
    /// ```
    /// use kurbo::Size;
    /// use cropview_geometry::AspectRatio;
    ///
    /// let ratio = AspectRatio::new(9.0, 16.0).unwrap();
    /// assert_eq!(ratio.measure(Size::new(1080.0, 2400.0)), Size::new(1080.0, 1920.0));
    /// assert_eq!(ratio.measure(Size::new(1440.0, 1920.0)), Size::new(1080.0, 1920.0));
    /// ```
    #[must_use]
    pub fn measure(self, available: Size) -> Size {
        let resized = Size::new(
            available.height / self.height * self.width,
            available.width / self.width * self.height,
        )
        .trunc();

        if resized.width > available.width {
            Size::new(available.width, resized.height)
        } else if resized.height > available.height {
            Size::new(resized.width, available.height)
        } else {
            available
        }
    }
}

impl TryFrom<(f64, f64)> for AspectRatio {
    type Error = InvalidAspectRatio;

    fn try_from((width, height): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

impl From<AspectRatio> for (f64, f64) {
    fn from(ratio: AspectRatio) -> Self {
        (ratio.width, ratio.height)
    }
}

/// Greatest common divisor of `a` and `b` (Euclid).
///
/// `gcd(n, 0)` is `n`, and `gcd(0, 0)` is `0`.
#[must_use]
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut n, mut m) = (a, b);
    while m != 0 {
        let t = n % m;
        n = m;
        m = t;
    }
    n
}
