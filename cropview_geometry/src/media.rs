// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::Size;

/// Error returned when a rotation hint is not one of 0, 90, 180 or 270 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidRotation {
    /// The rejected value, or `None` if it was not an integer at all.
    pub degrees: Option<i32>,
}

impl fmt::Display for InvalidRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.degrees {
            Some(degrees) => write!(f, "unsupported rotation of {degrees} degrees"),
            None => f.write_str("rotation is not an integer number of degrees"),
        }
    }
}

impl core::error::Error for InvalidRotation {}

/// Clockwise rotation hint stored in media metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// No rotation.
    #[default]
    Deg0,
    /// A quarter turn.
    Deg90,
    /// A half turn.
    Deg180,
    /// Three quarter turns.
    Deg270,
}

impl Rotation {
    /// Converts a degree count into a rotation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRotation`] for anything other than 0, 90, 180 or 270.
    pub fn from_degrees(degrees: i32) -> Result<Self, InvalidRotation> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(InvalidRotation {
                degrees: Some(degrees),
            }),
        }
    }

    /// Returns the rotation in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

impl FromStr for Rotation {
    type Err = InvalidRotation;

    /// Parses a metadata rotation string such as `"90"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = s
            .trim()
            .parse::<i32>()
            .map_err(|_| InvalidRotation { degrees: None })?;
        Self::from_degrees(degrees)
    }
}

/// Native pixel size of the loaded media plus its rotation hint.
///
/// A zero width or height means the size is not known yet; the media engine
/// usually reports it asynchronously after the source has been opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MediaDimensions {
    /// Native width in pixels, `0` while unknown.
    pub width: u32,
    /// Native height in pixels, `0` while unknown.
    pub height: u32,
    /// Rotation hint from metadata.
    pub rotation: Rotation,
}

impl MediaDimensions {
    /// Dimensions of media whose size has not been reported yet.
    pub const UNKNOWN: Self = Self {
        width: 0,
        height: 0,
        rotation: Rotation::Deg0,
    };

    /// Creates unrotated dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rotation: Rotation::Deg0,
        }
    }

    /// Returns a copy with the given rotation hint.
    #[must_use]
    pub const fn with_rotation(self, rotation: Rotation) -> Self {
        Self { rotation, ..self }
    }

    /// Returns `true` once both dimensions are non-zero.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.width != 0 && self.height != 0
    }

    /// Native size as floating point pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::{MediaDimensions, Rotation};

    #[test]
    fn rotation_accepts_only_quarter_turns() {
        assert_eq!(Rotation::from_degrees(0), Ok(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(270), Ok(Rotation::Deg270));
        assert!(Rotation::from_degrees(45).is_err());
        assert!(Rotation::from_degrees(-90).is_err());
        assert!(Rotation::from_degrees(360).is_err());
    }

    #[test]
    fn rotation_parses_metadata_strings() {
        assert_eq!("90".parse::<Rotation>(), Ok(Rotation::Deg90));
        assert_eq!(" 180 ".parse::<Rotation>(), Ok(Rotation::Deg180));
        let err = "sideways".parse::<Rotation>().unwrap_err();
        assert_eq!(err.degrees, None);
        let err = "45".parse::<Rotation>().unwrap_err();
        assert_eq!(err.degrees, Some(45));
    }

    #[test]
    fn unknown_until_both_dimensions_are_reported() {
        assert!(!MediaDimensions::UNKNOWN.is_known());
        assert!(!MediaDimensions::new(1280, 0).is_known());
        assert!(MediaDimensions::new(1280, 720).is_known());
        assert_eq!(MediaDimensions::default(), MediaDimensions::UNKNOWN);
    }

    #[test]
    fn with_rotation_keeps_size() {
        let dims = MediaDimensions::new(1920, 1080).with_rotation(Rotation::Deg90);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.rotation.degrees(), 90);
    }
}
