// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary traits for the collaborators the coordinator drives.
//!
//! Decoding, frame output and metadata extraction all happen outside this
//! crate. The coordinator only sees them through these traits:
//!
//! - [`MediaEngine`]: one playback instance, created per open by an [`EngineFactory`].
//! - [`MetadataProbe`]: synchronous metadata lookup done once per source.
//!
//! Asynchronous results of an engine (prepared, size changed, completion,
//! errors, buffering, info) are delivered back to the coordinator as
//! [`MediaEvent`] values by whatever runtime owns the engine.

use core::fmt;
use core::time::Duration;

use crate::error::{EngineError, MetadataProbeError};

/// Reference to a piece of media, typically a URI or a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaSource(String);

impl MediaSource {
    /// Creates a source reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaSource {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for MediaSource {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

/// A single media playback instance.
///
/// The coordinator owns at most one engine at a time and tears it down with
/// [`MediaEngine::reset`] + [`MediaEngine::release`] (or [`MediaEngine::stop`]
/// + [`MediaEngine::release`]) before creating a fresh one. Queries are only
/// made once the engine has reported [`MediaEvent::Prepared`].
pub trait MediaEngine {
    /// Handle to the render surface frames are written to.
    type Surface;

    /// Starts preparing `source` for output on `surface`.
    ///
    /// Returns as soon as preparation has been scheduled; completion is
    /// signalled with [`MediaEvent::Prepared`] or [`MediaEvent::Error`].
    fn open(&mut self, source: &MediaSource, surface: &Self::Surface) -> Result<(), EngineError>;

    /// Starts or resumes playback.
    fn start(&mut self) -> Result<(), EngineError>;

    /// Pauses playback.
    fn pause(&mut self) -> Result<(), EngineError>;

    /// Seeks to `position` from the start of the media.
    fn seek_to(&mut self, position: Duration) -> Result<(), EngineError>;

    /// Stops playback.
    fn stop(&mut self);

    /// Returns the engine to its unconfigured state.
    fn reset(&mut self);

    /// Frees every resource held by the engine. Safe to call more than once.
    fn release(&mut self);

    /// Returns `true` while frames are being output.
    fn is_playing(&self) -> bool;

    /// Total length of the media, if known.
    fn duration(&self) -> Option<Duration>;

    /// Current playback position.
    fn current_position(&self) -> Duration;

    /// Enables or disables looping at the end of the media.
    fn set_looping(&mut self, looping: bool);

    /// Buffered share of the media in percent, for engines that can report it
    /// synchronously.
    ///
    /// Engines that only report progress through [`MediaEvent::BufferingUpdate`]
    /// keep the default.
    fn buffer_percentage(&self) -> Option<u8> {
        None
    }
}

/// Creates a fresh [`MediaEngine`] for every open.
pub trait EngineFactory {
    /// The engine type produced.
    type Engine: MediaEngine;

    /// Creates an unconfigured engine.
    fn create(&mut self) -> Self::Engine;
}

impl<F, E> EngineFactory for F
where
    F: FnMut() -> E,
    E: MediaEngine,
{
    type Engine = E;

    fn create(&mut self) -> E {
        self()
    }
}

/// Asynchronous notifications from the current engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    /// The source is ready to play. A zero size means the engine does not
    /// know the video size yet.
    Prepared {
        /// Native width in pixels, or `0`.
        width: u32,
        /// Native height in pixels, or `0`.
        height: u32,
    },
    /// The native video size was reported or changed.
    VideoSizeChanged {
        /// Native width in pixels.
        width: u32,
        /// Native height in pixels.
        height: u32,
    },
    /// Playback reached the end of a non-looping source.
    Completed,
    /// Playback failed.
    Error {
        /// Error category.
        what: i32,
        /// Implementation-specific detail code.
        extra: i32,
    },
    /// Informational event, forwarded to subscribers untouched.
    Info {
        /// Info category.
        what: i32,
        /// Implementation-specific detail code.
        extra: i32,
    },
    /// Buffering progress in percent.
    BufferingUpdate {
        /// Buffered share of the media, `0..=100`.
        percent: u8,
    },
}

/// Metadata read from a source before the engine opens it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaMetadata {
    /// Native width in pixels, `0` if unknown.
    pub width: u32,
    /// Native height in pixels, `0` if unknown.
    pub height: u32,
    /// Raw rotation tag in degrees, e.g. `"90"`.
    pub rotation: Option<String>,
}

/// Reads [`MediaMetadata`] for a source.
pub trait MetadataProbe {
    /// Probes `source`.
    fn probe(&mut self, source: &MediaSource) -> Result<MediaMetadata, MetadataProbeError>;
}

impl<F> MetadataProbe for F
where
    F: FnMut(&MediaSource) -> Result<MediaMetadata, MetadataProbeError>,
{
    fn probe(&mut self, source: &MediaSource) -> Result<MediaMetadata, MetadataProbeError> {
        self(source)
    }
}

/// Probe for hosts without metadata support; every source is unknown.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMetadata;

impl MetadataProbe for NoMetadata {
    fn probe(&mut self, source: &MediaSource) -> Result<MediaMetadata, MetadataProbeError> {
        Err(MetadataProbeError::Unavailable(format!(
            "no metadata probe configured for {source}"
        )))
    }
}
