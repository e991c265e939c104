// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;

use cropview_geometry::InvalidRotation;
use thiserror::Error;

use crate::engine::MediaSource;

/// Failure returned by a [`MediaEngine`](crate::MediaEngine) call.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The call is not valid in the engine's current state.
    #[error("engine is in the wrong state for this call: {0}")]
    IllegalState(String),

    /// The source could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Engine-specific error codes.
    #[error("engine reported error (what={what}, extra={extra})")]
    Reported {
        /// Error category.
        what: i32,
        /// Implementation-specific detail code.
        extra: i32,
    },
}

/// Error reported by the coordinator through
/// [`Notification::Error`](crate::Notification::Error).
///
/// Every variant moves the coordinator into
/// [`PlaybackState::Error`](crate::PlaybackState::Error). Only setting a new
/// source recovers from it.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Opening the source failed synchronously.
    #[error("failed to open media source `{source_ref}`")]
    SourceOpen {
        /// The source that was being opened.
        source_ref: MediaSource,
        /// What the engine returned.
        #[source]
        cause: EngineError,
    },

    /// A start, pause or seek call failed.
    #[error("media engine failed during `{operation}`")]
    Control {
        /// Name of the failed engine call.
        operation: &'static str,
        /// What the engine returned.
        #[source]
        cause: EngineError,
    },

    /// The engine's error callback fired.
    #[error("media engine reported an asynchronous error (what={what}, extra={extra})")]
    Engine {
        /// Error category.
        what: i32,
        /// Implementation-specific detail code.
        extra: i32,
    },
}

/// Failure to read metadata for a source.
///
/// Never reported to the caller: rotation falls back to zero and the media
/// size stays unknown until the engine reports it.
#[derive(Debug, Error)]
pub enum MetadataProbeError {
    /// The probe could not extract anything for this source.
    #[error("metadata unavailable: {0}")]
    Unavailable(String),

    /// Reading the source failed.
    #[error("i/o error while probing metadata: {0}")]
    Io(#[from] io::Error),

    /// The rotation tag was not a quarter turn.
    #[error("invalid rotation metadata: {0}")]
    InvalidRotation(#[from] InvalidRotation),
}
