// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Playback state of a coordinator.
///
/// The coordinator keeps two of these: the *current* state, which is what
/// is true right now, and the *target* state, which is what the caller last
/// asked for. Requests that arrive before the engine is ready only move the
/// target; the coordinator reconciles the two after every readiness change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    /// No engine, or an engine that has not been asked to open anything.
    #[default]
    Idle,
    /// The engine is preparing the source.
    Preparing,
    /// The source is ready; playback has not started.
    Prepared,
    /// Frames are being output.
    Playing,
    /// Playback is paused.
    Paused,
    /// Playback reached the end of the media.
    Completed,
    /// The engine failed; a new source is required.
    Error,
}

impl PlaybackState {
    /// Returns `true` for states in which the engine accepts start, pause,
    /// seek and position queries.
    #[must_use]
    pub fn is_ready(self) -> bool {
        !matches!(self, Self::Idle | Self::Preparing | Self::Error)
    }
}
