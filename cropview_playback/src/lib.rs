// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropview Playback: the playback half of a cropping video view.
//!
//! [`PlaybackCoordinator`] ties together three independently owned things:
//!
//! - a [`MediaEngine`], created fresh for every open by an [`EngineFactory`],
//! - a render surface handle, which comes and goes with the host's window,
//! - the [`CropTransform`](cropview_geometry::CropTransform) that fills the
//!   viewport with the media.
//!
//! The coordinator keeps a *current* and a *target* [`PlaybackState`]. Callers
//! may ask for playback or seek before anything is ready; those requests are
//! remembered and replayed once the engine reports it is prepared. Outcomes are
//! published as [`Notification`] values to subscribers.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use cropview_playback::{
//!     CropViewConfig, EngineError, MediaEngine, MediaEvent, MediaSource, NoMetadata,
//!     PlaybackCoordinator, PlaybackState,
//! };
//!
//! #[derive(Default)]
//! struct Silent {
//!     playing: bool,
//! }
//!
//! impl MediaEngine for Silent {
//!     type Surface = ();
//!     fn open(&mut self, _: &MediaSource, _: &()) -> Result<(), EngineError> { Ok(()) }
//!     fn start(&mut self) -> Result<(), EngineError> { self.playing = true; Ok(()) }
//!     fn pause(&mut self) -> Result<(), EngineError> { self.playing = false; Ok(()) }
//!     fn seek_to(&mut self, _: Duration) -> Result<(), EngineError> { Ok(()) }
//!     fn stop(&mut self) { self.playing = false; }
//!     fn reset(&mut self) {}
//!     fn release(&mut self) {}
//!     fn is_playing(&self) -> bool { self.playing }
//!     fn duration(&self) -> Option<Duration> { None }
//!     fn current_position(&self) -> Duration { Duration::ZERO }
//!     fn set_looping(&mut self, _: bool) {}
//! }
//!
//! let mut view = PlaybackCoordinator::new(CropViewConfig::default(), Silent::default, NoMetadata);
//!
//! // Asking early only records the intent.
//! view.start();
//! assert_eq!(view.state(), PlaybackState::Idle);
//! assert_eq!(view.target_state(), PlaybackState::Playing);
//!
//! view.set_source("file:///clip.mp4");
//! view.on_surface_available(());
//! assert_eq!(view.state(), PlaybackState::Preparing);
//!
//! view.on_media_event(MediaEvent::Prepared { width: 1280, height: 720 });
//! assert_eq!(view.state(), PlaybackState::Playing);
//! ```
//!
//! ## Logging
//!
//! State transitions and engine failures are logged through the [`log`]
//! facade; install any logger in the host to see them.

mod config;
mod coordinator;
pub mod engine;
mod error;
mod notify;
mod state;

pub use config::CropViewConfig;
pub use coordinator::{PlaybackCoordinator, SurfaceOf};
pub use engine::{
    EngineFactory, MediaEngine, MediaEvent, MediaMetadata, MediaSource, MetadataProbe, NoMetadata,
};
pub use error::{EngineError, MetadataProbeError, PlaybackError};
pub use notify::{Notification, PanPosition, SubscriptionId};
pub use state::PlaybackState;
