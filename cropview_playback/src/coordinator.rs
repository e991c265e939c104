// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;
use std::fmt;
use std::sync::Arc;

use cropview_geometry::{AspectRatio, CropTransform, MediaDimensions, Rotation};
use cropview_gesture::tap::{Release, TapRecognizer};
use kurbo::{Point, Size, Vec2};
use log::{debug, info, warn};

use crate::config::CropViewConfig;
use crate::engine::{EngineFactory, MediaEngine, MediaEvent, MediaSource, MetadataProbe};
use crate::error::{EngineError, MetadataProbeError, PlaybackError};
use crate::notify::{Notification, Observers, PanPosition, SubscriptionId};
use crate::state::PlaybackState;

/// Surface handle type accepted by the engines a factory produces.
pub type SurfaceOf<F> = <<F as EngineFactory>::Engine as MediaEngine>::Surface;

/// Coordinates a media engine, a render surface, and the crop transform.
///
/// The coordinator owns the engine and the surface handle exclusively. A
/// source is opened whenever both a source and a surface are present; losing
/// the surface tears the engine down. Start, pause and seek requests made
/// before the engine is ready are remembered and replayed once it is.
///
/// All methods are expected to be called from one thread, in the order the
/// host receives the corresponding events.
pub struct PlaybackCoordinator<F: EngineFactory, P> {
    config: CropViewConfig,
    factory: F,
    probe: P,
    engine: Option<F::Engine>,
    surface: Option<SurfaceOf<F>>,
    source: Option<MediaSource>,
    current: PlaybackState,
    target: PlaybackState,
    pending_seek: Option<Duration>,
    buffer_percentage: u8,
    media: MediaDimensions,
    viewport: Size,
    transform: CropTransform,
    gesture: TapRecognizer,
    last_error: Option<Arc<PlaybackError>>,
    observers: Observers,
}

impl<F: EngineFactory, P: MetadataProbe> PlaybackCoordinator<F, P> {
    /// Creates an idle coordinator with no source, surface, or viewport.
    pub fn new(config: CropViewConfig, factory: F, probe: P) -> Self {
        Self {
            gesture: TapRecognizer::new(config.tap_slop),
            config,
            factory,
            probe,
            engine: None,
            surface: None,
            source: None,
            current: PlaybackState::Idle,
            target: PlaybackState::Idle,
            pending_seek: None,
            buffer_percentage: 0,
            media: MediaDimensions::UNKNOWN,
            viewport: Size::ZERO,
            transform: CropTransform::IDENTITY,
            last_error: None,
            observers: Observers::default(),
        }
    }

    /// Registers a callback for every [`Notification`].
    pub fn subscribe(&mut self, callback: impl FnMut(&Notification) + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(callback))
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // --- Caller requests ---------------------------------------------------

    /// Sets the media to play and opens it if a surface is available.
    ///
    /// Metadata is probed once to seed the media size and rotation. Any
    /// engine playing the previous source is released. A pending start is
    /// kept; a pending seek is kept only if there was no previous source.
    pub fn set_source(&mut self, source: impl Into<MediaSource>) {
        let source = source.into();
        info!("setting media source {source}");

        // A new source is the only way out of the error state.
        let recovering = self.target == PlaybackState::Error;
        self.release_engine(recovering);
        if self.source.is_some() {
            self.pending_seek = None;
        }
        self.last_error = None;
        self.media = self.probe_dimensions(&source);
        self.transform = CropTransform::IDENTITY;
        self.source = Some(source);

        self.open_media();
        self.emit(Notification::LayoutRequested);
    }

    /// Changes the viewport ratio and re-opens the media.
    ///
    /// If the engine was ready, playback resumes from the same position once
    /// the re-opened source is prepared.
    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.config.aspect_ratio = ratio;
        let resume_at = self.is_in_playback_state().then(|| self.current_position());

        self.emit(Notification::LayoutRequested);
        if self.current == PlaybackState::Error {
            return;
        }
        self.open_media();
        if let Some(position) = resume_at {
            self.seek_to(position);
        }
    }

    /// Sets the viewport ratio to the media's native ratio in lowest terms.
    ///
    /// Returns `false`, changing nothing, while the media size is unknown.
    pub fn set_aspect_ratio_from_media(&mut self) -> bool {
        match AspectRatio::from_media(self.media.width, self.media.height) {
            Some(ratio) => {
                self.set_aspect_ratio(ratio);
                true
            }
            None => {
                debug!("media size unknown, keeping aspect ratio");
                false
            }
        }
    }

    /// Requests playback.
    ///
    /// Starts immediately if the engine is ready; otherwise playback starts as
    /// soon as it becomes ready. Ignored in [`PlaybackState::Error`].
    pub fn start(&mut self) {
        if self.current == PlaybackState::Error {
            debug!("ignoring start in error state");
            return;
        }
        let mut current = self.current;
        if self.is_in_playback_state() {
            if let Err(cause) = self.engine_call(|engine| engine.start()) {
                self.fail(PlaybackError::Control {
                    operation: "start",
                    cause,
                });
                return;
            }
            current = PlaybackState::Playing;
        } else {
            debug!("deferring start while {:?}", self.current);
        }
        self.set_states(current, PlaybackState::Playing);
    }

    /// Requests a pause.
    pub fn pause(&mut self) {
        if self.current == PlaybackState::Error {
            debug!("ignoring pause in error state");
            return;
        }
        let mut current = self.current;
        if self.is_in_playback_state() && self.engine.as_ref().is_some_and(|e| e.is_playing()) {
            if let Err(cause) = self.engine_call(|engine| engine.pause()) {
                self.fail(PlaybackError::Control {
                    operation: "pause",
                    cause,
                });
                return;
            }
            current = PlaybackState::Paused;
        }
        self.set_states(current, PlaybackState::Paused);
    }

    /// Stops playback and releases the engine. Safe to call without one.
    pub fn stop(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            info!("stopping playback");
            engine.stop();
            engine.release();
        }
        self.set_states(PlaybackState::Idle, PlaybackState::Idle);
    }

    /// Seeks to `position`.
    ///
    /// Forwarded immediately when the engine is ready; otherwise stored and
    /// applied exactly once when the source is prepared. A later call
    /// replaces an earlier pending one.
    pub fn seek_to(&mut self, position: Duration) {
        if self.is_in_playback_state() {
            self.pending_seek = None;
            if let Err(cause) = self.engine_call(|engine| engine.seek_to(position)) {
                self.fail(PlaybackError::Control {
                    operation: "seek",
                    cause,
                });
            }
        } else {
            debug!("deferring seek to {position:?} while {:?}", self.current);
            self.pending_seek = Some(position);
        }
    }

    /// Toggles between playing and paused.
    pub fn on_tap_gesture(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Pans the media by `delta` viewport pixels and returns the delta
    /// actually applied after clamping.
    pub fn on_pan_gesture(&mut self, delta: Vec2) -> Vec2 {
        let applied = self.transform.pan_by(delta);
        self.emit(Notification::PanPositionChanged(self.pan_position()));
        applied
    }

    /// Pointer pressed at `pos`.
    ///
    /// Returns `false`, ignoring the event, until the engine is ready.
    pub fn on_pointer_down(&mut self, pos: Point) -> bool {
        if !self.current.is_ready() {
            return false;
        }
        self.gesture.press(pos);
        self.on_pan_gesture(Vec2::ZERO);
        true
    }

    /// Pointer moved to `pos`; pans while pressed.
    pub fn on_pointer_move(&mut self, pos: Point) -> bool {
        if !self.current.is_ready() {
            return false;
        }
        if let Some(delta) = self.gesture.motion(pos) {
            self.on_pan_gesture(delta);
        }
        true
    }

    /// Pointer released; toggles playback if the press was a tap.
    pub fn on_pointer_up(&mut self) -> bool {
        if !self.current.is_ready() {
            self.gesture.cancel();
            return false;
        }
        if self.gesture.release() == Release::Tap {
            self.on_tap_gesture();
        }
        true
    }

    // --- Host lifecycle ----------------------------------------------------

    /// The viewport was laid out at `size` pixels.
    pub fn on_viewport_resized(&mut self, size: Size) {
        if self.viewport == size {
            return;
        }
        self.viewport = size;
        if self.media.is_known() {
            self.recompute_transform();
        }
    }

    /// Measures the viewport for the configured ratio within `available`.
    #[must_use]
    pub fn measure(&self, available: Size) -> Size {
        self.config.aspect_ratio.measure(available)
    }

    /// The view was hidden; stops playback if it was playing.
    pub fn on_hidden(&mut self) {
        if self.is_playing() {
            self.stop();
        }
    }

    /// The view was shown again; re-opens the source if nothing is open.
    pub fn on_shown(&mut self) {
        if self.engine.is_none() && self.current == PlaybackState::Idle {
            self.open_media();
        }
    }

    // --- Collaborator events -----------------------------------------------

    /// A render surface became available.
    pub fn on_surface_available(&mut self, surface: SurfaceOf<F>) {
        debug!("render surface available");
        self.surface = Some(surface);
        self.open_media();
    }

    /// The render surface was resized.
    ///
    /// Engines may stop outputting frames while their surface is resized; if
    /// playback is wanted and the engine is ready but idle, it is restarted.
    pub fn on_surface_size_changed(&mut self, size: Size) {
        debug!("render surface resized to {}x{}", size.width, size.height);
        if self.engine.is_some() {
            self.reconcile();
        }
    }

    /// The render surface is gone. Tears down the engine, which cannot
    /// output frames without it.
    pub fn on_surface_destroyed(&mut self) {
        debug!("render surface destroyed");
        self.release_engine(false);
        self.surface = None;
    }

    /// Handles an asynchronous event from the current engine.
    ///
    /// Events arriving while no engine exists are stale and ignored.
    pub fn on_media_event(&mut self, event: MediaEvent) {
        if self.engine.is_none() {
            debug!("ignoring {event:?} without an engine");
            return;
        }
        match event {
            MediaEvent::Prepared { width, height } => self.on_prepared(width, height),
            MediaEvent::VideoSizeChanged { width, height } => {
                self.media.width = width;
                self.media.height = height;
                if self.media.is_known() {
                    self.emit(Notification::LayoutRequested);
                    self.recompute_transform();
                }
            }
            MediaEvent::Completed => {
                info!("playback completed");
                self.set_states(PlaybackState::Completed, PlaybackState::Completed);
                self.emit(Notification::Completed);
            }
            MediaEvent::Error { what, extra } => {
                self.fail(PlaybackError::Engine { what, extra });
            }
            MediaEvent::Info { what, extra } => {
                self.emit(Notification::Info { what, extra });
            }
            MediaEvent::BufferingUpdate { percent } => {
                self.buffer_percentage = percent.min(100);
            }
        }
    }

    // --- Queries -----------------------------------------------------------

    /// What is true now.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.current
    }

    /// What the caller last asked for.
    #[must_use]
    pub fn target_state(&self) -> PlaybackState {
        self.target
    }

    /// Returns `true` while the engine is outputting frames.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_in_playback_state() && self.engine.as_ref().is_some_and(|e| e.is_playing())
    }

    /// Playback position, or zero while the engine is not ready.
    #[must_use]
    pub fn current_position(&self) -> Duration {
        match &self.engine {
            Some(engine) if self.current.is_ready() => engine.current_position(),
            _ => Duration::ZERO,
        }
    }

    /// Media length, once the engine is ready and knows it.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match &self.engine {
            Some(engine) if self.current.is_ready() => engine.duration(),
            _ => None,
        }
    }

    /// Buffered share in percent; `0` without an engine.
    #[must_use]
    pub fn buffer_percentage(&self) -> u8 {
        match &self.engine {
            Some(engine) => engine.buffer_percentage().unwrap_or(self.buffer_percentage),
            None => 0,
        }
    }

    /// Seek waiting for the next prepare, if any.
    #[must_use]
    pub fn pending_seek(&self) -> Option<Duration> {
        self.pending_seek
    }

    /// Rotation hint of the current media.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.media.rotation
    }

    /// Native media size and rotation as currently known.
    #[must_use]
    pub fn media_dimensions(&self) -> MediaDimensions {
        self.media
    }

    /// Current crop transform.
    #[must_use]
    pub fn transform(&self) -> &CropTransform {
        &self.transform
    }

    /// Dominant scale of the crop transform.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    /// Pan offset in viewport pixels and in media pixels.
    #[must_use]
    pub fn pan_position(&self) -> PanPosition {
        PanPosition {
            offset: self.transform.offset(),
            real: self.transform.real_offset(),
        }
    }

    /// Pan offset in media pixels.
    #[must_use]
    pub fn real_pan_offset(&self) -> Vec2 {
        self.transform.real_offset()
    }

    /// Configured viewport ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.config.aspect_ratio
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &CropViewConfig {
        &self.config
    }

    /// Last laid out viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current source, if one was set.
    #[must_use]
    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    /// Whether a render surface is currently held.
    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// The error that moved the coordinator into [`PlaybackState::Error`].
    #[must_use]
    pub fn last_error(&self) -> Option<&PlaybackError> {
        self.last_error.as_deref()
    }

    // --- Internals ---------------------------------------------------------

    fn is_in_playback_state(&self) -> bool {
        self.engine.is_some() && self.current.is_ready()
    }

    fn probe_dimensions(&mut self, source: &MediaSource) -> MediaDimensions {
        let metadata = match self.probe.probe(source) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("metadata probe failed for {source}: {err}");
                return MediaDimensions::UNKNOWN;
            }
        };
        let rotation = match metadata.rotation.as_deref().map(str::parse::<Rotation>) {
            Some(Ok(rotation)) => rotation,
            Some(Err(err)) => {
                warn!("{}", MetadataProbeError::InvalidRotation(err));
                Rotation::Deg0
            }
            None => Rotation::Deg0,
        };
        MediaDimensions::new(metadata.width, metadata.height).with_rotation(rotation)
    }

    /// Opens the source once both it and the surface are available.
    fn open_media(&mut self) {
        if self.source.is_none() || self.surface.is_none() {
            debug!("not ready to open media yet");
            return;
        }
        // Keep the target: a start may have been requested before opening.
        self.release_engine(false);

        let (Some(source), Some(surface)) = (self.source.as_ref(), self.surface.as_ref()) else {
            return;
        };
        let mut engine = self.factory.create();
        engine.set_looping(self.config.looping);
        match engine.open(source, surface) {
            Ok(()) => {
                info!("preparing {source}");
                self.engine = Some(engine);
                self.buffer_percentage = 0;
                self.set_states(PlaybackState::Preparing, self.target);
            }
            Err(cause) => {
                let source_ref = source.clone();
                engine.release();
                self.fail(PlaybackError::SourceOpen { source_ref, cause });
            }
        }
    }

    fn release_engine(&mut self, clear_target: bool) {
        if let Some(mut engine) = self.engine.take() {
            engine.reset();
            engine.release();
        }
        let target = if clear_target {
            PlaybackState::Idle
        } else {
            self.target
        };
        self.set_states(PlaybackState::Idle, target);
    }

    fn on_prepared(&mut self, width: u32, height: u32) {
        self.set_states(PlaybackState::Prepared, self.target);
        self.emit(Notification::Prepared);

        if width != 0 && height != 0 {
            self.media.width = width;
            self.media.height = height;
        }

        if let Some(position) = self.pending_seek.take() {
            self.seek_to(position);
        }
        if self.media.is_known() {
            self.recompute_transform();
        }
        // An unknown size may still arrive through `VideoSizeChanged`; that
        // only re-lays out, so playback starts regardless.
        self.reconcile();
    }

    /// Starts the engine if playback is wanted, the engine is ready, and it
    /// is not outputting frames.
    fn reconcile(&mut self) {
        if self.target == PlaybackState::Playing
            && self.is_in_playback_state()
            && !self.engine.as_ref().is_some_and(|e| e.is_playing())
        {
            debug!("replaying start");
            self.start();
        }
    }

    fn recompute_transform(&mut self) {
        self.transform = CropTransform::compute(self.viewport, self.media);
        self.emit(Notification::TransformChanged(self.transform));
    }

    fn engine_call(
        &mut self,
        call: impl FnOnce(&mut F::Engine) -> Result<(), EngineError>,
    ) -> Result<(), EngineError> {
        match self.engine.as_mut() {
            Some(engine) => call(engine),
            None => Ok(()),
        }
    }

    fn fail(&mut self, err: PlaybackError) {
        warn!("playback error: {err}");
        let err = Arc::new(err);
        self.last_error = Some(Arc::clone(&err));
        self.set_states(PlaybackState::Error, PlaybackState::Error);
        self.emit(Notification::Error(err));
    }

    fn set_states(&mut self, current: PlaybackState, target: PlaybackState) {
        if self.current == current && self.target == target {
            return;
        }
        if self.current != current {
            info!("playback state {:?} -> {current:?}", self.current);
        }
        self.current = current;
        self.target = target;
        self.emit(Notification::StateChanged { current, target });
    }

    fn emit(&mut self, notification: Notification) {
        self.observers.emit(&notification);
    }
}

impl<F: EngineFactory, P> fmt::Debug for PlaybackCoordinator<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackCoordinator")
            .field("config", &self.config)
            .field("source", &self.source)
            .field("has_engine", &self.engine.is_some())
            .field("has_surface", &self.surface.is_some())
            .field("current", &self.current)
            .field("target", &self.target)
            .field("pending_seek", &self.pending_seek)
            .field("media", &self.media)
            .field("viewport", &self.viewport)
            .field("transform", &self.transform)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
