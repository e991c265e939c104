// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording fakes for coordinator integration tests.

#![allow(
    dead_code,
    missing_docs,
    unreachable_pub,
    reason = "Integration-test helper module; not part of the public API."
)]

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use cropview_playback::{
    CropViewConfig, EngineError, EngineFactory, MediaEngine, MediaEvent, MediaMetadata,
    MediaSource, MetadataProbe, MetadataProbeError, Notification, PlaybackCoordinator,
    PlaybackState,
};
use kurbo::Size;

/// Every call the coordinator made on any engine, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Open(String),
    Start,
    Pause,
    Seek(Duration),
    Stop,
    Reset,
    Release,
    SetLooping(bool),
}

#[derive(Debug, Default)]
pub struct Shared {
    pub calls: Vec<Call>,
    pub fail_open: bool,
    pub fail_start: bool,
    /// Set to make the engine stop outputting frames on its own.
    pub stalled: bool,
    pub created: usize,
}

pub type Handle = Rc<RefCell<Shared>>;

#[derive(Debug)]
pub struct FakeEngine {
    shared: Handle,
    playing: bool,
    position: Duration,
}

impl MediaEngine for FakeEngine {
    type Surface = Surface;

    fn open(&mut self, source: &MediaSource, _surface: &Surface) -> Result<(), EngineError> {
        let mut shared = self.shared.borrow_mut();
        shared.calls.push(Call::Open(source.as_str().to_owned()));
        if shared.fail_open {
            return Err(EngineError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no such file",
            )));
        }
        Ok(())
    }

    fn start(&mut self) -> Result<(), EngineError> {
        let mut shared = self.shared.borrow_mut();
        shared.calls.push(Call::Start);
        if shared.fail_start {
            return Err(EngineError::IllegalState("not prepared".into()));
        }
        shared.stalled = false;
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.shared.borrow_mut().calls.push(Call::Pause);
        self.playing = false;
        Ok(())
    }

    fn seek_to(&mut self, position: Duration) -> Result<(), EngineError> {
        self.shared.borrow_mut().calls.push(Call::Seek(position));
        self.position = position;
        Ok(())
    }

    fn stop(&mut self) {
        self.shared.borrow_mut().calls.push(Call::Stop);
        self.playing = false;
    }

    fn reset(&mut self) {
        self.shared.borrow_mut().calls.push(Call::Reset);
        self.playing = false;
    }

    fn release(&mut self) {
        self.shared.borrow_mut().calls.push(Call::Release);
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing && !self.shared.borrow().stalled
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(30))
    }

    fn current_position(&self) -> Duration {
        self.position
    }

    fn set_looping(&mut self, looping: bool) {
        self.shared.borrow_mut().calls.push(Call::SetLooping(looping));
    }
}

#[derive(Debug)]
pub struct FakeFactory(pub Handle);

impl EngineFactory for FakeFactory {
    type Engine = FakeEngine;

    fn create(&mut self) -> FakeEngine {
        self.0.borrow_mut().created += 1;
        FakeEngine {
            shared: Rc::clone(&self.0),
            playing: false,
            position: Duration::ZERO,
        }
    }
}

/// Render surface stand-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surface;

/// Probe answering with fixed metadata, or failing when there is none.
#[derive(Clone, Debug, Default)]
pub struct FakeProbe(pub Option<MediaMetadata>);

impl FakeProbe {
    pub fn sized(width: u32, height: u32, rotation: Option<&str>) -> Self {
        Self(Some(MediaMetadata {
            width,
            height,
            rotation: rotation.map(str::to_owned),
        }))
    }
}

impl MetadataProbe for FakeProbe {
    fn probe(&mut self, source: &MediaSource) -> Result<MediaMetadata, MetadataProbeError> {
        self.0
            .clone()
            .ok_or_else(|| MetadataProbeError::Unavailable(source.to_string()))
    }
}

pub type View = PlaybackCoordinator<FakeFactory, FakeProbe>;

pub struct Harness {
    pub view: View,
    pub engine: Handle,
    pub seen: Rc<RefCell<Vec<Notification>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(CropViewConfig::default(), FakeProbe::default())
    }

    pub fn with_probe(probe: FakeProbe) -> Self {
        Self::with(CropViewConfig::default(), probe)
    }

    pub fn with(config: CropViewConfig, probe: FakeProbe) -> Self {
        let engine = Handle::default();
        let mut view = PlaybackCoordinator::new(config, FakeFactory(Rc::clone(&engine)), probe);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            view.subscribe(move |n| seen.borrow_mut().push(n.clone()));
        }
        Self { view, engine, seen }
    }

    /// Portrait viewport, source and surface set, landscape media prepared.
    pub fn playing() -> Self {
        let mut h = Self::new();
        h.view.on_viewport_resized(Size::new(1080.0, 1920.0));
        h.view.start();
        h.view.set_source("clip.mp4");
        h.view.on_surface_available(Surface);
        h.view.on_media_event(MediaEvent::Prepared {
            width: 1280,
            height: 720,
        });
        assert_eq!(h.view.state(), PlaybackState::Playing, "harness failed to start");
        h.clear();
        h
    }

    pub fn calls(&self) -> Vec<Call> {
        self.engine.borrow().calls.clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.engine.borrow().calls.iter().filter(|c| *c == call).count()
    }

    pub fn seeks(&self) -> Vec<Duration> {
        self.engine
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Seek(position) => Some(*position),
                _ => None,
            })
            .collect()
    }

    /// Current states in the order they were announced.
    pub fn states(&self) -> Vec<PlaybackState> {
        self.seen
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::StateChanged { current, .. } => Some(*current),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> usize {
        self.seen
            .borrow()
            .iter()
            .filter(|n| matches!(n, Notification::Error(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.engine.borrow_mut().calls.clear();
        self.seen.borrow_mut().clear();
    }
}
