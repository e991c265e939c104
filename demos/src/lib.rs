// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared collaborators for the demos.

use std::time::Duration;

use cropview_playback::{EngineError, MediaEngine, MediaMetadata, MediaSource, MetadataProbeError};
use log::info;

/// Engine that plays nothing and logs every call.
#[derive(Debug, Default)]
pub struct LoggingEngine {
    playing: bool,
    position: Duration,
}

impl MediaEngine for LoggingEngine {
    type Surface = &'static str;

    fn open(&mut self, source: &MediaSource, surface: &&'static str) -> Result<(), EngineError> {
        info!("engine: open {source} on {surface}");
        Ok(())
    }

    fn start(&mut self) -> Result<(), EngineError> {
        info!("engine: start at {:?}", self.position);
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        info!("engine: pause");
        self.playing = false;
        Ok(())
    }

    fn seek_to(&mut self, position: Duration) -> Result<(), EngineError> {
        info!("engine: seek to {position:?}");
        self.position = position;
        Ok(())
    }

    fn stop(&mut self) {
        info!("engine: stop");
        self.playing = false;
    }

    fn reset(&mut self) {
        info!("engine: reset");
        self.playing = false;
    }

    fn release(&mut self) {
        info!("engine: release");
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(42))
    }

    fn current_position(&self) -> Duration {
        self.position
    }

    fn set_looping(&mut self, looping: bool) {
        info!("engine: looping={looping}");
    }
}

/// Probe reporting every source as unrotated 1280x720 media.
pub fn probe(source: &MediaSource) -> Result<MediaMetadata, MetadataProbeError> {
    info!("probe: {source}");
    Ok(MediaMetadata {
        width: 1280,
        height: 720,
        rotation: Some("0".into()),
    })
}
