// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted playback.
//!
//! Drive a `PlaybackCoordinator` through a typical host session with an
//! engine that only logs what it is asked to do: early start, surface
//! arriving after the source, a deferred seek, panning, a tap, and the
//! surface going away.
//!
//! Run:
//! - `cargo run -p cropview_demos --example scripted_playback`
//! - `RUST_LOG=debug cargo run -p cropview_demos --example scripted_playback`

use std::time::Duration;

use cropview_demos::{LoggingEngine, probe};
use cropview_playback::{CropViewConfig, MediaEvent, Notification, PlaybackCoordinator};
use kurbo::{Point, Size, Vec2};
use log::info;

fn main() -> Result<(), serde_json::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Missing fields keep their defaults.
    let config: CropViewConfig = serde_json::from_str(r#"{ "aspect_ratio": [9.0, 16.0] }"#)?;
    info!("config: {config:?}");

    let mut view = PlaybackCoordinator::new(config, LoggingEngine::default, probe);
    view.subscribe(|n| match n {
        Notification::StateChanged { current, target } => {
            println!("state: {current:?} (target {target:?})");
        }
        Notification::PanPositionChanged(p) => {
            println!(
                "pan: offset=({:.1}, {:.1}) real=({:.1}, {:.1})",
                p.offset.x, p.offset.y, p.real.x, p.real.y
            );
        }
        Notification::TransformChanged(t) => println!("transform: {:?}", t.to_affine()),
        other => println!("{other:?}"),
    });

    let viewport = view.measure(Size::new(1080.0, 2400.0));
    println!("measured viewport: {}x{}", viewport.width, viewport.height);
    view.on_viewport_resized(viewport);

    // The host asks for playback before anything is ready.
    view.start();
    view.seek_to(Duration::from_secs(5));
    view.set_source("file:///videos/landscape.mp4");
    view.on_surface_available("surface#1");
    view.on_media_event(MediaEvent::Prepared {
        width: 1280,
        height: 720,
    });

    // Drag left by 300px, then tap to pause.
    view.on_pointer_down(Point::new(800.0, 900.0));
    for step in 1..=6 {
        view.on_pointer_move(Point::new(800.0 - 50.0 * f64::from(step), 900.0));
    }
    view.on_pointer_up();
    view.on_pointer_down(Point::new(500.0, 900.0));
    view.on_pointer_up();

    // A direct pan far past the edge is clamped.
    let applied = view.on_pan_gesture(Vec2::new(-10_000.0, 0.0));
    println!("applied pan: {applied:?}");

    view.on_tap_gesture();
    view.on_surface_destroyed();
    println!("after surface loss: {:?}", view.state());
    Ok(())
}
