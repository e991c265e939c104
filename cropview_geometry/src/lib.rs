// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropview Geometry: crop-to-fill transforms for fixed-aspect video viewports.
//!
//! This crate is the pure geometry half of a cropping video view. Given the
//! pixel size of a viewport and the native pixel size of a piece of media, it
//! computes how the media must be stretched so that it always covers the
//! viewport on both axes (cropping the overflow rather than letterboxing),
//! and how far the overflowing axis may be panned.
//!
//! It focuses on:
//! - [`AspectRatio`]: the ratio the viewport is measured to, including
//!   reduction from media dimensions and layout measuring.
//! - [`MediaDimensions`] and [`Rotation`]: what is known about the media.
//! - [`CropTransform`]: the scale factors, pan offset and pan bounds, plus
//!   conversion into a [`kurbo::Affine`] for the renderer.
//! - [`clamp_pan`]: exact, per-axis clamping of pan deltas.
//!
//! It does **not** decode, render, or own any playback state. Callers are
//! expected to feed viewport and media sizes in as they become known and to
//! apply [`CropTransform::to_affine`] to whatever surface draws the frames.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use cropview_geometry::{CropTransform, MediaDimensions};
//!
//! // A portrait viewport showing landscape media.
//! let viewport = Size::new(1080.0, 1920.0);
//! let media = MediaDimensions::new(1280, 720);
//! let mut transform = CropTransform::compute(viewport, media);
//!
//! // Height is the tighter fit, so it is pinned and only X can pan.
//! assert_eq!(transform.scale_y(), 1.0);
//! assert!(transform.scale_x() > 1.0);
//! assert_eq!(transform.bound().y, 0.0);
//!
//! // Dragging right from the origin is clamped to zero; dragging left is accepted.
//! assert_eq!(transform.pan_by(Vec2::new(50.0, 0.0)), Vec2::ZERO);
//! assert_eq!(transform.pan_by(Vec2::new(-50.0, 30.0)), Vec2::new(-50.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - The un-transformed media is assumed to be stretched to the viewport by
//!   the surface, so the transform is expressed relative to the viewport.
//! - Exactly one axis is normalized to a scale of `1.0` (the pinned axis);
//!   the other keeps the residual over-scale and is the only one that pans.
//! - Pan offsets live in `[bound, 0]`, where `bound <= 0` is the maximum
//!   leftward/upward shift in viewport pixels.
//!
//! This crate is `no_std`.

#![no_std]

mod aspect;
mod media;
mod transform;

pub use aspect::{AspectRatio, InvalidAspectRatio, gcd};
pub use media::{InvalidRotation, MediaDimensions, Rotation};
pub use transform::{Axis, CropTransform, PanStep, clamp_pan};
