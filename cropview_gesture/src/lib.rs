// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropview Gesture: pointer state for panning and tapping a video viewport.
//!
//! A cropping video view needs two interactions from a single pointer: drag
//! to pan the over-scaled media, and tap to toggle playback. This crate keeps
//! the state for both, independent of any UI toolkit:
//!
//! - [`drag`]: movement deltas and accumulated travel
//! - [`tap`]: classify a release as a tap or a pan using a slop distance
//!
//! Hosts translate their toolkit's pointer events into
//! [`tap::TapRecognizer::press`], [`tap::TapRecognizer::motion`] and
//! [`tap::TapRecognizer::release`] calls, feed the returned deltas into a
//! pan clamp, and toggle playback on [`tap::Release::Tap`].
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod tap;
