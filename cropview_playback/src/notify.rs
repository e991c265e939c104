// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;

use cropview_geometry::CropTransform;
use kurbo::Vec2;

use crate::error::PlaybackError;
use crate::state::PlaybackState;

/// Pan position reported after every pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanPosition {
    /// Offset in viewport pixels, within the transform's `[bound, 0]`.
    pub offset: Vec2,
    /// Offset in media pixels from the media's top-left corner.
    pub real: Vec2,
}

/// Something subscribers may want to react to.
#[derive(Clone, Debug)]
pub enum Notification {
    /// The current or target state changed.
    StateChanged {
        /// What is true now.
        current: PlaybackState,
        /// What the caller last asked for.
        target: PlaybackState,
    },
    /// The pan offset was updated (possibly by zero).
    PanPositionChanged(PanPosition),
    /// A new crop transform was computed; apply [`CropTransform::to_affine`].
    TransformChanged(CropTransform),
    /// The engine finished preparing.
    Prepared,
    /// Playback reached the end of the media.
    Completed,
    /// The coordinator entered the error state.
    Error(Arc<PlaybackError>),
    /// Informational engine event.
    Info {
        /// Info category.
        what: i32,
        /// Implementation-specific detail code.
        extra: i32,
    },
    /// The measured viewport size may have changed; measure again.
    LayoutRequested,
}

/// Handle returned by [`PlaybackCoordinator::subscribe`](crate::PlaybackCoordinator::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Notification)>;

/// Subscriber list, invoked in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, notification: &Notification) {
        for (_, callback) in &mut self.entries {
            callback(notification);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.entries.len())
            .finish_non_exhaustive()
    }
}
