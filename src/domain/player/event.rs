// SPDX-License-Identifier: MPL-2.0
//! Input events for the player state machine.
//!
//! All events, including completions of background work, are delivered on
//! one logical queue and processed strictly in arrival order.

use super::newtypes::{LoadEpoch, PlaybackSpeed, SliderPosition};
use crate::error::Error;

/// The closed set of inputs the state machine reacts to.
///
/// Events that do not apply to the current state are absorbed as no-ops;
/// `apply` is total over this set.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    // Playback controls
    TapPlay,
    TapPause,
    TapReplay,
    TapForward,
    TapBackward,
    SliderScrub(SliderPosition),

    // Placement controls
    TapMinimize,
    TapMaximize,
    TapNormalize,

    // Lock screen
    TapLock,
    TapUnlockConfirm,
    TapCancelUnlock,
    /// The two-tap confirmation window elapsed without a second tap.
    UnlockConfirmTimeout,

    // Picker sheets
    TapResolutionPicker,
    TapSpeedPicker,
    SelectResolution(usize),
    SelectSpeed(PlaybackSpeed),

    // Timers and media signals
    InactivityTimeout,
    PlaybackReachedEnd,

    // Source lifecycle
    /// Switch to a new source URL, cancelling in-flight loads.
    ChangeVideo(String),
    /// A background load finished for the given epoch.
    DataLoaded { epoch: LoadEpoch },
    /// A background load failed for the given epoch.
    DataFailed { epoch: LoadEpoch, error: Error },

    /// Dismiss the player; terminal for the session.
    ExternalClose,
}

impl PlayerEvent {
    /// Returns true if this event counts as user activity for the
    /// controls auto-hide window.
    #[must_use]
    pub fn is_user_activity(&self) -> bool {
        matches!(
            self,
            Self::TapPlay
                | Self::TapPause
                | Self::TapReplay
                | Self::TapForward
                | Self::TapBackward
                | Self::SliderScrub(_)
                | Self::TapResolutionPicker
                | Self::TapSpeedPicker
                | Self::SelectResolution(_)
                | Self::SelectSpeed(_)
        )
    }
}
