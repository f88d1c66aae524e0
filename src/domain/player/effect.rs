// SPDX-License-Identifier: MPL-2.0
//! One-shot side-effect requests emitted by the state machine.
//!
//! These are opaque instructions for the host renderer/decoder; the state
//! machine never executes them itself.

use super::newtypes::{PlaybackSpeed, SliderPosition};

/// An instruction for the host to execute after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    /// Start resolving and decoding the given source URL.
    BeginDecode(String),
    /// Stop the current decode and release the playback resource.
    StopDecode,
    /// The player surface changed size; true when entering fullscreen.
    NotifySizeChanged(bool),
    /// Restart the controls auto-hide window.
    ResetInactivityTimer,
    /// Arm the unlock confirmation window. The host starts a timer of
    /// [`crate::config::UNLOCK_CONFIRM_WINDOW_SECS`] seconds and delivers
    /// `PlayerEvent::UnlockConfirmTimeout` when it elapses.
    ScheduleUnlockTimeout,
    /// Seek relative to the current position, in seconds.
    SeekBy(i64),
    /// Seek to a normalized position.
    SeekTo(SliderPosition),
    /// Switch playback to the stream variant at this index.
    SwitchVariant(usize),
    /// Apply a new playback rate.
    SetPlaybackRate(PlaybackSpeed),
    /// Show the placeholder asset in place of the failed source.
    ShowPlaceholder,
}

impl SideEffect {
    /// Returns true for effects that touch the decode pipeline.
    #[must_use]
    pub fn touches_decoder(&self) -> bool {
        matches!(
            self,
            Self::BeginDecode(_)
                | Self::StopDecode
                | Self::SeekBy(_)
                | Self::SeekTo(_)
                | Self::SwitchVariant(_)
                | Self::SetPlaybackRate(_)
        )
    }
}
