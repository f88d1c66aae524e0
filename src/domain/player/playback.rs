// SPDX-License-Identifier: MPL-2.0
//! Playback status axis of the player state.

/// Why the controls overlay was hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideReason {
    /// Hidden by the player itself (e.g. right after a replay starts).
    SystemInitiated,
    /// Hidden after the inactivity window elapsed with no input.
    UserInactivity,
    /// Hidden by an explicit user action.
    UserInteraction,
}

/// Whether media is loading, playing, paused, or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Source still resolving; no controls yet.
    #[default]
    Loading,
    /// Actively playing.
    Playing {
        controls_hidden: bool,
        reason: HideReason,
    },
    /// Paused at the current position.
    Paused { controls_hidden: bool },
    /// Playback reached the end of the media.
    Finished { controls_hidden: bool },
}

impl PlaybackStatus {
    /// Returns true if media is actively playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// Returns true if playback has reached the end.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    /// Returns true if the controls overlay is currently hidden.
    #[must_use]
    pub fn controls_hidden(self) -> bool {
        match self {
            Self::Loading => false,
            Self::Playing { controls_hidden, .. }
            | Self::Paused { controls_hidden }
            | Self::Finished { controls_hidden } => controls_hidden,
        }
    }

    /// Returns true if forward/backward seeking is available.
    ///
    /// Seek controls are disabled while loading and after the media
    /// finishes, until the next transition back into `Playing`.
    #[must_use]
    pub fn seek_enabled(self) -> bool {
        matches!(self, Self::Playing { .. } | Self::Paused { .. })
    }

    /// Returns true if the inactivity auto-hide may fire from this status.
    #[must_use]
    pub fn auto_hide_eligible(self) -> bool {
        matches!(
            self,
            Self::Playing {
                controls_hidden: false,
                ..
            }
        )
    }

    /// Returns the same status with the controls overlay shown.
    #[must_use]
    pub fn with_controls_shown(self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Playing { reason, .. } => Self::Playing {
                controls_hidden: false,
                reason,
            },
            Self::Paused { .. } => Self::Paused {
                controls_hidden: false,
            },
            Self::Finished { .. } => Self::Finished {
                controls_hidden: false,
            },
        }
    }
}
