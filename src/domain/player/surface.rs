// SPDX-License-Identifier: MPL-2.0
//! Declarative description of the player's control surface.
//!
//! [`ControlSurface::from_state`] is a pure function of the state triple.
//! The host renderer reconciles its view tree against this description; the
//! machine and this module carry no rendering-framework dependency.

use super::lock::LockStatus;
use super::machine::PlayerState;
use super::placement::{MaximizedMode, ScreenPlacement};
use super::playback::PlaybackStatus;

/// Where the lock control is rendered, when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockControlPosition {
    /// Corner of the active fullscreen overlay.
    Corner,
    /// Screen center while the lock screen is engaged.
    Center,
}

/// The primary transport control to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Play,
    Pause,
    Replay,
}

/// What the renderer should show for a given state triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSurface {
    /// Whether any player surface is on screen.
    pub visible: bool,
    /// Docked miniature player.
    pub miniature: bool,
    /// Fullscreen player in any sub-mode.
    pub fullscreen: bool,
    /// Spinner over the video surface.
    pub loading_indicator: bool,
    /// Whether the transport overlay (buttons, slider) is drawn.
    pub controls_overlay: bool,
    /// The transport control to present, if any.
    pub primary_action: Option<PrimaryAction>,
    /// Forward/backward buttons enabled.
    pub seek_enabled: bool,
    /// Scrubber enabled.
    pub slider_enabled: bool,
    /// Lock control and its position, if present.
    pub lock_control: Option<LockControlPosition>,
    /// Unlock confirmation prompt visible.
    pub unlock_prompt: bool,
    /// Resolution picker sheet open.
    pub resolution_picker: bool,
    /// Speed picker sheet open.
    pub speed_picker: bool,
}

impl ControlSurface {
    /// Derives the control surface for a state triple.
    #[must_use]
    pub fn from_state(state: &PlayerState) -> Self {
        let placement = state.placement;
        let playback = state.playback;

        let visible = placement != ScreenPlacement::NoScreen;
        let loading = placement.is_loading() || playback == PlaybackStatus::Loading;
        let interactive = placement.accepts_controls() && !loading;
        let controls_overlay = interactive && !playback.controls_hidden();

        let primary_action = if !controls_overlay && !placement.accepts_controls() {
            // The mini player keeps a bare play/pause control.
            if placement == ScreenPlacement::Minimized && !loading {
                Some(Self::action_for(playback))
            } else {
                None
            }
        } else if controls_overlay {
            Some(Self::action_for(playback))
        } else {
            None
        };

        let lock_control = match (placement, state.lock) {
            // Fullscreen with finished media loses the lock control.
            (ScreenPlacement::Maximized(MaximizedMode::Active), LockStatus::Unlocked)
                if controls_overlay && !playback.is_finished() =>
            {
                Some(LockControlPosition::Corner)
            }
            (ScreenPlacement::Maximized(MaximizedMode::Locked), lock) if lock.is_engaged() => {
                Some(LockControlPosition::Center)
            }
            _ => None,
        };

        Self {
            visible,
            miniature: placement == ScreenPlacement::Minimized,
            fullscreen: placement.is_maximized(),
            loading_indicator: visible && loading,
            controls_overlay,
            primary_action,
            seek_enabled: controls_overlay && playback.seek_enabled(),
            slider_enabled: controls_overlay && playback.seek_enabled(),
            lock_control,
            unlock_prompt: state.lock.is_pending_confirmation(),
            resolution_picker: placement
                == ScreenPlacement::Maximized(MaximizedMode::ResolutionPicker),
            speed_picker: placement == ScreenPlacement::Maximized(MaximizedMode::SpeedPicker),
        }
    }

    fn action_for(playback: PlaybackStatus) -> PrimaryAction {
        match playback {
            PlaybackStatus::Playing { .. } => PrimaryAction::Pause,
            PlaybackStatus::Finished { .. } => PrimaryAction::Replay,
            _ => PrimaryAction::Play,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::playback::HideReason;

    fn state(
        placement: ScreenPlacement,
        playback: PlaybackStatus,
        lock: LockStatus,
    ) -> PlayerState {
        PlayerState {
            placement,
            playback,
            lock,
        }
    }

    #[test]
    fn dismissed_player_renders_nothing() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::NoScreen,
            PlaybackStatus::Loading,
            LockStatus::Unlocked,
        ));
        assert!(!surface.visible);
        assert!(!surface.controls_overlay);
        assert!(surface.primary_action.is_none());
    }

    #[test]
    fn inline_paused_player_shows_play() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::Normal { loading: false },
            PlaybackStatus::Paused {
                controls_hidden: false,
            },
            LockStatus::Unlocked,
        ));
        assert!(surface.visible);
        assert!(surface.controls_overlay);
        assert_eq!(surface.primary_action, Some(PrimaryAction::Play));
        assert!(surface.seek_enabled);
        assert!(surface.lock_control.is_none());
    }

    #[test]
    fn loading_surfaces_show_spinner_without_controls() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::Normal { loading: true },
            PlaybackStatus::Loading,
            LockStatus::Unlocked,
        ));
        assert!(surface.loading_indicator);
        assert!(!surface.controls_overlay);
        assert!(!surface.seek_enabled);
    }

    #[test]
    fn hidden_controls_suppress_the_overlay() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::Maximized(MaximizedMode::Active),
            PlaybackStatus::Playing {
                controls_hidden: true,
                reason: HideReason::UserInactivity,
            },
            LockStatus::Unlocked,
        ));
        assert!(surface.fullscreen);
        assert!(!surface.controls_overlay);
        assert!(surface.lock_control.is_none());
    }

    #[test]
    fn active_fullscreen_places_lock_in_corner() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::Maximized(MaximizedMode::Active),
            PlaybackStatus::Playing {
                controls_hidden: false,
                reason: HideReason::UserInteraction,
            },
            LockStatus::Unlocked,
        ));
        assert_eq!(surface.lock_control, Some(LockControlPosition::Corner));
    }

    #[test]
    fn locked_fullscreen_centers_the_lock_control() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::Maximized(MaximizedMode::Locked),
            PlaybackStatus::Playing {
                controls_hidden: false,
                reason: HideReason::UserInteraction,
            },
            LockStatus::Locked,
        ));
        assert_eq!(surface.lock_control, Some(LockControlPosition::Center));
        assert!(!surface.controls_overlay);
        assert!(!surface.unlock_prompt);
    }

    #[test]
    fn pending_unlock_shows_the_prompt() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::Maximized(MaximizedMode::Locked),
            PlaybackStatus::Playing {
                controls_hidden: false,
                reason: HideReason::UserInteraction,
            },
            LockStatus::PendingUnlockConfirmation,
        ));
        assert!(surface.unlock_prompt);
        assert_eq!(surface.lock_control, Some(LockControlPosition::Center));
    }

    #[test]
    fn finished_media_loses_seek_and_lock() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::Maximized(MaximizedMode::Active),
            PlaybackStatus::Finished {
                controls_hidden: false,
            },
            LockStatus::Unlocked,
        ));
        assert!(!surface.seek_enabled);
        assert!(!surface.slider_enabled);
        assert!(surface.lock_control.is_none());
        assert_eq!(surface.primary_action, Some(PrimaryAction::Replay));
    }

    #[test]
    fn picker_modes_open_their_sheets() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::Maximized(MaximizedMode::ResolutionPicker),
            PlaybackStatus::Playing {
                controls_hidden: false,
                reason: HideReason::UserInteraction,
            },
            LockStatus::Unlocked,
        ));
        assert!(surface.resolution_picker);
        assert!(!surface.speed_picker);
    }

    #[test]
    fn mini_player_keeps_a_bare_transport_control() {
        let surface = ControlSurface::from_state(&state(
            ScreenPlacement::Minimized,
            PlaybackStatus::Playing {
                controls_hidden: false,
                reason: HideReason::UserInteraction,
            },
            LockStatus::Unlocked,
        ));
        assert!(surface.miniature);
        assert!(!surface.controls_overlay);
        assert_eq!(surface.primary_action, Some(PrimaryAction::Pause));
    }
}
