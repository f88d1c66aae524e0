// SPDX-License-Identifier: MPL-2.0
//! The player state machine.
//!
//! Owns the (placement, playback, lock) triple and computes, for each
//! incoming [`PlayerEvent`], the next triple plus an ordered list of
//! [`SideEffect`] requests. Events that do not apply to the current state
//! are absorbed silently: `apply` is total and never panics.
//!
//! All events are expected on one logical thread, in arrival order. A
//! multi-threaded host must marshal events through a single serialized
//! queue before they reach the machine; background loads report back as
//! `DataLoaded`/`DataFailed` events carrying the [`LoadEpoch`] they were
//! started under, and stale epochs are dropped.

use super::effect::SideEffect;
use super::event::PlayerEvent;
use super::lock::LockStatus;
use super::newtypes::{LoadEpoch, SliderPosition};
use super::placement::{MaximizedMode, ScreenPlacement};
use super::playback::{HideReason, PlaybackStatus};
use crate::config::{Config, DEFAULT_SEEK_STEP_SECS};

/// The full visual state of the player: one value per axis.
///
/// A renderer is a pure function of this triple plus duration/slider values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerState {
    pub placement: ScreenPlacement,
    pub playback: PlaybackStatus,
    pub lock: LockStatus,
}

/// Result of applying one event: the new triple and the ordered
/// side-effect requests the host must execute.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: PlayerState,
    pub effects: Vec<SideEffect>,
}

/// Computes transitions between player states.
#[derive(Debug, Clone)]
pub struct PlayerStateMachine {
    state: PlayerState,
    epoch: LoadEpoch,
    seek_step_secs: i64,
    closed: bool,
}

impl Default for PlayerStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStateMachine {
    /// Creates a machine in the initial `(NoScreen, Loading, Unlocked)` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PlayerState::default(),
            epoch: LoadEpoch::default(),
            seek_step_secs: DEFAULT_SEEK_STEP_SECS as i64,
            closed: false,
        }
    }

    /// Creates a machine with tunables taken from the user configuration.
    ///
    /// Values are read through the config's clamped accessors, so an
    /// out-of-range `settings.toml` cannot produce a degenerate step.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        let mut machine = Self::new();
        machine.seek_step_secs = config.seek_step() as i64;
        machine
    }

    /// Returns the current state triple.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Returns the epoch current loads must carry to be accepted.
    #[must_use]
    pub fn epoch(&self) -> LoadEpoch {
        self.epoch
    }

    /// Returns true once the player has been dismissed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Applies one event, returning the new triple and its side effects.
    ///
    /// Total over all events and states. Events that do not apply to the
    /// current state return the unchanged triple with no effects.
    pub fn apply(&mut self, event: PlayerEvent) -> Transition {
        if self.closed {
            return self.unchanged();
        }
        match event {
            PlayerEvent::TapPlay => self.on_play(),
            PlayerEvent::TapPause => self.on_pause(),
            PlayerEvent::TapReplay => self.on_replay(),
            PlayerEvent::TapForward => self.on_seek_by(self.seek_step_secs),
            PlayerEvent::TapBackward => self.on_seek_by(-self.seek_step_secs),
            PlayerEvent::SliderScrub(position) => self.on_scrub(position),
            PlayerEvent::TapMinimize => self.on_minimize(),
            PlayerEvent::TapMaximize => self.on_maximize(),
            PlayerEvent::TapNormalize => self.on_normalize(),
            PlayerEvent::TapLock => self.on_lock_tap(),
            PlayerEvent::TapUnlockConfirm => self.on_unlock_confirm(),
            PlayerEvent::TapCancelUnlock => self.on_unlock_abandoned(),
            PlayerEvent::UnlockConfirmTimeout => self.on_unlock_abandoned(),
            PlayerEvent::TapResolutionPicker => {
                self.on_picker_toggle(MaximizedMode::ResolutionPicker)
            }
            PlayerEvent::TapSpeedPicker => self.on_picker_toggle(MaximizedMode::SpeedPicker),
            PlayerEvent::SelectResolution(index) => self.on_select(
                MaximizedMode::ResolutionPicker,
                SideEffect::SwitchVariant(index),
            ),
            PlayerEvent::SelectSpeed(speed) => {
                self.on_select(MaximizedMode::SpeedPicker, SideEffect::SetPlaybackRate(speed))
            }
            PlayerEvent::InactivityTimeout => self.on_inactivity_timeout(),
            PlayerEvent::PlaybackReachedEnd => self.on_reached_end(),
            PlayerEvent::ChangeVideo(url) => self.on_change_video(url),
            PlayerEvent::DataLoaded { epoch } => self.on_data_loaded(epoch),
            PlayerEvent::DataFailed { epoch, error } => self.on_data_failed(epoch, &error),
            PlayerEvent::ExternalClose => self.on_close(),
        }
    }

    fn unchanged(&self) -> Transition {
        Transition {
            state: self.state,
            effects: Vec::new(),
        }
    }

    fn commit(&mut self, state: PlayerState, effects: Vec<SideEffect>) -> Transition {
        self.state = state;
        Transition { state, effects }
    }

    /// Play/pause/replay respond anywhere a player is visible and not
    /// locked; the mini player keeps its play control.
    fn playback_controls_reachable(&self) -> bool {
        self.state.placement != ScreenPlacement::NoScreen && !self.state.lock.is_engaged()
    }

    fn activity_effects(&self) -> Vec<SideEffect> {
        if self.state.placement.accepts_controls() {
            vec![SideEffect::ResetInactivityTimer]
        } else {
            Vec::new()
        }
    }

    fn on_play(&mut self) -> Transition {
        if !self.playback_controls_reachable() {
            return self.unchanged();
        }
        match self.state.playback {
            PlaybackStatus::Paused { .. } => {
                let mut state = self.state;
                state.playback = PlaybackStatus::Playing {
                    controls_hidden: false,
                    reason: HideReason::UserInteraction,
                };
                let effects = self.activity_effects();
                self.commit(state, effects)
            }
            _ => self.unchanged(),
        }
    }

    fn on_pause(&mut self) -> Transition {
        if !self.playback_controls_reachable() {
            return self.unchanged();
        }
        match self.state.playback {
            PlaybackStatus::Playing { .. } => {
                let mut state = self.state;
                state.playback = PlaybackStatus::Paused {
                    controls_hidden: false,
                };
                let effects = self.activity_effects();
                self.commit(state, effects)
            }
            _ => self.unchanged(),
        }
    }

    fn on_replay(&mut self) -> Transition {
        if !self.playback_controls_reachable() {
            return self.unchanged();
        }
        match self.state.playback {
            PlaybackStatus::Finished { .. } => {
                let mut state = self.state;
                state.playback = PlaybackStatus::Playing {
                    controls_hidden: true,
                    reason: HideReason::UserInteraction,
                };
                let mut effects = vec![SideEffect::SeekTo(SliderPosition::start())];
                effects.extend(self.activity_effects());
                self.commit(state, effects)
            }
            _ => self.unchanged(),
        }
    }

    fn on_seek_by(&mut self, step_secs: i64) -> Transition {
        if !self.state.placement.accepts_controls() || !self.state.playback.seek_enabled() {
            return self.unchanged();
        }
        let mut state = self.state;
        state.playback = state.playback.with_controls_shown();
        let effects = vec![SideEffect::SeekBy(step_secs), SideEffect::ResetInactivityTimer];
        self.commit(state, effects)
    }

    fn on_scrub(&mut self, position: SliderPosition) -> Transition {
        if !self.state.placement.accepts_controls() || !self.state.playback.seek_enabled() {
            return self.unchanged();
        }
        let mut state = self.state;
        state.playback = state.playback.with_controls_shown();
        let effects = vec![SideEffect::SeekTo(position), SideEffect::ResetInactivityTimer];
        self.commit(state, effects)
    }

    fn on_minimize(&mut self) -> Transition {
        // Minimize is only valid from the inline player.
        match self.state.placement {
            ScreenPlacement::Normal { .. } => {
                let mut state = self.state;
                state.placement = ScreenPlacement::Minimized;
                self.commit(state, Vec::new())
            }
            _ => self.unchanged(),
        }
    }

    fn on_maximize(&mut self) -> Transition {
        match self.state.placement {
            ScreenPlacement::Normal { loading } => {
                let mut state = self.state;
                state.placement = if loading {
                    ScreenPlacement::Maximized(MaximizedMode::Loading)
                } else {
                    ScreenPlacement::Maximized(MaximizedMode::Active)
                };
                self.commit(state, vec![SideEffect::NotifySizeChanged(true)])
            }
            _ => self.unchanged(),
        }
    }

    fn on_normalize(&mut self) -> Transition {
        match self.state.placement {
            ScreenPlacement::Maximized(MaximizedMode::Active) => {
                let mut state = self.state;
                state.placement = ScreenPlacement::Normal { loading: false };
                self.commit(state, vec![SideEffect::NotifySizeChanged(false)])
            }
            ScreenPlacement::Maximized(MaximizedMode::Loading) => {
                let mut state = self.state;
                state.placement = ScreenPlacement::Normal { loading: true };
                self.commit(state, vec![SideEffect::NotifySizeChanged(false)])
            }
            ScreenPlacement::Minimized => {
                let mut state = self.state;
                state.placement = ScreenPlacement::Normal {
                    loading: self.state.playback == PlaybackStatus::Loading,
                };
                self.commit(state, Vec::new())
            }
            _ => self.unchanged(),
        }
    }

    fn on_lock_tap(&mut self) -> Transition {
        match (self.state.placement, self.state.lock) {
            // Entering the lock screen requires an active fullscreen player
            // with unfinished media.
            (ScreenPlacement::Maximized(MaximizedMode::Active), LockStatus::Unlocked)
                if !self.state.playback.is_finished() =>
            {
                let mut state = self.state;
                state.placement = ScreenPlacement::Maximized(MaximizedMode::Locked);
                state.lock = LockStatus::Locked;
                self.commit(state, Vec::new())
            }
            // First unlock tap arms the confirmation window.
            (ScreenPlacement::Maximized(MaximizedMode::Locked), LockStatus::Locked) => {
                let mut state = self.state;
                state.lock = LockStatus::PendingUnlockConfirmation;
                self.commit(state, vec![SideEffect::ScheduleUnlockTimeout])
            }
            _ => self.unchanged(),
        }
    }

    fn on_unlock_confirm(&mut self) -> Transition {
        match self.state.lock {
            LockStatus::PendingUnlockConfirmation => {
                let mut state = self.state;
                state.lock = LockStatus::Unlocked;
                state.placement = ScreenPlacement::Maximized(MaximizedMode::Active);
                self.commit(state, vec![SideEffect::ResetInactivityTimer])
            }
            _ => self.unchanged(),
        }
    }

    fn on_unlock_abandoned(&mut self) -> Transition {
        match self.state.lock {
            LockStatus::PendingUnlockConfirmation => {
                let mut state = self.state;
                state.lock = LockStatus::Locked;
                self.commit(state, Vec::new())
            }
            _ => self.unchanged(),
        }
    }

    fn on_picker_toggle(&mut self, picker: MaximizedMode) -> Transition {
        match self.state.placement {
            ScreenPlacement::Maximized(MaximizedMode::Active) => {
                let mut state = self.state;
                state.placement = ScreenPlacement::Maximized(picker);
                self.commit(state, vec![SideEffect::ResetInactivityTimer])
            }
            ScreenPlacement::Maximized(mode) if mode == picker => {
                let mut state = self.state;
                state.placement = ScreenPlacement::Maximized(MaximizedMode::Active);
                self.commit(state, vec![SideEffect::ResetInactivityTimer])
            }
            _ => self.unchanged(),
        }
    }

    fn on_select(&mut self, picker: MaximizedMode, effect: SideEffect) -> Transition {
        match self.state.placement {
            ScreenPlacement::Maximized(mode) if mode == picker => {
                let mut state = self.state;
                state.placement = ScreenPlacement::Maximized(MaximizedMode::Active);
                self.commit(state, vec![effect, SideEffect::ResetInactivityTimer])
            }
            _ => self.unchanged(),
        }
    }

    fn on_inactivity_timeout(&mut self) -> Transition {
        // Only a visible, playing surface auto-hides; everything else is an
        // idempotent no-op (the timer may fire late or spuriously).
        if !self.state.placement.accepts_controls() || !self.state.playback.auto_hide_eligible() {
            return self.unchanged();
        }
        let mut state = self.state;
        state.playback = PlaybackStatus::Playing {
            controls_hidden: true,
            reason: HideReason::UserInactivity,
        };
        self.commit(state, Vec::new())
    }

    fn on_reached_end(&mut self) -> Transition {
        match self.state.playback {
            PlaybackStatus::Playing { .. } => {
                let mut state = self.state;
                state.playback = PlaybackStatus::Finished {
                    controls_hidden: false,
                };
                // Finished media cannot stay locked: the lock control is
                // removed until the next Playing transition.
                if state.lock.is_engaged() {
                    state.lock = LockStatus::Unlocked;
                    if state.placement == ScreenPlacement::Maximized(MaximizedMode::Locked) {
                        state.placement = ScreenPlacement::Maximized(MaximizedMode::Active);
                    }
                }
                self.commit(state, Vec::new())
            }
            _ => self.unchanged(),
        }
    }

    fn on_change_video(&mut self, url: String) -> Transition {
        self.epoch = self.epoch.next();
        let mut state = self.state;
        state.playback = PlaybackStatus::Loading;
        state.placement = state.placement.reloading();
        state.lock = LockStatus::Unlocked;
        self.commit(
            state,
            vec![SideEffect::StopDecode, SideEffect::BeginDecode(url)],
        )
    }

    fn on_data_loaded(&mut self, epoch: LoadEpoch) -> Transition {
        if self.epoch.is_stale(epoch) {
            log::debug!("dropping stale load completion ({:?} != {:?})", epoch, self.epoch);
            return self.unchanged();
        }
        let mut state = self.state;
        state.placement = match state.placement {
            ScreenPlacement::NoScreen => ScreenPlacement::Normal { loading: false },
            other => other.resolved(),
        };
        if state.playback == PlaybackStatus::Loading {
            state.playback = PlaybackStatus::Paused {
                controls_hidden: false,
            };
        }
        self.commit(state, Vec::new())
    }

    fn on_data_failed(&mut self, epoch: LoadEpoch, error: &crate::error::Error) -> Transition {
        if self.epoch.is_stale(epoch) {
            log::debug!("dropping stale load failure ({:?} != {:?})", epoch, self.epoch);
            return self.unchanged();
        }
        log::warn!("source load failed, showing placeholder: {}", error);
        let mut state = self.state;
        state.placement = match state.placement {
            ScreenPlacement::NoScreen => ScreenPlacement::Normal { loading: false },
            other => other.resolved(),
        };
        state.playback = PlaybackStatus::Paused {
            controls_hidden: false,
        };
        self.commit(state, vec![SideEffect::ShowPlaceholder])
    }

    fn on_close(&mut self) -> Transition {
        self.closed = true;
        let mut state = self.state;
        state.placement = ScreenPlacement::NoScreen;
        state.lock = LockStatus::Unlocked;
        self.commit(state, vec![SideEffect::StopDecode])
    }
}
