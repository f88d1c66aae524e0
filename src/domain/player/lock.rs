// SPDX-License-Identifier: MPL-2.0
//! Lock status axis of the player state.
//!
//! Locking is only meaningful while the player is maximized; the state
//! machine enforces that a non-`Unlocked` lock status implies the locked
//! fullscreen placement.

/// Whether user input to playback controls is suppressed while maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockStatus {
    /// Controls respond normally.
    #[default]
    Unlocked,
    /// Controls suppressed; only the lock control itself responds.
    Locked,
    /// First unlock tap received; waiting for the confirming second tap.
    ///
    /// Times back out to `Locked` if the confirmation window elapses.
    PendingUnlockConfirmation,
}

impl LockStatus {
    /// Returns true if playback controls are currently suppressed.
    #[must_use]
    pub fn is_engaged(self) -> bool {
        !matches!(self, Self::Unlocked)
    }

    /// Returns true if the two-tap unlock confirmation is in flight.
    #[must_use]
    pub fn is_pending_confirmation(self) -> bool {
        matches!(self, Self::PendingUnlockConfirmation)
    }
}
