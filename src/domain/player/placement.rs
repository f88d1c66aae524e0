// SPDX-License-Identifier: MPL-2.0
//! Screen placement axis of the player state.

/// Sub-mode of the maximized (fullscreen) player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaximizedMode {
    /// Fullscreen with controls available.
    Active,
    /// Fullscreen while the current source is still resolving.
    Loading,
    /// Fullscreen with playback controls suppressed.
    Locked,
    /// Fullscreen with the resolution picker sheet open.
    ResolutionPicker,
    /// Fullscreen with the speed picker sheet open.
    SpeedPicker,
}

/// Which of the host surfaces the player view occupies.
///
/// `NoScreen` is the initial placement and, once reached through
/// `ExternalClose`, terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenPlacement {
    /// Player dismissed or not yet presented.
    #[default]
    NoScreen,
    /// Docked miniature player.
    Minimized,
    /// Inline player; `loading` is true until the source resolves.
    Normal { loading: bool },
    /// Fullscreen player.
    Maximized(MaximizedMode),
}

impl ScreenPlacement {
    /// Returns true if the player is fullscreen in any sub-mode.
    #[must_use]
    pub fn is_maximized(self) -> bool {
        matches!(self, Self::Maximized(_))
    }

    /// Returns true if the placement is still waiting on the source.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(
            self,
            Self::Normal { loading: true } | Self::Maximized(MaximizedMode::Loading)
        )
    }

    /// Returns true if playback controls can be interacted with here.
    ///
    /// Minimized and dismissed players have no control surface, and the
    /// locked fullscreen mode suppresses it.
    #[must_use]
    pub fn accepts_controls(self) -> bool {
        matches!(
            self,
            Self::Normal { .. } | Self::Maximized(MaximizedMode::Active)
        )
    }

    /// Returns the same surface with its loading flag resolved.
    #[must_use]
    pub fn resolved(self) -> Self {
        match self {
            Self::Normal { .. } => Self::Normal { loading: false },
            Self::Maximized(MaximizedMode::Loading) => Self::Maximized(MaximizedMode::Active),
            other => other,
        }
    }

    /// Returns the same surface put back into its loading form.
    #[must_use]
    pub fn reloading(self) -> Self {
        match self {
            Self::Normal { .. } => Self::Normal { loading: true },
            Self::Maximized(_) => Self::Maximized(MaximizedMode::Loading),
            other => other,
        }
    }
}
