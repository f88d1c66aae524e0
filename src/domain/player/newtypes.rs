// SPDX-License-Identifier: MPL-2.0
//! Player value objects.
//!
//! Type-safe wrappers for playback values, ensuring they are always within
//! valid ranges.

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback speed bounds (0.25x to 2.0x).
pub mod speed_bounds {
    /// Minimum playback speed.
    pub const MIN: f64 = 0.25;
    /// Maximum playback speed.
    pub const MAX: f64 = 2.0;
    /// Default playback speed (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
    /// Speeds offered by the speed picker sheet.
    pub const PRESETS: &[f64] = &[0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];
}

/// Playback speed, guaranteed to be within valid range (0.25x–2.0x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Creates a new playback speed, clamping to valid range.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self(speed.clamp(speed_bounds::MIN, speed_bounds::MAX))
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if this is normal (1.0x) speed.
    #[must_use]
    pub fn is_normal(self) -> bool {
        (self.0 - speed_bounds::DEFAULT).abs() < f64::EPSILON
    }

    /// Returns the picker presets as speeds.
    pub fn presets() -> impl Iterator<Item = Self> {
        speed_bounds::PRESETS.iter().map(|&s| Self(s))
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

// =============================================================================
// SliderPosition
// =============================================================================

/// Normalized scrubber position, guaranteed to be within 0.0–1.0.
///
/// NaN inputs collapse to 0.0 so that scrub events stay total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPosition(f64);

impl SliderPosition {
    /// Creates a new slider position, clamping to the unit interval.
    #[must_use]
    pub fn new(position: f64) -> Self {
        if position.is_nan() {
            return Self(0.0);
        }
        Self(position.clamp(0.0, 1.0))
    }

    /// Returns the position as f64 in 0.0–1.0.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Position at the start of the media.
    #[must_use]
    pub fn start() -> Self {
        Self(0.0)
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self::start()
    }
}

// =============================================================================
// LoadEpoch
// =============================================================================

/// Monotonically increasing generation token for source loads.
///
/// Every source change increments the player's epoch; asynchronous load
/// completions carry the epoch they were started under, and completions
/// with a stale epoch are silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LoadEpoch(u64);

impl LoadEpoch {
    /// Returns the next epoch in the sequence.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Returns true if a completion carrying `other` is stale under `self`.
    #[must_use]
    pub fn is_stale(self, other: Self) -> bool {
        other != self
    }
}
