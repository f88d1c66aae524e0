// SPDX-License-Identifier: MPL-2.0
//! Player state machine and its vocabulary.
//!
//! The player's full visual state is the triple (screen placement, playback
//! status, lock status). The machine computes the next triple and a list of
//! one-shot side-effect requests for each incoming event; it never touches
//! rendering.

pub mod effect;
pub mod event;
pub mod lock;
pub mod machine;
pub mod newtypes;
pub mod placement;
pub mod playback;
pub mod surface;

// Re-export commonly used types
pub use effect::SideEffect;
pub use event::PlayerEvent;
pub use lock::LockStatus;
pub use machine::{PlayerState, PlayerStateMachine, Transition};
pub use newtypes::{LoadEpoch, PlaybackSpeed, SliderPosition};
pub use placement::{MaximizedMode, ScreenPlacement};
pub use playback::{HideReason, PlaybackStatus};
pub use surface::{ControlSurface, LockControlPosition};
