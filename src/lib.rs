// SPDX-License-Identifier: MPL-2.0
//! `tubelens` is the portable core of a streaming video client.
//!
//! It provides the player screen/playback/lock state machine, the JSON feed
//! and HLS master-playlist plumbing around it, and small supporting pieces
//! (media cache, list-snapshot diffing, user preferences). Rendering is out
//! of scope: the state machine emits side-effect instructions for a host
//! renderer to interpret.

#![doc(html_root_url = "https://docs.rs/tubelens/0.1.0")]

pub mod cache;
pub mod config;
pub mod diff;
pub mod domain;
pub mod error;
pub mod feed;
pub mod playlist;

pub use domain::player::{
    ControlSurface, PlayerEvent, PlayerState, PlayerStateMachine, SideEffect,
};
pub use error::{Error, Result};
