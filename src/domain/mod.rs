// SPDX-License-Identifier: MPL-2.0
//! Domain layer for the player core.
//!
//! Value objects and the player state machine, independent of any
//! presentation or transport concerns.

pub mod player;
