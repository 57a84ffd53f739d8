//! Watch application firmware.
//!
//! Assembles the synchronous cores over the message bus:
//!
//! ```text
//! Application Layer (this crate: task loops, boot wiring)
//!         ↓
//! Core Layers (display, sensor)
//!         ↓
//! Platform HAL (trait abstractions)
//!         ↓
//! Hardware Layer (Embassy HAL + PAC)
//! ```
//!
//! Two tasks own inboxes here: the display task wraps
//! [`display::DisplayCore`] and the background task wraps
//! [`BackgroundTask`] (sensor plus LED housekeeping). Each loop alternates
//! between draining its inbox and a one-second tick that advances the
//! task's [`messaging::TimerService`]. The cores never touch the bus
//! directly, so everything below the task loops runs on the host under
//! `cargo test`.
//!
//! # Features
//!
//! - `hardware` - Build for the STM32L476RG target (Embassy, defmt)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod background;
pub mod board;
pub mod boot;
pub mod tasks;

pub use background::BackgroundTask;
