//! Hardware abstraction layer for the watch.
//!
//! This crate provides trait-based abstractions for every hardware
//! collaborator the application cores talk to, enabling development and
//! testing without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate)
//!         ↓
//! Core Layers (display, sensor)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (Embassy HAL + PAC)
//! ```
//!
//! # Abstractions
//!
//! - [`WallClock`] - real-time clock access
//! - [`PowerMonitor`] - battery voltage and charge state
//! - [`LinkController`] - radio and pairing state
//! - [`LcdTransport`] - row-addressed LCD writes
//! - [`ButtonDispatch`] - per-mode button action programming
//! - [`SettingsStore`] - single-byte non-volatile settings
//! - [`TemplateStore`] - stored display templates
//! - [`SystemControl`] - reset and LED control
//! - [`InterruptLine`] - a maskable external interrupt
//!
//! # Features
//!
//! - `std`: expose the recording mocks to downstream test suites
//! - `hardware`: physical hardware target marker
//! - `defmt`: enable defmt logging derives

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod buttons;
pub mod clock;
pub mod lcd;
pub mod link;
pub mod power;
pub mod settings;
pub mod system;
pub mod templates;

pub mod mocks;

pub use buttons::{ButtonDispatch, ButtonIndex, PressType};
pub use clock::{WallClock, WatchTime};
pub use lcd::{LcdRow, LcdTransport, LCD_BYTES_PER_ROW, LCD_COLUMNS, LCD_ROWS};
pub use link::{ConnectionState, LinkController, PairedDevice};
pub use power::PowerMonitor;
pub use settings::{SettingKey, SettingsStore};
pub use system::{InterruptLine, SystemControl};
pub use templates::{NullTemplates, TemplateStore};
