//! Accelerometer sensor core.
//!
//! Register-level driver and message handlers for the KIONIX-family part,
//! independent of any bus implementation: the core is generic over
//! [`embedded_hal::i2c::I2c`] and the platform interrupt line, so the whole
//! module runs against mocks on the host.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod core;
pub mod registers;

pub use config::{InterruptControl, SensorConfig, SidControl};
pub use crate::core::{SensorCore, I2C_ADDRESS};
