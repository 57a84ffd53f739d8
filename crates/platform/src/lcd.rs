//! Row-addressed LCD transport.
//!
//! The panel is 96x96 with one bit per pixel, written a whole row at a
//! time. Each row frame carries a 1-based line address, twelve data bytes
//! and a trailing dummy byte the controller clocks through before latching.

use thiserror_no_std::Error;

/// Visible rows on the panel.
pub const LCD_ROWS: usize = 96;
/// Visible columns on the panel.
pub const LCD_COLUMNS: usize = 96;
/// Data bytes per row (one bit per pixel).
pub const LCD_BYTES_PER_ROW: usize = 12;

/// One row frame in the panel's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct LcdRow {
    /// 1-based line address.
    pub row: u8,
    /// Pixel data, bit 0 of byte 0 is the leftmost pixel.
    pub data: [u8; LCD_BYTES_PER_ROW],
    /// Trailing byte clocked out after the data.
    pub dummy: u8,
}

impl LcdRow {
    /// A blank frame addressing display row `index` (0-based).
    #[must_use]
    pub const fn blank(index: u8) -> Self {
        LcdRow {
            row: index.saturating_add(1),
            data: [0; LCD_BYTES_PER_ROW],
            dummy: 0,
        }
    }
}

/// Transport failure writing to the panel.
#[derive(Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// The SPI transfer failed or timed out.
    #[error("lcd bus transfer failed")]
    Bus,
}

/// Writes row frames to the panel.
pub trait LcdTransport {
    /// Transport error type.
    type Error: core::fmt::Debug;

    /// Write a contiguous run of row frames.
    fn write_rows(&mut self, rows: &[LcdRow]) -> Result<(), Self::Error>;

    /// Clear the whole panel with the controller's clear command.
    fn clear(&mut self) -> Result<(), Self::Error>;
}
