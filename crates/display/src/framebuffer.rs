//! The display task's local frame buffer.
//!
//! 96 rows of 12 bytes, one bit per pixel, kept in the panel's wire format
//! so a region can go straight to the transport. The row address byte is
//! written once at construction and never again; blits only touch data.

use platform::{LcdRow, LCD_BYTES_PER_ROW, LCD_ROWS};

/// The full-screen composition buffer.
pub struct FrameBuffer {
    rows: [LcdRow; LCD_ROWS],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// A cleared buffer with row addresses pre-written.
    #[must_use]
    pub fn new() -> Self {
        let mut rows = [LcdRow::blank(0); LCD_ROWS];
        for (index, row) in rows.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            {
                *row = LcdRow::blank(index as u8);
            }
        }
        FrameBuffer { rows }
    }

    /// Fill `count` full-width rows starting at `start` with `value`.
    pub fn fill(&mut self, start: usize, count: usize, value: u8) {
        let end = start.saturating_add(count).min(LCD_ROWS);
        for row in self.rows.iter_mut().take(end).skip(start) {
            row.data = [value; LCD_BYTES_PER_ROW];
        }
    }

    /// Full-width row blit from a packed image.
    ///
    /// `image` holds `count * 12` bytes, row-major. Rows past the bottom of
    /// the screen are dropped.
    pub fn copy_rows(&mut self, image: &[u8], start: usize, count: usize) {
        for source in 0..count {
            let dest = start.saturating_add(source);
            if dest >= LCD_ROWS {
                break;
            }
            let offset = source.saturating_mul(LCD_BYTES_PER_ROW);
            if let Some(src) = image.get(offset..offset.saturating_add(LCD_BYTES_PER_ROW)) {
                #[allow(clippy::indexing_slicing)] // Safety: dest < LCD_ROWS checked above
                self.rows[dest].data.copy_from_slice(src);
            }
        }
    }

    /// Sub-rectangle blit from a packed image.
    ///
    /// `image` holds `n_rows * n_cols` bytes, row-major; `start_col` and
    /// `n_cols` are in bytes (8-pixel groups).
    pub fn copy_columns(
        &mut self,
        image: &[u8],
        start_row: usize,
        n_rows: usize,
        start_col: usize,
        n_cols: usize,
    ) {
        let mut source = 0;
        for row_offset in 0..n_rows {
            let dest_row = start_row.saturating_add(row_offset);
            if dest_row >= LCD_ROWS {
                break;
            }
            for col_offset in 0..n_cols {
                let dest_col = start_col.saturating_add(col_offset);
                if dest_col < LCD_BYTES_PER_ROW {
                    if let Some(byte) = image.get(source) {
                        #[allow(clippy::indexing_slicing)] // Safety: dest_row and dest_col bounds checked above
                        {
                            self.rows[dest_row].data[dest_col] = *byte;
                        }
                    }
                }
                source = source.saturating_add(1);
            }
        }
    }

    /// Bit-invert `count` rows starting at `start`.
    pub fn invert_rows(&mut self, start: usize, count: usize) {
        let end = start.saturating_add(count).min(LCD_ROWS);
        for row in self.rows.iter_mut().take(end).skip(start) {
            for byte in &mut row.data {
                *byte = !*byte;
            }
        }
    }

    /// OR a single pixel on. Out-of-range coordinates are dropped.
    #[allow(clippy::indexing_slicing)] // Safety: y < LCD_ROWS and x / 8 < LCD_BYTES_PER_ROW checked above
    pub fn set_pixel(&mut self, x: usize, y: usize) {
        if y < LCD_ROWS && x < LCD_BYTES_PER_ROW * 8 {
            self.rows[y].data[x / 8] |= 1 << (x % 8);
        }
    }

    /// OR `mask` into the byte at (`row`, `col`).
    #[allow(clippy::indexing_slicing)] // Safety: row and col bounds checked above
    pub fn or_byte(&mut self, row: usize, col: usize, mask: u8) {
        if row < LCD_ROWS && col < LCD_BYTES_PER_ROW {
            self.rows[row].data[col] |= mask;
        }
    }

    /// Write a full row's data bytes, leaving the address byte alone.
    #[allow(clippy::indexing_slicing)] // Safety: row < LCD_ROWS checked above
    pub fn set_row_data(&mut self, row: usize, data: [u8; LCD_BYTES_PER_ROW]) {
        if row < LCD_ROWS {
            self.rows[row].data = data;
        }
    }

    /// Borrow `count` wire-format rows starting at `start`.
    #[must_use]
    pub fn region(&self, start: usize, count: usize) -> &[LcdRow] {
        let end = start.saturating_add(count).min(LCD_ROWS);
        self.rows.get(start..end).unwrap_or(&[])
    }

    /// Data bytes of one row.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // Safety: index clamped to LCD_ROWS - 1
    pub fn row_data(&self, row: usize) -> &[u8; LCD_BYTES_PER_ROW] {
        &self.rows[row.min(LCD_ROWS - 1)].data
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)] // Assertion math in tests
mod tests {
    use super::*;

    #[test]
    fn test_row_addresses_are_one_based_and_stable() {
        let mut buffer = FrameBuffer::new();
        for (index, row) in buffer.region(0, LCD_ROWS).iter().enumerate() {
            assert_eq!(usize::from(row.row), index + 1);
        }

        buffer.fill(0, LCD_ROWS, 0xFF);
        buffer.invert_rows(0, LCD_ROWS);
        buffer.copy_rows(&[0xAA; 24], 10, 2);
        buffer.set_pixel(5, 5);
        for (index, row) in buffer.region(0, LCD_ROWS).iter().enumerate() {
            assert_eq!(usize::from(row.row), index + 1);
        }
    }

    #[test]
    fn test_fill_is_clipped_to_the_panel() {
        let mut buffer = FrameBuffer::new();
        buffer.fill(90, 20, 0xFF);
        assert_eq!(buffer.row_data(95), &[0xFF; LCD_BYTES_PER_ROW]);
        assert_eq!(buffer.row_data(89), &[0x00; LCD_BYTES_PER_ROW]);
    }

    #[test]
    fn test_copy_columns_writes_sub_rectangle_only() {
        let mut buffer = FrameBuffer::new();
        let image = [0xF0; 8];
        buffer.copy_columns(&image, 4, 2, 3, 4);

        assert_eq!(buffer.row_data(4)[3], 0xF0);
        assert_eq!(buffer.row_data(4)[6], 0xF0);
        assert_eq!(buffer.row_data(4)[2], 0x00);
        assert_eq!(buffer.row_data(4)[7], 0x00);
        assert_eq!(buffer.row_data(6)[3], 0x00);
    }

    #[test]
    fn test_set_pixel_bit_layout() {
        let mut buffer = FrameBuffer::new();
        buffer.set_pixel(0, 0);
        buffer.set_pixel(9, 0);
        assert_eq!(buffer.row_data(0)[0], 0x01);
        assert_eq!(buffer.row_data(0)[1], 0x02);
    }
}
