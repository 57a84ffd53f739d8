//! Font and shape composition into the frame buffer.
//!
//! A cursor is a writing head of row, byte column and a one-bit column
//! mask. The mask advances leftward through each byte and carries into the
//! next byte column, which is how glyphs end up packed at arbitrary pixel
//! offsets without any shifting of the glyph data.

use platform::{LCD_BYTES_PER_ROW, LCD_ROWS};

use crate::fonts::Font;
use crate::framebuffer::FrameBuffer;
use crate::trig::rotate_point;

/// The compositor's writing head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Top pixel row of the next glyph.
    pub row: u8,
    /// Byte column of the next pixel.
    pub column: u8,
    /// Single-bit selector within the current byte.
    pub mask: u8,
}

impl Cursor {
    /// A cursor at (`row`, byte `column`) with `mask` selecting the pixel.
    #[must_use]
    pub const fn at(row: u8, column: u8, mask: u8) -> Self {
        Cursor { row, column, mask }
    }

    /// Absolute x coordinate of the cursor in pixels.
    #[must_use]
    pub fn pixel_x(&self) -> usize {
        usize::from(self.column)
            .saturating_mul(8)
            .saturating_add(self.mask.trailing_zeros() as usize)
    }

    /// Advance the head by `pixels`, carrying into the next byte column.
    pub fn advance(&mut self, pixels: u8) {
        for _ in 0..pixels {
            self.mask = self.mask.rotate_left(1);
            if self.mask == 0x01 {
                self.column = self.column.saturating_add(1);
            }
        }
    }

    /// `true` while the head is still on the panel.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        usize::from(self.column) < LCD_BYTES_PER_ROW
    }
}

/// OR one glyph into the buffer at the cursor, then advance past it.
///
/// A glyph that would run off the bottom of the panel is skipped with a
/// diagnostic; an unknown code is skipped silently after a log line.
pub fn write_char(buffer: &mut FrameBuffer, cursor: &mut Cursor, font: Font, code: u8) {
    let Some(glyph) = font.glyph(code) else {
        log::debug!("no glyph for code {code:#04x}");
        return;
    };

    let scale = usize::from(font.scale());
    if usize::from(cursor.row).saturating_add(usize::from(font.height())) > LCD_ROWS {
        log::warn!("not enough rows to place glyph");
        return;
    }

    let origin_x = cursor.pixel_x();
    let origin_y = usize::from(cursor.row);
    // Safety: origin is on the 96x96 panel and scale <= 2, so every sum is
    // far below usize::MAX; set_pixel clips anything past the right edge.
    #[allow(clippy::arithmetic_side_effects)]
    for (row_index, row_bits) in glyph.rows.iter().enumerate() {
        for bit in 0..usize::from(glyph.width) {
            if row_bits & (1 << bit) == 0 {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    buffer.set_pixel(
                        origin_x + bit * scale + dx,
                        origin_y + row_index * scale + dy,
                    );
                }
            }
        }
    }

    cursor.advance(glyph.width.saturating_mul(font.scale()));
    cursor.advance(font.spacing());
}

/// Write a string until it ends or the right edge is reached.
pub fn write_str(buffer: &mut FrameBuffer, cursor: &mut Cursor, font: Font, text: &str) {
    for byte in text.bytes() {
        if !cursor.in_bounds() {
            break;
        }
        write_char(buffer, cursor, font, byte);
    }
}

/// Bresenham line between two points, clipped by `set_pixel`.
#[allow(clippy::arithmetic_side_effects)] // Safety: endpoints are panel coordinates, far from i32 overflow
pub fn draw_line(buffer: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let (mut x0, mut y0, mut x1, mut y1) = if steep {
        (y0, x0, y1, x1)
    } else {
        (x0, y0, x1, y1)
    };
    if x0 > x1 {
        core::mem::swap(&mut x0, &mut x1);
        core::mem::swap(&mut y0, &mut y1);
    }

    let delta_x = x1 - x0;
    let delta_y = (y1 - y0).abs();
    let step_y = if y0 < y1 { 1 } else { -1 };
    let mut error = delta_x / 2;
    let mut y = y0;

    for x in x0..=x1 {
        let (px, py) = if steep { (y, x) } else { (x, y) };
        if px >= 0 && py >= 0 {
            #[allow(clippy::cast_sign_loss)]
            buffer.set_pixel(px as usize, py as usize);
        }
        error -= delta_y;
        if error < 0 {
            y += step_y;
            error += delta_x;
        }
    }
}

/// Filled `w` by `h` rectangle with its top-left corner at (`x`, `y`).
pub fn draw_tick(buffer: &mut FrameBuffer, x: usize, y: usize, w: usize, h: usize) {
    for py in y..y.saturating_add(h) {
        for px in x..x.saturating_add(w) {
            buffer.set_pixel(px, py);
        }
    }
}

/// A clock hand: a quad with corners offset from (`x`, `y`) and rotated by
/// `angle` degrees, outlined with four lines.
#[allow(clippy::too_many_arguments)]
#[allow(clippy::arithmetic_side_effects)] // Safety: hand offsets are small panel-relative constants
pub fn draw_hand(
    buffer: &mut FrameBuffer,
    x: i32,
    y: i32,
    top: i32,
    left: i32,
    bottom: i32,
    right: i32,
    angle: i32,
) {
    let x_left = rotate_point(x + left, y, angle);
    let y_left = rotate_point(y, x + left, angle);

    let x_top = rotate_point(x, y + top, angle);
    let y_top = rotate_point(y + top, x, angle);

    let x_right = rotate_point(x + right, y, angle);
    let y_right = rotate_point(y, x + right, angle);

    let x_bottom = rotate_point(x, y + bottom, angle);
    let y_bottom = rotate_point(y + bottom, x, angle);

    draw_line(buffer, x_left, y_left, x_top, y_top);
    draw_line(buffer, x_top, y_top, x_right, y_right);
    draw_line(buffer, x_right, y_right, x_bottom, y_bottom);
    draw_line(buffer, x_bottom, y_bottom, x_left, y_left);
}

/// OR a 4-byte-wide, 10-row icon stored column-major into the buffer.
///
/// Used for the AM/PM marks, which overlay the first clock digit and so
/// must not clear pixels beneath them.
#[allow(clippy::arithmetic_side_effects)] // Safety: row < 10, column < 4; or_byte clips the offsets
pub fn write_icon_4w10h(
    buffer: &mut FrameBuffer,
    icon: &[u8],
    row_offset: usize,
    column_offset: usize,
) {
    for column in 0..4 {
        for row in 0..10 {
            if let Some(byte) = icon.get(row + column * 10) {
                buffer.or_byte(row + row_offset, column + column_offset, *byte);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)] // Tests index into known-length rows
mod tests {
    use super::*;

    #[test]
    fn test_cursor_mask_carries_into_next_byte() {
        let mut cursor = Cursor::at(0, 0, 0x40);
        cursor.advance(1);
        assert_eq!(cursor.mask, 0x80);
        assert_eq!(cursor.column, 0);
        cursor.advance(1);
        assert_eq!(cursor.mask, 0x01);
        assert_eq!(cursor.column, 1);
        assert_eq!(cursor.pixel_x(), 8);
    }

    #[test]
    fn test_write_char_advances_width_plus_spacing() {
        let mut buffer = FrameBuffer::new();
        let mut cursor = Cursor::at(10, 0, 0x01);
        write_char(&mut buffer, &mut cursor, Font::Watch7, b'8');
        assert_eq!(cursor.pixel_x(), 6);
    }

    #[test]
    fn test_write_char_skips_glyph_that_overflows_bottom() {
        let mut buffer = FrameBuffer::new();
        let mut cursor = Cursor::at(92, 0, 0x01);
        write_char(&mut buffer, &mut cursor, Font::Watch7, b'8');
        for row in 92..96 {
            assert_eq!(buffer.row_data(row), &[0; LCD_BYTES_PER_ROW]);
        }
    }

    #[test]
    fn test_horizontal_line_sets_every_pixel() {
        let mut buffer = FrameBuffer::new();
        draw_line(&mut buffer, 2, 5, 9, 5);
        for x in 2..=9 {
            assert!(buffer.row_data(5)[x / 8] & (1 << (x % 8)) != 0);
        }
        assert_eq!(buffer.row_data(4), &[0; LCD_BYTES_PER_ROW]);
    }

    #[test]
    fn test_steep_line_sets_one_pixel_per_row() {
        let mut buffer = FrameBuffer::new();
        draw_line(&mut buffer, 48, 10, 50, 40);
        for y in 10..=40 {
            let set: usize = (0..96)
                .filter(|x| buffer.row_data(y)[x / 8] & (1 << (x % 8)) != 0)
                .count();
            assert_eq!(set, 1, "row {y}");
        }
    }

    #[test]
    fn test_tick_is_a_filled_rectangle() {
        let mut buffer = FrameBuffer::new();
        draw_tick(&mut buffer, 88, 47, 8, 4);
        for y in 47..51 {
            for x in 88..96 {
                assert!(buffer.row_data(y)[x / 8] & (1 << (x % 8)) != 0);
            }
        }
    }

    #[test]
    fn test_icon_blit_ors_instead_of_overwriting() {
        let mut buffer = FrameBuffer::new();
        buffer.or_byte(16, 0, 0x01);
        let icon = [0x80u8; 40];
        write_icon_4w10h(&mut buffer, &icon, 16, 0);
        assert_eq!(buffer.row_data(16)[0], 0x81);
    }
}
