//! Bitmap assets and their fixed screen coordinates.
//!
//! The splash, QR code and AM/PM marks are the shipped artwork. The menu
//! and status icons are simple placeholder glyphs in the same geometry;
//! replacing them with real artwork only means swapping the byte tables.

use platform::LCD_BYTES_PER_ROW;

/// First screen row of the splash image.
pub const SPLASH_START_ROW: usize = 29;
/// Height of the splash image.
pub const SPLASH_ROWS: usize = 32;

/// First screen row of the QR code.
pub const BAR_CODE_START_ROW: usize = 27;
/// Height of the QR code.
pub const BAR_CODE_ROWS: usize = 42;

/// Height of the separator used on the status page.
pub const WAVY_LINE_ROWS: usize = 5;

/// Menu/status icon geometry: 10 rows by 4 byte columns.
pub const ICON_ROWS: usize = 10;
/// Icon width in byte columns.
pub const ICON_COLS: usize = 4;

/// Byte column of icons beside the left buttons.
pub const LEFT_BUTTON_COLUMN: usize = 0;
/// Byte column of icons beside the right buttons.
pub const RIGHT_BUTTON_COLUMN: usize = 8;
/// Icon row aligned with buttons A and F.
pub const BUTTON_ICON_A_F_ROW: usize = 5;
/// Icon row aligned with buttons B and E.
pub const BUTTON_ICON_B_E_ROW: usize = 43;
/// Icon row aligned with buttons C and D.
pub const BUTTON_ICON_C_D_ROW: usize = 81;

/// Byte columns of the three status-page icons.
pub const LEFT_STATUS_ICON_COLUMN: usize = 0;
/// Centre status icon byte column.
pub const CENTER_STATUS_ICON_COLUMN: usize = 4;
/// Right status icon byte column.
pub const RIGHT_STATUS_ICON_COLUMN: usize = 8;

/// Boot splash, row-major, full width.
pub static SPLASH: [u8; SPLASH_ROWS * LCD_BYTES_PER_ROW] = [
    0x00, 0x00, 0x00, 0x00, 0x30, 0x60, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x30, 0x60, 0xC0, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0xC0, 0x01, 0xE0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x70, 0xF0, 0x40, 0xE1, 0xFF, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xD8, 0xD8, 0x60, 0x63, 0xE0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xD8, 0xD8, 0x60, 0x63, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xC8, 0x58, 0x34, 0x26, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x8C, 0x0D, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0E, 0x8C, 0x0D, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFE, 0x0F, 0x05, 0x1E, 0x1C, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0E, 0x00, 0x07, 0x1C, 0x1C, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x30, 0x18, 0xFC, 0xFC, 0x70, 0x04, 0x00, 0x31, 0xFC, 0xE1, 0x83, 0x40,
    0x30, 0x18, 0xFC, 0xFC, 0x70, 0x04, 0x02, 0x31, 0x20, 0x18, 0x8C, 0x40,
    0x70, 0x1C, 0x0C, 0x30, 0x70, 0x08, 0x82, 0x30, 0x20, 0x04, 0x88, 0x40,
    0x78, 0x3C, 0x0C, 0x30, 0xD8, 0x08, 0x85, 0x48, 0x20, 0x04, 0x80, 0x40,
    0xD8, 0x36, 0x0C, 0x30, 0xD8, 0x08, 0x85, 0x48, 0x20, 0x02, 0x80, 0x40,
    0xD8, 0x36, 0xFC, 0x30, 0x8C, 0x91, 0x48, 0xCC, 0x20, 0x02, 0x80, 0x7F,
    0xDC, 0x76, 0xFC, 0x30, 0x8C, 0x91, 0x48, 0x84, 0x20, 0x02, 0x80, 0x40,
    0x8C, 0x63, 0x0C, 0x30, 0xFC, 0x91, 0x48, 0x84, 0x20, 0x02, 0x80, 0x40,
    0x8C, 0x63, 0x0C, 0x30, 0xFE, 0xA3, 0x28, 0xFE, 0x21, 0x04, 0x80, 0x40,
    0x86, 0xC3, 0x0C, 0x30, 0x06, 0xA3, 0x28, 0x02, 0x21, 0x04, 0x88, 0x40,
    0x06, 0xC1, 0xFC, 0x30, 0x03, 0x46, 0x10, 0x01, 0x22, 0x18, 0x8C, 0x40,
    0x06, 0xC1, 0xFC, 0x30, 0x03, 0x46, 0x10, 0x01, 0x22, 0xE0, 0x83, 0x40,
];

/// QR code for the companion app, row-major, full width.
pub static BAR_CODE: [u8; BAR_CODE_ROWS * LCD_BYTES_PER_ROW] = [
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0xFC, 0xCF, 0xFF, 0x0F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0xFC, 0xCF, 0xFF, 0x0F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xC0, 0xF0, 0xC0, 0x00, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xC0, 0xF0, 0xC0, 0x00, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0xCC, 0xCC, 0xFC, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0xCC, 0xCC, 0xFC, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0x3C, 0xC0, 0xFC, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0x3C, 0xC0, 0xFC, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0xFC, 0xCF, 0xFC, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0xFC, 0xCF, 0xFC, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0xCF, 0x00, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xC0, 0x00, 0xCF, 0x00, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0xCC, 0xCC, 0xFF, 0x0F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0xCC, 0xCC, 0xFF, 0x0F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xC3, 0xCC, 0x3F, 0xFC, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xC3, 0xCC, 0x3F, 0xFC, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xF0, 0x33, 0x0C, 0xFF, 0x0C, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xF0, 0x33, 0x0C, 0xFF, 0x0C, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xFC, 0xF0, 0xCF, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xFC, 0xF0, 0xCF, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x30, 0xF3, 0x03, 0x33, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x30, 0xF3, 0x03, 0x33, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xF3, 0x0C, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xF3, 0x0C, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0xFF, 0x03, 0x03, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0xFF, 0x03, 0x03, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0x30, 0xCC, 0x30, 0x0F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0x30, 0xCC, 0x30, 0x0F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xC0, 0xF0, 0x33, 0x3F, 0x0F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xC0, 0xF0, 0x33, 0x3F, 0x0F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0x30, 0x30, 0xCC, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0x30, 0x30, 0xCC, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0xCC, 0xCF, 0xC0, 0x03, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0xCC, 0xCF, 0xC0, 0x03, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0xFC, 0x33, 0xF3, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xCC, 0xCF, 0xFC, 0x33, 0xF3, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xC0, 0x3C, 0xCF, 0xC3, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x0C, 0xC0, 0x3C, 0xCF, 0xC3, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0x3C, 0x03, 0xF3, 0x03, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0x3C, 0x03, 0xF3, 0x03, 0x00, 0x00, 0x00,
];

/// "AM" mark, 4 byte columns of 10 rows, column-major.
pub static AM: [u8; 40] = [
    0x00, 0x00, 0x9C, 0xA2, 0xA2, 0xA2, 0xBE, 0xA2, 0xA2, 0x00,
    0x00, 0x00, 0x08, 0x0D, 0x0A, 0x08, 0x08, 0x08, 0x08, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// "PM" mark, same layout as [`AM`].
pub static PM: [u8; 40] = [
    0x00, 0x00, 0x9E, 0xA2, 0xA2, 0x9E, 0x82, 0x82, 0x82, 0x00,
    0x00, 0x00, 0x08, 0x0D, 0x0A, 0x08, 0x08, 0x08, 0x08, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Separator line on the status page, row-major, full width.
pub static WAVY_LINE: [u8; WAVY_LINE_ROWS * LCD_BYTES_PER_ROW] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
    0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// ── Placeholder icon glyphs, 10 rows by 4 bytes, row-major ──────────────

type Icon = [u8; ICON_ROWS * ICON_COLS];

/// Tick mark: the feature is on.
pub static ICON_CHECK: Icon = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x80, 0x00,
    0x00, 0x00, 0x40, 0x00,
    0x00, 0x00, 0x20, 0x00,
    0x04, 0x00, 0x10, 0x00,
    0x08, 0x00, 0x08, 0x00,
    0x10, 0x00, 0x04, 0x00,
    0x20, 0x01, 0x02, 0x00,
    0xC0, 0x80, 0x01, 0x00,
    0x00, 0x40, 0x00, 0x00,
];

/// Cross mark: the feature is off.
pub static ICON_CROSS: Icon = [
    0x00, 0x00, 0x00, 0x00,
    0x04, 0x00, 0x80, 0x00,
    0x08, 0x00, 0x40, 0x00,
    0x10, 0x00, 0x20, 0x00,
    0x20, 0x01, 0x10, 0x00,
    0x40, 0x82, 0x08, 0x00,
    0x20, 0x01, 0x10, 0x00,
    0x10, 0x00, 0x20, 0x00,
    0x08, 0x00, 0x40, 0x00,
    0x04, 0x00, 0x80, 0x00,
];

/// Question mark: the stack is still initialising.
pub static ICON_QUESTION: Icon = [
    0x00, 0x3C, 0x00, 0x00,
    0x00, 0x42, 0x00, 0x00,
    0x00, 0x40, 0x00, 0x00,
    0x00, 0x20, 0x00, 0x00,
    0x00, 0x10, 0x00, 0x00,
    0x00, 0x08, 0x00, 0x00,
    0x00, 0x08, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x08, 0x00, 0x00,
    0x00, 0x08, 0x00, 0x00,
];

/// Circular-arrow reset glyph.
pub static ICON_RESET: Icon = [
    0x00, 0x3C, 0x00, 0x00,
    0x00, 0x42, 0x00, 0x00,
    0x00, 0x81, 0x08, 0x00,
    0x00, 0x81, 0x0C, 0x00,
    0x00, 0x81, 0x0E, 0x00,
    0x00, 0x81, 0x00, 0x00,
    0x00, 0x81, 0x00, 0x00,
    0x00, 0x42, 0x00, 0x00,
    0x00, 0x3C, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Right-pointing next-page arrow.
pub static ICON_NEXT: Icon = [
    0x00, 0x10, 0x00, 0x00,
    0x00, 0x30, 0x00, 0x00,
    0x00, 0x70, 0x00, 0x00,
    0xFC, 0xF1, 0x00, 0x00,
    0xFC, 0xF1, 0x01, 0x00,
    0xFC, 0xF1, 0x00, 0x00,
    0x00, 0x70, 0x00, 0x00,
    0x00, 0x30, 0x00, 0x00,
    0x00, 0x10, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Backlight bulb.
pub static ICON_LED: Icon = [
    0x00, 0x18, 0x00, 0x00,
    0x00, 0x24, 0x00, 0x00,
    0x00, 0x42, 0x00, 0x00,
    0x00, 0x42, 0x00, 0x00,
    0x00, 0x42, 0x00, 0x00,
    0x00, 0x24, 0x00, 0x00,
    0x00, 0x18, 0x00, 0x00,
    0x00, 0x18, 0x00, 0x00,
    0x00, 0x18, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Exit-door glyph.
pub static ICON_EXIT: Icon = [
    0x3E, 0x00, 0x00, 0x00,
    0x22, 0x00, 0x00, 0x00,
    0x22, 0x10, 0x00, 0x00,
    0x22, 0x30, 0x00, 0x00,
    0x22, 0x7F, 0x00, 0x00,
    0x22, 0x30, 0x00, 0x00,
    0x22, 0x10, 0x00, 0x00,
    0x22, 0x00, 0x00, 0x00,
    0x3E, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Bluetooth rune.
pub static ICON_BLUETOOTH: Icon = [
    0x10, 0x00, 0x00, 0x00,
    0x30, 0x00, 0x00, 0x00,
    0x52, 0x00, 0x00, 0x00,
    0x94, 0x00, 0x00, 0x00,
    0x58, 0x00, 0x00, 0x00,
    0x34, 0x00, 0x00, 0x00,
    0x52, 0x00, 0x00, 0x00,
    0x91, 0x00, 0x00, 0x00,
    0x30, 0x00, 0x00, 0x00,
    0x10, 0x00, 0x00, 0x00,
];

/// Handset glyph.
pub static ICON_PHONE: Icon = [
    0x3C, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x5A, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x00, 0x00,
];

/// Battery outline, empty.
pub static ICON_BATTERY_LOW: Icon = [
    0x18, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
];

/// Battery outline, half full.
pub static ICON_BATTERY_MEDIUM: Icon = [
    0x18, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
];

/// Battery outline, full.
pub static ICON_BATTERY_FULL: Icon = [
    0x18, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
];

/// Battery with charging spark.
pub static ICON_BATTERY_CHARGING: Icon = [
    0x18, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x52, 0x00, 0x00, 0x00,
    0x4A, 0x00, 0x00, 0x00,
    0x46, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
    0x62, 0x00, 0x00, 0x00,
    0x52, 0x00, 0x00, 0x00,
    0x4A, 0x00, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00,
];

/// Seconds toggle glyph (small clock face).
pub static ICON_SECONDS: Icon = [
    0x3C, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x91, 0x00, 0x00, 0x00,
    0x91, 0x00, 0x00, 0x00,
    0xB1, 0x00, 0x00, 0x00,
    0x81, 0x00, 0x00, 0x00,
    0x91, 0x00, 0x00, 0x00,
    0x91, 0x00, 0x00, 0x00,
    0x42, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x00, 0x00,
];

/// Invert-display glyph (half-filled square).
pub static ICON_INVERT: Icon = [
    0xFF, 0x0F, 0x00, 0x00,
    0x01, 0x0F, 0x00, 0x00,
    0x01, 0x0F, 0x00, 0x00,
    0x01, 0x0F, 0x00, 0x00,
    0x01, 0x0F, 0x00, 0x00,
    0x01, 0x0F, 0x00, 0x00,
    0x01, 0x0F, 0x00, 0x00,
    0x01, 0x0F, 0x00, 0x00,
    0x01, 0x0F, 0x00, 0x00,
    0xFF, 0x0F, 0x00, 0x00,
];
