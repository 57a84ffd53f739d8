//! Font metrics and glyph tables.
//!
//! Text fonts share one 5x7 base face; the larger faces render it at 2x.
//! The time face and the status glyphs are index-addressed rather than
//! ASCII-addressed, matching the host protocol's digit indices.
//!
//! Glyph rows are stored top to bottom with bit 0 as the leftmost pixel,
//! the same bit order as the frame buffer.

/// Index of the colon glyph in the time face.
pub const TIME_COLON: u8 = 10;
/// Index of the blank glyph in the time face.
pub const TIME_SPACE: u8 = 11;

/// Status glyph indices.
pub mod status_icon {
    /// Bluetooth mark.
    pub const BLUETOOTH: u8 = 0;
    /// Phone-link mark.
    pub const PHONE: u8 = 1;
    /// Charging spark.
    pub const SPARK: u8 = 2;
    /// Battery outline, empty.
    pub const BATTERY_EMPTY: u8 = 3;
    /// Battery outline, half full.
    pub const BATTERY_HALF: u8 = 4;
    /// Battery outline, full.
    pub const BATTERY_FULL: u8 = 5;
    /// Strike-through drawn over a disabled mark.
    pub const CROSS: u8 = 6;
}

/// The available faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Small text, date row.
    Watch5,
    /// Regular text, status and info pages.
    Watch7,
    /// Banner text, 2x scale.
    Watch16,
    /// Large clock digits, index-addressed, 2x scale.
    TallTime,
    /// Seconds digits beside the clock.
    Seconds,
    /// Index-addressed status glyphs.
    StatusIcons,
}

impl Font {
    /// Integer pixel scale applied to the base glyph.
    #[must_use]
    pub fn scale(self) -> u8 {
        match self {
            Font::Watch16 | Font::TallTime => 2,
            _ => 1,
        }
    }

    /// Rendered glyph height in pixels.
    #[must_use]
    pub fn height(self) -> u8 {
        let base: u8 = match self {
            Font::StatusIcons => 10,
            _ => 7,
        };
        base.saturating_mul(self.scale())
    }

    /// Blank pixel columns after each glyph (rendered scale).
    #[must_use]
    pub fn spacing(self) -> u8 {
        match self {
            Font::Watch5 => 1,
            Font::TallTime => 2,
            _ => 1,
        }
    }

    /// Glyph for `code`, or `None` when the face has no such glyph.
    #[must_use]
    pub fn glyph(self, code: u8) -> Option<Glyph> {
        match self {
            Font::TallTime => match code {
                0..=9 => text_glyph(code.saturating_add(b'0')),
                TIME_COLON => text_glyph(b':'),
                TIME_SPACE => Some(Glyph {
                    width: 5,
                    rows: &BLANK_5X7,
                }),
                _ => None,
            },
            Font::Seconds => match code {
                0..=9 => text_glyph(code.saturating_add(b'0')),
                _ => None,
            },
            Font::StatusIcons => status_glyph(code),
            _ => text_glyph(code),
        }
    }
}

/// One base glyph: rows top to bottom, bit 0 leftmost.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    /// Pixel width before scaling.
    pub width: u8,
    /// Row bitmaps, one byte per row.
    pub rows: &'static [u8],
}

const BLANK_5X7: [u8; 7] = [0; 7];

macro_rules! face {
    ($($row:expr),* $(,)?) => {
        [$($row),*]
    };
}

/// 5x7 base face, digits.
static DIGITS_5X7: [[u8; 7]; 10] = [
    face![0x0E, 0x11, 0x19, 0x15, 0x13, 0x11, 0x0E], // 0
    face![0x04, 0x06, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    face![0x0E, 0x11, 0x10, 0x08, 0x04, 0x02, 0x1F], // 2
    face![0x1F, 0x08, 0x04, 0x08, 0x10, 0x11, 0x0E], // 3
    face![0x08, 0x0C, 0x0A, 0x09, 0x1F, 0x08, 0x08], // 4
    face![0x1F, 0x01, 0x0F, 0x10, 0x10, 0x11, 0x0E], // 5
    face![0x0C, 0x02, 0x01, 0x0F, 0x11, 0x11, 0x0E], // 6
    face![0x1F, 0x10, 0x08, 0x04, 0x02, 0x02, 0x02], // 7
    face![0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    face![0x0E, 0x11, 0x11, 0x1E, 0x10, 0x08, 0x06], // 9
];

/// 5x7 base face, A-Z.
static LETTERS_5X7: [[u8; 7]; 26] = [
    face![0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    face![0x0F, 0x11, 0x11, 0x0F, 0x11, 0x11, 0x0F], // B
    face![0x0E, 0x11, 0x01, 0x01, 0x01, 0x11, 0x0E], // C
    face![0x0F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0F], // D
    face![0x1F, 0x01, 0x01, 0x0F, 0x01, 0x01, 0x1F], // E
    face![0x1F, 0x01, 0x01, 0x0F, 0x01, 0x01, 0x01], // F
    face![0x0E, 0x11, 0x01, 0x1D, 0x11, 0x11, 0x0E], // G
    face![0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    face![0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    face![0x1C, 0x08, 0x08, 0x08, 0x08, 0x09, 0x06], // J
    face![0x11, 0x09, 0x05, 0x03, 0x05, 0x09, 0x11], // K
    face![0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x1F], // L
    face![0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    face![0x11, 0x13, 0x15, 0x19, 0x11, 0x11, 0x11], // N
    face![0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    face![0x0F, 0x11, 0x11, 0x0F, 0x01, 0x01, 0x01], // P
    face![0x0E, 0x11, 0x11, 0x11, 0x15, 0x09, 0x16], // Q
    face![0x0F, 0x11, 0x11, 0x0F, 0x05, 0x09, 0x11], // R
    face![0x1E, 0x01, 0x01, 0x0E, 0x10, 0x10, 0x0F], // S
    face![0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    face![0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    face![0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    face![0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    face![0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    face![0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    face![0x1F, 0x10, 0x08, 0x04, 0x02, 0x01, 0x1F], // Z
];

static PUNCT_SPACE: [u8; 7] = [0; 7];
static PUNCT_DOT: [u8; 7] = face![0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x03];
static PUNCT_COLON: [u8; 7] = face![0x00, 0x06, 0x06, 0x00, 0x06, 0x06, 0x00];
static PUNCT_DASH: [u8; 7] = face![0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00];
static PUNCT_SLASH: [u8; 7] = face![0x10, 0x10, 0x08, 0x04, 0x02, 0x01, 0x01];

#[allow(clippy::arithmetic_side_effects)] // Safety: each arm subtracts its own range start
#[allow(clippy::indexing_slicing)] // Safety: ch - start < table length within each range arm
fn text_glyph(ch: u8) -> Option<Glyph> {
    let rows: &'static [u8] = match ch {
        b'0'..=b'9' => &DIGITS_5X7[usize::from(ch - b'0')],
        b'A'..=b'Z' => &LETTERS_5X7[usize::from(ch - b'A')],
        b'a'..=b'z' => &LETTERS_5X7[usize::from(ch - b'a')],
        b' ' => &PUNCT_SPACE,
        b'.' => return Some(Glyph { width: 2, rows: &PUNCT_DOT }),
        b':' => return Some(Glyph { width: 3, rows: &PUNCT_COLON }),
        b'-' => &PUNCT_DASH,
        b'/' => &PUNCT_SLASH,
        _ => return None,
    };
    Some(Glyph { width: 5, rows })
}

/// 8x10 status glyphs.
static STATUS_8X10: [[u8; 10]; 7] = [
    // bluetooth
    face![0x10, 0x30, 0x52, 0x94, 0x58, 0x34, 0x52, 0x91, 0x30, 0x10],
    // phone
    face![0x3C, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x42, 0x3C],
    // spark
    face![0x20, 0x30, 0x18, 0x0C, 0x3E, 0x7C, 0x30, 0x18, 0x0C, 0x04],
    // battery empty
    face![0x18, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E],
    // battery half
    face![0x18, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x7E, 0x7E, 0x7E],
    // battery full
    face![0x18, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E],
    // cross
    face![0x81, 0x42, 0x24, 0x18, 0x18, 0x18, 0x18, 0x24, 0x42, 0x81],
];

fn status_glyph(code: u8) -> Option<Glyph> {
    STATUS_8X10
        .get(usize::from(code))
        .map(|rows| Glyph { width: 8, rows })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_time_face_covers_all_indices() {
        for code in 0..=TIME_SPACE {
            assert!(Font::TallTime.glyph(code).is_some(), "index {code}");
        }
        assert!(Font::TallTime.glyph(TIME_SPACE + 1).is_none());
    }

    #[test]
    fn test_lowercase_folds_to_uppercase() {
        let upper = Font::Watch7.glyph(b'M').unwrap();
        let lower = Font::Watch7.glyph(b'm').unwrap();
        assert_eq!(upper.rows, lower.rows);
    }

    #[test]
    fn test_unknown_glyph_is_none() {
        assert!(Font::Watch7.glyph(b'@').is_none());
        assert!(Font::Seconds.glyph(10).is_none());
    }

    #[test]
    fn test_scaled_faces_report_scaled_height() {
        assert_eq!(Font::Watch7.height(), 7);
        assert_eq!(Font::Watch16.height(), 14);
        assert_eq!(Font::TallTime.height(), 14);
        assert_eq!(Font::StatusIcons.height(), 10);
    }

    #[test]
    fn test_glyph_rows_match_face_height() {
        for code in [b'0', b'A', b' ', b'.', b':'] {
            assert_eq!(Font::Watch7.glyph(code).unwrap().rows.len(), 7);
        }
        for code in 0..7 {
            assert_eq!(Font::StatusIcons.glyph(code).unwrap().rows.len(), 10);
        }
    }
}
