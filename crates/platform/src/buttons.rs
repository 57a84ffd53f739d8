//! Button action programming.
//!
//! The button driver holds a table of (mode, button, press type) slots.
//! The display task programs what each slot posts; the driver sends the
//! programmed message from its debounce state machine.

use messaging::{DisplayMode, MsgType};

/// Physical button identity.
///
/// `D` is the backlight button and `E` is not populated on this board, so
/// page tables that index slots 0-4 remap those two positions upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ButtonIndex {
    /// Top right.
    A = 0,
    /// Middle right.
    B = 1,
    /// Bottom right.
    C = 2,
    /// Backlight button (bottom left).
    D = 3,
    /// Not populated on this board.
    E = 4,
    /// Top left.
    F = 5,
    /// Middle left (pound).
    Pound = 6,
}

impl ButtonIndex {
    /// Number of physical buttons.
    pub const COUNT: usize = 7;

    /// Button from its table index, `None` past the end.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(ButtonIndex::A),
            1 => Some(ButtonIndex::B),
            2 => Some(ButtonIndex::C),
            3 => Some(ButtonIndex::D),
            4 => Some(ButtonIndex::E),
            5 => Some(ButtonIndex::F),
            6 => Some(ButtonIndex::Pound),
            _ => None,
        }
    }
}

/// Debounce classification of one press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PressType {
    /// Sent as soon as the press is debounced.
    Immediate = 0,
    /// Sent on release of a short press.
    Pressed = 1,
    /// Sent when the press passes the hold threshold.
    Hold = 2,
    /// Sent when the press passes the long-hold threshold.
    LongHold = 3,
}

/// Programs the button driver's action table.
pub trait ButtonDispatch {
    /// Bind a slot: the driver will post `msg_type`/`options` when the
    /// press occurs in `mode`. Rebinding overwrites the previous action.
    fn enable_action(
        &mut self,
        mode: DisplayMode,
        button: ButtonIndex,
        press: PressType,
        msg_type: MsgType,
        options: u8,
    );

    /// Clear a slot so the press posts nothing in `mode`.
    fn disable_action(&mut self, mode: DisplayMode, button: ButtonIndex, press: PressType);
}
