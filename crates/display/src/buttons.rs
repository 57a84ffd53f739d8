//! Per-page button bindings.
//!
//! Each page owns a row of five binding slots. Slots 3 and 4 are remapped
//! upward by two so the backlight button and the unpopulated position keep
//! their fixed meanings; the slots land on buttons F and pound instead.

use messaging::options::{idle_update, menu_button, menu_mode, modify_time, toggle_seconds};
use messaging::{DisplayMode, MsgType};
use platform::{ButtonDispatch, ButtonIndex, PressType};

use crate::pages::Page;

/// What a button slot does on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonBinding {
    /// The edge is disabled on this page.
    Disabled,
    /// The edge posts a message.
    Bind {
        /// Message to post.
        msg: MsgType,
        /// Options byte to post.
        options: u8,
    },
}

use ButtonBinding::{Bind, Disabled};

/// Binding slots per page.
pub const SLOTS_PER_PAGE: usize = 5;

const fn bind(msg: MsgType, options: u8) -> ButtonBinding {
    Bind { msg, options }
}

/// The page-to-action table, indexed by `Page` discriminant then slot.
pub static BUTTON_TABLE: [[ButtonBinding; SLOTS_PER_PAGE]; 10] = [
    // Normal
    [
        bind(MsgType::BarCode, 0),
        bind(MsgType::ToggleSeconds, toggle_seconds::UPDATE_IDLE),
        bind(MsgType::MenuMode, menu_mode::PAGE1),
        bind(MsgType::ListPairedDevices, 0),
        bind(MsgType::WatchStatus, 0),
    ],
    // RadioOnWithPairing
    [
        bind(MsgType::BarCode, 0),
        bind(MsgType::ToggleSeconds, toggle_seconds::UPDATE_IDLE),
        bind(MsgType::MenuMode, menu_mode::PAGE1),
        bind(MsgType::ListPairedDevices, 0),
        bind(MsgType::WatchStatus, 0),
    ],
    // RadioOnWithoutPairing: time setting lives on the boot pages
    [
        bind(MsgType::ModifyTime, modify_time::INCREMENT_MINUTE),
        bind(MsgType::ModifyTime, modify_time::INCREMENT_DOW),
        bind(MsgType::MenuMode, menu_mode::PAGE1),
        bind(MsgType::ListPairedDevices, 0),
        bind(MsgType::ModifyTime, modify_time::INCREMENT_HOUR),
    ],
    // BluetoothOff
    [
        bind(MsgType::ModifyTime, modify_time::INCREMENT_MINUTE),
        bind(MsgType::ModifyTime, modify_time::INCREMENT_DOW),
        bind(MsgType::MenuMode, menu_mode::PAGE1),
        bind(MsgType::ListPairedDevices, 0),
        bind(MsgType::ModifyTime, modify_time::INCREMENT_HOUR),
    ],
    // Menu1
    [
        bind(MsgType::MenuButton, menu_button::TOGGLE_BLUETOOTH),
        bind(MsgType::MenuMode, menu_mode::PAGE2),
        bind(MsgType::MenuButton, menu_button::EXIT),
        bind(MsgType::MenuButton, menu_button::TOGGLE_LINK_ALARM),
        bind(MsgType::MenuButton, menu_button::TOGGLE_DISCOVERABILITY),
    ],
    // Menu2
    [
        Disabled,
        bind(MsgType::MenuMode, menu_mode::PAGE3),
        bind(MsgType::MenuButton, menu_button::EXIT),
        bind(MsgType::MenuButton, menu_button::TOGGLE_SSP),
        bind(MsgType::SoftwareReset, 0),
    ],
    // Menu3
    [
        bind(MsgType::MenuButton, menu_button::TOGGLE_ACCEL),
        bind(MsgType::MenuMode, menu_mode::PAGE1),
        bind(MsgType::MenuButton, menu_button::EXIT),
        bind(MsgType::MenuButton, menu_button::DISPLAY_SECONDS),
        bind(MsgType::MenuButton, menu_button::INVERT_DISPLAY),
    ],
    // ListPairedDevices
    [
        bind(MsgType::BarCode, 0),
        Disabled,
        bind(MsgType::MenuMode, menu_mode::PAGE1),
        bind(MsgType::IdleUpdate, idle_update::FULL),
        bind(MsgType::WatchStatus, 0),
    ],
    // WatchStatus
    [
        bind(MsgType::BarCode, 0),
        Disabled,
        bind(MsgType::MenuMode, menu_mode::PAGE1),
        bind(MsgType::ListPairedDevices, 0),
        bind(MsgType::IdleUpdate, idle_update::FULL),
    ],
    // QrCode
    [
        bind(MsgType::IdleUpdate, idle_update::FULL),
        Disabled,
        bind(MsgType::MenuMode, menu_mode::PAGE1),
        bind(MsgType::ListPairedDevices, 0),
        bind(MsgType::WatchStatus, 0),
    ],
];

/// Bindings row for `page`.
#[must_use]
#[allow(clippy::indexing_slicing)] // Safety: Page has ten discriminants, the table has ten rows
pub fn page_bindings(page: Page) -> &'static [ButtonBinding; SLOTS_PER_PAGE] {
    &BUTTON_TABLE[page as usize]
}

/// The physical button a table slot lands on.
///
/// Slots 3 and 4 skip past the backlight button and the unpopulated
/// position onto F and pound.
#[must_use]
pub fn physical_button(slot: u8) -> ButtonIndex {
    let index = if slot == 3 || slot == 4 {
        slot.saturating_add(2)
    } else {
        slot
    };
    ButtonIndex::from_index(index).unwrap_or(ButtonIndex::A)
}

/// Program the idle-mode button table for `page`.
pub fn configure_page_buttons<B: ButtonDispatch>(dispatch: &mut B, page: Page) {
    // F-pressed doubles as the swapped button-A action on the normal page
    // only; keep it clear everywhere else.
    dispatch.disable_action(DisplayMode::Idle, ButtonIndex::F, PressType::Pressed);

    let bindings = page_bindings(page);
    for (slot, binding) in bindings.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let button = physical_button(slot as u8);
        match binding {
            Bind { msg, options } => {
                dispatch.enable_action(
                    DisplayMode::Idle,
                    button,
                    PressType::Immediate,
                    *msg,
                    *options,
                );
            }
            Disabled => {
                dispatch.disable_action(DisplayMode::Idle, button, PressType::Immediate);
            }
        }
    }

    // On the normal page button A reacts on release instead of on press,
    // so a press-and-hold can reach the hold action without side effects.
    if page == Page::Normal {
        dispatch.disable_action(DisplayMode::Idle, ButtonIndex::A, PressType::Immediate);
        if let Bind { msg, options } = bindings[0] {
            dispatch.enable_action(DisplayMode::Idle, ButtonIndex::A, PressType::Pressed, msg, options);
        }
    } else {
        dispatch.disable_action(DisplayMode::Idle, ButtonIndex::A, PressType::Pressed);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::indexing_slicing)] // Tests index the fixed-size binding table
mod tests {
    use super::*;
    use platform::mocks::MockButtons;

    #[test]
    fn test_slot_remap_skips_backlight_and_unpopulated() {
        assert_eq!(physical_button(0), ButtonIndex::A);
        assert_eq!(physical_button(1), ButtonIndex::B);
        assert_eq!(physical_button(2), ButtonIndex::C);
        assert_eq!(physical_button(3), ButtonIndex::F);
        assert_eq!(physical_button(4), ButtonIndex::Pound);
    }

    #[test]
    fn test_menu_page_installs_all_five_slots() {
        let mut dispatch = MockButtons::default();
        configure_page_buttons(&mut dispatch, Page::Menu1);

        let exit = dispatch
            .action(DisplayMode::Idle, ButtonIndex::C, PressType::Immediate)
            .unwrap();
        assert_eq!(exit.msg_type, MsgType::MenuButton);
        assert_eq!(exit.options, menu_button::EXIT);

        let discover = dispatch
            .action(DisplayMode::Idle, ButtonIndex::Pound, PressType::Immediate)
            .unwrap();
        assert_eq!(discover.options, menu_button::TOGGLE_DISCOVERABILITY);
    }

    #[test]
    fn test_disabled_slot_clears_the_edge() {
        let mut dispatch = MockButtons::default();
        configure_page_buttons(&mut dispatch, Page::Menu1);
        configure_page_buttons(&mut dispatch, Page::WatchStatus);
        assert!(dispatch
            .action(DisplayMode::Idle, ButtonIndex::B, PressType::Immediate)
            .is_none());
    }

    #[test]
    fn test_normal_page_swaps_button_a_to_pressed_edge() {
        let mut dispatch = MockButtons::default();
        configure_page_buttons(&mut dispatch, Page::Normal);

        assert!(dispatch
            .action(DisplayMode::Idle, ButtonIndex::A, PressType::Immediate)
            .is_none());
        let pressed = dispatch
            .action(DisplayMode::Idle, ButtonIndex::A, PressType::Pressed)
            .unwrap();
        assert_eq!(pressed.msg_type, MsgType::BarCode);
    }

    #[test]
    fn test_info_pages_disable_the_pressed_edge_again() {
        let mut dispatch = MockButtons::default();
        configure_page_buttons(&mut dispatch, Page::Normal);
        configure_page_buttons(&mut dispatch, Page::QrCode);
        assert!(dispatch
            .action(DisplayMode::Idle, ButtonIndex::A, PressType::Pressed)
            .is_none());
    }

    #[test]
    fn test_every_page_row_matches_table() {
        for (row, page) in [
            (0, Page::Normal),
            (4, Page::Menu1),
            (9, Page::QrCode),
        ] {
            assert_eq!(page as usize, row);
            let mut dispatch = MockButtons::default();
            configure_page_buttons(&mut dispatch, page);
            for (slot, binding) in BUTTON_TABLE[row].iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let button = physical_button(slot as u8);
                // Button A on Normal moves to the pressed edge.
                let press = if page == Page::Normal && slot == 0 {
                    PressType::Pressed
                } else {
                    PressType::Immediate
                };
                let installed = dispatch.action(DisplayMode::Idle, button, press);
                match binding {
                    Bind { msg, options } => {
                        let action = installed.unwrap();
                        assert_eq!(action.msg_type, *msg);
                        assert_eq!(action.options, *options);
                    }
                    Disabled => assert!(installed.is_none()),
                }
            }
        }
    }
}
