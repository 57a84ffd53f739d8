//! Page coordinates and the idle page selection rule.

use platform::{ConnectionState, LinkController};

/// Which row of the button-binding table family is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageType {
    /// The watch face and its boot variants.
    #[default]
    Idle,
    /// The three settings menus.
    Menu,
    /// Info screens (status, paired devices, QR code).
    Info,
}

/// Concrete page identity; the discriminant indexes the button table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Page {
    /// The normal watch face.
    Normal = 0,
    /// Boot page: radio on, pairing info present.
    RadioOnWithPairing = 1,
    /// Boot page: radio on, no pairing info.
    RadioOnWithoutPairing = 2,
    /// Boot page: radio off.
    BluetoothOff = 3,
    /// Settings menu, page 1.
    Menu1 = 4,
    /// Settings menu, page 2.
    Menu2 = 5,
    /// Settings menu, page 3.
    Menu3 = 6,
    /// Bond table listing.
    ListPairedDevices = 7,
    /// Status info screen.
    WatchStatus = 8,
    /// QR code info screen.
    QrCode = 9,
}

/// The current page within each page type.
#[derive(Debug, Clone, Copy)]
pub struct CurrentPages {
    /// Active idle variant.
    pub idle: Page,
    /// Active menu page.
    pub menu: Page,
    /// Active info page.
    pub info: Page,
}

impl Default for CurrentPages {
    fn default() -> Self {
        CurrentPages {
            idle: Page::RadioOnWithPairing,
            menu: Page::Menu1,
            info: Page::WatchStatus,
        }
    }
}

impl CurrentPages {
    /// The page selected by `page_type`.
    #[must_use]
    pub fn current(&self, page_type: PageType) -> Page {
        match page_type {
            PageType::Idle => self.idle,
            PageType::Menu => self.menu,
            PageType::Info => self.info,
        }
    }
}

/// Select the idle page from the radio's current state.
pub fn determine_idle_page<L: LinkController>(link: &L) -> Page {
    if link.once_connected() {
        return Page::Normal;
    }
    match link.state() {
        ConnectionState::RadioOn => {
            if link.has_valid_pairing() {
                Page::RadioOnWithPairing
            } else {
                Page::RadioOnWithoutPairing
            }
        }
        ConnectionState::Paired => Page::RadioOnWithoutPairing,
        _ => Page::BluetoothOff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::MockLink;

    #[test]
    fn test_once_connected_always_selects_normal() {
        let link = MockLink {
            once_connected: true,
            state: ConnectionState::RadioOff,
            ..Default::default()
        };
        assert_eq!(determine_idle_page(&link), Page::Normal);
    }

    #[test]
    fn test_radio_on_branches_on_pairing_info() {
        let mut link = MockLink {
            state: ConnectionState::RadioOn,
            ..Default::default()
        };
        assert_eq!(determine_idle_page(&link), Page::RadioOnWithoutPairing);
        link.valid_pairing = true;
        assert_eq!(determine_idle_page(&link), Page::RadioOnWithPairing);
    }

    #[test]
    fn test_paired_without_session_shows_pairing_page() {
        let link = MockLink {
            state: ConnectionState::Paired,
            valid_pairing: true,
            ..Default::default()
        };
        assert_eq!(determine_idle_page(&link), Page::RadioOnWithoutPairing);
    }

    #[test]
    fn test_everything_else_is_bluetooth_off() {
        for state in [ConnectionState::Initializing, ConnectionState::RadioOff] {
            let link = MockLink {
                state,
                ..Default::default()
            };
            assert_eq!(determine_idle_page(&link), Page::BluetoothOff);
        }
    }
}
