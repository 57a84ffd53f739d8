//! Radio and pairing state abstraction.

use heapless::String;

/// One bonded remote device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedDevice {
    /// Friendly name, truncated to the display width.
    pub name: String<16>,
    /// Device address, twelve hex digits.
    pub address: String<12>,
}

/// Lifecycle state of the radio stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    /// The stack is still bringing the controller up.
    #[default]
    Initializing,
    /// Radio powered, waiting for a peer.
    RadioOn,
    /// Bonded to a phone but no session.
    Paired,
    /// A phone session is established.
    Connected,
    /// Radio powered off.
    RadioOff,
}

/// Read-only view of the radio stack.
pub trait LinkController {
    /// Current lifecycle state.
    fn state(&self) -> ConnectionState;

    /// `true` if a phone session has ever been established since the
    /// last factory reset.
    fn once_connected(&self) -> bool;

    /// `true` while the radio hardware is powered.
    fn is_radio_on(&self) -> bool;

    /// `true` while a phone session is established.
    fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    /// `true` while the device answers inquiry scans.
    fn is_discoverable(&self) -> bool;

    /// `true` when secure simple pairing is enabled.
    fn is_pairing_secure(&self) -> bool;

    /// `true` when the bond table holds usable pairing info.
    fn has_valid_pairing(&self) -> bool;

    /// Bonded device by slot, `None` past the end of the bond table.
    fn paired_device(&self, index: usize) -> Option<PairedDevice>;

    /// Local device address, twelve hex digits.
    fn local_address(&self) -> String<12>;
}
