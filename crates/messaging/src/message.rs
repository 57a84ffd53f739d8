//! Message record and type enumeration.

use heapless::Vec;

use crate::queues::QueueId;

/// Capacity of the inline message payload.
///
/// Large enough for the longest wire payload (a full accelerometer data
/// window plus header) while keeping the bus item cheap to move.
pub const MSG_BUFFER_CAPACITY: usize = 32;

/// Every message type carried on the bus.
///
/// Discriminants are stable: the host-visible subset is part of the phone
/// protocol and the rest are internal but logged by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MsgType {
    /// External write into an off-screen buffer region.
    WriteBuffer = 0x10,
    /// Load a stored template into the buffer.
    LoadTemplate = 0x11,
    /// Push a buffer (full or partial) to the LCD transport.
    UpdateDisplay = 0x12,
    /// Redraw the idle page (options select full vs date/time only).
    IdleUpdate = 0x13,
    /// Switch the top-level display mode.
    ChangeMode = 0x14,
    /// A non-idle mode timed out; report to host and fall back to idle.
    ModeTimeout = 0x15,
    /// Render the watch status info page.
    WatchStatus = 0x16,
    /// Render the QR/barcode info page.
    BarCode = 0x17,
    /// Render the paired-devices info page.
    ListPairedDevices = 0x18,
    /// The radio connection state changed.
    ConnectionStateChange = 0x19,
    /// Increment hour/minute/day-of-week in the RTC.
    ModifyTime = 0x1A,
    /// Enter a menu page.
    MenuMode = 0x1B,
    /// Execute a menu action.
    MenuButton = 0x1C,
    /// Toggle the digital/analogue clock face.
    ToggleSeconds = 0x1D,
    /// The 3-second splash screen expired.
    SplashTimeout = 0x1E,
    /// The phone link dropped.
    LinkAlarm = 0x1F,
    /// Diagnostic memory test request (log-only).
    RamTest = 0x20,
    /// Phone-driven display configuration (seconds / invert low bit).
    ConfigureDisplay = 0x21,
    /// Phone chooses who controls the top band of the idle buffer.
    ConfigureIdleBufferSize = 0x22,
    /// Battery below warning threshold.
    LowBatteryWarning = 0x23,
    /// Battery low enough that the radio was shut off.
    LowBatteryBtOff = 0x24,

    /// Buffer update / mode change report to the host.
    StatusChangeEvent = 0x33,
    /// A simple button press forwarded to the host.
    ButtonEvent = 0x34,
    /// Request the radio stack to power on.
    TurnRadioOn = 0x35,
    /// Request the radio stack to power off.
    TurnRadioOff = 0x36,
    /// Pairing control (discoverability / SSP / save).
    PairingControl = 0x37,
    /// Software reset request (long-hold emergency exit).
    SoftwareReset = 0x38,
    /// LED control (on / off / toggle / timed off).
    LedChange = 0x39,

    /// Accelerometer interrupt fired; read and forward from task context.
    AccelerometerSendData = 0x40,
    /// Interrupt notice or data window bound for the host.
    AccelerometerHost = 0x41,
    /// Overwrite one field of the sensor configuration block.
    AccelerometerSetup = 0x42,
    /// Raw register read/write passthrough.
    AccelerometerAccess = 0x43,
    /// Response to an `AccelerometerAccess` read.
    AccelerometerResponse = 0x44,
    /// Bring the accelerometer out of standby.
    AccelerometerEnable = 0x45,
    /// Put the accelerometer into standby.
    AccelerometerDisable = 0x46,
}

impl MsgType {
    /// The inbox a message of this type is routed to.
    #[must_use]
    pub fn destination(self) -> QueueId {
        match self {
            MsgType::WriteBuffer
            | MsgType::LoadTemplate
            | MsgType::UpdateDisplay
            | MsgType::IdleUpdate
            | MsgType::ChangeMode
            | MsgType::ModeTimeout
            | MsgType::WatchStatus
            | MsgType::BarCode
            | MsgType::ListPairedDevices
            | MsgType::ConnectionStateChange
            | MsgType::ModifyTime
            | MsgType::MenuMode
            | MsgType::MenuButton
            | MsgType::ToggleSeconds
            | MsgType::SplashTimeout
            | MsgType::LinkAlarm
            | MsgType::RamTest
            | MsgType::ConfigureDisplay
            | MsgType::ConfigureIdleBufferSize
            | MsgType::LowBatteryWarning
            | MsgType::LowBatteryBtOff => QueueId::Display,

            MsgType::AccelerometerSendData
            | MsgType::AccelerometerSetup
            | MsgType::AccelerometerAccess
            | MsgType::AccelerometerEnable
            | MsgType::AccelerometerDisable
            | MsgType::LedChange => QueueId::Background,

            MsgType::StatusChangeEvent
            | MsgType::ButtonEvent
            | MsgType::TurnRadioOn
            | MsgType::TurnRadioOff
            | MsgType::PairingControl
            | MsgType::SoftwareReset
            | MsgType::AccelerometerHost
            | MsgType::AccelerometerResponse => QueueId::Radio,
        }
    }
}

/// Top-level operating state of the UI.
///
/// Carried in the low bits of `ChangeMode` options and used as the row
/// index for per-mode button bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    /// The watch face.
    #[default]
    Idle = 0,
    /// A phone-driven application buffer.
    Application = 1,
    /// A phone-driven notification buffer.
    Notification = 2,
    /// A phone-driven scrollable notification buffer.
    ScrollNotification = 3,
}

impl DisplayMode {
    /// Mask selecting the mode bits of a `ChangeMode` options byte.
    pub const MASK: u8 = 0x03;

    /// Number of modes (size of per-mode tables).
    pub const COUNT: usize = 4;

    /// Decode the mode bits of an options byte.
    #[must_use]
    pub fn from_options(options: u8) -> Self {
        match options & Self::MASK {
            1 => DisplayMode::Application,
            2 => DisplayMode::Notification,
            3 => DisplayMode::ScrollNotification,
            _ => DisplayMode::Idle,
        }
    }
}

/// One bus message: a type, an options byte, and a bounded inline payload.
///
/// Receiving a message transfers payload ownership to the receiver;
/// dropping the message releases the storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message type; selects the handler at the destination.
    pub msg_type: MsgType,
    /// Per-type options byte.
    pub options: u8,
    /// Inline payload; empty means "no buffer".
    pub buffer: Vec<u8, MSG_BUFFER_CAPACITY>,
}

impl Message {
    /// A message with no payload.
    #[must_use]
    pub fn new(msg_type: MsgType, options: u8) -> Self {
        Message {
            msg_type,
            options,
            buffer: Vec::new(),
        }
    }

    /// A message whose payload is copied from `data`.
    ///
    /// Bytes beyond [`MSG_BUFFER_CAPACITY`] are truncated; the senders in
    /// this firmware never exceed it.
    #[must_use]
    pub fn with_buffer(msg_type: MsgType, options: u8, data: &[u8]) -> Self {
        let mut buffer = Vec::new();
        let take = data.len().min(MSG_BUFFER_CAPACITY);
        // from_slice cannot fail after the clamp above.
        #[allow(clippy::indexing_slicing)] // Safety: take <= data.len()
        let _ = buffer.extend_from_slice(&data[..take]);
        Message {
            msg_type,
            options,
            buffer,
        }
    }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` when the message carries no payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Pending sends produced by one handler invocation.
///
/// The owning task drains this into the bus after the handler returns.
pub type Outbox = Vec<(QueueId, Message), 8>;

/// Append `msg` to `out`, routed to its type's destination inbox.
///
/// A full outbox drops the message with a logged diagnostic; handlers never
/// produce more than the outbox capacity.
pub fn route(out: &mut Outbox, msg: Message) {
    let dest = msg.msg_type.destination();
    if out.push((dest, msg)).is_err() {
        log::warn!("outbox full; message dropped");
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)] // Tests index the outbox
mod tests {
    use super::*;

    #[test]
    fn test_message_without_buffer_is_empty() {
        let msg = Message::new(MsgType::IdleUpdate, 0);
        assert!(msg.is_empty());
        assert_eq!(msg.len(), 0);
    }

    #[test]
    fn test_message_with_buffer_keeps_length() {
        let msg = Message::with_buffer(MsgType::AccelerometerHost, 0, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(msg.len(), 6);
        assert_eq!(&msg.buffer[..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_message_buffer_truncates_at_capacity() {
        let big = [0xAA_u8; 64];
        let msg = Message::with_buffer(MsgType::WriteBuffer, 0, &big);
        assert_eq!(msg.len(), MSG_BUFFER_CAPACITY);
    }

    #[test]
    fn test_display_messages_route_to_display_queue() {
        assert_eq!(MsgType::IdleUpdate.destination(), QueueId::Display);
        assert_eq!(MsgType::LinkAlarm.destination(), QueueId::Display);
    }

    #[test]
    fn test_sensor_messages_route_to_background_queue() {
        assert_eq!(MsgType::AccelerometerSendData.destination(), QueueId::Background);
        assert_eq!(MsgType::LedChange.destination(), QueueId::Background);
    }

    #[test]
    fn test_host_bound_messages_route_to_radio_queue() {
        assert_eq!(MsgType::AccelerometerHost.destination(), QueueId::Radio);
        assert_eq!(MsgType::StatusChangeEvent.destination(), QueueId::Radio);
    }

    #[test]
    fn test_mode_decode_masks_high_bits() {
        assert_eq!(DisplayMode::from_options(0x12), DisplayMode::Notification);
        assert_eq!(DisplayMode::from_options(0x10), DisplayMode::Idle);
    }

    #[test]
    fn test_route_appends_with_destination() {
        let mut out = Outbox::new();
        route(&mut out, Message::new(MsgType::TurnRadioOn, 0));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].0, QueueId::Radio);
    }
}
