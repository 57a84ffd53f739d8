//! Option byte values, grouped by the message type they accompany.
//!
//! These are protocol constants shared between the producing and the
//! consuming task, so they live next to the message definitions.

/// `IdleUpdate` options.
pub mod idle_update {
    /// Repaint the whole idle page.
    pub const FULL: u8 = 0;
    /// Repaint only the date/time band.
    pub const DATE_TIME_ONLY: u8 = 1;
}

/// `UpdateDisplay` option bits above the mode bits.
pub mod update_display {
    /// Push even if the target mode is not current.
    pub const FORCE: u8 = 0x08;
}

/// `MenuMode` options.
pub mod menu_mode {
    /// Enter menu page 1.
    pub const PAGE1: u8 = 0;
    /// Enter menu page 2.
    pub const PAGE2: u8 = 1;
    /// Enter menu page 3.
    pub const PAGE3: u8 = 2;
    /// Redraw whichever menu page is current.
    pub const UPDATE_CURRENT: u8 = 3;
}

/// `MenuButton` options.
pub mod menu_button {
    /// Leave the menu, committing settings to flash.
    pub const EXIT: u8 = 0;
    /// Power the radio on or off.
    pub const TOGGLE_BLUETOOTH: u8 = 1;
    /// Toggle inquiry-scan visibility.
    pub const TOGGLE_DISCOVERABILITY: u8 = 2;
    /// Toggle the link-loss alarm.
    pub const TOGGLE_LINK_ALARM: u8 = 3;
    /// Toggle secure simple pairing.
    pub const TOGGLE_SSP: u8 = 4;
    /// Enable or disable the accelerometer.
    pub const TOGGLE_ACCEL: u8 = 5;
    /// Toggle the analogue face.
    pub const DISPLAY_SECONDS: u8 = 6;
    /// Step the invert byte.
    pub const INVERT_DISPLAY: u8 = 7;
}

/// `ToggleSeconds` options.
pub mod toggle_seconds {
    /// Toggle without touching the screen (menu path).
    pub const DONT_UPDATE_IDLE: u8 = 0;
    /// Toggle and repaint the idle page.
    pub const UPDATE_IDLE: u8 = 1;
}

/// `ModifyTime` options.
pub mod modify_time {
    /// Increment the hour, wrapping at 24.
    pub const INCREMENT_HOUR: u8 = 0;
    /// Increment the minute, wrapping at 60.
    pub const INCREMENT_MINUTE: u8 = 1;
    /// Increment the day of week, wrapping at 7.
    pub const INCREMENT_DOW: u8 = 2;
}

/// `ConfigureDisplay` options.
pub mod configure_display {
    /// Show the digital face.
    pub const DONT_DISPLAY_SECONDS: u8 = 0;
    /// Show the analogue face.
    pub const DISPLAY_SECONDS: u8 = 1;
    /// Clear the display-invert bit.
    pub const DONT_INVERT: u8 = 2;
    /// Set the display-invert bit.
    pub const INVERT: u8 = 3;
}

/// `PairingControl` options.
pub mod pairing_control {
    /// Become discoverable.
    pub const ENABLE_PAIRING: u8 = 1;
    /// Stop answering inquiry scans.
    pub const DISABLE_PAIRING: u8 = 2;
    /// Toggle secure simple pairing.
    pub const TOGGLE_SSP: u8 = 3;
    /// Persist the pairing configuration.
    pub const SAVE: u8 = 4;
}

/// `LedChange` options.
pub mod led {
    /// Turn the LED on.
    pub const ON: u8 = 0;
    /// Turn the LED off.
    pub const OFF: u8 = 1;
    /// Invert the LED.
    pub const TOGGLE: u8 = 2;
    /// Turn off three seconds after release.
    pub const START_OFF_TIMER: u8 = 3;
}

/// `LinkAlarm` options.
pub mod link_alarm {
    /// The phone link just dropped.
    pub const LINK_DROPPED: u8 = 0;
    /// The 5-second grace period after a drop expired.
    pub const GRACE_EXPIRED: u8 = 1;
}

/// `SoftwareReset` options.
pub mod reset {
    /// Full master reset rather than a task restart.
    pub const MASTER: u8 = 1;
}

/// First payload byte of `StatusChangeEvent`.
pub mod status_change {
    /// A buffer update or mode change completed.
    pub const UPDATE_COMPLETE: u8 = 1;
    /// A non-idle mode timed out.
    pub const MODE_TIMEOUT: u8 = 2;
}

/// `AccelerometerHost` options.
pub mod accel_host {
    /// The payload is only an interrupt notice.
    pub const IS_INTERRUPT: u8 = 0;
    /// The payload is a raw register window.
    pub const IS_DATA: u8 = 1;
}

/// `AccelerometerSetup` options.
pub mod accel_setup {
    /// Overwrite the operating-mode register image.
    pub const OPERATING_MODE: u8 = 0;
    /// Overwrite the interrupt-control image.
    pub const INTERRUPT_CONTROL: u8 = 1;
    /// Overwrite the SID dispatch selector.
    pub const SID_CONTROL: u8 = 2;
    /// Overwrite the SID burst-read base address.
    pub const SID_ADDR: u8 = 3;
    /// Overwrite the SID burst-read length.
    pub const SID_LENGTH: u8 = 4;
    /// Unmask the interrupt line directly.
    pub const ENABLE_LINE: u8 = 5;
    /// Mask the interrupt line directly.
    pub const DISABLE_LINE: u8 = 6;
}

/// `AccelerometerAccess` options.
pub mod accel_access {
    /// Burst-read registers into a response message.
    pub const READ: u8 = 0;
    /// Write registers from the payload.
    pub const WRITE: u8 = 1;
}

/// `ConnectionStateChange` options (new state).
pub mod connection_change {
    /// A classic link came up.
    pub const BR_CONNECTED: u8 = 0;
    /// A low-energy link came up.
    pub const LE_CONNECTED: u8 = 1;
    /// The link went down.
    pub const DISCONNECTED: u8 = 2;
}
