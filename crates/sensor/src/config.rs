//! In-RAM sensor configuration, writable by the host at runtime.

use crate::registers;

/// What the interrupt forwards to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SidControl {
    /// Forward a register window read at interrupt time.
    #[default]
    SendData,
    /// Forward only the interrupt notice.
    SendInterrupt,
}

impl SidControl {
    /// Decode a host byte; anything non-zero means interrupt-only.
    #[must_use]
    pub fn from_byte(value: u8) -> Self {
        if value == 0 {
            SidControl::SendData
        } else {
            SidControl::SendInterrupt
        }
    }
}

/// Whether `enable` releases the latched interrupt before unmasking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptControl {
    /// Leave any latched source in place.
    #[default]
    Disabled,
    /// Clear the latched source on enable.
    Enabled,
}

impl InterruptControl {
    /// Decode a host byte; anything non-zero enables the release read.
    #[must_use]
    pub fn from_byte(value: u8) -> Self {
        if value == 0 {
            InterruptControl::Disabled
        } else {
            InterruptControl::Enabled
        }
    }
}

/// The block the host tunes through `AccelerometerSetup`.
#[derive(Debug, Clone, Copy)]
pub struct SensorConfig {
    /// Image written to CTRL_REG1 on enable.
    pub operating_mode: u8,
    /// Interrupt-release behaviour on enable.
    pub interrupt_control: InterruptControl,
    /// Data vs interrupt-only forwarding.
    pub sid_control: SidControl,
    /// Base register of the forwarded window.
    pub sid_addr: u8,
    /// Length of the forwarded window in bytes.
    pub sid_length: u8,
}

impl Default for SensorConfig {
    fn default() -> Self {
        SensorConfig {
            operating_mode: registers::PC1_OPERATING_MODE
                | registers::RESOLUTION_12BIT
                | registers::TAP_ENABLE_TDTE
                | registers::TILT_ENABLE_TPE,
            interrupt_control: InterruptControl::Disabled,
            sid_control: SidControl::SendData,
            sid_addr: registers::XOUT_L,
            sid_length: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_forwards_xyz_window() {
        let config = SensorConfig::default();
        assert_eq!(config.sid_control, SidControl::SendData);
        assert_eq!(config.sid_addr, registers::XOUT_L);
        assert_eq!(config.sid_length, 6);
        assert_ne!(config.operating_mode & registers::PC1_OPERATING_MODE, 0);
    }
}
