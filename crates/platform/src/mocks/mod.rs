//! Mock implementations for testing
//!
//! This module provides recording implementations of all platform traits
//! for use in unit and integration tests.

#![cfg(any(test, feature = "std"))]
#![allow(clippy::unwrap_used)]
// Recording counters and panel accesses may panic or wrap in a test double.
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]

use crate::buttons::{ButtonDispatch, ButtonIndex, PressType};
use crate::clock::{WallClock, WatchTime};
use crate::lcd::{LcdRow, LcdTransport, LCD_BYTES_PER_ROW, LCD_ROWS};
use crate::link::{ConnectionState, LinkController, PairedDevice};
use crate::power::PowerMonitor;
use crate::settings::{SettingKey, SettingsStore, SETTING_COUNT};
use crate::system::{InterruptLine, SystemControl};
use messaging::{DisplayMode, MsgType};

/// Mock real-time clock with a settable time.
#[derive(Debug, Default)]
pub struct MockClock {
    /// The time `now()` returns.
    pub time: WatchTime,
    /// Number of `set` calls.
    pub set_count: usize,
}

impl MockClock {
    /// A clock reading `time`.
    pub fn at(time: WatchTime) -> Self {
        MockClock { time, set_count: 0 }
    }
}

impl WallClock for MockClock {
    fn now(&self) -> WatchTime {
        self.time
    }

    fn set(&mut self, time: WatchTime) {
        self.time = time;
        self.set_count += 1;
    }
}

/// Mock battery monitor.
#[derive(Debug)]
pub struct MockPower {
    /// Reported battery voltage.
    pub voltage_mv: u16,
    /// Reported charger state.
    pub charging: bool,
}

impl Default for MockPower {
    fn default() -> Self {
        MockPower {
            voltage_mv: 3800,
            charging: false,
        }
    }
}

impl PowerMonitor for MockPower {
    fn battery_voltage_mv(&self) -> u16 {
        self.voltage_mv
    }

    fn is_charging(&self) -> bool {
        self.charging
    }
}

/// Mock radio stack state.
#[derive(Debug, Default)]
pub struct MockLink {
    /// Lifecycle state `state()` returns.
    pub state: ConnectionState,
    /// Whether a session has ever been established.
    pub once_connected: bool,
    /// Radio power flag.
    pub radio_on: bool,
    /// Inquiry-scan flag.
    pub discoverable: bool,
    /// Secure simple pairing flag.
    pub secure: bool,
    /// Bond table validity flag.
    pub valid_pairing: bool,
    /// Bond table contents.
    pub devices: heapless::Vec<PairedDevice, 3>,
}

impl LinkController for MockLink {
    fn state(&self) -> ConnectionState {
        self.state
    }

    fn once_connected(&self) -> bool {
        self.once_connected
    }

    fn is_radio_on(&self) -> bool {
        self.radio_on
    }

    fn is_discoverable(&self) -> bool {
        self.discoverable
    }

    fn is_pairing_secure(&self) -> bool {
        self.secure
    }

    fn has_valid_pairing(&self) -> bool {
        self.valid_pairing
    }

    fn paired_device(&self, index: usize) -> Option<PairedDevice> {
        self.devices.get(index).cloned()
    }

    fn local_address(&self) -> heapless::String<12> {
        heapless::String::try_from("0018340A2B3C").unwrap_or_default()
    }
}

/// Mock LCD that keeps the last frame written to each row.
#[derive(Debug)]
pub struct MockLcd {
    /// Last data written per row, indexed by 0-based row.
    pub panel: [[u8; LCD_BYTES_PER_ROW]; LCD_ROWS],
    /// Which rows have been written since the last `take_written`.
    pub written: [bool; LCD_ROWS],
    /// Total row frames written.
    pub frames: usize,
    /// Number of `clear` calls.
    pub clears: usize,
}

impl Default for MockLcd {
    fn default() -> Self {
        MockLcd {
            panel: [[0; LCD_BYTES_PER_ROW]; LCD_ROWS],
            written: [false; LCD_ROWS],
            frames: 0,
            clears: 0,
        }
    }
}

impl MockLcd {
    /// Forget which rows were written, keeping the panel contents.
    pub fn reset_written(&mut self) {
        self.written = [false; LCD_ROWS];
    }

    /// Pixel value at (row, column), 0-based.
    pub fn pixel(&self, row: usize, column: usize) -> bool {
        let byte = self.panel[row][column / 8];
        byte & (1 << (column % 8)) != 0
    }
}

impl LcdTransport for MockLcd {
    type Error = core::convert::Infallible;

    fn write_rows(&mut self, rows: &[LcdRow]) -> Result<(), Self::Error> {
        for frame in rows {
            let index = usize::from(frame.row).saturating_sub(1);
            if index < LCD_ROWS {
                self.panel[index] = frame.data;
                self.written[index] = true;
                self.frames += 1;
            }
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.panel = [[0; LCD_BYTES_PER_ROW]; LCD_ROWS];
        self.clears += 1;
        Ok(())
    }
}

/// One programmed button action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundAction {
    /// Mode the binding applies in.
    pub mode: DisplayMode,
    /// Button the binding applies to.
    pub button: ButtonIndex,
    /// Press classification the binding applies to.
    pub press: PressType,
    /// Message posted on the press.
    pub msg_type: MsgType,
    /// Options byte posted on the press.
    pub options: u8,
}

/// Mock button driver recording the programmed action table.
///
/// Enables and disables land in one chronological log; `None` payloads are
/// disables. The latest matching entry decides what a slot holds.
#[derive(Debug, Default)]
pub struct MockButtons {
    log: heapless::Vec<(DisplayMode, ButtonIndex, PressType, Option<BoundAction>), 128>,
}

impl MockButtons {
    /// The action currently bound to a slot, if any.
    pub fn action(
        &self,
        mode: DisplayMode,
        button: ButtonIndex,
        press: PressType,
    ) -> Option<BoundAction> {
        self.log
            .iter()
            .rev()
            .find(|(m, b, p, _)| (*m, *b, *p) == (mode, button, press))
            .and_then(|(_, _, _, action)| *action)
    }
}

impl ButtonDispatch for MockButtons {
    fn enable_action(
        &mut self,
        mode: DisplayMode,
        button: ButtonIndex,
        press: PressType,
        msg_type: MsgType,
        options: u8,
    ) {
        let action = BoundAction {
            mode,
            button,
            press,
            msg_type,
            options,
        };
        let _ = self.log.push((mode, button, press, Some(action)));
    }

    fn disable_action(&mut self, mode: DisplayMode, button: ButtonIndex, press: PressType) {
        let _ = self.log.push((mode, button, press, None));
    }
}

/// Mock settings store.
#[derive(Debug, Default)]
pub struct MockSettings {
    /// Shadow values by key discriminant.
    pub values: [u8; SETTING_COUNT],
    /// Number of `commit` calls.
    pub commits: usize,
}

impl SettingsStore for MockSettings {
    type Error = core::convert::Infallible;

    fn get(&self, key: SettingKey) -> u8 {
        self.values[key as usize]
    }

    fn set(&mut self, key: SettingKey, value: u8) {
        self.values[key as usize] = value;
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        self.commits += 1;
        Ok(())
    }
}

/// Mock reset / LED / vibrator control.
#[derive(Debug, Default)]
pub struct MockSystem {
    /// Number of reset requests.
    pub resets: usize,
    /// LED state.
    pub led: bool,
    /// Number of vibrator pulses.
    pub vibrations: usize,
}

impl SystemControl for MockSystem {
    fn software_reset(&mut self) {
        self.resets += 1;
    }

    fn set_led(&mut self, on: bool) {
        self.led = on;
    }

    fn led_is_on(&self) -> bool {
        self.led
    }

    fn vibrate(&mut self) {
        self.vibrations += 1;
    }
}

/// Mock maskable interrupt line.
#[derive(Debug, Default)]
pub struct MockIrq {
    /// Mask state.
    pub enabled: bool,
}

impl InterruptLine for MockIrq {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_lcd_records_last_frame_per_row() {
        let mut lcd = MockLcd::default();
        let mut frame = LcdRow::blank(10);
        frame.data[0] = 0x0F;
        lcd.write_rows(&[frame]).unwrap();

        assert!(lcd.written[10]);
        assert!(!lcd.written[11]);
        assert!(lcd.pixel(10, 0));
        assert!(!lcd.pixel(10, 4));
        assert_eq!(lcd.frames, 1);
    }

    #[test]
    fn test_mock_buttons_latest_programming_wins() {
        let mut buttons = MockButtons::default();
        buttons.enable_action(
            DisplayMode::Idle,
            ButtonIndex::A,
            PressType::Immediate,
            MsgType::ToggleSeconds,
            0,
        );
        buttons.enable_action(
            DisplayMode::Idle,
            ButtonIndex::A,
            PressType::Immediate,
            MsgType::MenuButton,
            3,
        );

        let action = buttons
            .action(DisplayMode::Idle, ButtonIndex::A, PressType::Immediate)
            .unwrap();
        assert_eq!(action.msg_type, MsgType::MenuButton);
        assert_eq!(action.options, 3);

        buttons.disable_action(DisplayMode::Idle, ButtonIndex::A, PressType::Immediate);
        assert!(buttons
            .action(DisplayMode::Idle, ButtonIndex::A, PressType::Immediate)
            .is_none());
    }

    #[test]
    fn test_mock_buttons_disable_wins_after_unrelated_binds() {
        let mut buttons = MockButtons::default();
        buttons.enable_action(
            DisplayMode::Idle,
            ButtonIndex::B,
            PressType::Immediate,
            MsgType::MenuMode,
            0,
        );
        // Pad the log with bindings for other slots so the disable below
        // is not the most recent entry overall.
        for button in [ButtonIndex::A, ButtonIndex::C, ButtonIndex::D] {
            buttons.enable_action(
                DisplayMode::Idle,
                button,
                PressType::Immediate,
                MsgType::ToggleSeconds,
                0,
            );
        }
        buttons.disable_action(DisplayMode::Idle, ButtonIndex::B, PressType::Immediate);
        buttons.enable_action(
            DisplayMode::Application,
            ButtonIndex::E,
            PressType::Immediate,
            MsgType::ToggleSeconds,
            0,
        );

        assert!(buttons
            .action(DisplayMode::Idle, ButtonIndex::B, PressType::Immediate)
            .is_none());
        assert!(buttons
            .action(DisplayMode::Idle, ButtonIndex::C, PressType::Immediate)
            .is_some());
    }

    #[test]
    fn test_mock_settings_shadow_and_commit() {
        let mut settings = MockSettings::default();
        settings.set(SettingKey::LinkAlarmEnable, 1);
        assert_eq!(settings.get(SettingKey::LinkAlarmEnable), 1);
        assert_eq!(settings.commits, 0);
        settings.commit().unwrap();
        assert_eq!(settings.commits, 1);
    }
}
