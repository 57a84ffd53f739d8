//! Non-volatile settings store.
//!
//! Settings are single bytes behind stable keys. Writes land in a RAM
//! shadow; [`SettingsStore::commit`] flushes the shadow to flash (the menu
//! exit path is the only committer).

/// Identifies one stored byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SettingKey {
    /// Non-zero selects the analogue face on the idle page.
    DisplaySeconds = 0,
    /// Idle buffer invert byte (bit 0 display invert, bit 1 clock invert).
    InvertDisplay = 1,
    /// Non-zero hands the top idle band to the phone.
    IdleBufferConfig = 2,
    /// Non-zero vibrates and repaints when the link drops.
    LinkAlarmEnable = 3,
    /// Zero selects 12-hour time, non-zero 24-hour.
    TimeFormat = 4,
    /// Zero renders month/day, non-zero day/month.
    DateFormat = 5,
    /// Display language selector.
    Language = 6,
}

/// Number of setting keys (size of shadow arrays).
pub const SETTING_COUNT: usize = 7;

/// Byte-keyed non-volatile settings.
pub trait SettingsStore {
    /// Storage error type.
    type Error: core::fmt::Debug;

    /// Read a setting from the RAM shadow.
    fn get(&self, key: SettingKey) -> u8;

    /// Write a setting to the RAM shadow.
    fn set(&mut self, key: SettingKey, value: u8);

    /// Flush the shadow to non-volatile storage.
    fn commit(&mut self) -> Result<(), Self::Error>;
}
