//! Cold-start configuration and first-run defaults.
//!
//! Pure data and small helpers, host-testable; the hardware-only pieces
//! (Embassy config, watchdog timing) live in [`hardware`].

use platform::settings::{SettingKey, SettingsStore, SETTING_COUNT};

/// Ordered boot sequence, for reference from the entry point.
///
/// 1. Clock tree and Embassy init.
/// 2. Watchdog armed.
/// 3. Settings shadow loaded, first-run defaults applied.
/// 4. Background task started (sensor init, parked in standby).
/// 5. Display task started (splash, radio-on request).
pub const BOOT_SEQUENCE_STEPS: usize = 5;

/// Watchdog timeout. The one-second task heartbeats pet well inside it.
pub const WATCHDOG_TIMEOUT_US: u32 = 8_000_000;

/// Factory defaults, by key.
///
/// Digital face, no invert, watch draws the top idle band, link alarm on,
/// 12-hour month-first English.
pub const DEFAULT_SETTINGS: [(SettingKey, u8); SETTING_COUNT] = [
    (SettingKey::DisplaySeconds, 0),
    (SettingKey::InvertDisplay, 0),
    (SettingKey::IdleBufferConfig, 0),
    (SettingKey::LinkAlarmEnable, 1),
    (SettingKey::TimeFormat, 0),
    (SettingKey::DateFormat, 0),
    (SettingKey::Language, 0),
];

/// Write the factory defaults into a fresh settings store and commit them.
///
/// Called only when the store reports no valid image; an initialised store
/// keeps whatever the wearer configured.
pub fn apply_first_run_defaults<NV: SettingsStore>(settings: &mut NV) -> Result<(), NV::Error> {
    for (key, value) in DEFAULT_SETTINGS {
        settings.set(key, value);
    }
    settings.commit()
}

/// Hardware-only boot pieces.
#[cfg(feature = "hardware")]
pub mod hardware {
    /// Embassy configuration for the STM32L476RG.
    ///
    /// The defaults run the MSI clock tree; the LCD and sensor buses are
    /// slow enough that nothing here needs the PLL.
    #[must_use]
    pub fn build_embassy_config() -> embassy_stm32::Config {
        embassy_stm32::Config::default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use platform::mocks::MockSettings;

    #[test]
    fn test_first_run_defaults_enable_the_link_alarm_only() {
        let mut settings = MockSettings::default();
        apply_first_run_defaults(&mut settings).unwrap();

        assert_eq!(settings.get(SettingKey::LinkAlarmEnable), 1);
        assert_eq!(settings.get(SettingKey::DisplaySeconds), 0);
        assert_eq!(settings.get(SettingKey::InvertDisplay), 0);
        assert_eq!(settings.get(SettingKey::TimeFormat), 0);
        assert_eq!(settings.commits, 1);
    }

    #[test]
    fn test_defaults_cover_every_key_once() {
        for key_index in 0..SETTING_COUNT {
            let hits = DEFAULT_SETTINGS
                .iter()
                .filter(|(key, _)| *key as usize == key_index)
                .count();
            assert_eq!(hits, 1, "key {key_index} listed {hits} times");
        }
    }
}
