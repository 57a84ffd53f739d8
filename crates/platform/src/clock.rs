//! Real-time clock abstraction.

/// A calendar timestamp as kept by the RTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchTime {
    /// Full year, e.g. 2026.
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Day of week, 0 = Sunday.
    pub day_of_week: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl Default for WatchTime {
    fn default() -> Self {
        WatchTime {
            year: 2013,
            month: 1,
            day: 1,
            day_of_week: 2,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl WatchTime {
    /// Minutes elapsed since midnight.
    #[must_use]
    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour)
            .saturating_mul(60)
            .saturating_add(u16::from(self.minute))
    }
}

/// Access to the real-time clock.
pub trait WallClock {
    /// Read the current time.
    fn now(&self) -> WatchTime;

    /// Overwrite the current time.
    fn set(&mut self, time: WatchTime);
}
