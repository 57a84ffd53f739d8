//! Battery monitoring abstraction.

/// Battery voltage and charge state.
pub trait PowerMonitor {
    /// Filtered battery sense voltage in millivolts.
    fn battery_voltage_mv(&self) -> u16;

    /// `true` while the charger is sourcing current.
    fn is_charging(&self) -> bool;
}
