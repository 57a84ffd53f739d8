//! Reset, LED and interrupt-line control.

/// Board-level controls outside any one peripheral.
pub trait SystemControl {
    /// Request a software reset. Returns on mocks; never returns on
    /// hardware.
    fn software_reset(&mut self);

    /// Drive the notification LED.
    fn set_led(&mut self, on: bool);

    /// `true` while the LED is lit.
    fn led_is_on(&self) -> bool;

    /// Pulse the vibrator motor for a notification.
    fn vibrate(&mut self);
}

/// A maskable external interrupt line.
pub trait InterruptLine {
    /// Unmask the line.
    fn enable(&mut self);

    /// Mask the line.
    fn disable(&mut self);

    /// `true` while the line is unmasked.
    fn is_enabled(&self) -> bool;
}
