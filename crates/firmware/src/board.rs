//! Board collaborators for the hardware target.
//!
//! Implementations here stay generic over `embedded-hal` traits so they
//! track the board wiring in `main.rs` rather than one HAL version's
//! concrete types.

#![cfg(feature = "hardware")]

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use embedded_hal_async::digital::Wait;
use messaging::{send_from_isr, Message, MsgType, QueueId};
use platform::lcd::{LcdError, LcdRow, LcdTransport};
use platform::{InterruptLine, SystemControl};

/// Command bit: write one or more lines.
const LCD_CMD_WRITE: u8 = 0x80;
/// Command bit: clear the whole panel.
const LCD_CMD_CLEAR: u8 = 0x20;
/// VCOM polarity bit, toggled on every transaction to keep the panel's
/// liquid crystal DC-balanced.
const LCD_CMD_VCOM: u8 = 0x40;

/// Sharp memory LCD over a blocking SPI bus.
///
/// Chip select is active high on this panel. Each transaction is one
/// command byte, the row frames, and a trailing latch byte.
pub struct SharpLcd<SPI, CS> {
    spi: SPI,
    cs: CS,
    vcom: bool,
}

impl<SPI, CS> SharpLcd<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// A transport over the bus and its chip-select pin.
    pub fn new(spi: SPI, cs: CS) -> Self {
        SharpLcd {
            spi,
            cs,
            vcom: false,
        }
    }

    fn command(&mut self) -> u8 {
        self.vcom = !self.vcom;
        if self.vcom {
            LCD_CMD_VCOM
        } else {
            0
        }
    }

    fn transact(&mut self, command: u8, rows: &[LcdRow]) -> Result<(), LcdError> {
        self.cs.set_high().map_err(|_| LcdError::Bus)?;
        let result = self.shift_out(command, rows);
        let deselect = self.cs.set_low().map_err(|_| LcdError::Bus);
        result.and(deselect)
    }

    fn shift_out(&mut self, command: u8, rows: &[LcdRow]) -> Result<(), LcdError> {
        self.spi.write(&[command]).map_err(|_| LcdError::Bus)?;
        for frame in rows {
            self.spi.write(&[frame.row]).map_err(|_| LcdError::Bus)?;
            self.spi.write(&frame.data).map_err(|_| LcdError::Bus)?;
            self.spi.write(&[frame.dummy]).map_err(|_| LcdError::Bus)?;
        }
        // Final latch byte, then drain before dropping chip select.
        self.spi.write(&[0x00]).map_err(|_| LcdError::Bus)?;
        self.spi.flush().map_err(|_| LcdError::Bus)
    }
}

impl<SPI, CS> LcdTransport for SharpLcd<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = LcdError;

    fn write_rows(&mut self, rows: &[LcdRow]) -> Result<(), LcdError> {
        let command = LCD_CMD_WRITE | self.command();
        self.transact(command, rows)
    }

    fn clear(&mut self) -> Result<(), LcdError> {
        let command = LCD_CMD_CLEAR | self.command();
        self.transact(command, &[])
    }
}

/// Vibrator pulse length in core cycles, roughly 100 ms at 4 MHz MSI.
const VIBRATE_PULSE_CYCLES: u32 = 400_000;

/// Reset, LED and vibrator over two GPIO outputs.
pub struct BoardSystem<LED, MOTOR> {
    led: LED,
    motor: MOTOR,
    led_on: bool,
}

impl<LED, MOTOR> BoardSystem<LED, MOTOR>
where
    LED: OutputPin,
    MOTOR: OutputPin,
{
    /// Controls over the notification LED and vibration motor pins.
    pub fn new(led: LED, motor: MOTOR) -> Self {
        BoardSystem {
            led,
            motor,
            led_on: false,
        }
    }
}

impl<LED, MOTOR> SystemControl for BoardSystem<LED, MOTOR>
where
    LED: OutputPin,
    MOTOR: OutputPin,
{
    fn software_reset(&mut self) {
        cortex_m::peripheral::SCB::sys_reset();
    }

    fn set_led(&mut self, on: bool) {
        self.led_on = on;
        let result = if on {
            self.led.set_high()
        } else {
            self.led.set_low()
        };
        if result.is_err() {
            defmt::warn!("led pin write failed");
        }
    }

    fn led_is_on(&self) -> bool {
        self.led_on
    }

    fn vibrate(&mut self) {
        if self.motor.set_high().is_ok() {
            cortex_m::asm::delay(VIBRATE_PULSE_CYCLES);
        }
        let _ = self.motor.set_low();
    }
}

/// Software mask for the accelerometer interrupt line.
///
/// The EXTI wait loop keeps running; this flag decides whether an edge
/// reaches the background inbox, which gives the sensor core a mask it can
/// flip from task context without touching the NVIC.
pub struct AccelIrq {
    enabled: &'static AtomicBool,
}

impl AccelIrq {
    /// A mask over the shared flag the wait loop checks.
    pub fn new(enabled: &'static AtomicBool) -> Self {
        AccelIrq { enabled }
    }
}

impl InterruptLine for AccelIrq {
    fn enable(&mut self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    fn disable(&mut self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

/// Forward rising edges on the sensor's interrupt pin to the background
/// inbox while the line is unmasked.
pub async fn watch_accel_line<P: Wait>(mut pin: P, enabled: &'static AtomicBool) -> ! {
    loop {
        if pin.wait_for_rising_edge().await.is_err() {
            defmt::error!("accelerometer interrupt pin wait failed");
            continue;
        }
        if enabled.load(Ordering::Relaxed) {
            send_from_isr(
                QueueId::Background,
                Message::new(MsgType::AccelerometerSendData, 0),
            );
        }
    }
}
