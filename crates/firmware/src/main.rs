//! Watch firmware entry point for the STM32L476RG.

#![no_std]
#![no_main]

use core::sync::atomic::AtomicBool;

use embassy_executor::Spawner;
use embassy_stm32::exti::{Channel, ExtiInput};
use embassy_stm32::gpio::{AnyPin, Input, Level, Output, Pull, Speed};
use embassy_stm32::spi::{Config as SpiConfig, Spi};
use embassy_stm32::time::Hertz;
use embassy_time::{Duration, Timer};
use platform::LcdTransport;

use firmware::board::{AccelIrq, BoardSystem, SharpLcd};

use defmt_rtt as _;
use panic_probe as _;

/// Accelerometer interrupt mask, shared between the EXTI wait loop and the
/// sensor core's [`AccelIrq`] handle.
static ACCEL_IRQ_ENABLED: AtomicBool = AtomicBool::new(false);

#[embassy_executor::task]
async fn accel_irq_task(pin: ExtiInput<'static, AnyPin>) -> ! {
    firmware::board::watch_accel_line(pin, &ACCEL_IRQ_ENABLED).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    defmt::info!("watch firmware v{=str}", display::FIRMWARE_VERSION);
    let p = embassy_stm32::init(firmware::boot::hardware::build_embassy_config());

    let mut watchdog =
        embassy_stm32::wdg::IndependentWatchdog::new(p.IWDG, firmware::boot::WATCHDOG_TIMEOUT_US);
    watchdog.unleash();
    defmt::info!(
        "watchdog armed: timeout={=u32}us",
        firmware::boot::WATCHDOG_TIMEOUT_US
    );

    // Memory LCD on SPI2: PB13 SCK, PB15 MOSI, PB12 chip select (active
    // high on this panel). MISO is unused but the HAL wants a pin.
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = Hertz(1_000_000);
    let spi = Spi::new(
        p.SPI2, p.PB13, p.PB15, p.PB14, p.DMA1_CH5, p.DMA1_CH4, spi_config,
    );
    let lcd_cs = Output::new(p.PB12, Level::Low, Speed::High);
    let mut lcd = SharpLcd::new(spi, lcd_cs);
    if lcd.clear().is_err() {
        defmt::error!("lcd clear failed");
    }
    defmt::info!("lcd cleared");

    // Notification LED on PC7, vibration motor driver on PC8.
    let led = Output::new(p.PC7, Level::Low, Speed::Low);
    let motor = Output::new(p.PC8, Level::Low, Speed::Low);
    let system = BoardSystem::new(led, motor);

    // Accelerometer interrupt on PA2, rising edge.
    let accel_int: ExtiInput<'static, AnyPin> =
        ExtiInput::new(Input::new(p.PA2, Pull::Down).degrade(), p.EXTI2.degrade());
    let accel_irq = AccelIrq::new(&ACCEL_IRQ_ENABLED);
    if spawner.spawn(accel_irq_task(accel_int)).is_err() {
        defmt::error!("accel irq task spawn failed");
    }

    // TODO: remaining board collaborators before the task loops can start.
    //   - WallClock over embassy_stm32::rtc (needs the rtc Cargo feature
    //     and LSE bring-up in boot::hardware::build_embassy_config).
    //   - SettingsStore over a reserved embassy_stm32::flash page.
    //   - LinkController over the radio module's UART.
    //   - ButtonDispatch over the six side-button EXTI lines.
    //   - PowerMonitor over ADC1 and the charger status pin.
    // With those in place this function hands lcd, system and the sensor's
    // I2C bus to tasks::hardware::run_display / run_background.
    let _pending = (lcd, system, accel_irq);

    defmt::info!("entering heartbeat loop");
    loop {
        Timer::after(Duration::from_secs(1)).await;
        watchdog.pet();
    }
}
