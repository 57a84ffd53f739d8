//! Async task loops for the hardware target.
//!
//! Each loop owns its core, its timer pool and its inbox, alternating
//! between the next message and a one-second ticker. `embassy_executor`
//! tasks cannot be generic, so the entry point wraps these in concrete
//! task functions once the board collaborators are built.

#![cfg(feature = "hardware")]

use display::DisplayCore;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};
use embedded_hal::i2c::I2c;
use messaging::{receive, QueueId, TimerService};
use platform::{
    ButtonDispatch, InterruptLine, LcdTransport, LinkController, PowerMonitor, SettingsStore,
    SystemControl, TemplateStore, WallClock,
};

use crate::background::BackgroundTask;

/// Run the display task forever: cold-start, then inbox and 1 Hz tick.
pub async fn run_display<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS>(
    mut core: DisplayCore<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS>,
) -> !
where
    CLK: WallClock,
    PWR: PowerMonitor,
    LNK: LinkController,
    LCD: LcdTransport,
    BTN: ButtonDispatch,
    NV: SettingsStore,
    TPL: TemplateStore,
    SYS: SystemControl,
{
    let mut timers = TimerService::new();
    super::display_startup(&mut core, &mut timers);

    let mut seconds = Ticker::every(Duration::from_secs(1));
    loop {
        match select(receive(QueueId::Display), seconds.next()).await {
            Either::First(msg) => super::display_message(&mut core, &mut timers, &msg),
            Either::Second(()) => super::display_second(&mut core, &mut timers),
        }
    }
}

/// Run the background task forever: sensor init, then inbox and 1 Hz tick.
pub async fn run_background<I2C, IRQ, LNK, SYS>(
    mut task: BackgroundTask<I2C, IRQ, LNK, SYS>,
) -> !
where
    I2C: I2c,
    IRQ: InterruptLine,
    LNK: LinkController,
    SYS: SystemControl,
{
    let mut timers = TimerService::new();
    if task.startup(&mut embassy_time::Delay, &mut timers).is_err() {
        defmt::error!("accelerometer init failed; sensor messages will fault");
    }

    let mut seconds = Ticker::every(Duration::from_secs(1));
    loop {
        match select(receive(QueueId::Background), seconds.next()).await {
            Either::First(msg) => super::background_message(&mut task, &mut timers, &msg),
            Either::Second(()) => super::background_second(&mut timers),
        }
    }
}
