//! Task glue between the bus and the synchronous cores.
//!
//! Each step function runs one core handler and routes whatever it posted.
//! The async loops that own the inboxes live in [`hardware`]; everything
//! here runs on the host.

use display::DisplayCore;
use embedded_hal::i2c::I2c;
use messaging::{send, Message, Outbox, TimerService};
use platform::{
    ButtonDispatch, InterruptLine, LcdTransport, LinkController, PowerMonitor, SettingsStore,
    SystemControl, TemplateStore, WallClock,
};

use crate::background::BackgroundTask;

#[cfg(feature = "hardware")]
pub mod hardware;

/// Route a drained outbox onto the bus.
pub fn drain(out: Outbox) {
    for (queue, msg) in out {
        send(queue, msg);
    }
}

/// Run the display cold-start sequence and route its posts.
pub fn display_startup<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS>(
    core: &mut DisplayCore<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS>,
    timers: &mut TimerService,
) where
    CLK: WallClock,
    PWR: PowerMonitor,
    LNK: LinkController,
    LCD: LcdTransport,
    BTN: ButtonDispatch,
    NV: SettingsStore,
    TPL: TemplateStore,
    SYS: SystemControl,
{
    let mut out = Outbox::new();
    core.startup(timers, &mut out);
    drain(out);
}

/// Feed one inbox message to the display core.
pub fn display_message<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS>(
    core: &mut DisplayCore<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS>,
    timers: &mut TimerService,
    msg: &Message,
) where
    CLK: WallClock,
    PWR: PowerMonitor,
    LNK: LinkController,
    LCD: LcdTransport,
    BTN: ButtonDispatch,
    NV: SettingsStore,
    TPL: TemplateStore,
    SYS: SystemControl,
{
    let mut out = Outbox::new();
    core.handle_message(msg, timers, &mut out);
    drain(out);
}

/// Advance the display task's second: expire timers, then the RTC hook.
pub fn display_second<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS>(
    core: &mut DisplayCore<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS>,
    timers: &mut TimerService,
) where
    CLK: WallClock,
    PWR: PowerMonitor,
    LNK: LinkController,
    LCD: LcdTransport,
    BTN: ButtonDispatch,
    NV: SettingsStore,
    TPL: TemplateStore,
    SYS: SystemControl,
{
    for (queue, msg) in timers.tick() {
        send(queue, msg);
    }
    let mut out = Outbox::new();
    core.on_rtc_second(&mut out);
    drain(out);
}

/// Feed one inbox message to the background task context.
///
/// A bus fault on the sensor's I2C is logged and the message dropped; the
/// host retries its request at its own pace.
pub fn background_message<I2C, IRQ, LNK, SYS>(
    task: &mut BackgroundTask<I2C, IRQ, LNK, SYS>,
    timers: &mut TimerService,
    msg: &Message,
) where
    I2C: I2c,
    IRQ: InterruptLine,
    LNK: LinkController,
    SYS: SystemControl,
{
    let mut out = Outbox::new();
    if task.handle_message(msg, timers, &mut out).is_err() {
        log::error!("sensor bus fault handling {:#04x}", msg.msg_type as u8);
    }
    drain(out);
}

/// Advance the background task's second.
pub fn background_second(timers: &mut TimerService) {
    for (queue, msg) in timers.tick() {
        send(queue, msg);
    }
}
