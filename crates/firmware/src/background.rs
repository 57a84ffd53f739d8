//! Background task core: sensor dispatch and LED housekeeping.
//!
//! Synchronous like the display core; the owning task drains the
//! background inbox into [`BackgroundTask::handle_message`] and routes the
//! outbox. The task keeps its own link view so the sensor's
//! connection-gated forwarding never reaches across tasks.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use messaging::options::led;
use messaging::{Message, MsgType, Outbox, QueueId, TimerId, TimerService};
use platform::{InterruptLine, LinkController, SystemControl};
use sensor::SensorCore;

/// Seconds the LED stays lit after a `START_OFF_TIMER` request.
pub const LED_OFF_SECS: u32 = 3;

/// Owned context of the background task.
pub struct BackgroundTask<I2C, IRQ, LNK, SYS> {
    /// The accelerometer core.
    pub sensor: SensorCore<I2C, IRQ>,
    /// Read-only radio state, for connection-gated forwarding.
    pub link: LNK,
    /// LED and vibrator control.
    pub system: SYS,
    led_off_timer: Option<TimerId>,
}

impl<I2C, IRQ, LNK, SYS> BackgroundTask<I2C, IRQ, LNK, SYS>
where
    I2C: I2c,
    IRQ: InterruptLine,
    LNK: LinkController,
    SYS: SystemControl,
{
    /// A task context over its collaborators, before [`startup`].
    ///
    /// [`startup`]: BackgroundTask::startup
    pub fn new(sensor: SensorCore<I2C, IRQ>, link: LNK, system: SYS) -> Self {
        BackgroundTask {
            sensor,
            link,
            system,
            led_off_timer: None,
        }
    }

    /// Claim the LED timer and bring the sensor up in standby.
    pub fn startup<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timers: &mut TimerService,
    ) -> Result<(), I2C::Error> {
        self.led_off_timer = timers.allocate();
        self.sensor.init(delay)
    }

    /// Dispatch one inbox message.
    pub fn handle_message(
        &mut self,
        msg: &Message,
        timers: &mut TimerService,
        out: &mut Outbox,
    ) -> Result<(), I2C::Error> {
        match msg.msg_type {
            MsgType::AccelerometerSendData => {
                self.sensor.handle_send_data(self.link.is_connected(), out)
            }
            MsgType::AccelerometerEnable => self.sensor.enable(),
            MsgType::AccelerometerDisable => self.sensor.disable(),
            MsgType::AccelerometerSetup => {
                self.sensor.handle_setup(msg);
                Ok(())
            }
            MsgType::AccelerometerAccess => self.sensor.handle_access(msg, out),
            MsgType::LedChange => {
                self.led_change_handler(msg.options, timers);
                Ok(())
            }
            other => {
                log::debug!("background task ignoring message {:#04x}", other as u8);
                Ok(())
            }
        }
    }

    fn led_change_handler(&mut self, options: u8, timers: &mut TimerService) {
        match options {
            led::ON => self.system.set_led(true),
            led::OFF => self.system.set_led(false),
            led::TOGGLE => {
                let lit = self.system.led_is_on();
                self.system.set_led(!lit);
            }
            led::START_OFF_TIMER => {
                self.system.set_led(true);
                if let Some(id) = self.led_off_timer {
                    timers.arm(
                        id,
                        LED_OFF_SECS,
                        false,
                        QueueId::Background,
                        MsgType::LedChange,
                        led::OFF,
                    );
                    timers.start(id);
                }
            }
            other => log::warn!("unhandled led option {other}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::indexing_slicing)] // Tests index the fired-post list
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::i2c::Mock;
    use platform::mocks::{MockIrq, MockLink, MockSystem};

    type TestTask = BackgroundTask<Mock, MockIrq, MockLink, MockSystem>;

    fn task() -> (TestTask, Mock) {
        let bus = Mock::new(&[]);
        let task = BackgroundTask::new(
            SensorCore::new(bus.clone(), MockIrq::default()),
            MockLink::default(),
            MockSystem::default(),
        );
        (task, bus)
    }

    fn deliver(task: &mut TestTask, timers: &mut TimerService, msg: Message) {
        let mut out = Outbox::new();
        task.handle_message(&msg, timers, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_led_toggle_inverts_the_led() {
        let (mut task, mut bus) = task();
        let mut timers = TimerService::new();

        deliver(&mut task, &mut timers, Message::new(MsgType::LedChange, led::TOGGLE));
        assert!(task.system.led);
        deliver(&mut task, &mut timers, Message::new(MsgType::LedChange, led::TOGGLE));
        assert!(!task.system.led);
        bus.done();
    }

    #[test]
    fn test_led_off_timer_posts_off_after_three_seconds() {
        let (mut task, mut bus) = task();
        let mut timers = TimerService::new();
        task.led_off_timer = timers.allocate();

        deliver(
            &mut task,
            &mut timers,
            Message::new(MsgType::LedChange, led::START_OFF_TIMER),
        );
        assert!(task.system.led);

        assert!(timers.tick().is_empty());
        assert!(timers.tick().is_empty());
        let fired = timers.tick();
        assert_eq!(fired.len(), 1);
        let (queue, msg) = &fired[0];
        assert_eq!(*queue, QueueId::Background);
        assert_eq!(msg.msg_type, MsgType::LedChange);
        assert_eq!(msg.options, led::OFF);

        deliver(&mut task, &mut timers, msg.clone());
        assert!(!task.system.led);
        bus.done();
    }

    #[test]
    fn test_restarting_the_off_timer_rewinds_the_countdown() {
        let (mut task, mut bus) = task();
        let mut timers = TimerService::new();
        task.led_off_timer = timers.allocate();

        let press = Message::new(MsgType::LedChange, led::START_OFF_TIMER);
        deliver(&mut task, &mut timers, press.clone());
        assert!(timers.tick().is_empty());
        assert!(timers.tick().is_empty());

        deliver(&mut task, &mut timers, press);
        assert!(timers.tick().is_empty());
        assert!(timers.tick().is_empty());
        assert_eq!(timers.tick().len(), 1);
        bus.done();
    }
}
