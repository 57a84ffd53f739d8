//! Cross-crate flows: display core, background task and the bus.
//!
//! The display and sensor crates test their cores in isolation; these
//! tests hand real messages between them the way the task loops do.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use display::{DisplayCore, PageType};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
use firmware::{tasks, BackgroundTask};
use messaging::options::{accel_access, idle_update, led, menu_button};
use messaging::{receive, Message, MsgType, Outbox, QueueId, TimerService};
use platform::mocks::{
    MockButtons, MockClock, MockIrq, MockLcd, MockLink, MockPower, MockSettings, MockSystem,
};
use platform::{NullTemplates, SettingKey, SettingsStore, LCD_ROWS};
use sensor::{registers, SensorConfig, SensorCore, I2C_ADDRESS};

type TestDisplay = DisplayCore<
    MockClock,
    MockPower,
    MockLink,
    MockLcd,
    MockButtons,
    MockSettings,
    NullTemplates,
    MockSystem,
>;

type TestBackground = BackgroundTask<I2cMock, MockIrq, MockLink, MockSystem>;

fn display_core(settings: MockSettings) -> TestDisplay {
    DisplayCore::new(
        MockClock::default(),
        MockPower::default(),
        MockLink::default(),
        MockLcd::default(),
        MockButtons::default(),
        settings,
        NullTemplates,
        MockSystem::default(),
    )
}

fn deliver(core: &mut TestDisplay, timers: &mut TimerService, msg: Message) -> Outbox {
    let mut out = Outbox::new();
    core.handle_message(&msg, timers, &mut out);
    out
}

fn background(expectations: &[Transaction]) -> (TestBackground, I2cMock) {
    let bus = I2cMock::new(expectations);
    let task = BackgroundTask::new(
        SensorCore::new(bus.clone(), MockIrq::default()),
        MockLink::default(),
        MockSystem::default(),
    );
    (task, bus)
}

fn background_deliver(task: &mut TestBackground, msg: &Message) -> Outbox {
    let mut timers = TimerService::new();
    let mut out = Outbox::new();
    task.handle_message(msg, &mut timers, &mut out).unwrap();
    out
}

/// The only test that touches the static inboxes; everything else stays on
/// outboxes so parallel test threads cannot cross-talk.
#[tokio::test]
async fn test_boot_reaches_idle_over_the_bus() {
    let mut core = display_core(MockSettings::default());
    let mut timers = TimerService::new();
    tasks::display_startup(&mut core, &mut timers);

    let radio_on = receive(QueueId::Radio).await;
    assert_eq!(radio_on.msg_type, MsgType::TurnRadioOn);
    assert_eq!(core.lcd.frames, LCD_ROWS);

    // The splash timer posts its timeout through the bus on the third tick.
    for _ in 0..3 {
        tasks::display_second(&mut core, &mut timers);
    }
    let timeout = receive(QueueId::Display).await;
    assert_eq!(timeout.msg_type, MsgType::SplashTimeout);
    tasks::display_message(&mut core, &mut timers, &timeout);
    assert_eq!(core.page_type(), PageType::Idle);

    // The next second crosses the minute sentinel and requests a band redraw.
    tasks::display_second(&mut core, &mut timers);
    let band = receive(QueueId::Display).await;
    assert_eq!(band.msg_type, MsgType::IdleUpdate);
    assert_eq!(band.options, idle_update::DATE_TIME_ONLY);
    tasks::display_message(&mut core, &mut timers, &band);
}

#[test]
fn test_menu_accel_toggle_reaches_the_sensor() {
    let mut core = display_core(MockSettings::default());
    let mut timers = TimerService::new();
    let mut out = Outbox::new();
    core.startup(&mut timers, &mut out);

    let out = deliver(
        &mut core,
        &mut timers,
        Message::new(MsgType::MenuButton, menu_button::TOGGLE_ACCEL),
    );
    let (queue, enable) = out
        .iter()
        .find(|(_, m)| m.msg_type == MsgType::AccelerometerEnable)
        .cloned()
        .unwrap();
    assert_eq!(queue, QueueId::Background);

    let expectations = [Transaction::write(
        I2C_ADDRESS,
        vec![
            registers::CTRL_REG1,
            SensorConfig::default().operating_mode,
        ],
    )];
    let (mut task, mut bus) = background(&expectations);
    let out = background_deliver(&mut task, &enable);
    assert!(task.sensor.is_enabled());
    assert!(out.is_empty());
    bus.done();
}

#[test]
fn test_double_tap_loops_back_to_toggle_the_led() {
    let expectations = [
        Transaction::write_read(
            I2C_ADDRESS,
            vec![registers::TDT_TIMER],
            registers::TAP_BLOCK_EXPECTED.to_vec(),
        ),
        Transaction::write_read(
            I2C_ADDRESS,
            vec![registers::DCST_RESP],
            vec![registers::DCST_RESP_EXPECTED],
        ),
        Transaction::write_read(
            I2C_ADDRESS,
            vec![registers::INT_SRC_REG2],
            vec![registers::INT_TAP_DOUBLE],
        ),
        Transaction::write_read(I2C_ADDRESS, vec![registers::INT_REL], vec![0]),
    ];
    let (mut task, mut bus) = background(&expectations);

    // Phone disconnected: the tap toggles the LED and nothing reaches the
    // host.
    let out = background_deliver(&mut task, &Message::new(MsgType::AccelerometerSendData, 0));
    assert_eq!(out.len(), 1);
    let (queue, toggle) = out[0].clone();
    assert_eq!(queue, QueueId::Background);
    assert_eq!(toggle.msg_type, MsgType::LedChange);
    assert_eq!(toggle.options, led::TOGGLE);

    let out = background_deliver(&mut task, &toggle);
    assert!(out.is_empty());
    assert!(task.system.led);
    bus.done();
}

#[test]
fn test_host_register_read_is_answered_toward_the_radio() {
    let expectations = [Transaction::write_read(
        I2C_ADDRESS,
        vec![registers::WHO_AM_I],
        vec![registers::WHO_AM_I_EXPECTED, 0x20],
    )];
    let (mut task, mut bus) = background(&expectations);

    let request = Message::with_buffer(
        MsgType::AccelerometerAccess,
        accel_access::READ,
        &[registers::WHO_AM_I, 2],
    );
    let out = background_deliver(&mut task, &request);

    assert_eq!(out.len(), 1);
    let (queue, response) = &out[0];
    assert_eq!(*queue, QueueId::Radio);
    assert_eq!(response.msg_type, MsgType::AccelerometerResponse);
    assert_eq!(response.options, 2);
    assert_eq!(&response.buffer[..], &[registers::WHO_AM_I_EXPECTED, 0x20]);
    bus.done();
}

#[test]
fn test_factory_defaults_arm_the_link_alarm() {
    let mut settings = MockSettings::default();
    firmware::boot::apply_first_run_defaults(&mut settings).unwrap();
    assert_eq!(settings.get(SettingKey::LinkAlarmEnable), 1);

    let mut core = display_core(settings);
    let mut timers = TimerService::new();
    let mut out = Outbox::new();
    core.startup(&mut timers, &mut out);
    deliver(&mut core, &mut timers, Message::new(MsgType::SplashTimeout, 0));

    deliver(
        &mut core,
        &mut timers,
        Message::new(
            MsgType::LinkAlarm,
            messaging::options::link_alarm::LINK_DROPPED,
        ),
    );
    assert_eq!(core.system.vibrations, 1);

    // The grace period runs out five seconds later on the display queue.
    for _ in 0..4 {
        assert!(timers.tick().is_empty());
    }
    let fired = timers.tick();
    assert_eq!(fired.len(), 1);
    let (queue, expiry) = &fired[0];
    assert_eq!(*queue, QueueId::Display);
    assert_eq!(expiry.msg_type, MsgType::LinkAlarm);
    assert_eq!(expiry.options, messaging::options::link_alarm::GRACE_EXPIRED);
}
