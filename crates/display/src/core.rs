//! The display task's state machine.
//!
//! [`DisplayCore`] owns the frame buffer, the mode and page state and the
//! NV-mirrored toggles. Handlers are synchronous: they draw into the
//! buffer, push rows to the LCD transport and append any outgoing messages
//! to an [`Outbox`] the owning task drains afterwards.

use ::core::fmt::Write as _;

use heapless::{String, Vec};
use messaging::options::{
    configure_display, idle_update, led, link_alarm, menu_button, menu_mode, modify_time,
    pairing_control, reset, status_change, toggle_seconds, update_display,
};
use messaging::{route, DisplayMode, Message, MsgType, Outbox, QueueId, TimerId, TimerService};
use platform::{
    ButtonDispatch, ButtonIndex, ConnectionState, LcdRow, LcdTransport, LinkController,
    PowerMonitor, PressType, SettingKey, SettingsStore, SystemControl, TemplateStore, WallClock,
    WatchTime, LCD_ROWS,
};

use crate::assets;
use crate::buttons::configure_page_buttons;
use crate::compositor::{draw_hand, draw_tick, write_char, write_icon_4w10h, write_str, Cursor};
use crate::fonts::{status_icon, Font, TIME_COLON, TIME_SPACE};
use crate::framebuffer::FrameBuffer;
use crate::pages::{determine_idle_page, CurrentPages, Page, PageType};
use crate::trig::{hour_hand_angle, minute_hand_angle};

/// Firmware revision shown on the status page.
pub const FIRMWARE_VERSION: &str = "1.4.0";

/// Rows the watch composes on the idle page while a phone session owns the
/// bottom of the screen.
pub const WATCH_DRAWN_IDLE_ROWS: usize = 63;

/// Non-idle mode timeouts in seconds, indexed by mode.
const MODE_TIMEOUT_SECS: [u32; DisplayMode::COUNT] = [0, 600, 30, 30];

/// Battery below this reads as empty.
const BATTERY_EMPTY_MV: u16 = 3500;
/// Battery above this reads as full.
const BATTERY_FULL_MV: u16 = 4000;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// TallTime glyph indices for `HH:MM`.
///
/// In twelve-hour format the hour folds into 1..=12 and a zero tens digit
/// renders as the blank glyph.
#[must_use]
pub fn digital_clock_glyphs(time: &WatchTime, twelve_hour: bool) -> [u8; 5] {
    let mut hour = time.hour;
    if twelve_hour {
        hour %= 12;
        if hour == 0 {
            hour = 12;
        }
    }
    let tens = hour / 10;
    let tens = if tens == 0 && twelve_hour {
        TIME_SPACE
    } else {
        tens
    };
    [
        tens,
        hour % 10,
        TIME_COLON,
        time.minute / 10,
        time.minute % 10,
    ]
}

/// State machine behind the display task.
pub struct DisplayCore<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS> {
    /// Real-time clock.
    pub clock: CLK,
    /// Battery monitor.
    pub power: PWR,
    /// Radio state view.
    pub link: LNK,
    /// Panel transport.
    pub lcd: LCD,
    /// Button action programming.
    pub buttons: BTN,
    /// Non-volatile settings.
    pub settings: NV,
    /// Stored display templates.
    pub templates: TPL,
    /// Reset, LED and vibrator control.
    pub system: SYS,

    buffer: FrameBuffer,
    mode: DisplayMode,
    page_type: PageType,
    pages: CurrentPages,
    splash_done: bool,
    rtc_update_enable: bool,
    /// Out-of-range sentinel so the first tick always redraws.
    last_minute: u8,
    disconnect_warning: bool,
    /// Local view of the sensor's enable state, kept by the menu toggle.
    accel_enabled: bool,
    display_timer: Option<TimerId>,
    link_alarm_timer: Option<TimerId>,
}

impl<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS> DisplayCore<CLK, PWR, LNK, LCD, BTN, NV, TPL, SYS>
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
    /// A core over its eight collaborators, before [`startup`].
    ///
    /// [`startup`]: DisplayCore::startup
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clock: CLK,
        power: PWR,
        link: LNK,
        lcd: LCD,
        buttons: BTN,
        settings: NV,
        templates: TPL,
        system: SYS,
    ) -> Self {
        DisplayCore {
            clock,
            power,
            link,
            lcd,
            buttons,
            settings,
            templates,
            system,
            buffer: FrameBuffer::new(),
            mode: DisplayMode::Idle,
            page_type: PageType::Idle,
            pages: CurrentPages::default(),
            splash_done: false,
            rtc_update_enable: false,
            last_minute: 61,
            disconnect_warning: false,
            accel_enabled: false,
            display_timer: None,
            link_alarm_timer: None,
        }
    }

    /// Current top-level mode.
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Current page type.
    #[must_use]
    pub fn page_type(&self) -> PageType {
        self.page_type
    }

    /// Current page per page type.
    #[must_use]
    pub fn pages(&self) -> CurrentPages {
        self.pages
    }

    /// The composition buffer, for inspection.
    #[must_use]
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Cold-start sequence: splash, timers, default bindings, radio-on.
    pub fn startup(&mut self, timers: &mut TimerService, out: &mut Outbox) {
        self.display_timer = timers.allocate();
        self.link_alarm_timer = timers.allocate();

        self.buffer.fill(0, LCD_ROWS, 0x00);
        self.buffer
            .copy_rows(&assets::SPLASH, assets::SPLASH_START_ROW, assets::SPLASH_ROWS);
        self.send_rows(0, LCD_ROWS);

        if let Some(id) = self.display_timer {
            timers.arm(id, 3, false, QueueId::Display, MsgType::SplashTimeout, 0);
            timers.start(id);
        }

        self.configure_mode_independent_buttons();
        route(out, Message::new(MsgType::TurnRadioOn, 0));
    }

    /// Dispatch one inbox message.
    pub fn handle_message(&mut self, msg: &Message, timers: &mut TimerService, out: &mut Outbox) {
        match msg.msg_type {
            MsgType::WriteBuffer => self.write_buffer_handler(msg),
            MsgType::LoadTemplate => self.load_template_handler(msg),
            MsgType::UpdateDisplay => self.update_display_handler(msg.options, timers, out),
            MsgType::IdleUpdate => self.idle_update_handler(msg.options, timers),
            MsgType::ChangeMode => self.change_mode_handler(msg.options, timers, out),
            MsgType::ModeTimeout => self.mode_timeout_handler(timers, out),
            MsgType::WatchStatus => self.watch_status_handler(timers),
            MsgType::BarCode => self.bar_code_handler(timers),
            MsgType::ListPairedDevices => self.list_paired_devices_handler(timers),
            MsgType::ConnectionStateChange => self.connection_state_change_handler(timers),
            MsgType::ModifyTime => self.modify_time_handler(msg.options, out),
            MsgType::MenuMode => self.menu_mode_handler(msg.options, timers),
            MsgType::MenuButton => self.menu_button_handler(msg.options, timers, out),
            MsgType::ToggleSeconds => self.toggle_seconds_handler(msg.options, timers),
            MsgType::SplashTimeout => self.splash_timeout_handler(timers),
            MsgType::LinkAlarm => self.link_alarm_handler(msg.options, timers),
            MsgType::RamTest => log::info!("ram test requested; diagnostic only"),
            MsgType::ConfigureDisplay => self.configure_display_handler(msg.options, timers),
            MsgType::ConfigureIdleBufferSize => self.configure_idle_buffer_handler(msg, timers),
            MsgType::LowBatteryWarning => {
                log::warn!("battery low");
                self.system.vibrate();
            }
            MsgType::LowBatteryBtOff => log::warn!("battery critical; radio was shut off"),
            other => log::debug!("display task ignoring message {:#04x}", other as u8),
        }
    }

    /// One-second RTC tick, called from the owning task.
    ///
    /// Posts a date/time redraw when updates are enabled and either the
    /// minute rolled over or the face redraws every second.
    pub fn on_rtc_second(&mut self, out: &mut Outbox) {
        if !self.rtc_update_enable {
            return;
        }
        let minute = self.clock.now().minute;
        let every_second = self.settings.get(SettingKey::DisplaySeconds) != 0;
        if every_second || minute != self.last_minute {
            self.last_minute = minute;
            route(
                out,
                Message::new(MsgType::IdleUpdate, idle_update::DATE_TIME_ONLY),
            );
        }
    }

    // ── message handlers ────────────────────────────────────────────────

    fn splash_timeout_handler(&mut self, timers: &mut TimerService) {
        self.splash_done = true;
        self.idle_update_handler(idle_update::FULL, timers);
    }

    fn idle_update_handler(&mut self, options: u8, timers: &mut TimerService) {
        let full = options != idle_update::DATE_TIME_ONLY;
        if full {
            self.stop_display_timer(timers);
            self.rtc_update_enable = true;
            self.page_type = PageType::Idle;
            self.pages.idle = determine_idle_page(&self.link);
            configure_page_buttons(&mut self.buttons, self.pages.idle);
        } else if self.page_type != PageType::Idle {
            return;
        }

        let watch_controls_top = self.settings.get(SettingKey::IdleBufferConfig) == 0;
        let mut rows = self.idle_band_rows();
        if watch_controls_top {
            self.draw_idle_band(rows);
        }
        if full && !self.link.once_connected() {
            self.draw_boot_page_body();
            rows = LCD_ROWS;
        }
        self.send_rows(0, rows);
    }

    fn update_display_handler(&mut self, options: u8, timers: &mut TimerService, out: &mut Outbox) {
        let mode = DisplayMode::from_options(options);
        if mode != self.mode && options & update_display::FORCE == 0 {
            log::debug!("update for inactive mode dropped");
            return;
        }
        self.mode = mode;
        if mode == DisplayMode::Idle {
            self.idle_update_handler(idle_update::FULL, timers);
        } else {
            self.start_mode_timeout(timers);
            self.send_rows(0, LCD_ROWS);
        }
        let report =
            Message::with_buffer(MsgType::StatusChangeEvent, mode as u8, &[status_change::UPDATE_COMPLETE]);
        route(out, report);
    }

    fn change_mode_handler(&mut self, options: u8, timers: &mut TimerService, out: &mut Outbox) {
        self.mode = DisplayMode::from_options(options);
        if self.mode == DisplayMode::Idle {
            self.idle_update_handler(idle_update::FULL, timers);
        } else {
            self.start_mode_timeout(timers);
        }
        let report = Message::with_buffer(
            MsgType::StatusChangeEvent,
            self.mode as u8,
            &[status_change::UPDATE_COMPLETE],
        );
        route(out, report);
    }

    fn mode_timeout_handler(&mut self, timers: &mut TimerService, out: &mut Outbox) {
        let timed_out = self.mode;
        let report = Message::with_buffer(
            MsgType::StatusChangeEvent,
            timed_out as u8,
            &[status_change::MODE_TIMEOUT],
        );
        route(out, report);
        self.mode = DisplayMode::Idle;
        self.idle_update_handler(idle_update::FULL, timers);
    }

    #[allow(clippy::indexing_slicing)] // Safety: chunks_exact(13) yields 13-byte records
    fn write_buffer_handler(&mut self, msg: &Message) {
        // Payload is a run of 13-byte records: row index then 12 data bytes.
        for record in msg.buffer.chunks_exact(13) {
            let row = usize::from(record[0]);
            let mut data = [0u8; 12];
            data.copy_from_slice(&record[1..13]);
            self.buffer.set_row_data(row, data);
        }
        if msg.buffer.len() % 13 != 0 {
            log::warn!("write buffer payload not a whole number of rows");
        }
    }

    fn load_template_handler(&mut self, msg: &Message) {
        let Some(&id) = msg.buffer.first() else {
            log::warn!("load template without an id");
            return;
        };
        let mut rows: usize = 0;
        for row in 0..LCD_ROWS {
            match self.templates.template_row(id, row) {
                Some(data) => {
                    self.buffer.set_row_data(row, data);
                    rows = rows.saturating_add(1);
                }
                None => break,
            }
        }
        if rows == 0 {
            log::info!("template {id} not present on this build");
        }
    }

    fn connection_state_change_handler(&mut self, timers: &mut TimerService) {
        if !self.splash_done {
            return;
        }
        if self.link.is_connected() {
            self.disconnect_warning = false;
        }
        self.pages.idle = determine_idle_page(&self.link);
        match self.page_type {
            PageType::Idle => self.idle_update_handler(idle_update::FULL, timers),
            PageType::Menu => self.menu_mode_handler(menu_mode::UPDATE_CURRENT, timers),
            PageType::Info => {}
        }
    }

    fn modify_time_handler(&mut self, options: u8, out: &mut Outbox) {
        let mut time = self.clock.now();
        match options {
            modify_time::INCREMENT_HOUR => time.hour = time.hour.wrapping_add(1) % 24,
            modify_time::INCREMENT_MINUTE => time.minute = time.minute.wrapping_add(1) % 60,
            modify_time::INCREMENT_DOW => time.day_of_week = time.day_of_week.wrapping_add(1) % 7,
            other => {
                log::warn!("unknown modify-time option {other}");
                return;
            }
        }
        self.last_minute = time.minute;
        self.clock.set(time);
        route(
            out,
            Message::new(MsgType::IdleUpdate, idle_update::DATE_TIME_ONLY),
        );
    }

    fn menu_mode_handler(&mut self, options: u8, timers: &mut TimerService) {
        self.stop_display_timer(timers);
        self.page_type = PageType::Menu;
        self.pages.menu = match options {
            menu_mode::PAGE1 => Page::Menu1,
            menu_mode::PAGE2 => Page::Menu2,
            menu_mode::PAGE3 => Page::Menu3,
            _ => self.pages.menu,
        };

        self.buffer.fill(0, LCD_ROWS, 0x00);
        match self.pages.menu {
            Page::Menu2 => self.draw_menu2(),
            Page::Menu3 => self.draw_menu3(),
            _ => self.draw_menu1(),
        }
        configure_page_buttons(&mut self.buttons, self.pages.menu);
        self.send_rows(0, LCD_ROWS);
    }

    fn menu_button_handler(&mut self, options: u8, timers: &mut TimerService, out: &mut Outbox) {
        let radio_ready = self.link.state() != ConnectionState::Initializing;
        match options {
            menu_button::EXIT => {
                if let Err(err) = self.settings.commit() {
                    log::error!("settings commit failed: {err:?}");
                }
                route(
                    out,
                    Message::new(MsgType::PairingControl, pairing_control::SAVE),
                );
                self.idle_update_handler(idle_update::FULL, timers);
                return;
            }
            menu_button::TOGGLE_BLUETOOTH => {
                if radio_ready {
                    let msg = if self.link.is_radio_on() {
                        MsgType::TurnRadioOff
                    } else {
                        MsgType::TurnRadioOn
                    };
                    route(out, Message::new(msg, 0));
                }
            }
            menu_button::TOGGLE_DISCOVERABILITY => {
                if radio_ready {
                    let option = if self.link.is_discoverable() {
                        pairing_control::DISABLE_PAIRING
                    } else {
                        pairing_control::ENABLE_PAIRING
                    };
                    route(out, Message::new(MsgType::PairingControl, option));
                }
            }
            menu_button::TOGGLE_SSP => {
                if radio_ready {
                    route(
                        out,
                        Message::new(MsgType::PairingControl, pairing_control::TOGGLE_SSP),
                    );
                }
            }
            menu_button::TOGGLE_LINK_ALARM => {
                let enabled = self.settings.get(SettingKey::LinkAlarmEnable) != 0;
                self.settings
                    .set(SettingKey::LinkAlarmEnable, u8::from(!enabled));
            }
            menu_button::TOGGLE_ACCEL => {
                self.accel_enabled = !self.accel_enabled;
                let msg = if self.accel_enabled {
                    MsgType::AccelerometerEnable
                } else {
                    MsgType::AccelerometerDisable
                };
                route(out, Message::new(msg, 0));
            }
            menu_button::DISPLAY_SECONDS => {
                self.toggle_seconds_handler(toggle_seconds::DONT_UPDATE_IDLE, timers);
            }
            menu_button::INVERT_DISPLAY => {
                let current = self.settings.get(SettingKey::InvertDisplay);
                self.settings
                    .set(SettingKey::InvertDisplay, current.wrapping_add(1) % 4);
            }
            other => {
                log::warn!("unknown menu action {other}");
                return;
            }
        }
        self.menu_mode_handler(menu_mode::UPDATE_CURRENT, timers);
    }

    fn toggle_seconds_handler(&mut self, options: u8, timers: &mut TimerService) {
        let current = self.settings.get(SettingKey::DisplaySeconds);
        self.settings
            .set(SettingKey::DisplaySeconds, u8::from(current == 0));
        if options == toggle_seconds::DONT_UPDATE_IDLE {
            return;
        }
        if self.page_type == PageType::Idle {
            self.idle_update_handler(idle_update::FULL, timers);
        }
    }

    fn link_alarm_handler(&mut self, options: u8, timers: &mut TimerService) {
        match options {
            link_alarm::GRACE_EXPIRED => {
                self.disconnect_warning = false;
                self.idle_update_handler(idle_update::DATE_TIME_ONLY, timers);
            }
            _ => {
                if self.settings.get(SettingKey::LinkAlarmEnable) != 0 {
                    self.system.vibrate();
                }
                self.disconnect_warning = true;
                if let Some(id) = self.link_alarm_timer {
                    timers.arm(
                        id,
                        5,
                        false,
                        QueueId::Display,
                        MsgType::LinkAlarm,
                        link_alarm::GRACE_EXPIRED,
                    );
                    timers.start(id);
                }
                self.idle_update_handler(idle_update::DATE_TIME_ONLY, timers);
            }
        }
    }

    fn configure_display_handler(&mut self, options: u8, timers: &mut TimerService) {
        let invert = self.settings.get(SettingKey::InvertDisplay);
        let changed = match options {
            configure_display::DONT_DISPLAY_SECONDS => {
                self.settings.set(SettingKey::DisplaySeconds, 0);
                true
            }
            configure_display::DISPLAY_SECONDS => {
                self.settings.set(SettingKey::DisplaySeconds, 1);
                true
            }
            configure_display::DONT_INVERT => {
                self.settings.set(SettingKey::InvertDisplay, invert & !0x01);
                true
            }
            configure_display::INVERT => {
                self.settings.set(SettingKey::InvertDisplay, invert | 0x01);
                true
            }
            other => {
                log::warn!("unknown display configuration option {other}");
                false
            }
        };
        if changed && self.page_type == PageType::Idle {
            self.idle_update_handler(idle_update::FULL, timers);
        }
    }

    fn configure_idle_buffer_handler(&mut self, msg: &Message, timers: &mut TimerService) {
        let Some(&config) = msg.buffer.first() else {
            log::warn!("idle buffer configuration without a payload");
            return;
        };
        self.settings.set(SettingKey::IdleBufferConfig, config & 0x01);
        if self.page_type == PageType::Idle {
            self.idle_update_handler(idle_update::FULL, timers);
        }
    }

    fn watch_status_handler(&mut self, timers: &mut TimerService) {
        self.stop_display_timer(timers);
        self.page_type = PageType::Info;
        self.pages.info = Page::WatchStatus;
        self.draw_watch_status();
        configure_page_buttons(&mut self.buttons, Page::WatchStatus);
        self.send_rows(0, LCD_ROWS);
        // The page self-refreshes while it stays up.
        if let Some(id) = self.display_timer {
            timers.arm(id, 60, true, QueueId::Display, MsgType::WatchStatus, 0);
            timers.start(id);
        }
    }

    fn bar_code_handler(&mut self, timers: &mut TimerService) {
        self.stop_display_timer(timers);
        self.page_type = PageType::Info;
        self.pages.info = Page::QrCode;
        self.buffer.fill(0, LCD_ROWS, 0x00);
        self.buffer.copy_rows(
            &assets::BAR_CODE,
            assets::BAR_CODE_START_ROW,
            assets::BAR_CODE_ROWS,
        );
        configure_page_buttons(&mut self.buttons, Page::QrCode);
        self.send_rows(0, LCD_ROWS);
    }

    fn list_paired_devices_handler(&mut self, timers: &mut TimerService) {
        self.stop_display_timer(timers);
        self.page_type = PageType::Info;
        self.pages.info = Page::ListPairedDevices;
        self.buffer.fill(0, LCD_ROWS, 0x00);

        let mut row = 4u8;
        for slot in 0..3 {
            if let Some(device) = self.link.paired_device(slot) {
                let mut cursor = Cursor::at(row, 0, 0x01);
                write_str(&mut self.buffer, &mut cursor, Font::Watch7, &device.name);
                let mut cursor = Cursor::at(row.saturating_add(12), 0, 0x01);
                write_str(&mut self.buffer, &mut cursor, Font::Watch7, &device.address);
            }
            row = row.saturating_add(29);
        }

        configure_page_buttons(&mut self.buttons, Page::ListPairedDevices);
        self.send_rows(0, LCD_ROWS);
    }

    // ── idle page composition ───────────────────────────────────────────

    fn idle_band_rows(&self) -> usize {
        if self.settings.get(SettingKey::DisplaySeconds) != 0 {
            // The analogue face spans the whole panel.
            LCD_ROWS
        } else if self.link.is_connected() {
            WATCH_DRAWN_IDLE_ROWS
        } else {
            LCD_ROWS
        }
    }

    fn draw_idle_band(&mut self, rows: usize) {
        self.buffer.fill(0, rows, 0x00);
        if self.settings.get(SettingKey::DisplaySeconds) != 0 {
            self.draw_analogue_time();
        } else {
            self.draw_digital_time(false);
            self.draw_date_row();
            self.draw_status_glyph_row();
            if self.link.once_connected()
                && (!self.link.is_connected() || self.disconnect_warning)
            {
                let mut cursor = Cursor::at(72, 2, 0x40);
                write_str(&mut self.buffer, &mut cursor, Font::Watch16, "Link Lost");
            }
        }
        if self.settings.get(SettingKey::InvertDisplay) & 0x02 != 0 {
            self.buffer.invert_rows(0, rows);
        }
    }

    /// Large `HH:MM` plus the AM/PM mark.
    ///
    /// `with_seconds` appends two small seconds digits; no current page
    /// sets it, but phone-driven layouts may.
    fn draw_digital_time(&mut self, with_seconds: bool) {
        let time = self.clock.now();
        let twelve_hour = self.settings.get(SettingKey::TimeFormat) == 0;

        let mut cursor = Cursor::at(10, 1, 0x04);
        for glyph in digital_clock_glyphs(&time, twelve_hour) {
            write_char(&mut self.buffer, &mut cursor, Font::TallTime, glyph);
        }

        if with_seconds {
            let mut cursor = Cursor::at(16, 9, 0x01);
            write_char(&mut self.buffer, &mut cursor, Font::Seconds, time.second / 10);
            write_char(&mut self.buffer, &mut cursor, Font::Seconds, time.second % 10);
        }

        if twelve_hour {
            let mark = if time.hour < 12 { &assets::AM } else { &assets::PM };
            write_icon_4w10h(&mut self.buffer, mark, 0, 6);
        }
    }

    fn draw_date_row(&mut self) {
        let time = self.clock.now();
        let mut cursor = Cursor::at(2, 0, 0x04);
        let day = DAY_NAMES
            .get(usize::from(time.day_of_week))
            .copied()
            .unwrap_or("???");
        write_str(&mut self.buffer, &mut cursor, Font::Watch5, day);

        if self.link.once_connected() {
            let day_first = self.settings.get(SettingKey::DateFormat) != 0;
            let mut text: String<16> = String::new();
            let result = if day_first {
                write!(text, " {:02}.{:02}.{}", time.day, time.month, time.year)
            } else {
                write!(text, " {:02}.{:02}.{}", time.month, time.day, time.year)
            };
            result.ok();
            write_str(&mut self.buffer, &mut cursor, Font::Watch5, &text);
        }
    }

    fn draw_status_glyph_row(&mut self) {
        let mut cursor = Cursor::at(2, 8, 0x01);
        let at_icon = cursor;
        write_char(&mut self.buffer, &mut cursor, Font::StatusIcons, status_icon::BLUETOOTH);
        if !self.link.is_radio_on() {
            let mut strike = at_icon;
            write_char(&mut self.buffer, &mut strike, Font::StatusIcons, status_icon::CROSS);
        } else {
            let at_icon = cursor;
            write_char(&mut self.buffer, &mut cursor, Font::StatusIcons, status_icon::PHONE);
            if !self.link.is_connected() {
                let mut strike = at_icon;
                write_char(&mut self.buffer, &mut strike, Font::StatusIcons, status_icon::CROSS);
            }
        }

        if self.power.is_charging() {
            let mut spark = Cursor::at(2, 10, 0x01);
            write_char(&mut self.buffer, &mut spark, Font::StatusIcons, status_icon::SPARK);
        }
        let glyph = self.battery_glyph();
        let mut battery = Cursor::at(2, 10, 0x40);
        write_char(&mut self.buffer, &mut battery, Font::StatusIcons, glyph);
    }

    fn battery_glyph(&self) -> u8 {
        let mv = self.power.battery_voltage_mv();
        if mv < BATTERY_EMPTY_MV {
            status_icon::BATTERY_EMPTY
        } else if mv > BATTERY_FULL_MV {
            status_icon::BATTERY_FULL
        } else {
            status_icon::BATTERY_HALF
        }
    }

    fn draw_analogue_time(&mut self) {
        let time = self.clock.now();

        draw_tick(&mut self.buffer, 47, 10, 4, 3);
        draw_tick(&mut self.buffer, 0, 47, 8, 4);
        draw_tick(&mut self.buffer, 88, 47, 8, 4);

        let hour_angle = i32::from(hour_hand_angle(time.hour, time.minute));
        let minute_angle = i32::from(minute_hand_angle(time.minute));
        draw_hand(&mut self.buffer, 48, 48, -20, -5, -5, 5, hour_angle);
        draw_hand(&mut self.buffer, 48, 48, -35, -3, -3, 3, minute_angle);

        let mut cursor = Cursor::at(86, 0, 0x04);
        let day = DAY_NAMES
            .get(usize::from(time.day_of_week))
            .copied()
            .unwrap_or("???");
        write_str(&mut self.buffer, &mut cursor, Font::Watch5, day);
    }

    /// Never-connected idle pages own the whole screen; fill the bottom
    /// with connection guidance instead of phone content.
    fn draw_boot_page_body(&mut self) {
        let text: &str = match self.pages.idle {
            Page::BluetoothOff => "bluetooth off",
            Page::RadioOnWithoutPairing => "open phone app",
            _ => "discoverable",
        };
        let mut cursor = Cursor::at(66, 0, 0x04);
        write_str(&mut self.buffer, &mut cursor, Font::Watch7, text);

        let address = self.link.local_address();
        let mut cursor = Cursor::at(80, 0, 0x04);
        write_str(&mut self.buffer, &mut cursor, Font::Watch5, &address);
    }

    // ── menu and status composition ─────────────────────────────────────

    fn draw_menu1(&mut self) {
        let radio_ready = self.link.state() != ConnectionState::Initializing;
        if radio_ready {
            self.draw_icon(&assets::ICON_BLUETOOTH, assets::BUTTON_ICON_A_F_ROW, assets::RIGHT_BUTTON_COLUMN);
            if !self.link.is_radio_on() {
                self.or_icon(&assets::ICON_CROSS, assets::BUTTON_ICON_A_F_ROW, assets::RIGHT_BUTTON_COLUMN);
            }
        } else {
            self.draw_icon(&assets::ICON_QUESTION, assets::BUTTON_ICON_A_F_ROW, assets::RIGHT_BUTTON_COLUMN);
        }

        let link_alarm_on = self.settings.get(SettingKey::LinkAlarmEnable) != 0;
        self.draw_toggle_icon(link_alarm_on, assets::BUTTON_ICON_A_F_ROW, assets::LEFT_BUTTON_COLUMN);

        if radio_ready {
            self.draw_toggle_icon(
                self.link.is_discoverable(),
                assets::BUTTON_ICON_B_E_ROW,
                assets::LEFT_BUTTON_COLUMN,
            );
        } else {
            self.draw_icon(&assets::ICON_QUESTION, assets::BUTTON_ICON_B_E_ROW, assets::LEFT_BUTTON_COLUMN);
        }

        self.draw_common_menu_icons();
    }

    fn draw_menu2(&mut self) {
        let radio_ready = self.link.state() != ConnectionState::Initializing;
        if radio_ready {
            self.draw_toggle_icon(
                self.link.is_pairing_secure(),
                assets::BUTTON_ICON_A_F_ROW,
                assets::LEFT_BUTTON_COLUMN,
            );
        } else {
            self.draw_icon(&assets::ICON_QUESTION, assets::BUTTON_ICON_A_F_ROW, assets::LEFT_BUTTON_COLUMN);
        }
        self.draw_icon(&assets::ICON_RESET, assets::BUTTON_ICON_B_E_ROW, assets::LEFT_BUTTON_COLUMN);
        self.draw_common_menu_icons();
    }

    fn draw_menu3(&mut self) {
        self.draw_toggle_icon(self.accel_enabled, assets::BUTTON_ICON_A_F_ROW, assets::RIGHT_BUTTON_COLUMN);

        self.draw_icon(&assets::ICON_SECONDS, assets::BUTTON_ICON_A_F_ROW, assets::LEFT_BUTTON_COLUMN);
        if self.settings.get(SettingKey::DisplaySeconds) == 0 {
            self.or_icon(&assets::ICON_CROSS, assets::BUTTON_ICON_A_F_ROW, assets::LEFT_BUTTON_COLUMN);
        }

        self.draw_icon(&assets::ICON_INVERT, assets::BUTTON_ICON_B_E_ROW, assets::LEFT_BUTTON_COLUMN);
        if self.settings.get(SettingKey::InvertDisplay) & 0x01 == 0 {
            self.or_icon(&assets::ICON_CROSS, assets::BUTTON_ICON_B_E_ROW, assets::LEFT_BUTTON_COLUMN);
        }

        self.draw_common_menu_icons();
    }

    /// Next-page, exit and backlight marks shared by all menu pages.
    fn draw_common_menu_icons(&mut self) {
        self.draw_icon(&assets::ICON_NEXT, assets::BUTTON_ICON_B_E_ROW, assets::RIGHT_BUTTON_COLUMN);
        self.draw_icon(&assets::ICON_EXIT, assets::BUTTON_ICON_C_D_ROW, assets::RIGHT_BUTTON_COLUMN);
        self.draw_icon(&assets::ICON_LED, assets::BUTTON_ICON_C_D_ROW, assets::LEFT_BUTTON_COLUMN);
    }

    fn draw_watch_status(&mut self) {
        self.buffer.fill(0, LCD_ROWS, 0x00);

        self.draw_icon(&assets::ICON_BLUETOOTH, 0, assets::LEFT_STATUS_ICON_COLUMN);
        if !self.link.is_radio_on() {
            self.or_icon(&assets::ICON_CROSS, 0, assets::LEFT_STATUS_ICON_COLUMN);
        }
        self.draw_icon(&assets::ICON_PHONE, 0, assets::CENTER_STATUS_ICON_COLUMN);
        if !self.link.is_connected() {
            self.or_icon(&assets::ICON_CROSS, 0, assets::CENTER_STATUS_ICON_COLUMN);
        }

        let mv = self.power.battery_voltage_mv();
        let battery = if self.power.is_charging() {
            &assets::ICON_BATTERY_CHARGING
        } else if mv < BATTERY_EMPTY_MV {
            &assets::ICON_BATTERY_LOW
        } else if mv > BATTERY_FULL_MV {
            &assets::ICON_BATTERY_FULL
        } else {
            &assets::ICON_BATTERY_MEDIUM
        };
        self.draw_icon(battery, 0, assets::RIGHT_STATUS_ICON_COLUMN);

        let mut voltage: String<8> = String::new();
        write!(voltage, "{}.{}V", mv / 1000, (mv % 1000) / 100).ok();
        let mut cursor = Cursor::at(29, 8, 0x01);
        write_str(&mut self.buffer, &mut cursor, Font::Watch7, &voltage);

        self.buffer
            .copy_rows(&assets::WAVY_LINE, 40, assets::WAVY_LINE_ROWS);

        let address = self.link.local_address();
        let mut cursor = Cursor::at(50, 1, 0x01);
        write_str(&mut self.buffer, &mut cursor, Font::Watch7, &address);

        let mut version: String<16> = String::new();
        write!(version, "Rev {FIRMWARE_VERSION}").ok();
        let mut cursor = Cursor::at(75, 1, 0x01);
        write_str(&mut self.buffer, &mut cursor, Font::Watch7, &version);
    }

    // ── shared plumbing ─────────────────────────────────────────────────

    fn draw_toggle_icon(&mut self, on: bool, row: usize, col: usize) {
        let icon = if on {
            &assets::ICON_CHECK
        } else {
            &assets::ICON_CROSS
        };
        self.draw_icon(icon, row, col);
    }

    fn draw_icon(&mut self, icon: &[u8], row: usize, col: usize) {
        self.buffer
            .copy_columns(icon, row, assets::ICON_ROWS, col, assets::ICON_COLS);
    }

    fn or_icon(&mut self, icon: &[u8], row: usize, col: usize) {
        for (index, byte) in icon.iter().enumerate() {
            let dr = index / assets::ICON_COLS;
            let dc = index % assets::ICON_COLS;
            self.buffer
                .or_byte(row.saturating_add(dr), col.saturating_add(dc), *byte);
        }
    }

    fn stop_display_timer(&mut self, timers: &mut TimerService) {
        if let Some(id) = self.display_timer {
            timers.stop(id);
        }
    }

    #[allow(clippy::indexing_slicing)] // Safety: mode discriminants index the COUNT-sized table
    fn start_mode_timeout(&mut self, timers: &mut TimerService) {
        let seconds = MODE_TIMEOUT_SECS[self.mode as usize];
        if let Some(id) = self.display_timer {
            timers.arm(id, seconds, false, QueueId::Display, MsgType::ModeTimeout, 0);
            timers.start(id);
        }
    }

    /// Push `count` rows starting at `start` to the panel.
    ///
    /// The panel's convention is 0 = pixel on, so the region is bit-inverted
    /// on the way out unless the invert-display setting is active.
    fn send_rows(&mut self, start: usize, count: usize) {
        let invert_on_wire = self.settings.get(SettingKey::InvertDisplay) & 0x01 == 0;
        let mut frames: Vec<LcdRow, LCD_ROWS> = Vec::new();
        for row in self.buffer.region(start, count) {
            let mut frame = *row;
            if invert_on_wire {
                for byte in &mut frame.data {
                    *byte = !*byte;
                }
            }
            if frames.push(frame).is_err() {
                break;
            }
        }
        if let Err(err) = self.lcd.write_rows(&frames) {
            log::error!("lcd write failed: {err:?}");
        }
    }

    /// Bindings valid in every mode: backlight on the LED button, master
    /// reset on a long F hold, simple presses forwarded in phone modes.
    fn configure_mode_independent_buttons(&mut self) {
        let modes = [
            DisplayMode::Idle,
            DisplayMode::Application,
            DisplayMode::Notification,
            DisplayMode::ScrollNotification,
        ];
        for mode in modes {
            self.buttons.enable_action(
                mode,
                ButtonIndex::D,
                PressType::Immediate,
                MsgType::LedChange,
                led::ON,
            );
            self.buttons.enable_action(
                mode,
                ButtonIndex::D,
                PressType::Pressed,
                MsgType::LedChange,
                led::START_OFF_TIMER,
            );
            self.buttons.enable_action(
                mode,
                ButtonIndex::F,
                PressType::LongHold,
                MsgType::SoftwareReset,
                reset::MASTER,
            );
        }

        let forwarded = [
            ButtonIndex::A,
            ButtonIndex::B,
            ButtonIndex::C,
            ButtonIndex::F,
            ButtonIndex::Pound,
        ];
        for mode in [
            DisplayMode::Application,
            DisplayMode::Notification,
            DisplayMode::ScrollNotification,
        ] {
            for button in forwarded {
                self.buttons.enable_action(
                    mode,
                    button,
                    PressType::Pressed,
                    MsgType::ButtonEvent,
                    button as u8,
                );
            }
        }
    }
}
