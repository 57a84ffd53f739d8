//! The sensor task's state machine.
//!
//! [`SensorCore`] owns the I2C bus and the interrupt line mask. Like the
//! display core it is synchronous: the owning task feeds it messages and
//! drains its outbox. The interrupt itself never reaches this code; the
//! ISR posts a send-data message and the handler runs in task context.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use heapless::Vec;
use messaging::options::{accel_host, accel_setup, led};
use messaging::{route, Message, MsgType, Outbox, MSG_BUFFER_CAPACITY};
use platform::InterruptLine;

use crate::config::{InterruptControl, SensorConfig, SidControl};
use crate::registers;

/// Fixed bus address of the part.
pub const I2C_ADDRESS: u8 = 0x0F;

/// Power-up settle time before the first register access.
const POWER_UP_DELAY_MS: u32 = 20;

/// State machine behind the background sensor task.
pub struct SensorCore<I2C, IRQ> {
    /// Register-level bus access.
    pub bus: I2C,
    /// The accelerometer's interrupt line mask.
    pub irq: IRQ,
    config: SensorConfig,
    enabled: bool,
}

impl<I2C, IRQ> SensorCore<I2C, IRQ>
where
    I2C: I2c,
    IRQ: InterruptLine,
{
    /// A core over its bus and interrupt line, before [`init`].
    ///
    /// [`init`]: SensorCore::init
    pub fn new(bus: I2C, irq: IRQ) -> Self {
        SensorCore {
            bus,
            irq,
            config: SensorConfig::default(),
            enabled: false,
        }
    }

    /// Host-tunable configuration block.
    #[must_use]
    pub fn config(&self) -> SensorConfig {
        self.config
    }

    /// `true` after `enable`, `false` after `disable` or power-up.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// One-time register program bringing the part to a known state.
    ///
    /// The part starts in standby with the tap and tilt engines configured;
    /// a later enable message brings it out. Identity and self-test
    /// mismatches are logged, not fatal: the part may still produce usable
    /// data and the host can probe it through the access passthrough.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), I2C::Error> {
        delay.delay_ms(POWER_UP_DELAY_MS);

        // Engine configuration registers only accept writes in standby.
        self.write_register(registers::CTRL_REG1, registers::PC1_STANDBY_MODE)?;
        self.write_register(
            registers::CTRL_REG2,
            registers::TILT_FDM | registers::TILT_FUM,
        )?;
        self.write_register(
            registers::CTRL_REG3,
            registers::WUF_ODR_25HZ | registers::TAP_ODR_400HZ,
        )?;
        self.write_register(registers::INT_CTRL_REG1, registers::IEN | registers::IEA)?;
        self.write_register(registers::INT_CTRL_REG2, registers::ZBW)?;
        self.write_register(registers::INT_CTRL_REG3, registers::TFDM)?;

        // 0.2 s double-tap window, then the tap and motion thresholds.
        self.write_register(registers::TDT_TIMER, 0x50)?;
        self.write_register(registers::TDT_L_THRESH, 78)?;
        self.write_register(registers::TDT_H_THRESH, 128)?;
        self.write_register(registers::WUF_TIMER, 10)?;
        self.write_register(registers::WUF_THRESH, 0x08)?;

        let mut response = [0u8; 1];
        self.read_registers(registers::DCST_RESP, &mut response)?;
        if response[0] != registers::DCST_RESP_EXPECTED {
            log::warn!("self-test response {:#04x}", response[0]);
        }

        let mut identity = [0u8; 2];
        self.read_registers(registers::WHO_AM_I, &mut identity)?;
        if identity[0] != registers::WHO_AM_I_EXPECTED {
            log::warn!("unexpected part identity {:#04x}", identity[0]);
        }
        log::info!(
            "accelerometer up, identity {:#04x} tilt {:#04x}",
            identity[0],
            identity[1]
        );

        self.config = SensorConfig::default();
        self.disable()?;
        self.irq.enable();
        Ok(())
    }

    /// Bring the part out of standby into the configured operating mode.
    pub fn enable(&mut self) -> Result<(), I2C::Error> {
        self.write_register(registers::CTRL_REG1, self.config.operating_mode)?;
        if self.config.interrupt_control == InterruptControl::Enabled {
            self.release_interrupt()?;
        }
        self.irq.enable();
        self.enabled = true;
        Ok(())
    }

    /// Put the part into standby and mask its interrupt.
    pub fn disable(&mut self) -> Result<(), I2C::Error> {
        self.write_register(registers::CTRL_REG1, registers::PC1_STANDBY_MODE)?;
        self.irq.disable();
        self.enabled = false;
        Ok(())
    }

    /// Task-context half of the interrupt: diagnose, dispatch taps, forward
    /// to the host, release the latched source.
    pub fn handle_send_data(
        &mut self,
        phone_connected: bool,
        out: &mut Outbox,
    ) -> Result<(), I2C::Error> {
        let mut tap_block = [0u8; 6];
        self.read_registers(registers::TDT_TIMER, &mut tap_block)?;
        if tap_block != registers::TAP_BLOCK_EXPECTED {
            log::warn!("bad i2c burst read");
        }

        let mut response = [0u8; 1];
        self.read_registers(registers::DCST_RESP, &mut response)?;
        if response[0] != registers::DCST_RESP_EXPECTED {
            log::warn!("bad i2c read");
        }

        let mut source = [0u8; 1];
        self.read_registers(registers::INT_SRC_REG2, &mut source)?;
        if source[0] & registers::INT_TAP_SINGLE == registers::INT_TAP_SINGLE {
            self.on_single_tap();
        } else if source[0] & registers::INT_TAP_DOUBLE == registers::INT_TAP_DOUBLE {
            route(out, Message::new(MsgType::LedChange, led::TOGGLE));
        }

        if phone_connected {
            match self.config.sid_control {
                SidControl::SendInterrupt => {
                    route(
                        out,
                        Message::new(MsgType::AccelerometerHost, accel_host::IS_INTERRUPT),
                    );
                }
                SidControl::SendData => {
                    let length = usize::from(self.config.sid_length).min(MSG_BUFFER_CAPACITY);
                    let mut window = [0u8; MSG_BUFFER_CAPACITY];
                    let Some(slice) = window.get_mut(..length) else {
                        return Ok(());
                    };
                    self.read_registers(self.config.sid_addr, slice)?;
                    route(
                        out,
                        Message::with_buffer(
                            MsgType::AccelerometerHost,
                            accel_host::IS_DATA,
                            slice,
                        ),
                    );
                }
            }
        }

        self.release_interrupt()
    }

    /// Overwrite one field of the configuration block, or drive the
    /// interrupt line mask directly.
    pub fn handle_setup(&mut self, msg: &Message) {
        match msg.options {
            accel_setup::ENABLE_LINE => {
                self.irq.enable();
                return;
            }
            accel_setup::DISABLE_LINE => {
                self.irq.disable();
                return;
            }
            _ => {}
        }

        let Some(&value) = msg.buffer.first() else {
            log::warn!("sensor setup without a payload");
            return;
        };
        match msg.options {
            accel_setup::OPERATING_MODE => self.config.operating_mode = value,
            accel_setup::INTERRUPT_CONTROL => {
                self.config.interrupt_control = InterruptControl::from_byte(value);
            }
            accel_setup::SID_CONTROL => self.config.sid_control = SidControl::from_byte(value),
            accel_setup::SID_ADDR => self.config.sid_addr = value,
            accel_setup::SID_LENGTH => self.config.sid_length = value,
            other => log::warn!("unhandled sensor setup option {other}"),
        }
    }

    /// Raw register read/write passthrough for the host.
    ///
    /// Payload layout is `{address, size, data...}`; a read responds with a
    /// message whose options echo the size.
    pub fn handle_access(&mut self, msg: &Message, out: &mut Outbox) -> Result<(), I2C::Error> {
        let (Some(&address), Some(&size)) = (msg.buffer.first(), msg.buffer.get(1)) else {
            log::warn!("malformed sensor access payload");
            return Ok(());
        };
        let size = usize::from(size).min(MSG_BUFFER_CAPACITY);

        if msg.options == messaging::options::accel_access::WRITE {
            let Some(data) = msg.buffer.get(2..2usize.saturating_add(size)) else {
                log::warn!("sensor access write shorter than its size field");
                return Ok(());
            };
            let mut frame: Vec<u8, { MSG_BUFFER_CAPACITY + 1 }> = Vec::new();
            // Capacity covers address plus a full-size payload.
            frame.push(address).ok();
            frame.extend_from_slice(data).ok();
            self.bus.write(I2C_ADDRESS, &frame)?;
        } else {
            let mut window = [0u8; MSG_BUFFER_CAPACITY];
            let Some(slice) = window.get_mut(..size) else {
                return Ok(());
            };
            self.read_registers(address, slice)?;
            #[allow(clippy::cast_possible_truncation)]
            let options = size as u8;
            route(
                out,
                Message::with_buffer(MsgType::AccelerometerResponse, options, slice),
            );
        }
        Ok(())
    }

    /// Single tap currently does nothing; the branch stays as a place to
    /// hang a gesture on later.
    fn on_single_tap(&mut self) {}

    fn release_interrupt(&mut self) -> Result<(), I2C::Error> {
        let mut scratch = [0u8; 1];
        self.read_registers(registers::INT_REL, &mut scratch)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.bus.write(I2C_ADDRESS, &[register, value])
    }

    fn read_registers(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), I2C::Error> {
        self.bus.write_read(I2C_ADDRESS, &[register], buffer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::indexing_slicing)] // Tests index the outbox
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
    use messaging::QueueId;
    use platform::mocks::MockIrq;
    // The parent's heapless::Vec would otherwise shadow the growable one
    // the transaction helpers build.
    use std::vec::Vec;

    fn write(register: u8, value: u8) -> Transaction {
        Transaction::write(I2C_ADDRESS, vec![register, value])
    }

    fn read(register: u8, response: Vec<u8>) -> Transaction {
        Transaction::write_read(I2C_ADDRESS, vec![register], response)
    }

    fn send_data_preamble(tap_source: u8) -> Vec<Transaction> {
        vec![
            read(
                registers::TDT_TIMER,
                registers::TAP_BLOCK_EXPECTED.to_vec(),
            ),
            read(registers::DCST_RESP, vec![registers::DCST_RESP_EXPECTED]),
            read(registers::INT_SRC_REG2, vec![tap_source]),
        ]
    }

    #[test]
    fn test_init_programs_the_documented_sequence() {
        let expectations = [
            write(registers::CTRL_REG1, registers::PC1_STANDBY_MODE),
            write(registers::CTRL_REG2, registers::TILT_FDM | registers::TILT_FUM),
            write(
                registers::CTRL_REG3,
                registers::WUF_ODR_25HZ | registers::TAP_ODR_400HZ,
            ),
            write(registers::INT_CTRL_REG1, registers::IEN | registers::IEA),
            write(registers::INT_CTRL_REG2, registers::ZBW),
            write(registers::INT_CTRL_REG3, registers::TFDM),
            write(registers::TDT_TIMER, 0x50),
            write(registers::TDT_L_THRESH, 78),
            write(registers::TDT_H_THRESH, 128),
            write(registers::WUF_TIMER, 10),
            write(registers::WUF_THRESH, 0x08),
            read(registers::DCST_RESP, vec![0x55]),
            read(registers::WHO_AM_I, vec![0x01, 0x20]),
            // Init parks the part in standby until an explicit enable.
            write(registers::CTRL_REG1, registers::PC1_STANDBY_MODE),
        ];
        let mut bus = Mock::new(&expectations);
        let mut core = SensorCore::new(bus.clone(), MockIrq::default());

        core.init(&mut NoopDelay).unwrap();
        assert!(!core.is_enabled());
        assert!(core.irq.enabled);
        bus.done();
    }

    #[test]
    fn test_enabled_tracks_only_enable_and_disable() {
        let expectations = [
            write(registers::CTRL_REG1, SensorConfig::default().operating_mode),
            write(registers::CTRL_REG1, registers::PC1_STANDBY_MODE),
        ];
        let mut bus = Mock::new(&expectations);
        let mut core = SensorCore::new(bus.clone(), MockIrq::default());
        assert!(!core.is_enabled());

        core.enable().unwrap();
        assert!(core.is_enabled());
        assert!(core.irq.enabled);

        core.disable().unwrap();
        assert!(!core.is_enabled());
        assert!(!core.irq.enabled);
        bus.done();
    }

    #[test]
    fn test_single_tap_forwards_one_data_message_and_no_led_change() {
        let mut expectations = send_data_preamble(registers::INT_TAP_SINGLE);
        expectations.push(read(registers::XOUT_L, vec![1, 2, 3, 4, 5, 6]));
        expectations.push(read(registers::INT_REL, vec![0]));
        let mut bus = Mock::new(&expectations);
        let mut core = SensorCore::new(bus.clone(), MockIrq::default());

        let mut out = Outbox::new();
        core.handle_send_data(true, &mut out).unwrap();

        assert_eq!(out.len(), 1);
        let (queue, msg) = &out[0];
        assert_eq!(*queue, QueueId::Radio);
        assert_eq!(msg.msg_type, MsgType::AccelerometerHost);
        assert_eq!(msg.options, accel_host::IS_DATA);
        assert_eq!(msg.len(), 6);
        bus.done();
    }

    #[test]
    fn test_double_tap_additionally_toggles_the_led() {
        let mut expectations = send_data_preamble(registers::INT_TAP_DOUBLE);
        expectations.push(read(registers::XOUT_L, vec![0; 6]));
        expectations.push(read(registers::INT_REL, vec![0]));
        let mut bus = Mock::new(&expectations);
        let mut core = SensorCore::new(bus.clone(), MockIrq::default());

        let mut out = Outbox::new();
        core.handle_send_data(true, &mut out).unwrap();

        assert!(out.iter().any(|(queue, msg)| {
            *queue == QueueId::Background
                && msg.msg_type == MsgType::LedChange
                && msg.options == led::TOGGLE
        }));
        assert!(out
            .iter()
            .any(|(_, msg)| msg.msg_type == MsgType::AccelerometerHost));
        bus.done();
    }

    #[test]
    fn test_disconnected_phone_suppresses_the_host_forward() {
        let mut expectations = send_data_preamble(0);
        expectations.push(read(registers::INT_REL, vec![0]));
        let mut bus = Mock::new(&expectations);
        let mut core = SensorCore::new(bus.clone(), MockIrq::default());

        let mut out = Outbox::new();
        core.handle_send_data(false, &mut out).unwrap();
        assert!(out.is_empty());
        bus.done();
    }

    #[test]
    fn test_interrupt_only_config_skips_the_window_read() {
        let mut expectations = send_data_preamble(0);
        expectations.push(read(registers::INT_REL, vec![0]));
        let mut bus = Mock::new(&expectations);
        let mut core = SensorCore::new(bus.clone(), MockIrq::default());

        core.handle_setup(&Message::with_buffer(
            MsgType::AccelerometerSetup,
            accel_setup::SID_CONTROL,
            &[1],
        ));

        let mut out = Outbox::new();
        core.handle_send_data(true, &mut out).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].1.options, accel_host::IS_INTERRUPT);
        assert!(out[0].1.is_empty());
        bus.done();
    }

    #[test]
    fn test_setup_drives_the_interrupt_line_directly() {
        let mut bus = Mock::new(&[]);
        let mut core = SensorCore::new(bus.clone(), MockIrq::default());

        core.handle_setup(&Message::new(
            MsgType::AccelerometerSetup,
            accel_setup::ENABLE_LINE,
        ));
        assert!(core.irq.enabled);
        core.handle_setup(&Message::new(
            MsgType::AccelerometerSetup,
            accel_setup::DISABLE_LINE,
        ));
        assert!(!core.irq.enabled);
        bus.done();
    }

    #[test]
    fn test_access_read_echoes_size_in_the_response() {
        let expectations = [read(registers::CTRL_REG1, vec![0xAB, 0xCD])];
        let mut bus = Mock::new(&expectations);
        let mut core = SensorCore::new(bus.clone(), MockIrq::default());

        let mut out = Outbox::new();
        core.handle_access(
            &Message::with_buffer(
                MsgType::AccelerometerAccess,
                messaging::options::accel_access::READ,
                &[registers::CTRL_REG1, 2],
            ),
            &mut out,
        )
        .unwrap();

        assert_eq!(out.len(), 1);
        let (_, msg) = &out[0];
        assert_eq!(msg.msg_type, MsgType::AccelerometerResponse);
        assert_eq!(msg.options, 2);
        assert_eq!(&msg.buffer[..], &[0xAB, 0xCD]);
        bus.done();
    }

    #[test]
    fn test_access_write_frames_address_and_data() {
        let expectations = [Transaction::write(
            I2C_ADDRESS,
            vec![registers::WUF_THRESH, 0x20],
        )];
        let mut bus = Mock::new(&expectations);
        let mut core = SensorCore::new(bus.clone(), MockIrq::default());

        let mut out = Outbox::new();
        core.handle_access(
            &Message::with_buffer(
                MsgType::AccelerometerAccess,
                messaging::options::accel_access::WRITE,
                &[registers::WUF_THRESH, 1, 0x20],
            ),
            &mut out,
        )
        .unwrap();
        assert!(out.is_empty());
        bus.done();
    }
}
