//! KIONIX-family accelerometer register map.
//!
//! Addresses and bit names follow the part's datasheet. Only the registers
//! this firmware touches are listed; the host's raw-access passthrough can
//! reach the rest by address.

/// X axis output, low byte. Start of the six-byte XYZ window.
pub const XOUT_L: u8 = 0x06;

/// Digital communication self-test response; reads a fixed pattern.
pub const DCST_RESP: u8 = 0x0C;
/// Expected [`DCST_RESP`] value.
pub const DCST_RESP_EXPECTED: u8 = 0x55;

/// Part identity register.
pub const WHO_AM_I: u8 = 0x0F;
/// Expected [`WHO_AM_I`] value for this part.
pub const WHO_AM_I_EXPECTED: u8 = 0x01;
/// Current tilt position, directly after [`WHO_AM_I`].
pub const TILT_POS_CUR: u8 = 0x10;

/// Latched interrupt source, second bank (tap bits).
pub const INT_SRC_REG2: u8 = 0x16;
/// Single tap detected.
pub const INT_TAP_SINGLE: u8 = 0x04;
/// Double tap detected.
pub const INT_TAP_DOUBLE: u8 = 0x08;

/// Reading this register releases the latched interrupt line.
pub const INT_REL: u8 = 0x1A;

/// Main control: power mode, resolution, engine enables.
pub const CTRL_REG1: u8 = 0x1B;
/// [`CTRL_REG1`] operating mode (cleared = standby).
pub const PC1_OPERATING_MODE: u8 = 0x80;
/// [`CTRL_REG1`] standby mode.
pub const PC1_STANDBY_MODE: u8 = 0x00;
/// [`CTRL_REG1`] 12-bit resolution.
pub const RESOLUTION_12BIT: u8 = 0x40;
/// [`CTRL_REG1`] tap/double-tap engine enable.
pub const TAP_ENABLE_TDTE: u8 = 0x04;
/// [`CTRL_REG1`] tilt position engine enable.
pub const TILT_ENABLE_TPE: u8 = 0x01;

/// Tilt direction enables.
pub const CTRL_REG2: u8 = 0x1C;
/// [`CTRL_REG2`] face-up state mask.
pub const TILT_FUM: u8 = 0x01;
/// [`CTRL_REG2`] face-down state mask.
pub const TILT_FDM: u8 = 0x02;

/// Output data rates for the wake-up and tap engines.
pub const CTRL_REG3: u8 = 0x1D;
/// [`CTRL_REG3`] 25 Hz wake-up (motion) output data rate.
pub const WUF_ODR_25HZ: u8 = 0x02;
/// [`CTRL_REG3`] 400 Hz tap output data rate.
pub const TAP_ODR_400HZ: u8 = 0x0C;

/// Interrupt pin control.
pub const INT_CTRL_REG1: u8 = 0x1E;
/// [`INT_CTRL_REG1`] physical interrupt pin enable.
pub const IEN: u8 = 0x20;
/// [`INT_CTRL_REG1`] interrupt active high.
pub const IEA: u8 = 0x10;

/// Motion interrupt axis enables.
pub const INT_CTRL_REG2: u8 = 0x1F;
/// [`INT_CTRL_REG2`] Z-axis motion enable.
pub const ZBW: u8 = 0x20;

/// Tap interrupt direction enables.
pub const INT_CTRL_REG3: u8 = 0x20;
/// [`INT_CTRL_REG3`] Z-axis face-down tap enable.
pub const TFDM: u8 = 0x08;

/// Motion (wake-up) debounce counter.
pub const WUF_TIMER: u8 = 0x29;

/// Double-tap window timer. Start of the six-byte tap timing block used by
/// the burst-read diagnostic.
pub const TDT_TIMER: u8 = 0x2B;
/// Tap high threshold.
pub const TDT_H_THRESH: u8 = 0x2C;
/// Tap low threshold.
pub const TDT_L_THRESH: u8 = 0x2D;

/// Motion (wake-up) threshold.
pub const WUF_THRESH: u8 = 0x5A;

/// Expected content of the six-byte tap timing block after init.
///
/// Burst-reading and comparing it is a cheap I2C integrity diagnostic; a
/// mismatch is logged, never acted on.
pub const TAP_BLOCK_EXPECTED: [u8; 6] = [0x78, 0xCB, 0x1A, 0xA2, 0x24, 0x28];
