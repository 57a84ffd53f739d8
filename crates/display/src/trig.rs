//! Integer trigonometry for the analogue face.
//!
//! A quarter-wave Q15 sine table plus quadrant identities; no floating
//! point so the results are identical on every target.

/// sin(i degrees) * 32767 for i in 0..=90.
const SINE_Q15: [i32; 91] = [
    0, 572, 1144, 1715, 2286, 2856, 3425, 3993, 4560, 5126, 5690, 6252, 6813, 7371, 7927, 8481,
    9032, 9580, 10126, 10668, 11207, 11743, 12275, 12803, 13328, 13848, 14365, 14876, 15384, 15886,
    16384, 16877, 17364, 17847, 18324, 18795, 19261, 19720, 20174, 20622, 21063, 21498, 21926,
    22348, 22763, 23170, 23571, 23965, 24351, 24730, 25102, 25466, 25822, 26170, 26510, 26842,
    27166, 27482, 27789, 28088, 28378, 28660, 28932, 29197, 29452, 29698, 29935, 30163, 30382,
    30592, 30792, 30983, 31164, 31336, 31499, 31651, 31795, 31928, 32052, 32166, 32270, 32365,
    32449, 32524, 32588, 32643, 32688, 32723, 32748, 32763, 32767,
];

/// sin of an angle in degrees, Q15.
#[must_use]
#[allow(clippy::indexing_slicing)] // Safety: y < 90, so y and 90 - y index the 91-entry table
#[allow(clippy::arithmetic_side_effects)] // Safety: table values fit i16, negation cannot overflow
pub fn sin_q15(angle: i32) -> i32 {
    let x = angle.rem_euclid(360);
    let y = (x % 90) as usize;
    if x < 90 {
        SINE_Q15[y]
    } else if x < 180 {
        SINE_Q15[90 - y]
    } else if x < 270 {
        -SINE_Q15[y]
    } else {
        -SINE_Q15[90 - y]
    }
}

/// cos of an angle in degrees, Q15.
#[must_use]
pub fn cos_q15(angle: i32) -> i32 {
    sin_q15(angle.wrapping_add(90))
}

/// `x*cos(angle) + y*sin(angle)` rounded back to pixels.
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // Safety: |sum| stays within panel radius times Q15 scale
pub fn rotate_point(x: i32, y: i32, angle: i32) -> i32 {
    let sum = x
        .saturating_mul(cos_q15(angle))
        .saturating_add(y.saturating_mul(sin_q15(angle)));
    // Round to nearest, keeping the sign convention of the Q15 product.
    if sum >= 0 {
        (sum + (1 << 14)) >> 15
    } else {
        -((-sum + (1 << 14)) >> 15)
    }
}

/// Hour-hand angle in degrees for an hour and minute.
///
/// The hand sweeps 360 degrees in 720 minutes; ties round up.
#[must_use]
pub fn hour_hand_angle(hour: u8, minute: u8) -> u16 {
    let total = u32::from(hour % 12)
        .saturating_mul(60)
        .saturating_add(u32::from(minute));
    #[allow(clippy::cast_possible_truncation)]
    let angle = ((total.saturating_mul(360).saturating_add(360)) / 720) % 360;
    angle as u16
}

/// Minute-hand angle in degrees.
#[must_use]
pub fn minute_hand_angle(minute: u8) -> u16 {
    (u16::from(minute).saturating_mul(6)) % 360
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)] // Reference math in assertions
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cardinal_points() {
        assert_eq!(sin_q15(0), 0);
        assert_eq!(sin_q15(90), 32767);
        assert_eq!(sin_q15(180), 0);
        assert_eq!(sin_q15(270), -32767);
        assert_eq!(cos_q15(0), 32767);
        assert_eq!(cos_q15(180), -32767);
    }

    #[test]
    fn test_negative_angles_wrap() {
        assert_eq!(sin_q15(-90), sin_q15(270));
        assert_eq!(sin_q15(-360), sin_q15(0));
    }

    #[test]
    fn test_rotate_point_identity_at_zero() {
        assert_eq!(rotate_point(48, 0, 0), 48);
        assert_eq!(rotate_point(0, 48, 90), 48);
        assert_eq!(rotate_point(48, 0, 180), -48);
    }

    #[test]
    fn test_hour_hand_examples() {
        assert_eq!(hour_hand_angle(0, 0), 0);
        assert_eq!(hour_hand_angle(3, 0), 90);
        assert_eq!(hour_hand_angle(6, 0), 180);
        assert_eq!(hour_hand_angle(12, 0), 0);
        // 10:30 -> 630 minutes -> 315 degrees
        assert_eq!(hour_hand_angle(10, 30), 315);
        // odd totals round up: 00:01 -> 0.5 degrees -> 1
        assert_eq!(hour_hand_angle(0, 1), 1);
    }

    proptest! {
        #[test]
        fn test_hour_hand_matches_rounded_reference(hour in 0u8..24, minute in 0u8..60) {
            let total = f64::from(u32::from(hour % 12) * 60 + u32::from(minute));
            let reference = ((total * 360.0 / 720.0).round() as u32) % 360;
            prop_assert_eq!(u32::from(hour_hand_angle(hour, minute)), reference);
        }

        #[test]
        fn test_minute_hand_is_six_degrees_per_minute(minute in 0u8..60) {
            prop_assert_eq!(minute_hand_angle(minute), u16::from(minute) * 6 % 360);
        }

        #[test]
        fn test_sine_matches_float_reference(angle in 0i32..360) {
            let reference = (f64::from(angle).to_radians().sin() * 32767.0).round() as i32;
            prop_assert!((sin_q15(angle) - reference).abs() <= 1);
        }
    }
}
