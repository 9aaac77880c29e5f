// SPDX-License-Identifier: MPL-2.0
//! Conversions from decimal values into EXIF rationals.

use super::field::Rational;

/// Denominator of the seconds component produced by [`degrees_to_dms`].
pub const DMS_SECONDS_DENOMINATOR: u32 = 100;

/// Converts decimal degrees to unsigned degrees/minutes/seconds rationals.
///
/// The sign is dropped (hemisphere lives in the `*Ref` fields). Seconds are
/// rounded to two decimal places; a rounding that reaches 60 seconds carries
/// into the minutes, and 60 minutes into the degrees.
#[must_use]
pub fn degrees_to_dms(decimal: f64) -> [Rational; 3] {
    let value = decimal.abs();
    let mut degrees = value.trunc();
    let minutes_decimal = (value - degrees) * 60.0;
    let mut minutes = minutes_decimal.trunc();
    let mut hundredths = ((minutes_decimal - minutes) * 60.0 * f64::from(DMS_SECONDS_DENOMINATOR))
        .round();

    if hundredths >= 60.0 * f64::from(DMS_SECONDS_DENOMINATOR) {
        hundredths -= 60.0 * f64::from(DMS_SECONDS_DENOMINATOR);
        minutes += 1.0;
    }
    if minutes >= 60.0 {
        minutes -= 60.0;
        degrees += 1.0;
    }

    [
        Rational::new(degrees as u32, 1),
        Rational::new(minutes as u32, 1),
        Rational::new(hundredths as u32, DMS_SECONDS_DENOMINATOR),
    ]
}

/// Best rational approximation of `|value|` with a denominator no larger than
/// `max_denominator`, found by walking the continued-fraction convergents and
/// finishing with the closest semiconvergent.
///
/// Non-finite input yields `0/1`; values beyond `u32::MAX` saturate.
#[must_use]
pub fn best_rational(value: f64, max_denominator: u32) -> Rational {
    let value = value.abs();
    if !value.is_finite() {
        return Rational::new(0, 1);
    }
    if value >= f64::from(u32::MAX) {
        return Rational::new(u32::MAX, 1);
    }

    let max_den = u64::from(max_denominator.max(1));
    // Convergents h(n-2)/k(n-2) and h(n-1)/k(n-1).
    let (mut p0, mut q0, mut p1, mut q1) = (0_u64, 1_u64, 1_u64, 0_u64);
    let mut x = value;

    loop {
        let a = x.floor() as u64;
        let q2 = q0 + a * q1;
        if q2 > max_den {
            // Semiconvergent p0 + k*p1 / q0 + k*q1 may beat the last convergent.
            let k = (max_den - q0) / q1;
            let (sp, sq) = (p0 + k * p1, q0 + k * q1);
            let semi_err = (value - sp as f64 / sq as f64).abs();
            let conv_err = (value - p1 as f64 / q1 as f64).abs();
            if semi_err < conv_err {
                (p1, q1) = (sp, sq);
            }
            break;
        }
        let p2 = p0 + a * p1;
        (p0, q0, p1, q1) = (p1, q1, p2, q2);

        let frac = x - x.floor();
        if frac < 1e-9 {
            break;
        }
        x = 1.0 / frac;
    }

    Rational::new(p1.min(u64::from(u32::MAX)) as u32, q1 as u32)
}
