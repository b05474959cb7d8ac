//! Fixed-point numbers.
//!
//! Lengths, percentages, angles and multipliers travel through the engine as
//! signed 22.10 fixed-point values (`1.0 == 1024`). Source text is converted
//! straight to fixed point, so no floating-point rounding ever reaches a
//! computed value.

use std::fmt;

use serde::{Serialize, Serializer};

/// Number of fractional bits.
pub const RADIX_POINT: u32 = 10;

/// Largest integer part representable without saturating.
const INT_LIMIT: i64 = 1 << (31 - RADIX_POINT);

/// Cap on fractional digits that contribute to the value.
const FRACTION_DIGIT_LIMIT: i64 = 1_000_000;

/// A signed fixed-point number with [`RADIX_POINT`] fractional bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(1 << RADIX_POINT);
    pub const HUNDRED: Fixed = Fixed(100 << RADIX_POINT);

    /// Wrap a raw scaled integer.
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    /// The raw scaled integer.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Convert an integer, saturating at the representable range.
    pub fn from_int(value: i32) -> Self {
        saturate(i64::from(value) << RADIX_POINT)
    }

    /// Integer part, truncated toward zero.
    pub const fn to_int(self) -> i32 {
        self.0 / (1 << RADIX_POINT)
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Fixed-point product, saturating.
    pub fn mul(self, other: Fixed) -> Fixed {
        saturate((i64::from(self.0) * i64::from(other.0)) >> RADIX_POINT)
    }

    /// Fixed-point quotient, saturating. `None` on division by zero.
    pub fn div(self, other: Fixed) -> Option<Fixed> {
        if other.0 == 0 {
            return None;
        }
        Some(saturate((i64::from(self.0) << RADIX_POINT) / i64::from(other.0)))
    }
}

fn saturate(wide: i64) -> Fixed {
    Fixed(wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Parse the leading number in `text`.
///
/// Accepts an optional sign, integer digits and (unless `int_only`) a
/// fraction. Returns the value and the number of bytes consumed; a consumed
/// count of zero means no number was present. Magnitudes beyond the
/// representable range saturate.
pub fn number_from_str(text: &str, int_only: bool) -> (Fixed, usize) {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut negative = false;

    if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
        negative = sign == b'-';
        pos = 1;
    }

    let mut intpart: i64 = 0;
    let mut digits = 0;
    while let Some(d) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        intpart = (intpart * 10 + i64::from(d - b'0')).min(INT_LIMIT);
        digits += 1;
        pos += 1;
    }

    let mut fracpart: i64 = 0;
    let mut pwr: i64 = 1;
    if !int_only
        && bytes.get(pos) == Some(&b'.')
        && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit)
    {
        pos += 1;
        while let Some(d) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
            if pwr < FRACTION_DIGIT_LIMIT {
                fracpart = fracpart * 10 + i64::from(d - b'0');
                pwr *= 10;
            }
            digits += 1;
            pos += 1;
        }
    }

    if digits == 0 {
        return (Fixed::ZERO, 0);
    }

    let magnitude = if intpart >= INT_LIMIT {
        i64::from(i32::MAX)
    } else {
        (intpart << RADIX_POINT) + (fracpart << RADIX_POINT) / pwr
    };
    let value = if negative { -magnitude } else { magnitude };
    (saturate(value), pos)
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = i64::from(self.0);
        let magnitude = raw.abs();
        let int = magnitude >> RADIX_POINT;
        let frac = magnitude & ((1 << RADIX_POINT) - 1);
        // Three decimals, rounded to nearest; 1023/1024 still rounds to 999.
        let millis = (frac * 1000 + (1 << (RADIX_POINT - 1))) >> RADIX_POINT;

        if raw < 0 && (int != 0 || millis != 0) {
            f.write_str("-")?;
        }
        write!(f, "{int}")?;
        if millis != 0 {
            let digits = format!("{millis:03}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl Serialize for Fixed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
