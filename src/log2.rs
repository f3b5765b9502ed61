//! Fixed point base-2 logarithm
//!
//! The integer part is the index of the highest set bit, the fraction is
//! resolved one bit per step by squaring the normalized mantissa: a value
//! in [1.0, 2.0) squared either stays below 2.0 (next bit is 0) or not
//! (next bit is 1, halve it back into range).

use crate::error::*;
use crate::maths::HighBit;
use crate::qformat::*;

/// Digit recurrence over a mantissa normalized to Q(width - 1).
///
/// `y` carries the integer part on entry and gains `frac_bits` bits.
#[inline(always)]
fn refine(mut y: u32, mut xm: u64, width: u32, frac_bits: u32) -> u32 {
    // Half a unit of the Q(width - 1) rescale
    let bias = 1u64 << (width - 2);

    for _ in 0..frac_bits {
        y <<= 1;
        let xp = xm * xm + bias;
        if xp >> (2 * width - 1) != 0 {
            y += 1;
            xm = xp >> width;
        } else {
            xm = xp >> (width - 1);
        }
    }

    y
}

#[inline(always)]
fn log2_mag32(x: u32, frac_bits: u32) -> u32 {
    let k = x.high_bit();

    refine(k, u64::from(x) << (31 - k), 32, frac_bits)
}

/// log2 of a 16-bit value in Q4.12.
pub fn log2_u16(x: u16) -> Result<u16> {
    if x == 0 {
        debug!("log2_u16: zero input rejected");
        return Err(Error::NonPositive);
    }

    let k = x.high_bit();
    let y = refine(k, u64::from(x) << (15 - k), 16, Q4_12.frac_bits) as u16;

    trace!("log2_u16({}) = {:#06x}", x, y);

    Ok(y)
}

/// log2 of a 32-bit value in Q5.27.
pub fn log2_u32(x: u32) -> Result<u32> {
    if x == 0 {
        debug!("log2_u32: zero input rejected");
        return Err(Error::NonPositive);
    }

    let y = log2_mag32(x, Q5_27.frac_bits);

    trace!("log2_u32({}) = {:#010x}", x, y);

    Ok(y)
}

/// Signed log2 in Q6.10: log2 of the magnitude carrying the sign of `x`.
///
/// `i32::MIN` is accepted, its magnitude is 2^31.
pub fn log2_i32(x: i32) -> Result<i16> {
    if x == 0 {
        debug!("log2_i32: zero input rejected");
        return Err(Error::NonPositive);
    }

    // At most 31 << 10 | 0x3ff, fits in i16
    let y = log2_mag32(x.unsigned_abs(), Q6_10.frac_bits) as i16;
    let y = if x < 0 { -y } else { y };

    trace!("log2_i32({}) = {}", x, y);

    Ok(y)
}

/// Dispatch to the logarithm matching the input width.
pub trait Log2Fixed {
    type Output;

    fn log2_fixed(self) -> Result<Self::Output>;
}

impl Log2Fixed for u16 {
    type Output = u16;

    fn log2_fixed(self) -> Result<u16> {
        log2_u16(self)
    }
}

impl Log2Fixed for u32 {
    type Output = u32;

    fn log2_fixed(self) -> Result<u32> {
        log2_u32(self)
    }
}

impl Log2Fixed for i32 {
    type Output = i16;

    fn log2_fixed(self) -> Result<i16> {
        log2_i32(self)
    }
}
