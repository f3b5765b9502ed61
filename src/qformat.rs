//! Fixed point output formats
//!
//! A raw value `v` in Qm.n stands for `v / 2^n`.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct QFormat {
    /// Integer bits, sign bit included.
    pub int_bits: u32,
    pub frac_bits: u32,
    pub signed: bool,
}

/// `log2_u16` output.
pub const Q4_12: QFormat = QFormat {
    int_bits: 4,
    frac_bits: 12,
    signed: false,
};

/// `log2_u32` output.
pub const Q5_27: QFormat = QFormat {
    int_bits: 5,
    frac_bits: 27,
    signed: false,
};

/// `log2_i32` output: 1 sign bit, 5 integer bits.
pub const Q6_10: QFormat = QFormat {
    int_bits: 6,
    frac_bits: 10,
    signed: true,
};

impl QFormat {
    #[inline(always)]
    pub const fn width(&self) -> u32 {
        self.int_bits + self.frac_bits
    }

    #[inline(always)]
    pub const fn one(&self) -> u32 {
        1 << self.frac_bits
    }

    #[inline(always)]
    pub const fn integer_part(&self, raw: u32) -> u32 {
        raw >> self.frac_bits
    }

    #[inline(always)]
    pub const fn fraction(&self, raw: u32) -> u32 {
        raw & (self.one() - 1)
    }

    /// Diagnostic conversion, not used by the kernels.
    pub fn to_f64(&self, raw: i64) -> f64 {
        raw as f64 / f64::from(self.one())
    }
}
