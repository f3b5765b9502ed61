use std::mem::size_of;

/// Index of the most significant set bit.
///
/// The bit is located by halving the search window, so a W-bit word
/// takes log2(W) tests. Zero falls through the scan and reports 0.
pub trait HighBit {
    fn high_bit(self) -> u32;
}

macro_rules! high_bit_impl {
    ($t:ty) => {
        impl HighBit for $t {
            #[inline(always)]
            fn high_bit(self) -> u32 {
                let mut y = 0;
                let mut half = (size_of::<$t>() * 8 / 2) as u32;

                while half > 0 {
                    if (self >> y) >> half != 0 {
                        y += half;
                    }
                    half >>= 1;
                }

                y
            }
        }
    };
}

high_bit_impl!(u16);
high_bit_impl!(u32);
high_bit_impl!(u64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_falls_through() {
        assert_eq!(0u16.high_bit(), 0);
        assert_eq!(0u32.high_bit(), 0);
    }

    #[test]
    fn matches_leading_zeros() {
        for v in 1..=u16::max_value() {
            assert_eq!(v.high_bit(), 15 - v.leading_zeros());
        }

        for k in 0..32 {
            let p = 1u32 << k;
            assert_eq!(p.high_bit(), k);
            assert_eq!((p | (p - 1)).high_bit(), k);
        }

        for k in 0..64 {
            assert_eq!((1u64 << k).high_bit(), k);
        }
        assert_eq!(u64::max_value().high_bit(), 63);
    }
}
