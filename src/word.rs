use std::fmt::{Binary, Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Sub};

/// Unsigned integer type used for bit-vectors, binomial coefficients and ranks.
///
/// Bit `0` is the least significant position. A bit-vector of width `n` only
/// uses positions `0..n`.
pub trait BitWord:
    Copy
    + Ord
    + Hash
    + Debug
    + Display
    + Binary
    + Add<Output = Self>
    + Sub<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Number of bit positions in the word.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn count_ones(self) -> u32;

    /// Whether the bit at `index` is set. `index` must be below `BITS`.
    fn bit(self, index: u32) -> bool;

    /// Returns `self` with the bit at `index` set. `index` must be below `BITS`.
    fn with_bit(self, index: u32) -> Self;

    /// A word with the `width` lowest bits set. `width` may equal `BITS`.
    fn low_mask(width: u32) -> Self;

    fn to_u128(self) -> u128;

    fn from_u128(value: u128) -> Option<Self>;
}

macro_rules! impl_bit_word {
    ($($ty:ty),*) => {
        $(
            impl BitWord for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                fn bit(self, index: u32) -> bool {
                    debug_assert!(index < Self::BITS);
                    (self >> index) & 1 == 1
                }

                fn with_bit(self, index: u32) -> Self {
                    debug_assert!(index < Self::BITS);
                    self | (1 << index)
                }

                fn low_mask(width: u32) -> Self {
                    debug_assert!(width <= Self::BITS);
                    <$ty>::MAX.checked_shr(Self::BITS - width).unwrap_or(0)
                }

                fn to_u128(self) -> u128 {
                    u128::from(self)
                }

                fn from_u128(value: u128) -> Option<Self> {
                    Self::try_from(value).ok()
                }
            }
        )*
    };
}

impl_bit_word!(u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::BitWord;

    #[test]
    fn low_mask_covers_whole_word() {
        assert_eq!(<u8 as BitWord>::low_mask(0), 0);
        assert_eq!(<u8 as BitWord>::low_mask(3), 0b111);
        assert_eq!(<u8 as BitWord>::low_mask(8), u8::MAX);
        assert_eq!(<u128 as BitWord>::low_mask(128), u128::MAX);
        assert_eq!(<u64 as BitWord>::low_mask(63), u64::MAX >> 1);
    }

    #[test]
    fn bit_accessors() {
        let bits = <u32 as BitWord>::ZERO.with_bit(0).with_bit(31);
        assert_eq!(bits, 0x8000_0001);
        assert!(bits.bit(31));
        assert!(!bits.bit(30));
        assert_eq!(BitWord::count_ones(bits), 2);
    }

    #[test]
    fn u128_conversions() {
        assert_eq!(<u8 as BitWord>::from_u128(255), Some(255));
        assert_eq!(<u8 as BitWord>::from_u128(256), None);
        assert_eq!(BitWord::to_u128(u64::MAX), u64::MAX as u128);
    }
}
