use std::fmt;

use crate::error::{InvalidArgument, Result};
use crate::word::BitWord;

/// The set of all bit-vectors of `width` positions with exactly `ones` bits set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitClass {
    width: u32,
    ones: u32,
}

impl BitClass {
    pub fn new(width: u32, ones: u32) -> Result<Self> {
        if ones > width {
            return Err(InvalidArgument::TooManySetBits { width, ones }.into());
        }
        Ok(Self { width, ones })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn ones(&self) -> u32 {
        self.ones
    }

    pub fn zeros(&self) -> u32 {
        self.width - self.ones
    }

    /// The member with rank 0: the `ones` lowest bits set.
    pub fn lowest<W: BitWord>(&self) -> W {
        W::low_mask(self.ones)
    }

    /// The member with the highest rank: the `ones` bits directly below `width` set.
    pub fn highest<W: BitWord>(&self) -> W {
        (self.zeros()..self.width).fold(W::ZERO, |bits, index| bits.with_bit(index))
    }

    /// Checks that the class fits a `W` bit-vector.
    pub(crate) fn check_word<W: BitWord>(&self) -> Result<()> {
        if self.width > W::BITS {
            return Err(InvalidArgument::WidthExceedsWord {
                width: self.width,
                bits: W::BITS,
            }
            .into());
        }
        Ok(())
    }

    /// Checks that `bits` is a member of this class.
    pub fn check_member<W: BitWord>(&self, bits: W) -> Result<()> {
        self.check_word::<W>()?;
        let in_width = W::low_mask(self.width);
        let beyond = bits.to_u128() & !in_width.to_u128();
        if beyond != 0 {
            return Err(InvalidArgument::BitsBeyondWidth { width: self.width }.into());
        }
        let found = bits.count_ones();
        if found != self.ones {
            return Err(InvalidArgument::PopulationMismatch {
                expected: self.ones,
                found,
            }
            .into());
        }
        Ok(())
    }
}

impl fmt::Display for BitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.ones)
    }
}
