use itertools::Itertools;

use crate::class::BitClass;
use crate::error::{Error, Result};
use crate::permutations::Permutations;
use crate::word::BitWord;
use crate::{rank, unrank};

/// Pascal's triangle up to a fixed width.
///
/// Row `n` holds `C(n, 0)..=C(n, n)`. The table is immutable once built and can
/// be shared by reference between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinomialTable<W> {
    rows: Vec<Vec<W>>,
}

impl<W: BitWord> BinomialTable<W> {
    /// Build the table for every width up to and including `max_width`.
    ///
    /// Fails with [`Error::Overflow`] as soon as one coefficient does not fit `W`.
    pub fn build(max_width: u32) -> Result<Self> {
        let overflow = Error::Overflow {
            width: max_width,
            bits: W::BITS,
        };
        let row_count = usize::try_from(max_width)
            .ok()
            .and_then(|width| width.checked_add(1))
            .ok_or(overflow)?;

        // Every word overflows a few rows past its own bit count.
        let mut rows: Vec<Vec<W>> = Vec::with_capacity(row_count.min(W::BITS as usize + 8));
        rows.push(vec![W::ONE]);
        for n in 1..row_count {
            let above = &rows[n - 1];
            let mut row = Vec::with_capacity(n + 1);
            row.push(W::ONE);
            for (left, right) in above.iter().tuple_windows() {
                // Each interior entry is the sum of the two entries above it.
                row.push(left.checked_add(*right).ok_or(overflow)?);
            }
            row.push(W::ONE);
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Build the table covering every width a `W` bit-vector can hold.
    pub fn for_word() -> Result<Self> {
        Self::build(W::BITS)
    }

    pub fn max_width(&self) -> u32 {
        // The row count is bounded by a `u32` width in `build`.
        (self.rows.len() - 1) as u32
    }

    /// `C(n, k)`, or `None` when `k > n` or `n` is beyond the table.
    pub fn get(&self, n: u32, k: u32) -> Option<W> {
        self.row(n)?.get(k as usize).copied()
    }

    pub fn row(&self, n: u32) -> Option<&[W]> {
        self.rows.get(n as usize).map(Vec::as_slice)
    }

    /// Indexing used by the engines after the class has been validated.
    pub(crate) fn entry(&self, n: u32, k: u32) -> W {
        self.rows[n as usize][k as usize]
    }

    /// Checks that `class` fits both `W` and this table.
    pub(crate) fn check_class(&self, class: &BitClass) -> Result<()> {
        class.check_word::<W>()?;
        if class.width() > self.max_width() {
            return Err(Error::Uninitialized {
                requested: class.width(),
                built: self.max_width(),
            });
        }
        Ok(())
    }

    /// Number of members of `class`, i.e. `C(width, ones)`.
    pub fn class_size(&self, class: &BitClass) -> Result<W> {
        self.check_class(class)?;
        Ok(self.entry(class.width(), class.ones()))
    }

    /// See [`rank::rank_of`].
    pub fn rank_of(&self, bits: W, ntotbits: u32, nsetbits: u32) -> Result<W> {
        rank::rank_of(bits, ntotbits, nsetbits, self)
    }

    /// See [`unrank::unrank_of`].
    pub fn unrank_of(&self, rank: W, ntotbits: u32, nsetbits: u32) -> Result<W> {
        unrank::unrank_of(rank, ntotbits, nsetbits, self)
    }

    /// All members of the class in ascending order.
    pub fn permutations(&self, ntotbits: u32, nsetbits: u32) -> Result<Permutations<'_, W>> {
        Permutations::new(self, BitClass::new(ntotbits, nsetbits)?)
    }
}
