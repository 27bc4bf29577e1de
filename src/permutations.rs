use crate::binomial_table::BinomialTable;
use crate::class::BitClass;
use crate::error::{InvalidArgument, Result};
use crate::unrank::unrank_unchecked;
use crate::word::BitWord;

/// Ascending iterator over the members of a class.
///
/// Produced by unranking `0, 1, 2, …`, so every step costs `O(width)` and
/// skipping ahead is as cheap as a single step. A clone continues from the
/// same rank, so cloning a fresh iterator gives a restartable sequence.
#[derive(Clone, Debug)]
pub struct Permutations<'a, W> {
    table: &'a BinomialTable<W>,
    class: BitClass,
    /// Rank of the next member yielded from the front.
    front: W,
    /// One past the rank of the next member yielded from the back.
    back: W,
}

impl<'a, W: BitWord> Permutations<'a, W> {
    pub fn new(table: &'a BinomialTable<W>, class: BitClass) -> Result<Self> {
        let size = table.class_size(&class)?;
        Ok(Self {
            table,
            class,
            front: W::ZERO,
            back: size,
        })
    }

    /// Skip the members ranked below `rank`. `rank` may equal the class size.
    pub fn starting_at(mut self, rank: W) -> Result<Self> {
        if rank > self.back {
            return Err(InvalidArgument::RankOutOfRange {
                rank: rank.to_u128(),
                size: self.back.to_u128(),
            }
            .into());
        }
        self.front = rank;
        Ok(self)
    }

    pub fn class(&self) -> BitClass {
        self.class
    }

    /// Number of members not yet yielded.
    pub fn remaining(&self) -> W {
        self.back - self.front
    }
}

impl<W: BitWord> Iterator for Permutations<'_, W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        if self.front >= self.back {
            return None;
        }
        let bits = unrank_unchecked(self.front, &self.class, self.table);
        self.front = self.front + W::ONE;
        Some(bits)
    }

    fn nth(&mut self, n: usize) -> Option<W> {
        match W::from_u128(n as u128).and_then(|n| self.front.checked_add(n)) {
            Some(rank) if rank < self.back => {
                self.front = rank;
                self.next()
            }
            _ => {
                self.front = self.back;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining().to_u128()) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<W: BitWord> DoubleEndedIterator for Permutations<'_, W> {
    fn next_back(&mut self) -> Option<W> {
        if self.front >= self.back {
            return None;
        }
        self.back = self.back - W::ONE;
        Some(unrank_unchecked(self.back, &self.class, self.table))
    }
}
