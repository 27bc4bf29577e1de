use crate::binomial_table::BinomialTable;
use crate::class::BitClass;
use crate::error::{InvalidArgument, Result};
use crate::word::BitWord;

/// The bit-vector at position `rank` among all bit-vectors of the class
/// `(ntotbits, nsetbits)` sorted in ascending numeric order.
///
/// `rank` must be below `C(ntotbits, nsetbits)`.
pub fn unrank_of<W: BitWord>(
    rank: W,
    ntotbits: u32,
    nsetbits: u32,
    table: &BinomialTable<W>,
) -> Result<W> {
    let class = BitClass::new(ntotbits, nsetbits)?;
    let size = table.class_size(&class)?;
    if rank >= size {
        return Err(InvalidArgument::RankOutOfRange {
            rank: rank.to_u128(),
            size: size.to_u128(),
        }
        .into());
    }
    Ok(unrank_unchecked(rank, &class, table))
}

pub(crate) fn unrank_unchecked<W: BitWord>(
    rank: W,
    class: &BitClass,
    table: &BinomialTable<W>,
) -> W {
    let mut bits = W::ZERO;
    let mut remaining = rank;
    let mut row = class.width();
    let mut col = class.zeros();

    while row > 0 {
        row -= 1;
        if col > 0 && remaining < table.entry(row, col - 1) {
            col -= 1;
        } else {
            if col > 0 {
                remaining = remaining - table.entry(row, col - 1);
            }
            bits = bits.with_bit(row);
        }
    }

    debug_assert!(remaining == W::ZERO);
    bits
}
