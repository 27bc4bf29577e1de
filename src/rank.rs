use crate::binomial_table::BinomialTable;
use crate::class::BitClass;
use crate::error::Result;
use crate::word::BitWord;

/// Position of `bits` among all bit-vectors of the class `(ntotbits, nsetbits)`
/// sorted in ascending numeric order.
///
/// `bits` must have exactly `nsetbits` bits set, all below position `ntotbits`.
pub fn rank_of<W: BitWord>(
    bits: W,
    ntotbits: u32,
    nsetbits: u32,
    table: &BinomialTable<W>,
) -> Result<W> {
    let class = BitClass::new(ntotbits, nsetbits)?;
    table.check_class(&class)?;
    class.check_member(bits)?;
    Ok(rank_unchecked(bits, &class, table))
}

/// Walks the positions from the most significant one down. `row` counts the
/// positions left and `col` the zeros still to be placed among them.
pub(crate) fn rank_unchecked<W: BitWord>(bits: W, class: &BitClass, table: &BinomialTable<W>) -> W {
    let mut total = W::ZERO;
    let mut row = class.width();
    let mut col = class.zeros();

    // A sub-problem with a single arrangement fixes the remaining suffix.
    while table.entry(row, col) != W::ONE {
        row -= 1;
        if bits.bit(row) {
            // Every member with a zero here instead is smaller.
            total = total + table.entry(row, col - 1);
        } else {
            col -= 1;
        }
    }

    debug_assert!(total < table.entry(class.width(), class.ones()));
    total
}
