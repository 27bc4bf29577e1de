use anyhow::Result;
use bitperm::{BinomialTable, BitWord};
use itertools::Itertools;

use super::{RankArgs, TableArgs, UnrankArgs, to_word};

pub(crate) fn run_rank<W: BitWord>(args: &RankArgs) -> Result<()> {
    let (width, ones) = (args.class.width, args.class.ones);
    let table = BinomialTable::<W>::build(width)?;
    let bits: W = to_word(args.bits, "bit-vector")?;
    let rank = table.rank_of(bits, width, ones)?;
    println!("{rank}");
    Ok(())
}

pub(crate) fn run_unrank<W: BitWord>(args: &UnrankArgs) -> Result<()> {
    let (width, ones) = (args.class.width, args.class.ones);
    let table = BinomialTable::<W>::build(width)?;
    let rank: W = to_word(args.rank, "rank")?;
    let bits = table.unrank_of(rank, width, ones)?;
    println!("{:0width$b} ({bits})", bits, width = width as usize);
    Ok(())
}

pub(crate) fn run_table<W: BitWord>(args: &TableArgs) -> Result<()> {
    let table = BinomialTable::<W>::build(args.width)?;
    for row in (0..=table.max_width()).filter_map(|n| table.row(n)) {
        println!("{}", row.iter().join(" "));
    }
    Ok(())
}
