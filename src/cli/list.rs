use anyhow::Result;
use bitperm::combinatorics::set_positions;
use bitperm::{BinomialTable, BitClass, BitWord};
use serde_json::{Value, json};

use super::{ListArgs, to_word};

pub(crate) fn run_list<W: BitWord>(args: &ListArgs) -> Result<()> {
    let class = BitClass::new(args.class.width, args.class.ones)?;
    let table = BinomialTable::<W>::build(class.width())?;
    let size = table.class_size(&class)?;
    let start: W = to_word(args.start, "start rank")?;

    let members = table
        .permutations(class.width(), class.ones())?
        .starting_at(start)?
        .take(args.count)
        .enumerate()
        .map(|(offset, bits)| (args.start + offset as u128, bits))
        .collect::<Vec<_>>();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render_json(&class, &members))?);
        return Ok(());
    }

    println!(
        "Ranks {}..{} of the {} bit-vectors with {} set bits out of {} total bits:",
        args.start,
        args.start + members.len() as u128,
        size,
        class.ones(),
        class.width()
    );
    for line in render_lines(&class, &members) {
        println!("{line}");
    }
    Ok(())
}

/// One `position: bits` line per member, positions counted from 1.
fn render_lines<W: BitWord>(class: &BitClass, members: &[(u128, W)]) -> Vec<String> {
    let width = class.width() as usize;
    members
        .iter()
        .map(|(rank, bits)| format!("{:>5}: {:0width$b}", rank + 1, bits))
        .collect()
}

fn render_json<W: BitWord>(class: &BitClass, members: &[(u128, W)]) -> Value {
    let width = class.width() as usize;
    Value::Array(
        members
            .iter()
            .map(|&(rank, bits)| {
                json!({
                    "rank": number(rank),
                    "value": number(bits.to_u128()),
                    "bits": format!("{:0width$b}", bits),
                    "positions": set_positions(bits),
                })
            })
            .collect(),
    )
}

/// JSON numbers only hold 64 bits; wider values are written as strings.
fn number(value: u128) -> Value {
    u64::try_from(value).map_or_else(|_| Value::String(value.to_string()), Value::from)
}
