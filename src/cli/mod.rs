mod check;
mod list;
mod lookup;

use anyhow::{Result, anyhow};
use bitperm::BitWord;
use clap::{Args, Parser, Subcommand, ValueEnum};

use check::run_check;
use list::run_list;
use lookup::{run_rank, run_table, run_unrank};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print consecutive members of a class in ascending order.
    List(ListArgs),
    /// Print the rank of a bit-vector within its class.
    Rank(RankArgs),
    /// Print the bit-vector with a given rank.
    Unrank(UnrankArgs),
    /// Print the rows of Pascal's triangle up to a width.
    Table(TableArgs),
    /// Cross-check rank and unrank for every class up to a width.
    Check(CheckArgs),
}

/// Integer type backing the table and the bit-vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum WordSize {
    U8,
    U16,
    U32,
    U64,
    U128,
}

#[derive(Args)]
struct ClassArgs {
    /// Total number of bit positions.
    #[arg(long, default_value_t = 8)]
    width: u32,
    /// Number of set bits.
    #[arg(long, default_value_t = 5)]
    ones: u32,
    #[arg(long, value_enum, default_value_t = WordSize::U64)]
    word: WordSize,
}

#[derive(Args)]
struct ListArgs {
    #[command(flatten)]
    class: ClassArgs,
    /// Number of members to print.
    #[arg(long, default_value_t = 20)]
    count: usize,
    /// Rank of the first member to print.
    #[arg(long, default_value_t = 0, value_parser = parse_number)]
    start: u128,
    /// Print a JSON array instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RankArgs {
    #[command(flatten)]
    class: ClassArgs,
    /// Bit-vector, in decimal or with a `0b`/`0x` prefix.
    #[arg(value_parser = parse_number)]
    bits: u128,
}

#[derive(Args)]
struct UnrankArgs {
    #[command(flatten)]
    class: ClassArgs,
    #[arg(value_parser = parse_number)]
    rank: u128,
}

#[derive(Args)]
struct TableArgs {
    #[arg(long, default_value_t = 8)]
    width: u32,
    #[arg(long, value_enum, default_value_t = WordSize::U64)]
    word: WordSize,
}

#[derive(Args)]
struct CheckArgs {
    /// Widest class to check.
    #[arg(long, default_value_t = 32)]
    max_width: u32,
    #[arg(long, value_enum, default_value_t = WordSize::U32)]
    word: WordSize,
    /// Classes with at most this many members are checked exhaustively.
    #[arg(long, default_value_t = 1 << 20)]
    exhaustive_limit: u128,
    /// Random checks per class above the exhaustive limit.
    #[arg(long, default_value_t = 4096)]
    samples: usize,
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

/// Runs `$run::<W>($args)` for the word type selected on the command line.
macro_rules! with_word {
    ($word:expr, $run:ident, $args:expr) => {
        match $word {
            WordSize::U8 => $run::<u8>($args),
            WordSize::U16 => $run::<u16>($args),
            WordSize::U32 => $run::<u32>($args),
            WordSize::U64 => $run::<u64>($args),
            WordSize::U128 => $run::<u128>($args),
        }
    };
}

/// Parse CLI arguments and execute the requested command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => with_word!(args.class.word, run_list, &args)?,
        Commands::Rank(args) => with_word!(args.class.word, run_rank, &args)?,
        Commands::Unrank(args) => with_word!(args.class.word, run_unrank, &args)?,
        Commands::Table(args) => with_word!(args.word, run_table, &args)?,
        Commands::Check(args) => with_word!(args.word, run_check, &args)?,
    }

    Ok(())
}

fn parse_number(s: &str) -> Result<u128, String> {
    let digits = s.replace('_', "");
    let parsed = if let Some(binary) = digits.strip_prefix("0b") {
        u128::from_str_radix(binary, 2)
    } else if let Some(hex) = digits.strip_prefix("0x") {
        u128::from_str_radix(hex, 16)
    } else {
        digits.parse()
    };
    parsed.map_err(|err| format!("invalid number `{s}`: {err}"))
}

/// Narrow a command-line number to the selected word.
fn to_word<W: BitWord>(value: u128, what: &str) -> Result<W> {
    W::from_u128(value).ok_or_else(|| anyhow!("{what} {value} does not fit a {}-bit word", W::BITS))
}
