//! Ranking and unranking of fixed-width bit-vectors with a fixed number of set
//! bits (the combinatorial number system), backed by a precomputed Pascal's
//! triangle.
//!
//! ```
//! use bitperm::BinomialTable;
//!
//! let table = BinomialTable::<u32>::for_word()?;
//! assert_eq!(table.unrank_of(0, 8, 5)?, 0b0001_1111);
//! assert_eq!(table.rank_of(0b0010_1111, 8, 5)?, 1);
//! # Ok::<(), bitperm::Error>(())
//! ```

pub mod binomial_table;
pub mod class;
pub mod combinatorics;
pub mod error;
pub mod permutations;
pub mod rank;
pub mod unrank;
pub mod verify;
pub mod word;

pub use binomial_table::BinomialTable;
pub use class::BitClass;
pub use error::{Error, InvalidArgument};
pub use permutations::Permutations;
pub use rank::rank_of;
pub use unrank::unrank_of;
pub use word::BitWord;
