use thiserror::Error;

/// Errors returned by table construction and the rank/unrank engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// The table passed in does not cover the requested width.
    #[error("no table covering width {requested} has been built (table width is {built})")]
    Uninitialized { requested: u32, built: u32 },

    /// Binomial coefficients of the requested width do not fit the word.
    #[error("binomial coefficients up to width {width} overflow a {bits}-bit integer")]
    Overflow { width: u32, bits: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("{ones} set bits do not fit in a width of {width}")]
    TooManySetBits { width: u32, ones: u32 },

    #[error("width {width} exceeds the {bits}-bit word")]
    WidthExceedsWord { width: u32, bits: u32 },

    #[error("bit-vector has bits set at or above position {width}")]
    BitsBeyondWidth { width: u32 },

    #[error("bit-vector has {found} set bits, expected {expected}")]
    PopulationMismatch { expected: u32, found: u32 },

    #[error("rank {rank} is out of range for a class of {size} members")]
    RankOutOfRange { rank: u128, size: u128 },
}

pub type Result<T> = std::result::Result<T, Error>;
