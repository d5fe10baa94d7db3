//! Error type shared by the library modules.
//!
//! The command-line layer wraps these in `anyhow::Error` with context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A traceback pointer byte that is not one of the four known directions.
    #[error("corrupt traceback pointer {value} at cell ({x}, {y})")]
    CorruptPointer { x: usize, y: usize, value: u8 },

    #[error("alignment has no sequences assigned")]
    MissingSequences,

    #[error("sequence {0} cannot be paired with itself")]
    SelfPair(usize),

    #[error("clustering needs at least two sequences, got {0}")]
    TooFewSequences(usize),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
