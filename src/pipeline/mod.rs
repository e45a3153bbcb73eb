pub mod extract;
pub mod fullsum;
pub mod signals;
pub mod elements;
pub mod chakras;
pub mod engine; // Volume 1 reading pipeline
pub mod processor; // engine + composer in one call

pub use extract::*;
pub use fullsum::*;
pub use elements::*;
pub use chakras::*;
pub use engine::*;
pub use processor::*;

use thiserror::Error;

/// Failures raised by the reading pipeline. Classifiers and the composer
/// never fail; only text selection, extraction and input decoding do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    #[error("no text provided for reading generation")]
    InputValidation,

    #[error("no numbers found in input text")]
    NoDataFound,

    #[error("Invalid metadata timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl ReadingError {
    /// Stable machine-readable code for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputValidation => "INPUT_VALIDATION",
            Self::NoDataFound => "NO_DATA_FOUND",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            Self::MalformedInput(_) => "MALFORMED_INPUT",
        }
    }
}
