pub mod config;
pub mod models;
pub mod pipeline; // Volume 1: extract → full-sum → classify
pub mod narrative; // Volume 2: narrative composition

pub use models::{
    ChakraTag, ComposedReading, ElementTag, FullSumResult, MasterNumber, NumberToken, Reading,
    ReadingData, ReadingInput, ReadingMetadata, SourceType,
};
pub use narrative::compose_reading;
pub use pipeline::{build_reading, generate_reading, ReadingError};
