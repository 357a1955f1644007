// crates/gem-core/src/error.rs
use thiserror::Error;

/// Errors raised by the gazetteer, the importer and the batch geocoder.
///
/// A location that resolves to nothing is *not* an error; lookups return
/// `Option::None` for that case.
#[derive(Debug, Error)]
pub enum GemError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store codec error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "builder")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "builder")]
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The requested location column is not among the input headers.
    #[error("Location column '{0}' is not present in the input headers")]
    MissingColumn(String),

    /// A dump row that cannot be turned into place records.
    #[error("Malformed dataset row {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GemError>;
