use thiserror::Error;

/// Errors returned by the vectorizer and clustering pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// No eligible documents after filtering absent or blank text.
    #[error("empty input: no document with text to cluster")]
    EmptyInput,

    /// Frequency filtering removed every term.
    #[error("empty vocabulary: no term reached the minimum frequency")]
    EmptyVocabulary,

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: String,
    },

    /// Rows or label sequences with inconsistent length.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Configuration could not be loaded or extracted.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Corpus directory could not be walked.
    #[error("corpus walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// `true` for failures that mean "nothing to cluster".
    /// Callers treat these as a no-op run rather than a crash.
    pub fn is_noop(&self) -> bool {
        matches!(self, Error::EmptyInput | Error::EmptyVocabulary)
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
