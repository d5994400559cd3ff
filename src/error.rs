use thiserror::Error;

/// Validation failures for a ration mix.
///
/// All variants are caller-correctable input problems; none is transient.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompositionError {
    #[error("ingredient percentages must sum to {expected}%, got {actual}%")]
    PercentageMismatch { expected: f64, actual: f64 },

    #[error("total mix weight is zero")]
    DegenerateMix,

    #[error("herd size is zero")]
    EmptyHerd,

    #[error("negative value in field '{field}'")]
    NegativeValue { field: &'static str },
}

/// Validation failures for batch-level analysis (profit, cost summaries).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("batch has no cattle")]
    EmptyBatch,

    #[error("batch has zero total cost")]
    ZeroCost,

    #[error("fattening period spans no full months")]
    ZeroDuration,

    #[error("initial weight is zero")]
    ZeroWeight,

    #[error("negative arroba price")]
    NegativePrice,
}

#[derive(Debug, Error)]
pub enum FattenError {
    #[error("Batch not found: {0}")]
    BatchNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

pub type Result<T> = std::result::Result<T, FattenError>;
