use thiserror::Error;

/// Rejection of a single proposed field value. Produced only by the pure
/// validators in [`crate::validate`] and by draft finishing; carries no state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("code must be exactly 11 digits")]
    InvalidLength,

    #[error("code must contain only digits")]
    NonDigit,

    #[error("year must be a 4-digit number")]
    InvalidYear,

    #[error("missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("code already exists: {0}")]
    DuplicateCode(String),

    #[error("no record found for code: {0}")]
    NotFound(String),

    #[error("default records cannot be changed: {0}")]
    Immutable(String),

    #[error("import sheet is missing required columns: {0}")]
    MissingColumns(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
