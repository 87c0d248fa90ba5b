//! Pure field validators. Every function here is total and deterministic:
//! no state, no I/O, same answer for the same string.

use crate::error::ValidationError;
use crate::model::Code;

/// Codes are exactly this many decimal digits; see [`validate_code`].
pub const CODE_LEN: usize = 11;

const YEAR_LEN: usize = 4;

/// Canonicalize a raw code: trim surrounding whitespace, then require exactly
/// [`CODE_LEN`] ASCII digits. This is the only code policy in the system—
/// arbitrary string codes are not supported.
pub fn validate_code(raw: &str) -> Result<Code, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.len() != CODE_LEN {
        return Err(ValidationError::InvalidLength);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NonDigit);
    }
    Ok(Code::from_validated(trimmed.to_string()))
}

/// A year is a 4-digit number, kept as a string (records never do arithmetic
/// on it).
pub fn validate_year(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.len() != YEAR_LEN || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidYear);
    }
    Ok(trimmed.to_string())
}

/// Check that every named field is non-empty after trimming. Fields are
/// checked in the order given and the first failure wins, so callers get a
/// deterministic error for multi-field input.
pub fn validate_required(fields: &[(&str, &str)]) -> Result<(), ValidationError> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField((*name).to_string()));
        }
    }
    Ok(())
}
