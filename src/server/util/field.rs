use crate::server::error::validation::ValidationError;

/// Returns the value of a mandatory field
///
/// # Returns
/// - `Ok(String)` - Field was supplied with a non-empty value
/// - `Err(ValidationError::MissingFields)` - Field is absent or empty
pub fn required(value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingFields),
    }
}

/// Checks an optional field of a partial update
///
/// Absent fields pass through as `None`, a supplied field must not be empty.
pub fn non_empty(value: Option<String>) -> Result<Option<String>, ValidationError> {
    match value {
        Some(value) if value.is_empty() => Err(ValidationError::MissingFields),
        value => Ok(value),
    }
}
