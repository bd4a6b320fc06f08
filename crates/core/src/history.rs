//! History entry rules.

use crate::error::CoreError;

/// Maximum history description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 400;

/// Validate a history description (non-blank, <= 400 chars).
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "History description must not be empty".to_string(),
        ));
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "History description must be at most {MAX_DESCRIPTION_LEN} characters, got {len}"
        )));
    }
    Ok(())
}
