//! Project field rules.
//!
//! The three checks run in a fixed order (name, acronym, cost) and stop at
//! the first violation. They are applied when a project is created and
//! again on the merged values after every edit.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum project name length, in characters.
pub const MAX_NAME_LEN: usize = 150;

/// Maximum project acronym length, in characters.
pub const MAX_ACRONYM_LEN: usize = 10;

/// Uppercase ASCII letters and digits, at least one character.
static ACRONYM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+$").expect("acronym pattern is valid"));

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a project name is at most [`MAX_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Project name must be at most {MAX_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate a project acronym: at most [`MAX_ACRONYM_LEN`] characters, made
/// only of uppercase letters and digits.
pub fn validate_acronym(acronym: &str) -> Result<(), CoreError> {
    let len = acronym.chars().count();
    if len > MAX_ACRONYM_LEN {
        return Err(CoreError::Validation(format!(
            "Project acronym must be at most {MAX_ACRONYM_LEN} characters, got {len}"
        )));
    }
    if !ACRONYM_PATTERN.is_match(acronym) {
        return Err(CoreError::Validation(format!(
            "Project acronym must contain only uppercase letters and digits, got '{acronym}'"
        )));
    }
    Ok(())
}

/// Validate that a project cost is strictly positive. NaN is rejected.
pub fn validate_cost(cost: f64) -> Result<(), CoreError> {
    if !(cost > 0.0) {
        return Err(CoreError::Validation(format!(
            "Project cost must be a positive value, got {cost}"
        )));
    }
    Ok(())
}

/// Run every project rule in order: name, then acronym, then cost.
pub fn validate_project(name: &str, acronym: &str, cost: f64) -> Result<(), CoreError> {
    validate_name(name)?;
    validate_acronym(acronym)?;
    validate_cost(cost)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
