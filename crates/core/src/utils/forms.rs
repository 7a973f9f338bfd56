//! Form-value normalization and validation error conversion

use researchd_common::validation::ValidationError;
use researchd_domain::ResearchdError;

/// Convert collected field errors into the domain error
pub fn validation_error(err: ValidationError) -> ResearchdError {
    ResearchdError::Validation(err.to_string())
}

/// Trim an optional form value; blank becomes `None`
pub fn clean_optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Trim a required form value
pub fn clean_required(value: &str) -> String {
    value.trim().to_string()
}

/// Check a select-field value against its choices; blank passes.
pub fn check_choice(
    errors: &mut ValidationError,
    field: &str,
    value: Option<&str>,
    choices: &[&str],
) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        if !choices.contains(&value) {
            errors.add_field_error(field, "Not a valid choice");
        }
    }
}
