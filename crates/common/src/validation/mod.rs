// Validation Module - field-level validation for form-shaped input
use std::fmt;

mod validators;

pub use validators::{EmailValidator, FieldValidator, RangeValidator, StringValidator, UrlValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: ValidationError) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "{}: {}", self.errors[0].field, self.errors[0].message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Collects field errors across a whole form before failing.
///
/// Optional fields are skipped when absent or blank, mirroring how HTML forms
/// submit untouched inputs as empty strings.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add_field_error(field, message);
    }

    /// Validate a field with a specific validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V) -> &mut Self
    where
        V: FieldValidator<T> + ?Sized,
    {
        if let Err(msg) = validator.validate(value) {
            self.add_error(field, msg);
        }
        self
    }

    /// Validate an optional string field; `None` and blank values pass.
    pub fn validate_optional<V>(&mut self, field: &str, value: Option<&str>, validator: &V) -> &mut Self
    where
        V: for<'a> FieldValidator<&'a str> + ?Sized,
    {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => self.validate_field(field, &v, validator),
            _ => self,
        }
    }

    /// Check if validation has errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.error_count()
    }

    /// Get errors without consuming validator
    pub fn errors(&self) -> &ValidationError {
        &self.errors
    }

    /// Finalize and return result
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_collects_every_failure() {
        let mut v = Validator::new();
        v.validate_field("title", &"", &StringValidator::new().not_empty())
            .validate_field("year", &1800, &RangeValidator::new(1900, 2030))
            .validate_field("email", &"alice@example.com", &EmailValidator::new());

        let err = v.finalize().unwrap_err();
        assert_eq!(err.error_count(), 2);
        assert_eq!(err.field_errors("title").len(), 1);
        assert_eq!(err.field_errors("year").len(), 1);
        assert!(err.field_errors("email").is_empty());
    }

    #[test]
    fn test_optional_fields_skip_blank_values() {
        let mut v = Validator::new();
        let url = UrlValidator::new();
        v.validate_optional("url", None, &url)
            .validate_optional("url", Some("   "), &url)
            .validate_optional("url", Some("https://example.com/paper"), &url);
        assert!(v.finalize().is_ok());

        let mut v = Validator::new();
        v.validate_optional("url", Some("ftp://example.com"), &url);
        assert!(v.has_errors());
    }

    #[test]
    fn test_display_single_and_multiple() {
        let single = ValidationError::field("bio", "too long");
        assert_eq!(single.to_string(), "bio: too long");

        let mut multi = ValidationError::field("a", "x");
        multi.merge(ValidationError::field("b", "y"));
        assert_eq!(multi.to_string(), "Validation failed with 2 errors: a: x; b: y");
    }
}
