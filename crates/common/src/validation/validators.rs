// Field Validators - Reusable validation components
use std::fmt::Display;

use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Inclusive range validator for numeric types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: T,
    max: T,
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    /// Create a new range validator with inclusive min and max values
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        if value < &self.min || value > &self.max {
            return Err(format!("Value must be between {} and {}", self.min, self.max));
        }
        Ok(())
    }
}

/// String validator with length constraints.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    not_empty: bool,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { min_length: None, max_length: None, not_empty: false, trim: true }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set minimum length
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    fn check(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };
        let len = val.chars().count();

        if self.not_empty && val.is_empty() {
            return Err("This field is required".to_string());
        }

        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("Length must be at least {} characters", min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("Length must not exceed {} characters", max));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        self.check(value)
    }
}

impl FieldValidator<&str> for StringValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        self.check(value)
    }
}

/// Static email regex pattern compiled once at first use
static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        self.validate(&value.as_str())
    }
}

impl FieldValidator<&str> for EmailValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value.trim()) {
            return Err("Invalid email address".to_string());
        }
        Ok(())
    }
}

/// URL validator
///
/// Accepts absolute `http` and `https` URLs with a host by default.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    allowed_schemes: Vec<String>,
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlValidator {
    /// Create a new URL validator
    pub fn new() -> Self {
        Self { allowed_schemes: vec!["http".to_string(), "https".to_string()] }
    }
}

impl FieldValidator<String> for UrlValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        self.validate(&value.as_str())
    }
}

impl FieldValidator<&str> for UrlValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        let parsed = url::Url::parse(value.trim()).map_err(|_| "Invalid URL".to_string())?;
        let scheme = parsed.scheme();

        if !self.allowed_schemes.iter().any(|s| s == scheme) {
            return Err(format!("URL scheme '{}' is not allowed", scheme));
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err("URL must include a host".to_string());
        }

        Ok(())
    }
}
