// Input validation: every coefficient must look like `-?\d+(\.\d+)?`
// before it is allowed anywhere near a query.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// A coefficient string that passed validation. Only `validate_numeric_input`
/// can create one, so query builders never see unchecked text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coefficient(String);

impl Coefficient {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid input: '{0}' is not a valid number.")]
    InvalidNumber(String),
}

/// Accept an optional minus sign, one or more digits, and optionally a dot
/// followed by one or more digits. Nothing else, anywhere in the string.
pub fn validate_numeric_input(value: &str) -> Result<Coefficient, ValidationError> {
    if is_numeric(value) {
        Ok(Coefficient(value.to_string()))
    } else {
        Err(ValidationError::InvalidNumber(value.to_string()))
    }
}

/// Validate coefficients in order, stopping at the first bad one.
pub fn validate_all<S: AsRef<str>>(values: &[S]) -> Result<Vec<Coefficient>, ValidationError> {
    values.iter().map(|v| validate_numeric_input(v.as_ref())).collect()
}

/// `\d` is Unicode-aware here: any decimal digit (`Nd`), not just ASCII.
fn is_numeric(s: &str) -> bool {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER
        .get_or_init(|| Regex::new(r"\A-?\d+(\.\d+)?\z").expect("static pattern compiles"))
        .is_match(s)
}
