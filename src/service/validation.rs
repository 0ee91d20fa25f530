//! Request validation: field rules checked at the boundary, collected into a field error list.

use crate::error::FieldError;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

pub const UUID_V4_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$";

pub static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    // Constant pattern; covered by tests.
    Regex::new(UUID_V4_PATTERN).unwrap_or_else(|e| panic!("invalid uuid pattern: {e}"))
});

/// A request body type built from a JSON object.
pub trait RequestBody: Sized {
    fn from_body(body: &Map<String, Value>) -> Result<Self, Vec<FieldError>>;
}

/// Per-field string constraints. Lengths count characters, not bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringRule<'a> {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<(&'a Regex, &'a str)>,
}

/// Check a string against a rule. Returns the first violated constraint.
pub fn check_string(s: &str, rule: &StringRule<'_>) -> Result<(), String> {
    let len = s.chars().count();
    if let Some(min) = rule.min_length {
        if len < min {
            return Err(format!("Expected string length greater or equal to {}", min));
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            return Err(format!("Expected string length less or equal to {}", max));
        }
    }
    if let Some((re, source)) = rule.pattern {
        if !re.is_match(s) {
            return Err(format!("Expected string to match '{}'", source));
        }
    }
    Ok(())
}

/// Walks the fields of one JSON object, recording at most one error per field.
pub struct BodyValidator<'a> {
    body: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> BodyValidator<'a> {
    pub fn new(body: &'a Map<String, Value>) -> Self {
        Self {
            body,
            errors: Vec::new(),
        }
    }

    fn reject(&mut self, field: &str, info: String) {
        let pointer = format!("/{}", field);
        if !self.errors.iter().any(|e| e.field == pointer) {
            self.errors.push(FieldError::new(pointer, info));
        }
    }

    fn present(&mut self, field: &str) -> Option<&'a Value> {
        match self.body.get(field) {
            Some(v) => Some(v),
            None => {
                self.reject(field, format!("Property '{}' is missing", field));
                None
            }
        }
    }

    pub fn string(&mut self, field: &str, rule: StringRule<'_>) -> Option<String> {
        let value = self.present(field)?;
        let Some(s) = value.as_str() else {
            self.reject(field, "Expected string".into());
            return None;
        };
        match check_string(s, &rule) {
            Ok(()) => Some(s.to_string()),
            Err(info) => {
                self.reject(field, info);
                None
            }
        }
    }

    pub fn boolean(&mut self, field: &str) -> Option<bool> {
        let value = self.present(field)?;
        match value.as_bool() {
            Some(b) => Some(b),
            None => {
                self.reject(field, "Expected boolean".into());
                None
            }
        }
    }

    /// String field restricted to a closed set of variants.
    pub fn variant<T: std::str::FromStr>(&mut self, field: &str) -> Option<T> {
        let value = self.present(field)?;
        match value.as_str().and_then(|s| s.parse().ok()) {
            Some(v) => Some(v),
            None => {
                self.reject(field, "Expected union value".into());
                None
            }
        }
    }

    /// Finish validation. `build` assembles the typed value from the fields read above.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, Vec<FieldError>> {
        match build() {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }
}
