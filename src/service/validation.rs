//! Field validation for request bodies.
//!
//! Rules run over loosely typed JSON values so that a wrong type is reported
//! as a field error rather than a body parse failure. Every failing field is
//! collected before returning.

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Required,
    Type,
    MinLength,
    MaxLength,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub path: &'static str,
    pub message: String,
}

/// All field errors of one request body, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    fn add(&mut self, path: &'static str, kind: ErrorKind, message: String) {
        self.errors
            .entry(path)
            .or_insert(FieldError { kind, path, message });
    }

    /// `Ok(value)` if nothing failed, otherwise the collected errors.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "name": "ValidationError",
            "message": self.to_string(),
            "errors": self.errors,
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed: ")?;
        let mut first = true;
        for (field, error) in &self.errors {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Constraints on one string field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldRule {
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn optional(field: &'static str) -> Self {
        Self {
            field,
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a field of a full record. Missing required fields fail.
    pub fn check(
        rule: &FieldRule,
        value: Option<&Value>,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        match value {
            None | Some(Value::Null) => {
                if rule.required {
                    errors.add(
                        rule.field,
                        ErrorKind::Required,
                        format!("Path `{}` is required.", rule.field),
                    );
                }
                None
            }
            Some(v) => validate_string(rule, v, errors),
        }
    }

    /// Validate a field of a partial record. Absent fields are skipped.
    pub fn check_partial(
        rule: &FieldRule,
        value: Option<&Value>,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        match value {
            None | Some(Value::Null) => None,
            Some(v) => validate_string(rule, v, errors),
        }
    }
}

fn validate_string(rule: &FieldRule, v: &Value, errors: &mut ValidationErrors) -> Option<String> {
    let Some(s) = v.as_str() else {
        errors.add(
            rule.field,
            ErrorKind::Type,
            format!("Cast to string failed for value {} at path `{}`", v, rule.field),
        );
        return None;
    };
    let len = s.chars().count();
    if let Some(min) = rule.min_length {
        if len < min {
            errors.add(
                rule.field,
                ErrorKind::MinLength,
                format!("Path `{}` is shorter than the minimum allowed length ({}).", rule.field, min),
            );
            return None;
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            errors.add(
                rule.field,
                ErrorKind::MaxLength,
                format!("Path `{}` is longer than the maximum allowed length ({}).", rule.field, max),
            );
            return None;
        }
    }
    Some(s.to_string())
}
