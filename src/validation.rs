//! Field-level validation registry.
//!
//! Each rule is a stateless predicate over a single field value paired with a
//! fixed failure message. The registry maps every field of
//! [`ExampleRequest`] to an ordered list of rules; it is built once at
//! startup and applied uniformly by the dispatcher, so the set of constraints
//! is visible in one place rather than scattered across annotations.

use crate::models::{ExampleRequest, FieldError};
use serde_json::Value;
use validator::ValidateEmail;

/// View of a single field's value as seen by the rules
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    /// Field was not supplied (or was explicitly null)
    Absent,
    /// Text field
    Text(&'a str),
    /// Integer field
    Int(i64),
    /// Raw JSON value, for fields validated by coercion
    Raw(&'a Value),
}

/// Outcome of a single rule check
#[derive(Debug, Clone)]
pub enum RuleError {
    /// The value was understood but violates the rule
    Violation,
    /// The value could not be coerced to the type the rule expects
    Conversion(String),
}

type Check = Box<dyn Fn(&FieldValue<'_>) -> Result<(), RuleError> + Send + Sync>;

/// A named field constraint: a predicate plus its failure message
pub struct Rule {
    message: String,
    check: Check,
}

impl Rule {
    fn new(
        message: impl Into<String>,
        check: impl Fn(&FieldValue<'_>) -> Result<(), RuleError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            check: Box::new(check),
        }
    }
}

/// Fails on an absent value, empty string, or JSON null
pub fn required() -> Rule {
    Rule::new("field is required", |value| match value {
        FieldValue::Absent => Err(RuleError::Violation),
        FieldValue::Text(s) if s.is_empty() => Err(RuleError::Violation),
        FieldValue::Raw(Value::Null) => Err(RuleError::Violation),
        _ => Ok(()),
    })
}

/// Fails when a text value is longer than `limit` characters; passes on absent
pub fn max_length(limit: usize) -> Rule {
    Rule::new(
        format!("must be at most {} characters long", limit),
        move |value| match value {
            FieldValue::Text(s) if s.chars().count() > limit => Err(RuleError::Violation),
            _ => Ok(()),
        },
    )
}

/// Fails when an integer value falls outside `[lo, hi]` inclusive
pub fn range(lo: i64, hi: i64) -> Rule {
    Rule::new(
        format!("must be between {} and {}", lo, hi),
        move |value| match value {
            FieldValue::Int(n) if *n < lo || *n > hi => Err(RuleError::Violation),
            _ => Ok(()),
        },
    )
}

/// Fails when a present text value is not a syntactically valid email address
pub fn email_format() -> Rule {
    Rule::new("must be a valid email address", |value| match value {
        FieldValue::Text(s) if !s.validate_email() => Err(RuleError::Violation),
        _ => Ok(()),
    })
}

/// Fails when the value, coerced to an integer, is odd.
///
/// Coercion mirrors a permissive numeric conversion: integers pass through,
/// numeric strings are parsed, null/absent count as zero, booleans map to
/// 0/1. Anything else is a conversion failure reported against the field.
pub fn is_even() -> Rule {
    Rule::new("value is not an even number", |value| {
        let n = coerce_to_int(value)?;
        if n % 2 != 0 {
            Err(RuleError::Violation)
        } else {
            Ok(())
        }
    })
}

fn coerce_to_int(value: &FieldValue<'_>) -> Result<i64, RuleError> {
    match value {
        FieldValue::Int(n) => Ok(*n),
        FieldValue::Absent => Ok(0),
        FieldValue::Text(s) => parse_int_text(s),
        FieldValue::Raw(raw) => match raw {
            Value::Null => Ok(0),
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| RuleError::Conversion(format!("{} is not a valid integer", raw))),
            Value::String(s) => parse_int_text(s),
            Value::Bool(b) => Ok(i64::from(*b)),
            other => Err(RuleError::Conversion(format!(
                "{} cannot be converted to an integer",
                other
            ))),
        },
    }
}

fn parse_int_text(s: &str) -> Result<i64, RuleError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| RuleError::Conversion(format!("'{}' is not a valid integer", s)))
}

/// Extractor projecting one field of the record into a [`FieldValue`]
type Extract = for<'a> fn(&'a ExampleRequest) -> FieldValue<'a>;

struct FieldRules {
    field: &'static str,
    extract: Extract,
    rules: Vec<Rule>,
}

/// The explicit field-to-rules table applied to every incoming record
pub struct RequestValidator {
    fields: Vec<FieldRules>,
}

impl RequestValidator {
    /// Build the registry for [`ExampleRequest`]
    pub fn new() -> Self {
        let fields = vec![
            FieldRules {
                field: "name",
                extract: |r| optional_text(&r.name),
                rules: vec![required()],
            },
            FieldRules {
                field: "description",
                extract: |r| optional_text(&r.description),
                rules: vec![max_length(1000)],
            },
            FieldRules {
                field: "someValue",
                extract: |r| FieldValue::Int(r.some_value),
                rules: vec![range(1, 100)],
            },
            FieldRules {
                field: "email",
                extract: |r| optional_text(&r.email),
                rules: vec![email_format()],
            },
            FieldRules {
                field: "evenNumber",
                extract: |r| FieldValue::Raw(&r.even_number),
                rules: vec![is_even()],
            },
        ];

        Self { fields }
    }

    /// Run every rule on every field, aggregating all violations.
    ///
    /// A conversion failure inside a rule is reported as a field error with
    /// the conversion message, never escalated to a fault.
    pub fn validate(&self, request: &ExampleRequest) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for field in &self.fields {
            let value = (field.extract)(request);
            for rule in &field.rules {
                match (rule.check)(&value) {
                    Ok(()) => {}
                    Err(RuleError::Violation) => {
                        errors.push(FieldError::new(field.field, rule.message.clone()));
                    }
                    Err(RuleError::Conversion(message)) => {
                        errors.push(FieldError::new(field.field, message));
                    }
                }
            }
        }

        errors
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn optional_text(value: &Option<String>) -> FieldValue<'_> {
    match value {
        Some(s) => FieldValue::Text(s),
        None => FieldValue::Absent,
    }
}
