use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single resource accepted and returned by the `/example` endpoints.
///
/// `even_number` is kept as a raw JSON value so that non-numeric input still
/// reaches the `is_even` rule (which coerces it and reports a conversion
/// failure) instead of being rejected wholesale during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRequest {
    /// Display name (required)
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form description, at most 1000 characters
    #[serde(default)]
    pub description: Option<String>,

    /// Must fall within [1, 100]
    #[serde(default)]
    pub some_value: i64,

    /// Contact email, validated for syntax when present
    #[serde(default)]
    pub email: Option<String>,

    /// Must coerce to an even integer
    #[serde(default = "default_even_number")]
    pub even_number: Value,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the offending field
    pub field: String,

    /// Human-readable failure message
    pub message: String,
}

/// Aggregated validation failure response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldError>,
}

impl ExampleRequest {
    /// Create a server-constructed record carrying only a name
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: None,
            some_value: 0,
            email: None,
            even_number: default_even_number(),
        }
    }
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ValidationErrorBody {
    /// Wrap an aggregated list of field errors
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

fn default_even_number() -> Value {
    Value::from(0)
}
