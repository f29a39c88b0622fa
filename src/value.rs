//! Tagged values for heterogeneous argument lists.
//!
//! The selection functions ([`crate::minimum`], [`crate::odd`]) accept mixed
//! argument lists where each element is classified before aggregation.
//! `Value` is that classification: a number, a piece of text, a boolean, or
//! nothing at all. The two consumers apply deliberately different policies
//! (`find_smallest` coerces numeric text, `odd_numbers` excludes it), so the
//! coercion helpers here are explicit rather than baked into the type.

/// A single argument in a mixed-type argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl Value {
    /// Kind label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
        }
    }

    /// The numeric value, only if this is a genuine number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The numeric value, coercing text that parses as a number.
    ///
    /// Booleans and null never coerce. Text coerces only when the full
    /// string parses: `"2"` yields `2.0`, `"2 kg"` yields `None`.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
            Value::Bool(_) | Value::Null => None,
        }
    }

    /// Classify a raw command-line token.
    ///
    /// Everything arrives from argv as a string, so the CLI decides how a
    /// token maps onto the tagged union: `true`/`false` become booleans,
    /// `null` becomes null, anything that parses as a number becomes a
    /// number, and the rest stays text.
    pub fn from_token(token: &str) -> Value {
        match token {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            "null" => Value::Null,
            _ => match token.parse::<f64>() {
                Ok(n) => Value::Number(n),
                Err(_) => Value::Text(token.to_string()),
            },
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
