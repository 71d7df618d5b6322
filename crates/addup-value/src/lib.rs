//! Core value and error types for Addup
//!
//! Coercion errors preserve the offending byte range for error reporting.

use std::fmt;

/// Byte range into an operand's text, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An addition operand: a native integer or base-10 text
///
/// Text operands are coerced at evaluation time; integer operands pass
/// through unchanged. Operands are immutable and consumed by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Native integer operand (coercion is the identity)
    Int(i64),
    /// Textual operand holding a base-10 integer literal
    Text(String),
}

impl Operand {
    /// Human-readable name of the operand's form, for diagnostics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Text(_) => "string",
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl TryFrom<&serde_json::Value> for Operand {
    type Error = AddError;

    /// JSON numbers become integer operands, JSON strings textual ones.
    /// Non-integer numbers and every other JSON form are rejected.
    fn try_from(value: &serde_json::Value) -> Result<Self, AddError> {
        match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .ok_or_else(|| AddError::unsupported_json(&value.to_string())),
            serde_json::Value::String(s) => Ok(Self::Text(s.clone())),
            _ => Err(AddError::unsupported_json(&value.to_string())),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Error types with the offending input attached
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    #[error("Addup: ERR_COERCE: {text:?} is not a base-10 integer (bytes {}..{})", .span.start, .span.end)]
    InvalidOperand { text: String, span: Span },

    #[error("Addup: ERR_COERCE: operand is empty")]
    EmptyOperand,

    #[error("Addup: ERR_RANGE: {text:?} does not fit in a 64-bit integer")]
    OutOfRange { text: String, span: Span },

    #[error("Addup: ERR_JSON: {text} is neither an integer nor a string")]
    UnsupportedJson { text: String },

    #[error("Addup: ERR_OVERFLOW: {lhs} + {rhs} overflows a 64-bit integer")]
    Overflow { lhs: i64, rhs: i64 },
}

impl AddError {
    #[must_use]
    pub fn invalid_operand(text: &str, span: Span) -> Self {
        Self::InvalidOperand {
            text: text.to_string(),
            span,
        }
    }

    #[must_use]
    pub fn out_of_range(text: &str, span: Span) -> Self {
        Self::OutOfRange {
            text: text.to_string(),
            span,
        }
    }

    #[must_use]
    pub fn unsupported_json(text: &str) -> Self {
        Self::UnsupportedJson {
            text: text.to_string(),
        }
    }

    #[must_use]
    pub const fn overflow(lhs: i64, rhs: i64) -> Self {
        Self::Overflow { lhs, rhs }
    }

    /// Byte range of the offending input, when one exists
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::InvalidOperand { span, .. } | Self::OutOfRange { span, .. } => Some(*span),
            Self::EmptyOperand | Self::UnsupportedJson { .. } | Self::Overflow { .. } => None,
        }
    }
}
