use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// The runtime's own categorization of a value, before any shape checks.
///
/// `Null` is of kind `Object`, the same as arrays, dates, plain records and
/// foreign objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Undefined,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
    Object,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Undefined,
        PrimitiveKind::Boolean,
        PrimitiveKind::Number,
        PrimitiveKind::BigInt,
        PrimitiveKind::String,
        PrimitiveKind::Symbol,
        PrimitiveKind::Function,
        PrimitiveKind::Object,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Undefined => "undefined",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Number => "number",
            PrimitiveKind::BigInt => "bigint",
            PrimitiveKind::String => "string",
            PrimitiveKind::Symbol => "symbol",
            PrimitiveKind::Function => "function",
            PrimitiveKind::Object => "object",
        }
    }

    /// True for bare primitives: everything except `function` and `object`.
    pub fn is_bare(&self) -> bool {
        !matches!(self, PrimitiveKind::Function | PrimitiveKind::Object)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Value::Undefined => PrimitiveKind::Undefined,
            Value::Boolean(_) => PrimitiveKind::Boolean,
            Value::Number(_) => PrimitiveKind::Number,
            Value::BigInt(_) => PrimitiveKind::BigInt,
            Value::String(_) => PrimitiveKind::String,
            Value::Symbol(_) => PrimitiveKind::Symbol,
            Value::Function(_) => PrimitiveKind::Function,
            Value::Null
            | Value::Array(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Object(_)
            | Value::Foreign(_) => PrimitiveKind::Object,
        }
    }
}
