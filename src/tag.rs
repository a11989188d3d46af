use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::PrimitiveKind;

/// Canonical, stable name for the kind of a value.
///
/// Primitive tags are lower case (`number`, `null`), composite and domain
/// tags are upper camel case (`Array`, `Matrix`, `SymbolNode`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    pub const NULL: TypeTag = TypeTag::from_static("null");
    pub const FUNCTION: TypeTag = TypeTag::from_static("Function");
    pub const ARRAY: TypeTag = TypeTag::from_static("Array");
    pub const DATE: TypeTag = TypeTag::from_static("Date");
    pub const REGEXP: TypeTag = TypeTag::from_static("RegExp");
    pub const OBJECT: TypeTag = TypeTag::from_static("Object");

    /// Tags produced before the registry is consulted, plus the fallback.
    pub const BUILTIN: [TypeTag; 6] = [
        TypeTag::NULL,
        TypeTag::FUNCTION,
        TypeTag::ARRAY,
        TypeTag::DATE,
        TypeTag::REGEXP,
        TypeTag::OBJECT,
    ];

    pub const fn from_static(s: &'static str) -> Self {
        TypeTag(Cow::Borrowed(s))
    }

    pub fn new(s: impl Into<String>) -> Self {
        TypeTag(Cow::Owned(s.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tag for a bare primitive kind.
    pub fn of_kind(kind: PrimitiveKind) -> Self {
        TypeTag::from_static(kind.as_str())
    }

    /// Whether this tag can only come out of the built-in rules, never out of
    /// a registry lookup.
    pub fn is_reserved(&self) -> bool {
        TypeTag::BUILTIN.iter().any(|t| t == self)
            || PrimitiveKind::ALL.iter().any(|k| k.as_str() == self.as_str())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TypeTag {
    fn from(s: &'static str) -> Self {
        TypeTag::from_static(s)
    }
}

impl From<String> for TypeTag {
    fn from(s: String) -> Self {
        TypeTag::new(s)
    }
}

impl PartialEq<str> for TypeTag {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TypeTag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
