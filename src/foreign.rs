use std::any::Any;
use std::fmt;

/// Trait for domain objects that live inside a [`Value`](crate::value::Value)
///
/// Foreign objects are opaque types owned by the host library (matrices,
/// units, parsed expression nodes and so on). The classifier never inspects
/// their contents; it only asks for the capability brands they carry and,
/// for self-describing families, the subtype tag they report.
pub trait Foreign: fmt::Debug + Send + Sync {
    /// Concrete Rust-side name of this object
    fn type_name(&self) -> &'static str;

    /// Capability brands this object declares.
    ///
    /// Several concrete types may share a brand: a dense and a sparse matrix
    /// both answer to `Matrix`.
    fn brands(&self) -> &'static [&'static str] {
        &[]
    }

    /// Subtype tag the object reports about itself, if it belongs to a
    /// self-describing family.
    fn type_field(&self) -> Option<&str> {
        None
    }

    /// Clone this foreign object into a Box
    fn clone_boxed(&self) -> Box<dyn Foreign>;

    /// Get a reference to this object as Any for safe downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Wrapper type for Foreign objects in the Value model
///
/// LyObj provides a type-erased container for Foreign objects while
/// keeping `Clone` and `Debug` through the Foreign trait.
#[derive(Debug)]
pub struct LyObj {
    inner: Box<dyn Foreign>,
}

impl LyObj {
    /// Create a new LyObj wrapper around a Foreign object
    pub fn new(foreign: Box<dyn Foreign>) -> Self {
        LyObj { inner: foreign }
    }

    /// Get the type name of the wrapped object
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    pub fn brands(&self) -> &'static [&'static str] {
        self.inner.brands()
    }

    pub fn has_brand(&self, brand: &str) -> bool {
        self.brands().iter().any(|b| *b == brand)
    }

    pub fn type_field(&self) -> Option<&str> {
        self.inner.type_field()
    }

    /// Attempt to downcast to a specific type
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }
}

impl Clone for LyObj {
    fn clone(&self) -> Self {
        LyObj {
            inner: self.inner.clone_boxed(),
        }
    }
}

impl fmt::Display for LyObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[...]", self.type_name())
    }
}
