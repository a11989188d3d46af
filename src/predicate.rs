//! Membership tests for domain kinds.
//!
//! A predicate must be total and pure: it answers `false` for anything that
//! is not a member, `Null` and `Undefined` included, and never panics.

use std::sync::Arc;

use crate::foreign::Foreign;
use crate::value::Value;

pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

pub fn from_fn<F>(f: F) -> Predicate
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Duck-typed membership: any foreign value declaring `brand`.
pub fn has_brand(brand: &'static str) -> Predicate {
    Arc::new(move |v: &Value| v.as_foreign().map_or(false, |obj| obj.has_brand(brand)))
}

/// Exact membership: foreign values whose concrete type is `T`.
pub fn is_foreign<T: Foreign + 'static>() -> Predicate {
    Arc::new(|v: &Value| v.as_foreign().map_or(false, |obj| obj.downcast_ref::<T>().is_some()))
}

pub fn never() -> Predicate {
    Arc::new(|_: &Value| false)
}
