use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::foreign::{Foreign, LyObj};

pub type AssocMap = HashMap<String, Value>;

type NativeImpl = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Callable host value. Identity is the shared closure, not its behavior.
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    func: Arc<NativeImpl>,
}

impl NativeFunction {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self { name: name.into(), func: Arc::new(func) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

/// Any value the host runtime can hand to the classifier.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(String),
    Function(NativeFunction),
    Array(Vec<Value>),
    Date(DateTime<Utc>),
    RegExp(Regex),
    Object(AssocMap),
    Foreign(LyObj),
}

impl Value {
    pub fn string<S: Into<String>>(s: S) -> Self { Value::String(s.into()) }
    pub fn symbol<S: Into<String>>(s: S) -> Self { Value::Symbol(s.into()) }
    pub fn array(items: Vec<Value>) -> Self { Value::Array(items) }
    pub fn object(pairs: Vec<(impl Into<String>, Value)>) -> Self {
        let mut m = AssocMap::with_capacity(pairs.len());
        for (k, v) in pairs { m.insert(k.into(), v); }
        Value::Object(m)
    }
    pub fn function<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(NativeFunction::new(name, func))
    }
    pub fn now() -> Self { Value::Date(Utc::now()) }
    pub fn foreign<T: Foreign + 'static>(obj: T) -> Self {
        Value::Foreign(LyObj::new(Box::new(obj)))
    }

    pub fn as_foreign(&self) -> Option<&LyObj> {
        match self {
            Value::Foreign(obj) => Some(obj),
            _ => None,
        }
    }

    /// Subtype name the value carries about itself: `Foreign::type_field` for
    /// foreign objects, a string `type` entry for plain records.
    pub fn type_field(&self) -> Option<&str> {
        match self {
            Value::Foreign(obj) => obj.type_field(),
            Value::Object(m) => match m.get("type") {
                Some(Value::String(s)) => Some(s.as_str()),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self { Value::Number(n) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Boolean(b) }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self { Value::RegExp(re) }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self { Value::Date(d) }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self { Value::Array(items) }
}
