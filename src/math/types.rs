//! Host library value types, modelled far enough to be classified.

use std::any::Any;

use crate::foreign::Foreign;
use crate::value::Value;

macro_rules! branded {
    ($ty:ty, [$($brand:literal),+]) => {
        impl Foreign for $ty {
            fn type_name(&self) -> &'static str { stringify!($ty) }
            fn brands(&self) -> &'static [&'static str] { &[$($brand),+] }
            fn clone_boxed(&self) -> Box<dyn Foreign> { Box::new(self.clone()) }
            fn as_any(&self) -> &dyn Any { self }
        }
    };
}

/// Arbitrary precision decimal, kept as its digit string.
#[derive(Debug, Clone, PartialEq)]
pub struct BigNumber {
    pub digits: String,
}

impl BigNumber {
    pub fn new(digits: impl Into<String>) -> Self { Self { digits: digits.into() } }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self { Self { re, im } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub num: i64,
    pub den: i64,
}

impl Fraction {
    pub fn new(num: i64, den: i64) -> Self { Self { num, den } }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl DenseMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let shape = vec![rows.len(), cols];
        Self { shape, data: rows.into_iter().flatten().collect() }
    }
}

/// Coordinate-list storage; shares the `Matrix` brand with [`DenseMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    pub shape: Vec<usize>,
    pub entries: Vec<(usize, usize, f64)>,
}

impl SparseMatrix {
    pub fn new(rows: usize, cols: usize, entries: Vec<(usize, usize, f64)>) -> Self {
        Self { shape: vec![rows, cols], entries }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub value: Option<f64>,
    pub unit: String,
}

impl Unit {
    pub fn new(value: Option<f64>, unit: impl Into<String>) -> Self {
        Self { value, unit: unit.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Range {
    pub fn new(start: f64, end: f64) -> Self { Self { start, end, step: 1.0 } }
    pub fn with_step(start: f64, end: f64, step: f64) -> Self { Self { start, end, step } }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub dimensions: Vec<Range>,
}

impl Index {
    pub fn new(dimensions: Vec<Range>) -> Self { Self { dimensions } }
}

/// Values produced by evaluating a multi-statement expression.
#[derive(Debug, Clone)]
pub struct ResultSet {
    pub entries: Vec<Value>,
}

impl ResultSet {
    pub fn new(entries: Vec<Value>) -> Self { Self { entries } }
}

/// Fluent wrapper around a value awaiting further operations.
#[derive(Debug, Clone)]
pub struct Chain {
    pub value: Box<Value>,
}

impl Chain {
    pub fn new(value: Value) -> Self { Self { value: Box::new(value) } }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Help {
    pub name: String,
}

impl Help {
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}

branded!(BigNumber, ["BigNumber"]);
branded!(Complex, ["Complex"]);
branded!(Fraction, ["Fraction"]);
branded!(DenseMatrix, ["Matrix"]);
branded!(SparseMatrix, ["Matrix"]);
branded!(Unit, ["Unit"]);
branded!(Index, ["Index"]);
branded!(Range, ["Range"]);
branded!(ResultSet, ["ResultSet"]);
branded!(Chain, ["Chain"]);
branded!(Help, ["Help"]);
