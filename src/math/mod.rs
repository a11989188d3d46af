//! The numeric library's domain layer as seen by the classifier: which kinds
//! exist, how membership is tested, and the order they are checked in.

pub mod node;
pub mod types;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::predicate::{self, Predicate};
use crate::registry::Registry;

pub use node::{Node, NodeKind};
pub use types::{
    BigNumber, Chain, Complex, DenseMatrix, Fraction, Help, Index, Range, ResultSet, SparseMatrix,
    Unit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainKind {
    BigNumber,
    Complex,
    Fraction,
    Matrix,
    Unit,
    Index,
    Range,
    ResultSet,
    Node,
    Chain,
    Help,
}

impl DomainKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainKind::BigNumber => "BigNumber",
            DomainKind::Complex => "Complex",
            DomainKind::Fraction => "Fraction",
            DomainKind::Matrix => "Matrix",
            DomainKind::Unit => "Unit",
            DomainKind::Index => "Index",
            DomainKind::Range => "Range",
            DomainKind::ResultSet => "ResultSet",
            DomainKind::Node => "Node",
            DomainKind::Chain => "Chain",
            DomainKind::Help => "Help",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        default_order()
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown domain kind '{}'", s))
    }
}

/// The library's own check order. Node sits after the numeric and
/// container kinds; Chain and Help come last.
pub fn default_order() -> Vec<DomainKind> {
    vec![
        DomainKind::BigNumber,
        DomainKind::Complex,
        DomainKind::Fraction,
        DomainKind::Matrix,
        DomainKind::Unit,
        DomainKind::Index,
        DomainKind::Range,
        DomainKind::ResultSet,
        DomainKind::Node,
        DomainKind::Chain,
        DomainKind::Help,
    ]
}

/// Membership is by brand, so every concrete type declaring it (dense and
/// sparse matrices alike) is a member.
pub fn predicate_for(kind: DomainKind) -> Predicate {
    predicate::has_brand(kind.as_str())
}

pub fn registry_for(order: &[DomainKind]) -> Result<Registry> {
    order
        .iter()
        .fold(Registry::builder(), |b, kind| match kind {
            DomainKind::Node => b.register_family(kind.as_str(), predicate_for(*kind)),
            _ => b.register(kind.as_str(), predicate_for(*kind)),
        })
        .build()
}

pub fn default_registry() -> Result<Registry> {
    registry_for(&default_order())
}
