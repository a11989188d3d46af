//! Parsed expression nodes. All subtypes share the `Node` brand and report
//! their own subtype name through `type_field`.

use std::any::Any;
use std::fmt;

use crate::foreign::Foreign;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    AccessorNode,
    ArrayNode,
    AssignmentNode,
    BlockNode,
    ConditionalNode,
    ConstantNode,
    FunctionAssignmentNode,
    FunctionNode,
    IndexNode,
    ObjectNode,
    OperatorNode,
    ParenthesisNode,
    RangeNode,
    RelationalNode,
    SymbolNode,
    /// Node types contributed by parser extensions.
    Custom(String),
}

impl NodeKind {
    pub const KNOWN: [NodeKind; 15] = [
        NodeKind::AccessorNode,
        NodeKind::ArrayNode,
        NodeKind::AssignmentNode,
        NodeKind::BlockNode,
        NodeKind::ConditionalNode,
        NodeKind::ConstantNode,
        NodeKind::FunctionAssignmentNode,
        NodeKind::FunctionNode,
        NodeKind::IndexNode,
        NodeKind::ObjectNode,
        NodeKind::OperatorNode,
        NodeKind::ParenthesisNode,
        NodeKind::RangeNode,
        NodeKind::RelationalNode,
        NodeKind::SymbolNode,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::AccessorNode => "AccessorNode",
            NodeKind::ArrayNode => "ArrayNode",
            NodeKind::AssignmentNode => "AssignmentNode",
            NodeKind::BlockNode => "BlockNode",
            NodeKind::ConditionalNode => "ConditionalNode",
            NodeKind::ConstantNode => "ConstantNode",
            NodeKind::FunctionAssignmentNode => "FunctionAssignmentNode",
            NodeKind::FunctionNode => "FunctionNode",
            NodeKind::IndexNode => "IndexNode",
            NodeKind::ObjectNode => "ObjectNode",
            NodeKind::OperatorNode => "OperatorNode",
            NodeKind::ParenthesisNode => "ParenthesisNode",
            NodeKind::RangeNode => "RangeNode",
            NodeKind::RelationalNode => "RelationalNode",
            NodeKind::SymbolNode => "SymbolNode",
            NodeKind::Custom(name) => name,
        }
    }
}

impl From<&str> for NodeKind {
    fn from(name: &str) -> Self {
        NodeKind::KNOWN
            .into_iter()
            .find(|k| k.as_str() == name)
            .unwrap_or_else(|| NodeKind::Custom(name.to_string()))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Symbol name, constant literal, operator, ...; depends on the kind.
    pub label: Option<String>,
    pub args: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, label: None, args: Vec::new() }
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(NodeKind::SymbolNode).with_label(name)
    }

    pub fn constant(literal: impl Into<String>) -> Self {
        Self::new(NodeKind::ConstantNode).with_label(literal)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_args(mut self, args: Vec<Node>) -> Self {
        self.args = args;
        self
    }
}

impl Foreign for Node {
    fn type_name(&self) -> &'static str {
        "Node"
    }

    fn brands(&self) -> &'static [&'static str] {
        &["Node"]
    }

    fn type_field(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn clone_boxed(&self) -> Box<dyn Foreign> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
