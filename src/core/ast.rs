//! Syntax tree consumed by the extractor.
//!
//! Trees are produced upstream by a template engine's parser and handed over
//! either in memory or serialized as JSON (see `crate::core::parsers::tree`).
//! Only the shapes the extractor cares about are modelled explicitly; every
//! other construct (blocks, filters, names, ...) is an `Other` node that just
//! carries its children.

use serde::{Deserialize, Serialize};

/// Discriminant of a [`SyntaxNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    FunctionCall,
    Literal,
    Other,
}

/// Value of a literal (constant) expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl LiteralValue {
    /// Returns the string payload, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A node of a parsed template.
///
/// Line numbers are 1-based, as reported by the host parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxNode {
    /// Function call expression: `{{ _("Hello") }}`
    FunctionCall {
        name: String,
        #[serde(default)]
        arguments: Vec<SyntaxNode>,
        line: usize,
    },
    /// Constant expression: `"Hello"`, `42`, `true`
    Literal { value: LiteralValue, line: usize },
    /// Any other construct. `name` is the host's node type, kept for diagnostics.
    Other {
        name: String,
        #[serde(default)]
        children: Vec<SyntaxNode>,
        line: usize,
    },
}

impl SyntaxNode {
    pub fn call(name: impl Into<String>, arguments: Vec<SyntaxNode>, line: usize) -> Self {
        SyntaxNode::FunctionCall {
            name: name.into(),
            arguments,
            line,
        }
    }

    pub fn string(value: impl Into<String>, line: usize) -> Self {
        SyntaxNode::Literal {
            value: LiteralValue::String(value.into()),
            line,
        }
    }

    pub fn other(name: impl Into<String>, children: Vec<SyntaxNode>, line: usize) -> Self {
        SyntaxNode::Other {
            name: name.into(),
            children,
            line,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            SyntaxNode::FunctionCall { .. } => NodeKind::FunctionCall,
            SyntaxNode::Literal { .. } => NodeKind::Literal,
            SyntaxNode::Other { .. } => NodeKind::Other,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            SyntaxNode::FunctionCall { line, .. }
            | SyntaxNode::Literal { line, .. }
            | SyntaxNode::Other { line, .. } => *line,
        }
    }

    /// Child nodes in source order.
    ///
    /// For a call these are its arguments; literals have no children.
    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            SyntaxNode::FunctionCall { arguments, .. } => arguments,
            SyntaxNode::Other { children, .. } => children,
            SyntaxNode::Literal { .. } => &[],
        }
    }

    pub fn function_name(&self) -> Option<&str> {
        match self {
            SyntaxNode::FunctionCall { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn arguments(&self) -> Option<&[SyntaxNode]> {
        match self {
            SyntaxNode::FunctionCall { arguments, .. } => Some(arguments),
            _ => None,
        }
    }

    pub fn literal_value(&self) -> Option<&LiteralValue> {
        match self {
            SyntaxNode::Literal { value, .. } => Some(value),
            _ => None,
        }
    }
}
