//! Visitor contract and the reference tree-walking driver.
//!
//! A [`NodeVisitor`] is entered on every node before its children and left
//! after them. Visitors only borrow nodes, so a pass can never reshape the
//! tree. [`NodeTraverser`] runs one full pass per registered visitor, lowest
//! priority first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ast::SyntaxNode;
use crate::core::extract::ExtractError;
use crate::core::registry::FunctionRegistry;

/// Callbacks invoked by [`NodeTraverser`] for every node.
pub trait NodeVisitor {
    /// Called before the node's children are visited.
    fn enter_node(
        &mut self,
        node: &SyntaxNode,
        registry: &dyn FunctionRegistry,
    ) -> Result<(), ExtractError>;

    /// Called after the node's children are visited.
    fn leave_node(
        &mut self,
        _node: &SyntaxNode,
        _registry: &dyn FunctionRegistry,
    ) -> Result<(), ExtractError> {
        Ok(())
    }

    /// Ordering among visitors sharing a traverser; lower runs first.
    fn priority(&self) -> i32;
}

impl<V: NodeVisitor + ?Sized> NodeVisitor for &mut V {
    fn enter_node(
        &mut self,
        node: &SyntaxNode,
        registry: &dyn FunctionRegistry,
    ) -> Result<(), ExtractError> {
        (**self).enter_node(node, registry)
    }

    fn leave_node(
        &mut self,
        node: &SyntaxNode,
        registry: &dyn FunctionRegistry,
    ) -> Result<(), ExtractError> {
        (**self).leave_node(node, registry)
    }

    fn priority(&self) -> i32 {
        (**self).priority()
    }
}

/// What the traverser does when a visitor rejects a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum FaultPolicy {
    /// Stop the pass and return the error.
    Abort,
    /// Collect the error and keep walking (children included).
    #[default]
    Skip,
}

/// Outcome of a completed traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalReport {
    /// Number of `enter_node` calls made, across all visitors.
    pub visited: usize,
    /// Errors collected under [`FaultPolicy::Skip`], in traversal order.
    pub faults: Vec<ExtractError>,
}

/// Pre-order, depth-first driver for a set of visitors.
pub struct NodeTraverser<'v> {
    visitors: Vec<Box<dyn NodeVisitor + 'v>>,
    policy: FaultPolicy,
}

impl<'v> NodeTraverser<'v> {
    pub fn new(policy: FaultPolicy) -> Self {
        Self {
            visitors: Vec::new(),
            policy,
        }
    }

    pub fn add_visitor(&mut self, visitor: impl NodeVisitor + 'v) {
        self.visitors.push(Box::new(visitor));
    }

    /// Walk `root` once per visitor.
    ///
    /// Visitors run in ascending priority; equal priorities keep their
    /// registration order.
    pub fn traverse(
        &mut self,
        root: &SyntaxNode,
        registry: &dyn FunctionRegistry,
    ) -> Result<TraversalReport, ExtractError> {
        let mut report = TraversalReport::default();
        let policy = self.policy;

        // stable sort: ties keep registration order
        self.visitors.sort_by_key(|v| v.priority());

        for visitor in &mut self.visitors {
            debug!(priority = visitor.priority(), "starting visitor pass");
            walk(visitor.as_mut(), root, registry, policy, &mut report)?;
        }

        Ok(report)
    }
}

impl Default for NodeTraverser<'_> {
    fn default() -> Self {
        Self::new(FaultPolicy::default())
    }
}

fn walk(
    visitor: &mut dyn NodeVisitor,
    node: &SyntaxNode,
    registry: &dyn FunctionRegistry,
    policy: FaultPolicy,
    report: &mut TraversalReport,
) -> Result<(), ExtractError> {
    report.visited += 1;
    handle(visitor.enter_node(node, registry), policy, report)?;

    for child in node.children() {
        walk(visitor, child, registry, policy, report)?;
    }

    handle(visitor.leave_node(node, registry), policy, report)
}

fn handle(
    result: Result<(), ExtractError>,
    policy: FaultPolicy,
    report: &mut TraversalReport,
) -> Result<(), ExtractError> {
    match (result, policy) {
        (Ok(()), _) => Ok(()),
        (Err(err), FaultPolicy::Abort) => Err(err),
        (Err(err), FaultPolicy::Skip) => {
            debug!("skipping node: {}", err);
            report.faults.push(err);
            Ok(())
        }
    }
}
