//! Parsers for serialized template syntax trees.
//!
//! - `tree`: JSON syntax tree loader

pub mod tree;
