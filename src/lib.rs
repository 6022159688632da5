//! gettext-scan - translatable message extractor for template syntax trees
//!
//! gettext-scan walks serialized template syntax trees and collects the
//! string literals passed to the gettext-style translation functions
//! `_`, `__`, `_n` and `__n`, together with the line each call sits on.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Tree model, visitor traversal and the message extractor
//! - `issues`: Issue type definitions and reporting

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
