use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::ast::SyntaxNode;

/// File suffix of serialized template syntax trees.
pub const TREE_FILE_SUFFIX: &str = ".ast.json";

/// Parse a serialized syntax tree.
///
/// `file_path` is only used to label errors.
pub fn parse_tree(source: &str, file_path: &str) -> Result<SyntaxNode> {
    serde_json::from_str(source)
        .with_context(|| format!("Failed to parse syntax tree: {}", file_path))
}

/// Read and parse a serialized syntax tree from disk.
pub fn load_tree(path: &Path) -> Result<SyntaxNode> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    parse_tree(&content, &path.to_string_lossy())
}
