//! Function registry lookups.
//!
//! The host template environment knows which functions exist and what
//! arguments they declare. The extractor only reads from it, to confirm that a
//! matched translation helper is actually defined.

use std::collections::HashMap;

/// Declared arguments of a template function, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentShape {
    pub arguments: Vec<String>,
}

impl ArgumentShape {
    pub fn new<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the first declared argument (the message for translation helpers).
    pub fn first(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }
}

/// Lookup of function name to declared argument shape.
pub trait FunctionRegistry {
    fn lookup(&self, name: &str) -> Option<&ArgumentShape>;
}

/// In-memory [`FunctionRegistry`].
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, ArgumentShape>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the gettext-style helpers:
    ///
    /// - `_(message)`
    /// - `__(message, ...args)`
    /// - `_n(singular, plural, count)`
    /// - `__n(singular, plural, count, ...args)`
    pub fn translation_functions() -> Self {
        let mut table = Self::new();
        table.register("_", ArgumentShape::new(["message"]));
        table.register("__", ArgumentShape::new(["message", "args"]));
        table.register("_n", ArgumentShape::new(["singular", "plural", "count"]));
        table.register(
            "__n",
            ArgumentShape::new(["singular", "plural", "count", "args"]),
        );
        table
    }

    /// Registers `name`, replacing any previous shape.
    pub fn register(&mut self, name: impl Into<String>, shape: ArgumentShape) {
        self.functions.insert(name.into(), shape);
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl FunctionRegistry for FunctionTable {
    fn lookup(&self, name: &str) -> Option<&ArgumentShape> {
        self.functions.get(name)
    }
}
