use thiserror::Error;

/// A matched translation call whose shape cannot yield a message.
///
/// Every variant names the function and the 1-based source line of the call,
/// so drivers can report the node precisely and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("call to '{function}' on line {line} has no arguments")]
    MissingArgument { function: String, line: usize },

    #[error("first argument of '{function}' on line {line} is not a literal")]
    NonLiteralArgument { function: String, line: usize },

    #[error("first argument of '{function}' on line {line} is not a string literal")]
    NonStringLiteral { function: String, line: usize },

    #[error("function '{function}' used on line {line} is not registered")]
    UnregisteredFunction { function: String, line: usize },
}

impl ExtractError {
    pub fn function(&self) -> &str {
        match self {
            ExtractError::MissingArgument { function, .. }
            | ExtractError::NonLiteralArgument { function, .. }
            | ExtractError::NonStringLiteral { function, .. }
            | ExtractError::UnregisteredFunction { function, .. } => function,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ExtractError::MissingArgument { line, .. }
            | ExtractError::NonLiteralArgument { line, .. }
            | ExtractError::NonStringLiteral { line, .. }
            | ExtractError::UnregisteredFunction { line, .. } => *line,
        }
    }
}
