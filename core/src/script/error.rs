//! Script errors.

use thiserror::Error;

use super::{ContainerKind, Span};
use crate::Error;

/// An error raised while parsing or executing a script, with the span of the
/// offending command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ScriptError {
    pub kind: ScriptErrorKind,
    pub span: Span,
}

impl ScriptError {
    pub fn new(kind: ScriptErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptErrorKind {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{0}` expects an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` takes no argument")]
    UnexpectedArgument(&'static str),

    #[error("invalid index `{0}`: expected a non-negative integer")]
    InvalidIndex(String),

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error("`{command}` is not supported on a {kind}")]
    Unsupported {
        command: &'static str,
        kind: ContainerKind,
    },

    #[error(transparent)]
    Container(#[from] Error),
}

impl ScriptErrorKind {
    /// Stable code shown next to rendered diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            ScriptErrorKind::UnknownCommand(_) => "S001",
            ScriptErrorKind::MissingArgument(_) => "S002",
            ScriptErrorKind::UnexpectedArgument(_) => "S003",
            ScriptErrorKind::InvalidIndex(_) => "S004",
            ScriptErrorKind::UnterminatedQuote => "S005",
            ScriptErrorKind::Unsupported { .. } => "R001",
            ScriptErrorKind::Container(Error::OutOfRange { .. }) => "R002",
            ScriptErrorKind::Container(Error::IllegalState) => "R003",
            ScriptErrorKind::Container(Error::Exhausted) => "R004",
            ScriptErrorKind::Container(Error::InvalidCapacity) => "R005",
        }
    }

    /// A hint on how to fix the command, where one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ScriptErrorKind::UnknownCommand(_) => Some(
                "commands: add, get, remove, contains, size, capacity, clear, print, iter, purge, stats",
            ),
            ScriptErrorKind::InvalidIndex(_) => Some("indices start at 0"),
            ScriptErrorKind::UnterminatedQuote => {
                Some("close the quote before the end of the line")
            }
            ScriptErrorKind::Container(Error::OutOfRange { .. }) => {
                Some("use `size` to see how many elements there are")
            }
            _ => None,
        }
    }
}
