//! Error types for reading and thinking

use thiserror::Error;

/// Structural problems found while nesting outline lines
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutlineError {
    /// A line is shallower than the block the builder is currently nesting.
    /// The scanner never produces this for well-formed input.
    #[error("line {line}: depth {depth} is shallower than the enclosing block depth {expected}")]
    Shallower {
        line: usize,
        depth: usize,
        expected: usize,
    },

    /// A nested block has no line above it to attach to
    #[error("line {line}: block at depth {depth} has no parent instruction at depth {parent}")]
    Orphaned {
        line: usize,
        depth: usize,
        parent: usize,
    },

    /// A marker run shorter than the one that opened the outline
    #[error("line {line}: marker depth {depth} is shallower than the outline's base level {base}")]
    BelowBase { line: usize, depth: usize, base: usize },
}

impl OutlineError {
    /// The same error with its line number moved down by `offset`
    pub fn shifted(self, offset: usize) -> Self {
        match self {
            OutlineError::Shallower {
                line,
                depth,
                expected,
            } => OutlineError::Shallower {
                line: line + offset,
                depth,
                expected,
            },
            OutlineError::Orphaned {
                line,
                depth,
                parent,
            } => OutlineError::Orphaned {
                line: line + offset,
                depth,
                parent,
            },
            OutlineError::BelowBase { line, depth, base } => OutlineError::BelowBase {
                line: line + offset,
                depth,
                base,
            },
        }
    }
}

/// Errors surfaced by `Cerebrum::read` and `Cerebrum::think`
#[derive(Debug, Error)]
pub enum CerebrumError {
    #[error(transparent)]
    Outline(#[from] OutlineError),

    /// A marker line no registered pattern recognizes (strict mode)
    #[error("line {line}: unrecognized instruction '{text}'")]
    Unrecognized { line: usize, text: String },

    /// The input was a quit sentinel
    #[error("quit requested")]
    QuitRequested,

    /// A nucleus could not perform its effect
    #[error("{0}")]
    Misfire(String),

    /// A fault surfaced in debug mode, with the firing call stack
    #[error("fault in '{text}' (line {line}): {source}")]
    Fault {
        text: String,
        line: usize,
        trace: Vec<String>,
        #[source]
        source: Box<CerebrumError>,
    },

    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}

impl CerebrumError {
    pub fn misfire(message: impl Into<String>) -> Self {
        CerebrumError::Misfire(message.into())
    }

    /// Errors that must reach the caller regardless of the fault policy
    pub fn is_passthrough(&self) -> bool {
        matches!(
            self,
            CerebrumError::QuitRequested | CerebrumError::Fault { .. }
        )
    }
}

pub type CerebrumResult<T> = Result<T, CerebrumError>;
