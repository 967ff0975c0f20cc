//! Error taxonomy for trace normalization and call-tree parsing.

use thiserror::Error;

/// Everything that can go wrong between a raw trace and a parsed forest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The first line is not the `function_graph` tracer marker.
    #[error("not a function_graph trace (first line was {first_line:?}); pass the trace file of the function_graph tracer")]
    Format { first_line: String },

    /// The dense string does not follow the call grammar.
    #[error("malformed call graph at byte {offset}: {reason}")]
    Parse {
        offset: usize,
        reason: ParseErrorReason,
    },

    /// Nesting went deeper than the configured limit.
    #[error("call nesting at byte {offset} exceeds the maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize, offset: usize },
}

/// Why a dense string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorReason {
    #[error("expected `()` after the function name")]
    MissingParens,
    #[error("function name is empty")]
    EmptyName,
    #[error("unexpected {0:?} inside a function name")]
    InvalidNameChar(char),
    #[error("call ends without `;` or `{{`")]
    MissingTail,
    #[error("expected `;` or `{{` after `()`, found {0:?}")]
    UnexpectedTail(char),
    #[error("`}}` does not close any open block")]
    UnmatchedClose,
    #[error("block opened here is never closed")]
    UnterminatedBlock,
}

impl Error {
    pub(crate) fn parse(offset: usize, reason: ParseErrorReason) -> Self {
        Error::Parse { offset, reason }
    }

    /// True for grammar violations, including the depth limit.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::DepthExceeded { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
