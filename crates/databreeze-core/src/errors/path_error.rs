//! Key path parsing errors.

use super::error_code::{self, DatabreezeErrorCode};

/// Why a dotted key path string could not be parsed.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("empty path segment at position {position}")]
    EmptySegment { position: usize },

    #[error("unclosed '[' at position {position}")]
    UnclosedBracket { position: usize },

    #[error("invalid index {index:?} at position {position}")]
    InvalidIndex { index: String, position: usize },

    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
}

impl DatabreezeErrorCode for PathError {
    fn error_code(&self) -> &'static str {
        error_code::PATH_ERROR
    }
}
