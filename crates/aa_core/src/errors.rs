use core::fmt;

/// Minimal error set for core-domain validation & parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreError {
    /// An article id was empty (or whitespace-only) after trimming.
    EmptyArticleId,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyArticleId => write!(f, "empty article id"),
        }
    }
}

impl std::error::Error for CoreError {}
