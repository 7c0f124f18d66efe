//! Article token newtype and the parsed-article record.

use crate::errors::CoreError;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Normalized article identifier.
///
/// Construction trims surrounding whitespace and upper-cases the token, so
/// every pipeline stage keys on one canonical spelling. Shape beyond
/// non-emptiness is *not* validated here; upstream extraction owns that.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ArticleId(String);

impl ArticleId {
    /// Normalize `raw` into an id. Errors on empty/whitespace-only input.
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyArticleId);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ArticleId {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// One article as produced by the line parser: id plus page count.
/// `pages` defaults to 0 when the source line carried no bracketed count.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedArticle {
    pub article_id: ArticleId,
    pub pages: u32,
}

impl ParsedArticle {
    pub fn new(article_id: ArticleId, pages: u32) -> Self {
        Self { article_id, pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_trimmed_and_uppercased() {
        let id = ArticleId::new("  cdc101217 ").unwrap();
        assert_eq!(id.as_str(), "CDC101217");
    }

    #[test]
    fn empty_id_is_rejected() {
        assert_eq!(ArticleId::new("   "), Err(CoreError::EmptyArticleId));
    }

    #[test]
    fn from_str_matches_new() {
        let a: ArticleId = "abc123".parse().unwrap();
        assert_eq!(a, ArticleId::new("ABC123").unwrap());
    }
}
