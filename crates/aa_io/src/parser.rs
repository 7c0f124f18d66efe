//! Lenient article-line parser.
//!
//! Each line is either `"<ID> [<N>]"` or a bare `"<ID>"`. Whitespace around
//! the bracketed number is tolerated; a malformed or missing bracket yields
//! `pages = 0` rather than rejecting the line (free-text input is treated
//! permissively; the DDN gate downstream is where strictness lives).

#![forbid(unsafe_code)]

use aa_core::{ArticleId, ParsedArticle};

/// Parse a batch of raw lines. Empty/whitespace-only lines are dropped;
/// an empty slice yields an empty vec.
pub fn parse_article_lines<S: AsRef<str>>(lines: &[S]) -> Vec<ParsedArticle> {
    lines.iter().filter_map(|l| parse_line(l.as_ref())).collect()
}

/// Parse newline-delimited text (pasted form input, a file's contents).
pub fn parse_article_text(text: &str) -> Vec<ParsedArticle> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ParsedArticle> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.ends_with(']') {
        if let Some(open) = trimmed.rfind('[') {
            let id_part = trimmed[..open].trim();
            let pages_part = trimmed[open + 1..trimmed.len() - 1].trim();
            if !id_part.is_empty() {
                // Non-numeric page text falls back to 0 (lenient policy).
                let pages = pages_part.parse::<u32>().unwrap_or(0);
                let article_id = ArticleId::new(id_part).ok()?;
                return Some(ParsedArticle::new(article_id, pages));
            }
        }
    }

    // No well-formed trailing bracket: the whole line is the id, pages 0.
    let article_id = ArticleId::new(trimmed).ok()?;
    Some(ParsedArticle::new(article_id, 0))
}
