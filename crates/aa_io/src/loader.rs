//! Loader: read local input files (article lines, roster JSON, DDN text) and
//! return typed values for the pipeline. No network I/O; a byte limit guards
//! pathological inputs.

#![forbid(unsafe_code)]

use std::fs;
use std::path::Path;

use aa_core::{ParsedArticle, Requester};

use crate::parser;
use crate::IoError;

/// Hard cap on any single input file. Pasted article lists and rosters are
/// tiny; anything near this size is a wrong file.
const MAX_INPUT_BYTES: u64 = 4 * 1024 * 1024;

fn read_text_with_limit(path: &Path) -> Result<String, IoError> {
    let meta = fs::metadata(path)?;
    if meta.len() > MAX_INPUT_BYTES {
        return Err(IoError::Limit(format!(
            "{} is {} bytes (max {})",
            path.display(),
            meta.len(),
            MAX_INPUT_BYTES
        )));
    }
    Ok(fs::read_to_string(path)?)
}

/// Raw article lines, one per line (empty lines preserved for the parser to drop).
pub fn load_article_lines(path: &Path) -> Result<Vec<String>, IoError> {
    let text = read_text_with_limit(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Parsed articles straight from an article-lines file.
pub fn load_articles(path: &Path) -> Result<Vec<ParsedArticle>, IoError> {
    let text = read_text_with_limit(path)?;
    Ok(parser::parse_article_text(&text))
}

/// Roster JSON: an ordered array of `{id, label, value}` records. Order is
/// priority order and is preserved as-is.
pub fn load_roster(path: &Path) -> Result<Vec<Requester>, IoError> {
    let text = read_text_with_limit(path)?;
    let roster: Vec<Requester> = serde_json::from_str(&text)?;
    Ok(roster)
}

/// DDN text is handed to the validation gate verbatim (newline-delimited ids).
pub fn load_ddn_text(path: &Path) -> Result<String, IoError> {
    read_text_with_limit(path)
}
