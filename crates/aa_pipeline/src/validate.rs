//! crates/aa_pipeline/src/validate.rs
//! Validation before any distribution runs. Deterministic outputs; pure
//! integer reasoning. Two layers:
//!
//! - [`validate_ddn`] — the strict gate over user-entered DDN text. Errors are
//!   return values, never panics; the whole batch is rejected on the first
//!   violation (strict policy, in contrast to the lenient line parser).
//! - [`preflight`] — caller-side checks the engine itself does not perform
//!   (the engine tolerates over-request and simply under-fills), collected
//!   into a deterministic issue report.

use std::collections::BTreeSet;

use aa_core::{ArticleId, ParsedArticle, Requester};
use core::fmt;

/// DDN gate failures. Either one rejects the entire batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DdnError {
    /// The same id appears twice in the DDN text.
    Duplicate { id: ArticleId },
    /// A DDN id is not present in the available article pool
    /// (only checked when the pool is non-empty).
    Unknown { id: ArticleId },
}

impl fmt::Display for DdnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DdnError::Duplicate { id } => write!(f, "duplicate DDN article: {id}"),
            DdnError::Unknown { id } => write!(f, "DDN article not in pool: {id}"),
        }
    }
}

impl std::error::Error for DdnError {}

/// Parse + validate DDN text: one article id per non-empty line.
///
/// Empty text is valid and yields an empty list. When `available` is empty,
/// membership checking is skipped (the pool may not be known yet); uniqueness
/// is always enforced. Ids are normalized through `ArticleId`, so membership
/// and uniqueness are case-insensitive.
pub fn validate_ddn(text: &str, available: &[ArticleId]) -> Result<Vec<ArticleId>, DdnError> {
    let avail: BTreeSet<&ArticleId> = available.iter().collect();
    let mut seen: BTreeSet<ArticleId> = BTreeSet::new();
    let mut out: Vec<ArticleId> = Vec::new();

    for line in text.lines() {
        let Ok(id) = ArticleId::new(line) else {
            continue; // blank line
        };
        if !seen.insert(id.clone()) {
            return Err(DdnError::Duplicate { id });
        }
        if !available.is_empty() && !avail.contains(&id) {
            return Err(DdnError::Unknown { id });
        }
        out.push(id);
    }
    Ok(out)
}

/// Issue severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
}

/// Deterministic report: pass = (no Error); ordering of issues is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub pass: bool,
    pub issues: Vec<ValidationIssue>,
}

/// Caller-side pre-flight: DDN gate plus the over-allocation check
/// (`sum(values) > total_articles - ddn_count`).
pub fn preflight(
    requesters: &[Requester],
    articles: &[ParsedArticle],
    ddn_text: &str,
) -> ValidationReport {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    let available: Vec<ArticleId> = articles.iter().map(|a| a.article_id.clone()).collect();
    match validate_ddn(ddn_text, &available) {
        Ok(ddn_ids) => {
            issues.extend(check_over_allocation(requesters, articles.len(), ddn_ids.len()));
        }
        Err(e) => {
            let code = match &e {
                DdnError::Duplicate { .. } => "Ddn.Duplicate",
                DdnError::Unknown { .. } => "Ddn.UnknownArticle",
            };
            issues.push(ValidationIssue {
                severity: Severity::Error,
                code,
                message: e.to_string(),
            });
            // Over-allocation depends on the DDN count; skip it until the
            // gate passes so the report carries one actionable error.
        }
    }

    // Deterministic sort (by code, then message) for byte-identical runs.
    issues.sort_by(|a, b| match a.code.cmp(b.code) {
        core::cmp::Ordering::Equal => a.message.cmp(&b.message),
        o => o,
    });

    ValidationReport {
        pass: !issues.iter().any(|i| i.severity == Severity::Error),
        issues,
    }
}

/// Over-allocation is a pre-flight condition only: the engine under-fills
/// gracefully, but the form must disable submission.
fn check_over_allocation(
    requesters: &[Requester],
    total_articles: usize,
    ddn_count: usize,
) -> Vec<ValidationIssue> {
    let requested: u64 = requesters.iter().map(|r| u64::from(r.value)).sum();
    // Saturating: with an empty pool the membership check is skipped, so the
    // DDN count may exceed the article count.
    let pool = total_articles.saturating_sub(ddn_count) as u64;
    if requested > pool {
        vec![ValidationIssue {
            severity: Severity::Error,
            code: "Roster.OverAllocation",
            message: format!("requested {requested} articles but only {pool} are available"),
        }]
    } else {
        Vec::new()
    }
}
