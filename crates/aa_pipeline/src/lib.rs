//! aa_pipeline — deterministic pipeline surface
//! (parse → validate → distribute → build payload).
//!
//! This crate stays free of direct filesystem I/O in the core path and
//! delegates parsing/JSON/hashing to `aa_io` and the claim walk to
//! `aa_engine`. A convenience path-based entry exists for the CLI.

#![forbid(unsafe_code)]

use std::path::Path;

use aa_core::{AllocationMethod, ParsedArticle, Requester};
use aa_io::{hasher, loader, parser, IoError};

pub mod build_result;
pub mod validate;

pub use build_result::{build_final_allocation, ArticleLine, FinalAllocationResult, PersonAllocation};
pub use validate::{preflight, validate_ddn, DdnError, Severity, ValidationIssue, ValidationReport};

/// Everything one allocation run needs, already in memory.
#[derive(Debug, Clone)]
pub struct PipelineCtx {
    pub requesters: Vec<Requester>,
    pub raw_article_lines: Vec<String>,
    /// Raw user-typed DDN text (newline-delimited ids); may be empty.
    pub ddn_text: String,
    pub method: AllocationMethod,
    /// Caller-supplied stamps; the pipeline never consults a clock.
    pub month: String,
    pub date: String,
}

/// Pipeline products: the wire payload plus its canonical digest, which the
/// submission collaborator can use to deduplicate identical re-submissions.
#[derive(Debug, Clone)]
pub struct PipelineOutputs {
    pub result: FinalAllocationResult,
    pub payload_sha256: String,
}

/// Single error surface for pipeline orchestration.
#[derive(Debug)]
pub enum PipelineError {
    Io(String),
    /// Pre-flight validation failed; carries the full report for display.
    Validate(ValidationReport),
    Build(String),
}

impl core::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PipelineError::Io(m) => write!(f, "io: {m}"),
            PipelineError::Validate(report) => {
                write!(f, "validation failed:")?;
                for issue in &report.issues {
                    write!(f, " [{}] {};", issue.code, issue.message)?;
                }
                Ok(())
            }
            PipelineError::Build(m) => write!(f, "build: {m}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<IoError> for PipelineError {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Json { pointer, msg } => PipelineError::Build(format!("json {pointer}: {msg}")),
            other => PipelineError::Io(other.to_string()),
        }
    }
}

/// Orchestrate one allocation run with a preloaded context.
///
/// Pre-flight failures abort before the builder runs; the engine itself never
/// errors on well-typed input.
pub fn run_with_ctx(ctx: &PipelineCtx) -> Result<PipelineOutputs, PipelineError> {
    let articles: Vec<ParsedArticle> = parser::parse_article_lines(&ctx.raw_article_lines);

    let report = validate::preflight(&ctx.requesters, &articles, &ctx.ddn_text);
    if !report.pass {
        return Err(PipelineError::Validate(report));
    }

    let available: Vec<_> = articles.iter().map(|a| a.article_id.clone()).collect();
    let ddn_ids = validate::validate_ddn(&ctx.ddn_text, &available)
        .map_err(|e| PipelineError::Build(e.to_string()))?; // unreachable after preflight

    let result = build_final_allocation(
        &ctx.requesters,
        &articles,
        &ddn_ids,
        ctx.method,
        &ctx.month,
        &ctx.date,
    );

    let payload_sha256 = hasher::sha256_canonical(&result).map_err(PipelineError::from)?;

    Ok(PipelineOutputs { result, payload_sha256 })
}

/// Convenience entry: load articles / roster / DDN from local files, then run.
pub fn run_from_paths(
    articles_path: &Path,
    roster_path: &Path,
    ddn_path: Option<&Path>,
    method: AllocationMethod,
    month: &str,
    date: &str,
) -> Result<PipelineOutputs, PipelineError> {
    let raw_article_lines = loader::load_article_lines(articles_path).map_err(PipelineError::from)?;
    let requesters = loader::load_roster(roster_path).map_err(PipelineError::from)?;
    let ddn_text = match ddn_path {
        Some(p) => loader::load_ddn_text(p).map_err(PipelineError::from)?,
        None => String::new(),
    };

    run_with_ctx(&PipelineCtx {
        requesters,
        raw_article_lines,
        ddn_text,
        method,
        month: month.to_string(),
        date: date.to_string(),
    })
}
