// crates/aa_cli/src/args.rs
//
// Deterministic, offline CLI argument parsing surface.
// Rules:
// - No networked paths (reject any scheme:// like http/https/file)
// - --articles and --roster are required; --ddn is optional
// - --method takes the wire strings and parses leniently (unknown → priority)
// - --month/--date are caller-supplied stamps; the engine never reads a clock
// - --validate-only performs load + pre-flight checks without building output

use clap::Parser;
use std::path::{Path, PathBuf};

use aa_core::AllocationMethod;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "aa",
    disable_help_subcommand = true,
    about = "Offline, deterministic article allocation for the editorial desk"
)]
pub struct Args {
    /// Article lines file: one `ID [pages]` (or bare `ID`) per line.
    #[arg(long)]
    pub articles: PathBuf,

    /// Roster JSON path: ordered array of {id, label, value}.
    #[arg(long)]
    pub roster: PathBuf,

    /// Optional DDN text path: one article id per line.
    #[arg(long)]
    pub ddn: Option<PathBuf>,

    /// Allocation method (wire string); anything but "allocate by pages"
    /// selects priority mode.
    #[arg(long, default_value = "allocate by priority")]
    pub method: String,

    /// Month stamped onto every allocated line (verbatim).
    #[arg(long)]
    pub month: String,

    /// Date stamped onto every allocated line (verbatim).
    #[arg(long)]
    pub date: String,

    /// Output directory (default: current directory).
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Renderer(s) to emit alongside the payload. Choose up to 2 (json, text).
    #[arg(long, value_parser = ["json", "text"], num_args = 0..=2)]
    pub render: Vec<String>,

    /// Validate inputs only (load + DDN gate + over-allocation), do not build.
    #[arg(long)]
    pub validate_only: bool,

    /// Suppress non-essential stderr logs.
    #[arg(long)]
    pub quiet: bool,
}

/// Errors surfaced by argument parsing/validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            NotFound(p) => write!(f, "file not found: {p}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Returns true if `s` looks like a URL (any `<scheme>://`, including `file://`).
#[inline]
fn looks_like_url(p: &Path) -> bool {
    p.to_string_lossy().contains("://")
}

fn check_input_path(p: &Path) -> Result<(), CliError> {
    if looks_like_url(p) {
        return Err(CliError::NonLocalPath(p.display().to_string()));
    }
    if !p.is_file() {
        return Err(CliError::NotFound(p.display().to_string()));
    }
    Ok(())
}

/// Parse argv and enforce the offline-path rules.
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();
    validate(&args)?;
    Ok(args)
}

fn validate(args: &Args) -> Result<(), CliError> {
    check_input_path(&args.articles)?;
    check_input_path(&args.roster)?;
    if let Some(ddn) = &args.ddn {
        check_input_path(ddn)?;
    }
    if looks_like_url(&args.out) {
        return Err(CliError::NonLocalPath(args.out.display().to_string()));
    }
    Ok(())
}

impl Args {
    pub fn method(&self) -> AllocationMethod {
        AllocationMethod::from_wire(&self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_like_paths_are_rejected() {
        let p = PathBuf::from("https://example.com/articles.txt");
        assert!(matches!(check_input_path(&p), Err(CliError::NonLocalPath(_))));
    }

    #[test]
    fn missing_file_is_reported() {
        let p = PathBuf::from("/definitely/not/here.txt");
        assert!(matches!(check_input_path(&p), Err(CliError::NotFound(_))));
    }
}
