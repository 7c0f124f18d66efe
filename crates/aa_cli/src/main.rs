// crates/aa_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, CLI parsing, the validate-only
// short-circuit, and the full run path (load → pipeline → payload artifact →
// optional rendering).

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
}

use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args};

use aa_io::{canonical_json, loader, parser};
use aa_pipeline::{preflight, run_from_paths, PipelineError};
use aa_report::{build_preview, render_json, render_text};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Pre-flight / DDN gate / roster shape failures
    Validation(String),
    /// I/O errors (read/write/path/limits)
    Io(String),
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("aa: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    // Honor --validate-only as a hard short-circuit.
    let rc = if args.validate_only {
        match validate_only(&args) {
            Ok(()) => exitcodes::OK,
            Err(e) => report_and_map(&e),
        }
    } else {
        match run_once(&args) {
            Ok(()) => exitcodes::OK,
            Err(e) => report_and_map(&e),
        }
    };

    ExitCode::from(rc as u8)
}

/// Validate-only path (no payload, no artifacts).
/// Loads inputs to exercise shape checks, then runs the pre-flight report.
fn validate_only(args: &Args) -> Result<(), MainError> {
    let lines = loader::load_article_lines(&args.articles).map_err(io_err)?;
    let roster = loader::load_roster(&args.roster).map_err(io_err)?;
    let ddn_text = match &args.ddn {
        Some(p) => loader::load_ddn_text(p).map_err(io_err)?,
        None => String::new(),
    };

    let articles = parser::parse_article_lines(&lines);
    let report = preflight(&roster, &articles, &ddn_text);
    if report.pass {
        if !args.quiet {
            eprintln!("validate-only: inputs OK ({} articles)", articles.len());
        }
        Ok(())
    } else {
        let mut msg = String::new();
        for issue in &report.issues {
            msg.push_str(&format!("[{}] {}\n", issue.code, issue.message));
        }
        Err(MainError::Validation(msg.trim_end().to_string()))
    }
}

/// Full run: pipeline → canonical payload artifact → optional renders.
fn run_once(args: &Args) -> Result<(), MainError> {
    let outputs = run_from_paths(
        &args.articles,
        &args.roster,
        args.ddn.as_deref(),
        args.method(),
        &args.month,
        &args.date,
    )
    .map_err(map_pipeline_err)?;

    // Payload artifact (canonical bytes, atomic write).
    let payload_path = args.out.join("allocation_result.json");
    let value = serde_json::to_value(&outputs.result)
        .map_err(|e| MainError::Io(format!("serialize payload: {e}")))?;
    canonical_json::write_canonical_file(&payload_path, &value).map_err(io_err)?;

    if !args.quiet {
        eprintln!("payload: {}", payload_path.display());
        eprintln!("payload sha256: {}", outputs.payload_sha256);
    }

    // Optional preview renders.
    if !args.render.is_empty() {
        let preview = build_preview(&outputs.result);
        for kind in &args.render {
            match kind.as_str() {
                "json" => {
                    let rendered = render_json::render_json(&preview)
                        .map_err(|e| MainError::Io(e.to_string()))?;
                    let p = args.out.join("preview.json");
                    std::fs::write(&p, rendered).map_err(|e| MainError::Io(e.to_string()))?;
                    if !args.quiet {
                        eprintln!("preview: {}", p.display());
                    }
                }
                "text" => {
                    print!("{}", render_text::render_text(&preview));
                }
                _ => unreachable!("clap restricts --render values"),
            }
        }
    }

    Ok(())
}

fn report_and_map(e: &MainError) -> i32 {
    match e {
        MainError::Validation(m) => {
            eprintln!("aa: validation error:\n{m}");
            exitcodes::VALIDATION
        }
        MainError::Io(m) => {
            eprintln!("aa: io error: {m}");
            exitcodes::IO
        }
    }
}

fn io_err(e: aa_io::IoError) -> MainError {
    MainError::Io(e.to_string())
}

fn map_pipeline_err(e: PipelineError) -> MainError {
    match e {
        PipelineError::Validate(report) => {
            let mut msg = String::new();
            for issue in &report.issues {
                msg.push_str(&format!("[{}] {}\n", issue.code, issue.message));
            }
            MainError::Validation(msg.trim_end().to_string())
        }
        PipelineError::Io(m) => MainError::Io(m),
        PipelineError::Build(m) => MainError::Io(m),
    }
}
