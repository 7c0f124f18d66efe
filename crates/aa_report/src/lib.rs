//! aa_report — pure offline preview model + renderers (JSON/text).
//!
//! Determinism rules:
//! - No network, no I/O here. Callers supply the payload already in-memory.
//! - No recomputation: rows mirror the builder's output; only display
//!   overrides mutate them, and only field-by-field.
//! - Stable row order and field names.

#![deny(unsafe_code)]

pub mod structure;

#[cfg(feature = "render_json")]
pub mod render_json;

#[cfg(feature = "render_text")]
pub mod render_text;

pub use structure::{apply_overrides, build_preview, PreviewModel, PreviewRow, RowOverride};

/// Errors surfaced by the renderers.
#[derive(Debug)]
pub enum ReportError {
    Serialize(String),
}

impl core::fmt::Display for ReportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReportError::Serialize(m) => write!(f, "serialize: {m}"),
        }
    }
}

impl std::error::Error for ReportError {}
