//! aa_core — Core types and domains for the AA engine.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! engine (`aa_io`, `aa_engine`, `aa_pipeline`, `aa_report`, `aa_cli`):
//!
//! - `ArticleId` — normalized (trimmed, upper-cased) article token
//! - `ParsedArticle` — an article plus its page count
//! - `Requester` — one prioritized roster entry with a requested count
//! - `AllocationMethod` — the two distribution strategies
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors;
pub mod article;
pub mod roster;
pub mod method;

pub use article::{ArticleId, ParsedArticle};
pub use method::AllocationMethod;
pub use roster::{move_requester, Requester};
