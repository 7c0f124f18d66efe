//! aa_engine — the distribution engine.
//!
//! Contract:
//! - Partition input articles into the DDN (direct-assign) set and the pool.
//!   DDN rows keep original article order and are always prepended.
//! - Walk requesters in list order (skipping `value == 0`), claiming up to
//!   `value` unclaimed pool articles each. One claim set is shared across the
//!   whole requester walk, so no article is ever assigned twice.
//! - `ByPages` stable-sorts the pool by pages descending *before* the walk;
//!   `ByPriority` keeps original pool order.
//! - Pool exhaustion is not an error: later requesters simply receive fewer
//!   than requested.
//!
//! Determinism:
//! - Pure, synchronous, allocation-fresh output per call; inputs are never
//!   mutated. Identical inputs yield identical output.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

pub use aa_core::{AllocationMethod, ArticleId, ParsedArticle, Requester};

pub mod strategy {
    pub mod pages;
    pub mod priority;
}

/// Name stamped on direct-assign rows.
pub const DDN_NAME: &str = "DDN";

/// Name stamped on unallocated rows when merged into a display list.
pub const UNALLOCATED_NAME: &str = "NEED TO ALLOCATE";

/// One allocated line: an article bound to a name, stamped with the
/// caller-supplied month/date (the engine never consults a clock).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocatedArticle {
    pub name: String,
    pub article_id: ArticleId,
    pub pages: u32,
    pub month: String,
    pub date: String,
}

/// A claim produced by a strategy walk: requester label + the pool article.
pub(crate) type Claim<'a> = (&'a str, &'a ParsedArticle);

/// Distribute `articles` across `requesters` under `method`.
///
/// Output order is `[ddn rows (input order), person rows (requester-list,
/// then claim order)]`. Articles whose id is in `ddn_ids` never enter the
/// requester pool, regardless of method.
pub fn distribute(
    requesters: &[Requester],
    articles: &[ParsedArticle],
    ddn_ids: &[ArticleId],
    method: AllocationMethod,
    month: &str,
    date: &str,
) -> Vec<AllocatedArticle> {
    if articles.is_empty() {
        return Vec::new();
    }

    let ddn_set: BTreeSet<&ArticleId> = ddn_ids.iter().collect();

    let mut out: Vec<AllocatedArticle> = Vec::with_capacity(articles.len());
    let mut pool: Vec<&ParsedArticle> = Vec::with_capacity(articles.len());
    for a in articles {
        if ddn_set.contains(&a.article_id) {
            out.push(stamp(DDN_NAME, a, month, date));
        } else {
            pool.push(a);
        }
    }

    let claims = match method {
        AllocationMethod::ByPriority => strategy::priority::claim(requesters, &pool),
        AllocationMethod::ByPages => strategy::pages::claim(requesters, &pool),
    };
    out.extend(claims.into_iter().map(|(label, a)| stamp(label, a, month, date)));
    out
}

fn stamp(name: &str, a: &ParsedArticle, month: &str, date: &str) -> AllocatedArticle {
    AllocatedArticle {
        name: name.to_string(),
        article_id: a.article_id.clone(),
        pages: a.pages,
        month: month.to_string(),
        date: date.to_string(),
    }
}
