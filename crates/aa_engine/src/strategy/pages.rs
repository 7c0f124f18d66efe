//! Largest-pages-first claim walk.
//!
//! Contract:
//! - Pool is stable-sorted by pages **descending** once, before any requester
//!   is processed; ties keep original relative order.
//! - Requester processing and claim bookkeeping are otherwise identical to
//!   the priority strategy: list order, shared claim set, silent under-fill.

use std::collections::BTreeSet;

use aa_core::{ArticleId, ParsedArticle, Requester};

use crate::Claim;

pub(crate) fn claim<'a>(
    requesters: &'a [Requester],
    pool: &[&'a ParsedArticle],
) -> Vec<Claim<'a>> {
    // Sorted view over the pool; the caller's slice is left untouched.
    let mut ordered: Vec<&'a ParsedArticle> = pool.to_vec();
    ordered.sort_by(|a, b| b.pages.cmp(&a.pages));

    let mut claimed: BTreeSet<&ArticleId> = BTreeSet::new();
    let mut out: Vec<Claim<'a>> = Vec::new();

    for r in requesters {
        if r.value == 0 {
            continue;
        }
        let mut taken: u32 = 0;
        for a in &ordered {
            if taken == r.value {
                break;
            }
            if !claimed.insert(&a.article_id) {
                continue;
            }
            out.push((r.label.as_str(), *a));
            taken += 1;
        }
    }
    out
}
