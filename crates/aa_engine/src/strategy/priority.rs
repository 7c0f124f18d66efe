//! Priority-order claim walk (the default strategy).
//!
//! Contract:
//! - Pool is walked in **original input order** for every requester.
//! - Requesters are processed in list order; `value == 0` entries are skipped.
//! - The claim set is shared across the whole walk: an article claimed by an
//!   earlier requester is invisible to later ones.
//! - Exhaustion under-fills silently; no redistribution, no carry-over.

use std::collections::BTreeSet;

use aa_core::{ArticleId, ParsedArticle, Requester};

use crate::Claim;

pub(crate) fn claim<'a>(
    requesters: &'a [Requester],
    pool: &[&'a ParsedArticle],
) -> Vec<Claim<'a>> {
    let mut claimed: BTreeSet<&ArticleId> = BTreeSet::new();
    let mut out: Vec<Claim<'a>> = Vec::new();

    for r in requesters {
        if r.value == 0 {
            continue;
        }
        let mut taken: u32 = 0;
        for a in pool {
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

#[cfg(test)]
mod tests {
    use super::*;
    use aa_core::ArticleId;

    fn art(id: &str, pages: u32) -> ParsedArticle {
        ParsedArticle::new(ArticleId::new(id).unwrap(), pages)
    }

    #[test]
    fn claims_follow_pool_order_and_requester_order() {
        let articles = [art("A", 5), art("B", 3), art("C", 8)];
        let pool: Vec<&ParsedArticle> = articles.iter().collect();
        let reqs = [Requester::new("r1", "Alice", 1), Requester::new("r2", "Bob", 2)];

        let claims = claim(&reqs, &pool);
        let got: Vec<(&str, &str)> =
            claims.iter().map(|(n, a)| (*n, a.article_id.as_str())).collect();
        assert_eq!(got, [("Alice", "A"), ("Bob", "B"), ("Bob", "C")]);
    }

    #[test]
    fn zero_value_requesters_are_skipped() {
        let articles = [art("A", 1), art("B", 2)];
        let pool: Vec<&ParsedArticle> = articles.iter().collect();
        let reqs = [Requester::new("r1", "Alice", 0), Requester::new("r2", "Bob", 1)];

        let claims = claim(&reqs, &pool);
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].0, "Bob");
        assert_eq!(claims[0].1.article_id.as_str(), "A");
    }

    #[test]
    fn exhausted_pool_under_fills_without_error() {
        let articles = [art("A", 1)];
        let pool: Vec<&ParsedArticle> = articles.iter().collect();
        let reqs = [Requester::new("r1", "Alice", 3)];

        let claims = claim(&reqs, &pool);
        assert_eq!(claims.len(), 1);
    }
}
