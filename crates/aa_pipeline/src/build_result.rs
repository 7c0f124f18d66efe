//! build_result.rs — the Unallocated & Result Builder.
//!
//! Assembles the terminal, serializable payload the submission collaborator
//! expects. Field names are the wire contract and must not drift:
//! `personAllocations`, `ddnArticles`, `unallocatedArticles`, and nested
//! `articleId` / `pages` / `month` / `date`.
//!
//! The builder raises no errors; validation belongs to the caller (see
//! `validate`). Pure and idempotent: identical inputs yield structurally
//! identical output.

use std::collections::BTreeSet;

use aa_core::{AllocationMethod, ArticleId, ParsedArticle, Requester};
use aa_engine::{distribute, AllocatedArticle, DDN_NAME};
use serde::{Deserialize, Serialize};

/// One article line as it appears on the wire (no `name`; grouping carries it).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ArticleLine {
    #[serde(rename = "articleId")]
    pub article_id: String,
    pub pages: u32,
    pub month: String,
    pub date: String,
}

/// One person's grouped allocation, in first-claim order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PersonAllocation {
    pub person: String,
    pub articles: Vec<ArticleLine>,
}

/// The terminal payload. Invariant: the `articleId` sets of the three groups
/// are pairwise disjoint and union to the input article set exactly.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FinalAllocationResult {
    #[serde(rename = "personAllocations")]
    pub person_allocations: Vec<PersonAllocation>,
    #[serde(rename = "ddnArticles")]
    pub ddn_articles: Vec<ArticleLine>,
    #[serde(rename = "unallocatedArticles")]
    pub unallocated_articles: Vec<ArticleLine>,
}

/// Run the engine and assemble the grouped payload.
pub fn build_final_allocation(
    requesters: &[Requester],
    articles: &[ParsedArticle],
    ddn_ids: &[ArticleId],
    method: AllocationMethod,
    month: &str,
    date: &str,
) -> FinalAllocationResult {
    let rows = distribute(requesters, articles, ddn_ids, method, month, date);

    let allocated_ids: BTreeSet<&ArticleId> = rows.iter().map(|r| &r.article_id).collect();
    let ddn_set: BTreeSet<&ArticleId> = ddn_ids.iter().collect();

    // Group person rows by name, preserving first-seen person order and the
    // engine's per-person emission order. Grouping is Vec-based on purpose:
    // output order must match first-claim order, not key order.
    let mut person_allocations: Vec<PersonAllocation> = Vec::new();
    for row in rows.iter().filter(|r| r.name != DDN_NAME) {
        let line = line_from_row(row);
        match person_allocations.iter_mut().find(|p| p.person == row.name) {
            Some(p) => p.articles.push(line),
            None => person_allocations.push(PersonAllocation {
                person: row.name.clone(),
                articles: vec![line],
            }),
        }
    }

    // DDN lines come from the *original* input list, in input order —
    // specified independently of the engine's traversal.
    let ddn_articles: Vec<ArticleLine> = articles
        .iter()
        .filter(|a| ddn_set.contains(&a.article_id))
        .map(|a| line_from_article(a, month, date))
        .collect();

    // Complement set: claimed by nobody and not direct-assigned.
    let unallocated_articles: Vec<ArticleLine> = articles
        .iter()
        .filter(|a| !allocated_ids.contains(&a.article_id) && !ddn_set.contains(&a.article_id))
        .map(|a| line_from_article(a, month, date))
        .collect();

    FinalAllocationResult { person_allocations, ddn_articles, unallocated_articles }
}

fn line_from_row(row: &AllocatedArticle) -> ArticleLine {
    ArticleLine {
        article_id: row.article_id.to_string(),
        pages: row.pages,
        month: row.month.clone(),
        date: row.date.clone(),
    }
}

fn line_from_article(a: &ParsedArticle, month: &str, date: &str) -> ArticleLine {
    ArticleLine {
        article_id: a.article_id.to_string(),
        pages: a.pages,
        month: month.to_string(),
        date: date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(id: &str, pages: u32) -> ParsedArticle {
        ParsedArticle::new(ArticleId::new(id).unwrap(), pages)
    }

    fn id(s: &str) -> ArticleId {
        ArticleId::new(s).unwrap()
    }

    #[test]
    fn wire_field_names_are_exact() {
        let result = build_final_allocation(
            &[Requester::new("r1", "Alice", 1)],
            &[art("A", 5), art("B", 3)],
            &[id("B")],
            AllocationMethod::ByPriority,
            "June",
            "2025-06-01",
        );
        let v = serde_json::to_value(&result).unwrap();
        assert!(v.get("personAllocations").is_some());
        assert!(v.get("ddnArticles").is_some());
        assert!(v.get("unallocatedArticles").is_some());
        let line = &v["personAllocations"][0]["articles"][0];
        assert_eq!(line["articleId"], "A");
        assert_eq!(line["pages"], 5);
        assert_eq!(line["month"], "June");
        assert_eq!(line["date"], "2025-06-01");
    }

    #[test]
    fn person_order_matches_first_claim_order() {
        let result = build_final_allocation(
            &[Requester::new("r1", "Zoe", 1), Requester::new("r2", "Al", 1)],
            &[art("A", 1), art("B", 2)],
            &[],
            AllocationMethod::ByPriority,
            "June",
            "2025-06-01",
        );
        let persons: Vec<&str> =
            result.person_allocations.iter().map(|p| p.person.as_str()).collect();
        assert_eq!(persons, ["Zoe", "Al"]);
    }

    #[test]
    fn unallocated_is_the_exact_complement() {
        let result = build_final_allocation(
            &[Requester::new("r1", "Alice", 1)],
            &[art("A", 1), art("B", 2), art("C", 3), art("D", 4)],
            &[id("D")],
            AllocationMethod::ByPriority,
            "June",
            "2025-06-01",
        );
        let unalloc: Vec<&str> =
            result.unallocated_articles.iter().map(|l| l.article_id.as_str()).collect();
        assert_eq!(unalloc, ["B", "C"]);
        assert_eq!(result.ddn_articles.len(), 1);
        assert_eq!(result.ddn_articles[0].article_id, "D");
    }

    #[test]
    fn builder_is_idempotent() {
        let reqs = [Requester::new("r1", "Alice", 2)];
        let articles = [art("A", 5), art("B", 3), art("C", 8)];
        let a = build_final_allocation(&reqs, &articles, &[], AllocationMethod::ByPages, "J", "d");
        let b = build_final_allocation(&reqs, &articles, &[], AllocationMethod::ByPages, "J", "d");
        assert_eq!(a, b);
    }
}
