//! crates/aa_report/src/structure.rs
//! Pure preview data model + mappers from the final payload.
//! No I/O, no recomputation. Deterministic ordering only.

use aa_core::ArticleId;
use aa_engine::{DDN_NAME, UNALLOCATED_NAME};
use aa_pipeline::{ArticleLine, FinalAllocationResult};
use serde::Serialize;

/// One row of the preview table. Unlike the wire payload, every row carries
/// its `name` so the flat table can be rendered directly.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PreviewRow {
    pub name: String,
    #[serde(rename = "articleId")]
    pub article_id: String,
    pub pages: u32,
    pub month: String,
    pub date: String,
}

/// Flat merge of allocated ++ unallocated rows (display order).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PreviewModel {
    pub rows: Vec<PreviewRow>,
}

/// A user hand-edit from the preview table, keyed by `articleId`.
/// `None` fields leave the row's value untouched.
#[derive(Clone, Debug, Default)]
pub struct RowOverride {
    pub article_id: String,
    pub name: Option<String>,
    pub month: Option<String>,
    pub date: Option<String>,
}

/// Build the flat display list: DDN rows, then each person's rows in
/// first-claim order, then unallocated rows stamped `NEED TO ALLOCATE`.
pub fn build_preview(result: &FinalAllocationResult) -> PreviewModel {
    let mut rows: Vec<PreviewRow> = Vec::new();

    for line in &result.ddn_articles {
        rows.push(row_from_line(DDN_NAME, line));
    }
    for person in &result.person_allocations {
        for line in &person.articles {
            rows.push(row_from_line(&person.person, line));
        }
    }
    for line in &result.unallocated_articles {
        rows.push(row_from_line(UNALLOCATED_NAME, line));
    }

    PreviewModel { rows }
}

/// Apply hand-edits as a final field-overwrite pass. Ids are matched after
/// normalization; overrides naming unknown ids are ignored.
pub fn apply_overrides(model: &mut PreviewModel, overrides: &[RowOverride]) {
    for ov in overrides {
        let Ok(target) = ArticleId::new(&ov.article_id) else {
            continue;
        };
        for row in model.rows.iter_mut().filter(|r| r.article_id == target.as_str()) {
            if let Some(name) = &ov.name {
                row.name = name.clone();
            }
            if let Some(month) = &ov.month {
                row.month = month.clone();
            }
            if let Some(date) = &ov.date {
                row.date = date.clone();
            }
        }
    }
}

fn row_from_line(name: &str, line: &ArticleLine) -> PreviewRow {
    PreviewRow {
        name: name.to_string(),
        article_id: line.article_id.clone(),
        pages: line.pages,
        month: line.month.clone(),
        date: line.date.clone(),
    }
}
