//! Plain-text table renderer for terminal preview. Fixed-width columns sized
//! to the widest cell; no wrapping, no color.

use crate::structure::PreviewModel;

const HEADERS: [&str; 5] = ["NAME", "ARTICLE", "PAGES", "MONTH", "DATE"];

pub fn render_text(model: &PreviewModel) -> String {
    let mut widths: [usize; 5] = HEADERS.map(str::len);
    let cells: Vec<[String; 5]> = model
        .rows
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.article_id.clone(),
                r.pages.to_string(),
                r.month.clone(),
                r.date.clone(),
            ]
        })
        .collect();
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule_len: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    for (i, (cell, w)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        for _ in cell.len()..*w {
            out.push(' ');
        }
    }
    // Trim the trailing pad of the last column.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
