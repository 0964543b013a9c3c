use crate::model::gap::GapResult;
use crate::report::{PLAN_COLUMNS, format_gap, ipe_label};

/// Plain-text rendering of the ranked plan. `limit` truncates rows, never reorders them.
pub fn render_plan_table(results: &[GapResult], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(results.len()).min(results.len());
    let rows: Vec<[String; 4]> = results[..shown]
        .iter()
        .map(|r| {
            [
                r.title.clone(),
                r.area.clone(),
                ipe_label(r.level.as_deref()).to_string(),
                format_gap(r.gap_total),
            ]
        })
        .collect();

    let mut widths = PLAN_COLUMNS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &PLAN_COLUMNS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    if shown < results.len() {
        out.push_str(&format!("... {} more roles\n", results.len() - shown));
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let mut parts = Vec::with_capacity(cells.len());
    for (i, (cell, &w)) in cells.iter().zip(widths.iter()).enumerate() {
        let pad = w.saturating_sub(cell.chars().count());
        // Gap Total is numeric: right-align.
        if i == cells.len() - 1 {
            parts.push(format!("{}{}", " ".repeat(pad), cell));
        } else {
            parts.push(format!("{}{}", cell, " ".repeat(pad)));
        }
    }
    out.push_str(parts.join(" | ").trim_end());
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
