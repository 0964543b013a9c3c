pub mod json;
pub mod table;
pub mod xlsx;

/// IPE placeholder for roles without a grade.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column order shared by the on-screen table and the spreadsheet.
pub const PLAN_COLUMNS: [&str; 4] = ["Job Title", "Area", "IPE", "Gap Total"];

pub fn ipe_label(level: Option<&str>) -> &str {
    match level {
        Some(l) if !l.trim().is_empty() => l,
        _ => NOT_AVAILABLE,
    }
}

pub fn format_gap(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
