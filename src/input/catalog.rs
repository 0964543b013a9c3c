use std::collections::BTreeSet;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::input::InputError;
use crate::model::competency::{
    COMPETENCY_COUNT, COMPETENCY_FIRST_COL, CompetencySet, MIN_CATALOG_COLUMNS,
};
use crate::model::role::{Role, RoleCatalog};

pub const CATALOG_SHEET: &str = "Competencias";
pub const AREA_HEADER: &str = "Area";
pub const TITLE_HEADER: &str = "Job Title";
pub const LEVEL_HEADER: &str = "IPE";

pub fn load_catalog(path: &Path) -> Result<RoleCatalog, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "role catalog not found: {}",
            path.display()
        )));
    }
    let mut workbook = open_workbook_auto(path)?;
    if !workbook.sheet_names().iter().any(|s| s == CATALOG_SHEET) {
        return Err(InputError::MissingInput(format!(
            "sheet '{}' not found in {}",
            CATALOG_SHEET,
            path.display()
        )));
    }
    let range = workbook.worksheet_range(CATALOG_SHEET)?;
    let rows = rows_from_column_a(&range);
    let catalog = parse_catalog_rows(rows.iter().map(Vec::as_slice))?;

    tracing::info!(
        path = %path.display(),
        n_roles = catalog.len(),
        n_areas = catalog.areas().len(),
        "role catalog loaded"
    );
    tracing::debug!(
        competencies = ?catalog.competencies.labels().collect::<Vec<_>>(),
        "competency columns"
    );
    Ok(catalog)
}

/// Rows of the used range, left-padded so index 0 is always sheet column A.
/// Competency columns are positional, so an empty leading column must not shift them.
pub fn rows_from_column_a(range: &Range<Data>) -> Vec<Vec<Data>> {
    let lead = range.start().map_or(0, |(_, col)| col as usize);
    range
        .rows()
        .map(|r| {
            let mut row = vec![Data::Empty; lead];
            row.extend_from_slice(r);
            row
        })
        .collect()
}

/// Builds the catalog from sheet rows; the first row is the header.
pub fn parse_catalog_rows<'a, I>(mut rows: I) -> Result<RoleCatalog, InputError>
where
    I: Iterator<Item = &'a [Data]>,
{
    let header = rows
        .next()
        .ok_or_else(|| InputError::Parse(format!("sheet '{}' is empty", CATALOG_SHEET)))?;
    let header: Vec<String> = header.iter().map(cell_text).collect();
    if header.len() < MIN_CATALOG_COLUMNS {
        return Err(InputError::InvalidInput(format!(
            "sheet '{}' has {} columns; expected at least {} (competency scores in columns {}..={})",
            CATALOG_SHEET,
            header.len(),
            MIN_CATALOG_COLUMNS,
            COMPETENCY_FIRST_COL + 1,
            MIN_CATALOG_COLUMNS
        )));
    }

    let area_col = find_column(&header, AREA_HEADER)?;
    let title_col = find_column(&header, TITLE_HEADER)?;
    let level_col = header.iter().position(|h| h == LEVEL_HEADER);

    let labels = &header[COMPETENCY_FIRST_COL..MIN_CATALOG_COLUMNS];
    let mut seen = BTreeSet::new();
    for (offset, label) in labels.iter().enumerate() {
        if label.is_empty() {
            return Err(InputError::InvalidInput(format!(
                "competency column {} has an empty header",
                COMPETENCY_FIRST_COL + offset + 1
            )));
        }
        if !seen.insert(label.as_str()) {
            return Err(InputError::InvalidInput(format!(
                "duplicate competency column '{}'",
                label
            )));
        }
    }
    let competencies = CompetencySet::from_labels(labels).ok_or_else(|| {
        InputError::InvalidInput(format!("expected {} competency columns", COMPETENCY_COUNT))
    })?;

    let mut roles = Vec::new();
    for (idx, row) in rows.enumerate() {
        // Sheet line number: header is line 1.
        let line_no = idx + 2;
        if row.iter().all(is_blank) {
            continue;
        }
        let title = cell(row, title_col).map(cell_text).unwrap_or_default();
        if title.is_empty() {
            tracing::warn!(line = line_no, "catalog row has no Job Title; skipping");
            continue;
        }
        let area = cell(row, area_col).map(cell_text).unwrap_or_default();
        let level = level_col
            .and_then(|c| cell(row, c))
            .map(cell_text)
            .filter(|s| !s.is_empty());

        let mut competency_scores = [0.0f64; COMPETENCY_COUNT];
        for (offset, score) in competency_scores.iter_mut().enumerate() {
            let col = COMPETENCY_FIRST_COL + offset;
            *score = cell(row, col).and_then(cell_number).ok_or_else(|| {
                InputError::InvalidInput(format!(
                    "line {} column '{}': expected a numeric competency score",
                    line_no, header[col]
                ))
            })?;
        }

        roles.push(Role {
            title,
            area,
            level,
            competency_scores,
        });
    }

    if roles.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "sheet '{}' contains no roles",
            CATALOG_SHEET
        )));
    }

    Ok(RoleCatalog::new(competencies, roles))
}

fn find_column(header: &[String], name: &str) -> Result<usize, InputError> {
    header.iter().position(|h| h == name).ok_or_else(|| {
        InputError::InvalidInput(format!(
            "sheet '{}' has no '{}' column",
            CATALOG_SHEET, name
        ))
    })
}

fn cell(row: &[Data], col: usize) -> Option<&Data> {
    row.get(col)
}

fn is_blank(data: &Data) -> bool {
    match data {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Text form of a cell; integral floats lose their trailing `.0` so IPE 12 stays `12`.
pub fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_number(data: &Data) -> Option<f64> {
    match data {
        Data::Float(f) if f.is_finite() => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/catalog.rs"]
mod tests;
