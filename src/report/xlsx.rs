use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::model::gap::GapResult;
use crate::report::{PLAN_COLUMNS, ipe_label};

pub const PLAN_SHEET: &str = "Plan de Carrera";

pub fn build_plan_workbook(results: &[GapResult]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let gap_format = Format::new().set_num_format("0.00");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(PLAN_SHEET)?;

    let mut widths = PLAN_COLUMNS.map(|h| h.chars().count());
    for (col, name) in PLAN_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (idx, r) in results.iter().enumerate() {
        let row = (idx + 1) as u32;
        let ipe = ipe_label(r.level.as_deref());
        worksheet.write_string(row, 0, &r.title)?;
        worksheet.write_string(row, 1, &r.area)?;
        worksheet.write_string(row, 2, ipe)?;
        worksheet.write_number_with_format(row, 3, r.gap_total, &gap_format)?;

        widths[0] = widths[0].max(r.title.chars().count());
        widths[1] = widths[1].max(r.area.chars().count());
        widths[2] = widths[2].max(ipe.chars().count());
    }

    for (col, w) in widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, (*w + 2) as f64)?;
    }

    Ok(workbook)
}

/// Serialized workbook, ready to be written out or handed to a download.
pub fn plan_xlsx_bytes(results: &[GapResult]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = build_plan_workbook(results)?;
    workbook.save_to_buffer()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/xlsx.rs"]
mod tests;
