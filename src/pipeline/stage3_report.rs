use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::assessment::AssessmentInput;
use crate::model::competency::CompetencySet;
use crate::model::gap::{BehaviorGap, GapResult};
use crate::model::profile::GapProfile;
use crate::report::json::{
    AssessmentSummary, CompetencyPoints, ScoringSummary, SummaryData, render_summary_json,
};
use crate::report::xlsx::plan_xlsx_bytes;

pub const PLAN_FILE: &str = "plan_carrera.xlsx";
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("summary JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage3Input<'a> {
    pub assessment: &'a AssessmentInput,
    pub competencies: &'a CompetencySet,
    pub results: &'a [GapResult],
    pub behavior_gap: BehaviorGap,
    pub profile: &'a GapProfile,
    pub catalog_path: String,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub plan: PathBuf,
    pub summary: PathBuf,
}

pub fn write_reports(input: &Stage3Input<'_>, out_dir: &Path) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir)?;

    let plan = out_dir.join(PLAN_FILE);
    fs::write(&plan, plan_xlsx_bytes(input.results)?)?;

    let summary = out_dir.join(SUMMARY_FILE);
    let json = render_summary_json(&build_summary(input))?;
    fs::write(&summary, json)?;

    Ok(ReportPaths { plan, summary })
}

pub fn build_summary(input: &Stage3Input<'_>) -> SummaryData {
    let a = input.assessment;
    let competency_points = input
        .competencies
        .labels()
        .zip(a.points.points.iter())
        .map(|(label, &points)| CompetencyPoints {
            competency: label.to_string(),
            points,
        })
        .collect();

    SummaryData {
        tool: input.tool_name.clone(),
        version: input.tool_version.clone(),
        catalog: input.catalog_path.clone(),
        assessment: AssessmentSummary {
            name: a.name.trim().to_string(),
            area: a.area.clone(),
            role: a.role.clone(),
            competency_points,
            behaviors_rated: a.ratings.rated(),
            behaviors_total: a.ratings.entries.len(),
        },
        scoring: ScoringSummary::from(input.profile),
        behavior_gap: input.behavior_gap,
        n_roles: input.results.len(),
        best_match: input.results.first().cloned(),
        results: input.results.to_vec(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
