use serde::Serialize;

use crate::model::gap::{BehaviorGap, GapResult};
use crate::model::profile::GapProfile;

#[derive(Debug, Clone, Serialize)]
pub struct CompetencyPoints {
    pub competency: String,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub name: String,
    pub area: Option<String>,
    pub role: Option<String>,
    pub competency_points: Vec<CompetencyPoints>,
    pub behaviors_rated: usize,
    pub behaviors_total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringSummary {
    pub competency_weight: f64,
    pub behavior_weight: f64,
    pub ideal_rating: i64,
    pub default_rating: i64,
}

impl From<&GapProfile> for ScoringSummary {
    fn from(p: &GapProfile) -> Self {
        Self {
            competency_weight: p.competency_weight,
            behavior_weight: p.behavior_weight,
            ideal_rating: p.ideal_rating,
            default_rating: p.default_rating,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub catalog: String,
    pub assessment: AssessmentSummary,
    pub scoring: ScoringSummary,
    pub behavior_gap: BehaviorGap,
    pub n_roles: usize,
    pub best_match: Option<GapResult>,
    pub results: Vec<GapResult>,
}

pub fn render_summary_json(data: &SummaryData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
