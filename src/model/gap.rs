use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapResult {
    pub title: String,
    pub area: String,
    pub level: Option<String>,
    pub competency_gap: f64,
    pub behavior_gap: f64,
    pub gap_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BehaviorGap {
    pub sum: f64,
    pub count: usize,
    pub mean: f64,
}
