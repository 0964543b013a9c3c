/// Placeholder shown as the first option of the area and role pickers.
pub const NO_SELECTION: &str = "-- Selecciona --";

pub const POINTS_BUDGET: i64 = 100;
pub const POINTS_MAX: i64 = 100;
pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

#[derive(Debug, Clone)]
pub struct GapProfile {
    pub competency_weight: f64,
    pub behavior_weight: f64,
    pub ideal_rating: i64,
    /// Rating assumed for a behavior the user left untouched.
    pub default_rating: i64,
}

impl GapProfile {
    pub fn default_v1() -> Self {
        Self {
            competency_weight: 0.7,
            behavior_weight: 0.3,
            ideal_rating: RATING_MAX,
            default_rating: 3,
        }
    }
}

pub fn is_selected(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        Some(v) => !v.is_empty() && v != NO_SELECTION,
        None => false,
    }
}
