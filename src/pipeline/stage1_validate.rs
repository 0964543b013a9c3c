use thiserror::Error;

use crate::model::assessment::AssessmentInput;
use crate::model::profile::{POINTS_BUDGET, POINTS_MAX, RATING_MAX, RATING_MIN, is_selected};
use crate::model::role::RoleCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("select your area")]
    AreaNotSelected,
    #[error("area '{0}' is not in the role catalog")]
    UnknownArea(String),
    #[error("select your current role")]
    RoleNotSelected,
    #[error("role '{role}' is not listed under area '{area}'")]
    UnknownRole { area: String, role: String },
    #[error("distribute exactly 100 points across the competencies (assigned {total})")]
    PointsNotHundred { total: i64 },
    #[error("competency '{competency}' has {points} points; allowed values go from 0 to 100")]
    PointsOutOfRange { competency: String, points: i64 },
    #[error("behavior '{behavior}' is rated {rating}; ratings go from 1 to 5")]
    RatingOutOfRange { behavior: String, rating: i64 },
    #[error("enter your name")]
    NameMissing,
}

/// Every failing precondition of one submission, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{}", join_issues(.issues))]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Assessment that passed the gate. Only this type reaches the gap scorer.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedAssessment<'a> {
    input: &'a AssessmentInput,
}

impl<'a> ValidatedAssessment<'a> {
    pub fn input(&self) -> &'a AssessmentInput {
        self.input
    }
}

pub fn run_stage1<'a>(
    input: &'a AssessmentInput,
    catalog: &RoleCatalog,
) -> Result<ValidatedAssessment<'a>, ValidationReport> {
    let mut issues = Vec::new();

    let area = input.area.as_deref().map(str::trim);
    let area_known = match area {
        Some(a) if is_selected(Some(a)) => {
            if catalog.has_area(a) {
                true
            } else {
                issues.push(ValidationIssue::UnknownArea(a.to_string()));
                false
            }
        }
        _ => {
            issues.push(ValidationIssue::AreaNotSelected);
            false
        }
    };

    match input.role.as_deref().map(str::trim) {
        Some(role) if is_selected(Some(role)) => {
            if let (true, Some(a)) = (area_known, area) {
                if !catalog.has_title_in_area(a, role) {
                    issues.push(ValidationIssue::UnknownRole {
                        area: a.to_string(),
                        role: role.to_string(),
                    });
                }
            }
        }
        _ => issues.push(ValidationIssue::RoleNotSelected),
    }

    let total = input.points.total();
    if total != POINTS_BUDGET {
        issues.push(ValidationIssue::PointsNotHundred { total });
    }

    if input.name.trim().is_empty() {
        issues.push(ValidationIssue::NameMissing);
    }

    for (idx, &points) in input.points.points.iter().enumerate() {
        if !(0..=POINTS_MAX).contains(&points) {
            let competency = catalog
                .competencies
                .competencies
                .get(idx)
                .map(|c| c.label.clone())
                .unwrap_or_else(|| format!("#{}", idx + 1));
            issues.push(ValidationIssue::PointsOutOfRange { competency, points });
        }
    }

    for entry in &input.ratings.entries {
        if let Some(rating) = entry.rating {
            if !(RATING_MIN..=RATING_MAX).contains(&rating) {
                issues.push(ValidationIssue::RatingOutOfRange {
                    behavior: entry.behavior.to_string(),
                    rating,
                });
            }
        }
    }

    if issues.is_empty() {
        Ok(ValidatedAssessment { input })
    } else {
        for issue in &issues {
            tracing::warn!(%issue, "assessment rejected");
        }
        Err(ValidationReport { issues })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
