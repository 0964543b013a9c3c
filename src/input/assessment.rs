use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::InputError;
use crate::model::assessment::{AssessmentInput, PointSheet, RatingSheet};
use crate::model::competency::CompetencySet;
use crate::model::profile::GapProfile;
use crate::taxonomy::BehaviorTaxonomy;

/// On-disk assessment, the non-interactive counterpart of the prompt form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Keyed by catalog header or by the header without its ordinal prefix.
    #[serde(default)]
    pub competency_points: BTreeMap<String, i64>,
    #[serde(default)]
    pub behavior_ratings: BTreeMap<String, i64>,
}

pub fn load_assessment(
    path: &Path,
    competencies: &CompetencySet,
    taxonomy: &BehaviorTaxonomy,
) -> Result<AssessmentInput, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "assessment file not found: {}",
            path.display()
        )));
    }
    let raw = std::fs::read_to_string(path)?;
    let file: AssessmentFile = serde_json::from_str(&raw)?;
    file.into_input(competencies, taxonomy)
}

impl AssessmentFile {
    pub fn into_input(
        self,
        competencies: &CompetencySet,
        taxonomy: &BehaviorTaxonomy,
    ) -> Result<AssessmentInput, InputError> {
        let mut points = PointSheet::default();
        let mut assigned: Vec<Option<&str>> = vec![None; competencies.len()];
        for (key, value) in &self.competency_points {
            let idx = competencies.position(key).ok_or_else(|| {
                InputError::InvalidInput(format!(
                    "unknown competency '{}' (expected one of: {})",
                    key,
                    competencies.labels().collect::<Vec<_>>().join(", ")
                ))
            })?;
            if let Some(previous) = assigned[idx] {
                return Err(InputError::InvalidInput(format!(
                    "competency '{}' given twice ('{}' and '{}')",
                    competencies.competencies[idx].label, previous, key
                )));
            }
            assigned[idx] = Some(key.as_str());
            points.points[idx] = *value;
        }

        let mut ratings = RatingSheet::from_taxonomy(taxonomy);
        for (behavior, rating) in &self.behavior_ratings {
            if !ratings.set(behavior, *rating) {
                tracing::warn!(behavior = %behavior, "unknown behavior in assessment; ignoring");
            }
        }

        Ok(AssessmentInput {
            name: self.name,
            area: self.area,
            role: self.role,
            points,
            ratings,
        })
    }
}

/// Skeleton with every competency at zero points and every behavior at the default rating.
pub fn assessment_template(
    competencies: &CompetencySet,
    taxonomy: &BehaviorTaxonomy,
    profile: &GapProfile,
) -> AssessmentFile {
    AssessmentFile {
        name: String::new(),
        area: None,
        role: None,
        competency_points: competencies.labels().map(|l| (l.to_string(), 0)).collect(),
        behavior_ratings: taxonomy
            .behaviors()
            .map(|(_, b)| (b.to_string(), profile.default_rating))
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/assessment.rs"]
mod tests;
