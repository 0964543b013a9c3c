use crate::model::competency::COMPETENCY_COUNT;
use crate::taxonomy::BehaviorTaxonomy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointSheet {
    pub points: [i64; COMPETENCY_COUNT],
}

impl PointSheet {
    pub fn total(&self) -> i64 {
        self.points.iter().fold(0i64, |acc, &p| acc.saturating_add(p))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorRating {
    pub competency: usize,
    pub behavior: &'static str,
    pub rating: Option<i64>,
}

/// One slot per taxonomy behavior, in taxonomy order. Unrated slots stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RatingSheet {
    pub entries: Vec<BehaviorRating>,
}

impl RatingSheet {
    pub fn from_taxonomy(taxonomy: &BehaviorTaxonomy) -> Self {
        Self {
            entries: taxonomy
                .behaviors()
                .map(|(competency, behavior)| BehaviorRating {
                    competency,
                    behavior,
                    rating: None,
                })
                .collect(),
        }
    }

    /// Returns false when `behavior` is not part of the sheet.
    pub fn set(&mut self, behavior: &str, rating: i64) -> bool {
        let behavior = behavior.trim();
        let mut found = false;
        for entry in self.entries.iter_mut().filter(|e| e.behavior == behavior) {
            entry.rating = Some(rating);
            found = true;
        }
        found
    }

    pub fn get(&self, behavior: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.behavior == behavior)
            .and_then(|e| e.rating)
    }

    pub fn rated(&self) -> usize {
        self.entries.iter().filter(|e| e.rating.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentInput {
    pub name: String,
    pub area: Option<String>,
    pub role: Option<String>,
    pub points: PointSheet,
    pub ratings: RatingSheet,
}

impl AssessmentInput {
    pub fn blank(taxonomy: &BehaviorTaxonomy) -> Self {
        Self {
            name: String::new(),
            area: None,
            role: None,
            points: PointSheet::default(),
            ratings: RatingSheet::from_taxonomy(taxonomy),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/assessment.rs"]
mod tests;
