use crate::model::assessment::{AssessmentInput, PointSheet, RatingSheet};
use crate::model::competency::COMPETENCY_COUNT;
use crate::model::gap::{BehaviorGap, GapResult};
use crate::model::profile::GapProfile;
use crate::model::role::RoleCatalog;
use crate::pipeline::stage1_validate::ValidatedAssessment;
use crate::taxonomy::BehaviorTaxonomy;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    /// Ascending by `gap_total`; ties keep catalog order.
    pub results: Vec<GapResult>,
    pub behavior_gap: BehaviorGap,
}

pub fn run_stage2(
    assessment: &ValidatedAssessment<'_>,
    catalog: &RoleCatalog,
    taxonomy: &BehaviorTaxonomy,
    profile: &GapProfile,
) -> Stage2Output {
    score_roles(assessment.input(), catalog, taxonomy, profile)
}

pub fn score_roles(
    input: &AssessmentInput,
    catalog: &RoleCatalog,
    taxonomy: &BehaviorTaxonomy,
    profile: &GapProfile,
) -> Stage2Output {
    // Behaviors describe the person, not the job: this term is the same for every role.
    let behavior = behavior_gap(&input.ratings, taxonomy, profile);

    let mut results = Vec::with_capacity(catalog.len());
    for role in &catalog.roles {
        let comp = competency_gap(&input.points, &role.competency_scores);
        let gap_total = combine(comp, behavior.mean, profile);
        tracing::debug!(
            title = %role.title,
            competency_gap = comp,
            gap_total,
            "role scored"
        );
        results.push(GapResult {
            title: role.title.clone(),
            area: role.area.clone(),
            level: role.level.clone(),
            competency_gap: comp,
            behavior_gap: behavior.mean,
            gap_total,
        });
    }
    rank_results(&mut results);

    Stage2Output {
        results,
        behavior_gap: behavior,
    }
}

/// Euclidean distance between the point allocation and the role profile.
pub fn competency_gap(points: &PointSheet, scores: &[f64; COMPETENCY_COUNT]) -> f64 {
    points
        .points
        .iter()
        .zip(scores.iter())
        .map(|(&p, &s)| {
            let d = p as f64 - s;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

pub fn behavior_gap(
    ratings: &RatingSheet,
    taxonomy: &BehaviorTaxonomy,
    profile: &GapProfile,
) -> BehaviorGap {
    let ideal = profile.ideal_rating as f64;
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for (_, behavior) in taxonomy.behaviors() {
        let rating = ratings.get(behavior).unwrap_or(profile.default_rating) as f64;
        sum += (rating - ideal).abs();
        count += 1;
    }
    let mean = if count > 0 { sum / count as f64 } else { 0.0 };
    BehaviorGap { sum, count, mean }
}

pub fn combine(competency_gap: f64, behavior_mean: f64, profile: &GapProfile) -> f64 {
    round2(profile.competency_weight * competency_gap + profile.behavior_weight * behavior_mean)
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Stable ascending sort, so equal gaps stay in catalog order.
pub fn rank_results(results: &mut [GapResult]) {
    results.sort_by(|a, b| a.gap_total.total_cmp(&b.gap_total));
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_gap.rs"]
mod tests;
