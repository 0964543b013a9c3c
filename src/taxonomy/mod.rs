use std::sync::LazyLock;

use regex::Regex;

pub mod defs;

use defs::builtin_behaviors;

use crate::model::competency::CompetencySet;

/// Leading ordinal such as `3. ` or `12) ` in front of a competency header.
static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+[[:punct:]]\s*").expect("ORDINAL_PREFIX must compile")
});

pub fn clean_competency_label(label: &str) -> String {
    ORDINAL_PREFIX.replace(label, "").trim().to_string()
}

/// Behaviors attached to a competency header. Unknown competencies have none.
pub fn behaviors_for(label: &str) -> &'static [&'static str] {
    let name = clean_competency_label(label);
    builtin_behaviors()
        .iter()
        .find(|def| def.competency == name)
        .map(|def| def.behaviors)
        .unwrap_or(&[])
}

#[derive(Debug, Clone)]
pub struct TaxonomyEntry {
    pub competency: usize,
    pub label: String,
    pub behaviors: &'static [&'static str],
}

/// Behavior lists resolved against the catalog's competency headers, in column order.
#[derive(Debug, Clone)]
pub struct BehaviorTaxonomy {
    pub entries: Vec<TaxonomyEntry>,
}

impl BehaviorTaxonomy {
    pub fn for_competencies(set: &CompetencySet) -> Self {
        let mut entries = Vec::with_capacity(set.len());
        for (idx, comp) in set.competencies.iter().enumerate() {
            let behaviors = behaviors_for(&comp.label);
            if behaviors.is_empty() {
                tracing::debug!(competency = %comp.label, "no behaviors attached");
            }
            entries.push(TaxonomyEntry {
                competency: idx,
                label: comp.label.clone(),
                behaviors,
            });
        }
        Self { entries }
    }

    pub fn behavior_count(&self) -> usize {
        self.entries.iter().map(|e| e.behaviors.len()).sum()
    }

    pub fn behaviors(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        self.entries
            .iter()
            .flat_map(|e| e.behaviors.iter().map(move |&b| (e.competency, b)))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/taxonomy/tests.rs"]
mod tests;
