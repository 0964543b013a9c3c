use std::collections::BTreeSet;

use crate::model::competency::{COMPETENCY_COUNT, CompetencySet};

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub title: String,
    pub area: String,
    /// IPE grade; `None` when the catalog has no IPE column or the cell is blank.
    pub level: Option<String>,
    pub competency_scores: [f64; COMPETENCY_COUNT],
}

/// Read-only role table, built once per process and shared by reference.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    pub competencies: CompetencySet,
    pub roles: Vec<Role>,
}

impl RoleCatalog {
    pub fn new(competencies: CompetencySet, roles: Vec<Role>) -> Self {
        Self {
            competencies,
            roles,
        }
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Sorted, de-duplicated non-empty areas.
    pub fn areas(&self) -> Vec<String> {
        self.roles
            .iter()
            .map(|r| r.area.trim())
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted, de-duplicated job titles within `area`.
    pub fn titles_in_area(&self, area: &str) -> Vec<String> {
        let area = area.trim();
        self.roles
            .iter()
            .filter(|r| r.area.trim() == area)
            .map(|r| r.title.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn has_area(&self, area: &str) -> bool {
        let area = area.trim();
        self.roles.iter().any(|r| r.area.trim() == area)
    }

    pub fn has_title_in_area(&self, area: &str, title: &str) -> bool {
        let (area, title) = (area.trim(), title.trim());
        self.roles
            .iter()
            .any(|r| r.area.trim() == area && r.title.trim() == title)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/role.rs"]
mod tests;
