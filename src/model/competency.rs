use crate::taxonomy::clean_competency_label;

/// Number of competency columns every catalog row and every assessment carries.
pub const COMPETENCY_COUNT: usize = 8;

/// Zero-based column index of the first competency score in the catalog sheet.
pub const COMPETENCY_FIRST_COL: usize = 3;

pub const MIN_CATALOG_COLUMNS: usize = COMPETENCY_FIRST_COL + COMPETENCY_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competency {
    /// Column header exactly as it appears in the catalog, e.g. `3. Generar resultados`.
    pub label: String,
    /// Header with the ordinal prefix stripped; the taxonomy key.
    pub name: String,
}

impl Competency {
    pub fn from_label(label: &str) -> Self {
        Self {
            label: label.trim().to_string(),
            name: clean_competency_label(label),
        }
    }

    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        key == self.label || key == self.name || clean_competency_label(key) == self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetencySet {
    pub competencies: Vec<Competency>,
}

impl CompetencySet {
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Option<Self> {
        if labels.len() != COMPETENCY_COUNT {
            return None;
        }
        Some(Self {
            competencies: labels
                .iter()
                .map(|l| Competency::from_label(l.as_ref()))
                .collect(),
        })
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.competencies.iter().position(|c| c.matches(key))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.competencies.iter().map(|c| c.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.competencies.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/competency.rs"]
mod tests;
