use std::collections::BTreeSet;

use super::defs::builtin_behaviors;
use super::{BehaviorTaxonomy, behaviors_for, clean_competency_label};
use crate::model::competency::CompetencySet;

const LABELS: [&str; 8] = [
    "1. Conocimientos técnicos",
    "2. Desarrollar nuestro negocio",
    "3. Desarrollarse y contribuir al desarrollo de otr@s",
    "4. Navegar en lo desconocido",
    "5. Generar resultados",
    "6. Comunicar con impacto",
    "7. Colaborar y co-crear",
    "8. Liderar con el ejemplo",
];

#[test]
fn test_clean_label_strips_ordinal_prefix() {
    assert_eq!(clean_competency_label("3. Generar resultados"), "Generar resultados");
    assert_eq!(
        clean_competency_label("  12)  Comunicar con impacto  "),
        "Comunicar con impacto"
    );
    assert_eq!(clean_competency_label("Generar resultados"), "Generar resultados");
    assert_eq!(clean_competency_label("7. Colaborar y co-crear"), "Colaborar y co-crear");
}

#[test]
fn test_clean_label_keeps_numbers_without_punctuation() {
    assert_eq!(clean_competency_label("2024 objetivos"), "2024 objetivos");
}

#[test]
fn test_behaviors_for_known_and_unknown() {
    assert_eq!(behaviors_for("5. Generar resultados").len(), 7);
    assert_eq!(behaviors_for("Liderar con el ejemplo").len(), 2);
    assert!(behaviors_for("1. Conocimientos técnicos").is_empty());
    assert!(behaviors_for("9. Competencia inventada").is_empty());
}

#[test]
fn test_builtin_behaviors_are_unique() {
    let defs = builtin_behaviors();
    assert_eq!(defs.len(), 8);
    let mut seen = BTreeSet::new();
    for def in defs {
        for b in def.behaviors {
            assert!(seen.insert(*b), "duplicate behavior {b}");
        }
    }
    assert_eq!(seen.len(), 32);
}

#[test]
fn test_taxonomy_follows_column_order() {
    let set = CompetencySet::from_labels(&LABELS).unwrap();
    let taxonomy = BehaviorTaxonomy::for_competencies(&set);
    assert_eq!(taxonomy.entries.len(), 8);
    assert!(taxonomy.entries[0].behaviors.is_empty());
    assert_eq!(taxonomy.behavior_count(), 32);

    let first = taxonomy.behaviors().next().unwrap();
    assert_eq!(first, (1, "Emprender, buscar y encontrar opciones mejores"));
    let last = taxonomy.behaviors().last().unwrap();
    assert_eq!(
        last,
        (7, "Hacer que la cultura y los valores sean parte del desempeño")
    );
}

#[test]
fn test_taxonomy_for_unmatched_labels_is_empty() {
    let labels = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let set = CompetencySet::from_labels(&labels).unwrap();
    let taxonomy = BehaviorTaxonomy::for_competencies(&set);
    assert_eq!(taxonomy.behavior_count(), 0);
    assert_eq!(taxonomy.behaviors().count(), 0);
}
