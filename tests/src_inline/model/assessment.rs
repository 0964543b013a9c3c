use super::*;
use crate::model::competency::CompetencySet;

fn taxonomy() -> BehaviorTaxonomy {
    let labels = [
        "1. Conocimientos técnicos",
        "2. Desarrollar nuestro negocio",
        "3. Desarrollarse y contribuir al desarrollo de otr@s",
        "4. Navegar en lo desconocido",
        "5. Generar resultados",
        "6. Comunicar con impacto",
        "7. Colaborar y co-crear",
        "8. Liderar con el ejemplo",
    ];
    BehaviorTaxonomy::for_competencies(&CompetencySet::from_labels(&labels).unwrap())
}

#[test]
fn test_rating_sheet_starts_unrated() {
    let sheet = RatingSheet::from_taxonomy(&taxonomy());
    assert_eq!(sheet.entries.len(), 32);
    assert_eq!(sheet.rated(), 0);
    assert_eq!(sheet.get("Conseguir objetivos"), None);
}

#[test]
fn test_rating_sheet_set_and_get() {
    let mut sheet = RatingSheet::from_taxonomy(&taxonomy());
    assert!(sheet.set("Conseguir objetivos", 4));
    assert!(sheet.set(" Nutrir el talento ", 5));
    assert!(!sheet.set("Behavior that does not exist", 2));
    assert_eq!(sheet.get("Conseguir objetivos"), Some(4));
    assert_eq!(sheet.get("Nutrir el talento"), Some(5));
    assert_eq!(sheet.rated(), 2);
}

#[test]
fn test_point_sheet_total_and_blank_input() {
    let input = AssessmentInput::blank(&taxonomy());
    assert_eq!(input.points.total(), 0);
    assert!(input.name.is_empty());
    assert!(input.area.is_none());

    let sheet = PointSheet {
        points: [10, 10, 10, 10, 10, 10, 10, 30],
    };
    assert_eq!(sheet.total(), 100);
}

#[test]
fn test_point_total_saturates() {
    let sheet = PointSheet {
        points: [i64::MAX, 1, 0, 0, 0, 0, 0, 0],
    };
    assert_eq!(sheet.total(), i64::MAX);
}
