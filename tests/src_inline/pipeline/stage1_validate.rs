use super::*;
use crate::model::competency::CompetencySet;
use crate::model::profile::NO_SELECTION;
use crate::model::role::Role;
use crate::taxonomy::BehaviorTaxonomy;

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

fn catalog() -> RoleCatalog {
    let role = |area: &str, title: &str| Role {
        title: title.to_string(),
        area: area.to_string(),
        level: None,
        competency_scores: [12.5; 8],
    };
    RoleCatalog::new(
        CompetencySet::from_labels(&LABELS).unwrap(),
        vec![role("Ventas", "Vendedor"), role("Logística", "Operario")],
    )
}

fn valid_input(catalog: &RoleCatalog) -> AssessmentInput {
    let taxonomy = BehaviorTaxonomy::for_competencies(&catalog.competencies);
    let mut input = AssessmentInput::blank(&taxonomy);
    input.name = "Ana".to_string();
    input.area = Some("Ventas".to_string());
    input.role = Some("Vendedor".to_string());
    input.points.points = [10, 10, 10, 10, 10, 10, 10, 30];
    input
}

#[test]
fn test_valid_assessment_passes() {
    let catalog = catalog();
    let input = valid_input(&catalog);
    let validated = run_stage1(&input, &catalog).unwrap();
    assert_eq!(validated.input().name, "Ana");
}

#[test]
fn test_points_must_sum_to_exactly_hundred() {
    let catalog = catalog();
    for (last, total) in [(29i64, 99i64), (31, 101)] {
        let mut input = valid_input(&catalog);
        input.points.points[7] = last;
        let report = run_stage1(&input, &catalog).unwrap_err();
        assert_eq!(report.issues, vec![ValidationIssue::PointsNotHundred { total }]);
    }
}

#[test]
fn test_all_failures_reported_together() {
    let catalog = catalog();
    let taxonomy = BehaviorTaxonomy::for_competencies(&catalog.competencies);
    let input = AssessmentInput::blank(&taxonomy);
    let report = run_stage1(&input, &catalog).unwrap_err();
    assert_eq!(
        report.issues,
        vec![
            ValidationIssue::AreaNotSelected,
            ValidationIssue::RoleNotSelected,
            ValidationIssue::PointsNotHundred { total: 0 },
            ValidationIssue::NameMissing,
        ]
    );
}

#[test]
fn test_placeholder_and_blank_count_as_unselected() {
    let catalog = catalog();
    let mut input = valid_input(&catalog);
    input.area = Some(NO_SELECTION.to_string());
    input.role = Some("   ".to_string());
    input.name = "  ".to_string();
    let report = run_stage1(&input, &catalog).unwrap_err();
    assert_eq!(
        report.issues,
        vec![
            ValidationIssue::AreaNotSelected,
            ValidationIssue::RoleNotSelected,
            ValidationIssue::NameMissing,
        ]
    );
}

#[test]
fn test_unknown_area_and_role() {
    let catalog = catalog();
    let mut input = valid_input(&catalog);
    input.area = Some("Marketing".to_string());
    let report = run_stage1(&input, &catalog).unwrap_err();
    assert_eq!(
        report.issues,
        vec![ValidationIssue::UnknownArea("Marketing".to_string())]
    );

    let mut input = valid_input(&catalog);
    input.role = Some("Operario".to_string());
    let report = run_stage1(&input, &catalog).unwrap_err();
    assert_eq!(
        report.issues,
        vec![ValidationIssue::UnknownRole {
            area: "Ventas".to_string(),
            role: "Operario".to_string(),
        }]
    );
}

#[test]
fn test_out_of_range_values() {
    let catalog = catalog();
    let mut input = valid_input(&catalog);
    input.points.points = [150, 0, 0, 0, 0, 0, 0, 0];
    input.ratings.set("Conseguir objetivos", 6);
    input.ratings.set("Nutrir el talento", 0);
    let report = run_stage1(&input, &catalog).unwrap_err();
    assert_eq!(
        report.issues,
        vec![
            ValidationIssue::PointsNotHundred { total: 150 },
            ValidationIssue::PointsOutOfRange {
                competency: "1. Conocimientos técnicos".to_string(),
                points: 150,
            },
            ValidationIssue::RatingOutOfRange {
                behavior: "Nutrir el talento".to_string(),
                rating: 0,
            },
            ValidationIssue::RatingOutOfRange {
                behavior: "Conseguir objetivos".to_string(),
                rating: 6,
            },
        ]
    );
}

#[test]
fn test_oversized_points_are_reported_not_wrapped() {
    let catalog = catalog();
    let mut input = valid_input(&catalog);
    // u32::MAX + 101 wraps to exactly 100 in 32 bits.
    input.points.points = [u32::MAX as i64, 0, 0, 0, 101, 0, 0, 0];
    let report = run_stage1(&input, &catalog).unwrap_err();
    assert_eq!(
        report.issues,
        vec![
            ValidationIssue::PointsNotHundred {
                total: u32::MAX as i64 + 101,
            },
            ValidationIssue::PointsOutOfRange {
                competency: "1. Conocimientos técnicos".to_string(),
                points: u32::MAX as i64,
            },
            ValidationIssue::PointsOutOfRange {
                competency: "5. Generar resultados".to_string(),
                points: 101,
            },
        ]
    );

    input.points.points = [i64::MAX, i64::MAX, 0, 0, 0, 0, 0, 0];
    let report = run_stage1(&input, &catalog).unwrap_err();
    assert_eq!(
        report.issues[0],
        ValidationIssue::PointsNotHundred { total: i64::MAX }
    );
    assert_eq!(report.issues.len(), 3);
}

#[test]
fn test_negative_points_are_out_of_range() {
    let catalog = catalog();
    let mut input = valid_input(&catalog);
    input.points.points = [-10, 10, 10, 10, 10, 10, 10, 40];
    let report = run_stage1(&input, &catalog).unwrap_err();
    assert_eq!(
        report.issues,
        vec![
            ValidationIssue::PointsNotHundred { total: 80 },
            ValidationIssue::PointsOutOfRange {
                competency: "1. Conocimientos técnicos".to_string(),
                points: -10,
            },
        ]
    );
}

#[test]
fn test_report_display_joins_messages() {
    let report = ValidationReport {
        issues: vec![
            ValidationIssue::NameMissing,
            ValidationIssue::PointsNotHundred { total: 99 },
        ],
    };
    assert_eq!(
        report.to_string(),
        "enter your name; distribute exactly 100 points across the competencies (assigned 99)"
    );
}
