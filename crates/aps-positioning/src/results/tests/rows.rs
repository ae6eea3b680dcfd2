use super::common::*;

use crate::results::{export_csv, export_file_name, indicator_column, write_csv, RESULT_COLUMNS};
use crate::scoring::Domain;

#[test]
fn row_flattens_answers_and_indicators() {
    let (service, _) = build_service();
    let row = service
        .assess_at(full_submission(), recorded_at())
        .expect("scores")
        .row;

    assert_eq!(row.recorded_at, "2025-03-14T09:30:00");
    assert_eq!(row.department, "59 - Nord");
    assert_eq!(row.kind, "ESAT");
    assert_eq!(row.public, "Adulte");
    assert_eq!(row.handicaps, "Déficience intellectuelle;TSA");
    assert_eq!(row.referent, "Oui");
    assert_eq!(row.training_provider, "LSAHF");
    assert_eq!(row.user_share, "90-100%");
    assert_eq!(row.weekly_duration, "2h");
    assert_eq!(row.activity_types, "Individuelle;Collective;Pleine nature");
    assert_eq!(row.supervisors, "Enseignant APA;Éducateur sportif");
    for domain in Domain::ordered() {
        assert_eq!(row.indicator(domain), 100.0, "{}", indicator_column(domain));
    }
    assert_eq!(row.global_indicator, 100.0);
}

#[test]
fn negative_answers_render_as_non() {
    let (service, _) = build_service();
    let row = service
        .assess_at(minimal_submission(), recorded_at())
        .expect("scores")
        .row;

    assert_eq!(row.referent, "Non");
    assert_eq!(row.institutional_project, "Non");
    assert_eq!(row.training_provider, "Aucun / Non précisé");
    assert_eq!(row.practice_frequency, "Non précisé");
    assert_eq!(row.activity_types, "");
    assert_eq!(row.indic_qualite, 45.0);
    assert_eq!(row.global_indicator, 4.5);
}

#[test]
fn csv_header_matches_stable_columns() {
    let (service, _) = build_service();
    let row = service
        .assess_at(full_submission(), recorded_at())
        .expect("scores")
        .row;

    let mut buffer = Vec::new();
    write_csv(&[row.clone(), row], &mut buffer).expect("writes");
    let text = String::from_utf8(buffer).expect("utf-8");
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some(RESULT_COLUMNS.join(",").as_str()));
    assert_eq!(lines.count(), 2);
}

#[test]
fn indicator_columns_follow_domain_labels() {
    let indicators: Vec<String> = Domain::ordered().into_iter().map(indicator_column).collect();
    assert_eq!(indicators.as_slice(), &RESULT_COLUMNS[23..30]);
    assert_eq!(RESULT_COLUMNS[30], "Indicateur_global");
}

#[test]
fn single_row_export_uses_establishment_name() {
    let (service, _) = build_service();
    let row = service
        .assess_at(full_submission(), recorded_at())
        .expect("scores")
        .row;

    let bytes = export_csv(&row).expect("exports");
    let text = String::from_utf8(bytes).expect("utf-8");
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().nth(1).is_some_and(|line| line.starts_with("2025-03-14T09:30:00,ESAT des Hauts,59 - Nord")));
    assert_eq!(export_file_name(" ESAT des Hauts "), "resultats_ESAT_des_Hauts.csv");
}
