use aps_positioning::results::{
    AssessmentService, CsvResultStore, ResultStore, SummaryFilter, RESULT_COLUMNS,
};
use aps_positioning::scoring::{Domain, ScoringEngine};
use aps_positioning::survey::SurveySubmission;
use std::sync::Arc;

const FORM_ANSWERS: &str = r#"{
    "name": "MAS Les Oyats",
    "department": "80 - Somme",
    "kind": "MAS",
    "age_range": "Adultes",
    "public": ["Adulte"],
    "places": 40,
    "handicaps": ["Polyhandicap"],
    "referent": "Oui",
    "referent_trained": "Oui",
    "training_provider": "LSAHF",
    "regular_activity": "Oui, 1 fois par semaine",
    "user_share": "30-40%",
    "weekly_duration": "1h",
    "activity_types": ["Collective"],
    "practice_frequency": "Hebdomadaire",
    "occasional_activity": "Oui",
    "objectives": ["Bien-être", "Autonomie", "Habiletés sociales"],
    "user_feedback": ["Vouloir plus d’APS"],
    "supervisors": ["Enseignant APA"],
    "infrastructures": ["Gymnase"],
    "institutional_project": "Non",
    "external_links": ["Aucun"]
}"#;

#[test]
fn form_answers_are_scored_stored_and_summarised() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("resultats_qcm.csv");
    let store = Arc::new(CsvResultStore::new(&path));
    let service = AssessmentService::new(ScoringEngine::default(), store.clone());

    let submission: SurveySubmission = serde_json::from_str(FORM_ANSWERS).expect("form answers");
    assert_eq!(submission.completion().percent, 100);

    let outcome = service.submit(submission).expect("scored");
    let scores = outcome.report.sub_scores;
    assert_eq!(scores.get(Domain::Referent), 100.0);
    assert_eq!(scores.get(Domain::Regulier), 62.9);
    assert_eq!(scores.get(Domain::Encadrement), 80.0);
    assert_eq!(scores.get(Domain::Liens), 0.0);
    // 0.6 * 0.7 - 0.15 + 0.45
    assert_eq!(scores.get(Domain::Qualite), 72.0);

    let text = std::fs::read_to_string(&path).expect("results written");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(RESULT_COLUMNS.join(",").as_str()));
    let row = lines.next().expect("one row");
    assert!(row.contains("MAS Les Oyats,80 - Somme,MAS,Adultes,40,Adulte,Polyhandicap,Oui,Oui,LSAHF"));
    assert!(row.contains("Habiletés sociales;Autonomie;Bien-être"));

    let stored = store.load().expect("reload");
    assert_eq!(stored, vec![outcome.row.clone()]);

    let summary = service
        .summary(SummaryFilter {
            departement: Some("80 - Somme".to_string()),
            ..SummaryFilter::default()
        })
        .expect("summary");
    assert_eq!(summary.matching_rows, 1);
    assert_eq!(
        summary.global_mean,
        Some(outcome.report.global_score.value())
    );
}
