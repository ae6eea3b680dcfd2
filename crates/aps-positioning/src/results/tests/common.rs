use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::results::{
    assessment_router, AssessmentService, ResultRow, ResultStore, StoreError,
};
use crate::scoring::{Domain, ScoringEngine};
use crate::survey::{
    ActivityType, AgeRange, Department, EstablishmentType, ExternalLink, Objective, PublicGroup,
    RegularActivity, Supervisor, SurveySubmission, TrainingProvider, WeeklyDuration, YesNo,
};

pub(super) fn recorded_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid timestamp")
}

/// Every answer at its best value: all domains reach 100.
pub(super) fn full_submission() -> SurveySubmission {
    SurveySubmission {
        name: Some("ESAT des Hauts".to_string()),
        department: Some(Department::Nord),
        kind: Some(EstablishmentType::Esat),
        age_range: Some(AgeRange::Adults),
        public: [PublicGroup::Adult].into_iter().collect(),
        places: Some(60),
        handicaps: ["Déficience intellectuelle".to_string(), "TSA".to_string()]
            .into_iter()
            .collect(),
        referent: Some(YesNo::Oui),
        referent_trained: Some(YesNo::Oui),
        training_provider: Some(TrainingProvider::Lsahf),
        regular_activity: Some(RegularActivity::MoreThanWeekly),
        user_share: Some("90-100%".to_string()),
        weekly_duration: Some(WeeklyDuration::TwoHours),
        activity_types: [
            ActivityType::Individual,
            ActivityType::Collective,
            ActivityType::Outdoor,
        ]
        .into_iter()
        .collect(),
        practice_frequency: Some("Hebdomadaire".to_string()),
        occasional_activity: Some(YesNo::Oui),
        objectives: Objective::ordered().into_iter().take(5).collect(),
        supervisors: [Supervisor::AdaptedActivityTeacher, Supervisor::SportsEducator]
            .into_iter()
            .collect(),
        institutional_project: Some(YesNo::Oui),
        external_links: [
            ExternalLink::AdaptedClubs,
            ExternalLink::TownHall,
            ExternalLink::Leagues,
        ]
        .into_iter()
        .collect(),
        ..SurveySubmission::default()
    }
}

/// Required answers only, all negative: only the quality floor scores.
pub(super) fn minimal_submission() -> SurveySubmission {
    SurveySubmission {
        name: Some("IME Le Verger".to_string()),
        department: Some(Department::Aisne),
        kind: Some(EstablishmentType::Ime),
        age_range: Some(AgeRange::Children),
        places: Some(24),
        referent: Some(YesNo::Non),
        referent_trained: Some(YesNo::Non),
        regular_activity: Some(RegularActivity::None),
        user_share: Some("0-10%".to_string()),
        weekly_duration: Some(WeeklyDuration::None),
        occasional_activity: Some(YesNo::Non),
        supervisors: [Supervisor::NoProfessional].into_iter().collect(),
        institutional_project: Some(YesNo::Non),
        ..SurveySubmission::default()
    }
}

/// Row with every indicator set to `score`, stored under the given filters.
pub(super) fn scored_row(department: &str, kind: &str, age_range: &str, score: f64) -> ResultRow {
    let service = AssessmentService::new(
        ScoringEngine::default(),
        Arc::new(MemoryStore::default()),
    );
    let mut row = service
        .assess_at(full_submission(), recorded_at())
        .expect("full submission scores")
        .row;

    row.department = department.to_string();
    row.kind = kind.to_string();
    row.age_range = age_range.to_string();
    for domain in Domain::ordered() {
        set_indicator(&mut row, domain, score);
    }
    row.global_indicator = score;
    row
}

pub(super) fn set_indicator(row: &mut ResultRow, domain: Domain, score: f64) {
    let slot = match domain {
        Domain::Referent => &mut row.indic_referent,
        Domain::Regulier => &mut row.indic_regulier,
        Domain::Occasionnel => &mut row.indic_occasionnel,
        Domain::Encadrement => &mut row.indic_encadrement,
        Domain::Projet => &mut row.indic_projet,
        Domain::Liens => &mut row.indic_liens,
        Domain::Qualite => &mut row.indic_qualite,
    };
    *slot = score;
}

pub(super) fn build_service() -> (AssessmentService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = AssessmentService::new(ScoringEngine::default(), store.clone());
    (service, store)
}

pub(super) fn router_with_service<S>(service: AssessmentService<S>) -> axum::Router
where
    S: ResultStore + 'static,
{
    assessment_router(Arc::new(service))
}

#[derive(Default)]
pub(super) struct MemoryStore {
    rows: Mutex<Vec<ResultRow>>,
}

impl MemoryStore {
    pub(super) fn with_rows(rows: Vec<ResultRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub(super) fn rows(&self) -> Vec<ResultRow> {
        self.rows.lock().expect("store mutex poisoned").clone()
    }
}

impl ResultStore for MemoryStore {
    fn append(&self, row: &ResultRow) -> Result<(), StoreError> {
        self.rows
            .lock()
            .expect("store mutex poisoned")
            .push(row.clone());
        Ok(())
    }

    fn load(&self) -> Result<Vec<ResultRow>, StoreError> {
        Ok(self.rows())
    }
}

pub(super) struct UnavailableStore;

impl ResultStore for UnavailableStore {
    fn append(&self, _row: &ResultRow) -> Result<(), StoreError> {
        Err(StoreError::Poisoned)
    }

    fn load(&self) -> Result<Vec<ResultRow>, StoreError> {
        Err(StoreError::Poisoned)
    }
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    serde_json::from_slice(&read_body(response).await).expect("json payload")
}
