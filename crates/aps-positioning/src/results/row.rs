use crate::scoring::{Domain, GlobalScore, SubScoreSet};
use crate::survey::{AnswerRecord, YesNo};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const TAG_SEPARATOR: &str = ";";

/// Column names of a stored result, in file order. The admin summary groups
/// by these exact names.
pub const RESULT_COLUMNS: [&str; 31] = [
    "Horodatage",
    "Etablissement",
    "Département",
    "Type",
    "Tranche_age",
    "Places",
    "Public",
    "Handicaps",
    "Referent",
    "Formation",
    "Organisme",
    "Regulier",
    "Part_usagers",
    "Duree_hebdo",
    "Types_reguliers",
    "Frequence",
    "Occasionnel",
    "Objectifs",
    "Satisfaction",
    "Encadrants",
    "Infrastructures",
    "Projet",
    "Liens",
    "Indic_Referent",
    "Indic_Regulier",
    "Indic_Occasionnel",
    "Indic_Encadrement",
    "Indic_Projet",
    "Indic_Liens",
    "Indic_Qualite",
    "Indicateur_global",
];

pub fn indicator_column(domain: Domain) -> String {
    format!("Indic_{}", domain.label())
}

/// Flat record combining the answers, one indicator per domain, the global
/// indicator and the submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Horodatage")]
    pub recorded_at: String,
    #[serde(rename = "Etablissement")]
    pub establishment: String,
    #[serde(rename = "Département")]
    pub department: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Tranche_age")]
    pub age_range: String,
    #[serde(rename = "Places")]
    pub places: u32,
    #[serde(rename = "Public")]
    pub public: String,
    #[serde(rename = "Handicaps")]
    pub handicaps: String,
    #[serde(rename = "Referent")]
    pub referent: String,
    #[serde(rename = "Formation")]
    pub referent_trained: String,
    #[serde(rename = "Organisme")]
    pub training_provider: String,
    #[serde(rename = "Regulier")]
    pub regular_activity: String,
    #[serde(rename = "Part_usagers")]
    pub user_share: String,
    #[serde(rename = "Duree_hebdo")]
    pub weekly_duration: String,
    #[serde(rename = "Types_reguliers")]
    pub activity_types: String,
    #[serde(rename = "Frequence")]
    pub practice_frequency: String,
    #[serde(rename = "Occasionnel")]
    pub occasional_activity: String,
    #[serde(rename = "Objectifs")]
    pub objectives: String,
    #[serde(rename = "Satisfaction")]
    pub user_feedback: String,
    #[serde(rename = "Encadrants")]
    pub supervisors: String,
    #[serde(rename = "Infrastructures")]
    pub infrastructures: String,
    #[serde(rename = "Projet")]
    pub institutional_project: String,
    #[serde(rename = "Liens")]
    pub external_links: String,
    #[serde(rename = "Indic_Referent")]
    pub indic_referent: f64,
    #[serde(rename = "Indic_Regulier")]
    pub indic_regulier: f64,
    #[serde(rename = "Indic_Occasionnel")]
    pub indic_occasionnel: f64,
    #[serde(rename = "Indic_Encadrement")]
    pub indic_encadrement: f64,
    #[serde(rename = "Indic_Projet")]
    pub indic_projet: f64,
    #[serde(rename = "Indic_Liens")]
    pub indic_liens: f64,
    #[serde(rename = "Indic_Qualite")]
    pub indic_qualite: f64,
    #[serde(rename = "Indicateur_global")]
    pub global_indicator: f64,
}

fn join_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels.into_iter().collect::<Vec<_>>().join(TAG_SEPARATOR)
}

fn yes_no(value: bool) -> String {
    YesNo::from_bool(value).label().to_string()
}

impl ResultRow {
    pub fn new(
        answers: &AnswerRecord,
        sub_scores: &SubScoreSet,
        global: GlobalScore,
        recorded_at: NaiveDateTime,
    ) -> Self {
        let establishment = &answers.establishment;

        Self {
            recorded_at: recorded_at.format(TIMESTAMP_FORMAT).to_string(),
            establishment: establishment.name.clone(),
            department: establishment.department.label().to_string(),
            kind: establishment.kind.label().to_string(),
            age_range: establishment.age_range.label().to_string(),
            places: establishment.places,
            public: join_labels(establishment.public.iter().map(|group| group.label())),
            handicaps: join_labels(establishment.handicaps.iter().map(String::as_str)),
            referent: yes_no(answers.referent),
            referent_trained: yes_no(answers.referent_trained),
            training_provider: answers.training_provider.label().to_string(),
            regular_activity: answers.regular_activity.label().to_string(),
            user_share: answers.user_share.label(),
            weekly_duration: answers.weekly_duration.label().to_string(),
            activity_types: join_labels(answers.activity_types.iter().map(|kind| kind.label())),
            practice_frequency: answers
                .practice_frequency
                .clone()
                .unwrap_or_else(|| "Non précisé".to_string()),
            occasional_activity: yes_no(answers.occasional_activity),
            objectives: join_labels(answers.objectives.iter().map(|objective| objective.label())),
            user_feedback: join_labels(answers.user_feedback.iter().map(|tag| tag.label())),
            supervisors: join_labels(answers.supervisors.iter().map(|who| who.label())),
            infrastructures: join_labels(answers.infrastructures.iter().map(String::as_str)),
            institutional_project: yes_no(answers.institutional_project),
            external_links: join_labels(answers.external_links.iter().map(|link| link.label())),
            indic_referent: sub_scores.get(Domain::Referent),
            indic_regulier: sub_scores.get(Domain::Regulier),
            indic_occasionnel: sub_scores.get(Domain::Occasionnel),
            indic_encadrement: sub_scores.get(Domain::Encadrement),
            indic_projet: sub_scores.get(Domain::Projet),
            indic_liens: sub_scores.get(Domain::Liens),
            indic_qualite: sub_scores.get(Domain::Qualite),
            global_indicator: global.value(),
        }
    }

    pub fn indicator(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Referent => self.indic_referent,
            Domain::Regulier => self.indic_regulier,
            Domain::Occasionnel => self.indic_occasionnel,
            Domain::Encadrement => self.indic_encadrement,
            Domain::Projet => self.indic_projet,
            Domain::Liens => self.indic_liens,
            Domain::Qualite => self.indic_qualite,
        }
    }

    pub fn sub_scores(&self) -> SubScoreSet {
        SubScoreSet::from_fn(|domain| self.indicator(domain))
    }
}

/// Writes rows as CSV with a header line.
pub fn write_csv<W: Write>(rows: &[ResultRow], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Single-row CSV export offered for download after a submission.
pub fn export_csv(row: &ResultRow) -> Result<Vec<u8>, csv::Error> {
    let mut buffer = Vec::new();
    write_csv(std::slice::from_ref(row), &mut buffer)?;
    Ok(buffer)
}

/// Suggested download name, `resultats_<name with underscores>.csv`.
pub fn export_file_name(establishment: &str) -> String {
    format!("resultats_{}.csv", establishment.trim().replace(' ', "_"))
}
