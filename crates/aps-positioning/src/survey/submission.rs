use super::answers::{AnswerRecord, Establishment};
use super::labels::{
    ActivityType, AgeRange, Department, EstablishmentType, ExternalLink, InputError, Objective,
    PublicGroup, RegularActivity, ShareBracket, Supervisor, TrainingProvider, UserFeedback,
    WeeklyDuration, YesNo,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw questionnaire input as posted by the form, before completeness checks.
///
/// Every required answer is optional here; [`SurveySubmission::into_record`]
/// reports the ones still missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveySubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub kind: Option<EstablishmentType>,
    #[serde(default)]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub public: BTreeSet<PublicGroup>,
    #[serde(default)]
    pub places: Option<u32>,
    #[serde(default)]
    pub handicaps: BTreeSet<String>,
    #[serde(default)]
    pub referent: Option<YesNo>,
    #[serde(default)]
    pub referent_trained: Option<YesNo>,
    #[serde(default)]
    pub training_provider: Option<TrainingProvider>,
    #[serde(default)]
    pub regular_activity: Option<RegularActivity>,
    #[serde(default)]
    pub user_share: Option<String>,
    #[serde(default)]
    pub weekly_duration: Option<WeeklyDuration>,
    #[serde(default)]
    pub activity_types: BTreeSet<ActivityType>,
    #[serde(default)]
    pub practice_frequency: Option<String>,
    #[serde(default)]
    pub occasional_activity: Option<YesNo>,
    #[serde(default)]
    pub objectives: BTreeSet<Objective>,
    #[serde(default)]
    pub user_feedback: BTreeSet<UserFeedback>,
    #[serde(default)]
    pub supervisors: BTreeSet<Supervisor>,
    #[serde(default)]
    pub infrastructures: BTreeSet<String>,
    #[serde(default)]
    pub institutional_project: Option<YesNo>,
    #[serde(default)]
    pub external_links: BTreeSet<ExternalLink>,
    #[serde(default)]
    pub existing_actions: BTreeSet<String>,
    #[serde(default)]
    pub barriers: BTreeSet<String>,
}

/// Why a submission could not become an [`AnswerRecord`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("missing required answers: {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Share of required answers already given, shown as a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormProgress {
    pub done: usize,
    pub total: usize,
    pub percent: u8,
}

impl SurveySubmission {
    /// Answers counted by the progress bar, in form order.
    pub fn progress_checks(&self) -> [(&'static str, bool); 10] {
        [
            (
                "Nom de l’établissement",
                self.name
                    .as_deref()
                    .is_some_and(|name| !name.trim().is_empty()),
            ),
            (
                "Nombre de places",
                self.places.is_some_and(|places| places > 0),
            ),
            ("Référent APS", self.referent.is_some()),
            ("Formation spécifique", self.referent_trained.is_some()),
            ("APS régulières", self.regular_activity.is_some()),
            ("Part d’usagers concernés", self.user_share.is_some()),
            ("Durée hebdo moyenne", self.weekly_duration.is_some()),
            ("Encadrement", !self.supervisors.is_empty()),
            ("Projet d’établissement", self.institutional_project.is_some()),
            ("APS occasionnelles", self.occasional_activity.is_some()),
        ]
    }

    /// Progress checks plus the establishment selectors, which the form
    /// always pre-fills and therefore never counts toward progress.
    pub fn required_checks(&self) -> Vec<(&'static str, bool)> {
        let [name, rest @ ..] = self.progress_checks();
        let selectors = [
            ("Département", self.department.is_some()),
            ("Type d’établissement", self.kind.is_some()),
            ("Tranche d'âge", self.age_range.is_some()),
        ];
        std::iter::once(name).chain(selectors).chain(rest).collect()
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.required_checks()
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(label, _)| label)
            .collect()
    }

    pub fn completion(&self) -> FormProgress {
        let checks = self.progress_checks();
        let total = checks.len();
        let done = checks.iter().filter(|(_, present)| *present).count();
        let percent = if total > 0 {
            ((done as f64 / total as f64) * 100.0).round() as u8
        } else {
            0
        };

        FormProgress {
            done,
            total,
            percent,
        }
    }

    /// Fails with every missing required answer, in form order.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmissionError::Incomplete { missing })
        }
    }

    /// Convert the submission into an immutable answer record.
    pub fn into_record(self) -> Result<AnswerRecord, SubmissionError> {
        self.validate()?;

        let (
            Some(name),
            Some(department),
            Some(kind),
            Some(age_range),
            Some(places),
            Some(referent),
            Some(referent_trained),
            Some(regular_activity),
            Some(user_share),
            Some(weekly_duration),
            Some(occasional_activity),
            Some(institutional_project),
        ) = (
            self.name,
            self.department,
            self.kind,
            self.age_range,
            self.places,
            self.referent,
            self.referent_trained,
            self.regular_activity,
            self.user_share,
            self.weekly_duration,
            self.occasional_activity,
            self.institutional_project,
        )
        else {
            return Err(SubmissionError::Incomplete {
                missing: Vec::new(),
            });
        };

        let user_share = ShareBracket::parse(&user_share)?;

        Ok(AnswerRecord {
            establishment: Establishment {
                name: name.trim().to_string(),
                department,
                kind,
                age_range,
                public: self.public,
                places,
                handicaps: self.handicaps,
            },
            referent: referent.is_yes(),
            referent_trained: referent_trained.is_yes(),
            training_provider: self.training_provider.unwrap_or_default(),
            regular_activity,
            user_share,
            weekly_duration,
            activity_types: self.activity_types,
            practice_frequency: self
                .practice_frequency
                .filter(|label| !label.trim().is_empty()),
            occasional_activity: occasional_activity.is_yes(),
            objectives: self.objectives,
            user_feedback: self.user_feedback,
            supervisors: self.supervisors,
            infrastructures: self.infrastructures,
            institutional_project: institutional_project.is_yes(),
            external_links: self.external_links,
            existing_actions: self.existing_actions,
            barriers: self.barriers,
        })
    }
}
