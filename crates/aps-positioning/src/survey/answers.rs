use super::labels::{
    ActivityType, AgeRange, Department, EstablishmentType, ExternalLink, Objective, PublicGroup,
    RegularActivity, ShareBracket, Supervisor, TrainingProvider, UserFeedback, WeeklyDuration,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identity of the responding establishment. Not read by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Establishment {
    pub name: String,
    pub department: Department,
    pub kind: EstablishmentType,
    pub age_range: AgeRange,
    #[serde(default)]
    pub public: BTreeSet<PublicGroup>,
    pub places: u32,
    #[serde(default)]
    pub handicaps: BTreeSet<String>,
}

/// Complete, validated answers for one questionnaire submission.
///
/// Tag sets are ordered sets so a tag can never be counted twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub establishment: Establishment,
    pub referent: bool,
    pub referent_trained: bool,
    pub training_provider: TrainingProvider,
    pub regular_activity: RegularActivity,
    pub user_share: ShareBracket,
    pub weekly_duration: WeeklyDuration,
    pub activity_types: BTreeSet<ActivityType>,
    pub practice_frequency: Option<String>,
    pub occasional_activity: bool,
    pub objectives: BTreeSet<Objective>,
    pub user_feedback: BTreeSet<UserFeedback>,
    pub supervisors: BTreeSet<Supervisor>,
    pub infrastructures: BTreeSet<String>,
    pub institutional_project: bool,
    pub external_links: BTreeSet<ExternalLink>,
    pub existing_actions: BTreeSet<String>,
    pub barriers: BTreeSet<String>,
}

impl AnswerRecord {
    /// Supervisors other than the "no professional" tag.
    pub fn professional_supervisors(&self) -> usize {
        self.supervisors
            .iter()
            .filter(|supervisor| supervisor.is_professional())
            .count()
    }

    /// Partner structures other than the "none" tag.
    pub fn partner_links(&self) -> usize {
        self.external_links
            .iter()
            .filter(|link| link.is_partner())
            .count()
    }

    pub fn reports(&self, feedback: UserFeedback) -> bool {
        self.user_feedback.contains(&feedback)
    }
}
