//! Questionnaire vocabulary, the validated answer record, and intake of raw
//! form submissions.

mod answers;
pub mod labels;
mod submission;

pub use answers::{AnswerRecord, Establishment};
pub use labels::{
    ActivityType, AgeRange, Department, EstablishmentType, ExternalLink, InputError, Objective,
    PublicGroup, RegularActivity, ShareBracket, Supervisor, TrainingProvider, UserFeedback,
    WeeklyDuration, YesNo,
};
pub use submission::{FormProgress, SubmissionError, SurveySubmission};
