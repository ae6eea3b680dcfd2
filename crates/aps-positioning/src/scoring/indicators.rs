use super::config::ScoringConfig;
use super::domain::{Domain, GlobalScore, SubScoreSet};
use super::normalize::{round_one_decimal, scale};
use crate::survey::{AnswerRecord, ExternalLink, Supervisor, UserFeedback};

/// Sub-scores per domain and the weighted global indicator for one record.
pub fn compute_indicators(
    answers: &AnswerRecord,
    config: &ScoringConfig,
) -> (SubScoreSet, GlobalScore) {
    let sub_scores =
        SubScoreSet::from_fn(|domain| to_sub_score(domain_fraction(domain, answers, config)));
    let global = aggregate(&sub_scores, config);

    tracing::debug!(
        establishment = %answers.establishment.name,
        global = global.value(),
        "computed indicators"
    );

    (sub_scores, global)
}

/// Weighted sum of the sub-scores using the configured weight table.
pub fn aggregate(sub_scores: &SubScoreSet, config: &ScoringConfig) -> GlobalScore {
    let total: f64 = sub_scores
        .iter()
        .map(|(domain, score)| f64::from(config.weight(domain)) * score / 100.0)
        .sum();
    GlobalScore(round_one_decimal(total).clamp(0.0, 100.0))
}

/// Fraction in `[0, 1]` earned by `answers` in a single domain.
pub fn domain_fraction(domain: Domain, answers: &AnswerRecord, config: &ScoringConfig) -> f64 {
    match domain {
        Domain::Referent => referent(answers),
        Domain::Regulier => regular_practice(answers),
        Domain::Occasionnel => binary(answers.occasional_activity),
        Domain::Encadrement => supervision(answers),
        Domain::Projet => binary(answers.institutional_project),
        Domain::Liens => partnerships(answers),
        Domain::Qualite => quality(answers, config.quality_floor()),
    }
}

fn to_sub_score(fraction: f64) -> f64 {
    round_one_decimal(fraction * 100.0).clamp(0.0, 100.0)
}

fn binary(answer: bool) -> f64 {
    if answer {
        1.0
    } else {
        0.0
    }
}

fn referent(answers: &AnswerRecord) -> f64 {
    let mut fraction = 0.0;
    if answers.referent {
        fraction += 0.60;
    }
    if answers.referent_trained {
        fraction += 0.25;
    }
    if answers.training_provider.is_specified() {
        fraction += 0.15;
    }
    fraction
}

fn regular_practice(answers: &AnswerRecord) -> f64 {
    if !answers.regular_activity.is_practiced() {
        return 0.0;
    }

    // Targets: half of the users, 90 minutes a week, three kinds of activity.
    let share = scale(answers.user_share.midpoint(), 0.10, 0.70);
    let duration = scale(f64::from(answers.weekly_duration.minutes()), 30.0, 90.0);
    let diversity = (answers.activity_types.len() as f64 / 3.0).min(1.0);

    0.35 + 0.35 * share + 0.20 * duration + 0.10 * diversity
}

fn supervision(answers: &AnswerRecord) -> f64 {
    if answers.supervisors.contains(&Supervisor::NoProfessional) {
        return 0.0;
    }
    let professionals = answers.professional_supervisors();
    if professionals == 0 {
        return 0.0;
    }
    0.6 + 0.4 * (professionals as f64 / 2.0).min(1.0)
}

fn partnerships(answers: &AnswerRecord) -> f64 {
    if answers.external_links.contains(&ExternalLink::NoPartner) {
        return 0.0;
    }
    let partners = answers.partner_links();
    if partners == 0 {
        return 0.0;
    }
    (partners as f64 / 3.0).min(1.0)
}

fn quality(answers: &AnswerRecord, floor: f64) -> f64 {
    let objectives = (answers.objectives.len() as f64 / 5.0).min(1.0) * 0.7;

    let mut penalty = 0.0;
    if answers.reports(UserFeedback::Dissatisfied) {
        penalty += 0.25;
    }
    if answers.reports(UserFeedback::WantsMore) {
        penalty += 0.15;
    }

    (objectives - penalty + floor).clamp(0.0, 1.0)
}
