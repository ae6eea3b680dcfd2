//! Seven-domain scoring of a validated answer record.
//!
//! [`compute_indicators`], [`recommendations`] and [`visualize`] are pure
//! functions; [`ScoringEngine`] bundles them with a [`ScoringConfig`] and
//! produces the report consumed by the service and CLI.

mod chart;
mod config;
mod domain;
mod indicators;
pub mod normalize;
mod recommendations;
mod tier;

pub use chart::{visualize, RadarPoint, RadarSeries, RadialAxis};
pub use config::{
    ScoringConfig, ScoringConfigError, QUALITY_FLOOR, STANDARD_WEIGHTS, TOTAL_WEIGHT,
};
pub use domain::{Domain, GlobalScore, SubScoreSet};
pub use indicators::{aggregate, compute_indicators, domain_fraction};
pub use recommendations::{guidance, recommendations, Recommendation};
pub use tier::{tier, Tier, TierThresholds, HIGH_TIER_THRESHOLD, MID_TIER_THRESHOLD};

use crate::survey::AnswerRecord;
use serde::Serialize;

pub const DOMAIN_CHART_TITLE: &str = "Toile d’araignée – Indicateurs par domaine (0–100)";

/// Stateless engine applying a scoring calibration to answer records.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn tier(&self, score: f64) -> Tier {
        self.config.tiers().classify(score)
    }

    pub fn assess(&self, answers: &AnswerRecord) -> AssessmentReport {
        let (sub_scores, global_score) = compute_indicators(answers, &self.config);
        self.report(sub_scores, global_score)
    }

    /// Builds the full report from already computed scores.
    pub fn report(&self, sub_scores: SubScoreSet, global_score: GlobalScore) -> AssessmentReport {
        let tiers = self.config.tiers();

        let domains: Vec<DomainScoreView> = sub_scores
            .iter()
            .map(|(domain, score)| {
                let tier = tiers.classify(score);
                DomainScoreView {
                    domain,
                    label: domain.label(),
                    description: domain.description(),
                    score,
                    weight: self.config.weight(domain),
                    tier,
                    tier_label: tier.label(),
                    color: tier.color(),
                }
            })
            .collect();

        let domains_on_target = domains
            .iter()
            .filter(|view| view.tier == Tier::High)
            .count();
        let domains_to_strengthen = domains
            .iter()
            .filter(|view| view.tier == Tier::Low)
            .count();
        let global_tier = tiers.classify(global_score.value());

        AssessmentReport {
            sub_scores,
            global_score,
            global_tier,
            global_color: global_tier.color(),
            domains,
            domains_on_target,
            domains_to_strengthen,
            recommendations: recommendations(&sub_scores, tiers),
            chart: visualize(&sub_scores, DOMAIN_CHART_TITLE),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainScoreView {
    pub domain: Domain,
    pub label: &'static str,
    pub description: &'static str,
    pub score: f64,
    pub weight: u32,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub color: &'static str,
}

/// Everything the questionnaire shows after a submission is scored.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub sub_scores: SubScoreSet,
    pub global_score: GlobalScore,
    pub global_tier: Tier,
    pub global_color: &'static str,
    pub domains: Vec<DomainScoreView>,
    pub domains_on_target: usize,
    pub domains_to_strengthen: usize,
    pub recommendations: Vec<Recommendation>,
    pub chart: RadarSeries,
}
