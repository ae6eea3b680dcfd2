use super::domain::Domain;
use super::tier::{TierThresholds, HIGH_TIER_THRESHOLD, MID_TIER_THRESHOLD};
use serde::Serialize;
use std::collections::BTreeMap;

/// Weights must add up to this total so the global indicator stays in `[0, 100]`.
pub const TOTAL_WEIGHT: u32 = 100;

/// Constant added to the Qualite fraction so an establishment with no
/// objectives and no feedback still scores 45. Tunable.
pub const QUALITY_FLOOR: f64 = 0.45;

/// Standard weight of each domain in the global indicator.
pub const STANDARD_WEIGHTS: [(Domain, u32); Domain::COUNT] = [
    (Domain::Referent, 20),
    (Domain::Regulier, 25),
    (Domain::Occasionnel, 10),
    (Domain::Encadrement, 15),
    (Domain::Projet, 10),
    (Domain::Liens, 10),
    (Domain::Qualite, 10),
];

/// Calibration data for the scoring engine: weight table, tier thresholds and
/// the Qualite floor. Only constructible in a consistent state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringConfig {
    weights: BTreeMap<Domain, u32>,
    tiers: TierThresholds,
    quality_floor: f64,
}

impl ScoringConfig {
    pub fn new(
        weights: BTreeMap<Domain, u32>,
        tiers: (f64, f64),
        quality_floor: f64,
    ) -> Result<Self, ScoringConfigError> {
        if let Some(domain) = Domain::ordered()
            .into_iter()
            .find(|domain| !weights.contains_key(domain))
        {
            return Err(ScoringConfigError::MissingWeight(domain));
        }

        let total: u32 = weights.values().sum();
        if total != TOTAL_WEIGHT {
            return Err(ScoringConfigError::WeightTotal { total });
        }

        let (mid, high) = tiers;
        let ordered = 0.0 <= mid && mid < high && high <= 100.0;
        if !ordered {
            return Err(ScoringConfigError::ThresholdOrder { mid, high });
        }

        if !(0.0..=1.0).contains(&quality_floor) {
            return Err(ScoringConfigError::FloorOutOfRange(quality_floor));
        }

        Ok(Self {
            weights,
            tiers: TierThresholds::new_unchecked(mid, high),
            quality_floor,
        })
    }

    /// The calibration used by the questionnaire since its first release.
    pub fn standard() -> Self {
        let weights: BTreeMap<Domain, u32> = STANDARD_WEIGHTS.into_iter().collect();
        assert_eq!(
            weights.values().sum::<u32>(),
            TOTAL_WEIGHT,
            "standard domain weights must sum to {TOTAL_WEIGHT}"
        );

        Self {
            weights,
            tiers: TierThresholds::new_unchecked(MID_TIER_THRESHOLD, HIGH_TIER_THRESHOLD),
            quality_floor: QUALITY_FLOOR,
        }
    }

    pub fn weight(&self, domain: Domain) -> u32 {
        self.weights.get(&domain).copied().unwrap_or(0)
    }

    pub fn tiers(&self) -> &TierThresholds {
        &self.tiers
    }

    pub fn quality_floor(&self) -> f64 {
        self.quality_floor
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("domain weights must sum to 100, found {total}")]
    WeightTotal { total: u32 },
    #[error("no weight configured for domain {}", .0.label())]
    MissingWeight(Domain),
    #[error("tier thresholds must satisfy 0 <= mid < high <= 100 (mid {mid}, high {high})")]
    ThresholdOrder { mid: f64, high: f64 },
    #[error("quality floor must lie in [0, 1], found {0}")]
    FloorOutOfRange(f64),
}
