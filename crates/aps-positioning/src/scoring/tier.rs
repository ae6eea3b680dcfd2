use serde::{Deserialize, Serialize};

/// Scores below this value are classified as [`Tier::Low`].
pub const MID_TIER_THRESHOLD: f64 = 40.0;
/// Scores at or above this value are classified as [`Tier::High`].
pub const HIGH_TIER_THRESHOLD: f64 = 70.0;

/// Classification bucket shared by guidance selection, colouring and the
/// dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "À renforcer",
            Self::Mid => "En progression",
            Self::High => "Acquis",
        }
    }

    pub const fn marker(self) -> &'static str {
        match self {
            Self::Low => "🔴",
            Self::Mid => "🟠",
            Self::High => "🟢",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#e74c3c",
            Self::Mid => "#f39c12",
            Self::High => "#2ecc71",
        }
    }
}

/// Boundaries between tiers: `[0, mid)` low, `[mid, high)` mid, `[high, 100]` high.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierThresholds {
    mid: f64,
    high: f64,
}

impl TierThresholds {
    pub const STANDARD: Self = Self {
        mid: MID_TIER_THRESHOLD,
        high: HIGH_TIER_THRESHOLD,
    };

    pub(crate) const fn new_unchecked(mid: f64, high: f64) -> Self {
        Self { mid, high }
    }

    pub const fn mid(&self) -> f64 {
        self.mid
    }

    pub const fn high(&self) -> f64 {
        self.high
    }

    pub fn classify(&self, score: f64) -> Tier {
        if score < self.mid {
            Tier::Low
        } else if score < self.high {
            Tier::Mid
        } else {
            Tier::High
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Tier of a score under the given thresholds, usually `config.tiers()`.
pub fn tier(score: f64, thresholds: &TierThresholds) -> Tier {
    thresholds.classify(score)
}
