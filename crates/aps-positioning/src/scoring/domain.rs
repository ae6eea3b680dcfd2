use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// The seven assessment categories, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Domain {
    Referent,
    Regulier,
    Occasionnel,
    Encadrement,
    Projet,
    Liens,
    Qualite,
}

impl Domain {
    pub const COUNT: usize = 7;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Referent,
            Self::Regulier,
            Self::Occasionnel,
            Self::Encadrement,
            Self::Projet,
            Self::Liens,
            Self::Qualite,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Referent => "Referent",
            Self::Regulier => "Regulier",
            Self::Occasionnel => "Occasionnel",
            Self::Encadrement => "Encadrement",
            Self::Projet => "Projet",
            Self::Liens => "Liens",
            Self::Qualite => "Qualite",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Referent => "Référent APS identifié et formé",
            Self::Regulier => "Activités physiques régulières",
            Self::Occasionnel => "Activités occasionnelles",
            Self::Encadrement => "Encadrement par des professionnels",
            Self::Projet => "APS inscrites au projet d’établissement",
            Self::Liens => "Liens avec des structures partenaires",
            Self::Qualite => "Objectifs et perception des usagers",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// One sub-score in `[0, 100]` per domain, always fully populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScoreSet {
    scores: [f64; Domain::COUNT],
}

impl SubScoreSet {
    pub fn from_fn(mut score: impl FnMut(Domain) -> f64) -> Self {
        let mut scores = [0.0; Domain::COUNT];
        for domain in Domain::ordered() {
            scores[domain.index()] = score(domain);
        }
        Self { scores }
    }

    pub fn uniform(value: f64) -> Self {
        Self::from_fn(|_| value)
    }

    pub fn get(&self, domain: Domain) -> f64 {
        self.scores[domain.index()]
    }

    /// Scores in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Domain, f64)> + '_ {
        Domain::ordered()
            .into_iter()
            .map(move |domain| (domain, self.get(domain)))
    }
}

impl Serialize for SubScoreSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Domain::COUNT))?;
        for (domain, score) in self.iter() {
            map.serialize_entry(domain.label(), &score)?;
        }
        map.end()
    }
}

/// Weighted global indicator in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct GlobalScore(pub(crate) f64);

impl GlobalScore {
    pub fn value(self) -> f64 {
        self.0
    }
}
