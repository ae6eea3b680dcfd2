use crate::scoring::normalize::{bracket_bounds, percent_midpoint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rejected questionnaire input that cannot be mapped onto the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("malformed percentage bracket '{label}': {reason}")]
    MalformedBracket { label: String, reason: &'static str },
    #[error("unknown weekly duration '{0}'")]
    UnknownDuration(String),
}

/// Radio answer rendered as "Oui"/"Non" on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Oui,
    Non,
}

impl YesNo {
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Oui)
    }

    pub const fn from_bool(value: bool) -> Self {
        if value {
            Self::Oui
        } else {
            Self::Non
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Oui => "Oui",
            Self::Non => "Non",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "02 - Aisne")]
    Aisne,
    #[serde(rename = "59 - Nord")]
    Nord,
    #[serde(rename = "60 - Oise")]
    Oise,
    #[serde(rename = "62 - Pas-de-Calais")]
    PasDeCalais,
    #[serde(rename = "80 - Somme")]
    Somme,
}

impl Department {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aisne => "02 - Aisne",
            Self::Nord => "59 - Nord",
            Self::Oise => "60 - Oise",
            Self::PasDeCalais => "62 - Pas-de-Calais",
            Self::Somme => "80 - Somme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstablishmentType {
    Esat,
    Ime,
    Itep,
    Fam,
    Mas,
    Samsah,
    Sessad,
    Eeap,
    Iem,
    #[serde(rename = "Autre")]
    Other,
}

impl EstablishmentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Esat => "ESAT",
            Self::Ime => "IME",
            Self::Itep => "ITEP",
            Self::Fam => "FAM",
            Self::Mas => "MAS",
            Self::Samsah => "SAMSAH",
            Self::Sessad => "SESSAD",
            Self::Eeap => "EEAP",
            Self::Iem => "IEM",
            Self::Other => "Autre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "Enfants")]
    Children,
    #[serde(rename = "Adultes")]
    Adults,
    #[serde(rename = "Mixte")]
    Mixed,
}

impl AgeRange {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Children => "Enfants",
            Self::Adults => "Adultes",
            Self::Mixed => "Mixte",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PublicGroup {
    #[serde(rename = "Enfant")]
    Child,
    #[serde(rename = "Adulte")]
    Adult,
}

impl PublicGroup {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Child => "Enfant",
            Self::Adult => "Adulte",
        }
    }
}

/// Body that trained the APS referent. `Unspecified` is the form's "none".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TrainingProvider {
    #[default]
    #[serde(rename = "Aucun / Non précisé")]
    Unspecified,
    #[serde(rename = "LSAHF")]
    Lsahf,
    #[serde(rename = "Fédération Handisport")]
    Handisport,
    #[serde(rename = "Université (APAS)")]
    University,
    #[serde(rename = "ARS / DRJSCS")]
    RegionalAuthority,
    #[serde(rename = "Autre")]
    Other,
}

impl TrainingProvider {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unspecified => "Aucun / Non précisé",
            Self::Lsahf => "LSAHF",
            Self::Handisport => "Fédération Handisport",
            Self::University => "Université (APAS)",
            Self::RegionalAuthority => "ARS / DRJSCS",
            Self::Other => "Autre",
        }
    }

    pub const fn is_specified(self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegularActivity {
    #[serde(rename = "Non")]
    None,
    #[serde(rename = "Oui, 1 fois par semaine")]
    Weekly,
    #[serde(rename = "Oui, plus d'une fois")]
    MoreThanWeekly,
}

impl RegularActivity {
    pub const fn ordered() -> [Self; 3] {
        [Self::None, Self::Weekly, Self::MoreThanWeekly]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Non",
            Self::Weekly => "Oui, 1 fois par semaine",
            Self::MoreThanWeekly => "Oui, plus d'une fois",
        }
    }

    pub const fn is_practiced(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One of the ten contiguous 10%-wide brackets covering 0-100% of users.
///
/// Built only from a strictly formatted `"NN-MM%"` label, so every value held
/// by an answer record has a well-defined midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShareBracket {
    lower: u8,
}

impl ShareBracket {
    pub const WIDTH: u8 = 10;

    pub fn parse(label: &str) -> Result<Self, InputError> {
        let (lower, upper) = bracket_bounds(label)?;
        let malformed = |reason| InputError::MalformedBracket {
            label: label.to_string(),
            reason,
        };

        if upper.checked_sub(lower) != Some(u32::from(Self::WIDTH)) {
            return Err(malformed("bracket must span exactly 10 points"));
        }
        if lower % u32::from(Self::WIDTH) != 0 || upper > 100 {
            return Err(malformed("bracket must be one of 0-10% .. 90-100%"));
        }

        let lower = u8::try_from(lower).map_err(|_| malformed("lower bound out of range"))?;
        Ok(Self { lower })
    }

    pub fn ordered() -> impl Iterator<Item = Self> {
        (0..10u8).map(|step| Self {
            lower: step * Self::WIDTH,
        })
    }

    pub const fn lower(self) -> u8 {
        self.lower
    }

    pub const fn upper(self) -> u8 {
        self.lower + Self::WIDTH
    }

    /// Midpoint as a fraction of all users, "30-40%" -> 0.35.
    pub fn midpoint(self) -> f64 {
        percent_midpoint(u32::from(self.lower()), u32::from(self.upper()))
    }

    pub fn label(self) -> String {
        format!("{}-{}%", self.lower(), self.upper())
    }
}

impl fmt::Display for ShareBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}%", self.lower(), self.upper())
    }
}

impl TryFrom<String> for ShareBracket {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShareBracket> for String {
    fn from(value: ShareBracket) -> Self {
        value.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum WeeklyDuration {
    None,
    TwentyMinutes,
    ThirtyMinutes,
    FortyFiveMinutes,
    OneHour,
    NinetyMinutes,
    TwoHours,
    TwoHoursThirty,
}

impl WeeklyDuration {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::None,
            Self::TwentyMinutes,
            Self::ThirtyMinutes,
            Self::FortyFiveMinutes,
            Self::OneHour,
            Self::NinetyMinutes,
            Self::TwoHours,
            Self::TwoHoursThirty,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "0 min",
            Self::TwentyMinutes => "20 min",
            Self::ThirtyMinutes => "30 min",
            Self::FortyFiveMinutes => "45 min",
            Self::OneHour => "1h",
            Self::NinetyMinutes => "1h30",
            Self::TwoHours => "2h",
            Self::TwoHoursThirty => "2h30",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|duration| duration.label() == label)
    }

    /// Weekly minutes behind the label.
    pub const fn minutes(self) -> u32 {
        match self {
            Self::None => 0,
            Self::TwentyMinutes => 20,
            Self::ThirtyMinutes => 30,
            Self::FortyFiveMinutes => 45,
            Self::OneHour => 60,
            Self::NinetyMinutes => 90,
            Self::TwoHours => 120,
            Self::TwoHoursThirty => 150,
        }
    }
}

impl TryFrom<String> for WeeklyDuration {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or(InputError::UnknownDuration(value))
    }
}

impl From<WeeklyDuration> for &'static str {
    fn from(value: WeeklyDuration) -> Self {
        value.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "Individuelle")]
    Individual,
    #[serde(rename = "Collective")]
    Collective,
    #[serde(rename = "Opposition")]
    Opposition,
    #[serde(rename = "Artistique")]
    Artistic,
    #[serde(rename = "Pleine nature")]
    Outdoor,
}

impl ActivityType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Individual,
            Self::Collective,
            Self::Opposition,
            Self::Artistic,
            Self::Outdoor,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individuelle",
            Self::Collective => "Collective",
            Self::Opposition => "Opposition",
            Self::Artistic => "Artistique",
            Self::Outdoor => "Pleine nature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Supervisor {
    #[serde(rename = "Enseignant APA")]
    AdaptedActivityTeacher,
    #[serde(rename = "Éducateur sportif")]
    SportsEducator,
    #[serde(rename = "Aucun professionnel")]
    NoProfessional,
}

impl Supervisor {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::AdaptedActivityTeacher,
            Self::SportsEducator,
            Self::NoProfessional,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AdaptedActivityTeacher => "Enseignant APA",
            Self::SportsEducator => "Éducateur sportif",
            Self::NoProfessional => "Aucun professionnel",
        }
    }

    pub const fn is_professional(self) -> bool {
        !matches!(self, Self::NoProfessional)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExternalLink {
    #[serde(rename = "Clubs adaptés")]
    AdaptedClubs,
    #[serde(rename = "Clubs ordinaires")]
    MainstreamClubs,
    #[serde(rename = "Mairie")]
    TownHall,
    #[serde(rename = "Ligues")]
    Leagues,
    #[serde(rename = "Maisons sport-santé")]
    SportHealthCentres,
    #[serde(rename = "Autres ESMS")]
    OtherEstablishments,
    #[serde(rename = "Aucun")]
    NoPartner,
}

impl ExternalLink {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::AdaptedClubs,
            Self::MainstreamClubs,
            Self::TownHall,
            Self::Leagues,
            Self::SportHealthCentres,
            Self::OtherEstablishments,
            Self::NoPartner,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AdaptedClubs => "Clubs adaptés",
            Self::MainstreamClubs => "Clubs ordinaires",
            Self::TownHall => "Mairie",
            Self::Leagues => "Ligues",
            Self::SportHealthCentres => "Maisons sport-santé",
            Self::OtherEstablishments => "Autres ESMS",
            Self::NoPartner => "Aucun",
        }
    }

    pub const fn is_partner(self) -> bool {
        !matches!(self, Self::NoPartner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Objective {
    #[serde(rename = "Thérapeutique")]
    Therapeutic,
    #[serde(rename = "Occupationnel")]
    Occupational,
    #[serde(rename = "Maintien des capacités physiques")]
    PhysicalMaintenance,
    #[serde(rename = "Développement physique")]
    PhysicalDevelopment,
    #[serde(rename = "Habiletés sociales")]
    SocialSkills,
    #[serde(rename = "Capacités cognitives")]
    Cognitive,
    #[serde(rename = "Autonomie")]
    Autonomy,
    #[serde(rename = "Bien-être")]
    WellBeing,
}

impl Objective {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Therapeutic,
            Self::Occupational,
            Self::PhysicalMaintenance,
            Self::PhysicalDevelopment,
            Self::SocialSkills,
            Self::Cognitive,
            Self::Autonomy,
            Self::WellBeing,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Therapeutic => "Thérapeutique",
            Self::Occupational => "Occupationnel",
            Self::PhysicalMaintenance => "Maintien des capacités physiques",
            Self::PhysicalDevelopment => "Développement physique",
            Self::SocialSkills => "Habiletés sociales",
            Self::Cognitive => "Capacités cognitives",
            Self::Autonomy => "Autonomie",
            Self::WellBeing => "Bien-être",
        }
    }
}

/// What users say about the activities on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UserFeedback {
    #[serde(rename = "Vouloir plus d’APS")]
    WantsMore,
    #[serde(rename = "Être satisfaits")]
    Satisfied,
    #[serde(rename = "Ne pas être satisfaits")]
    Dissatisfied,
    #[serde(rename = "Trop d’APS")]
    TooMuch,
}

impl UserFeedback {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::WantsMore,
            Self::Satisfied,
            Self::Dissatisfied,
            Self::TooMuch,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WantsMore => "Vouloir plus d’APS",
            Self::Satisfied => "Être satisfaits",
            Self::Dissatisfied => "Ne pas être satisfaits",
            Self::TooMuch => "Trop d’APS",
        }
    }
}
