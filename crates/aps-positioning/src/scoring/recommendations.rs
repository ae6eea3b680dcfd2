use super::domain::{Domain, SubScoreSet};
use super::tier::{Tier, TierThresholds};
use serde::Serialize;

/// Pre-authored guidance for one domain at the tier its sub-score falls in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub domain: Domain,
    pub score: f64,
    pub tier: Tier,
    pub message: &'static str,
}

impl Recommendation {
    /// Single-line rendering, e.g. `🔴 Referent — Désigner un(e) référent(e) ...`.
    pub fn render(&self) -> String {
        format!(
            "{} {} — {}",
            self.tier.marker(),
            self.domain.label(),
            self.message
        )
    }
}

/// One recommendation per domain, in domain declaration order.
pub fn recommendations(sub_scores: &SubScoreSet, tiers: &TierThresholds) -> Vec<Recommendation> {
    sub_scores
        .iter()
        .map(|(domain, score)| {
            let tier = tiers.classify(score);
            Recommendation {
                domain,
                score,
                tier,
                message: guidance(domain, tier),
            }
        })
        .collect()
}

pub fn guidance(domain: Domain, tier: Tier) -> &'static str {
    match (domain, tier) {
        (Domain::Referent, Tier::Low) => {
            "Désigner un(e) référent(e) APS et prévoir une formation reconnue (LSAHF, Handisport, Université…)."
        }
        (Domain::Referent, Tier::Mid) => {
            "Formaliser le rôle du référent et compléter/parfaire la formation."
        }
        (Domain::Referent, Tier::High) => {
            "Maintenir la dynamique (veille, mise à jour des compétences)."
        }
        (Domain::Regulier, Tier::Low) => {
            "Mettre en place des APS hebdomadaires, viser ≥ 50% des usagers et ≥ 90 min/sem, diversifier les pratiques."
        }
        (Domain::Regulier, Tier::Mid) => {
            "Augmenter progressivement la part d’usagers et la durée (objectif 90 min/sem), varier 2–3 types d’APS."
        }
        (Domain::Regulier, Tier::High) => {
            "Consolider les volumes et la diversité, formaliser la programmation annuelle."
        }
        (Domain::Occasionnel, Tier::Low) => {
            "Introduire des temps occasionnels (sorties, événements, cycles courts) pour engager les publics."
        }
        (Domain::Occasionnel, Tier::Mid) => {
            "Régulariser la fréquence (ex. mensuelle) et anticiper le calendrier."
        }
        (Domain::Occasionnel, Tier::High) => {
            "Pérenniser un calendrier d’événements et mutualiser avec d’autres ESMS."
        }
        (Domain::Encadrement, Tier::Low) => {
            "Mobiliser des professionnels (APA, éducateur sportif) et clarifier l’encadrement."
        }
        (Domain::Encadrement, Tier::Mid) => {
            "Augmenter les créneaux encadrés et favoriser la co-intervention (APA + éducateur)."
        }
        (Domain::Encadrement, Tier::High) => {
            "Capitaliser (tutorat interne, partage de séances, transmission)."
        }
        (Domain::Projet, Tier::Low) => {
            "Inscrire les APS dans le projet d’établissement/CPOM avec objectifs, indicateurs, moyens."
        }
        (Domain::Projet, Tier::Mid) => {
            "Mieux formaliser dans le projet (indicateurs, calendrier, moyens)."
        }
        (Domain::Projet, Tier::High) => {
            "Suivre des indicateurs annuels et communiquer aux équipes/financeurs."
        }
        (Domain::Liens, Tier::Low) => {
            "Créer des liens avec clubs (adapté/ordinaire), ligues, MSS, communes pour l’accès aux créneaux."
        }
        (Domain::Liens, Tier::Mid) => {
            "Élargir et contractualiser (convention, accès infrastructures, co-organisation)."
        }
        (Domain::Liens, Tier::High) => "Structurer un réseau de partenaires et un planning partagé.",
        (Domain::Qualite, Tier::Low) => {
            "Clarifier les objectifs (autonomie, bien-être, habiletés…) et travailler l’adhésion des usagers."
        }
        (Domain::Qualite, Tier::Mid) => {
            "Mieux relier objectifs ↔ séances et recueillir le ressenti des usagers."
        }
        (Domain::Qualite, Tier::High) => {
            "Poursuivre l’évaluation qualitative et la co-construction avec les usagers."
        }
    }
}
