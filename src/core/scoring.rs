use serde::{Deserialize, Serialize};
use crate::core::classifier::Classifier;
use crate::models::{Classification, Participant, RoleCategory, ScoringWeights};

/// Per-component compatibility values, already weighted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub languages: u32,
    pub objective: u32,
    pub availability: u32,
    pub skills: u32,
    pub experience: u32,
    pub roles: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.languages
            .saturating_add(self.objective)
            .saturating_add(self.availability)
            .saturating_add(self.skills)
            .saturating_add(self.experience)
            .saturating_add(self.roles)
    }
}

/// Calculate the compatibility of two already-classified participants
///
/// Scoring formula (each term multiplied by its weight):
/// score = (
///     shared_languages +           # Distinct languages both listed
///     same_objective +             # 1 when objective categories match
///     shared_slots +               # Time slots where both are available
///     skill_affinity +             # Sum of min(level_a, level_b) over shared skills
///     same_experience +            # 1 when experience levels match
///     complementary_roles          # 1 when roles are known and differ
/// )
pub fn calculate_compatibility(
    a: &Participant,
    a_class: &Classification,
    b: &Participant,
    b_class: &Classification,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let same_objective = u32::from(a_class.objective == b_class.objective);
    let same_experience = u32::from(a.experience_level == b.experience_level);

    ScoreBreakdown {
        languages: shared_languages(a, b).saturating_mul(weights.languages),
        objective: same_objective.saturating_mul(weights.objective),
        availability: shared_availability(a, b).saturating_mul(weights.availability),
        skills: skill_affinity(a, b).saturating_mul(weights.skills),
        experience: same_experience.saturating_mul(weights.experience),
        roles: role_bonus(a_class.role, b_class.role).saturating_mul(weights.roles),
    }
}

/// Number of distinct languages both participants listed (case-insensitive)
#[inline]
fn shared_languages(a: &Participant, b: &Participant) -> u32 {
    let theirs = b.normalized_languages();
    a.normalized_languages()
        .iter()
        .filter(|language| theirs.contains(*language))
        .count() as u32
}

/// Number of time slots where both participants are available
#[inline]
fn shared_availability(a: &Participant, b: &Participant) -> u32 {
    a.availability
        .iter()
        .filter(|(slot, available)| **available && b.is_available(slot))
        .count() as u32
}

/// Sum over shared skills of the lower clamped proficiency
#[inline]
fn skill_affinity(a: &Participant, b: &Participant) -> u32 {
    a.programming_skills
        .keys()
        .filter_map(|skill| {
            let mine = a.skill_level(skill)?;
            let theirs = b.skill_level(skill)?;
            Some(u32::from(mine.min(theirs)))
        })
        .sum()
}

/// Different known roles complement each other; identical or unknown roles do not
#[inline]
fn role_bonus(a: RoleCategory, b: RoleCategory) -> u32 {
    let known = a != RoleCategory::Other && b != RoleCategory::Other;
    u32::from(known && a != b)
}

/// Compatibility scorer that classifies participants on demand
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    classifier: Classifier,
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    pub fn new(classifier: Classifier, weights: ScoringWeights) -> Self {
        Self { classifier, weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Symmetric, non-negative pairwise score
    pub fn score(&self, a: &Participant, b: &Participant) -> u32 {
        self.breakdown(a, b).total()
    }

    pub fn breakdown(&self, a: &Participant, b: &Participant) -> ScoreBreakdown {
        let a_class = self.classifier.classify(a);
        let b_class = self.classifier.classify(b);
        calculate_compatibility(a, &a_class, b, &b_class, &self.weights)
    }

    /// Aggregate affinity of a team: the sum of scores over every unordered pair
    pub fn team_affinity(&self, members: &[&Participant]) -> u32 {
        let classes: Vec<Classification> = members
            .iter()
            .map(|member| self.classifier.classify(member))
            .collect();

        let mut total: u32 = 0;
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                let pair = calculate_compatibility(
                    members[i],
                    &classes[i],
                    members[j],
                    &classes[j],
                    &self.weights,
                );
                total = total.saturating_add(pair.total());
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceLevel;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn create_test_participant(n: u128) -> Participant {
        Participant {
            id: Uuid::from_u128(n),
            name: format!("Participant {}", n),
            email: None,
            age: None,
            year_of_study: None,
            shirt_size: None,
            university: None,
            dietary_restrictions: None,
            programming_skills: BTreeMap::new(),
            experience_level: ExperienceLevel::Beginner,
            hackathons_done: 0,
            interests: vec![],
            preferred_role: String::new(),
            objective: String::new(),
            interest_in_challenges: vec![],
            preferred_languages: vec![],
            friend_requests: vec![],
            preferred_team_size: 0,
            availability: BTreeMap::new(),
            introduction: None,
            technical_project: None,
            future_excitement: None,
            fun_fact: None,
        }
    }

    #[test]
    fn test_language_overlap_counts_distinct_shared() {
        let mut a = create_test_participant(1);
        let mut b = create_test_participant(2);
        a.preferred_languages = vec!["English".into(), "Spanish".into(), "Catalan".into()];
        b.preferred_languages = vec!["spanish".into(), "ENGLISH".into(), "French".into()];

        assert_eq!(shared_languages(&a, &b), 2);
        assert_eq!(shared_languages(&b, &a), 2);
    }

    #[test]
    fn test_availability_requires_both() {
        let mut a = create_test_participant(1);
        let mut b = create_test_participant(2);
        a.availability = BTreeMap::from([
            ("Saturday morning".to_string(), true),
            ("Saturday afternoon".to_string(), true),
            ("Sunday morning".to_string(), false),
        ]);
        b.availability = BTreeMap::from([
            ("Saturday morning".to_string(), true),
            ("Saturday afternoon".to_string(), false),
            ("Sunday morning".to_string(), true),
        ]);

        assert_eq!(shared_availability(&a, &b), 1);
        assert_eq!(shared_availability(&b, &a), 1);
    }

    #[test]
    fn test_skill_affinity_uses_clamped_levels() {
        let mut a = create_test_participant(1);
        let mut b = create_test_participant(2);
        a.programming_skills = BTreeMap::from([
            ("Python".to_string(), 9),
            ("SQL".to_string(), 2),
            ("Rust".to_string(), 4),
        ]);
        b.programming_skills = BTreeMap::from([
            ("Python".to_string(), 7),
            ("SQL".to_string(), 0),
        ]);

        // Python: min(5, 5) = 5, SQL: min(2, 1) = 1
        assert_eq!(skill_affinity(&a, &b), 6);
    }

    #[test]
    fn test_role_bonus_rewards_complementary_roles() {
        assert_eq!(role_bonus(RoleCategory::Development, RoleCategory::Design), 1);
        assert_eq!(role_bonus(RoleCategory::Design, RoleCategory::Design), 0);
        assert_eq!(role_bonus(RoleCategory::Other, RoleCategory::Analysis), 0);
    }

    #[test]
    fn test_score_is_symmetric() {
        let scorer = CompatibilityScorer::default();
        let mut a = create_test_participant(1);
        let mut b = create_test_participant(2);
        a.preferred_languages = vec!["English".into()];
        a.objective = "Win the first prize".into();
        a.preferred_role = "Developer".into();
        a.programming_skills = BTreeMap::from([("Python".to_string(), 3)]);
        b.preferred_languages = vec!["English".into(), "German".into()];
        b.objective = "Compete with the best".into();
        b.preferred_role = "Data analysis".into();
        b.programming_skills = BTreeMap::from([("Python".to_string(), 4)]);
        b.experience_level = ExperienceLevel::Advanced;

        let breakdown = scorer.breakdown(&a, &b);
        assert_eq!(
            breakdown,
            ScoreBreakdown {
                languages: 1,
                objective: 1,
                availability: 0,
                skills: 3,
                experience: 0,
                roles: 1,
            }
        );
        assert_eq!(scorer.score(&a, &b), 6);
        assert_eq!(scorer.score(&b, &a), 6);
    }

    #[test]
    fn test_weights_scale_components() {
        let weights = ScoringWeights {
            languages: 3,
            objective: 0,
            availability: 1,
            skills: 1,
            experience: 2,
            roles: 1,
        };
        let scorer = CompatibilityScorer::new(Classifier::default(), weights);
        let mut a = create_test_participant(1);
        let mut b = create_test_participant(2);
        a.preferred_languages = vec!["English".into()];
        b.preferred_languages = vec!["English".into()];

        // languages 1*3, objective weighted to 0, experience 1*2
        assert_eq!(scorer.score(&a, &b), 5);
    }

    #[test]
    fn test_team_affinity_sums_pairs() {
        let scorer = CompatibilityScorer::default();
        let members: Vec<Participant> = (1..=3)
            .map(|n| {
                let mut p = create_test_participant(n);
                p.preferred_languages = vec!["English".into()];
                p
            })
            .collect();
        let refs: Vec<&Participant> = members.iter().collect();

        // Each pair: language 1 + objective (both other) 1 + experience 1 = 3
        assert_eq!(scorer.team_affinity(&refs), 9);
        assert_eq!(scorer.team_affinity(&refs[..1]), 0);
    }
}
