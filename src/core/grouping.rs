use serde::Serialize;
use std::collections::{HashMap, HashSet};
use crate::models::domain::normalize_language;
use crate::models::{
    Classification, InterestCategory, ObjectiveCategory, Participant, ParticipantId,
};

/// What a category group has in common
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    ObjectiveInterest {
        objective: ObjectiveCategory,
        interest: InterestCategory,
    },
    Language(String),
    NoLanguage,
}

/// Participants sharing a category, in roster order
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub key: GroupKey,
    pub members: Vec<&'a Participant>,
}

/// Languages with the number of participants listing them, rarest first
///
/// Each participant counts once per language. Languages with equal counts
/// keep the order in which they first appear in the roster.
pub fn language_frequencies(participants: &[&Participant]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for participant in participants {
        let mut seen: HashSet<String> = HashSet::new();
        for language in participant.preferred_languages.iter().map(|l| normalize_language(l)) {
            if language.is_empty() || !seen.insert(language.clone()) {
                continue;
            }
            match index.get(&language) {
                Some(&position) => counts[position].1 += 1,
                None => {
                    index.insert(language.clone(), counts.len());
                    counts.push((language, 1));
                }
            }
        }
    }

    // Stable sort keeps first-appearance order among ties
    counts.sort_by_key(|(_, count)| *count);
    counts
}

/// Partition participants by their rarest preferred language
///
/// Languages are visited rarest first; each one takes every participant
/// that lists it and was not taken by a rarer language. Participants
/// without any language end up in a final `NoLanguage` group.
pub fn group_by_rarity<'a>(participants: &[&'a Participant]) -> Vec<CategoryGroup<'a>> {
    let mut taken: HashSet<ParticipantId> = HashSet::new();
    let mut groups = Vec::new();

    for (language, _) in language_frequencies(participants) {
        let members: Vec<&Participant> = participants
            .iter()
            .copied()
            .filter(|participant| !taken.contains(&participant.id) && participant.speaks(&language))
            .collect();

        if members.is_empty() {
            continue;
        }

        taken.extend(members.iter().map(|participant| participant.id));
        groups.push(CategoryGroup {
            key: GroupKey::Language(language),
            members,
        });
    }

    let rest: Vec<&Participant> = participants
        .iter()
        .copied()
        .filter(|participant| !taken.contains(&participant.id))
        .collect();

    if !rest.is_empty() {
        groups.push(CategoryGroup {
            key: GroupKey::NoLanguage,
            members: rest,
        });
    }

    groups
}

/// Cross objective categories with interest categories
///
/// Groups come out in enumeration order (objective outer, interest inner).
/// A participant with several interest categories appears in several
/// groups; the bucketer's assigned set keeps the final teams disjoint.
pub fn group_by_objective_and_interest<'a>(
    participants: &[&'a Participant],
    classifications: &HashMap<ParticipantId, Classification>,
) -> Vec<CategoryGroup<'a>> {
    let fallback = Classification::default();
    let classified: Vec<(&Participant, &Classification)> = participants
        .iter()
        .map(|participant| {
            let class = classifications.get(&participant.id).unwrap_or(&fallback);
            (*participant, class)
        })
        .collect();

    let mut groups = Vec::new();

    for objective in ObjectiveCategory::ALL {
        for interest in InterestCategory::ALL {
            let members: Vec<&Participant> = classified
                .iter()
                .filter(|(_, class)| {
                    class.objective == objective && class.interest_set().contains(&interest)
                })
                .map(|(participant, _)| *participant)
                .collect();

            if !members.is_empty() {
                groups.push(CategoryGroup {
                    key: GroupKey::ObjectiveInterest { objective, interest },
                    members,
                });
            }
        }
    }

    groups
}
