use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Stable participant identifier
pub type ParticipantId = Uuid;

/// Lowest proficiency a skill can report after normalization
pub const MIN_SKILL_LEVEL: u8 = 1;
/// Highest proficiency a skill can report after normalization
pub const MAX_SKILL_LEVEL: u8 = 5;
/// Largest accepted preferred team size (0 means "no preference")
pub const MAX_PREFERRED_TEAM_SIZE: u8 = 4;

/// Self-reported experience, ordered Beginner < Intermediate < Advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Event participant as found in the registration roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Participant {
    pub id: ParticipantId,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub year_of_study: Option<String>,
    #[serde(default)]
    pub shirt_size: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Option<String>,
    /// Raw proficiencies; read them through [`Participant::skill_level`]
    #[serde(default)]
    pub programming_skills: BTreeMap<String, i64>,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub hackathons_done: u32,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub preferred_role: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub interest_in_challenges: Vec<String>,
    #[serde(default)]
    pub preferred_languages: Vec<String>,
    #[serde(rename = "friend_registration", alias = "friendRequests", default)]
    pub friend_requests: Vec<ParticipantId>,
    #[validate(range(max = 4))]
    #[serde(default)]
    pub preferred_team_size: u8,
    #[serde(default)]
    pub availability: BTreeMap<String, bool>,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub technical_project: Option<String>,
    #[serde(default)]
    pub future_excitement: Option<String>,
    #[serde(default)]
    pub fun_fact: Option<String>,
}

impl Participant {
    /// Proficiency for a skill, clamped to [MIN_SKILL_LEVEL, MAX_SKILL_LEVEL]
    pub fn skill_level(&self, skill: &str) -> Option<u8> {
        self.programming_skills
            .get(skill)
            .map(|level| {
                let clamped = (*level).clamp(i64::from(MIN_SKILL_LEVEL), i64::from(MAX_SKILL_LEVEL));
                u8::try_from(clamped).unwrap_or(MAX_SKILL_LEVEL)
            })
    }

    /// Whether the participant reported being available for a time slot
    pub fn is_available(&self, slot: &str) -> bool {
        self.availability.get(slot).copied().unwrap_or(false)
    }

    pub fn has_size_preference(&self) -> bool {
        self.preferred_team_size != 0
    }

    /// Preferred languages, trimmed and lower-cased, without duplicates
    pub fn normalized_languages(&self) -> BTreeSet<String> {
        self.preferred_languages
            .iter()
            .map(|language| normalize_language(language))
            .filter(|language| !language.is_empty())
            .collect()
    }

    pub fn speaks(&self, language: &str) -> bool {
        let wanted = normalize_language(language);
        self.preferred_languages
            .iter()
            .any(|language| normalize_language(language) == wanted)
    }
}

/// Canonical form used to compare language names
pub fn normalize_language(language: &str) -> String {
    language.trim().to_lowercase()
}

/// What a participant hopes to get out of the event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectiveCategory {
    #[serde(rename = "prize-hunting")]
    PrizeHunting,
    #[serde(rename = "learning")]
    Learning,
    #[serde(rename = "meeting")]
    Meeting,
    #[default]
    #[serde(rename = "other")]
    Other,
}

impl ObjectiveCategory {
    /// Priority order, which is also the grouping order
    pub const ALL: [ObjectiveCategory; 4] = [
        ObjectiveCategory::PrizeHunting,
        ObjectiveCategory::Learning,
        ObjectiveCategory::Meeting,
        ObjectiveCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ObjectiveCategory::PrizeHunting => "prize-hunting",
            ObjectiveCategory::Learning => "learning",
            ObjectiveCategory::Meeting => "meeting",
            ObjectiveCategory::Other => "other",
        }
    }
}

impl fmt::Display for ObjectiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InterestCategory {
    Tech,
    Design,
    Business,
    #[default]
    Other,
}

impl InterestCategory {
    pub const ALL: [InterestCategory; 4] = [
        InterestCategory::Tech,
        InterestCategory::Design,
        InterestCategory::Business,
        InterestCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterestCategory::Tech => "Tech",
            InterestCategory::Design => "Design",
            InterestCategory::Business => "Business",
            InterestCategory::Other => "Other",
        }
    }
}

impl fmt::Display for InterestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleCategory {
    Development,
    Design,
    Analysis,
    Visualization,
    #[default]
    Other,
}

impl RoleCategory {
    pub const ALL: [RoleCategory; 5] = [
        RoleCategory::Development,
        RoleCategory::Design,
        RoleCategory::Analysis,
        RoleCategory::Visualization,
        RoleCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoleCategory::Development => "Development",
            RoleCategory::Design => "Design",
            RoleCategory::Analysis => "Analysis",
            RoleCategory::Visualization => "Visualization",
            RoleCategory::Other => "Other",
        }
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categories derived from a participant's free-text answers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub objective: ObjectiveCategory,
    pub interests: Vec<InterestCategory>,
    pub role: RoleCategory,
}

impl Classification {
    /// Distinct interest categories; a participant without interests counts as Other
    pub fn interest_set(&self) -> BTreeSet<InterestCategory> {
        if self.interests.is_empty() {
            return BTreeSet::from([InterestCategory::Other]);
        }
        self.interests.iter().copied().collect()
    }
}

/// How a team came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamKind {
    /// Pre-formed from friend requests, uncapped
    FriendGroup,
    /// Exactly the target size
    Full,
    /// Remainder of a group after full teams were sliced off
    Overflow,
}

/// An emitted team; membership never changes afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub kind: TeamKind,
    pub members: Vec<ParticipantId>,
}

impl Team {
    pub fn new(kind: TeamKind, members: Vec<ParticipantId>) -> Self {
        Self { kind, members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.members.contains(id)
    }
}

/// One categorization pass of the team formation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingAxis {
    /// Objective category crossed with interest category
    ObjectiveInterest,
    /// Preferred language, rarest first
    LanguageRarity,
}

/// Integer weights applied to each compatibility component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub languages: u32,
    pub objective: u32,
    pub availability: u32,
    pub skills: u32,
    pub experience: u32,
    pub roles: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            languages: 1,
            objective: 1,
            availability: 1,
            skills: 1,
            experience: 1,
            roles: 1,
        }
    }
}
