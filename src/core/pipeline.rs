use std::collections::{HashMap, HashSet};
use thiserror::Error;
use crate::core::{
    assignment::AssignedSet,
    bucketing::{bucket, slice_full_teams},
    classifier::Classifier,
    friends::extract_friend_groups,
    grouping::{group_by_objective_and_interest, group_by_rarity},
    scoring::CompatibilityScorer,
    validator::{validate_teams, ValidationError},
};
use crate::models::{
    Classification, GroupingAxis, Participant, ParticipantId, ScoringWeights, Team, TeamKind,
};

/// Nominal team size used when nothing else is configured
pub const DEFAULT_TEAM_SIZE: usize = 4;

/// Errors that can occur while forming teams
#[derive(Debug, Error)]
pub enum FormationError {
    #[error("Participant {0} appears more than once in the roster")]
    DuplicateRosterId(ParticipantId),

    #[error("Team validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Tunables for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormationSettings {
    pub target_team_size: usize,
    /// Grouping passes in order; only the last one emits overflow teams
    pub axes: Vec<GroupingAxis>,
}

impl Default for FormationSettings {
    fn default() -> Self {
        Self {
            target_team_size: DEFAULT_TEAM_SIZE,
            axes: vec![GroupingAxis::ObjectiveInterest, GroupingAxis::LanguageRarity],
        }
    }
}

/// Result of the team formation pipeline
#[derive(Debug)]
pub struct Formation {
    /// Friend groups first, then teams in grouping order
    pub teams: Vec<Team>,
    pub friend_group_count: usize,
    pub total_participants: usize,
    pub classifications: HashMap<ParticipantId, Classification>,
}

impl Formation {
    pub fn teams_of_kind(&self, kind: TeamKind) -> impl Iterator<Item = &Team> {
        self.teams.iter().filter(move |team| team.kind == kind)
    }

    pub fn team_of(&self, id: &ParticipantId) -> Option<&Team> {
        self.teams.iter().find(|team| team.contains(id))
    }
}

/// Main team formation orchestrator
///
/// # Pipeline Stages
/// 1. Classification of every participant
/// 2. Friend-group extraction
/// 3. Categorical grouping, one pass per configured axis
/// 4. Greedy bucketing into full and overflow teams
/// 5. Partition validation
#[derive(Debug, Clone)]
pub struct TeamFormer {
    classifier: Classifier,
    scorer: CompatibilityScorer,
    settings: FormationSettings,
}

impl TeamFormer {
    pub fn new(classifier: Classifier, weights: ScoringWeights, settings: FormationSettings) -> Self {
        Self {
            scorer: CompatibilityScorer::new(classifier.clone(), weights),
            classifier,
            settings,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            Classifier::default(),
            ScoringWeights::default(),
            FormationSettings::default(),
        )
    }

    /// Same classifier and weights, different formation settings
    pub fn with_settings(&self, settings: FormationSettings) -> Self {
        Self {
            classifier: self.classifier.clone(),
            scorer: self.scorer.clone(),
            settings,
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    pub fn settings(&self) -> &FormationSettings {
        &self.settings
    }

    /// Assign every participant of the roster to exactly one team
    ///
    /// # Arguments
    /// * `participants` - The full roster; identifiers must be unique
    ///
    /// # Returns
    /// The validated formation, or the reason the roster could not be
    /// partitioned. Identical input always yields identical teams.
    pub fn form_teams(&self, participants: &[Participant]) -> Result<Formation, FormationError> {
        ensure_unique_ids(participants)?;

        let classifications: HashMap<ParticipantId, Classification> = participants
            .iter()
            .map(|participant| (participant.id, self.classifier.classify(participant)))
            .collect();

        let target_size = self.settings.target_team_size.max(1);
        let mut assigned = AssignedSet::new();
        let mut teams: Vec<Team> = Vec::new();

        // Stage 2: friend groups are emitted as-is
        let friends = extract_friend_groups(participants);
        for group in &friends.groups {
            let team = Team::new(
                TeamKind::FriendGroup,
                group.iter().map(|participant| participant.id).collect(),
            );
            assigned.claim_team(&team);
            teams.push(team);
        }
        let friend_group_count = friends.groups.len();

        tracing::debug!(
            "Extracted {} friend groups covering {} participants",
            friend_group_count,
            friends.member_count()
        );

        // Stages 3 & 4: earlier axes emit only full teams, the last one absorbs remainders
        let last_axis = self.settings.axes.len().saturating_sub(1);
        for (position, axis) in self.settings.axes.iter().enumerate() {
            let pending = assigned.unassigned(&friends.remaining);
            if pending.is_empty() {
                break;
            }

            let groups = match axis {
                GroupingAxis::ObjectiveInterest => {
                    group_by_objective_and_interest(&pending, &classifications)
                }
                GroupingAxis::LanguageRarity => group_by_rarity(&pending),
            };

            tracing::debug!(
                "Axis {:?}: {} pending participants in {} groups",
                axis,
                pending.len(),
                groups.len()
            );

            for group in &groups {
                if position == last_axis {
                    teams.extend(bucket(&group.members, target_size, &mut assigned));
                } else {
                    teams.extend(slice_full_teams(&group.members, target_size, &mut assigned).teams);
                }
            }
        }

        // Only reachable with an empty axis list
        let leftovers = assigned.unassigned(&friends.remaining);
        if !leftovers.is_empty() {
            tracing::debug!("Bucketing {} participants no axis placed", leftovers.len());
            teams.extend(bucket(&leftovers, target_size, &mut assigned));
        }

        // Stage 5: verify the partition
        validate_teams(participants, &teams)?;

        Ok(Formation {
            teams,
            friend_group_count,
            total_participants: participants.len(),
            classifications,
        })
    }
}

impl Default for TeamFormer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn ensure_unique_ids(participants: &[Participant]) -> Result<(), FormationError> {
    let mut seen: HashSet<ParticipantId> = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !seen.insert(participant.id) {
            return Err(FormationError::DuplicateRosterId(participant.id));
        }
    }
    Ok(())
}
