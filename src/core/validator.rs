use std::collections::HashSet;
use thiserror::Error;
use crate::models::{Participant, ParticipantId, Team};

/// Ways a set of teams can fail to partition the roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Participants assigned to more than one team: {}", format_ids(.0))]
    DuplicateParticipant(Vec<ParticipantId>),

    #[error("Participants missing from every team: {}", format_ids(.0))]
    MissingParticipants(Vec<ParticipantId>),

    #[error("Team members not present in the roster: {}", format_ids(.0))]
    UnknownParticipants(Vec<ParticipantId>),
}

fn format_ids(ids: &[ParticipantId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check that `teams` place every roster participant exactly once
///
/// Checks run in order: duplicates across teams, roster participants left
/// out, then team members the roster does not know. Each error lists every
/// offending identifier in first-seen order. Nothing is repaired.
pub fn validate_teams(original: &[Participant], teams: &[Team]) -> Result<(), ValidationError> {
    let mut placed: HashSet<ParticipantId> = HashSet::new();
    let mut duplicates: Vec<ParticipantId> = Vec::new();

    for id in teams.iter().flat_map(|team| team.members.iter()) {
        if !placed.insert(*id) && !duplicates.contains(id) {
            duplicates.push(*id);
        }
    }

    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicateParticipant(duplicates));
    }

    let missing: Vec<ParticipantId> = original
        .iter()
        .map(|participant| participant.id)
        .filter(|id| !placed.contains(id))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingParticipants(missing));
    }

    let roster: HashSet<ParticipantId> = original.iter().map(|participant| participant.id).collect();
    let unknown: Vec<ParticipantId> = teams
        .iter()
        .flat_map(|team| team.members.iter().copied())
        .filter(|id| !roster.contains(id))
        .collect();

    if !unknown.is_empty() {
        return Err(ValidationError::UnknownParticipants(unknown));
    }

    Ok(())
}
