use std::collections::HashSet;
use crate::models::{Participant, ParticipantId, Team};

/// Participants already placed in some team during one pipeline run
///
/// Owned by the pipeline and lent by `&mut` to each stage, so exactly one
/// stage mutates it at a time.
#[derive(Debug, Clone, Default)]
pub struct AssignedSet {
    ids: HashSet<ParticipantId>,
}

impl AssignedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.ids.contains(id)
    }

    /// Record a participant; returns false if it was already claimed
    pub fn claim(&mut self, id: ParticipantId) -> bool {
        self.ids.insert(id)
    }

    pub fn claim_team(&mut self, team: &Team) {
        self.ids.extend(team.members.iter().copied());
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Candidates not yet claimed, in their original order
    pub fn unassigned<'a>(&self, candidates: &[&'a Participant]) -> Vec<&'a Participant> {
        candidates
            .iter()
            .copied()
            .filter(|participant| !self.contains(&participant.id))
            .collect()
    }
}
