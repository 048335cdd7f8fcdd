use std::collections::{HashMap, HashSet};
use crate::models::{Participant, ParticipantId};

/// Output of friend-group extraction
#[derive(Debug, Default)]
pub struct FriendGroups<'a> {
    /// Groups in the order their founding participant appears in the roster
    pub groups: Vec<Vec<&'a Participant>>,
    /// Participants never claimed by a group, in roster order
    pub remaining: Vec<&'a Participant>,
}

impl FriendGroups<'_> {
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

/// Resolve friend requests into pre-formed groups
///
/// Walks the roster in order. Every unclaimed participant with at least one
/// request founds a group and pulls in each requested participant that is
/// still unclaimed. Requests do not need to be mutual and groups are not
/// capped, so a group can be larger than the target team size. Identifiers
/// that resolve to nobody, or to someone already claimed, are skipped.
pub fn extract_friend_groups(participants: &[Participant]) -> FriendGroups<'_> {
    let by_id: HashMap<ParticipantId, &Participant> = participants
        .iter()
        .map(|participant| (participant.id, participant))
        .collect();

    let mut claimed: HashSet<ParticipantId> = HashSet::new();
    let mut groups = Vec::new();

    for participant in participants {
        if participant.friend_requests.is_empty() || claimed.contains(&participant.id) {
            continue;
        }

        claimed.insert(participant.id);
        let mut group = vec![participant];

        for friend_id in &participant.friend_requests {
            let Some(friend) = by_id.get(friend_id) else {
                continue;
            };
            if claimed.insert(*friend_id) {
                group.push(*friend);
            }
        }

        groups.push(group);
    }

    let remaining = participants
        .iter()
        .filter(|participant| !claimed.contains(&participant.id))
        .collect();

    FriendGroups { groups, remaining }
}
