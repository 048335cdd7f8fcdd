use crate::core::assignment::AssignedSet;
use crate::models::{Participant, Team, TeamKind};

/// Full teams cut from a group, plus whoever did not fit
#[derive(Debug, Default)]
pub struct SlicedGroup<'a> {
    pub teams: Vec<Team>,
    pub remainder: Vec<&'a Participant>,
}

/// Sort key for size preferences: 1..=4 ascending, "no preference" (0) last
#[inline]
fn size_preference_rank(participant: &Participant) -> u8 {
    if participant.has_size_preference() {
        participant.preferred_team_size
    } else {
        u8::MAX
    }
}

/// Stable sort by preferred team size; equal preferences keep group order
pub fn sort_by_size_preference(members: &mut [&Participant]) {
    members.sort_by_key(|participant| size_preference_rank(participant));
}

/// Cut as many full teams of `target_size` as the group allows
///
/// Already-assigned participants are dropped before sorting. Members of
/// the full teams are claimed; the remainder is returned unclaimed so a
/// later grouping axis can still place it.
pub fn slice_full_teams<'a>(
    group: &[&'a Participant],
    target_size: usize,
    assigned: &mut AssignedSet,
) -> SlicedGroup<'a> {
    let target_size = target_size.max(1);

    let mut seen = AssignedSet::new();
    let mut pending: Vec<&Participant> = group
        .iter()
        .copied()
        .filter(|participant| !assigned.contains(&participant.id) && seen.claim(participant.id))
        .collect();

    sort_by_size_preference(&mut pending);

    let full_len = pending.len() - pending.len() % target_size;
    let remainder = pending.split_off(full_len);

    let teams: Vec<Team> = pending
        .chunks_exact(target_size)
        .map(|chunk| Team::new(TeamKind::Full, chunk.iter().map(|p| p.id).collect()))
        .collect();

    for team in &teams {
        assigned.claim_team(team);
    }

    SlicedGroup { teams, remainder }
}

/// Slice a group into full teams and one overflow team for the remainder
///
/// Nobody is dropped: a group smaller than `target_size` becomes a single
/// overflow team.
pub fn bucket(group: &[&Participant], target_size: usize, assigned: &mut AssignedSet) -> Vec<Team> {
    let SlicedGroup { mut teams, remainder } = slice_full_teams(group, target_size, assigned);

    if !remainder.is_empty() {
        let overflow = Team::new(
            TeamKind::Overflow,
            remainder.iter().map(|participant| participant.id).collect(),
        );
        assigned.claim_team(&overflow);
        teams.push(overflow);
    }

    teams
}
