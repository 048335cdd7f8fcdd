// Integration tests for Team Former

use team_former::core::{extract_friend_groups, FormationSettings, TeamFormer};
use team_former::models::{ExperienceLevel, GroupingAxis, Participant, Team, TeamKind};
use team_former::{load_participants, validate_teams};
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;

const OBJECTIVES: [&str; 5] = [
    "Win the first prize",
    "Learn new skills",
    "Meet new people and network",
    "",
    "Just vibes",
];
const INTERESTS: [&str; 4] = ["AI", "Web design", "Startup finance", "Chess"];
const LANGUAGES: [&str; 4] = ["English", "Spanish", "Catalan", "Basque"];
const ROLES: [&str; 4] = ["Developer", "Designer", "Data analyst", ""];

fn create_test_participant(n: u128) -> Participant {
    let i = n as usize;
    Participant {
        id: Uuid::from_u128(n),
        name: format!("Participant {}", n),
        email: None,
        age: Some(18 + (i % 10) as u8),
        year_of_study: None,
        shirt_size: None,
        university: None,
        dietary_restrictions: None,
        programming_skills: BTreeMap::from([
            ("Python".to_string(), (i % 7) as i64),
            ("SQL".to_string(), (i % 3) as i64 + 1),
        ]),
        experience_level: match i % 3 {
            0 => ExperienceLevel::Beginner,
            1 => ExperienceLevel::Intermediate,
            _ => ExperienceLevel::Advanced,
        },
        hackathons_done: (i % 4) as u32,
        interests: vec![INTERESTS[i % INTERESTS.len()].to_string()],
        preferred_role: ROLES[i % ROLES.len()].to_string(),
        objective: OBJECTIVES[i % OBJECTIVES.len()].to_string(),
        interest_in_challenges: vec![],
        preferred_languages: LANGUAGES[..1 + i % LANGUAGES.len()]
            .iter()
            .map(|l| l.to_string())
            .collect(),
        friend_requests: vec![],
        preferred_team_size: (i % 5) as u8,
        availability: BTreeMap::from([("Saturday".to_string(), i % 2 == 0)]),
        introduction: None,
        technical_project: None,
        future_excitement: None,
        fun_fact: None,
    }
}

/// A roster of `count` participants where every seventh one asks for two friends
fn create_roster(count: u128) -> Vec<Participant> {
    let mut roster: Vec<Participant> = (1..=count).map(create_test_participant).collect();
    for participant in roster.iter_mut() {
        let n = participant.id.as_u128();
        if n % 7 == 0 {
            participant.friend_requests = vec![
                Uuid::from_u128((n * 3) % count + 1),
                Uuid::from_u128((n * 5) % count + 1),
                Uuid::from_u128(10_000 + n),
            ];
        }
    }
    roster
}

fn flatten(teams: &[Team]) -> Vec<Uuid> {
    teams.iter().flat_map(|team| team.members.iter().copied()).collect()
}

#[test]
fn test_integration_partition_totality() {
    let former = TeamFormer::with_defaults();

    for count in [1u128, 2, 5, 17, 64, 150] {
        let roster = create_roster(count);
        let formation = former.form_teams(&roster).unwrap();

        let flat = flatten(&formation.teams);
        let unique: HashSet<Uuid> = flat.iter().copied().collect();
        let expected: HashSet<Uuid> = roster.iter().map(|p| p.id).collect();

        assert_eq!(flat.len(), roster.len(), "roster of {}", count);
        assert_eq!(unique, expected, "roster of {}", count);
        assert!(validate_teams(&roster, &formation.teams).is_ok());
    }
}

#[test]
fn test_integration_friend_containment() {
    let roster = create_roster(150);
    let formation = TeamFormer::with_defaults().form_teams(&roster).unwrap();
    let friends = extract_friend_groups(&roster);

    let team_of: HashMap<Uuid, usize> = formation
        .teams
        .iter()
        .enumerate()
        .flat_map(|(index, team)| team.members.iter().map(move |id| (*id, index)))
        .collect();

    assert!(!friends.groups.is_empty());
    for group in &friends.groups {
        let founder = group[0].id;
        for member in group {
            assert_eq!(team_of[&member.id], team_of[&founder]);
        }
    }
    assert_eq!(
        formation.teams_of_kind(TeamKind::FriendGroup).count(),
        formation.friend_group_count
    );
}

#[test]
fn test_integration_determinism() {
    let roster = create_roster(97);
    let former = TeamFormer::with_defaults();

    let first = former.form_teams(&roster).unwrap();
    let second = former.form_teams(&roster).unwrap();

    assert_eq!(first.teams, second.teams);
}

#[test]
fn test_integration_full_teams_have_target_size() {
    for target in [2usize, 3, 4, 5] {
        let former = TeamFormer::with_defaults().with_settings(FormationSettings {
            target_team_size: target,
            axes: vec![GroupingAxis::ObjectiveInterest, GroupingAxis::LanguageRarity],
        });
        let formation = former.form_teams(&create_roster(120)).unwrap();

        for team in formation.teams_of_kind(TeamKind::Full) {
            assert_eq!(team.len(), target);
        }
    }
}

#[test]
fn test_integration_five_participants_one_language() {
    let roster: Vec<Participant> = (1..=5)
        .map(|n| {
            let mut p = create_test_participant(n);
            p.objective = "Win".to_string();
            p.interests = vec!["AI".to_string()];
            p.preferred_languages = vec!["Basque".to_string()];
            p.preferred_team_size = 0;
            p
        })
        .collect();

    let formation = TeamFormer::with_defaults().form_teams(&roster).unwrap();

    let sizes: Vec<usize> = formation.teams.iter().map(Team::len).collect();
    assert_eq!(sizes, vec![4, 1]);
    assert_eq!(formation.teams[0].kind, TeamKind::Full);
    assert_eq!(formation.teams[1].kind, TeamKind::Overflow);
}

#[test]
fn test_integration_one_sided_friend_request() {
    let mut a = create_test_participant(1);
    let b = create_test_participant(2);
    a.friend_requests = vec![b.id];
    let roster = vec![a, b];

    let formation = TeamFormer::with_defaults().form_teams(&roster).unwrap();

    assert_eq!(formation.teams.len(), 1);
    assert_eq!(formation.teams[0].kind, TeamKind::FriendGroup);
    assert_eq!(
        formation.teams[0].members,
        vec![Uuid::from_u128(1), Uuid::from_u128(2)]
    );
}

#[test]
fn test_integration_oversized_friend_group_is_kept() {
    let mut roster: Vec<Participant> = (1..=8).map(create_test_participant).collect();
    roster[0].friend_requests = (2..=7).map(Uuid::from_u128).collect();

    let formation = TeamFormer::with_defaults().form_teams(&roster).unwrap();

    assert_eq!(formation.teams[0].len(), 7);
    assert_eq!(formation.teams[1].members, vec![Uuid::from_u128(8)]);
}

#[tokio::test]
async fn test_integration_sample_roster() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_participants.json");
    let roster = load_participants(path).await.unwrap();
    assert_eq!(roster.len(), 10);

    let formation = TeamFormer::with_defaults().form_teams(&roster).unwrap();

    assert_eq!(formation.total_participants, 10);
    assert_eq!(formation.friend_group_count, 1);
    assert_eq!(flatten(&formation.teams).len(), 10);

    // Ada asked for Grace
    let ada = roster.iter().find(|p| p.name == "Ada").unwrap();
    let grace = roster.iter().find(|p| p.name == "Grace").unwrap();
    let team = formation.team_of(&ada.id).unwrap();
    assert!(team.contains(&grace.id));
}
