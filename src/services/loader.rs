use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::{Validate, ValidationErrors};
use crate::models::Participant;

/// Errors that can occur when reading a participant roster
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Roster file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Roster file {} is not a JSON file", .0.display())]
    NotJson(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Participant {index} failed validation: {source}")]
    Invalid {
        index: usize,
        source: ValidationErrors,
    },
}

/// Load a roster from a JSON file holding an array of participants
pub async fn load_participants<P: AsRef<Path>>(path: P) -> Result<Vec<Participant>, LoaderError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoaderError::NotFound(path.to_path_buf()));
    }

    let is_json = path
        .extension()
        .map(|extension| extension.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !is_json {
        return Err(LoaderError::NotJson(path.to_path_buf()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let participants = parse_participants(&content)?;

    tracing::info!("Loaded {} participants from {}", participants.len(), path.display());

    Ok(participants)
}

/// Parse a roster held in memory
///
/// Every participant must pass the same validation rules as an HTTP request
/// body; the first failing entry is reported by its position in the array.
pub fn parse_participants(json: &str) -> Result<Vec<Participant>, LoaderError> {
    let participants: Vec<Participant> = serde_json::from_str(json)?;

    for (index, participant) in participants.iter().enumerate() {
        participant
            .validate()
            .map_err(|source| LoaderError::Invalid { index, source })?;
    }

    Ok(participants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceLevel;
    use std::io::Write;

    const ROSTER: &str = r#"[
        {
            "id": "9f3f6a52-3c4e-4d8c-8c43-2f6f0c4a1e01",
            "name": "Ada",
            "experience_level": "Advanced",
            "programming_skills": {"Python": 8, "SQL": 3},
            "preferred_languages": ["English"],
            "friend_registration": ["9f3f6a52-3c4e-4d8c-8c43-2f6f0c4a1e02"],
            "preferred_team_size": 3,
            "availability": {"Saturday morning": true}
        },
        {
            "id": "9f3f6a52-3c4e-4d8c-8c43-2f6f0c4a1e02",
            "name": "Grace",
            "experience_level": "Beginner",
            "objective": "Meet new people"
        }
    ]"#;

    #[test]
    fn test_parse_roster_with_defaults() {
        let participants = parse_participants(ROSTER).unwrap();

        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].experience_level, ExperienceLevel::Advanced);
        assert_eq!(participants[0].friend_requests, vec![participants[1].id]);
        assert_eq!(participants[0].skill_level("Python"), Some(5));
        assert!(participants[1].interests.is_empty());
        assert_eq!(participants[1].preferred_team_size, 0);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = parse_participants("[{\"id\": 1}]");

        assert!(matches!(result, Err(LoaderError::Parse(_))));
    }

    #[test]
    fn test_out_of_range_skill_levels_are_clamped() {
        let roster = r#"[{
            "id": "9f3f6a52-3c4e-4d8c-8c43-2f6f0c4a1e03",
            "name": "Linus",
            "experience_level": "Intermediate",
            "programming_skills": {"C": 300, "Go": -1, "Rust": 0}
        }]"#;

        let participants = parse_participants(roster).unwrap();

        assert_eq!(participants[0].skill_level("C"), Some(5));
        assert_eq!(participants[0].skill_level("Go"), Some(1));
        assert_eq!(participants[0].skill_level("Rust"), Some(1));
    }

    #[test]
    fn test_parse_rejects_invalid_participant() {
        let roster = r#"[
            {"id": "9f3f6a52-3c4e-4d8c-8c43-2f6f0c4a1e04", "name": "Ken", "experience_level": "Beginner"},
            {"id": "9f3f6a52-3c4e-4d8c-8c43-2f6f0c4a1e05", "name": "Barbara", "experience_level": "Beginner", "preferred_team_size": 9}
        ]"#;

        let result = parse_participants(roster);

        assert!(matches!(result, Err(LoaderError::Invalid { index: 1, .. })));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();

        let participants = load_participants(file.path()).await.unwrap();

        assert_eq!(participants[1].name, "Grace");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = load_participants("does/not/exist.json").await;

        assert!(matches!(result, Err(LoaderError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_non_json_extension() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();

        let result = load_participants(file.path()).await;

        assert!(matches!(result, Err(LoaderError::NotJson(_))));
    }
}
