use serde::{Deserialize, Serialize};
use crate::core::scoring::ScoreBreakdown;
use crate::models::domain::{
    ExperienceLevel, InterestCategory, ObjectiveCategory, ParticipantId, RoleCategory, TeamKind,
};

/// Response for the team formation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormTeamsResponse {
    pub teams: Vec<TeamResponse>,
    #[serde(rename = "friendGroups")]
    pub friend_groups: usize,
    #[serde(rename = "totalParticipants")]
    pub total_participants: usize,
    #[serde(rename = "totalTeams")]
    pub total_teams: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// A single team in a formation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResponse {
    pub index: usize,
    pub kind: TeamKind,
    pub size: usize,
    pub affinity: u32,
    pub members: Vec<TeamMember>,
}

/// Member summary with the categories the pipeline grouped on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: ParticipantId,
    pub name: String,
    #[serde(rename = "preferredTeamSize")]
    pub preferred_team_size: u8,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
    pub objective: ObjectiveCategory,
    pub interests: Vec<InterestCategory>,
    pub role: RoleCategory,
}

/// Categories assigned to one participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub id: ParticipantId,
    pub objective: ObjectiveCategory,
    pub interests: Vec<InterestCategory>,
    pub role: RoleCategory,
}

/// Pairwise compatibility result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
