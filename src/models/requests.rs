use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{GroupingAxis, Participant};

/// Request to form teams from an inline roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FormTeamsRequest {
    #[validate(length(min = 1), nested)]
    pub participants: Vec<Participant>,
    #[validate(range(min = 1, max = 16))]
    #[serde(alias = "team_size", rename = "teamSize", default)]
    pub team_size: Option<usize>,
    #[serde(default)]
    pub axes: Option<Vec<GroupingAxis>>,
}

/// Request to classify participants without forming teams
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClassifyRequest {
    #[validate(length(min = 1), nested)]
    pub participants: Vec<Participant>,
}

/// Request to score a single pair of participants
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(nested)]
    pub first: Participant,
    #[validate(nested)]
    pub second: Participant,
}
