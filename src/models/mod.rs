// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Classification, ExperienceLevel, GroupingAxis, InterestCategory, ObjectiveCategory, Participant,
    ParticipantId, RoleCategory, ScoringWeights, Team, TeamKind,
};
pub use requests::{ClassifyRequest, CompatibilityRequest, FormTeamsRequest};
pub use responses::{
    ClassificationResponse, CompatibilityResponse, ErrorResponse, FormTeamsResponse, HealthResponse,
    TeamMember, TeamResponse,
};
