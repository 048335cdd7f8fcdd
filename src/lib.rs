//! Team Former - Team formation service for hackathon and datathon rosters
//!
//! This library partitions a roster of registered participants into teams.
//! Friend groups are kept together, the rest are grouped by objective,
//! interest and spoken language, then bucketed by preferred team size.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{validate_teams, Classifier, CompatibilityScorer, Formation, FormationError, FormationSettings, TeamFormer};
pub use crate::models::{Classification, GroupingAxis, Participant, ParticipantId, ScoringWeights, Team, TeamKind};
pub use crate::services::{load_participants, parse_participants};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let formation = TeamFormer::default().form_teams(&[]).unwrap();
        assert!(validate_teams(&[], &formation.teams).is_ok());
    }
}
