use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;
use std::path::PathBuf;
use validator::Validate;
use crate::core::{Formation, FormationError, FormationSettings, TeamFormer};
use crate::models::{
    ClassificationResponse, ClassifyRequest, CompatibilityRequest, CompatibilityResponse,
    ErrorResponse, FormTeamsRequest, FormTeamsResponse, HealthResponse, Participant, ParticipantId,
    TeamMember, TeamResponse,
};
use crate::services::{load_participants, LoaderError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub former: TeamFormer,
    pub roster_path: Option<PathBuf>,
}

/// Configure all team-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/teams/form", web::post().to(form_teams))
        .route("/teams/roster", web::get().to(form_roster_teams))
        .route("/participants/classify", web::post().to(classify_participants))
        .route("/participants/compatibility", web::post().to(compatibility));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Form teams endpoint
///
/// POST /api/v1/teams/form
///
/// Request body:
/// ```json
/// {
///   "participants": [{ "id": "uuid", "name": "string", "experience_level": "Beginner", ... }],
///   "teamSize": 4,
///   "axes": ["objective_interest", "language_rarity"]
/// }
/// ```
async fn form_teams(
    state: web::Data<AppState>,
    req: web::Json<FormTeamsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for form_teams request: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let defaults = state.former.settings();
    let settings = FormationSettings {
        target_team_size: req.team_size.unwrap_or(defaults.target_team_size),
        axes: req.axes.unwrap_or_else(|| defaults.axes.clone()),
    };
    let former = state.former.with_settings(settings);

    tracing::info!(
        "Forming teams for {} participants, team size: {}",
        req.participants.len(),
        former.settings().target_team_size
    );

    run_formation(&former, &req.participants)
}

/// Form teams from the configured roster file
///
/// GET /api/v1/teams/roster
async fn form_roster_teams(state: web::Data<AppState>) -> impl Responder {
    let Some(path) = state.roster_path.as_ref() else {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "No roster configured".to_string(),
            message: "Set roster.path or ROSTER_PATH to serve a roster file".to_string(),
            status_code: 404,
        });
    };

    let participants = match load_participants(path).await {
        Ok(participants) => participants,
        Err(e) => {
            tracing::error!("Failed to load roster from {}: {}", path.display(), e);
            let error = match e {
                LoaderError::Invalid { .. } => "Invalid roster",
                _ => "Failed to load roster",
            };
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: error.to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    run_formation(&state.former, &participants)
}

fn run_formation(former: &TeamFormer, participants: &[Participant]) -> HttpResponse {
    match former.form_teams(participants) {
        Ok(formation) => {
            let response = build_response(former, participants, &formation);

            tracing::info!(
                "Formed {} teams ({} friend groups) from {} participants",
                response.total_teams,
                response.friend_groups,
                response.total_participants
            );

            HttpResponse::Ok().json(response)
        }
        Err(FormationError::DuplicateRosterId(id)) => {
            tracing::info!("Rejected roster with duplicate participant {}", id);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Duplicate participant id".to_string(),
                message: FormationError::DuplicateRosterId(id).to_string(),
                status_code: 400,
            })
        }
        Err(e) => {
            tracing::error!("Team formation produced an invalid partition: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Team formation failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

fn build_response(
    former: &TeamFormer,
    participants: &[Participant],
    formation: &Formation,
) -> FormTeamsResponse {
    let by_id: HashMap<ParticipantId, &Participant> = participants
        .iter()
        .map(|participant| (participant.id, participant))
        .collect();

    let teams: Vec<TeamResponse> = formation
        .teams
        .iter()
        .enumerate()
        .map(|(index, team)| {
            let members: Vec<&Participant> = team
                .members
                .iter()
                .filter_map(|id| by_id.get(id).copied())
                .collect();

            TeamResponse {
                index: index + 1,
                kind: team.kind,
                size: team.len(),
                affinity: former.scorer().team_affinity(&members),
                members: members
                    .iter()
                    .map(|participant| {
                        let class = formation
                            .classifications
                            .get(&participant.id)
                            .cloned()
                            .unwrap_or_default();
                        TeamMember {
                            id: participant.id,
                            name: participant.name.clone(),
                            preferred_team_size: participant.preferred_team_size,
                            experience_level: participant.experience_level,
                            objective: class.objective,
                            interests: class.interests,
                            role: class.role,
                        }
                    })
                    .collect(),
            }
        })
        .collect();

    FormTeamsResponse {
        total_teams: teams.len(),
        teams,
        friend_groups: formation.friend_group_count,
        total_participants: formation.total_participants,
        generated_at: chrono::Utc::now(),
    }
}

/// Classify participants endpoint
///
/// POST /api/v1/participants/classify
async fn classify_participants(
    state: web::Data<AppState>,
    req: web::Json<ClassifyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let classifier = state.former.classifier();
    let response: Vec<ClassificationResponse> = req
        .participants
        .iter()
        .map(|participant| {
            let class = classifier.classify(participant);
            ClassificationResponse {
                id: participant.id,
                objective: class.objective,
                interests: class.interests,
                role: class.role,
            }
        })
        .collect();

    tracing::debug!("Classified {} participants", response.len());

    HttpResponse::Ok().json(response)
}

/// Pairwise compatibility endpoint
///
/// POST /api/v1/participants/compatibility
///
/// Request body:
/// ```json
/// { "first": { ... }, "second": { ... } }
/// ```
async fn compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let breakdown = state.former.scorer().breakdown(&req.first, &req.second);

    HttpResponse::Ok().json(CompatibilityResponse {
        score: breakdown.total(),
        breakdown,
    })
}
