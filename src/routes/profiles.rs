use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{blend_skills, build_score_vector, calculate_eq_score};
use crate::error::MatchError;
use crate::models::{CombineRequest, CombineResponse, EqRequest};
use crate::routes::{validation_failed, AppState};

/// Configure candidate profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/eq/score", web::post().to(score_eq))
        .route("/profile/combine", web::post().to(combine_profile));
}

/// EQ questionnaire endpoint
///
/// POST /api/v1/eq/score
///
/// Request body:
/// ```json
/// { "answers": { "Q1": 3, "Q2": 2, "Q3": 4, "Q4": 1 } }
/// ```
async fn score_eq(req: web::Json<EqRequest>) -> Result<HttpResponse, MatchError> {
    if let Err(errors) = req.validate() {
        return Ok(validation_failed(errors));
    }

    let breakdown = calculate_eq_score(&req.answers)?;
    Ok(HttpResponse::Ok().json(breakdown))
}

/// Combine per-source signals for one candidate
///
/// POST /api/v1/profile/combine
///
/// Request body:
/// ```json
/// {
///   "resume": {"frontend": 60, "backend": 30},
///   "github": {"frontend": 90, "backend": 60},
///   "eqAnswers": {"Q1": 3, "Q2": 3, "Q3": 3, "Q4": 3}
/// }
/// ```
async fn combine_profile(
    state: web::Data<AppState>,
    req: web::Json<CombineRequest>,
) -> Result<HttpResponse, MatchError> {
    let skills = blend_skills(req.resume.as_ref(), req.github.as_ref(), &state.sources)?;

    let eq_score = req
        .eq_answers
        .as_ref()
        .map(calculate_eq_score)
        .transpose()?
        .map(|breakdown| breakdown.score);

    let scores = match (skills.as_ref(), eq_score) {
        (Some(skills), Some(eq)) => Some(build_score_vector(skills, eq)?),
        _ => None,
    };

    tracing::debug!(
        "Combined profile: skills={:?}, eq={:?}",
        skills,
        eq_score
    );

    Ok(HttpResponse::Ok().json(CombineResponse {
        final_frontend: skills.map(|s| s.frontend),
        final_backend: skills.map(|s| s.backend),
        final_eq_score: eq_score,
        scores,
    }))
}
