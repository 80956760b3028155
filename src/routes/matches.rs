use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::RankingSettings;
use crate::core::Matcher;
use crate::error::MatchError;
use crate::models::{HealthResponse, MatchRequest, MatchResponse, RankRequest, RankResponse, SourceWeights};
use crate::routes::validation_failed;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub sources: SourceWeights,
    pub ranking: RankingSettings,
}

impl AppState {
    pub fn new(matcher: Matcher, sources: SourceWeights, ranking: RankingSettings) -> Self {
        Self { matcher, sources, ranking }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Matcher::default(), SourceWeights::default(), RankingSettings::default())
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(compute_match))
        .route("/match/rank", web::post().to(rank_teammates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Pairwise match endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "candidateA": {"frontend": 90, "backend": 30, "eq": 50},
///   "candidateB": {"frontend": 30, "backend": 90, "eq": 50},
///   "weights": {"frontend": 0.5, "backend": 0.5}
/// }
/// ```
async fn compute_match(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> Result<HttpResponse, MatchError> {
    // Per-request weights replace the configured ones for this call only
    let matcher = match req.weights {
        Some(weights) => Matcher::new(weights)?,
        None => state.matcher,
    };

    let breakdown = matcher.match_pair(&req.candidate_a, &req.candidate_b)?;

    tracing::debug!(
        "Match computed: score={:.2}, complementary={}, bonus={:.2}",
        breakdown.match_score,
        breakdown.complementary,
        breakdown.complementary_bonus
    );

    Ok(HttpResponse::Ok().json(MatchResponse {
        match_score: breakdown.match_score,
        weights: matcher.weights(),
        breakdown,
    }))
}

/// Teammate ranking endpoint
///
/// POST /api/v1/match/rank
///
/// Request body:
/// ```json
/// {
///   "seeker": {"id": "ana", "scores": {"frontend": 80, "backend": 20, "eq": 60}},
///   "pool": [{"id": "ben", "scores": {"frontend": 25, "backend": 85, "eq": 70}}],
///   "excludeIds": [],
///   "limit": 10
/// }
/// ```
async fn rank_teammates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> Result<HttpResponse, MatchError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return Ok(validation_failed(errors));
    }

    let matcher = match req.weights {
        Some(weights) => Matcher::new(weights)?,
        None => state.matcher,
    };

    // Cap limit to keep responses bounded
    let limit = req
        .limit
        .unwrap_or(state.ranking.default_limit)
        .min(state.ranking.max_limit) as usize;

    let req = req.into_inner();
    let seeker_id = req.seeker.id.clone();

    tracing::info!(
        "Ranking {} candidates for seeker: {}, limit: {}",
        req.pool.len(),
        seeker_id,
        limit
    );

    let result = matcher.rank_teammates(&req.seeker, req.pool, &req.exclude_ids, limit)?;

    tracing::info!(
        "Returning {} teammates for seeker {} (from {} candidates)",
        result.matches.len(),
        seeker_id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(RankResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    }))
}
