use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchBreakdown, RankedTeammate, ScoreVector, WeightVector};

/// Response for the pairwise match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub match_score: f64,
    pub weights: WeightVector,
    pub breakdown: MatchBreakdown,
}

/// Response for the teammate ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub matches: Vec<RankedTeammate>,
    pub total_candidates: usize,
}

/// Combined per-candidate scores
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombineResponse {
    pub final_frontend: Option<f64>,
    pub final_backend: Option<f64>,
    pub final_eq_score: Option<f64>,
    /// Match-ready vector, present only when every signal is available
    pub scores: Option<ScoreVector>,
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
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
