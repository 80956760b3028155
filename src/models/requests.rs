use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;
use crate::models::domain::{Candidate, ScoreVector, SkillPair, WeightVector};

/// Request to score a pair of candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(alias = "candidate_a", rename = "candidateA")]
    pub candidate_a: ScoreVector,
    #[serde(alias = "candidate_b", rename = "candidateB")]
    pub candidate_b: ScoreVector,
    #[serde(default)]
    pub weights: Option<WeightVector>,
}

/// Request to rank a pool of potential teammates for one seeker
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub seeker: Candidate,
    #[validate(length(min = 1))]
    pub pool: Vec<Candidate>,
    #[serde(default)]
    #[serde(alias = "exclude_ids", rename = "excludeIds")]
    pub exclude_ids: Vec<String>,
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    pub weights: Option<WeightVector>,
}

/// EQ questionnaire answers, keyed `Q1`..`Q4`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EqRequest {
    #[validate(length(min = 1))]
    pub answers: HashMap<String, i64>,
}

/// Raw per-source signals for one candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombineRequest {
    #[serde(default)]
    pub resume: Option<SkillPair>,
    #[serde(default)]
    pub github: Option<SkillPair>,
    #[serde(default)]
    #[serde(alias = "eq_answers", rename = "eqAnswers")]
    pub eq_answers: Option<HashMap<String, i64>>,
}
