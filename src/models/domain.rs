use serde::{Deserialize, Serialize};
use crate::error::{check_score, check_weight, MatchError, Result};

/// A candidate's three skill signals, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub frontend: f64,
    pub backend: f64,
    pub eq: f64,
}

impl ScoreVector {
    pub fn new(frontend: f64, backend: f64, eq: f64) -> Self {
        Self { frontend, backend, eq }
    }

    /// Check every dimension, naming the failing one as `{label}.{dimension}`
    pub fn validate(&self, label: &str) -> Result<()> {
        check_score(&format!("{}.frontend", label), self.frontend)?;
        check_score(&format!("{}.backend", label), self.backend)?;
        check_score(&format!("{}.eq", label), self.eq)?;
        Ok(())
    }
}

/// Relative weights of the frontend and backend contributions
///
/// EQ is not weighted here: it always takes a fixed quarter of the final blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    #[serde(default = "default_skill_weight")]
    pub frontend: f64,
    #[serde(default = "default_skill_weight")]
    pub backend: f64,
}

fn default_skill_weight() -> f64 { 0.5 }

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            frontend: default_skill_weight(),
            backend: default_skill_weight(),
        }
    }
}

impl WeightVector {
    pub fn new(frontend: f64, backend: f64) -> Self {
        Self { frontend, backend }
    }

    pub fn validate(&self) -> Result<()> {
        check_weight("weights.frontend", self.frontend)?;
        check_weight("weights.backend", self.backend)?;
        if self.frontend.max(self.backend) <= 0.0 {
            return Err(MatchError::DegenerateWeights("weights".to_string()));
        }
        Ok(())
    }

    /// Weights rescaled so the larger one is 1
    ///
    /// Keeps weighted sums finite for any valid weights, however large.
    pub fn normalized(&self) -> (f64, f64) {
        scale_pair(self.frontend, self.backend)
    }
}

/// Divide both weights by the larger one; callers validate first
fn scale_pair(first: f64, second: f64) -> (f64, f64) {
    let largest = first.max(second);
    if largest <= 0.0 {
        return (first, second);
    }
    (first / largest, second / largest)
}

/// Every intermediate value of a pairwise match computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub frontend_bands: (u8, u8),
    pub backend_bands: (u8, u8),
    pub frontend_contribution: f64,
    pub backend_contribution: f64,
    /// Weighted skill aggregate before the complementary bonus
    pub skill_aggregate: f64,
    pub complementary: bool,
    pub complementary_bonus: f64,
    /// Skill aggregate after the bonus, clamped to [0, 100]
    pub overall_skill: f64,
    pub eq_average: f64,
    pub final_score: f64,
    /// Range-expanded score in [10, 90]
    pub match_score: f64,
}

/// A pool member considered for teammate ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub scores: ScoreVector,
}

impl Candidate {
    pub fn new(id: impl Into<String>, scores: ScoreVector) -> Self {
        Self { id: id.into(), scores }
    }
}

/// Ranked teammate suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTeammate {
    pub id: String,
    pub match_score: f64,
    pub breakdown: MatchBreakdown,
}

/// Frontend/backend scores produced by a single source (resume or GitHub)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillPair {
    pub frontend: f64,
    pub backend: f64,
}

impl SkillPair {
    pub fn new(frontend: f64, backend: f64) -> Self {
        Self { frontend, backend }
    }

    pub fn validate(&self, label: &str) -> Result<()> {
        check_score(&format!("{}.frontend", label), self.frontend)?;
        check_score(&format!("{}.backend", label), self.backend)?;
        Ok(())
    }
}

/// Relative trust placed in each skill source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceWeights {
    pub github: f64,
    pub resume: f64,
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            github: 2.0,
            resume: 1.0,
        }
    }
}

impl SourceWeights {
    pub fn validate(&self) -> Result<()> {
        check_weight("sources.github", self.github)?;
        check_weight("sources.resume", self.resume)?;
        if self.github.max(self.resume) <= 0.0 {
            return Err(MatchError::DegenerateWeights("sources".to_string()));
        }
        Ok(())
    }

    /// `(github, resume)` rescaled so the larger one is 1
    pub fn normalized(&self) -> (f64, f64) {
        scale_pair(self.github, self.resume)
    }
}

/// Normalized EQ questionnaire result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EqBreakdown {
    pub teamwork: f64,
    pub pressure_handling: f64,
    pub problem_solving: f64,
    pub adaptability: f64,
    pub temperament: f64,
    pub leadership: f64,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightVector::default();
        assert_eq!(weights.frontend, 0.5);
        assert_eq!(weights.backend, 0.5);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_zero_weights_rejected() {
        let err = WeightVector::new(0.0, 0.0).validate().unwrap_err();
        assert_eq!(err, MatchError::DegenerateWeights("weights".to_string()));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = WeightVector::new(-0.1, 1.0).validate().unwrap_err();
        assert_eq!(err.field().as_deref(), Some("weights.frontend"));
    }

    #[test]
    fn test_huge_weights_normalize_to_unit_scale() {
        assert_eq!(WeightVector::new(1e308, 1e308).normalized(), (1.0, 1.0));
        assert_eq!(WeightVector::new(1e308, 0.0).normalized(), (1.0, 0.0));
        assert_eq!(WeightVector::new(0.3, 0.6).normalized(), (0.5, 1.0));
        assert!(WeightVector::new(f64::MAX, f64::MAX).validate().is_ok());
    }

    #[test]
    fn test_source_weights_normalized() {
        assert_eq!(SourceWeights::default().normalized(), (1.0, 0.5));
    }

    #[test]
    fn test_score_vector_names_field() {
        let err = ScoreVector::new(40.0, 40.0, 101.0).validate("b").unwrap_err();
        assert_eq!(err.field().as_deref(), Some("b.eq"));
    }

    #[test]
    fn test_weights_partial_json_uses_defaults() {
        let weights: WeightVector = serde_json::from_str(r#"{"frontend": 0.7}"#).unwrap();
        assert_eq!(weights, WeightVector::new(0.7, 0.5));
    }
}
