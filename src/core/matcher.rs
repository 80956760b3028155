use std::cmp::Ordering;
use crate::core::scoring::calculate_match_breakdown;
use crate::error::Result;
use crate::models::{Candidate, MatchBreakdown, RankedTeammate, ScoreVector, WeightVector};

/// Result of ranking a candidate pool
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedTeammate>,
    pub total_candidates: usize,
}

/// Teammate matcher holding validated skill weights
///
/// # Ranking Stages
/// 1. Drop the seeker and excluded ids
/// 2. Score every remaining candidate against the seeker
/// 3. Sort by match score and truncate
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weights: WeightVector,
}

impl Matcher {
    pub fn new(weights: WeightVector) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: WeightVector::default(),
        }
    }

    pub fn weights(&self) -> WeightVector {
        self.weights
    }

    /// Score a single pair
    pub fn match_pair(&self, a: &ScoreVector, b: &ScoreVector) -> Result<MatchBreakdown> {
        calculate_match_breakdown(a, b, &self.weights)
    }

    /// Rank potential teammates for a seeker
    ///
    /// # Arguments
    /// * `seeker` - The candidate looking for teammates
    /// * `pool` - Potential teammates
    /// * `exclude_ids` - Ids to leave out of the ranking
    /// * `limit` - Maximum number of teammates to return
    ///
    /// Fails on the first invalid pool member, naming its id.
    pub fn rank_teammates(
        &self,
        seeker: &Candidate,
        pool: Vec<Candidate>,
        exclude_ids: &[String],
        limit: usize,
    ) -> Result<RankResult> {
        let total_candidates = pool.len();

        seeker
            .scores
            .validate("scores")
            .map_err(|e| e.in_candidate(&seeker.id))?;

        let mut ranked = pool
            .into_iter()
            .filter(|candidate| candidate.id != seeker.id)
            .filter(|candidate| !exclude_ids.contains(&candidate.id))
            .map(|candidate| -> Result<RankedTeammate> {
                candidate
                    .scores
                    .validate("scores")
                    .map_err(|e| e.in_candidate(&candidate.id))?;

                let breakdown = self
                    .match_pair(&seeker.scores, &candidate.scores)
                    .map_err(|e| e.in_candidate(&candidate.id))?;

                Ok(RankedTeammate {
                    id: candidate.id,
                    match_score: breakdown.match_score,
                    breakdown,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // Sort by score (descending) and then by id for a stable order
        ranked.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        ranked.truncate(limit);

        Ok(RankResult {
            matches: ranked,
            total_candidates,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    fn candidate(id: &str, frontend: f64, backend: f64) -> Candidate {
        Candidate::new(id, ScoreVector::new(frontend, backend, 50.0))
    }

    #[test]
    fn test_new_rejects_degenerate_weights() {
        assert!(Matcher::new(WeightVector::new(0.0, 0.0)).is_err());
        assert!(Matcher::new(WeightVector::new(0.3, 0.7)).is_ok());
    }

    #[test]
    fn test_rank_prefers_complementary_teammate() {
        let matcher = Matcher::with_default_weights();
        let seeker = candidate("seeker", 90.0, 30.0);

        let pool = vec![
            candidate("clone", 90.0, 30.0),
            candidate("backend", 30.0, 90.0),
            candidate("beginner", 10.0, 10.0),
        ];

        let result = matcher.rank_teammates(&seeker, pool, &[], 10).unwrap();

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.matches.len(), 3);
        assert_eq!(result.matches[0].id, "backend");
        for pair in result.matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_rank_skips_seeker_and_excluded() {
        let matcher = Matcher::with_default_weights();
        let seeker = candidate("seeker", 50.0, 50.0);

        let pool = vec![
            candidate("seeker", 50.0, 50.0),
            candidate("a", 60.0, 40.0),
            candidate("b", 40.0, 60.0),
        ];

        let result = matcher
            .rank_teammates(&seeker, pool, &["a".to_string()], 10)
            .unwrap();

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].id, "b");
    }

    #[test]
    fn test_rank_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let seeker = candidate("seeker", 50.0, 50.0);

        let pool: Vec<Candidate> = (0..20)
            .map(|i| candidate(&format!("c{}", i), (i * 5) as f64, 100.0 - (i * 5) as f64))
            .collect();

        let result = matcher.rank_teammates(&seeker, pool, &[], 5).unwrap();

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_rank_ties_break_by_id() {
        let matcher = Matcher::with_default_weights();
        let seeker = candidate("seeker", 50.0, 50.0);

        let pool = vec![candidate("zed", 50.0, 50.0), candidate("amy", 50.0, 50.0)];

        let result = matcher.rank_teammates(&seeker, pool, &[], 10).unwrap();
        assert_eq!(result.matches[0].id, "amy");
        assert_eq!(result.matches[1].id, "zed");
    }

    #[test]
    fn test_rank_names_invalid_candidate() {
        let matcher = Matcher::with_default_weights();
        let seeker = candidate("seeker", 50.0, 50.0);

        let pool = vec![candidate("ok", 50.0, 50.0), candidate("broken", 50.0, 120.0)];

        let err = matcher.rank_teammates(&seeker, pool, &[], 10).unwrap_err();
        match &err {
            MatchError::InvalidCandidate { id, .. } => assert_eq!(id, "broken"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.field().as_deref(), Some("broken.scores.backend"));
    }
}
