//! Team Match - teammate compatibility scoring for hackathon matchmaking
//!
//! This library scores how well two candidates would work together from
//! their frontend, backend and EQ scores. Skills are banded, complementary
//! profiles earn a bonus, and the result is stretched into a 10-90 range.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Band, Matcher, calculate_match_score, calculate_eq_score};
pub use error::{MatchError, Result};
pub use models::{ScoreVector, WeightVector, MatchBreakdown, Candidate, SkillPair, SourceWeights};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let a = ScoreVector::new(40.0, 40.0, 50.0);
        let score = calculate_match_score(&a, &a, &WeightVector::default()).unwrap();
        assert_eq!(score, 62.5);
    }
}
