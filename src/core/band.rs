use serde::{Deserialize, Serialize};
use crate::error::{MatchError, Result};

/// Upper (inclusive) edges of bands 1-3; band 4 runs to 100
const BAND_EDGES: [f64; 3] = [36.0, 66.0, 86.0];

/// Proficiency tier of a single skill score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Novice = 1,
    Developing = 2,
    Proficient = 3,
    Expert = 4,
}

impl Band {
    /// Classify a score in [0, 100]
    ///
    /// Bands are half-open on the lower edge:
    /// `[0, 36]`, `(36, 66]`, `(66, 86]`, `(86, 100]`.
    pub fn classify(score: f64) -> Result<Self> {
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(MatchError::InvalidScore {
                field: "score".to_string(),
                value: score,
            });
        }

        let band = if score <= BAND_EDGES[0] {
            Band::Novice
        } else if score <= BAND_EDGES[1] {
            Band::Developing
        } else if score <= BAND_EDGES[2] {
            Band::Proficient
        } else {
            Band::Expert
        };

        Ok(band)
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Number of tiers between two bands
    #[inline]
    pub fn distance(self, other: Band) -> u8 {
        self.as_u8().abs_diff(other.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(Band::classify(0.0).unwrap(), Band::Novice);
        assert_eq!(Band::classify(100.0).unwrap(), Band::Expert);
    }

    #[test]
    fn test_edges_are_inclusive_above() {
        assert_eq!(Band::classify(36.0).unwrap(), Band::Novice);
        assert_eq!(Band::classify(36.5).unwrap(), Band::Developing);
        assert_eq!(Band::classify(66.0).unwrap(), Band::Developing);
        assert_eq!(Band::classify(66.01).unwrap(), Band::Proficient);
        assert_eq!(Band::classify(86.0).unwrap(), Band::Proficient);
        assert_eq!(Band::classify(86.5).unwrap(), Band::Expert);
    }

    #[test]
    fn test_no_borderline_special_case() {
        // 35 and 36 share band 1; 36 and 37 do not
        assert_eq!(Band::classify(35.0).unwrap(), Band::classify(36.0).unwrap());
        assert_ne!(Band::classify(36.0).unwrap(), Band::classify(37.0).unwrap());
    }

    #[test]
    fn test_out_of_range() {
        assert!(Band::classify(-1.0).is_err());
        assert!(Band::classify(150.0).is_err());
        assert!(Band::classify(f64::NAN).is_err());
    }

    #[test]
    fn test_distance() {
        assert_eq!(Band::Novice.distance(Band::Expert), 3);
        assert_eq!(Band::Expert.distance(Band::Novice), 3);
        assert_eq!(Band::Developing.distance(Band::Developing), 0);
    }
}
