use crate::core::band::Band;
use crate::error::Result;
use crate::models::{MatchBreakdown, ScoreVector, WeightVector};

/// Neutral contribution before the band-distance adjustment
const BASE_CONTRIBUTION: f64 = 50.0;

/// Average absolute skill gap needed before complementary profiles earn a bonus
const COMPLEMENTARY_MIN_GAP: f64 = 15.0;
const COMPLEMENTARY_RATE: f64 = 70.0;
const COMPLEMENTARY_CAP: f64 = 45.0;

/// Share of the final blend given to the skill aggregate; EQ takes the rest
const SKILL_SHARE: f64 = 0.75;
const EQ_SHARE: f64 = 0.25;

/// Output range after the linear stretch
const SCALED_MIN: f64 = 10.0;
const SCALED_MAX: f64 = 90.0;

/// Calculate the match score (10-90) for a pair of candidates
///
/// Scoring pipeline:
/// 1. band each frontend/backend score
/// 2. per-skill contribution from band distance
/// 3. weighted frontend/backend aggregate
/// 4. complementary-skill bonus
/// 5. EQ average
/// 6. 75/25 skill/EQ blend
/// 7. stretch to the 10-90 range
pub fn calculate_match_score(
    a: &ScoreVector,
    b: &ScoreVector,
    weights: &WeightVector,
) -> Result<f64> {
    calculate_match_breakdown(a, b, weights).map(|breakdown| breakdown.match_score)
}

/// Same as [`calculate_match_score`], keeping every intermediate value
pub fn calculate_match_breakdown(
    a: &ScoreVector,
    b: &ScoreVector,
    weights: &WeightVector,
) -> Result<MatchBreakdown> {
    // Raw inputs are rejected, never clamped
    a.validate("a")?;
    b.validate("b")?;
    weights.validate()?;

    // Stages 1-2: banded per-skill contributions
    let (frontend_contribution, fa, fb) = skill_contribution(a.frontend, b.frontend)?;
    let (backend_contribution, ba, bb) = skill_contribution(a.backend, b.backend)?;

    // Stage 3: weighted aggregate
    let (w_frontend, w_backend) = weights.normalized();
    let skill_aggregate = (frontend_contribution * w_frontend
        + backend_contribution * w_backend)
        / (w_frontend + w_backend);

    // Stage 4: complementary bonus
    let (complementary, complementary_bonus) = complementary_bonus(a, b);
    let overall_skill = clamp(skill_aggregate + complementary_bonus, 0.0, 100.0);

    // Stage 5: EQ is a plain average, no banding
    let eq_average = (a.eq + b.eq) / 2.0;

    // Stage 6: final blend
    let final_score = clamp(overall_skill * SKILL_SHARE + eq_average * EQ_SHARE, 0.0, 100.0);

    // Stage 7: range expansion
    let match_score = expand_range(final_score);

    Ok(MatchBreakdown {
        frontend_bands: (fa.as_u8(), fb.as_u8()),
        backend_bands: (ba.as_u8(), bb.as_u8()),
        frontend_contribution,
        backend_contribution,
        skill_aggregate,
        complementary,
        complementary_bonus,
        overall_skill,
        eq_average,
        final_score,
        match_score,
    })
}

/// Contribution (0-100) of one skill given both candidates' scores
///
/// Depends only on the distance between the two bands, never on the raw gap.
pub fn skill_contribution(score_a: f64, score_b: f64) -> Result<(f64, Band, Band)> {
    let band_a = Band::classify(score_a)?;
    let band_b = Band::classify(score_b)?;

    let contribution = clamp(
        BASE_CONTRIBUTION + band_adjustment(band_a.distance(band_b)),
        0.0,
        100.0,
    );

    Ok((contribution, band_a, band_b))
}

/// Adjustment applied to the base contribution for a band distance
#[inline]
pub fn band_adjustment(distance: u8) -> f64 {
    match distance {
        0 => 15.0,
        1 => 5.0,
        2 => -10.0,
        _ => -20.0,
    }
}

/// Bonus for pairs where each candidate leads in a different skill
///
/// Returns whether the pair is complementary and the bonus earned. Identical
/// scores give a zero product and never count as complementary.
pub fn complementary_bonus(a: &ScoreVector, b: &ScoreVector) -> (bool, f64) {
    let diff_frontend = a.frontend - b.frontend;
    let diff_backend = a.backend - b.backend;
    let complementary = diff_frontend * diff_backend < 0.0;

    if !complementary {
        return (false, 0.0);
    }

    let avg_diff = (diff_frontend.abs() + diff_backend.abs()) / 2.0;
    if avg_diff < COMPLEMENTARY_MIN_GAP {
        return (true, 0.0);
    }

    (true, (avg_diff * COMPLEMENTARY_RATE / 100.0).min(COMPLEMENTARY_CAP))
}

/// Stretch a final score around the expected mean into [10, 90]
#[inline]
pub fn expand_range(final_score: f64) -> f64 {
    clamp(2.0 * final_score - 60.0, SCALED_MIN, SCALED_MAX)
}

#[inline]
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
