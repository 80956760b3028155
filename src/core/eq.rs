use std::collections::HashMap;
use crate::error::{MatchError, Result};
use crate::models::EqBreakdown;

/// Number of questionnaire items
pub const QUESTION_COUNT: usize = 4;
/// Number of answer choices per item
pub const CHOICE_COUNT: usize = 5;
/// Number of EQ parameters scored
pub const PARAMETER_COUNT: usize = 6;

/// Per-question, per-choice deltas applied to each parameter
///
/// Columns: teamwork, pressure handling, problem solving, adaptability,
/// temperament, leadership.
///
/// Q1: team disagreement, Q2: struggling teammate,
/// Q3: last-minute rule change, Q4: code criticism.
const SCORING_MATRIX: [[[i32; PARAMETER_COUNT]; CHOICE_COUNT]; QUESTION_COUNT] = [
    [
        [-2, 0, 2, -1, -2, 2],
        [1, 0, 2, 0, 1, 1],
        [3, 0, 1, 2, 2, 0],
        [1, 0, 0, 0, 1, -2],
        [3, 0, -1, 1, 3, -3],
    ],
    [
        [-3, 1, 0, 0, -3, -3],
        [0, 1, 1, 0, 0, 0],
        [3, -2, 0, 2, 1, 3],
        [2, -3, -2, 0, 0, 2],
        [1, 1, 2, 1, 2, 0],
    ],
    [
        [-3, -2, -2, -3, -3, -3],
        [1, 0, 2, 0, 0, 1],
        [2, 0, 3, 3, 1, 2],
        [2, 0, 1, 2, 2, -1],
        [-3, -3, 4, 3, 0, 3],
    ],
    [
        [-2, 0, 2, -1, -2, 2],
        [0, 0, 1, 0, 0, 1],
        [2, 0, 2, 0, 3, 1],
        [3, 0, 1, 1, 2, -1],
        [1, 0, -2, 0, 1, -3],
    ],
];

/// Score a set of questionnaire answers
///
/// Keys may be written `Q1`, `q1` or `1`; choices run 1-5. Unanswered
/// questions contribute nothing. Raw parameter totals are min-max normalized
/// to 0-100 and the EQ score is their mean, all rounded to two decimals.
pub fn calculate_eq_score(answers: &HashMap<String, i64>) -> Result<EqBreakdown> {
    if answers.is_empty() {
        return Err(MatchError::EmptyQuestionnaire);
    }

    let mut totals = [0i32; PARAMETER_COUNT];
    let mut seen = [false; QUESTION_COUNT];

    for (key, &choice) in answers {
        let question = parse_question(key)?;
        if std::mem::replace(&mut seen[question], true) {
            return Err(MatchError::DuplicateQuestion(format!("Q{}", question + 1)));
        }
        let row = choice_row(question, choice)?;
        for (total, delta) in totals.iter_mut().zip(row.iter()) {
            *total += delta;
        }
    }

    let normalized = normalize(&totals);
    let score = normalized.iter().sum::<f64>() / PARAMETER_COUNT as f64;

    tracing::debug!(answered = answers.len(), ?totals, score, "Scored EQ questionnaire");

    Ok(EqBreakdown {
        teamwork: round2(normalized[0]),
        pressure_handling: round2(normalized[1]),
        problem_solving: round2(normalized[2]),
        adaptability: round2(normalized[3]),
        temperament: round2(normalized[4]),
        leadership: round2(normalized[5]),
        score: round2(score),
    })
}

/// Resolve a questionnaire key to a zero-based question index
fn parse_question(key: &str) -> Result<usize> {
    let trimmed = key.trim();
    let digits = trimmed
        .strip_prefix('Q')
        .or_else(|| trimmed.strip_prefix('q'))
        .unwrap_or(trimmed);

    match digits.parse::<usize>() {
        Ok(n) if (1..=QUESTION_COUNT).contains(&n) => Ok(n - 1),
        _ => Err(MatchError::UnknownQuestion(key.to_string())),
    }
}

fn choice_row(question: usize, choice: i64) -> Result<&'static [i32; PARAMETER_COUNT]> {
    if !(1..=CHOICE_COUNT as i64).contains(&choice) {
        return Err(MatchError::InvalidAnswer {
            question: format!("Q{}", question + 1),
            choice,
        });
    }
    Ok(&SCORING_MATRIX[question][(choice - 1) as usize])
}

/// Min-max normalize raw totals to 0-100; a flat profile maps to 50
fn normalize(totals: &[i32; PARAMETER_COUNT]) -> [f64; PARAMETER_COUNT] {
    let min = totals.iter().copied().min().unwrap_or(0);
    let max = totals.iter().copied().max().unwrap_or(0);

    if max == min {
        return [50.0; PARAMETER_COUNT];
    }

    let span = (max - min) as f64;
    (*totals).map(|total| (total - min) as f64 / span * 100.0)
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_all_middle_choices() {
        let result =
            calculate_eq_score(&answers(&[("Q1", 3), ("Q2", 3), ("Q3", 3), ("Q4", 3)])).unwrap();

        // Raw totals: [10, -2, 6, 7, 7, 6]
        assert_eq!(result.teamwork, 100.0);
        assert_eq!(result.pressure_handling, 0.0);
        assert_eq!(result.problem_solving, 66.67);
        assert_eq!(result.adaptability, 75.0);
        assert_eq!(result.temperament, 75.0);
        assert_eq!(result.leadership, 66.67);
        assert_eq!(result.score, 63.89);
    }

    #[test]
    fn test_partial_questionnaire() {
        // Raw totals: [-2, 0, 2, -1, -2, 2]
        let result = calculate_eq_score(&answers(&[("Q1", 1)])).unwrap();
        assert_eq!(result.pressure_handling, 50.0);
        assert_eq!(result.adaptability, 25.0);
        assert_eq!(result.score, 45.83);
    }

    #[test]
    fn test_key_normalization() {
        let canonical = calculate_eq_score(&answers(&[("Q1", 2), ("Q2", 4)])).unwrap();
        let relaxed = calculate_eq_score(&answers(&[("q1", 2), ("2", 4)])).unwrap();
        assert_eq!(canonical, relaxed);
    }

    #[test]
    fn test_unknown_question() {
        let err = calculate_eq_score(&answers(&[("Q5", 1)])).unwrap_err();
        assert_eq!(err, MatchError::UnknownQuestion("Q5".to_string()));
    }

    #[test]
    fn test_invalid_choice() {
        let err = calculate_eq_score(&answers(&[("q2", 6)])).unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidAnswer {
                question: "Q2".to_string(),
                choice: 6,
            }
        );
    }

    #[test]
    fn test_duplicate_question() {
        let err = calculate_eq_score(&answers(&[("Q1", 2), ("q1", 3)])).unwrap_err();
        assert_eq!(err, MatchError::DuplicateQuestion("Q1".to_string()));
    }

    #[test]
    fn test_empty_answers() {
        assert_eq!(
            calculate_eq_score(&HashMap::new()).unwrap_err(),
            MatchError::EmptyQuestionnaire
        );
    }

    #[test]
    fn test_flat_totals_map_to_midpoint() {
        assert_eq!(normalize(&[3; PARAMETER_COUNT]), [50.0; PARAMETER_COUNT]);
    }

    #[test]
    fn test_score_within_bounds() {
        for choice in 1..=5 {
            let result = calculate_eq_score(&answers(&[
                ("Q1", choice),
                ("Q2", choice),
                ("Q3", choice),
                ("Q4", choice),
            ]))
            .unwrap();
            assert!(result.score >= 0.0 && result.score <= 100.0);
        }
    }
}
