use thiserror::Error;

/// Errors produced by the scoring core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("score out of range for {field}: {value} (expected 0-100)")]
    InvalidScore { field: String, value: f64 },

    #[error("invalid weight for {field}: {value} (expected a finite, non-negative number)")]
    InvalidWeight { field: String, value: f64 },

    #[error("weights for {0} sum to zero")]
    DegenerateWeights(String),

    #[error("candidate {id}: {source}")]
    InvalidCandidate {
        id: String,
        #[source]
        source: Box<MatchError>,
    },

    #[error("unknown questionnaire key: {0}")]
    UnknownQuestion(String),

    #[error("question {0} answered more than once")]
    DuplicateQuestion(String),

    #[error("invalid answer for {question}: {choice} (expected 1-5)")]
    InvalidAnswer { question: String, choice: i64 },

    #[error("questionnaire has no answers")]
    EmptyQuestionnaire,
}

impl MatchError {
    /// Name of the input that caused the error, when there is one
    pub fn field(&self) -> Option<String> {
        match self {
            MatchError::InvalidScore { field, .. } | MatchError::InvalidWeight { field, .. } => {
                Some(field.clone())
            }
            MatchError::DegenerateWeights(field) => Some(field.clone()),
            MatchError::InvalidCandidate { id, source } => Some(match source.field() {
                Some(inner) => format!("{}.{}", id, inner),
                None => id.clone(),
            }),
            MatchError::UnknownQuestion(question) | MatchError::DuplicateQuestion(question) => {
                Some(question.clone())
            }
            MatchError::InvalidAnswer { question, .. } => Some(question.clone()),
            MatchError::EmptyQuestionnaire => Some("answers".to_string()),
        }
    }

    /// Short machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::InvalidScore { .. } => "invalid_score",
            MatchError::InvalidWeight { .. } | MatchError::DegenerateWeights(_) => "invalid_weight",
            MatchError::InvalidCandidate { source, .. } => source.code(),
            MatchError::UnknownQuestion(_)
            | MatchError::DuplicateQuestion(_)
            | MatchError::InvalidAnswer { .. }
            | MatchError::EmptyQuestionnaire => "invalid_answers",
        }
    }

    pub(crate) fn in_candidate(self, id: &str) -> Self {
        MatchError::InvalidCandidate {
            id: id.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

/// Reject values outside [0, 100], including NaN and infinities
pub(crate) fn check_score(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(MatchError::InvalidScore {
            field: field.to_string(),
            value,
        })
    }
}

/// Reject negative or non-finite weights
pub(crate) fn check_weight(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MatchError::InvalidWeight {
            field: field.to_string(),
            value,
        })
    }
}
