use crate::error::{check_score, Result};
use crate::models::{ScoreVector, SkillPair, SourceWeights};

/// Combine resume and GitHub skill signals into a single pair
///
/// Both present: per-skill weighted average. One present: used as-is.
/// Neither: `None`.
pub fn blend_skills(
    resume: Option<&SkillPair>,
    github: Option<&SkillPair>,
    weights: &SourceWeights,
) -> Result<Option<SkillPair>> {
    weights.validate()?;
    if let Some(resume) = resume {
        resume.validate("resume")?;
    }
    if let Some(github) = github {
        github.validate("github")?;
    }

    let blended = match (resume, github) {
        (Some(resume), Some(github)) => {
            let (w_github, w_resume) = weights.normalized();
            let total = w_github + w_resume;
            Some(SkillPair {
                frontend: (github.frontend * w_github + resume.frontend * w_resume) / total,
                backend: (github.backend * w_github + resume.backend * w_resume) / total,
            })
        }
        (Some(only), None) | (None, Some(only)) => Some(*only),
        (None, None) => None,
    };

    Ok(blended)
}

/// Attach an EQ score to blended skills, producing a match-ready vector
pub fn build_score_vector(skills: &SkillPair, eq: f64) -> Result<ScoreVector> {
    let vector = ScoreVector::new(skills.frontend, skills.backend, check_score("eq", eq)?);
    vector.validate("candidate")?;
    Ok(vector)
}
