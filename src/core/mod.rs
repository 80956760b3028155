// Core algorithm exports
pub mod band;
pub mod blend;
pub mod eq;
pub mod matcher;
pub mod scoring;

pub use band::Band;
pub use blend::{blend_skills, build_score_vector};
pub use eq::calculate_eq_score;
pub use matcher::{Matcher, RankResult};
pub use scoring::{calculate_match_score, calculate_match_breakdown};
