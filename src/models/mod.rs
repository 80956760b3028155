// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ScoreVector, WeightVector, MatchBreakdown, Candidate, RankedTeammate, SkillPair, SourceWeights, EqBreakdown};
pub use requests::{MatchRequest, RankRequest, EqRequest, CombineRequest};
pub use responses::{MatchResponse, RankResponse, CombineResponse, HealthResponse, ErrorResponse};
