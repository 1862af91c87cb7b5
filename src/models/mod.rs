// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, ExperienceLevel, JobRequirements, MatchOutcome, ScoredCandidate,
    ScoringWeights,
};
pub use requests::MatchSearchRequest;
pub use responses::{ErrorResponse, HealthResponse, PoolResponse};
