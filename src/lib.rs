//! Talent Algo - candidate-to-job matching service
//!
//! This library implements the scoring engine behind the recruiting
//! assistant's candidate search: it extracts structured hiring requirements
//! from free-text job descriptions and ranks GitHub-derived candidate
//! profiles against them with weighted multi-factor scoring.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{extract_requirements, Matcher, Vocabulary};
pub use crate::models::{
    CandidateProfile, ExperienceLevel, JobRequirements, MatchOutcome, ScoredCandidate,
    ScoringWeights,
};
pub use crate::services::ProfileStore;
