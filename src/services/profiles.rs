use crate::models::CandidateProfile;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the candidate pool
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse profile file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory candidate pool
///
/// Profiles come from a JSON file produced by the GitHub scraping pipeline.
/// The pool is loaded once at startup and is read-only afterwards; the
/// matcher receives a copy of the slice per request.
pub struct ProfileStore {
    profiles: Vec<CandidateProfile>,
    source: PathBuf,
}

impl ProfileStore {
    /// Load the candidate pool from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProfileStoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let profiles: Vec<CandidateProfile> = serde_json::from_str(&raw)?;

        tracing::info!(
            "Loaded {} candidate profiles from {}",
            profiles.len(),
            path.display()
        );

        Ok(Self {
            profiles,
            source: path.to_path_buf(),
        })
    }

    /// Empty pool for when no profile file is available
    pub fn empty<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            profiles: Vec::new(),
            source: source.into(),
        }
    }

    /// Build a store from already-loaded profiles
    pub fn with_profiles(profiles: Vec<CandidateProfile>) -> Self {
        Self {
            profiles,
            source: PathBuf::new(),
        }
    }

    pub fn profiles(&self) -> &[CandidateProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
