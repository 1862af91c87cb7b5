use serde::{Deserialize, Serialize};

/// Candidate profile sourced from the GitHub scraping pipeline
///
/// Every field is optional in the source JSON; deserialization defaults
/// missing values so a sparse profile still scores instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub github_profile_url: Option<String>,
    #[serde(default)]
    pub primary_language: Option<String>,
    /// Most-used languages first
    #[serde(default)]
    pub languages: Vec<String>,
    /// Repository topics and scraped skill tags
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub tech_stack_summary: Option<String>,
    /// "Junior", "Mid" or "Senior" (case-insensitive)
    #[serde(default)]
    pub estimated_experience_level: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub total_stars: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub has_popular_repos: bool,
    #[serde(default)]
    pub open_source_contributor: bool,
}

impl CandidateProfile {
    /// Helper to get the experience level string, defaulting to "Mid"
    pub fn experience_level(&self) -> &str {
        self.estimated_experience_level.as_deref().unwrap_or("Mid")
    }

    /// Lowercased concatenation of bio and tech stack summary
    pub fn bio_text(&self) -> String {
        let bio = self.bio.as_deref().unwrap_or("");
        let stack = self.tech_stack_summary.as_deref().unwrap_or("");
        format!("{} {}", bio, stack).to_lowercase()
    }
}

/// Seniority tiers, ordered junior < mid < senior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Parse a level string case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "junior" => Some(Self::Junior),
            "mid" => Some(Self::Mid),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }

    /// Position in the junior < mid < senior ordering
    pub fn rank(self) -> i8 {
        match self {
            Self::Junior => 0,
            Self::Mid => 1,
            Self::Senior => 2,
        }
    }

    /// Title-case label for reason strings
    pub fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
        }
    }
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        Self::Mid
    }
}

/// Structured hiring requirements extracted from a job description
///
/// Built fresh per match call and echoed back in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    /// Detected technology keywords, lowercase, deduplicated
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    /// Parsed from an "N+ years" pattern, if present
    pub min_years: Option<u32>,
    pub prefers_open_source: bool,
    /// First matched location keyword, if any
    pub location: Option<String>,
    /// Lowercased source text, kept for downstream keyword checks
    pub raw_text: String,
}

/// A candidate scored against one set of job requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: CandidateProfile,
    /// Weighted and bonused suitability, 0-100
    pub match_score: f64,
    /// At most 4 human-readable reasons, highest-value first
    pub match_reasons: Vec<String>,
    pub matched_skills: Vec<String>,
    pub skill_score: f64,
    pub experience_score: f64,
    pub activity_score: f64,
}

/// Full result of one matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Candidates scoring above the match threshold, counted before windowing
    pub total_matches: usize,
    /// First 200 characters of the query text, for diagnostics
    pub search_query: String,
    pub requirements: JobRequirements,
    pub top_candidates: Vec<ScoredCandidate>,
    pub showing: usize,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill: f64,
    pub experience: f64,
    pub activity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.5,
            experience: 0.3,
            activity: 0.2,
        }
    }
}
