use crate::core::{
    activity::calculate_activity_score, experience::calculate_experience_match,
    extract::extract_requirements, skills::calculate_skill_match, vocab::Vocabulary,
};
use crate::models::{
    CandidateProfile, JobRequirements, MatchOutcome, ScoredCandidate, ScoringWeights,
};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Scores above this count toward `total_matches`
pub const MATCH_THRESHOLD: f64 = 50.0;

/// The sampling window holds up to this many times the requested limit
pub const WINDOW_MULTIPLIER: usize = 5;

/// Post-weighting bonus for a location hit
pub const LOCATION_BONUS: f64 = 0.05;

/// Post-weighting bonus when open source is preferred and the candidate contributes
pub const OPEN_SOURCE_BONUS: f64 = 0.05;

/// Echoed query text is clipped to this many characters
const SEARCH_QUERY_CHARS: usize = 200;

/// Main matching orchestrator
///
/// # Pipeline stages
/// 1. Requirement extraction (plus title skills, if a title is given)
/// 2. Per-candidate component scoring and weighting
/// 3. Ranking
/// 4. Windowed random selection for result diversity
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    vocab: Vocabulary,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            vocab: Vocabulary::new(),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Extract structured requirements from job text
    pub fn extract(&self, job_description: &str) -> JobRequirements {
        extract_requirements(&self.vocab, job_description)
    }

    /// Match candidates against a job description and return ranked results
    ///
    /// Repeated identical queries over a pool larger than `limit *
    /// WINDOW_MULTIPLIER` may return different high-scoring pages; that
    /// diversity is intended. Use [`Matcher::match_candidates_with_rng`]
    /// with a seeded generator for reproducible output.
    pub fn match_candidates(
        &self,
        candidates: Vec<CandidateProfile>,
        job_description: &str,
        job_title: &str,
        limit: usize,
    ) -> MatchOutcome {
        self.match_candidates_with_rng(
            candidates,
            job_description,
            job_title,
            limit,
            &mut rand::thread_rng(),
        )
    }

    /// Same as [`Matcher::match_candidates`] with an injected random source
    pub fn match_candidates_with_rng<R: Rng>(
        &self,
        candidates: Vec<CandidateProfile>,
        job_description: &str,
        job_title: &str,
        limit: usize,
        rng: &mut R,
    ) -> MatchOutcome {
        let mut requirements = extract_requirements(&self.vocab, job_description);

        // Title skills join the requirement set, deduplicated
        if !job_title.is_empty() {
            let title_requirements = extract_requirements(&self.vocab, job_title);
            let mut seen: HashSet<String> = requirements.skills.iter().cloned().collect();
            for skill in title_requirements.skills {
                if seen.insert(skill.clone()) {
                    requirements.skills.push(skill);
                }
            }
        }

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|candidate| self.score_candidate(candidate, &requirements))
            .collect();

        scored.sort_by(compare_scores);

        // Counted over the full pool, before the window is applied
        let total_matches = scored
            .iter()
            .filter(|entry| entry.match_score > MATCH_THRESHOLD)
            .count();

        // Randomize within the top window so repeated searches surface
        // more variety while still favoring high scorers
        let window_size = scored
            .len()
            .min(std::cmp::max(limit * WINDOW_MULTIPLIER, limit));
        scored.truncate(window_size);

        let mut selected = if scored.len() <= limit {
            scored
        } else {
            let picked: HashSet<usize> = rand::seq::index::sample(rng, scored.len(), limit)
                .into_iter()
                .collect();
            scored
                .into_iter()
                .enumerate()
                .filter(|(index, _)| picked.contains(index))
                .map(|(_, entry)| entry)
                .collect()
        };
        selected.sort_by(compare_scores);

        let search_query: String = job_description.chars().take(SEARCH_QUERY_CHARS).collect();
        let showing = selected.len();

        MatchOutcome {
            total_matches,
            search_query,
            requirements,
            top_candidates: selected,
            showing,
        }
    }

    /// Score one candidate against extracted requirements
    fn score_candidate(
        &self,
        candidate: CandidateProfile,
        requirements: &JobRequirements,
    ) -> ScoredCandidate {
        let (skill_score, matched_skills) =
            calculate_skill_match(&self.vocab, &candidate, &requirements.skills);
        let (experience_score, experience_reason) =
            calculate_experience_match(&candidate, requirements);
        let (activity_score, activity_reasons) = calculate_activity_score(&candidate);

        let mut total = skill_score * self.weights.skill
            + experience_score * self.weights.experience
            + activity_score * self.weights.activity;

        let mut match_reasons = Vec::new();
        if !matched_skills.is_empty() {
            let listed: Vec<&str> = matched_skills.iter().take(5).map(String::as_str).collect();
            match_reasons.push(format!("✓ Skills: {}", listed.join(", ")));
        }
        match_reasons.push(format!("✓ {}", experience_reason));
        for reason in activity_reasons.iter().take(2) {
            match_reasons.push(format!("✓ {}", reason));
        }

        if let (Some(required_location), Some(candidate_location)) =
            (&requirements.location, &candidate.location)
        {
            if candidate_location.to_lowercase().contains(required_location) {
                total += LOCATION_BONUS;
                match_reasons.push(format!("✓ Location: {}", candidate_location));
            }
        }

        if requirements.prefers_open_source && candidate.open_source_contributor {
            total += OPEN_SOURCE_BONUS;
        }

        let total = total.min(1.0);
        match_reasons.truncate(4);

        ScoredCandidate {
            match_score: round1(total * 100.0),
            match_reasons,
            matched_skills,
            skill_score: round1(skill_score * 100.0),
            experience_score: round1(experience_score * 100.0),
            activity_score: round1(activity_score * 100.0),
            candidate,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn compare_scores(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.match_score
        .partial_cmp(&a.match_score)
        .unwrap_or(Ordering::Equal)
}

#[inline]
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
