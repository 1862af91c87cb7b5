use crate::core::vocab::Vocabulary;
use crate::models::CandidateProfile;
use std::collections::HashSet;
use strsim::normalized_levenshtein;

/// Minimum normalized similarity for a fuzzy skill match
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Score how well a candidate covers the required skills
///
/// Returns the fraction of required skills matched and the matched subset.
/// A required skill matches at most once, via the first of: direct
/// membership in the synonym-expanded candidate set, a registered synonym,
/// or a fuzzy match above [`FUZZY_THRESHOLD`].
pub fn calculate_skill_match(
    vocab: &Vocabulary,
    candidate: &CandidateProfile,
    required_skills: &[String],
) -> (f64, Vec<String>) {
    if required_skills.is_empty() {
        // Neutral score: no specific ask is not a zero
        return (0.5, Vec::new());
    }

    let mut candidate_skills: HashSet<String> = HashSet::new();
    for language in &candidate.languages {
        candidate_skills.insert(language.to_lowercase());
    }
    for skill in &candidate.skills {
        candidate_skills.insert(skill.to_lowercase());
    }
    if let Some(primary) = candidate.primary_language.as_deref() {
        if !primary.is_empty() {
            candidate_skills.insert(primary.to_lowercase());
        }
    }

    // Free-text fields can mention skills the structured lists miss
    let bio_text = candidate.bio_text();
    for required in required_skills {
        if bio_text.contains(required.as_str()) {
            candidate_skills.insert(required.clone());
        }
    }

    let mut expanded: HashSet<String> = candidate_skills.clone();
    for skill in &candidate_skills {
        if let Some(synonyms) = vocab.synonyms(skill) {
            for synonym in synonyms {
                expanded.insert((*synonym).to_string());
            }
        }
    }

    let mut matched_skills = Vec::new();
    for required in required_skills {
        if expanded.contains(required) {
            matched_skills.push(required.clone());
        } else if let Some(synonyms) = vocab.synonyms(required) {
            if synonyms.iter().any(|synonym| expanded.contains(*synonym)) {
                matched_skills.push(required.clone());
            }
        } else if expanded
            .iter()
            .any(|skill| normalized_levenshtein(required, skill) > FUZZY_THRESHOLD)
        {
            matched_skills.push(required.clone());
        }
    }

    let score = matched_skills.len() as f64 / required_skills.len() as f64;
    (score, matched_skills)
}
