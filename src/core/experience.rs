use crate::models::{CandidateProfile, ExperienceLevel, JobRequirements};

/// Score the candidate's seniority against the required level
///
/// Returns the tiered score and a human-readable reason. A candidate with
/// an unrecognized level string gets the neutral fallback instead of an
/// error, so one bad profile never poisons a batch.
pub fn calculate_experience_match(
    candidate: &CandidateProfile,
    requirements: &JobRequirements,
) -> (f64, String) {
    let candidate_level = match ExperienceLevel::parse(candidate.experience_level()) {
        Some(level) => level,
        None => return (0.5, "Unable to determine experience match".to_string()),
    };
    let required_level = requirements.experience_level;

    let gap = candidate_level.rank() - required_level.rank();
    match gap {
        0 => (
            1.0,
            format!("Perfect match: {} level", candidate_level.label()),
        ),
        1 => (
            0.9,
            format!(
                "Overqualified: {} for {} role",
                candidate_level.label(),
                required_level.label()
            ),
        ),
        -1 => (
            0.7,
            format!(
                "Slightly underqualified: {} for {} role",
                candidate_level.label(),
                required_level.label()
            ),
        ),
        _ => (
            0.4,
            format!(
                "Experience mismatch: {} vs {} required",
                candidate_level.label(),
                required_level.label()
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{extract_requirements, Vocabulary};

    fn candidate_at(level: &str) -> CandidateProfile {
        CandidateProfile {
            estimated_experience_level: Some(level.to_string()),
            ..Default::default()
        }
    }

    fn requirements_for(level: ExperienceLevel) -> JobRequirements {
        JobRequirements {
            skills: vec![],
            experience_level: level,
            min_years: None,
            prefers_open_source: false,
            location: None,
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_all_level_pairs() {
        // (candidate, required, expected score)
        let cases = [
            ("Junior", ExperienceLevel::Junior, 1.0),
            ("Junior", ExperienceLevel::Mid, 0.7),
            ("Junior", ExperienceLevel::Senior, 0.4),
            ("Mid", ExperienceLevel::Junior, 0.9),
            ("Mid", ExperienceLevel::Mid, 1.0),
            ("Mid", ExperienceLevel::Senior, 0.7),
            ("Senior", ExperienceLevel::Junior, 0.4),
            ("Senior", ExperienceLevel::Mid, 0.9),
            ("Senior", ExperienceLevel::Senior, 1.0),
        ];

        for (candidate_level, required, expected) in cases {
            let (score, _) = calculate_experience_match(
                &candidate_at(candidate_level),
                &requirements_for(required),
            );
            assert_eq!(
                score, expected,
                "{} vs {:?} should score {}",
                candidate_level, required, expected
            );
        }
    }

    #[test]
    fn test_exact_match_reason() {
        let (_, reason) = calculate_experience_match(
            &candidate_at("Senior"),
            &requirements_for(ExperienceLevel::Senior),
        );

        assert_eq!(reason, "Perfect match: Senior level");
    }

    #[test]
    fn test_overqualified_reason() {
        let (_, reason) = calculate_experience_match(
            &candidate_at("senior"),
            &requirements_for(ExperienceLevel::Mid),
        );

        assert_eq!(reason, "Overqualified: Senior for Mid role");
    }

    #[test]
    fn test_missing_level_defaults_to_mid() {
        let (score, _) = calculate_experience_match(
            &CandidateProfile::default(),
            &requirements_for(ExperienceLevel::Mid),
        );

        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_unrecognized_level_falls_back() {
        let (score, reason) = calculate_experience_match(
            &candidate_at("Wizard"),
            &requirements_for(ExperienceLevel::Senior),
        );

        assert_eq!(score, 0.5);
        assert_eq!(reason, "Unable to determine experience match");
    }

    #[test]
    fn test_extracted_requirements_feed_through() {
        let vocab = Vocabulary::new();
        let reqs = extract_requirements(&vocab, "Senior engineer, 5+ years");

        let (score, _) = calculate_experience_match(&candidate_at("Mid"), &reqs);

        assert_eq!(score, 0.7);
    }
}
