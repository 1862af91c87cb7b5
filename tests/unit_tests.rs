// Unit tests for Talent Algo

use talent_algo::core::{
    activity::calculate_activity_score, experience::calculate_experience_match,
    extract::extract_requirements, skills::calculate_skill_match, vocab::Vocabulary, Matcher,
};
use talent_algo::models::{CandidateProfile, ExperienceLevel, JobRequirements};

fn candidate_with_skills(skills: &[&str]) -> CandidateProfile {
    CandidateProfile {
        id: Some("test".to_string()),
        skills: skills.iter().map(|s| s.to_string()).collect(),
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
fn test_neutral_skill_score_with_no_requirements() {
    let vocab = Vocabulary::new();

    for candidate in [
        CandidateProfile::default(),
        candidate_with_skills(&["react", "docker", "python"]),
    ] {
        let (score, matched) = calculate_skill_match(&vocab, &candidate, &[]);
        assert_eq!(score, 0.5);
        assert!(matched.is_empty());
    }
}

#[test]
fn test_skill_score_bounds_and_subset() {
    let vocab = Vocabulary::new();
    let candidate = candidate_with_skills(&["python", "terraform"]);
    let required: Vec<String> = ["python", "terraform", "gcp", "kubernetes", "rust"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let (score, matched) = calculate_skill_match(&vocab, &candidate, &required);

    assert!((0.0..=1.0).contains(&score));
    assert!(matched.iter().all(|skill| required.contains(skill)));
    assert_eq!(score, matched.len() as f64 / required.len() as f64);
}

#[test]
fn test_experience_monotonicity_all_pairs() {
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
        let candidate = CandidateProfile {
            estimated_experience_level: Some(candidate_level.to_string()),
            ..Default::default()
        };
        let (score, _) = calculate_experience_match(&candidate, &requirements_for(required));

        assert_eq!(
            score, expected,
            "{} against {:?} should be {}",
            candidate_level, required, expected
        );
    }
}

#[test]
fn test_activity_cutoffs_are_strict_lower_bounds() {
    let make = |repos: u32, stars: u32, followers: u32| CandidateProfile {
        public_repos: repos,
        total_stars: stars,
        followers,
        ..Default::default()
    };

    // Repos bands at 10 / 20 / 50
    assert_eq!(calculate_activity_score(&make(50, 0, 0)).0, 0.15);
    assert_eq!(calculate_activity_score(&make(51, 0, 0)).0, 0.2);
    // Stars bands at 50 / 100 / 500
    assert_eq!(calculate_activity_score(&make(0, 500, 0)).0, 0.2);
    assert_eq!(calculate_activity_score(&make(0, 501, 0)).0, 0.3);
    // Followers bands at 50 / 100 / 200
    assert_eq!(calculate_activity_score(&make(0, 0, 200)).0, 0.15);
    assert_eq!(calculate_activity_score(&make(0, 0, 201)).0, 0.2);
}

#[test]
fn test_total_score_composition_caps_at_100() {
    // Full marks on every component and no bonuses in play
    let matcher = Matcher::with_default_weights();
    let candidate = CandidateProfile {
        id: Some("full".to_string()),
        estimated_experience_level: Some("Senior".to_string()),
        skills: vec!["python".to_string()],
        public_repos: 60,
        total_stars: 600,
        followers: 300,
        has_popular_repos: true,
        open_source_contributor: true,
        ..Default::default()
    };

    let result = matcher.match_candidates(vec![candidate], "Senior Python engineer", "", 1);

    let top = &result.top_candidates[0];
    assert_eq!(top.skill_score, 100.0);
    assert_eq!(top.experience_score, 100.0);
    assert_eq!(top.activity_score, 100.0);
    assert_eq!(top.match_score, 100.0);
}

#[test]
fn test_extraction_determinism() {
    let vocab = Vocabulary::new();
    let text =
        "Senior Frontend Engineer, React and TypeScript, 5+ years, remote, open source a plus";

    let first = extract_requirements(&vocab, text);
    let second = extract_requirements(&vocab, text);

    assert_eq!(first, second);
}

#[test]
fn test_extraction_fields() {
    let vocab = Vocabulary::new();
    let reqs = extract_requirements(
        &vocab,
        "Senior backend engineer in London. Python and Django, 7+ years. GitHub portfolio welcome.",
    );

    assert_eq!(reqs.skills, vec!["python", "django"]);
    assert_eq!(reqs.experience_level, ExperienceLevel::Senior);
    assert_eq!(reqs.min_years, Some(7));
    assert!(reqs.prefers_open_source);
    assert_eq!(reqs.location.as_deref(), Some("london"));
}

#[test]
fn test_sparse_candidate_never_fails_scoring() {
    let matcher = Matcher::with_default_weights();
    let bare = CandidateProfile {
        id: Some("bare".to_string()),
        ..Default::default()
    };

    let result = matcher.match_candidates(vec![bare], "Senior Rust engineer, 5+ years", "", 8);

    assert_eq!(result.showing, 1);
    let top = &result.top_candidates[0];
    assert!(top.match_score >= 0.0 && top.match_score <= 100.0);
    assert!(top.matched_skills.is_empty());
}
