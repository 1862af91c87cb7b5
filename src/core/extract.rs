use crate::core::vocab::Vocabulary;
use crate::models::{ExperienceLevel, JobRequirements};

/// Extract structured hiring requirements from free-text job copy
///
/// Pure function of the text and the vocabulary tables: lowercases once,
/// then runs substring scans against the fixed keyword lists.
pub fn extract_requirements(vocab: &Vocabulary, job_description: &str) -> JobRequirements {
    let text = job_description.to_lowercase();

    // Vocabulary-order scan, one entry per keyword so no duplicates
    let skills: Vec<String> = vocab
        .tech_keywords()
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    // First tier with any keyword hit wins; default is mid
    let mut experience_level = ExperienceLevel::Mid;
    for (level, keywords) in vocab.experience_tiers() {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            experience_level = *level;
            break;
        }
    }

    let min_years = vocab
        .years_pattern()
        .captures(&text)
        .and_then(|caps| caps[1].parse::<u32>().ok());

    let prefers_open_source = vocab
        .open_source_keywords()
        .iter()
        .any(|keyword| text.contains(keyword));

    let location = vocab
        .location_keywords()
        .iter()
        .find(|keyword| text.contains(**keyword))
        .map(|keyword| keyword.to_string());

    JobRequirements {
        skills,
        experience_level,
        min_years,
        prefers_open_source,
        location,
        raw_text: text,
    }
}
