use crate::models::CandidateProfile;

/// Score public coding activity as a credibility proxy
///
/// Additive bands over repos, stars, followers and the two contribution
/// flags, capped at 1.0. Band cutoffs are strict lower bounds. Only the
/// stronger bands contribute reason strings.
pub fn calculate_activity_score(candidate: &CandidateProfile) -> (f64, Vec<String>) {
    let mut score: f64 = 0.0;
    let mut reasons = Vec::new();

    let repos = candidate.public_repos;
    if repos > 50 {
        score += 0.2;
        reasons.push(format!("{} public repositories", repos));
    } else if repos > 20 {
        score += 0.15;
        reasons.push(format!("{} public repositories", repos));
    } else if repos > 10 {
        score += 0.1;
    }

    let stars = candidate.total_stars;
    if stars > 500 {
        score += 0.3;
        reasons.push(format!("{} GitHub stars", stars));
    } else if stars > 100 {
        score += 0.2;
        reasons.push(format!("{} GitHub stars", stars));
    } else if stars > 50 {
        score += 0.1;
    }

    let followers = candidate.followers;
    if followers > 200 {
        score += 0.2;
        reasons.push(format!("{} followers", followers));
    } else if followers > 100 {
        score += 0.15;
    } else if followers > 50 {
        score += 0.1;
    }

    if candidate.has_popular_repos {
        score += 0.15;
        reasons.push("Has popular open source projects".to_string());
    }

    if candidate.open_source_contributor {
        score += 0.15;
        reasons.push("Active open source contributor".to_string());
    }

    (score.min(1.0), reasons)
}
