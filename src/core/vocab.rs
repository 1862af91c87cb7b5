use crate::models::ExperienceLevel;
use regex::Regex;
use std::collections::HashMap;

/// Fixed vocabulary tables driving extraction and skill matching
///
/// Built once when the matcher is constructed and never mutated, so a
/// single instance is safe to share across worker threads.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tech_keywords: Vec<&'static str>,
    skill_synonyms: HashMap<&'static str, Vec<&'static str>>,
    experience_tiers: Vec<(ExperienceLevel, Vec<&'static str>)>,
    open_source_keywords: Vec<&'static str>,
    location_keywords: Vec<&'static str>,
    years_pattern: Regex,
}

impl Vocabulary {
    pub fn new() -> Self {
        let tech_keywords = vec![
            "react", "vue", "angular", "javascript", "typescript", "python", "java",
            "go", "rust", "node", "django", "flask", "fastapi", "express",
            "kubernetes", "docker", "aws", "gcp", "azure", "terraform",
            "postgresql", "mongodb", "redis", "graphql", "rest", "api",
            "machine learning", "tensorflow", "pytorch", "data science",
            "mobile", "ios", "android", "react native",
        ];

        let mut skill_synonyms: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        // Frontend
        skill_synonyms.insert("react", vec!["reactjs", "react.js", "react-native"]);
        skill_synonyms.insert("vue", vec!["vuejs", "vue.js"]);
        skill_synonyms.insert("angular", vec!["angularjs"]);
        skill_synonyms.insert("frontend", vec!["front-end", "ui", "user-interface"]);
        // Backend
        skill_synonyms.insert("node", vec!["nodejs", "node.js"]);
        skill_synonyms.insert("backend", vec!["back-end", "server-side"]);
        skill_synonyms.insert("api", vec!["rest", "graphql", "restful"]);
        // DevOps
        skill_synonyms.insert("kubernetes", vec!["k8s"]);
        skill_synonyms.insert(
            "ci/cd",
            vec!["cicd", "continuous-integration", "continuous-deployment"],
        );
        skill_synonyms.insert("aws", vec!["amazon-web-services"]);
        // Languages
        skill_synonyms.insert("javascript", vec!["js", "es6", "typescript"]);
        skill_synonyms.insert("typescript", vec!["ts"]);
        skill_synonyms.insert("python", vec!["py"]);

        // Tier order decides the tie-break when a description mentions
        // keywords from several tiers: first tier with a hit wins.
        let experience_tiers = vec![
            (
                ExperienceLevel::Junior,
                vec!["junior", "entry", "1-3 years", "graduate"],
            ),
            (
                ExperienceLevel::Mid,
                vec!["mid", "intermediate", "3-5 years", "mid-level"],
            ),
            (
                ExperienceLevel::Senior,
                vec!["senior", "sr", "5+ years", "lead", "staff", "principal"],
            ),
        ];

        let open_source_keywords = vec![
            "open source", "open-source", "oss", "github", "contributions",
        ];

        let location_keywords = vec![
            "remote", "san francisco", "new york", "seattle",
            "austin", "boston", "london", "berlin",
        ];

        let years_pattern =
            Regex::new(r"(\d+)\+?\s*years?").expect("years pattern must compile");

        Self {
            tech_keywords,
            skill_synonyms,
            experience_tiers,
            open_source_keywords,
            location_keywords,
            years_pattern,
        }
    }

    pub fn tech_keywords(&self) -> &[&'static str] {
        &self.tech_keywords
    }

    /// Synonyms registered for a canonical skill, if any
    pub fn synonyms(&self, skill: &str) -> Option<&[&'static str]> {
        self.skill_synonyms.get(skill).map(Vec::as_slice)
    }

    pub fn experience_tiers(&self) -> &[(ExperienceLevel, Vec<&'static str>)] {
        &self.experience_tiers
    }

    pub fn open_source_keywords(&self) -> &[&'static str] {
        &self.open_source_keywords
    }

    pub fn location_keywords(&self) -> &[&'static str] {
        &self.location_keywords
    }

    pub fn years_pattern(&self) -> &Regex {
        &self.years_pattern
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
