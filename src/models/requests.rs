use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to match candidates against a job description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchSearchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "job_description", rename = "jobDescription")]
    pub job_description: String,
    #[serde(default)]
    #[serde(alias = "job_title", rename = "jobTitle")]
    pub job_title: String,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_when_absent() {
        let req: MatchSearchRequest =
            serde_json::from_str(r#"{"jobDescription": "Senior Rust Engineer"}"#).unwrap();

        assert_eq!(req.limit, 8);
        assert!(req.job_title.is_empty());
    }

    #[test]
    fn test_snake_case_aliases_accepted() {
        let req: MatchSearchRequest = serde_json::from_str(
            r#"{"job_description": "Backend role", "job_title": "Engineer", "limit": 3}"#,
        )
        .unwrap();

        assert_eq!(req.job_title, "Engineer");
        assert_eq!(req.limit, 3);
    }

    #[test]
    fn test_empty_description_fails_validation() {
        let req: MatchSearchRequest = serde_json::from_str(r#"{"jobDescription": ""}"#).unwrap();

        assert!(req.validate().is_err());
    }
}
