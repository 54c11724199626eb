//! Matcher — splits job tokens into the ones a resume covers and the ones it lacks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Partition of job tokens relative to a resume token set.
/// Both lists keep the job tokens' ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl MatchResult {
    /// Share of job tokens found in the resume, in `[0.0, 1.0]`.
    pub fn coverage(&self) -> f32 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            0.0
        } else {
            self.matched.len() as f32 / total as f32
        }
    }
}

/// Walks `job_tokens` in order and files each one under `matched` or `missing`.
///
/// Tokens are canonical lowercase forms on both sides, so a plain set lookup
/// is case-insensitive in effect.
pub fn match_tokens<S: AsRef<str>>(job_tokens: &[S], resume_tokens: &HashSet<String>) -> MatchResult {
    let mut result = MatchResult::default();

    for token in job_tokens {
        let token = token.as_ref();
        if resume_tokens.contains(token) {
            result.matched.push(token.to_string());
        } else {
            result.missing.push(token.to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> HashSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_partition_preserves_job_order() {
        let result = match_tokens(&["go", "rust", "java"], &set(&["go", "java"]));
        assert_eq!(result.matched, vec!["go", "java"]);
        assert_eq!(result.missing, vec!["rust"]);
    }

    #[test]
    fn test_partition_covers_every_job_token_exactly_once() {
        let job = ["kubernetes", "rust", "terraform", "go", "kafka"];
        let result = match_tokens(&job, &set(&["rust", "kafka", "python"]));

        let matched: HashSet<&str> = result.matched.iter().map(String::as_str).collect();
        let missing: HashSet<&str> = result.missing.iter().map(String::as_str).collect();
        let all: HashSet<&str> = job.iter().copied().collect();

        assert!(matched.is_disjoint(&missing));
        assert_eq!(&matched | &missing, all);
    }

    #[test]
    fn test_empty_resume_marks_everything_missing() {
        let result = match_tokens(&["rust", "go"], &HashSet::new());
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["rust", "go"]);
        assert_eq!(result.coverage(), 0.0);
    }

    #[test]
    fn test_empty_job_yields_empty_result() {
        let empty: [&str; 0] = [];
        let result = match_tokens(&empty, &set(&["rust"]));
        assert_eq!(result, MatchResult::default());
        assert_eq!(result.coverage(), 0.0);
    }

    #[test]
    fn test_coverage_fraction() {
        let result = match_tokens(&["a1", "b2", "c3", "d4"], &set(&["a1", "c3", "zz"]));
        assert!((result.coverage() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_accepts_owned_job_tokens() {
        let job = vec!["rust".to_string()];
        let result = match_tokens(&job, &set(&["rust"]));
        assert_eq!(result.matched, vec!["rust"]);
    }
}
