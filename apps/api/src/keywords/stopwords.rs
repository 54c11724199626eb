//! Built-in stopword lists and the combined stopword set used by the tokenizer.

use std::collections::HashSet;

use crate::keywords::tokenizer::Variant;

/// Words that never count as resume keywords.
pub static RESUME_STOPWORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "to", "of", "in", "on", "for", "with", "by", "at", "from",
    "is", "are", "be", "as", "that", "this", "it", "we", "you", "i", "our", "their", "they",
    "include", "including", "will", "shall", "can", "able", "ability", "skills", "skill",
    "experience", "experiences", "work", "works", "working", "project", "projects", "team",
    "teams", "using", "used", "use", "detail", "details", "detailed", "etc", "eg", "e.g", "ie",
    "i.e", "years", "year", "month", "months",
];

/// Posting boilerplate added on top of [`RESUME_STOPWORDS`] when scanning a job page.
pub static JOB_POSTING_EXTRA_STOPWORDS: &[&str] = &[
    "responsibilities", "responsibility", "qualifications", "qualification", "requirements",
    "requirement", "required", "preferred", "role", "roles", "position", "positions",
    "candidate", "candidates", "applicant", "applicants", "apply", "job", "jobs", "company",
    "opportunity", "opportunities", "benefits", "salary", "description", "about", "join",
    "looking", "seeking", "ideal", "plus", "must", "should", "have", "has", "your", "who",
    "what", "all", "other", "equal", "employer", "employment", "location", "remote",
];

/// Combined, case-folded stopword set for one tokenizer run.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Built-in list for `variant` plus the user's comma-separated list.
    pub fn for_variant(variant: Variant, custom_csv: &str) -> Self {
        let mut words: HashSet<String> = HashSet::new();

        let mut add_words = |slice: &[&str]| {
            for word in slice {
                words.insert(word.to_lowercase());
            }
        };

        add_words(RESUME_STOPWORDS);
        if variant == Variant::JobPosting {
            add_words(JOB_POSTING_EXTRA_STOPWORDS);
        }

        words.extend(parse_custom_stopwords(custom_csv));

        Self { words }
    }

    /// `term` is expected to be lowercase already.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// Splits a comma-separated list into trimmed, lowercased, non-empty words.
pub fn parse_custom_stopwords(csv: &str) -> impl Iterator<Item = String> + '_ {
    csv.split(',')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_posting_list_is_superset_of_resume_list() {
        let resume = StopwordSet::for_variant(Variant::Resume, "");
        let job = StopwordSet::for_variant(Variant::JobPosting, "");
        assert!(job.len() > resume.len());
        for word in RESUME_STOPWORDS {
            assert!(job.contains(word), "{word} missing from job list");
        }
    }

    #[test]
    fn test_posting_noise_only_in_job_variant() {
        let resume = StopwordSet::for_variant(Variant::Resume, "");
        let job = StopwordSet::for_variant(Variant::JobPosting, "");
        assert!(!resume.contains("responsibilities"));
        assert!(job.contains("responsibilities"));
        assert!(job.contains("qualifications"));
    }

    #[test]
    fn test_custom_csv_is_trimmed_and_case_folded() {
        let set = StopwordSet::for_variant(Variant::Resume, " Agile ,SCRUM,, ,jira");
        assert!(set.contains("agile"));
        assert!(set.contains("scrum"));
        assert!(set.contains("jira"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_parse_custom_stopwords_drops_empty_entries() {
        let words: Vec<String> = parse_custom_stopwords(",,a, B ,").collect();
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn test_build_is_not_a_stopword() {
        let job = StopwordSet::for_variant(Variant::JobPosting, "");
        assert!(!job.contains("build"));
        assert!(!job.contains("engineers"));
    }
}
