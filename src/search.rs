//! Filtering and summarizing records for list output.

use crate::error::{PromptError, Result};
use crate::template::TemplateRecord;
use globset::{Glob, GlobMatcher};

/// Shown in place of an empty description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Records matching `term` in title, description, or any tag.
///
/// Matching is a case-insensitive substring test. An empty term matches
/// everything.
pub fn filter<'a>(records: &'a [TemplateRecord], term: &str) -> Vec<&'a TemplateRecord> {
    let term = term.to_lowercase();
    records
        .iter()
        .filter(|record| term.is_empty() || matches_term(record, &term))
        .collect()
}

fn matches_term(record: &TemplateRecord, lowered_term: &str) -> bool {
    record.title.to_lowercase().contains(lowered_term)
        || record.description.to_lowercase().contains(lowered_term)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(lowered_term))
}

/// Narrowing criteria for `list`.
#[derive(Debug, Default)]
pub struct ListFilter {
    category: Option<String>,
    tag: Option<GlobMatcher>,
}

impl ListFilter {
    /// Build a filter from an exact category and a tag glob (e.g. `py*`).
    pub fn new(category: Option<&str>, tag_glob: Option<&str>) -> Result<Self> {
        let tag = match tag_glob {
            Some(pattern) => Some(
                Glob::new(pattern)
                    .map_err(|e| {
                        PromptError::UserError(format!("invalid tag pattern '{}': {}", pattern, e))
                    })?
                    .compile_matcher(),
            ),
            None => None,
        };

        Ok(Self {
            category: category.map(str::to_string),
            tag,
        })
    }

    pub fn matches(&self, record: &TemplateRecord) -> bool {
        if let Some(category) = &self.category
            && &record.category != category
        {
            return false;
        }
        if let Some(tag) = &self.tag
            && !record.tags.iter().any(|t| tag.is_match(t))
        {
            return false;
        }
        true
    }
}

/// Shorten a description for list output.
///
/// Descriptions longer than `max_chars` keep their first `max_chars - 3`
/// characters followed by `...`.
pub fn summarize(description: &str, max_chars: usize) -> String {
    if description.is_empty() {
        return NO_DESCRIPTION.to_string();
    }
    if description.chars().count() <= max_chars {
        return description.to_string();
    }
    let kept: String = description
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_record;

    fn records() -> Vec<TemplateRecord> {
        let mut python = sample_record("a", "Generate Python Function");
        python.description = "Creates a function stub.".to_string();
        python.category = "Coding".to_string();
        python.tags = vec!["python".to_string(), "function".to_string()];

        let mut email = sample_record("b", "Email Writer");
        email.description = "Polite emails.".to_string();
        email.category = "Writing".to_string();
        email.tags = vec!["Email".to_string()];

        vec![python, email]
    }

    fn ids(found: &[&TemplateRecord]) -> Vec<String> {
        found.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_term_returns_all() {
        let records = records();
        assert_eq!(filter(&records, "").len(), 2);
    }

    #[test]
    fn test_filter_title_description_and_tags() {
        let records = records();
        assert_eq!(ids(&filter(&records, "PYTHON")), vec!["a"]);
        assert_eq!(ids(&filter(&records, "polite")), vec!["b"]);
        assert_eq!(ids(&filter(&records, "email")), vec!["b"]);
        assert!(filter(&records, "rust").is_empty());
    }

    #[test]
    fn test_list_filter_category_and_tag_glob() {
        let records = records();

        let by_category = ListFilter::new(Some("Writing"), None).unwrap();
        assert!(!by_category.matches(&records[0]));
        assert!(by_category.matches(&records[1]));

        let by_tag = ListFilter::new(None, Some("py*")).unwrap();
        assert!(by_tag.matches(&records[0]));
        assert!(!by_tag.matches(&records[1]));

        assert!(ListFilter::default().matches(&records[1]));
    }

    #[test]
    fn test_list_filter_invalid_glob() {
        let err = ListFilter::new(None, Some("[unclosed")).unwrap_err();
        assert!(matches!(err, PromptError::UserError(_)));
    }

    #[test]
    fn test_summarize() {
        assert_eq!(summarize("", 120), NO_DESCRIPTION);
        assert_eq!(summarize("short", 120), "short");

        let exact = "x".repeat(120);
        assert_eq!(summarize(&exact, 120), exact);

        let long = "y".repeat(121);
        let summary = summarize(&long, 120);
        assert_eq!(summary.chars().count(), 120);
        assert!(summary.ends_with("yyy..."));
    }
}
