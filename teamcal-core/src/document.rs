//! Shared documents. Display data only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    /// File type label, e.g. "PDF"
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable size, e.g. "2.4 MB"
    pub size: String,
    pub owner: String,
    pub modified_date: DateTime<Utc>,
}

impl Document {
    /// Name search plus type filter. A type of "all" (any case) or `None` matches every type.
    pub fn matches(&self, term: &str, kind: Option<&str>) -> bool {
        let matches_search = self.name.to_lowercase().contains(&term.to_lowercase());
        let matches_type = match kind {
            None => true,
            Some(k) if k.eq_ignore_ascii_case("all") => true,
            Some(k) => self.kind.eq_ignore_ascii_case(k),
        };
        matches_search && matches_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documents() -> Vec<Document> {
        crate::seed::default_documents()
    }

    fn names(term: &str, kind: Option<&str>) -> Vec<String> {
        documents()
            .into_iter()
            .filter(|d| d.matches(term, kind))
            .map(|d| d.name)
            .collect()
    }

    #[test]
    fn search_by_name() {
        assert_eq!(names("budget", None), vec!["Budget Analysis.xlsx"]);
    }

    #[test]
    fn filter_by_type_is_case_insensitive() {
        assert_eq!(names("", Some("pdf")), vec!["Project Proposal.pdf"]);
        assert_eq!(names("", Some("ALL")).len(), 3);
    }

    #[test]
    fn search_and_type_combine() {
        assert!(names("budget", Some("PDF")).is_empty());
    }

    #[test]
    fn json_uses_type_key() {
        let json = serde_json::to_value(&documents()[0]).unwrap();
        assert_eq!(json["type"], "PDF");
        assert_eq!(json["modifiedDate"], "2024-06-10T10:00:00Z");
    }
}
