use anyhow::Result;
use owo_colors::OwoColorize;
use teamcal_core::document::Document;

use crate::render::Render;

pub fn run(documents: &[Document], search: Option<&str>, kind: Option<&str>) -> Result<()> {
    println!("{}", render(documents, search, kind));
    Ok(())
}

pub fn render(documents: &[Document], search: Option<&str>, kind: Option<&str>) -> String {
    let matching: Vec<String> = documents
        .iter()
        .filter(|d| d.matches(search.unwrap_or_default(), kind))
        .map(|d| d.render())
        .collect();

    if matching.is_empty() {
        return "No documents found".dimmed().to_string();
    }
    matching.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamcal_core::seed::default_documents;

    #[test]
    fn filters_by_name_and_type() {
        let documents = default_documents();

        assert_eq!(render(&documents, None, None).lines().count(), 3);
        assert_eq!(render(&documents, None, Some("all")).lines().count(), 3);

        let out = render(&documents, Some("budget"), None);
        assert!(out.contains("Budget Analysis.xlsx"));
        assert!(!out.contains("Project Proposal.pdf"));

        let out = render(&documents, None, Some("pdf"));
        assert!(out.contains("Project Proposal.pdf"));
        assert_eq!(out.lines().count(), 1);

        assert!(render(&documents, Some("budget"), Some("PDF")).contains("No documents found"));
    }
}
