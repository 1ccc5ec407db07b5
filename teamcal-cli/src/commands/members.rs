use anyhow::Result;
use owo_colors::OwoColorize;
use teamcal_core::member::Member;

use crate::render::Render;

pub fn run(members: &[Member], search: Option<&str>) -> Result<()> {
    println!("{}", render(members, search));
    Ok(())
}

pub fn render(members: &[Member], search: Option<&str>) -> String {
    let matching: Vec<String> = members
        .iter()
        .filter(|m| search.is_none_or(|term| m.matches(term)))
        .map(|m| format!("{} {}", m.render(), format!("#{}", m.id).dimmed()))
        .collect();

    if matching.is_empty() {
        return "No members found".dimmed().to_string();
    }
    matching.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamcal_core::seed::default_members;

    #[test]
    fn search_filters_by_name_or_email() {
        let members = default_members();

        let out = render(&members, Some("SARAH"));
        assert!(out.contains("Sarah Johnson"));
        assert!(!out.contains("Mike Chen"));

        let out = render(&members, Some("mike@"));
        assert!(out.contains("Mike Chen"));

        assert_eq!(render(&members, None).lines().count(), 3);
        assert!(render(&members, Some("nobody")).contains("No members found"));
    }
}
