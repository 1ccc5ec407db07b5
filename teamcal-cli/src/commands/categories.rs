use anyhow::Result;
use owo_colors::OwoColorize;
use teamcal_core::category::EventCategory;

use crate::render::Render;

pub fn run(categories: &[EventCategory], selected: &[String]) -> Result<()> {
    println!("{}", render(categories, selected));
    Ok(())
}

/// One line per category, with a checkbox for the active filter.
pub fn render(categories: &[EventCategory], selected: &[String]) -> String {
    if categories.is_empty() {
        return "No categories".dimmed().to_string();
    }

    categories
        .iter()
        .map(|c| {
            let mark = if selected.contains(&c.id) { "[x]" } else { "[ ]" };
            format!("{} {} {}", mark, c.render(), format!("#{}", c.id).dimmed())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamcal_core::seed::default_categories;

    #[test]
    fn marks_selected_categories() {
        let out = render(&default_categories(), &["meeting".to_string()]);
        let meeting = out.lines().find(|l| l.contains("Meetings")).unwrap();
        let work = out.lines().find(|l| l.contains("Work")).unwrap();

        assert!(meeting.starts_with("[x]"));
        assert!(work.starts_with("[ ]"));
    }
}
