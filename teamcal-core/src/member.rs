//! Team members.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Member => "Member",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub avatar: String,
    /// Free-form label such as "Jan 2024"
    pub joined_date: String,
}

impl Member {
    /// Case-insensitive match on name or email.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }

    /// Initials for avatar placeholders ("John Doe" -> "JD")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sarah() -> Member {
        crate::seed::default_members()
            .into_iter()
            .find(|m| m.name == "Sarah Johnson")
            .unwrap()
    }

    #[test]
    fn search_matches_name_or_email() {
        let member = sarah();
        assert!(member.matches("sarah"));
        assert!(member.matches("JOHNSON"));
        assert!(member.matches("@example.com"));
        assert!(!member.matches("mike"));
    }

    #[test]
    fn empty_search_matches_everyone() {
        assert!(sarah().matches(""));
    }

    #[test]
    fn initials() {
        assert_eq!(sarah().initials(), "SJ");
    }
}
