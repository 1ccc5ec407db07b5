//! User-facing notifications emitted by store transitions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    /// Something was removed
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: &str, description: impl Into<String>) -> Self {
        Notice {
            title: title.to_string(),
            description: description.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn destructive(title: &str, description: impl Into<String>) -> Self {
        Notice {
            title: title.to_string(),
            description: description.into(),
            kind: NoticeKind::Destructive,
        }
    }
}
