use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user registered on one of a chat's rosters.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub display_name: String,
}

impl Member {
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// The two roster namespaces kept per chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterKind {
    Members,
    Helpers,
}

impl RosterKind {
    /// Backing table in the SQLite store.
    pub fn table(self) -> &'static str {
        match self {
            RosterKind::Members => "chat_members",
            RosterKind::Helpers => "chat_helpers",
        }
    }
}

/// Display names in roster order, or `None` when the roster is empty.
pub fn display_names(members: &[Member]) -> Option<String> {
    if members.is_empty() {
        return None;
    }
    Some(
        members
            .iter()
            .map(|m| m.display_name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_keeps_order() {
        let members = vec![Member::new(1, "Zed"), Member::new(2, "Amy")];
        assert_eq!(display_names(&members).as_deref(), Some("Zed, Amy"));
    }

    #[test]
    fn test_display_names_empty() {
        assert_eq!(display_names(&[]), None);
    }
}
