use anyhow::Result;
use std::sync::Arc;

use crate::database::models::{Member, RosterKind};
use crate::database::store::Store;
use crate::utils::logging::log_store_operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    Left,
    NotPresent,
}

/// Member and helper rosters of every chat.
#[derive(Clone)]
pub struct RosterService {
    store: Arc<dyn Store>,
}

impl RosterService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn join(&self, kind: RosterKind, chat_id: i64, member: Member) -> Result<JoinOutcome> {
        let mut roster = self.store.roster(kind, chat_id).await?;
        if roster.iter().any(|m| m.id == member.id) {
            return Ok(JoinOutcome::AlreadyPresent);
        }

        log_store_operation("JOIN", kind.table(), chat_id, Some(&member.id.to_string()));
        roster.push(member);
        self.store.upsert_roster(kind, chat_id, &roster).await?;
        Ok(JoinOutcome::Joined)
    }

    pub async fn leave(&self, kind: RosterKind, chat_id: i64, user_id: i64) -> Result<LeaveOutcome> {
        let mut roster = self.store.roster(kind, chat_id).await?;
        let Some(position) = roster.iter().position(|m| m.id == user_id) else {
            return Ok(LeaveOutcome::NotPresent);
        };

        log_store_operation("LEAVE", kind.table(), chat_id, Some(&user_id.to_string()));
        roster.remove(position);
        self.store.upsert_roster(kind, chat_id, &roster).await?;
        Ok(LeaveOutcome::Left)
    }

    pub async fn list(&self, kind: RosterKind, chat_id: i64) -> Result<Vec<Member>> {
        self.store.roster(kind, chat_id).await
    }

    /// Empties both rosters of the chat.
    pub async fn reset(&self, chat_id: i64) -> Result<()> {
        log_store_operation("RESET", "rosters", chat_id, None);
        self.store.upsert_roster(RosterKind::Members, chat_id, &[]).await?;
        self.store.upsert_roster(RosterKind::Helpers, chat_id, &[]).await
    }
}
