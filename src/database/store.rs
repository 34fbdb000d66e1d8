//! The persistence capability shared by every backing adapter.
//!
//! Each entity kind (member roster, helper roster, reminder list) is read and
//! written whole, keyed by chat id. Callers do read-modify-write; concurrent
//! writers to the same chat may lose an update.

use anyhow::Result;
use async_trait::async_trait;

use crate::database::models::{Member, Reminder, RosterKind};

#[async_trait]
pub trait Store: Send + Sync {
    /// Short adapter name reported by the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// Roster in insertion order; an unknown chat yields an empty roster.
    async fn roster(&self, kind: RosterKind, chat_id: i64) -> Result<Vec<Member>>;

    /// Replaces the whole roster for the chat.
    async fn upsert_roster(&self, kind: RosterKind, chat_id: i64, members: &[Member]) -> Result<()>;

    /// Reminder list in insertion order; an unknown chat yields an empty list.
    async fn reminders(&self, chat_id: i64) -> Result<Vec<Reminder>>;

    /// Replaces the whole reminder list for the chat.
    async fn upsert_reminders(&self, chat_id: i64, reminders: &[Reminder]) -> Result<()>;

    /// Chats that currently hold at least one reminder.
    async fn reminder_chats(&self) -> Result<Vec<i64>>;

    /// Cheap round-trip used by readiness checks.
    async fn ping(&self) -> Result<()>;
}
