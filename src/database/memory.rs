use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::database::models::{Member, Reminder, RosterKind};
use crate::database::store::Store;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    rosters: RwLock<HashMap<(RosterKind, i64), Vec<Member>>>,
    reminders: RwLock<HashMap<i64, Vec<Reminder>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn roster(&self, kind: RosterKind, chat_id: i64) -> Result<Vec<Member>> {
        let rosters = self.rosters.read().await;
        Ok(rosters.get(&(kind, chat_id)).cloned().unwrap_or_default())
    }

    async fn upsert_roster(&self, kind: RosterKind, chat_id: i64, members: &[Member]) -> Result<()> {
        let mut rosters = self.rosters.write().await;
        rosters.insert((kind, chat_id), members.to_vec());
        Ok(())
    }

    async fn reminders(&self, chat_id: i64) -> Result<Vec<Reminder>> {
        let reminders = self.reminders.read().await;
        Ok(reminders.get(&chat_id).cloned().unwrap_or_default())
    }

    async fn upsert_reminders(&self, chat_id: i64, reminders: &[Reminder]) -> Result<()> {
        let mut map = self.reminders.write().await;
        map.insert(chat_id, reminders.to_vec());
        Ok(())
    }

    async fn reminder_chats(&self) -> Result<Vec<i64>> {
        let reminders = self.reminders.read().await;
        let mut chats: Vec<i64> = reminders
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(chat_id, _)| *chat_id)
            .collect();
        chats.sort_unstable();
        Ok(chats)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_unknown_chat_is_empty() {
        let store = MemoryStore::new();
        assert!(store.roster(RosterKind::Members, 1).await.unwrap().is_empty());
        assert!(store.reminders(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_roster_namespaces_are_separate() {
        let store = MemoryStore::new();
        store
            .upsert_roster(RosterKind::Members, 1, &[Member::new(10, "Ann")])
            .await
            .unwrap();

        assert_eq!(store.roster(RosterKind::Members, 1).await.unwrap().len(), 1);
        assert!(store.roster(RosterKind::Helpers, 1).await.unwrap().is_empty());
        assert!(store.roster(RosterKind::Members, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reminder_chats_skips_empty_lists() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        store.upsert_reminders(5, &[Reminder::new(date, "a")]).await.unwrap();
        store.upsert_reminders(3, &[Reminder::new(date, "b")]).await.unwrap();
        store.upsert_reminders(4, &[]).await.unwrap();

        assert_eq!(store.reminder_chats().await.unwrap(), vec![3, 5]);
    }
}
