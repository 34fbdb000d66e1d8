use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::database::connection::DatabaseManager;
use crate::database::models::{Member, Reminder, RosterKind};
use crate::database::store::Store;
use crate::utils::logging::log_store_operation;

#[async_trait]
impl Store for DatabaseManager {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn roster(&self, kind: RosterKind, chat_id: i64) -> Result<Vec<Member>> {
        let query = format!(
            "SELECT user_id AS id, display_name FROM {} WHERE chat_id = ? ORDER BY position",
            kind.table()
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(chat_id)
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Failed to load {} for chat {}", kind.table(), chat_id))
    }

    async fn upsert_roster(&self, kind: RosterKind, chat_id: i64, members: &[Member]) -> Result<()> {
        log_store_operation("UPSERT", kind.table(), chat_id, Some(&format!("{} rows", members.len())));

        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!("DELETE FROM {} WHERE chat_id = ?", kind.table()))
            .bind(chat_id)
            .execute(&mut tx)
            .await?;

        let insert = format!(
            "INSERT INTO {} (chat_id, user_id, display_name, position) VALUES (?, ?, ?, ?)",
            kind.table()
        );
        for (position, member) in members.iter().enumerate() {
            sqlx::query(&insert)
                .bind(chat_id)
                .bind(member.id)
                .bind(&member.display_name)
                .bind(position as i64)
                .execute(&mut tx)
                .await?;
        }

        tx.commit()
            .await
            .with_context(|| format!("Failed to save {} for chat {}", kind.table(), chat_id))
    }

    async fn reminders(&self, chat_id: i64) -> Result<Vec<Reminder>> {
        sqlx::query_as::<_, Reminder>(
            "SELECT remind_on AS date, text FROM reminders WHERE chat_id = ? ORDER BY position",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to load reminders for chat {}", chat_id))
    }

    async fn upsert_reminders(&self, chat_id: i64, reminders: &[Reminder]) -> Result<()> {
        log_store_operation("UPSERT", "reminders", chat_id, Some(&format!("{} rows", reminders.len())));

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM reminders WHERE chat_id = ?")
            .bind(chat_id)
            .execute(&mut tx)
            .await?;

        for (position, reminder) in reminders.iter().enumerate() {
            sqlx::query(
                "INSERT INTO reminders (chat_id, position, remind_on, text) VALUES (?, ?, ?, ?)",
            )
            .bind(chat_id)
            .bind(position as i64)
            .bind(reminder.date)
            .bind(&reminder.text)
            .execute(&mut tx)
            .await?;
        }

        tx.commit()
            .await
            .with_context(|| format!("Failed to save reminders for chat {}", chat_id))
    }

    async fn reminder_chats(&self) -> Result<Vec<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT DISTINCT chat_id FROM reminders ORDER BY chat_id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list chats with reminders")
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
