use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::database::models::Reminder;
use crate::database::store::Store;
use crate::utils::logging::log_store_operation;
use crate::utils::validation::{parse_reminder_date, parse_reminder_index};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetReminderOutcome {
    MissingReply,
    MissingDate,
    InvalidDate(String),
    Duplicate,
    Added(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearReminderOutcome {
    MissingIndex,
    NoReminders,
    InvalidIndex(String),
    Cleared(usize),
}

/// Ordered per-chat reminder lists.
#[derive(Clone)]
pub struct ReminderBook {
    store: Arc<dyn Store>,
}

impl ReminderBook {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Validates in order: reply text, date presence, date validity, uniqueness.
    pub async fn set(
        &self,
        chat_id: i64,
        reply_text: Option<&str>,
        date_token: Option<&str>,
        today: NaiveDate,
    ) -> Result<SetReminderOutcome> {
        let Some(text) = reply_text.filter(|t| !t.is_empty()) else {
            return Ok(SetReminderOutcome::MissingReply);
        };
        let Some(date_token) = date_token.filter(|d| !d.is_empty()) else {
            return Ok(SetReminderOutcome::MissingDate);
        };
        let date = match parse_reminder_date(date_token, today) {
            Ok(date) => date,
            Err(e) => return Ok(SetReminderOutcome::InvalidDate(e.to_string())),
        };

        let mut reminders = self.store.reminders(chat_id).await?;
        if reminders.iter().any(|r| r.date == date && r.text == text) {
            return Ok(SetReminderOutcome::Duplicate);
        }

        log_store_operation("ADD", "reminders", chat_id, Some(&date.to_string()));
        reminders.push(Reminder::new(date, text));
        self.store.upsert_reminders(chat_id, &reminders).await?;
        Ok(SetReminderOutcome::Added(date))
    }

    pub async fn list(&self, chat_id: i64) -> Result<Vec<Reminder>> {
        self.store.reminders(chat_id).await
    }

    /// Removes one reminder by its 1-based position; later entries shift down.
    pub async fn clear_one(&self, chat_id: i64, index: Option<&str>) -> Result<ClearReminderOutcome> {
        let Some(index) = index.filter(|i| !i.is_empty()) else {
            return Ok(ClearReminderOutcome::MissingIndex);
        };

        let mut reminders = self.store.reminders(chat_id).await?;
        if reminders.is_empty() {
            return Ok(ClearReminderOutcome::NoReminders);
        }

        let position = match parse_reminder_index(index, reminders.len()) {
            Ok(position) => position,
            Err(e) => return Ok(ClearReminderOutcome::InvalidIndex(e.to_string())),
        };

        log_store_operation("REMOVE", "reminders", chat_id, Some(&(position + 1).to_string()));
        reminders.remove(position);
        self.store.upsert_reminders(chat_id, &reminders).await?;
        Ok(ClearReminderOutcome::Cleared(position + 1))
    }

    pub async fn clear_all(&self, chat_id: i64) -> Result<()> {
        log_store_operation("CLEAR", "reminders", chat_id, None);
        self.store.upsert_reminders(chat_id, &[]).await
    }

    /// Drops every reminder dated `today` or earlier and returns how many were removed.
    pub async fn prune_due(&self, chat_id: i64, today: NaiveDate) -> Result<usize> {
        let reminders = self.store.reminders(chat_id).await?;
        let before = reminders.len();
        let upcoming: Vec<Reminder> = reminders.into_iter().filter(|r| !r.is_due(today)).collect();
        let pruned = before - upcoming.len();

        if pruned > 0 {
            log_store_operation("PRUNE", "reminders", chat_id, Some(&format!("{} due", pruned)));
            self.store.upsert_reminders(chat_id, &upcoming).await?;
        }
        Ok(pruned)
    }

    pub async fn chats_with_reminders(&self) -> Result<Vec<i64>> {
        self.store.reminder_chats().await
    }
}
