use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::bot::messenger::{Messenger, TextFormat};
use crate::database::models::render_reminder_list;
use crate::services::reminder_book::ReminderBook;
use crate::utils::logging::log_store_error;

/// Totals from one sweep pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub chats: usize,
    pub announced: usize,
    pub pruned: usize,
}

/// Runs the daily reminder sweep on a cron schedule.
pub struct ReminderService {
    messenger: Arc<dyn Messenger>,
    book: ReminderBook,
    schedule: String,
    scheduler: JobScheduler,
}

impl ReminderService {
    pub async fn new(
        messenger: Arc<dyn Messenger>,
        book: ReminderBook,
        schedule: impl Into<String>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            messenger,
            book,
            schedule: schedule.into(),
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let messenger = self.messenger.clone();
        let book = self.book.clone();

        let sweep_job = Job::new_async(self.schedule.as_str(), move |_uuid, _l| {
            let messenger = messenger.clone();
            let book = book.clone();
            Box::pin(async move {
                match sweep_due(messenger.as_ref(), &book, Utc::now()).await {
                    Ok(report) => tracing::info!(
                        "Reminder sweep done: {} chats, {} announced, {} pruned",
                        report.chats,
                        report.announced,
                        report.pruned
                    ),
                    Err(e) => tracing::error!("Reminder sweep failed: {:#}", e),
                }
            })
        })?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Reminder service started - sweeping on schedule '{}' (UTC)", self.schedule);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn check_reminders_now(&self) -> Result<SweepReport> {
        sweep_due(self.messenger.as_ref(), &self.book, Utc::now()).await
    }
}

async fn announce(messenger: &dyn Messenger, chat_id: i64, messages: &[String]) -> Result<()> {
    for message in messages {
        messenger.send_message(chat_id, message, TextFormat::Plain).await?;
    }
    Ok(())
}

/// Announces every chat's full reminder list, then prunes what is due.
///
/// Entries that are not yet due are announced too; only past-due ones are
/// removed. Long lists go out as several messages; a chat whose
/// announcement fails part-way keeps its list untouched until
/// the next sweep.
pub async fn sweep_due(messenger: &dyn Messenger, book: &ReminderBook, now: DateTime<Utc>) -> Result<SweepReport> {
    let today = now.date_naive();
    let mut report = SweepReport::default();

    for chat_id in book.chats_with_reminders().await? {
        report.chats += 1;
        let reminders = book.list(chat_id).await?;
        let messages = render_reminder_list(&reminders);
        if messages.is_empty() {
            continue;
        }

        if let Err(e) = announce(messenger, chat_id, &messages).await {
            tracing::error!("Failed to announce reminders to chat {}: {:#}", chat_id, e);
            continue;
        }
        report.announced += 1;
        match book.prune_due(chat_id, today).await {
            Ok(pruned) => report.pruned += pruned,
            Err(e) => log_store_error("PRUNE", "reminders", &format!("{e:#}"), Some(&format!("chat {}", chat_id))),
        }
    }

    Ok(report)
}
