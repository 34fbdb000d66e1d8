use anyhow::Result;
use chrono::Utc;

use crate::bot::handlers::{BotHandler, CommandContext};
use crate::database::models::render_reminder_list;
use crate::services::reminder_book::{ClearReminderOutcome, SetReminderOutcome};
use crate::utils::logging::{log_command_error, log_validation_error};

/// Store failures are answered here instead of failing the whole update.
pub async fn handle_set_reminder(handler: &BotHandler, ctx: &CommandContext, date: Option<&str>) -> Result<()> {
    let feedback = handler.feedback(ctx.chat_id);
    let today = Utc::now().date_naive();

    let outcome = match handler
        .reminders
        .set(ctx.chat_id, ctx.reply_text.as_deref(), date, today)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            log_command_error("setreminder", &ctx.user_name, ctx.user_id, ctx.chat_id, &format!("{e:#}"));
            return feedback.error("Failed to set reminder, please try again later").await;
        }
    };

    match outcome {
        SetReminderOutcome::MissingReply => {
            feedback.error("Please reply to a message to set a reminder").await
        }
        SetReminderOutcome::MissingDate => {
            feedback
                .error("Please provide a date for the reminder with the format /setreminder <yyyy-mm-dd>")
                .await
        }
        SetReminderOutcome::InvalidDate(reason) => {
            log_validation_error("setreminder", "date", date.unwrap_or_default(), &reason, ctx.user_id, ctx.chat_id);
            feedback
                .error("Invalid date, please provide a valid date in the format yyyy-mm-dd")
                .await
        }
        SetReminderOutcome::Duplicate => {
            feedback
                .warning("Reminder already set for the message at the same date")
                .await
        }
        SetReminderOutcome::Added(_) => {
            let typed = date.map(str::trim).unwrap_or_default();
            feedback.success(&format!("Reminder set for {}", typed)).await
        }
    }
}

pub async fn handle_list_reminders(handler: &BotHandler, ctx: &CommandContext) -> Result<()> {
    let feedback = handler.feedback(ctx.chat_id);
    let reminders = handler.reminders.list(ctx.chat_id).await?;

    let messages = render_reminder_list(&reminders);
    if messages.is_empty() {
        return feedback.info("No reminders found.").await;
    }
    for message in &messages {
        feedback.plain(message).await?;
    }
    Ok(())
}

pub async fn handle_clear_reminders(handler: &BotHandler, ctx: &CommandContext) -> Result<()> {
    handler.reminders.clear_all(ctx.chat_id).await?;
    handler.feedback(ctx.chat_id).success("Reminders cleared").await
}

pub async fn handle_clear_reminder(handler: &BotHandler, ctx: &CommandContext, index: Option<&str>) -> Result<()> {
    let feedback = handler.feedback(ctx.chat_id);

    match handler.reminders.clear_one(ctx.chat_id, index).await? {
        ClearReminderOutcome::MissingIndex => {
            feedback.error("Please provide a reminder index to clear").await
        }
        ClearReminderOutcome::NoReminders => feedback.info("No reminders found").await,
        ClearReminderOutcome::InvalidIndex(reason) => {
            log_validation_error("clearreminder", "index", index.unwrap_or_default(), &reason, ctx.user_id, ctx.chat_id);
            feedback.error("Invalid reminder index").await
        }
        ClearReminderOutcome::Cleared(position) => {
            feedback
                .success(&format!("Reminder at index {} cleared", position))
                .await
        }
    }
}
