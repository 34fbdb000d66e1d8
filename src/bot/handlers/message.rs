use anyhow::Result;

use crate::bot::commands::{mention, reminders, roster, Command};
use crate::bot::cooldown::CooldownKind;
use crate::bot::handlers::{BotHandler, CommandContext};
use crate::database::models::RosterKind;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

pub async fn command_handler(
    handler: &BotHandler,
    ctx: &CommandContext,
    cmd: Command,
) -> Result<()> {
    let name = cmd.name();
    let details = cmd.argument().map(|arg| format!("arg={arg}"));
    log_command_start(name, &ctx.user_name, ctx.user_id, ctx.chat_id, details.as_deref());

    let result = match cmd {
        Command::Start => {
            handler
                .feedback(ctx.chat_id)
                .plain("Hello! Use /join to join the group.")
                .await
        }
        Command::Join => roster::handle_join(handler, ctx, RosterKind::Members).await,
        Command::Leave => roster::handle_leave(handler, ctx, RosterKind::Members).await,
        Command::ShowMembers => roster::handle_show(handler, ctx, RosterKind::Members).await,
        Command::AddToHelp => roster::handle_join(handler, ctx, RosterKind::Helpers).await,
        Command::LeaveHelpers => roster::handle_leave(handler, ctx, RosterKind::Helpers).await,
        Command::ShowHelpers => roster::handle_show(handler, ctx, RosterKind::Helpers).await,
        Command::MentionAll => mention::handle_mention(handler, ctx, CooldownKind::MentionAll).await,
        Command::Help => mention::handle_mention(handler, ctx, CooldownKind::Help).await,
        Command::Reset => roster::handle_reset(handler, ctx).await,
        Command::SetReminder { date } => {
            reminders::handle_set_reminder(handler, ctx, date.as_deref()).await
        }
        Command::Reminders => reminders::handle_list_reminders(handler, ctx).await,
        Command::ClearReminders => reminders::handle_clear_reminders(handler, ctx).await,
        Command::ClearReminder { index } => {
            reminders::handle_clear_reminder(handler, ctx, index.as_deref()).await
        }
    };

    match &result {
        Ok(()) => log_command_success(name, &ctx.user_name, ctx.user_id, ctx.chat_id, details.as_deref()),
        Err(e) => log_command_error(name, &ctx.user_name, ctx.user_id, ctx.chat_id, &format!("{e:#}")),
    }
    result
}
