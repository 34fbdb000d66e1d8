use anyhow::Result;

use crate::bot::handlers::{BotHandler, CommandContext};
use crate::database::models::{display_names, Member, RosterKind};
use crate::services::roster::{JoinOutcome, LeaveOutcome};

struct RosterReplies {
    joined: &'static str,
    already: &'static str,
    left: &'static str,
    absent: &'static str,
    empty: &'static str,
}

fn replies(kind: RosterKind) -> RosterReplies {
    match kind {
        RosterKind::Members => RosterReplies {
            joined: "You have joined the group!",
            already: "You are already a member!",
            left: "You have left the group!",
            absent: "You are not a member!",
            empty: "No members found.",
        },
        RosterKind::Helpers => RosterReplies {
            joined: "You have joined the helpers!",
            already: "You are already a helper!",
            left: "You have left the helpers!",
            absent: "You are not a helper!",
            empty: "No helpers found.",
        },
    }
}

pub async fn handle_join(handler: &BotHandler, ctx: &CommandContext, kind: RosterKind) -> Result<()> {
    let feedback = handler.feedback(ctx.chat_id);
    let member = Member::new(ctx.user_id, ctx.user_name.clone());

    match handler.roster.join(kind, ctx.chat_id, member).await? {
        JoinOutcome::Joined => feedback.success(replies(kind).joined).await,
        JoinOutcome::AlreadyPresent => feedback.warning(replies(kind).already).await,
    }
}

pub async fn handle_leave(handler: &BotHandler, ctx: &CommandContext, kind: RosterKind) -> Result<()> {
    let feedback = handler.feedback(ctx.chat_id);

    match handler.roster.leave(kind, ctx.chat_id, ctx.user_id).await? {
        LeaveOutcome::Left => feedback.success(replies(kind).left).await,
        LeaveOutcome::NotPresent => feedback.warning(replies(kind).absent).await,
    }
}

pub async fn handle_show(handler: &BotHandler, ctx: &CommandContext, kind: RosterKind) -> Result<()> {
    let feedback = handler.feedback(ctx.chat_id);
    let members = handler.roster.list(kind, ctx.chat_id).await?;

    match display_names(&members) {
        Some(names) => feedback.plain(&names).await,
        None => feedback.info(replies(kind).empty).await,
    }
}

/// Clears members, helpers and reminders of this chat only.
pub async fn handle_reset(handler: &BotHandler, ctx: &CommandContext) -> Result<()> {
    handler.roster.reset(ctx.chat_id).await?;
    handler.reminders.clear_all(ctx.chat_id).await?;
    handler.feedback(ctx.chat_id).success("Bot has been reset.").await
}
