use anyhow::Result;
use chrono::Utc;
use tracing::debug;

use crate::bot::cooldown::CooldownKind;
use crate::bot::handlers::{BotHandler, CommandContext};
use crate::bot::messenger::Messenger;
use crate::database::models::{Member, RosterKind};
use crate::utils::logging::log_cooldown_hit;
use crate::utils::markdown::{mention_token, pack_tokens, MESSAGE_CHAR_LIMIT};

/// Largest roster that will be mentioned in one go.
pub const MENTION_LIMIT: usize = 50;

/// `/mentionall` mentions the member roster, `/help` the helper roster.
pub async fn handle_mention(handler: &BotHandler, ctx: &CommandContext, kind: CooldownKind) -> Result<()> {
    let feedback = handler.feedback(ctx.chat_id);

    if let Err(remaining) = handler
        .cooldowns
        .try_acquire(kind, ctx.chat_id, ctx.user_id, Utc::now())
    {
        log_cooldown_hit(kind.command(), ctx.user_id, ctx.chat_id, remaining);
        let unit = if remaining == 1 { "second" } else { "seconds" };
        return feedback
            .warning(&format!(
                "Please wait {} {} before using /{} again.",
                remaining,
                unit,
                kind.command()
            ))
            .await;
    }

    let (roster_kind, empty_reply, noun) = match kind {
        CooldownKind::MentionAll => (RosterKind::Members, "No members to mention.", "members"),
        CooldownKind::Help => (RosterKind::Helpers, "No helpers available right now.", "helpers"),
    };

    let members = handler.roster.list(roster_kind, ctx.chat_id).await?;
    if members.is_empty() {
        return feedback.info(empty_reply).await;
    }
    if members.len() > MENTION_LIMIT {
        return feedback
            .warning(&format!(
                "Too many {} to mention ({}). The limit is {}.",
                noun,
                members.len(),
                MENTION_LIMIT
            ))
            .await;
    }

    let tokens = mention_tokens(handler.messenger.as_ref(), ctx.chat_id, &members).await;
    if tokens.is_empty() {
        return feedback.info(empty_reply).await;
    }

    for chunk in pack_tokens(&tokens, MESSAGE_CHAR_LIMIT) {
        feedback.markdown(&chunk).await?;
    }
    Ok(())
}

/// One token per member still present in the chat, in roster order.
pub async fn mention_tokens(messenger: &dyn Messenger, chat_id: i64, members: &[Member]) -> Vec<String> {
    let mut tokens = Vec::with_capacity(members.len());
    for member in members {
        match messenger.get_chat_member(chat_id, member.id).await {
            Ok(Some(profile)) => tokens.push(mention_token(
                profile.id,
                profile.username.as_deref(),
                &profile.display_name,
            )),
            Ok(None) => debug!("Skipping {} in chat {}: no longer in chat", member.id, chat_id),
            Err(e) => debug!("Skipping {} in chat {}: lookup failed: {}", member.id, chat_id, e),
        }
    }
    tokens
}
