use anyhow::Result;

use crate::bot::handlers::BotHandler;
use crate::bot::update::User;
use crate::database::models::{Member, RosterKind};
use crate::services::roster::JoinOutcome;
use crate::utils::logging::log_system_event;

/// Registers users the platform added to the chat and greets them.
pub async fn handle_new_members(handler: &BotHandler, chat_id: i64, users: &[User]) -> Result<()> {
    for user in users.iter().filter(|u| !u.is_bot) {
        let name = user.display_name();
        let outcome = handler
            .roster
            .join(RosterKind::Members, chat_id, Member::new(user.id, name.clone()))
            .await?;

        if outcome == JoinOutcome::Joined {
            log_system_event("Member added by platform", Some(&format!("{} in chat {}", user.id, chat_id)));
        }

        handler
            .feedback(chat_id)
            .plain(&format!("Welcome, {}! You have been added to the members list.", name))
            .await?;
    }
    Ok(())
}

/// Drops a departed user from both rosters and announces it.
pub async fn handle_left_member(handler: &BotHandler, chat_id: i64, user: &User) -> Result<()> {
    if user.is_bot {
        return Ok(());
    }

    handler.roster.leave(RosterKind::Members, chat_id, user.id).await?;
    handler.roster.leave(RosterKind::Helpers, chat_id, user.id).await?;
    log_system_event("Member removed by platform", Some(&format!("{} in chat {}", user.id, chat_id)));

    handler
        .feedback(chat_id)
        .plain(&format!("{} has left the chat.", user.display_name()))
        .await
}
