//! Outbound delivery to the messaging platform.
//!
//! Command handlers only ever talk to [`Messenger`]; [`TelegramMessenger`] is the
//! production adapter on top of teloxide.

use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, ChatMemberKind, ParseMode};

/// How the platform should interpret message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    MarkdownV2,
}

/// Live profile of a chat participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub id: i64,
    pub username: Option<String>,
    pub display_name: String,
}

/// A command entry as shown in the client's command menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    pub command: String,
    pub description: String,
}

#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(&self, chat_id: i64, text: &str, format: TextFormat) -> Result<()>;

    /// `None` when the user is no longer part of the chat.
    async fn get_chat_member(&self, chat_id: i64, user_id: i64) -> Result<Option<MemberProfile>>;

    async fn get_commands(&self) -> Result<Vec<CommandInfo>>;

    async fn set_commands(&self, commands: &[CommandInfo]) -> Result<()>;
}

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(&self, chat_id: i64, text: &str, format: TextFormat) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat_id), text);
        match format {
            TextFormat::Plain => request.await?,
            TextFormat::MarkdownV2 => request.parse_mode(ParseMode::MarkdownV2).await?,
        };
        Ok(())
    }

    async fn get_chat_member(&self, chat_id: i64, user_id: i64) -> Result<Option<MemberProfile>> {
        let member = self
            .bot
            .get_chat_member(ChatId(chat_id), UserId(user_id as u64))
            .await?;

        if matches!(member.kind, ChatMemberKind::Left | ChatMemberKind::Banned(_)) {
            return Ok(None);
        }

        Ok(Some(MemberProfile {
            id: user_id,
            username: member.user.username.clone(),
            display_name: member.user.first_name.clone(),
        }))
    }

    async fn get_commands(&self) -> Result<Vec<CommandInfo>> {
        let commands = self.bot.get_my_commands().await?;
        Ok(commands
            .into_iter()
            .map(|c| CommandInfo {
                command: c.command,
                description: c.description,
            })
            .collect())
    }

    async fn set_commands(&self, commands: &[CommandInfo]) -> Result<()> {
        let commands: Vec<BotCommand> = commands
            .iter()
            .map(|c| BotCommand::new(c.command.clone(), c.description.clone()))
            .collect();
        self.bot.set_my_commands(commands).await?;
        Ok(())
    }
}
