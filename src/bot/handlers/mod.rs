pub mod membership;
pub mod message;

use anyhow::Result;
use std::sync::Arc;

use crate::bot::commands::{command_menu, Command};
use crate::bot::cooldown::CooldownTracker;
use crate::bot::messenger::Messenger;
use crate::bot::update::Update;
use crate::database::store::Store;
use crate::services::reminder_book::ReminderBook;
use crate::services::roster::RosterService;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::log_system_event;

/// What the webhook should report back for one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Processed,
    Ignored,
}

/// Who issued a command, where, and what they replied to.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub chat_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub reply_text: Option<String>,
}

/// Routes inbound updates to the roster and reminder operations.
///
/// This is the only component that sends messages in response to a command.
#[derive(Clone)]
pub struct BotHandler {
    pub roster: RosterService,
    pub reminders: ReminderBook,
    pub messenger: Arc<dyn Messenger>,
    pub cooldowns: Arc<CooldownTracker>,
    pub bot_username: Option<String>,
}

impl BotHandler {
    pub fn new(store: Arc<dyn Store>, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            roster: RosterService::new(store.clone()),
            reminders: ReminderBook::new(store),
            messenger,
            cooldowns: Arc::new(CooldownTracker::default()),
            bot_username: None,
        }
    }

    pub fn with_bot_username(mut self, bot_username: Option<String>) -> Self {
        self.bot_username = bot_username;
        self
    }

    pub fn feedback(&self, chat_id: i64) -> CommandFeedback {
        CommandFeedback::new(self.messenger.clone(), chat_id)
    }

    pub async fn handle_update(&self, update: Update) -> Result<UpdateOutcome> {
        let Some(msg) = update.message else {
            return Ok(UpdateOutcome::Ignored);
        };
        let chat_id = msg.chat.id;
        let mut handled = false;

        if !msg.new_chat_members.is_empty() {
            membership::handle_new_members(self, chat_id, &msg.new_chat_members).await?;
            handled = true;
        }

        if let Some(left) = &msg.left_chat_member {
            membership::handle_left_member(self, chat_id, left).await?;
            handled = true;
        }

        if let Some(text) = msg.text.as_deref() {
            handled = true;
            let Some(cmd) = Command::from_text(text, self.bot_username.as_deref()) else {
                return Ok(UpdateOutcome::Processed);
            };
            let Some(from) = msg.from.as_ref() else {
                return Ok(UpdateOutcome::Processed);
            };

            let ctx = CommandContext {
                chat_id,
                user_id: from.id,
                user_name: from.display_name(),
                reply_text: msg.reply_text().map(str::to_string),
            };
            message::command_handler(self, &ctx, cmd).await?;
        }

        Ok(if handled {
            UpdateOutcome::Processed
        } else {
            UpdateOutcome::Ignored
        })
    }

    /// Publishes the command menu when the registered one differs in size.
    ///
    /// Returns whether the menu was (re)published.
    pub async fn sync_commands(&self) -> Result<bool> {
        let desired = command_menu();
        let current = self.messenger.get_commands().await?;

        if current.len() == desired.len() {
            log_system_event("Commands already set", None);
            return Ok(false);
        }

        self.messenger.set_commands(&desired).await?;
        log_system_event("Bot commands set", Some(&format!("{} commands", desired.len())));
        Ok(true)
    }
}
