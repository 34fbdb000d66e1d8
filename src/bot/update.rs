//! The subset of a Telegram `Update` the bot reacts to.
//!
//! Every field the bot does not need is ignored, and optional parts default to
//! empty so that update kinds the bot never handles still deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message_id: i64,
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
    pub reply_to_message: Option<Box<Message>>,
    #[serde(default)]
    pub new_chat_members: Vec<User>,
    pub left_chat_member: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub first_name: String,
    pub username: Option<String>,
}

impl Message {
    /// Text of the message this one replies to, if any.
    pub fn reply_text(&self) -> Option<&str> {
        self.reply_to_message.as_deref().and_then(|m| m.text.as_deref())
    }
}

impl User {
    /// Name shown in roster listings; falls back to the handle, then the id.
    pub fn display_name(&self) -> String {
        if !self.first_name.trim().is_empty() {
            return self.first_name.clone();
        }
        match &self.username {
            Some(username) if !username.is_empty() => username.clone(),
            _ => self.id.to_string(),
        }
    }
}
