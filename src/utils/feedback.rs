use anyhow::Result;
use std::sync::Arc;

use crate::bot::messenger::{Messenger, TextFormat};

/// Feedback types for different command outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
}

impl FeedbackType {
    fn label(&self) -> &'static str {
        match self {
            FeedbackType::Success => "success",
            FeedbackType::Warning => "warning",
            FeedbackType::Error => "error",
            FeedbackType::Info => "info",
        }
    }
}

/// Centralized feedback system for bot commands
pub struct CommandFeedback {
    messenger: Arc<dyn Messenger>,
    chat_id: i64,
}

impl CommandFeedback {
    pub fn new(messenger: Arc<dyn Messenger>, chat_id: i64) -> Self {
        Self { messenger, chat_id }
    }

    /// Send a reply verbatim; the outcome type only shows up in the logs
    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> Result<()> {
        tracing::debug!("Reply [{}] to chat {}: {}", feedback_type.label(), self.chat_id, message);
        self.plain(message).await
    }

    /// Send text exactly as given
    pub async fn plain(&self, message: &str) -> Result<()> {
        self.messenger
            .send_message(self.chat_id, message, TextFormat::Plain)
            .await
    }

    /// Send already-escaped MarkdownV2 text
    pub async fn markdown(&self, message: &str) -> Result<()> {
        self.messenger
            .send_message(self.chat_id, message, TextFormat::MarkdownV2)
            .await
    }

    pub async fn success(&self, message: &str) -> Result<()> {
        self.send(FeedbackType::Success, message).await
    }

    pub async fn error(&self, message: &str) -> Result<()> {
        self.send(FeedbackType::Error, message).await
    }

    pub async fn warning(&self, message: &str) -> Result<()> {
        self.send(FeedbackType::Warning, message).await
    }

    pub async fn info(&self, message: &str) -> Result<()> {
        self.send(FeedbackType::Info, message).await
    }
}
