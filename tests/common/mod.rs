#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tagall_bot::bot::handlers::BotHandler;
use tagall_bot::bot::messenger::{CommandInfo, MemberProfile, Messenger, TextFormat};
use tagall_bot::bot::update::Update;
use tagall_bot::database::memory::MemoryStore;
use tagall_bot::database::models::{Member, Reminder, RosterKind};
use tagall_bot::database::store::Store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub format: TextFormat,
}

/// Records outbound traffic and answers member lookups from canned profiles.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<SentMessage>>,
    usernames: Mutex<HashMap<i64, String>>,
    display_names: Mutex<HashMap<i64, String>>,
    absent: Mutex<HashSet<i64>>,
    broken: Mutex<HashSet<i64>>,
    commands: Mutex<Vec<CommandInfo>>,
    lookups: AtomicUsize,
    fail_sends: AtomicBool,
}

impl RecordingMessenger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_username(&self, user_id: i64, username: &str) {
        self.usernames.lock().unwrap().insert(user_id, username.to_string());
    }

    pub fn set_display_name(&self, user_id: i64, name: &str) {
        self.display_names.lock().unwrap().insert(user_id, name.to_string());
    }

    /// The user is reported as no longer in the chat.
    pub fn mark_absent(&self, user_id: i64) {
        self.absent.lock().unwrap().insert(user_id);
    }

    /// Lookups for the user fail outright.
    pub fn mark_broken(&self, user_id: i64) {
        self.broken.lock().unwrap().insert(user_id);
    }

    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|m| m.text).collect()
    }

    pub fn last_text(&self) -> String {
        self.texts().pop().unwrap_or_default()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn registered_commands(&self) -> Vec<CommandInfo> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(&self, chat_id: i64, text: &str, format: TextFormat) -> Result<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(anyhow!("send refused"));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat_id,
            text: text.to_string(),
            format,
        });
        Ok(())
    }

    async fn get_chat_member(&self, _chat_id: i64, user_id: i64) -> Result<Option<MemberProfile>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.broken.lock().unwrap().contains(&user_id) {
            return Err(anyhow!("lookup failed"));
        }
        if self.absent.lock().unwrap().contains(&user_id) {
            return Ok(None);
        }
        Ok(Some(MemberProfile {
            id: user_id,
            username: self.usernames.lock().unwrap().get(&user_id).cloned(),
            display_name: self
                .display_names
                .lock()
                .unwrap()
                .get(&user_id)
                .cloned()
                .unwrap_or_else(|| format!("User{user_id}")),
        }))
    }

    async fn get_commands(&self) -> Result<Vec<CommandInfo>> {
        Ok(self.commands.lock().unwrap().clone())
    }

    async fn set_commands(&self, commands: &[CommandInfo]) -> Result<()> {
        *self.commands.lock().unwrap() = commands.to_vec();
        Ok(())
    }
}

pub struct Harness {
    pub handler: BotHandler,
    pub messenger: Arc<RecordingMessenger>,
    pub store: Arc<MemoryStore>,
}

pub fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let messenger = RecordingMessenger::new();
    let handler = BotHandler::new(store.clone() as Arc<dyn Store>, messenger.clone() as Arc<dyn Messenger>);
    Harness {
        handler,
        messenger,
        store,
    }
}

/// Every call fails as if the database were gone.
pub struct FailingStore;

#[async_trait]
impl Store for FailingStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn roster(&self, _kind: RosterKind, _chat_id: i64) -> Result<Vec<Member>> {
        Err(anyhow!("db down"))
    }

    async fn upsert_roster(&self, _kind: RosterKind, _chat_id: i64, _members: &[Member]) -> Result<()> {
        Err(anyhow!("db down"))
    }

    async fn reminders(&self, _chat_id: i64) -> Result<Vec<Reminder>> {
        Err(anyhow!("db down"))
    }

    async fn upsert_reminders(&self, _chat_id: i64, _reminders: &[Reminder]) -> Result<()> {
        Err(anyhow!("db down"))
    }

    async fn reminder_chats(&self) -> Result<Vec<i64>> {
        Err(anyhow!("db down"))
    }

    async fn ping(&self) -> Result<()> {
        Err(anyhow!("db down"))
    }
}

/// A handler wired to a store that always fails.
pub fn failing_handler() -> (BotHandler, Arc<RecordingMessenger>) {
    let messenger = RecordingMessenger::new();
    let handler = BotHandler::new(Arc::new(FailingStore), messenger.clone() as Arc<dyn Messenger>);
    (handler, messenger)
}

pub fn text_update(chat_id: i64, user_id: i64, name: &str, text: &str) -> Update {
    serde_json::from_value(json!({
        "update_id": 1,
        "message": {
            "message_id": 100,
            "chat": {"id": chat_id, "type": "group"},
            "from": {"id": user_id, "is_bot": false, "first_name": name},
            "text": text
        }
    }))
    .unwrap()
}

pub fn reply_update(chat_id: i64, user_id: i64, name: &str, text: &str, replied_to: &str) -> Update {
    serde_json::from_value(json!({
        "update_id": 2,
        "message": {
            "message_id": 101,
            "chat": {"id": chat_id, "type": "group"},
            "from": {"id": user_id, "is_bot": false, "first_name": name},
            "text": text,
            "reply_to_message": {
                "message_id": 99,
                "chat": {"id": chat_id, "type": "group"},
                "text": replied_to
            }
        }
    }))
    .unwrap()
}

impl Harness {
    pub async fn send(&self, chat_id: i64, user_id: i64, name: &str, text: &str) {
        self.handler
            .handle_update(text_update(chat_id, user_id, name, text))
            .await
            .unwrap();
    }

    pub async fn reply(&self, chat_id: i64, user_id: i64, text: &str, replied_to: &str) {
        self.handler
            .handle_update(reply_update(chat_id, user_id, "Replier", text, replied_to))
            .await
            .unwrap();
    }
}
