use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Seconds between two uses of a rate-limited command by the same user in the same chat.
pub const COOLDOWN_SECS: i64 = 10;

/// Commands that share the per-user cooldown mechanism, each in its own namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooldownKind {
    MentionAll,
    Help,
}

impl CooldownKind {
    pub fn command(self) -> &'static str {
        match self {
            CooldownKind::MentionAll => "mentionall",
            CooldownKind::Help => "help",
        }
    }
}

/// Per `(kind, chat, user)` expiry times. Expired entries are dropped lazily.
pub struct CooldownTracker {
    window: Duration,
    entries: Mutex<HashMap<(CooldownKind, i64, i64), DateTime<Utc>>>,
}

impl Default for CooldownTracker {
    fn default() -> Self {
        Self::new(Duration::seconds(COOLDOWN_SECS))
    }
}

impl CooldownTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Arms a fresh cooldown, or returns the whole seconds left on the active one.
    pub fn try_acquire(
        &self,
        kind: CooldownKind,
        chat_id: i64,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> Result<(), u64> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|_, expiry| *expiry > now);

        let key = (kind, chat_id, user_id);
        if let Some(expiry) = entries.get(&key) {
            let remaining_ms = (*expiry - now).num_milliseconds();
            let remaining_secs = (remaining_ms + 999) / 1000;
            return Err(remaining_secs.max(1) as u64);
        }

        entries.insert(key, now + self.window);
        Ok(())
    }
}
