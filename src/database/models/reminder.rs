use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::datetime::format_human_date;
use crate::utils::markdown::{pack_lines, MESSAGE_CHAR_LIMIT};

/// A dated reminder attached to the text of a replied-to message.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Reminder {
    pub date: NaiveDate,
    pub text: String,
}

impl Reminder {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }

    /// Due reminders are pruned by the daily sweep.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.date <= today
    }
}

/// Renders a 1-based numbered list split into sendable messages.
///
/// Empty when there is nothing to show. Lines are never split across
/// messages unless one line alone exceeds the limit.
pub fn render_reminder_list(reminders: &[Reminder]) -> Vec<String> {
    let lines: Vec<String> = reminders
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {} - {}", i + 1, r.text, format_human_date(&r.date)))
        .collect();
    pack_lines(&lines, MESSAGE_CHAR_LIMIT)
}
