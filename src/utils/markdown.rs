//! Utility functions for building Telegram MarkdownV2 mention messages
//!
//! MarkdownV2 requires escaping of special characters to prevent formatting issues.
//! Mention messages are built from one token per user and split so that no
//! single message exceeds Telegram's length limit.

/// Telegram rejects messages longer than this many characters.
pub const MESSAGE_CHAR_LIMIT: usize = 4096;

const MARKDOWN_V2_SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes markdown special characters for MarkdownV2 parsing mode
///
/// Backslashes are escaped as well so user-supplied names can never start
/// an escape sequence of their own.
///
/// # Example
/// ```
/// use tagall_bot::utils::markdown::escape_markdown;
///
/// let text = "Hello *world* (test)";
/// let escaped = escape_markdown(text);
/// assert_eq!(escaped, "Hello \\*world\\* \\(test\\)");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\\' || MARKDOWN_V2_SPECIAL.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Builds a clickable mention for one user.
///
/// A public handle becomes `@handle`; users without one get a text link
/// pointing at their numeric id.
pub fn mention_token(user_id: i64, username: Option<&str>, display_name: &str) -> String {
    match username.filter(|u| !u.is_empty()) {
        Some(handle) => format!("@{}", escape_markdown(handle)),
        None => format!("[{}](tg://user?id={})", escape_markdown(display_name), user_id),
    }
}

/// Greedily packs space-separated tokens into chunks of at most `limit` characters.
///
/// Tokens are never split. A token longer than `limit` on its own still gets
/// a chunk to itself rather than being dropped.
pub fn pack_tokens(tokens: &[String], limit: usize) -> Vec<String> {
    pack_joined(tokens.iter().map(String::as_str), ' ', limit)
}

/// Packs whole lines into newline-joined chunks of at most `limit` characters.
///
/// Plain text has no markup to break, so a single line longer than `limit`
/// is cut at character boundaries instead of overflowing.
pub fn pack_lines(lines: &[String], limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let pieces = lines.iter().flat_map(|line| split_chars(line, limit));
    pack_joined(pieces, '\n', limit)
}

fn split_chars(line: &str, limit: usize) -> Vec<&str> {
    if line.chars().count() <= limit {
        return vec![line];
    }
    let mut pieces = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(limit)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(cut);
        pieces.push(head);
        rest = tail;
    }
    pieces
}

fn pack_joined<'a>(items: impl IntoIterator<Item = &'a str>, separator: char, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut started = false;

    for item in items {
        let item_len = item.chars().count();
        if !started {
            current.push_str(item);
            current_len = item_len;
            started = true;
        } else if current_len + 1 + item_len <= limit {
            current.push(separator);
            current.push_str(item);
            current_len += 1 + item_len;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(item);
            current_len = item_len;
        }
    }

    if started {
        chunks.push(current);
    }

    chunks
}
