pub mod mention;
pub mod reminders;
pub mod roster;

use teloxide::utils::command::{BotCommands, ParseError};

use crate::bot::messenger::CommandInfo;

/// Commands that work but stay out of the client's command menu.
const UNLISTED: &[&str] = &["start", "reset"];

/// Variant order is the order of the published command menu.
#[derive(BotCommands, Debug, Clone, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Tag-All Bot commands:")]
pub enum Command {
    #[command(description = "Mention all members in the group")]
    MentionAll,
    #[command(description = "Join the group")]
    Join,
    #[command(description = "Leave the group")]
    Leave,
    #[command(description = "Show all members in the group")]
    ShowMembers,
    #[command(description = "Seek help from one of the helpers")]
    Help,
    #[command(description = "Join helpers list")]
    AddToHelp,
    #[command(description = "Show all helpers in the group")]
    ShowHelpers,
    #[command(description = "Leave the helpers")]
    LeaveHelpers,
    #[command(description = "Set a reminder at a specified date YYYY-MM-DD", parse_with = first_word)]
    SetReminder { date: Option<String> },
    #[command(description = "View all reminders")]
    Reminders,
    #[command(description = "Clear all reminders for the group")]
    ClearReminders,
    #[command(description = "Clear a specific reminder by index", parse_with = first_word)]
    ClearReminder { index: Option<String> },
    #[command(description = "off")]
    Start,
    #[command(description = "off")]
    Reset,
}

/// Keeps only the first whitespace-separated word of the arguments.
fn first_word(input: String) -> Result<(Option<String>,), ParseError> {
    Ok((input.split_whitespace().next().map(str::to_string),))
}

impl Command {
    /// Parses message text into a command.
    ///
    /// The command is the first whitespace-separated word, optionally suffixed
    /// with `@botname`; the argument, where one is taken, is the second word.
    /// When `bot_username` is known, commands addressed to another bot are
    /// ignored. Without it any suffix is accepted. Anything unrecognised yields `None`.
    pub fn from_text(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let mut words = text.split_whitespace();
        let head = words.next()?;
        if !head.starts_with('/') {
            return None;
        }
        let argument = words.next();

        let name = match head.split_once('@') {
            Some((name, target)) => {
                if let Some(own) = bot_username {
                    if !target.eq_ignore_ascii_case(own) {
                        return None;
                    }
                }
                name
            }
            None => head,
        };
        let own = bot_username.unwrap_or_default();

        // Commands without arguments reject trailing words, so fall back to the bare name.
        let parsed = match argument {
            Some(arg) => <Self as BotCommands>::parse(&format!("{name} {arg}"), own)
                .or_else(|_| <Self as BotCommands>::parse(name, own)),
            None => <Self as BotCommands>::parse(name, own),
        };
        parsed.ok()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Join => "join",
            Command::Leave => "leave",
            Command::ShowMembers => "showmembers",
            Command::MentionAll => "mentionall",
            Command::AddToHelp => "addtohelp",
            Command::ShowHelpers => "showhelpers",
            Command::LeaveHelpers => "leavehelpers",
            Command::Help => "help",
            Command::Reset => "reset",
            Command::SetReminder { .. } => "setreminder",
            Command::Reminders => "reminders",
            Command::ClearReminders => "clearreminders",
            Command::ClearReminder { .. } => "clearreminder",
        }
    }

    /// The argument word, for commands that take one.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Command::SetReminder { date } => date.as_deref(),
            Command::ClearReminder { index } => index.as_deref(),
            _ => None,
        }
    }
}

/// Entries published to the client's command menu.
pub fn command_menu() -> Vec<CommandInfo> {
    Command::bot_commands()
        .into_iter()
        .map(|c| CommandInfo {
            command: c.command.trim_start_matches('/').to_string(),
            description: c.description,
        })
        .filter(|c| !UNLISTED.contains(&c.command.as_str()))
        .collect()
}
