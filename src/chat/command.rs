//! Chat command parser.
//!
//! Input starting with `/` is a command; anything else is sent as typed.
//! Supported commands are `/me [action]` and `/help`.

use super::message::InfoMessage;

/// Reply to `/me` without an action.
pub const ME_USAGE: &str = "Usage: /me [action]";

/// Reply to `/help`.
pub const HELP_TEXT: &str = "Supported commands: /help, /me [action]";

/// Result of parsing a chat input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// Empty or whitespace-only input. Dropped without feedback.
    Empty,
    /// Regular chat message, exactly as typed.
    Message(String),
    /// Parsed command.
    Command(ChatCommand),
}

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Send an action message (e.g., "/me dances"). Content is kept verbatim
    /// and may be blank.
    Me(String),
    /// Show the supported commands.
    Help,
    /// Unknown command.
    Unknown(String),
}

impl ChatCommand {
    /// Get the command name.
    pub fn name(&self) -> &str {
        match self {
            ChatCommand::Me(_) => "me",
            ChatCommand::Help => "help",
            ChatCommand::Unknown(cmd) => cmd,
        }
    }

    /// Resolve the command into the action text to post, or the record to
    /// show instead.
    ///
    /// Only `/me` with non-blank content yields an action.
    pub fn into_action(self) -> Result<String, InfoMessage> {
        match self {
            ChatCommand::Me(content) if content.trim().is_empty() => {
                Err(InfoMessage::error(ME_USAGE))
            }
            ChatCommand::Me(content) => Ok(content),
            ChatCommand::Help => Err(InfoMessage::info(HELP_TEXT)),
            ChatCommand::Unknown(cmd) => Err(InfoMessage::error(unsupported_text(&cmd))),
        }
    }
}

impl std::fmt::Display for ChatCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatCommand::Me(action) => write!(f, "/me {action}"),
            ChatCommand::Help => write!(f, "/help"),
            ChatCommand::Unknown(cmd) => write!(f, "/{cmd}"),
        }
    }
}

/// Error text for an unknown command.
pub fn unsupported_text(command: &str) -> String {
    format!("\"/{command}\" is not supported! For a list of supported commands see /help")
}

/// Parse a chat input line into a message or command.
///
/// Only the command name is split off, at the first space. Command names
/// are case-sensitive.
pub fn parse_input(input: &str) -> ChatInput {
    if input.trim().is_empty() {
        return ChatInput::Empty;
    }

    let Some(without_slash) = input.strip_prefix('/') else {
        return ChatInput::Message(input.to_string());
    };

    let (cmd, content) = without_slash
        .split_once(' ')
        .unwrap_or((without_slash, ""));

    let command = match cmd {
        "me" => ChatCommand::Me(content.to_string()),
        "help" => ChatCommand::Help,
        _ => ChatCommand::Unknown(cmd.to_string()),
    };

    ChatInput::Command(command)
}
