//! Chat module.
//!
//! This module provides the chat overlay core:
//! - Command parsing (/me, /help)
//! - Message construction with sequenced identifiers
//! - Append-only channels owned by a single worker context

mod channel;
mod command;
mod factory;
mod manager;
mod message;
mod overlay;
mod sequence;
mod worker;

pub use channel::Channel;
pub use command::{parse_input, unsupported_text, ChatCommand, ChatInput, HELP_TEXT, ME_USAGE};
pub use factory::{MessageDraft, MessageFactory};
pub use manager::{ChannelInfo, ChannelManager};
pub use message::{
    ChannelEntry, InfoKind, InfoMessage, Message, MessageId, Sender, HIGHLIGHT_COLOUR,
};
pub use overlay::{ChatOverlay, PostOutcome, TextInput};
pub use sequence::MessageSequence;
pub use worker::{spawn, Job, Scheduler};
