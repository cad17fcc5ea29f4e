//! chat-overlay - chat overlay harness
//!
//! Interprets chat input lines (`/me`, `/help`), builds sequenced messages,
//! and appends them to dummy channels owned by a single worker context.

pub mod chat;
pub mod config;
pub mod error;
pub mod harness;
pub mod logging;

pub use chat::{
    parse_input, spawn, Channel, ChannelEntry, ChannelManager, ChatCommand, ChatInput,
    ChatOverlay, InfoKind, InfoMessage, Message, MessageDraft, MessageFactory, MessageId,
    MessageSequence, PostOutcome, Scheduler, TextInput,
};
pub use config::Config;
pub use error::{ChatError, Result};
pub use harness::{default_steps, ChatDisplayHarness, StepAction, TestStep};
