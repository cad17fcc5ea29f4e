//! Scripted chat display harness.
//!
//! Sets up a dummy channel seeded with a few anonymous messages, then runs
//! steps that switch between short, long and wide usernames and post a
//! line after each switch.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::chat::{
    spawn, ChannelManager, ChatOverlay, MessageFactory, MessageSequence, PostOutcome, Scheduler,
};
use crate::config::Config;
use crate::{ChatError, Result};

/// What a step does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Change the poster's username.
    SetUsername(String),
    /// Post a line as if it was typed and committed.
    Post(String),
}

/// A named harness step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestStep {
    pub description: String,
    pub action: StepAction,
}

impl TestStep {
    pub fn set_username(description: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            action: StepAction::SetUsername(username.into()),
        }
    }

    /// A step posting `text`, described as `Type "text"`.
    pub fn post(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            description: format!("Type \"{text}\""),
            action: StepAction::Post(text),
        }
    }
}

/// The username edge cases: a normal name, one longer than 15 characters,
/// and 15 of the widest glyph.
pub fn default_steps() -> Vec<TestStep> {
    vec![
        TestStep::set_username("Set Username DummyUser", "DummyUser"),
        TestStep::post("Hello"),
        TestStep::set_username("Set Long Username", "Over15LengthUserName"),
        TestStep::post("Over15LengthUserName"),
        TestStep::set_username("Set Wide Username", "WWWWWWWWWWWWWWW"),
        TestStep::post("Wide!"),
    ]
}

/// The running harness: an overlay bound to the dummy channel.
pub struct ChatDisplayHarness {
    overlay: ChatOverlay,
    channel_id: u64,
    worker: Option<JoinHandle<ChannelManager>>,
}

impl ChatDisplayHarness {
    /// Start the worker, create and seed the dummy channel, and open it.
    ///
    /// Returns once seeding has run, so later posts get higher IDs than
    /// every seeded message.
    pub async fn setup(config: &Config) -> Result<Self> {
        let sequence = Arc::new(MessageSequence::new());
        let factory =
            MessageFactory::with_highlight_colour(sequence, config.chat.highlight_colour.clone());
        let (scheduler, worker) = spawn(ChannelManager::new());

        let channel_id = config.channel.id;
        seed_channel(&scheduler, &factory, config)?;
        scheduler.query(|_| ()).await?;

        let mut overlay = ChatOverlay::new(config.chat.username.clone(), factory, scheduler);
        overlay.open_channel(channel_id);

        Ok(Self {
            overlay,
            channel_id,
            worker: Some(worker),
        })
    }

    pub fn overlay(&self) -> &ChatOverlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut ChatOverlay {
        &mut self.overlay
    }

    pub fn channel_id(&self) -> u64 {
        self.channel_id
    }

    /// Run one step. Username steps report `PostOutcome::Ignored`.
    pub fn run_step(&mut self, step: &TestStep) -> Result<PostOutcome> {
        info!(step = %step.description, "running step");
        match &step.action {
            StepAction::SetUsername(name) => {
                self.overlay.set_username(name.clone());
                Ok(PostOutcome::Ignored)
            }
            StepAction::Post(text) => self.overlay.post_message(text),
        }
    }

    /// Run steps in order, stopping at the first error.
    pub fn run_all(&mut self, steps: &[TestStep]) -> Result<Vec<PostOutcome>> {
        steps.iter().map(|step| self.run_step(step)).collect()
    }

    /// Display lines of the dummy channel once all scheduled appends ran.
    pub async fn transcript(&self) -> Result<Vec<String>> {
        self.overlay.scheduler().transcript(self.channel_id).await
    }

    /// Stop the worker and return the channels it owned.
    pub async fn shutdown(mut self) -> Result<ChannelManager> {
        let worker = self.worker.take().ok_or(ChatError::WorkerStopped)?;
        drop(self);
        worker.await.map_err(|_| ChatError::WorkerStopped)
    }
}

fn seed_channel(scheduler: &Scheduler, factory: &MessageFactory, config: &Config) -> Result<()> {
    let channel = config.channel.clone();
    let factory = factory.clone();

    scheduler.schedule(move |channels| {
        let Some(created) =
            channels.create_channel(channel.id, channel.name, channel.topic, channel.channel_type)
        else {
            tracing::warn!(channel_id = channel.id, "channel already exists, not seeding");
            return;
        };
        for text in channel.seed_messages {
            created.add_new_message(&factory, text);
        }
    })
}
