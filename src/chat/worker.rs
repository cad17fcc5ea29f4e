//! Worker context that owns all channels.
//!
//! The worker is a single tokio task holding the [`ChannelManager`]. Other
//! code reaches it only through a [`Scheduler`], which queues jobs that the
//! worker runs one at a time in submission order. Channels therefore have
//! exactly one writer.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::manager::ChannelManager;
use super::message::{InfoMessage, Message};
use crate::{ChatError, Result};

/// A job run on the worker context.
pub type Job = Box<dyn FnOnce(&mut ChannelManager) + Send + 'static>;

/// Handle for queueing jobs onto the worker context.
#[derive(Clone)]
pub struct Scheduler {
    sender: mpsc::UnboundedSender<Job>,
}

impl Scheduler {
    /// Queue a job. It runs after every job scheduled before it.
    ///
    /// Once queued a job cannot be withdrawn.
    pub fn schedule<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce(&mut ChannelManager) + Send + 'static,
    {
        self.sender
            .send(Box::new(job))
            .map_err(|_| ChatError::WorkerStopped)
    }

    /// Queue a read and wait for its result.
    ///
    /// The read observes every job scheduled before it.
    pub async fn query<F, T>(&self, read: F) -> Result<T>
    where
        F: FnOnce(&ChannelManager) -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        self.schedule(move |channels| {
            let _ = tx.send(read(channels));
        })?;
        rx.await.map_err(|_| ChatError::WorkerStopped)
    }

    /// Queue appending a chat message to a channel.
    pub fn append_message(&self, channel_id: u64, message: Message) -> Result<()> {
        self.schedule(move |channels| match channels.get_mut(channel_id) {
            Some(channel) => {
                debug!(channel_id, message_id = %message.id(), "appending message");
                channel.append_message(message);
            }
            None => warn!(channel_id, message_id = %message.id(), "dropping message for missing channel"),
        })
    }

    /// Queue appending an informational record to a channel.
    pub fn append_info(&self, channel_id: u64, info: InfoMessage) -> Result<()> {
        self.schedule(move |channels| match channels.get_mut(channel_id) {
            Some(channel) => {
                debug!(channel_id, kind = %info.kind, "appending info");
                channel.append_info(info);
            }
            None => warn!(channel_id, kind = %info.kind, "dropping info for missing channel"),
        })
    }

    /// Display lines of a channel, read on the worker.
    pub async fn transcript(&self, channel_id: u64) -> Result<Vec<String>> {
        self.query(move |channels| channels.get(channel_id).map(|c| c.transcript()))
            .await?
            .ok_or(ChatError::ChannelNotFound(channel_id))
    }

    /// Whether the worker has stopped accepting jobs.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Start the worker context on the current tokio runtime.
///
/// The worker runs until every [`Scheduler`] clone is dropped, then hands
/// the channels back through the join handle.
pub fn spawn(channels: ChannelManager) -> (Scheduler, JoinHandle<ChannelManager>) {
    let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();

    let handle = tokio::spawn(async move {
        let mut channels = channels;
        while let Some(job) = receiver.recv().await {
            job(&mut channels);
        }
        debug!("worker context stopped");
        channels
    });

    (Scheduler { sender }, handle)
}
