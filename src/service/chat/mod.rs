pub mod slack;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::{
    base::types::{Res, TriageMessage, Void},
    triage::Modal,
};

// Types.

/// Result of fetching a channel's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelHistory {
    /// The channel's messages, oldest first.
    Messages(Vec<TriageMessage>),
    /// The bot must join the channel before it can read history.
    NotInChannel,
}

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the platform calls the triage flow needs. Implementing
/// it allows the interaction handlers to run against any chat service.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Start the chat client listener.
    ///
    /// This sets up event listeners for the chat platform and begins processing
    /// shortcuts and modal submissions.
    async fn start(&self) -> Void;

    /// Open a modal in response to the interaction that issued `trigger_id`.
    async fn open_modal(&self, trigger_id: &str, modal: &Modal) -> Void;

    /// Fetch the recent history of a channel, oldest message first.
    async fn get_channel_history(&self, channel_id: &str) -> Res<ChannelHistory>;

    /// Join a channel so its history becomes readable.
    async fn join_channel(&self, channel_id: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
