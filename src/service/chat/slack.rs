//! Chat service integration for triage-report.
//!
//! This module provides the Slack implementation of `GenericChatClient`:
//! - Receiving shortcuts and modal submissions over Socket Mode
//! - Opening modals
//! - Reading (and joining) channels
//!
//! Interaction payloads are dispatched to the handlers in `interaction`.

use crate::{
    base::{
        config::Config,
        types::{Res, TriageMessage, Void},
    },
    interaction::{self, payload::Interaction},
    triage::{Modal, report::CHANNEL_PICKER_CALLBACK_ID},
};
use async_trait::async_trait;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use slack_morphism::{errors::SlackClientError, prelude::*};
use tracing::{debug, info, instrument, warn};

use std::{ops::Deref, sync::Arc};

use super::{ChannelHistory, ChatClient, GenericChatClient};

// Type aliases.

type FullClient = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

// Extra methods on `ChatClient` applied by the slack implementation.

impl ChatClient {
    /// Creates a new Slack chat client.
    pub async fn slack(config: &Config) -> Res<Self> {
        let client = SlackChatClient::new(config).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<SlackChatClient> for ChatClient {
    fn from(client: SlackChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// User state for the slack socket client.
struct SlackUserState {
    chat: ChatClient,
    shortcut_callback_id: String,
}

/// Slack client implementation.
#[derive(Clone)]
struct SlackChatClient {
    pub app_token: SlackApiToken,
    pub bot_token: SlackApiToken,
    pub client: Arc<FullClient>,
    pub shortcut_callback_id: String,
    pub history_limit: u16,
}

impl Deref for SlackChatClient {
    type Target = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl SlackChatClient {
    /// Create a new Slack chat client.
    #[instrument(name = "SlackChatClient::new", skip_all)]
    pub async fn new(config: &Config) -> Res<Self> {
        // Initialize tokens.

        let app_token = SlackApiToken::new(SlackApiTokenValue(config.slack_app_token.clone()));
        let bot_token = SlackApiToken::new(SlackApiTokenValue(config.slack_bot_token.clone()));

        // Initialize the Slack client.

        let https_connector = HttpsConnector::<HttpConnector>::builder().with_native_roots()?.https_only().enable_all_versions().build();
        let connector = SlackClientHyperConnector::with_connector(https_connector);
        let client = Arc::new(slack_morphism::SlackClient::new(connector));

        // Verify the bot token.

        let session = client.open_session(&bot_token);
        let bot_user = session.auth_test().await?;

        info!("Slack bot user ID: {}", bot_user.user_id.0);

        Ok(Self {
            app_token,
            bot_token,
            client,
            shortcut_callback_id: config.shortcut_callback_id.clone(),
            history_limit: config.history_limit,
        })
    }
}

#[async_trait]
impl GenericChatClient for SlackChatClient {
    async fn start(&self) -> Void {
        // Initialize the socket mode listener.

        let socket_mode_callbacks = SlackSocketModeListenerCallbacks::new()
            .with_command_events(handle_command_event)
            .with_interaction_events(handle_interaction_event);

        // Initialize the socket mode listener environment.

        let listener_environment = Arc::new(SlackClientEventsListenerEnvironment::new(self.client.clone()).with_user_state(SlackUserState {
            chat: ChatClient::from(self.clone()),
            shortcut_callback_id: self.shortcut_callback_id.clone(),
        }));

        let socket_mode_listener = Arc::new(SlackClientSocketModeListener::new(
            &SlackClientSocketModeConfig::new(),
            listener_environment.clone(),
            socket_mode_callbacks,
        ));

        // Register an app token to listen for events,
        socket_mode_listener.listen_for(&self.app_token).await?;

        // Start WS connections calling Slack API to get WS url for the token,
        // and wait for Ctrl-C to shutdown.
        socket_mode_listener.serve().await;

        Ok(())
    }

    #[instrument(skip(self, modal), fields(callback_id = %modal.callback_id))]
    async fn open_modal(&self, trigger_id: &str, modal: &Modal) -> Void {
        let view: SlackView = serde_json::from_value(modal.to_block_kit())?;

        let request = SlackApiViewsOpenRequest::new(SlackTriggerId(trigger_id.to_string()), view);

        let session = self.client.open_session(&self.bot_token);

        let _ = session.views_open(&request).await.map_err(|e| anyhow::anyhow!("Failed to open modal: {}", e))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_channel_history(&self, channel_id: &str) -> Res<ChannelHistory> {
        let request = SlackApiConversationsHistoryRequest::new()
            .with_channel(SlackChannelId(channel_id.to_string()))
            .with_limit(self.history_limit);

        let session = self.client.open_session(&self.bot_token);

        let response = session.conversations_history(&request).await;

        let response = if let Err(e) = &response
            && let SlackClientError::ApiError(ae) = e
            && ae.code == "not_in_channel"
        {
            return Ok(ChannelHistory::NotInChannel);
        } else {
            response.map_err(|e| anyhow::anyhow!("Failed to fetch channel history: {}", e))?
        };

        // Slack returns newest first.
        let messages: Vec<TriageMessage> = response
            .messages
            .iter()
            .rev()
            .filter_map(|message| match serde_json::to_value(message).and_then(serde_json::from_value::<TriageMessage>) {
                Ok(message) => Some(message),
                Err(err) => {
                    warn!("Skipping unreadable history entry: {}", err);
                    None
                }
            })
            .collect();

        debug!("Fetched {} history messages.", messages.len());

        Ok(ChannelHistory::Messages(messages))
    }

    #[instrument(skip(self))]
    async fn join_channel(&self, channel_id: &str) -> Void {
        let request = SlackApiConversationsJoinRequest::new(SlackChannelId(channel_id.to_string()));

        let session = self.client.open_session(&self.bot_token);

        let _ = session.conversations_join(&request).await.map_err(|e| anyhow::anyhow!("Failed to join channel: {}", e))?;

        Ok(())
    }
}

// Socket mode listener callbacks for Slack.

/// Handles command events from Slack.
async fn handle_command_event(
    event: SlackCommandEvent,
    _client: Arc<SlackHyperClient>,
    _states: SlackClientEventsUserState,
) -> Result<SlackCommandEventResponse, Box<dyn std::error::Error + Send + Sync>> {
    warn!("[COMMAND] {:#?}", event);
    Ok(SlackCommandEventResponse::new(
        SlackMessageContent::new().with_text("No app commands are currently supported. Use the triage shortcut instead.".into()),
    ))
}

/// Handles interaction events from Slack.
#[instrument(skip_all)]
async fn handle_interaction_event(event: SlackInteractionEvent, _client: Arc<SlackHyperClient>, states: SlackClientEventsUserState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let states = states.read().await;
    let user_state = states.get_user_state::<SlackUserState>().ok_or(anyhow::anyhow!("Failed to get user state"))?;

    let payload = serde_json::to_value(&event)?;

    match Interaction::from_value(&payload) {
        Interaction::Shortcut { callback_id, trigger_id } if callback_id.as_deref() == Some(user_state.shortcut_callback_id.as_str()) => {
            info!("Received triage shortcut ...");

            let trigger_id = trigger_id.ok_or(anyhow::anyhow!("Shortcut is missing a trigger ID"))?;
            interaction::shortcut::handle_shortcut(trigger_id, user_state.chat.clone());
        }
        Interaction::ViewSubmission {
            callback_id,
            trigger_id,
            selected_channel,
        } if callback_id.as_deref() == Some(CHANNEL_PICKER_CALLBACK_ID) => {
            info!("Received channel picker submission ...");

            let trigger_id = trigger_id.ok_or(anyhow::anyhow!("Submission is missing a trigger ID"))?;
            let channel_id = selected_channel.ok_or(anyhow::anyhow!("Submission is missing a selected channel"))?;
            interaction::channel_picker::handle_channel_picker(channel_id, trigger_id, user_state.chat.clone());
        }
        other => {
            warn!("Received unhandled interaction: {:?}", other);
        }
    }

    Ok(())
}
