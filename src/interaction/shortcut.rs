//! This module handles the global shortcut that starts a report.

use tracing::{Instrument, error, info, instrument};

use crate::{base::types::Void, service::chat::ChatClient, triage};

/// Handles the shortcut by opening the channel picker.
///
/// It spawns a new task so the interaction can be acknowledged right away.
#[instrument(skip_all)]
pub fn handle_shortcut(trigger_id: String, chat: ChatClient) {
    tokio::spawn(
        async move {
            // Process the event.
            let result = open_channel_picker(&chat, &trigger_id).await;

            // Log any errors.
            if let Err(err) = &result {
                error!("Error while handling: {}", err);
            }
        }
        .in_current_span(),
    );
}

/// Opens the channel picker modal.
#[instrument(skip(chat))]
pub async fn open_channel_picker(chat: &ChatClient, trigger_id: &str) -> Void {
    info!("Opening channel picker ...");

    chat.open_modal(trigger_id, &triage::channel_picker_modal()).await
}
