//! This module handles submissions of the channel picker.

use tracing::{Instrument, error, info, instrument, warn};

use crate::{
    base::types::{Res, TriageMessage, Void},
    service::chat::{ChannelHistory, ChatClient},
    triage,
};

/// Handles a channel picker submission.
///
/// It spawns a new task so the submission can be acknowledged right away.
#[instrument(skip_all)]
pub fn handle_channel_picker(channel_id: String, trigger_id: String, chat: ChatClient) {
    tokio::spawn(
        async move {
            // Process the event.
            let result = open_triage_report(&chat, &channel_id, &trigger_id).await;

            // Log any errors.
            if let Err(err) = &result {
                error!("Error while handling: {}", err);
            }
        }
        .in_current_span(),
    );
}

/// Builds the triage report for `channel_id` and opens it in a modal.
#[instrument(skip(chat))]
pub async fn open_triage_report(chat: &ChatClient, channel_id: &str, trigger_id: &str) -> Void {
    let messages = fetch_history(chat, channel_id).await?;

    let report = triage::classify(&messages);
    info!("Found {} messages awaiting triage.", report.len());

    let blocks = triage::fit_to_modal(triage::build_report_blocks(&report));

    chat.open_modal(trigger_id, &triage::triage_report_modal(blocks)).await
}

/// Fetches channel history, joining the channel first if the bot is not a member.
async fn fetch_history(chat: &ChatClient, channel_id: &str) -> Res<Vec<TriageMessage>> {
    if let ChannelHistory::Messages(messages) = chat.get_channel_history(channel_id).await? {
        return Ok(messages);
    }

    warn!("Not in channel; joining before reading history ...");
    chat.join_channel(channel_id).await?;

    match chat.get_channel_history(channel_id).await? {
        ChannelHistory::Messages(messages) => Ok(messages),
        ChannelHistory::NotInChannel => Err(anyhow::anyhow!("Still not in channel `{}` after joining.", channel_id)),
    }
}
