//! Builds the triage report and the modals that carry it.

use crate::base::types::{Priority, TriageMessage};

use super::{
    blocks::{DisplayBlock, Modal},
    classifier::TriageReport,
};

/// Callback ID of the channel picker modal.
pub const CHANNEL_PICKER_CALLBACK_ID: &str = "channel-picker";
/// Block ID of the channel picker input.
pub const CHANNEL_INPUT_BLOCK_ID: &str = "channel-input";
/// Action ID of the channel picker select element.
pub const CHANNEL_SELECT_ACTION_ID: &str = "channel-picker";
/// Callback ID of the report modal.
pub const TRIAGE_REPORT_CALLBACK_ID: &str = "triage-report";

/// The most blocks Slack accepts in a single view.
pub const MAX_MODAL_BLOCKS: usize = 100;

/// Text shown when no bucket has any messages.
pub const NOTHING_AWAITING_TRIAGE: &str = "There are no messages awaiting triage!";

/// Builds the blocks for a single priority bucket.
///
/// A non-empty bucket yields a header, one section per message, and a divider.
/// An empty bucket yields a single notice.
pub fn build_priority_blocks(messages: &[TriageMessage], priority: Priority) -> Vec<DisplayBlock> {
    let name = priority.name();

    if messages.is_empty() {
        return vec![DisplayBlock::section(format!("There are no {name} messages"))];
    }

    let mut blocks = Vec::with_capacity(messages.len() + 2);

    blocks.push(DisplayBlock::section(format!("*There are {} {name} priority messages needing triage*", messages.len())));
    blocks.extend(messages.iter().map(|m| DisplayBlock::section(m.text.clone().unwrap_or_default())));
    blocks.push(DisplayBlock::divider());

    blocks
}

/// Builds the full report, highest priority first.
pub fn build_report_blocks(report: &TriageReport) -> Vec<DisplayBlock> {
    if report.is_empty() {
        return vec![DisplayBlock::section(NOTHING_AWAITING_TRIAGE)];
    }

    Priority::ALL.into_iter().flat_map(|priority| build_priority_blocks(report.bucket(priority), priority)).collect()
}

/// Trims `blocks` to what a single modal can hold.
///
/// When there are too many, the tail is replaced with a notice saying how many were left out.
pub fn fit_to_modal(mut blocks: Vec<DisplayBlock>) -> Vec<DisplayBlock> {
    if blocks.len() <= MAX_MODAL_BLOCKS {
        return blocks;
    }

    let omitted = blocks.len() - (MAX_MODAL_BLOCKS - 1);
    blocks.truncate(MAX_MODAL_BLOCKS - 1);
    blocks.push(DisplayBlock::section(format!("_{omitted} more blocks were left out of this report._")));

    blocks
}

/// The modal that asks which channel to report on.
pub fn channel_picker_modal() -> Modal {
    Modal {
        title: "Pick a channel".to_string(),
        callback_id: CHANNEL_PICKER_CALLBACK_ID.to_string(),
        blocks: vec![DisplayBlock::ChannelSelect {
            block_id: CHANNEL_INPUT_BLOCK_ID.to_string(),
            action_id: CHANNEL_SELECT_ACTION_ID.to_string(),
            label: "Pick a channel".to_string(),
            placeholder: "Pick a channel".to_string(),
        }],
        submit: Some("Submit".to_string()),
    }
}

/// The read-only modal that shows a report.
pub fn triage_report_modal(blocks: Vec<DisplayBlock>) -> Modal {
    Modal {
        title: "Triage report".to_string(),
        callback_id: TRIAGE_REPORT_CALLBACK_ID.to_string(),
        blocks,
        submit: None,
    }
}

// Tests.
