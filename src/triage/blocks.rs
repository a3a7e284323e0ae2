//! Display blocks and modals, rendered as Slack Block Kit JSON.

use serde_json::{Value, json};

/// A single unit of modal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    /// A `mrkdwn` text section.
    Section { text: String },
    /// A horizontal rule.
    Divider,
    /// An input that lets the user pick a conversation.
    ChannelSelect {
        block_id: String,
        action_id: String,
        label: String,
        placeholder: String,
    },
}

impl DisplayBlock {
    pub fn section(text: impl Into<String>) -> Self {
        Self::Section { text: text.into() }
    }

    pub fn divider() -> Self {
        Self::Divider
    }

    /// Renders the block as Block Kit JSON.
    pub fn to_block_kit(&self) -> Value {
        match self {
            DisplayBlock::Section { text } => json!({
                "type": "section",
                "text": { "type": "mrkdwn", "text": text },
            }),
            DisplayBlock::Divider => json!({ "type": "divider" }),
            DisplayBlock::ChannelSelect {
                block_id,
                action_id,
                label,
                placeholder,
            } => json!({
                "type": "input",
                "block_id": block_id,
                "label": plain_text(label),
                "element": {
                    "type": "conversations_select",
                    "action_id": action_id,
                    "placeholder": plain_text(placeholder),
                },
            }),
        }
    }
}

/// A modal view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub callback_id: String,
    pub blocks: Vec<DisplayBlock>,
    /// Label of the submit button; modals without one are read-only.
    pub submit: Option<String>,
}

impl Modal {
    /// Renders the modal as a Block Kit `modal` view.
    pub fn to_block_kit(&self) -> Value {
        let mut view = json!({
            "type": "modal",
            "callback_id": self.callback_id,
            "title": plain_text(&self.title),
            "blocks": self.blocks.iter().map(DisplayBlock::to_block_kit).collect::<Vec<_>>(),
        });

        if let Some(submit) = &self.submit {
            view["submit"] = plain_text(submit);
        }

        view
    }
}

fn plain_text(text: &str) -> Value {
    json!({ "type": "plain_text", "text": text })
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_renders_mrkdwn() {
        assert_eq!(
            DisplayBlock::section("*hi*").to_block_kit(),
            json!({ "type": "section", "text": { "type": "mrkdwn", "text": "*hi*" } })
        );
    }

    #[test]
    fn test_channel_select_renders_input() {
        let block = DisplayBlock::ChannelSelect {
            block_id: "b".to_string(),
            action_id: "a".to_string(),
            label: "Label".to_string(),
            placeholder: "Pick".to_string(),
        };

        let value = block.to_block_kit();

        assert_eq!(value["type"], "input");
        assert_eq!(value["block_id"], "b");
        assert_eq!(value["label"]["text"], "Label");
        assert_eq!(value["element"]["type"], "conversations_select");
        assert_eq!(value["element"]["action_id"], "a");
        assert_eq!(value["element"]["placeholder"]["type"], "plain_text");
    }

    #[test]
    fn test_modal_submit_is_optional() {
        let mut modal = Modal {
            title: "Title".to_string(),
            callback_id: "cb".to_string(),
            blocks: vec![DisplayBlock::divider()],
            submit: None,
        };

        let value = modal.to_block_kit();
        assert_eq!(value["type"], "modal");
        assert_eq!(value["callback_id"], "cb");
        assert_eq!(value["blocks"], json!([{ "type": "divider" }]));
        assert!(value.get("submit").is_none());

        modal.submit = Some("Go".to_string());
        assert_eq!(modal.to_block_kit()["submit"], json!({ "type": "plain_text", "text": "Go" }));
    }
}
