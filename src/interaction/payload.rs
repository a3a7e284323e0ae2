//! Parsing of raw interaction payloads.

use serde_json::Value;

use crate::triage::report::{CHANNEL_INPUT_BLOCK_ID, CHANNEL_SELECT_ACTION_ID};

/// The interactions the app reacts to, extracted from a raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A global shortcut was invoked.
    Shortcut { callback_id: Option<String>, trigger_id: Option<String> },
    /// A modal was submitted.
    ViewSubmission {
        callback_id: Option<String>,
        trigger_id: Option<String>,
        /// The conversation chosen in the channel picker, if the view had one.
        selected_channel: Option<String>,
    },
    /// Anything else.
    Other { kind: Option<String> },
}

impl Interaction {
    /// Extracts an [`Interaction`] from a payload; missing fields come back as `None`.
    pub fn from_value(value: &Value) -> Self {
        let kind = string_at(value, &["type"]);

        match kind.as_deref() {
            Some("shortcut") => Interaction::Shortcut {
                callback_id: string_at(value, &["callback_id"]),
                trigger_id: string_at(value, &["trigger_id"]),
            },
            Some("view_submission") => Interaction::ViewSubmission {
                callback_id: string_at(value, &["view", "callback_id"]),
                trigger_id: string_at(value, &["trigger_id"]),
                selected_channel: string_at(
                    value,
                    &["view", "state", "values", CHANNEL_INPUT_BLOCK_ID, CHANNEL_SELECT_ACTION_ID, "selected_conversation"],
                ),
            },
            _ => Interaction::Other { kind },
        }
    }
}

fn string_at(value: &Value, path: &[&str]) -> Option<String> {
    path.iter().try_fold(value, |v, key| v.get(key))?.as_str().map(str::to_owned)
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shortcut() {
        let value = json!({
            "type": "shortcut",
            "callback_id": "triage",
            "trigger_id": "123.456.abc",
            "user": { "id": "U1" },
        });

        assert_eq!(
            Interaction::from_value(&value),
            Interaction::Shortcut {
                callback_id: Some("triage".to_string()),
                trigger_id: Some("123.456.abc".to_string()),
            }
        );
    }

    #[test]
    fn test_view_submission() {
        let value = json!({
            "type": "view_submission",
            "trigger_id": "789.012.def",
            "view": {
                "type": "modal",
                "callback_id": "channel-picker",
                "state": {
                    "values": {
                        "channel-input": {
                            "channel-picker": { "type": "conversations_select", "selected_conversation": "C0123" }
                        }
                    }
                }
            }
        });

        assert_eq!(
            Interaction::from_value(&value),
            Interaction::ViewSubmission {
                callback_id: Some("channel-picker".to_string()),
                trigger_id: Some("789.012.def".to_string()),
                selected_channel: Some("C0123".to_string()),
            }
        );
    }

    #[test]
    fn test_view_submission_without_selection() {
        let value = json!({
            "type": "view_submission",
            "view": { "callback_id": "channel-picker", "state": { "values": {} } }
        });

        assert_eq!(
            Interaction::from_value(&value),
            Interaction::ViewSubmission {
                callback_id: Some("channel-picker".to_string()),
                trigger_id: None,
                selected_channel: None,
            }
        );
    }

    #[test]
    fn test_other() {
        assert_eq!(
            Interaction::from_value(&json!({ "type": "block_actions" })),
            Interaction::Other {
                kind: Some("block_actions".to_string())
            }
        );
        assert_eq!(Interaction::from_value(&json!(42)), Interaction::Other { kind: None });
    }
}
