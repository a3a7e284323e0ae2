//! Common result types and the channel message model.

use serde::{Deserialize, Serialize};

/// Error type used throughout the application.
pub type Err = anyhow::Error;
/// Result alias over [`Err`].
pub type Res<T> = Result<T, Err>;
/// Result of an operation with no value.
pub type Void = Res<()>;

// Messages.

/// The event kind of a channel history entry (the `type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// A regular channel message.
    #[default]
    Message,
    /// Any other event kind.
    #[serde(other)]
    Other,
}

/// An emoji reaction on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// The emoji name, without colons (e.g., `eyes`).
    pub name: String,
    /// The users who reacted.
    #[serde(default)]
    pub users: Vec<String>,
    /// The number of users who reacted.
    #[serde(default)]
    pub count: u32,
}

impl Reaction {
    /// Creates a single-user reaction with the given emoji name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            users: Vec::new(),
            count: 1,
        }
    }
}

/// A single entry of a channel's message history.
///
/// Only the fields the triage logic reads are kept; everything else in the
/// history payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TriageMessage {
    /// The event kind.  History entries without one are messages.
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    /// The message subtype (e.g., `channel_join`, `bot_message`), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// The message text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The reactions on the message, in the order the platform reports them.
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    /// The message timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

impl TriageMessage {
    /// Creates a plain message with the given text and no reactions.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Adds a reaction with the given name.
    pub fn with_reaction(mut self, name: impl Into<String>) -> Self {
        self.reactions.push(Reaction::new(name));
        self
    }

    /// Sets the subtype.
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Whether this is a plain message: kind `message` with no subtype.
    pub fn is_plain(&self) -> bool {
        self.kind == MessageKind::Message && self.subtype.is_none()
    }

    /// Whether any reaction's name contains `needle`.
    pub fn has_reaction_containing(&self, needle: &str) -> bool {
        self.reactions.iter().any(|r| r.name.contains(needle))
    }

    /// The first review state marked on this message, if any.
    pub fn review_state(&self) -> Option<ReviewState> {
        ReviewState::ALL.into_iter().find(|state| self.has_reaction_containing(state.reaction_marker()))
    }
}

// Classification.

/// Priority of a triage request, determined by the marker its text starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// `:red_circle:`
    High,
    /// `:large_blue_circle:`
    Medium,
    /// `:white_circle:`
    Low,
}

impl Priority {
    /// Priorities in the order their markers are checked and reported.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// The text prefix marking a message with this priority.
    pub fn text_marker(self) -> &'static str {
        match self {
            Priority::High => ":red_circle:",
            Priority::Medium => ":large_blue_circle:",
            Priority::Low => ":white_circle:",
        }
    }

    /// The human-readable name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// The first priority whose marker is an exact prefix of `text`.
    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| text.starts_with(p.text_marker()))
    }
}

/// Review progress signalled by reactions.  Either state takes a message out of triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    /// Someone has picked the request up.
    UnderReview,
    /// The request is resolved.
    Reviewed,
}

impl ReviewState {
    /// Review states in the order they are checked.
    pub const ALL: [ReviewState; 2] = [ReviewState::UnderReview, ReviewState::Reviewed];

    /// The substring a reaction name must contain to signal this state.
    pub fn reaction_marker(self) -> &'static str {
        match self {
            ReviewState::UnderReview => "eyes",
            ReviewState::Reviewed => "white_check_mark",
        }
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_history_entry() {
        let value = serde_json::json!({
            "type": "message",
            "user": "U12345",
            "text": ":red_circle: Prod is down",
            "ts": "1700000000.000100",
            "reactions": [
                { "name": "eyes", "users": ["U54321"], "count": 1 },
                { "name": "thumbsup", "users": ["U1", "U2"], "count": 2 }
            ]
        });

        let message: TriageMessage = serde_json::from_value(value).unwrap();

        assert_eq!(message.kind, MessageKind::Message);
        assert_eq!(message.subtype, None);
        assert_eq!(message.text.as_deref(), Some(":red_circle: Prod is down"));
        assert_eq!(message.reactions.len(), 2);
        assert_eq!(message.reactions[1].count, 2);
        assert_eq!(message.ts.as_deref(), Some("1700000000.000100"));
    }

    #[test]
    fn test_deserialize_sparse_entry() {
        let message: TriageMessage = serde_json::from_value(serde_json::json!({ "subtype": "channel_join" })).unwrap();

        assert_eq!(message.kind, MessageKind::Message);
        assert_eq!(message.subtype.as_deref(), Some("channel_join"));
        assert!(message.text.is_none());
        assert!(message.reactions.is_empty());
        assert!(!message.is_plain());
    }

    #[test]
    fn test_deserialize_unknown_kind() {
        let message: TriageMessage = serde_json::from_value(serde_json::json!({ "type": "reaction_added", "text": ":red_circle: x" })).unwrap();

        assert_eq!(message.kind, MessageKind::Other);
        assert!(!message.is_plain());
    }

    #[test]
    fn test_priority_from_text() {
        assert_eq!(Priority::from_text(":red_circle: a"), Some(Priority::High));
        assert_eq!(Priority::from_text(":large_blue_circle: b"), Some(Priority::Medium));
        assert_eq!(Priority::from_text(":white_circle: c"), Some(Priority::Low));
        assert_eq!(Priority::from_text("foo :red_circle: bar"), None);
        assert_eq!(Priority::from_text(":RED_CIRCLE: shouting"), None);
        assert_eq!(Priority::from_text(""), None);
    }

    #[test]
    fn test_review_state() {
        assert_eq!(TriageMessage::new("x").review_state(), None);
        assert_eq!(TriageMessage::new("x").with_reaction("eyes").review_state(), Some(ReviewState::UnderReview));
        assert_eq!(TriageMessage::new("x").with_reaction("shifty_eyes").review_state(), Some(ReviewState::UnderReview));
        assert_eq!(TriageMessage::new("x").with_reaction("heavy_check_mark").review_state(), None);
        assert_eq!(TriageMessage::new("x").with_reaction("white_check_mark").review_state(), Some(ReviewState::Reviewed));
        assert_eq!(
            TriageMessage::new("x").with_reaction("white_check_mark").with_reaction("eyes").review_state(),
            Some(ReviewState::UnderReview)
        );
    }
}
