//! Sorts channel history into priority buckets.

use tracing::debug;

use crate::base::types::{Priority, TriageMessage};

/// Messages awaiting triage, grouped by priority.
///
/// Each bucket keeps the order of the history it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageReport {
    high: Vec<TriageMessage>,
    medium: Vec<TriageMessage>,
    low: Vec<TriageMessage>,
}

impl TriageReport {
    /// The messages in the given bucket.
    pub fn bucket(&self, priority: Priority) -> &[TriageMessage] {
        match priority {
            Priority::High => &self.high,
            Priority::Medium => &self.medium,
            Priority::Low => &self.low,
        }
    }

    /// Appends a message to the given bucket.
    pub fn push(&mut self, priority: Priority, message: TriageMessage) {
        let bucket = match priority {
            Priority::High => &mut self.high,
            Priority::Medium => &mut self.medium,
            Priority::Low => &mut self.low,
        };

        bucket.push(message);
    }

    /// Total number of messages across all buckets.
    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    /// Whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the bucket a message belongs in, or `None` if it is not awaiting triage.
///
/// A message is awaiting triage when it is a plain message with non-empty text,
/// carries no review reaction, and its text starts with one of the priority markers.
pub fn classify_message(message: &TriageMessage) -> Option<Priority> {
    if !message.is_plain() {
        return None;
    }

    let text = message.text.as_deref().filter(|t| !t.is_empty())?;

    if message.review_state().is_some() {
        return None;
    }

    Priority::from_text(text)
}

/// Sorts `messages` into a [`TriageReport`].
pub fn classify(messages: &[TriageMessage]) -> TriageReport {
    let mut report = TriageReport::default();

    for message in messages {
        if let Some(priority) = classify_message(message) {
            report.push(priority, message.clone());
        }
    }

    debug!(
        scanned = messages.len(),
        high = report.high.len(),
        medium = report.medium.len(),
        low = report.low.len(),
        "Classified channel history."
    );

    report
}

// Tests.
