//! Event handling and user interactions for triage-report.
//!
//! This module provides functionality for handling the report flow:
//! - Parsing raw interaction payloads
//! - Opening the channel picker from the global shortcut
//! - Building and opening the triage report once a channel is picked

pub mod channel_picker;
pub mod payload;
pub mod shortcut;
