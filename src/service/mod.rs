//! Service integrations for external APIs and clients.
//!
//! The chat service defines a generic trait and a Slack implementation,
//! which keeps the interaction handlers testable against a mock.

pub mod chat;
