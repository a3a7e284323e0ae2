//! Library root for `triage-report`.
//!
//! Triage-report is a Slack app for support channels that:
//! - Scans a channel's history for messages marked with a priority emoji
//! - Skips requests that are already under review or resolved
//! - Reports what is left, grouped by priority, in a modal
//!
//! The classification and report logic in [`triage`] is pure; Slack access
//! sits behind the `GenericChatClient` trait in [`service::chat`].

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;
pub mod triage;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the triage-report runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with the chat client
/// - Starts the Socket Mode listener
pub async fn start(config: Config) -> Void {
    info!("Starting triage-report ...");

    // Start the crypto provider.
    crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install the default crypto provider."))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
