//! Core components and types for triage-report.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Common result types and the channel message model.

pub mod config;
pub mod types;
