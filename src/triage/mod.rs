//! Triage classification and report construction.
//!
//! Everything in here is pure and synchronous:
//! - [`classifier`] sorts channel history into priority buckets.
//! - [`report`] turns those buckets into display blocks and modals.
//! - [`blocks`] defines the display blocks and how they render to Block Kit.

pub mod blocks;
pub mod classifier;
pub mod report;

pub use blocks::{DisplayBlock, Modal};
pub use classifier::{TriageReport, classify, classify_message};
pub use report::{build_priority_blocks, build_report_blocks, channel_picker_modal, fit_to_modal, triage_report_modal};
