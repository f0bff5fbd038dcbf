//! Argument groups shared by the role commands
//!
//! Filter structs are flattened into list commands with
//! `#[command(flatten)]`; [`GlobalOptions`] carries the global flags.

mod common;
mod filters;
mod global;

pub use common::OutputFormat;
pub use filters::{ReviewFilterArgs, SponsorFilterArgs, SubmissionFilterArgs};
pub use global::GlobalOptions;
