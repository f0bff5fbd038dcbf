//! Shared command handlers

pub mod view;

pub use view::{confirm, print_done, rows, run_mutation, show, spinner};
