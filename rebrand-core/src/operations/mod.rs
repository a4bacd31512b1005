//! High-level operations that correspond to CLI commands
//!
//! The setup pipeline lives here, separated from prompting, argument
//! parsing and output formatting.

pub mod setup;

pub use setup::{apply_setup, plan_setup, setup_operation, FileEdit, SetupPlan};
