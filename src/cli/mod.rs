//! Command Line Interface (CLI) layer for marmot-batch.
//!
//! This module defines argument parsing (`args`), error types and exit
//! statuses (`errors`), and the orchestration logic (`runner`). It wires
//! user-provided options to the library functionality exposed via
//! `marmot_batch::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
