//! Shared types used across marmot-batch.
//! Includes `ToolClass` (which MarMoT entry point to call) and `ExitOutcome`
//! (how a child process finished).
use serde::{Deserialize, Serialize};

/// MarMoT command-line entry points driven by the batch runner
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ToolClass {
    Stats,
    Trainer,
}

impl ToolClass {
    /// Fully-qualified Java class name passed after `-cp <jar>`
    pub fn class_name(self) -> &'static str {
        match self {
            ToolClass::Stats => "marmot.morph.cmd.Stats",
            ToolClass::Trainer => "marmot.morph.cmd.Trainer",
        }
    }
}

impl std::fmt::Display for ToolClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ToolClass::Stats => "Stats",
            ToolClass::Trainer => "Trainer",
        };
        write!(f, "{}", s)
    }
}

/// Termination status of an external process.
/// `code` is `None` when the process was killed by a signal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ExitOutcome {
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ExitOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}
