//! Crate-level error type and `Result` alias.
//! Every failure in a batch is fatal; these variants only distinguish *why*
//! the run stopped so the binary can pick a message and exit status.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ToolClass;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Did not find marmot*.jar in \"{}\".", .dir.display())]
    ArtifactNotFound { dir: PathBuf },

    #[error("Malformed configuration {}: {source}", .path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Language not present in configuration: {lang}")]
    UnknownLanguage { lang: String },

    #[error("Failed to launch {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{class} failed for language {lang} ({})", describe_code(.code))]
    ExternalProcess {
        class: ToolClass,
        lang: String,
        code: Option<i32>,
    },

    #[error("internal contract violated: trainer exited 0 but model file {} is missing", .model_file.display())]
    PostconditionViolation { model_file: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
