//! Building and running MarMoT command lines.
//!
//! Commands are assembled as argument vectors and executed without a shell,
//! so paths containing spaces or shell metacharacters reach the JVM intact.
//! Execution goes through [`ProcessRunner`]; [`SystemRunner`] is the real
//! implementation.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::io::config::LanguageEntry;
use crate::types::{ExitOutcome, ToolClass};

/// A fully-resolved external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Executes invocations and reports how they terminated
pub trait ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ExitOutcome>;
}

/// Spawns real child processes with inherited standard streams and waits
/// for them without a timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ExitOutcome> {
        debug!("Running: {}", invocation);
        let status = invocation
            .to_command()
            .status()
            .map_err(|source| Error::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        Ok(ExitOutcome::from(status))
    }
}

/// Java launcher plus the selected MarMoT jar
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub java: PathBuf,
    pub jar: PathBuf,
}

impl Toolchain {
    pub fn new(java: impl Into<PathBuf>, jar: impl Into<PathBuf>) -> Self {
        Self {
            java: java.into(),
            jar: jar.into(),
        }
    }

    fn base(&self, class: ToolClass, entry: &LanguageEntry) -> Invocation {
        Invocation {
            program: self.java.clone(),
            args: vec![
                OsString::from("-cp"),
                self.jar.clone().into_os_string(),
                OsString::from(class.class_name()),
                OsString::from("-train-file"),
                OsString::from(entry.training_input()),
            ],
        }
    }

    /// `java -cp <jar> marmot.morph.cmd.Stats -train-file <input>`
    pub fn stats_invocation(&self, entry: &LanguageEntry) -> Invocation {
        self.base(ToolClass::Stats, entry)
    }

    /// `java -cp <jar> marmot.morph.cmd.Trainer -train-file <input> -model-file <model>`
    pub fn train_invocation(&self, entry: &LanguageEntry, model_file: &Path) -> Invocation {
        let mut invocation = self.base(ToolClass::Trainer, entry);
        invocation.args.push(OsString::from("-model-file"));
        invocation
            .args
            .push(model_file.to_path_buf().into_os_string());
        invocation
    }
}

fn check_exit(outcome: ExitOutcome, class: ToolClass, entry: &LanguageEntry) -> Result<()> {
    if outcome.success() {
        Ok(())
    } else {
        Err(Error::ExternalProcess {
            class,
            lang: entry.lang.clone(),
            code: outcome.code,
        })
    }
}

/// Collect training statistics for one entry
pub fn run_stats<R: ProcessRunner + ?Sized>(
    runner: &mut R,
    toolchain: &Toolchain,
    entry: &LanguageEntry,
) -> Result<()> {
    let invocation = toolchain.stats_invocation(entry);
    info!("Collecting statistics for {}", entry.lang);
    let outcome = runner.run(&invocation)?;
    check_exit(outcome, ToolClass::Stats, entry)
}

/// Train a model for one entry and return the path of the model file.
/// A zero exit without the model file on disk is a `PostconditionViolation`.
pub fn run_train<R: ProcessRunner + ?Sized>(
    runner: &mut R,
    toolchain: &Toolchain,
    entry: &LanguageEntry,
    model_dir: Option<&Path>,
) -> Result<PathBuf> {
    let model_file = entry.model_file(model_dir);
    let invocation = toolchain.train_invocation(entry, &model_file);
    info!("Training {} -> {:?}", entry.lang, model_file);
    let outcome = runner.run(&invocation)?;
    check_exit(outcome, ToolClass::Trainer, entry)?;

    if !model_file.exists() {
        return Err(Error::PostconditionViolation { model_file });
    }
    Ok(model_file)
}
