//! High-level library API: run a whole batch from `RunParams`, or drive the
//! steps yourself with an already-located jar and loaded manifest. Prefer these
//! entrypoints over the lower-level `core::invoke` functions when embedding.
use std::io::Write;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::core::invoke::{ProcessRunner, Toolchain, run_stats, run_train};
use crate::core::params::RunParams;
use crate::error::{Error, Result};
use crate::io::artifact::locate_artifact;
use crate::io::config::{Manifest, record_lang};

/// Batch processing report
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Jar the batch ran against
    pub artifact: PathBuf,
    /// Entries whose steps all completed
    pub processed: usize,
    /// Model files produced, in entry order
    pub trained: Vec<PathBuf>,
    /// Entries left out by the language filter
    pub skipped: usize,
}

/// Keep the records named in `languages` (all of them when it is empty),
/// preserving manifest order. Naming a language the manifest lacks is an error.
/// Records without a string `lang` never match a filter.
pub fn select_entries(manifest: Manifest, languages: &[String]) -> Result<(Manifest, usize)> {
    if languages.is_empty() {
        return Ok((manifest, 0));
    }
    if let Some(lang) = languages.iter().find(|lang| {
        !manifest
            .records
            .iter()
            .any(|r| record_lang(r) == Some(lang.as_str()))
    }) {
        return Err(Error::UnknownLanguage { lang: lang.clone() });
    }

    let total = manifest.len();
    let records: Vec<_> = manifest
        .records
        .into_iter()
        .filter(|r| record_lang(r).is_some_and(|l| languages.iter().any(|x| x == l)))
        .collect();
    let skipped = total - records.len();
    Ok((
        Manifest {
            path: manifest.path,
            records,
        },
        skipped,
    ))
}

/// Run every manifest record against `toolchain`, printing each language
/// identifier to `out` before its steps and a blank line after them.
/// A record is decoded only when reached; a malformed one, like any failing
/// step, aborts the batch.
pub fn process_entries<R, W>(
    manifest: &Manifest,
    toolchain: &Toolchain,
    params: &RunParams,
    runner: &mut R,
    out: &mut W,
) -> Result<BatchReport>
where
    R: ProcessRunner + ?Sized,
    W: Write + ?Sized,
{
    if !params.stats && !params.train {
        warn!("Neither statistics nor training requested; entries will only be listed");
    }

    let mut report = BatchReport {
        artifact: toolchain.jar.clone(),
        ..BatchReport::default()
    };

    for record in &manifest.records {
        if let Some(lang) = record_lang(record) {
            writeln!(out, "{}", lang)?;
            out.flush()?;
        }
        let entry = manifest.entry(record)?;

        if params.stats {
            run_stats(runner, toolchain, &entry)?;
        }
        if params.train {
            let model = run_train(runner, toolchain, &entry, params.model_dir.as_deref())?;
            report.trained.push(model);
        }

        writeln!(out)?;
        out.flush()?;
        report.processed += 1;
    }

    Ok(report)
}

/// Locate the jar, load the manifest and process the selected entries.
pub fn run_batch<R, W>(params: &RunParams, runner: &mut R, out: &mut W) -> Result<BatchReport>
where
    R: ProcessRunner + ?Sized,
    W: Write + ?Sized,
{
    let jar = locate_artifact(&params.jar_dir)?;
    info!("Using jar: {:?}", jar);
    let toolchain = Toolchain::new(params.java.clone(), jar);

    let manifest = Manifest::load(&params.config)?;
    let (manifest, skipped) = select_entries(manifest, &params.languages)?;
    info!(
        "Starting batch over {} language(s) from {:?}",
        manifest.len(),
        params.config
    );

    let mut report = process_entries(&manifest, &toolchain, params, runner, out)?;
    report.skipped = skipped;

    info!("Batch complete!");
    info!("Processed: {}", report.processed);
    info!("Trained: {}", report.trained.len());
    info!("Skipped: {}", report.skipped);
    Ok(report)
}
