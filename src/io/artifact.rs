//! Locates the MarMoT jar to run.
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

const JAR_PREFIX: &[u8] = b"marmot";
const JAR_SUFFIX: &[u8] = b".jar";

/// Matches on the raw name, so names that are not valid UTF-8 still count
fn is_marmot_jar(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.starts_with(JAR_PREFIX) && bytes.ends_with(JAR_SUFFIX)
}

/// Find the newest `marmot*.jar` in `dir`.
///
/// "Newest" is the greatest file name in plain string order, so
/// `marmot-9.jar` wins over `marmot-10.jar`. The returned path is `dir`
/// joined with the chosen file name.
///
/// A directory that cannot be read counts as holding no jars; the cause is
/// logged at debug level.
pub fn locate_artifact(dir: &Path) -> Result<PathBuf> {
    let not_found = || Error::ArtifactNotFound {
        dir: dir.to_path_buf(),
    };

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot read jar directory {:?}: {}", dir, e);
            return Err(not_found());
        }
    };

    let mut names: Vec<OsString> = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => {
                let name = entry.file_name();
                if is_marmot_jar(&name) {
                    names.push(name);
                }
            }
            Err(e) => debug!("Skipping unreadable entry in {:?}: {}", dir, e),
        }
    }
    debug!("Found {} candidate jar(s) in {:?}: {:?}", names.len(), dir, names);

    names.sort();
    match names.pop() {
        Some(name) => Ok(dir.join(name)),
        None => Err(not_found()),
    }
}
