use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Batch parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    /// Directory searched for `marmot*.jar`
    pub jar_dir: PathBuf,
    /// Language manifest (JSON array of entries)
    pub config: PathBuf,
    /// Java launcher to execute
    pub java: PathBuf,
    /// Collect training statistics for each entry
    pub stats: bool,
    /// Train a model for each entry after the statistics pass
    pub train: bool,
    /// Restrict the batch to these languages; empty means all
    pub languages: Vec<String>,
    /// Where `<lang>.marmot` is written; None means the working directory
    pub model_dir: Option<PathBuf>,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            jar_dir: PathBuf::from(".."),
            config: PathBuf::from("data.json"),
            java: PathBuf::from("java"),
            stats: true,
            train: false,
            languages: Vec::new(),
            model_dir: None,
        }
    }
}
