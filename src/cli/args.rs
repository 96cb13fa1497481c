use clap::Parser;
use std::path::PathBuf;

use marmot_batch::RunParams;

#[derive(Parser)]
#[command(
    name = "marmot-batch",
    version,
    about = "Collect MarMoT training statistics and train per-language models"
)]
pub struct CliArgs {
    /// Directory searched for marmot*.jar (the greatest file name wins)
    #[arg(long, default_value = "..")]
    pub jar_dir: PathBuf,

    /// Language manifest: JSON array of {lang, marmot-indexes, cis-path}
    #[arg(short, long, default_value = "data.json")]
    pub config: PathBuf,

    /// Java launcher used to run the jar
    #[arg(long, default_value = "java")]
    pub java: PathBuf,

    /// Also train a <lang>.marmot model for each entry
    #[arg(long, default_value_t = false)]
    pub train: bool,

    /// Do not collect statistics (use together with --train)
    #[arg(long, default_value_t = false)]
    pub skip_stats: bool,

    /// Only process these languages (repeatable)
    #[arg(short, long = "lang", value_name = "LANG")]
    pub languages: Vec<String>,

    /// Directory where model files are written (default: working directory)
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn to_params(&self) -> RunParams {
        RunParams {
            jar_dir: self.jar_dir.clone(),
            config: self.config.clone(),
            java: self.java.clone(),
            stats: !self.skip_stats,
            train: self.train,
            languages: self.languages.clone(),
            model_dir: self.model_dir.clone(),
        }
    }
}
