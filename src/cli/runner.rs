use tracing::info;
use tracing_subscriber::EnvFilter;

use marmot_batch::{BatchReport, SystemRunner, run_batch};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

pub fn run(args: CliArgs) -> Result<BatchReport, AppError> {
    if args.log {
        init_logging()?;
    }

    let params = args.to_params();
    info!("Jar directory: {:?}", params.jar_dir);
    info!("Manifest: {:?}", params.config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = run_batch(&params, &mut SystemRunner, &mut out)?;
    Ok(report)
}
