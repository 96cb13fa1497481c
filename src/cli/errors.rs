use thiserror::Error;

/// `sysexits.h` EX_SOFTWARE: internal software error
pub const EXIT_INTERNAL: u8 = 70;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Batch(#[from] marmot_batch::Error),
}

impl AppError {
    /// Process exit status for this failure.
    /// A failing MarMoT command passes its own status through.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Batch(marmot_batch::Error::ExternalProcess { code, .. }) => code
                .and_then(|c| u8::try_from(c).ok())
                .filter(|c| *c != 0)
                .unwrap_or(1),
            AppError::Batch(marmot_batch::Error::PostconditionViolation { .. }) => EXIT_INTERNAL,
            _ => 1,
        }
    }
}
