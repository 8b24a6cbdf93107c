use thiserror::Error;

/// `EX_USAGE`: the hook was configured with bad arguments.
pub const EXIT_USAGE: i32 = 64;
/// `EX_UNAVAILABLE`: no cfn-guard release exists for this host.
pub const EXIT_UNAVAILABLE: i32 = 69;
/// `EX_SOFTWARE`: any other failure inside the hook.
pub const EXIT_SOFTWARE: i32 = 70;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown operation '{0}' (expected 'validate' or 'test')")]
    UnknownOperation(String),

    #[error("operation '{operation}' requires {flag}")]
    MissingFlag {
        operation: &'static str,
        flag: &'static str,
    },

    #[error("invalid {var}: {message}")]
    Config { var: &'static str, message: String },

    #[error(transparent)]
    Platform(#[from] guard_hook_platform::Error),

    #[error(transparent)]
    Install(#[from] guard_hook_install::Error),

    #[error(transparent)]
    Fetch(#[from] guard_hook_fetch::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    ///
    /// Chosen from `sysexits.h` so they stay clear of cfn-guard's own codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownOperation(_) | Self::MissingFlag { .. } => EXIT_USAGE,
            Self::Platform(guard_hook_platform::Error::UnsupportedPlatform(_))
            | Self::Install(guard_hook_install::Error::Platform(
                guard_hook_platform::Error::UnsupportedPlatform(_),
            )) => EXIT_UNAVAILABLE,
            _ => EXIT_SOFTWARE,
        }
    }
}

/// Exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|e| e.downcast_ref::<Error>())
        .map_or(EXIT_SOFTWARE, Error::exit_code)
}
