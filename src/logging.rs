//! Log setup for the `style-wizard` binary.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Env var naming a log file to append to.
pub const LOG_ENV_VAR: &str = "STYLE_WIZARD_LOG";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Warnings and errors only, so stdout stays clean JSON/TOML.
    Stderr,
    /// Every store transition, appended to the file.
    File(PathBuf),
}

impl LogTarget {
    /// Read the target from `STYLE_WIZARD_LOG`.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var_os(LOG_ENV_VAR))
    }

    fn from_var(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Stderr,
        }
    }

    /// Level used when `RUST_LOG` is not set.
    fn default_level(&self) -> &'static str {
        match self {
            Self::Stderr => "warn",
            Self::File(_) => "debug",
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the level.
///
/// # Errors
/// Fails if the log file cannot be opened for appending.
pub fn init_tracing(target: LogTarget) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(target.default_level()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339());

    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
    }
    Ok(())
}
