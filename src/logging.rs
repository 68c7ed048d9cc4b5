use std::{fmt, fs::OpenOptions, io, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

/// Routes tracing output to `path`; the terminal belongs to the UI.
/// Set RUST_LOG to control the level, e.g. RUST_LOG=champgrid=debug.
pub fn init(path: &Path) -> Result<(), LoggingInitError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingInitError::Subscriber(e.to_string()))
}

#[derive(Debug)]
pub enum LoggingInitError {
    LogFile(io::Error),
    Subscriber(String),
}

impl fmt::Display for LoggingInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoggingInitError::LogFile(err) => write!(f, "Could not open log file: {}", err),
            LoggingInitError::Subscriber(msg) => write!(f, "Could not install logger: {}", msg),
        }
    }
}

impl From<io::Error> for LoggingInitError {
    fn from(error: io::Error) -> Self {
        LoggingInitError::LogFile(error)
    }
}
