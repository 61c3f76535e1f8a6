use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the application boundary. The widget core itself never
/// fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config \"{path}\": {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("failed to parse config \"{path}\": {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to read word list \"{path}\": {source}")]
    Words { path: PathBuf, source: io::Error },

    #[error("failed to open log file \"{path}\": {source}")]
    LogFile { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
