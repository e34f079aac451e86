use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("message queue closed")]
    Disconnected,

    #[error("pump thread panicked")]
    PumpPanicked,
}
