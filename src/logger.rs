use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::error::Error;

const DEFAULT_FILTER: &str = "warn";

/// Install the process-wide subscriber. `log` records from both crates are
/// forwarded to it.
pub fn init(config: &Config) -> Result<(), Error> {
    let env_filter = match config.log_filter.as_deref() {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| Error::Logging(e.to_string()))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let writer = match &config.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::LogFile {
                path: path.clone(),
                source,
            })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(config.log_file.is_none())
        .compact()
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
