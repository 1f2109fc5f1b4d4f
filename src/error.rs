/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::io;
use thiserror::Error;

/// Failure to read a configuration or scenario file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse { path: String, source: toml::de::Error },
    #[error("invalid hour {0}, expected 0-23")]
    InvalidHour(u32),
}
