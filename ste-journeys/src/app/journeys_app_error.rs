use crate::{normalize::NormalizeError, output::OutputError, query::QueryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JourneysAppError {
    #[error("failure reading run configuration: {source}")]
    ConfigurationError {
        #[from]
        source: config::ConfigError,
    },
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    OutputError {
        #[from]
        source: OutputError,
    },
    #[error(transparent)]
    NormalizeError {
        #[from]
        source: NormalizeError,
    },
    #[error(transparent)]
    QueryError {
        #[from]
        source: QueryError,
    },
}
