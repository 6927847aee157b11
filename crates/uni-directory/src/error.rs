use crate::catalog::{FetchError, LookupError};
use crate::config::ConfigError;
use crate::ingest::IngestError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Catalog(FetchError),
    Lookup(LookupError),
    Ingest(IngestError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Lookup(err) => write!(f, "lookup error: {}", err),
            AppError::Ingest(err) => write!(f, "ingest error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Lookup(err) => Some(err),
            AppError::Ingest(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<FetchError> for AppError {
    fn from(value: FetchError) -> Self {
        Self::Catalog(value)
    }
}

impl From<LookupError> for AppError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

impl From<IngestError> for AppError {
    fn from(value: IngestError) -> Self {
        Self::Ingest(value)
    }
}
