use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError(e.to_string()) }
}

#[derive(Error, Debug)]
#[error("LoggingError: {0}")]
pub struct LoggingError(pub String);
impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self { LoggingError(e.to_string()) }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self { LoggingError(e.to_string()) }
}

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("TimelineError::MissingHours: no hourly data for {0}")]
    MissingHours(NaiveDate),
    #[error("TimelineError::MisalignedSeries: air quality hour {1} doesn't match weather hour {0}")]
    MisalignedSeries(NaiveDateTime, NaiveDateTime),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("StoreError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("StoreError::Document: {0}")]
    Document(#[from] serde_json::Error),
}
