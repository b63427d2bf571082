//! Shared error types for the DroneVista site

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown log level: {input}")]
    UnknownLogLevel { input: String },

    #[error("Invalid location: {input}")]
    InvalidLocation { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
