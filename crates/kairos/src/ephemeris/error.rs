use crate::ephemeris::types::Body;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during ephemeris lookups
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("{moment} is outside the supported ephemeris range (requested {body})")]
    OutOfRange { body: Body, moment: DateTime<Utc> },
    #[error("Failed to calculate position for {body} at {moment}: {message}")]
    CalculationFailed {
        body: Body,
        moment: DateTime<Utc>,
        message: String,
    },
    #[error("No longitude recorded for {body} at {moment}")]
    Missing { body: Body, moment: DateTime<Utc> },
}
