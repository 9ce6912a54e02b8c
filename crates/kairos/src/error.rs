use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Why a chart build or forecast day could not be computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// The ephemeris could not resolve a body at the requested moment.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    /// Rejected before the ephemeris was queried.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
