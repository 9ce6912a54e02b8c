//! The ephemeris seam.
//!
//! Chart building and forecasting only ever ask one question of the sky: where
//! is this body along the ecliptic at this UTC moment. [`Ephemeris`] is that
//! question; the Swiss Ephemeris adapter and the in-memory table answer it.

#[cfg(feature = "swiss")]
pub mod adapter;
pub mod error;
pub mod table;
pub mod types;

#[cfg(feature = "swiss")]
pub use adapter::SwissEphemerisAdapter;
pub use error::EphemerisError;
pub use table::{TableEntry, TableEphemeris};
pub use types::{Body, GeoLocation};

use chrono::{DateTime, Utc};

pub trait Ephemeris {
    /// Geocentric ecliptic longitude of `body` at `moment`, in degrees [0, 360).
    ///
    /// Must return an error rather than a placeholder value when the moment
    /// cannot be resolved.
    fn longitude_of(&self, body: Body, moment: DateTime<Utc>) -> Result<f64, EphemerisError>;
}

/// Query `body` and reject non-finite answers, normalizing the rest to [0, 360).
pub(crate) fn checked_longitude<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: Body,
    moment: DateTime<Utc>,
) -> Result<f64, EphemerisError> {
    let longitude = ephemeris.longitude_of(body, moment)?;
    if !longitude.is_finite() {
        return Err(EphemerisError::CalculationFailed {
            body,
            moment,
            message: format!("non-finite longitude {}", longitude),
        });
    }
    Ok(crate::mapper::normalize_degrees(longitude))
}
