//! Symbolic chart calculation and transit forecasting.
//!
//! A birth moment and place become a [`Chart`]: thirteen points placed on the
//! zodiac and on the 64-gate wheel. A [`ForecastEngine`] then walks the days
//! ahead and reports when the transiting Sun and Moon line up with the natal
//! Sun. An [`AspectCalculator`] lists the aspects between chart points.
//!
//! Astronomy is delegated to an [`Ephemeris`]; place names to a
//! [`geocode::Geocoder`]. Nothing here falls back to invented data.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod mapper;

pub use aspects::{Aspect, AspectCalculator, AspectType};
pub use chart::{parse_birth_moment, Chart, ChartBuilder, ChartKind, ChartPoint, PlanetPosition};
#[cfg(feature = "swiss")]
pub use ephemeris::SwissEphemerisAdapter;
pub use ephemeris::{Body, Ephemeris, EphemerisError, GeoLocation, TableEphemeris};
pub use error::CalculationError;
pub use forecast::{
    DayFailurePolicy, ForecastEngine, ForecastEvent, ForecastEventType, DEFAULT_HORIZON_DAYS,
    MAX_HORIZON_DAYS,
};
pub use geocode::{
    resolve_or_fallback, Gazetteer, GeocodeError, Geocoder, DEFAULT_FALLBACK_LOCATION,
};
pub use mapper::{angular_distance, gate_line_of, zodiac_sign_of, GateLine, ZodiacSign};
