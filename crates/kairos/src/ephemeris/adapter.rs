use crate::ephemeris::{Body, Ephemeris, EphemerisError};
use crate::mapper::normalize_degrees;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, julday, set_ephe_path};

/// FLG_SWIEPH: read the Swiss Ephemeris data files.
const FLG_SWIEPH: u32 = 2;

/// GREG_CAL
const GREGORIAN: u32 = 1;

/// Years covered by the standard sepl_18 / semo_18 data files.
const SUPPORTED_YEARS: RangeInclusive<i32> = 1800..=2399;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris body codes. The node is MEAN_NODE, not TRUE_NODE.
fn swiss_body_code(body: Body) -> u32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
        Body::Uranus => 7,
        Body::Neptune => 8,
        Body::Pluto => 9,
        Body::NorthNode => 10,
    }
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Falls back to `SWISS_EPHEMERIS_PATH`, then the system install location.
    /// The resolved directory is handed to the library, so it applies to every
    /// later calculation in the process.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = resolve_ephemeris_path(ephemeris_path);

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        set_ephe_path(&path.to_string_lossy());
        let adapter = Self {
            ephemeris_path: path,
        };
        log::debug!(
            "swiss ephemeris data at {}",
            adapter.ephemeris_path().display()
        );
        Ok(adapter)
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }
}

/// Explicit path, then `SWISS_EPHEMERIS_PATH`, then the system install location.
fn resolve_ephemeris_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        env::var("SWISS_EPHEMERIS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
    })
}

impl Ephemeris for SwissEphemerisAdapter {
    fn longitude_of(&self, body: Body, moment: DateTime<Utc>) -> Result<f64, EphemerisError> {
        if !SUPPORTED_YEARS.contains(&moment.year()) {
            return Err(EphemerisError::OutOfRange { body, moment });
        }

        let jd = datetime_to_julian_day(moment);
        let result = calc_ut(jd, swiss_body_code(body), FLG_SWIEPH).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                moment,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body,
                moment,
                message: format!("non-finite longitude {}", longitude),
            });
        }
        Ok(normalize_degrees(longitude))
    }
}

/// Convert UTC datetime to Julian Day
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREGORIAN)
}
