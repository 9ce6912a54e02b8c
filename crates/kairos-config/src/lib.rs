use kairos::{
    DayFailurePolicy, Gazetteer, GeoLocation, DEFAULT_FALLBACK_LOCATION, DEFAULT_HORIZON_DAYS,
    MAX_HORIZON_DAYS,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Relative locations tried for `configs/kairos.toml`, from the repo root or
/// from a crate directory.
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["configs/kairos.toml", "../../configs/kairos.toml"];

#[derive(Debug, Clone)]
pub struct KairosSettings {
    /// Swiss Ephemeris data directory. `None` defers to the adapter's own lookup.
    pub ephemeris_path: Option<PathBuf>,
    pub horizon_days: u32,
    pub on_day_failure: DayFailurePolicy,
    pub fallback_location: GeoLocation,
    pub places: Gazetteer,
}

impl Default for KairosSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            horizon_days: DEFAULT_HORIZON_DAYS,
            on_day_failure: DayFailurePolicy::default(),
            fallback_location: DEFAULT_FALLBACK_LOCATION,
            places: Gazetteer::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ForecastToml {
    #[serde(default = "default_horizon_days")]
    horizon_days: u32,
    #[serde(default)]
    on_day_failure: DayFailurePolicy,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            on_day_failure: DayFailurePolicy::default(),
        }
    }
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocationToml {
    #[serde(default = "default_fallback_lat")]
    fallback_lat: f64,
    #[serde(default = "default_fallback_lon")]
    fallback_lon: f64,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            fallback_lat: default_fallback_lat(),
            fallback_lon: default_fallback_lon(),
        }
    }
}

fn default_fallback_lat() -> f64 {
    DEFAULT_FALLBACK_LOCATION.lat
}

fn default_fallback_lon() -> f64 {
    DEFAULT_FALLBACK_LOCATION.lon
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    forecast: ForecastToml,
    #[serde(default)]
    location: LocationToml,
    #[serde(default)]
    places: BTreeMap<String, [f64; 2]>,
}

/// Try the common relative paths for `configs/kairos.toml`. `Ok(None)` when
/// none of them exists.
pub fn read_config_toml_text() -> anyhow::Result<Option<String>> {
    for p in &CONFIG_SEARCH_PATHS {
        if let Some(text) = read_if_present(Path::new(p))? {
            return Ok(Some(text));
        }
    }
    Ok(None)
}

fn read_if_present(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => anyhow::bail!("Could not read {}: {e}", path.display()),
    }
}

/// Load settings from the default search paths, falling back to defaults
/// when no config file is present.
pub fn load_settings() -> anyhow::Result<KairosSettings> {
    match read_config_toml_text()? {
        Some(text) => parse_settings(&text),
        None => Ok(KairosSettings::default()),
    }
}

/// Load settings from an explicit file. Unlike [`load_settings`], a missing
/// file is an error here.
pub fn load_settings_from(path: &Path) -> anyhow::Result<KairosSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not load {}: {e}", path.display()))?;
    parse_settings(&text)
        .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))
}

pub fn parse_settings(text: &str) -> anyhow::Result<KairosSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse kairos.toml: {e}"))?;
    let RootConfigToml {
        ephemeris,
        forecast,
        location,
        places,
    } = root;

    if forecast.horizon_days == 0 || forecast.horizon_days > MAX_HORIZON_DAYS {
        anyhow::bail!(
            "forecast.horizon_days must be 1..={}, got {}",
            MAX_HORIZON_DAYS,
            forecast.horizon_days
        );
    }

    let fallback_location = GeoLocation::new(location.fallback_lat, location.fallback_lon);
    if !fallback_location.is_valid() {
        anyhow::bail!(
            "location.fallback_lat/fallback_lon out of range: ({}, {})",
            location.fallback_lat,
            location.fallback_lon
        );
    }

    let mut gazetteer = Gazetteer::new();
    for (name, [lat, lon]) in places {
        let place = GeoLocation::new(lat, lon);
        if !place.is_valid() {
            anyhow::bail!("places.{name:?} has out-of-range coordinates ({lat}, {lon})");
        }
        gazetteer.insert(&name, place);
    }

    Ok(KairosSettings {
        ephemeris_path: ephemeris.path,
        horizon_days: forecast.horizon_days,
        on_day_failure: forecast.on_day_failure,
        fallback_location,
        places: gazetteer,
    })
}
