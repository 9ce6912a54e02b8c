//! Place name resolution.
//!
//! Charts take coordinates, never place names. Callers resolve a birth place
//! through a [`Geocoder`] first and decide what happens when that fails;
//! [`resolve_or_fallback`] is the usual policy.

use crate::ephemeris::GeoLocation;
use log::warn;
use std::collections::HashMap;
use thiserror::Error;

/// Berlin. Used when a place cannot be resolved and no other default is configured.
pub const DEFAULT_FALLBACK_LOCATION: GeoLocation = GeoLocation {
    lat: 52.52,
    lon: 13.40,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    #[error("empty place query")]
    EmptyQuery,
    #[error("no coordinates known for {0:?}")]
    NotFound(String),
}

pub trait Geocoder {
    fn resolve(&self, place: &str) -> Result<GeoLocation, GeocodeError>;
}

/// A fixed table of place names, matched case-insensitively after trimming.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: HashMap<String, GeoLocation>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, name: &str, location: GeoLocation) -> Self {
        self.insert(name, location);
        self
    }

    pub fn insert(&mut self, name: &str, location: GeoLocation) {
        self.places.insert(place_key(name), location);
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, GeoLocation)> for Gazetteer {
    fn from_iter<I: IntoIterator<Item = (S, GeoLocation)>>(iter: I) -> Self {
        let mut gazetteer = Gazetteer::new();
        for (name, location) in iter {
            gazetteer.insert(name.as_ref(), location);
        }
        gazetteer
    }
}

impl Geocoder for Gazetteer {
    fn resolve(&self, place: &str) -> Result<GeoLocation, GeocodeError> {
        let key = place_key(place);
        if key.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        self.places
            .get(&key)
            .copied()
            .ok_or_else(|| GeocodeError::NotFound(place.trim().to_string()))
    }
}

fn place_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolve `place`, or return `fallback` (with a warning) if it cannot be.
pub fn resolve_or_fallback<G: Geocoder + ?Sized>(
    geocoder: &G,
    place: &str,
    fallback: GeoLocation,
) -> GeoLocation {
    match geocoder.resolve(place) {
        Ok(location) => location,
        Err(err) => {
            warn!(
                "geocoding failed ({}); using fallback ({}, {})",
                err, fallback.lat, fallback.lon
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let gazetteer = Gazetteer::new().with_place("New York", GeoLocation::new(40.7128, -74.006));
        assert_eq!(
            gazetteer.resolve("  new york "),
            Ok(GeoLocation::new(40.7128, -74.006))
        );
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(Gazetteer::new().resolve("   "), Err(GeocodeError::EmptyQuery));
    }
}
