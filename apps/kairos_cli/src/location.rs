use crate::BirthArgs;
use kairos::{resolve_or_fallback, GeoLocation};
use kairos_config::KairosSettings;

/// Coordinates win over a place name; an unknown or missing place falls back
/// to the configured location. Explicit coordinates are not range-checked
/// here, the chart builder rejects them.
pub(crate) fn birth_location(birth: &BirthArgs, settings: &KairosSettings) -> GeoLocation {
    if let (Some(lat), Some(lon)) = (birth.lat, birth.lon) {
        return GeoLocation::new(lat, lon);
    }
    match birth.place.as_deref() {
        Some(place) => resolve_or_fallback(&settings.places, place, settings.fallback_location),
        None => {
            log::warn!(
                "no birth place given; using fallback ({}, {})",
                settings.fallback_location.lat,
                settings.fallback_location.lon
            );
            settings.fallback_location
        }
    }
}
