use crate::chart::types::{Chart, ChartKind};
use crate::ephemeris::{checked_longitude, Body, Ephemeris, GeoLocation};
use crate::error::CalculationError;
use chrono::{DateTime, Utc};
use log::debug;

/// Builds [`Chart`]s from an ephemeris.
pub struct ChartBuilder<'a, E: Ephemeris + ?Sized> {
    ephemeris: &'a E,
}

impl<'a, E: Ephemeris + ?Sized> ChartBuilder<'a, E> {
    pub fn new(ephemeris: &'a E) -> Self {
        Self { ephemeris }
    }

    /// Build a natal chart for a UTC moment at already-resolved coordinates.
    pub fn build(
        &self,
        moment: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Chart, CalculationError> {
        self.build_kind(ChartKind::Natal, moment, GeoLocation::new(latitude, longitude))
    }

    /// Build a transiting chart: same procedure, tagged as the sky at `moment`.
    pub fn build_transit(
        &self,
        moment: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<Chart, CalculationError> {
        self.build_kind(ChartKind::Transit, moment, location)
    }

    fn build_kind(
        &self,
        kind: ChartKind,
        moment: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<Chart, CalculationError> {
        if !location.is_valid() {
            return Err(CalculationError::InvalidInput(format!(
                "coordinates out of range: lat {}, lon {}",
                location.lat, location.lon
            )));
        }

        let mut observed = [0.0; Body::ALL.len()];
        for (slot, body) in observed.iter_mut().zip(Body::ALL) {
            *slot = checked_longitude(self.ephemeris, body, moment)?;
        }

        // Body::ALL is in discriminant order
        let chart = Chart::assemble(kind, moment, location, |body| observed[body as usize]);
        debug!(
            "built {:?} chart for {} at ({}, {}): sun {}",
            kind,
            moment,
            location.lat,
            location.lon,
            chart.sun().gate_line()
        );
        Ok(chart)
    }
}
