use crate::ephemeris::{Body, GeoLocation};
use crate::mapper::{gate_line_of, normalize_degrees, zodiac_sign_of, GateLine, ZodiacSign};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The thirteen points every chart carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChartPoint {
    Sun,
    Moon,
    Earth,
    #[serde(rename = "North Node")]
    NorthNode,
    #[serde(rename = "South Node")]
    SouthNode,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Where a chart point's longitude comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSource {
    Observed(Body),
    /// 180° from the given body.
    Opposite(Body),
}

impl ChartPoint {
    /// Chart order; [`Chart::positions`] follows it.
    pub const ALL: [ChartPoint; 13] = [
        ChartPoint::Sun,
        ChartPoint::Moon,
        ChartPoint::Earth,
        ChartPoint::NorthNode,
        ChartPoint::SouthNode,
        ChartPoint::Mercury,
        ChartPoint::Venus,
        ChartPoint::Mars,
        ChartPoint::Jupiter,
        ChartPoint::Saturn,
        ChartPoint::Uranus,
        ChartPoint::Neptune,
        ChartPoint::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartPoint::Sun => "Sun",
            ChartPoint::Moon => "Moon",
            ChartPoint::Earth => "Earth",
            ChartPoint::NorthNode => "North Node",
            ChartPoint::SouthNode => "South Node",
            ChartPoint::Mercury => "Mercury",
            ChartPoint::Venus => "Venus",
            ChartPoint::Mars => "Mars",
            ChartPoint::Jupiter => "Jupiter",
            ChartPoint::Saturn => "Saturn",
            ChartPoint::Uranus => "Uranus",
            ChartPoint::Neptune => "Neptune",
            ChartPoint::Pluto => "Pluto",
        }
    }

    pub fn source(self) -> PointSource {
        match self {
            ChartPoint::Sun => PointSource::Observed(Body::Sun),
            ChartPoint::Moon => PointSource::Observed(Body::Moon),
            ChartPoint::Earth => PointSource::Opposite(Body::Sun),
            ChartPoint::NorthNode => PointSource::Observed(Body::NorthNode),
            ChartPoint::SouthNode => PointSource::Opposite(Body::NorthNode),
            ChartPoint::Mercury => PointSource::Observed(Body::Mercury),
            ChartPoint::Venus => PointSource::Observed(Body::Venus),
            ChartPoint::Mars => PointSource::Observed(Body::Mars),
            ChartPoint::Jupiter => PointSource::Observed(Body::Jupiter),
            ChartPoint::Saturn => PointSource::Observed(Body::Saturn),
            ChartPoint::Uranus => PointSource::Observed(Body::Uranus),
            ChartPoint::Neptune => PointSource::Observed(Body::Neptune),
            ChartPoint::Pluto => PointSource::Observed(Body::Pluto),
        }
    }
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One chart point resolved onto the zodiac and the gate wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    name: ChartPoint,
    /// Longitude in degrees (0-360)
    longitude: f64,
    gate: u8,
    line: u8,
    zodiac_sign: ZodiacSign,
}

impl PlanetPosition {
    pub fn from_longitude(point: ChartPoint, longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        let GateLine { gate, line } = gate_line_of(longitude);
        Self {
            name: point,
            longitude,
            gate,
            line,
            zodiac_sign: zodiac_sign_of(longitude),
        }
    }

    pub fn point(&self) -> ChartPoint {
        self.name
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn gate(&self) -> u8 {
        self.gate
    }

    pub fn line(&self) -> u8 {
        self.line
    }

    pub fn gate_line(&self) -> GateLine {
        GateLine {
            gate: self.gate,
            line: self.line,
        }
    }

    pub fn zodiac_sign(&self) -> ZodiacSign {
        self.zodiac_sign
    }
}

impl fmt::Display for PlanetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Gate {}.{} ({})",
            self.name, self.gate, self.line, self.zodiac_sign
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Fixed reference computed once for a birth moment.
    Natal,
    /// The sky at some later moment.
    Transit,
}

/// An immutable snapshot of all [`ChartPoint`]s at one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    kind: ChartKind,
    moment: DateTime<Utc>,
    location: GeoLocation,
    positions: Vec<PlanetPosition>,
}

impl Chart {
    /// Assemble a chart from the observed longitude of every [`Body`].
    ///
    /// Derived points take `(source + 180) % 360` of the stored, normalized
    /// source longitude, so the opposition holds exactly.
    pub(crate) fn assemble(
        kind: ChartKind,
        moment: DateTime<Utc>,
        location: GeoLocation,
        observed: impl Fn(Body) -> f64,
    ) -> Self {
        let positions = ChartPoint::ALL
            .iter()
            .map(|&point| {
                let longitude = match point.source() {
                    PointSource::Observed(body) => normalize_degrees(observed(body)),
                    PointSource::Opposite(body) => {
                        (normalize_degrees(observed(body)) + 180.0) % 360.0
                    }
                };
                PlanetPosition::from_longitude(point, longitude)
            })
            .collect();

        Self {
            kind,
            moment,
            location,
            positions,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn moment(&self) -> DateTime<Utc> {
        self.moment
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    /// All points in [`ChartPoint::ALL`] order.
    pub fn positions(&self) -> &[PlanetPosition] {
        &self.positions
    }

    pub fn position(&self, point: ChartPoint) -> &PlanetPosition {
        // positions is built from ChartPoint::ALL, whose order matches the enum
        &self.positions[point as usize]
    }

    pub fn sun(&self) -> &PlanetPosition {
        self.position(ChartPoint::Sun)
    }

    pub fn moon(&self) -> &PlanetPosition {
        self.position(ChartPoint::Moon)
    }

    pub fn earth(&self) -> &PlanetPosition {
        self.position(ChartPoint::Earth)
    }

    pub fn north_node(&self) -> &PlanetPosition {
        self.position(ChartPoint::NorthNode)
    }

    pub fn south_node(&self) -> &PlanetPosition {
        self.position(ChartPoint::SouthNode)
    }

    /// One `Sun: Gate 41.3 (Aquarius)` line per point, in chart order.
    pub fn summary_lines(&self) -> Vec<String> {
        self.positions.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_discriminants() {
        for (idx, point) in ChartPoint::ALL.iter().enumerate() {
            assert_eq!(*point as usize, idx);
        }
    }

    #[test]
    fn test_position_display() {
        let pos = PlanetPosition::from_longitude(ChartPoint::Sun, 302.25);
        assert_eq!(pos.to_string(), "Sun: Gate 41.1 (Aquarius)");
    }

    #[test]
    fn test_from_longitude_normalizes() {
        let pos = PlanetPosition::from_longitude(ChartPoint::Mars, -30.0);
        assert_eq!(pos.longitude(), 330.0);
        assert_eq!(pos.zodiac_sign(), ZodiacSign::Pisces);
    }
}
