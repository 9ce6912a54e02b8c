//! The fixed transit rule set.
//!
//! Rules run in declaration order and each emits at most one event per day.
//! Solar return and lunar fusion compare continuous longitudes against the natal
//! Sun; the pressure rule looks at the transiting Sun's gate.

use crate::forecast::types::{ForecastEvent, ForecastEventType, TransitSky};
use crate::mapper::{angular_distance, gate_line_of};

/// Strict upper bound on transit Sun / natal Sun separation.
pub const SOLAR_RETURN_ORB_DEG: f64 = 1.0;

/// Strict upper bound on transit Moon / natal Sun separation. Wide because the
/// Moon covers ~13° a day.
pub const LUNAR_FUSION_ORB_DEG: f64 = 6.0;

pub const PRESSURE_GATES: [u8; 3] = [60, 61, 41];

pub fn solar_return(natal_sun: f64, sky: &TransitSky) -> Option<ForecastEvent> {
    (angular_distance(sky.sun, natal_sun) < SOLAR_RETURN_ORB_DEG).then(|| ForecastEvent {
        date: sky.date,
        title: "Solar Return Alignment".to_string(),
        description: "Your annual reset point. High vital energy. Initiate new cycles."
            .to_string(),
        intensity: 10,
        event_type: ForecastEventType::Alignment,
    })
}

pub fn lunar_solar_fusion(natal_sun: f64, sky: &TransitSky) -> Option<ForecastEvent> {
    (angular_distance(sky.moon, natal_sun) < LUNAR_FUSION_ORB_DEG).then(|| ForecastEvent {
        date: sky.date,
        title: "Lunar-Solar Fusion".to_string(),
        description: "Emotional clarity aligns with purpose. Good for decision making."
            .to_string(),
        intensity: 7,
        event_type: ForecastEventType::Alignment,
    })
}

pub fn pressure_gradient(sky: &TransitSky) -> Option<ForecastEvent> {
    let gate = gate_line_of(sky.sun).gate;
    PRESSURE_GATES.contains(&gate).then(|| ForecastEvent {
        date: sky.date,
        title: format!("Pressure Gradient (Gate {})", gate),
        description: "Global transit activation. The field is pressurized for initiation."
            .to_string(),
        intensity: 6,
        event_type: ForecastEventType::Transit,
    })
}

/// Every event one day produces, in rule order.
pub fn evaluate_rules(natal_sun: f64, sky: &TransitSky) -> Vec<ForecastEvent> {
    [
        solar_return(natal_sun, sky),
        lunar_solar_fusion(natal_sun, sky),
        pressure_gradient(sky),
    ]
    .into_iter()
    .flatten()
    .collect()
}
