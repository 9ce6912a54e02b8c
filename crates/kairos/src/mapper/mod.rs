//! Longitude to symbol quantization.
//!
//! Everything in here is pure and total over finite input: any longitude maps to
//! exactly one zodiac sign and one gate/line cell.

pub mod wheel;
pub mod zodiac;

pub use wheel::{
    gate_line_of, gate_start_longitude, is_gate, GateLine, GATE_COUNT, GATE_WHEEL, GATE_WIDTH_DEG,
    LINES_PER_GATE, LINE_WIDTH_DEG, WHEEL_OFFSET_DEG,
};
pub use zodiac::{degree_in_sign, zodiac_sign_of, ZodiacSign, SIGN_WIDTH_DEG, ZODIAC_SIGNS};

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Shortest-arc separation between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = normalize_degrees(a - b);
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}
