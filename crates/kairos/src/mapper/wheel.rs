//! The 64-gate wheel.
//!
//! The wheel divides the ecliptic into 64 gates of 5.625° each, and every gate
//! into 6 lines of 0.9375°, for 384 equal cells. Index 0 of [`GATE_WHEEL`]
//! (gate 41) begins at [`WHEEL_OFFSET_DEG`]; the sequence then runs forward
//! along the zodiac.

use super::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const GATE_COUNT: usize = 64;
pub const LINES_PER_GATE: u8 = 6;
pub const GATE_WIDTH_DEG: f64 = 360.0 / GATE_COUNT as f64;
pub const LINE_WIDTH_DEG: f64 = GATE_WIDTH_DEG / LINES_PER_GATE as f64;

/// Ecliptic longitude of the first line of gate 41 (302°15').
pub const WHEEL_OFFSET_DEG: f64 = 302.25;

#[rustfmt::skip]
pub const GATE_WHEEL: [u8; GATE_COUNT] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42, 3,
    27, 24, 2, 23, 8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56,
    31, 33, 7, 4, 29, 59, 40, 64, 47, 6, 46, 18, 48, 57, 32, 50,
    28, 44, 1, 43, 14, 34, 9, 5, 26, 11, 10, 58, 38, 54, 61, 60,
];

lazy_static::lazy_static! {
    /// gate number -> position on the wheel
    static ref WHEEL_INDEX: HashMap<u8, usize> = GATE_WHEEL
        .iter()
        .enumerate()
        .map(|(idx, &gate)| (gate, idx))
        .collect();
}

/// A resolved gate/line cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateLine {
    /// Gate number, 1-64.
    pub gate: u8,
    /// Line within the gate, 1-6.
    pub line: u8,
}

impl fmt::Display for GateLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.gate, self.line)
    }
}

/// Map a longitude to its gate and line.
///
/// One normalize, offset, divide pass per call so repeated lookups never
/// accumulate drift.
pub fn gate_line_of(longitude: f64) -> GateLine {
    let adjusted = normalize_degrees(normalize_degrees(longitude) - WHEEL_OFFSET_DEG);
    let wheel_position = adjusted / GATE_WIDTH_DEG;

    let mut index = wheel_position as usize;
    let mut fraction = wheel_position - index as f64;
    if index >= GATE_COUNT {
        // rounding just below 360° can land exactly on 64
        index = 0;
        fraction = 0.0;
    }

    let line = ((fraction * LINES_PER_GATE as f64) as u8 + 1).min(LINES_PER_GATE);
    GateLine {
        gate: GATE_WHEEL[index],
        line,
    }
}

/// Longitude where the given gate begins, or `None` if it is not a gate number.
pub fn gate_start_longitude(gate: u8) -> Option<f64> {
    WHEEL_INDEX
        .get(&gate)
        .map(|&idx| normalize_degrees(WHEEL_OFFSET_DEG + idx as f64 * GATE_WIDTH_DEG))
}

pub fn is_gate(gate: u8) -> bool {
    WHEEL_INDEX.contains_key(&gate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_is_a_permutation_of_1_to_64() {
        let mut sorted = GATE_WHEEL;
        sorted.sort_unstable();
        let expected: Vec<u8> = (1..=64).collect();
        assert_eq!(sorted.to_vec(), expected);
    }

    #[test]
    fn test_anchor() {
        assert_eq!(gate_line_of(302.25), GateLine { gate: 41, line: 1 });
        assert_eq!(gate_start_longitude(41), Some(302.25));
    }

    #[test]
    fn test_zero_aries_sits_in_gate_25() {
        // 57.75° past the anchor: index 10, fraction 0.2667 -> line 2
        assert_eq!(gate_line_of(0.0), GateLine { gate: 25, line: 2 });
    }

    #[test]
    fn test_last_cell_before_anchor() {
        let cell = gate_line_of(302.25 - LINE_WIDTH_DEG / 2.0);
        assert_eq!(cell, GateLine { gate: 60, line: 6 });
    }

    #[test]
    fn test_unknown_gate() {
        assert_eq!(gate_start_longitude(0), None);
        assert_eq!(gate_start_longitude(65), None);
        assert!(!is_gate(0));
        assert!(is_gate(64));
    }
}
