use crate::chart::ChartPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four aspects checked, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AspectType {
    Conjunction,
    Square,
    Opposition,
    Trine,
}

impl AspectType {
    pub const ALL: [AspectType; 4] = [
        AspectType::Conjunction,
        AspectType::Square,
        AspectType::Opposition,
        AspectType::Trine,
    ];

    /// Exact separation for this aspect, in degrees.
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Square => 90.0,
            AspectType::Opposition => 180.0,
            AspectType::Trine => 120.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectType::Conjunction => "conjunction",
            AspectType::Square => "square",
            AspectType::Opposition => "opposition",
            AspectType::Trine => "trine",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between two chart points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    #[serde(rename = "a")]
    pub from: ChartPoint,
    #[serde(rename = "b")]
    pub to: ChartPoint,
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    /// Deviation from the exact angle, in degrees.
    pub orb: f64,
}
