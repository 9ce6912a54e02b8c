use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ForecastEventType {
    Alignment,
    Transit,
    Void,
}

/// A dated forecast entry. Value object: two events with the same fields are
/// the same event, but the engine never deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEvent {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    /// 1-10
    pub intensity: u8,
    #[serde(rename = "type")]
    pub event_type: ForecastEventType,
}

/// What a forecast run does when one day's transit lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayFailurePolicy {
    /// Fail the whole run with the first error.
    #[default]
    Abort,
    /// Log the failure and leave that day out.
    Skip,
}

/// Transiting Sun and Moon at noon UTC on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitSky {
    pub date: NaiveDate,
    pub sun: f64,
    pub moon: f64,
}
