//! In-memory ephemeris.
//!
//! Answers from recorded longitudes only. Lookups check exact (body, moment)
//! entries first, then a per-body fixed longitude; anything else is
//! [`EphemerisError::Missing`]. Offline runs load one of these from JSON.

use crate::ephemeris::{Body, Ephemeris, EphemerisError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub body: Body,
    pub moment: DateTime<Utc>,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableEphemeris {
    /// Longitude returned for a body at any moment without an exact entry.
    #[serde(default)]
    fixed: BTreeMap<Body, f64>,
    #[serde(default)]
    entries: Vec<TableEntry>,
}

impl TableEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixed(mut self, body: Body, longitude: f64) -> Self {
        self.fixed.insert(body, longitude);
        self
    }

    pub fn with_longitude(mut self, body: Body, moment: DateTime<Utc>, longitude: f64) -> Self {
        self.insert(body, moment, longitude);
        self
    }

    /// Record a longitude; a later entry for the same body and moment wins.
    pub fn insert(&mut self, body: Body, moment: DateTime<Utc>, longitude: f64) {
        self.entries.push(TableEntry {
            body,
            moment,
            longitude,
        });
    }

    /// Number of exact (body, moment) entries. Fixed longitudes are not counted.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// True when the table can answer nothing: no entries and no fixed longitudes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.fixed.is_empty()
    }
}

impl Ephemeris for TableEphemeris {
    fn longitude_of(&self, body: Body, moment: DateTime<Utc>) -> Result<f64, EphemerisError> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.body == body && entry.moment == moment)
            .map(|entry| entry.longitude)
            .or_else(|| self.fixed.get(&body).copied())
            .ok_or(EphemerisError::Missing { body, moment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_exact_entry_beats_fixed() {
        let moment = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let table = TableEphemeris::new()
            .with_fixed(Body::Sun, 10.0)
            .with_longitude(Body::Sun, moment, 0.5);

        assert_eq!(table.longitude_of(Body::Sun, moment), Ok(0.5));
        let later = Utc.with_ymd_and_hms(2024, 3, 21, 12, 0, 0).unwrap();
        assert_eq!(table.longitude_of(Body::Sun, later), Ok(10.0));
    }

    #[test]
    fn test_missing_is_an_error() {
        let moment = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let table = TableEphemeris::new();
        assert_eq!(
            table.longitude_of(Body::Moon, moment),
            Err(EphemerisError::Missing {
                body: Body::Moon,
                moment
            })
        );
    }

    #[test]
    fn test_last_insert_wins() {
        let moment = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let mut table = TableEphemeris::new();
        table.insert(Body::Mars, moment, 1.0);
        table.insert(Body::Mars, moment, 2.0);
        assert_eq!(table.longitude_of(Body::Mars, moment), Ok(2.0));
        assert_eq!(table.entry_count(), 2);
    }

    #[test]
    fn test_fixed_only_table_is_not_empty() {
        let table = TableEphemeris::new().with_fixed(Body::Sun, 10.0);
        assert_eq!(table.entry_count(), 0);
        assert!(!table.is_empty());
        assert!(TableEphemeris::new().is_empty());
    }
}
