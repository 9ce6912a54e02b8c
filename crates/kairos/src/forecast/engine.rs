use crate::chart::Chart;
use crate::ephemeris::{checked_longitude, Body, Ephemeris};
use crate::error::CalculationError;
use crate::forecast::rules::evaluate_rules;
use crate::forecast::types::{DayFailurePolicy, ForecastEvent, TransitSky};
use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use log::{debug, warn};

pub const DEFAULT_HORIZON_DAYS: u32 = 7;
pub const MAX_HORIZON_DAYS: u32 = 366;

/// Scans upcoming days for transits against a natal chart.
pub struct ForecastEngine<'a, E: Ephemeris + ?Sized> {
    ephemeris: &'a E,
}

impl<'a, E: Ephemeris + ?Sized> ForecastEngine<'a, E> {
    pub fn new(ephemeris: &'a E) -> Self {
        Self { ephemeris }
    }

    /// Forecast starting today (UTC).
    pub fn forecast(
        &self,
        natal: &Chart,
        horizon_days: u32,
    ) -> Result<Vec<ForecastEvent>, CalculationError> {
        self.forecast_from(natal, Utc::now().date_naive(), horizon_days)
    }

    /// Forecast `horizon_days` days beginning at `start`. The first failing day
    /// fails the run.
    pub fn forecast_from(
        &self,
        natal: &Chart,
        start: NaiveDate,
        horizon_days: u32,
    ) -> Result<Vec<ForecastEvent>, CalculationError> {
        self.forecast_with_policy(natal, start, horizon_days, DayFailurePolicy::Abort)
    }

    /// Events come back grouped by ascending date, rule order within a day.
    pub fn forecast_with_policy(
        &self,
        natal: &Chart,
        start: NaiveDate,
        horizon_days: u32,
        policy: DayFailurePolicy,
    ) -> Result<Vec<ForecastEvent>, CalculationError> {
        validate_horizon(horizon_days)?;

        let mut events = Vec::new();
        for offset in 0..horizon_days {
            let date = start.checked_add_days(Days::new(offset as u64)).ok_or_else(|| {
                CalculationError::InvalidInput(format!("{} + {} days overflows", start, offset))
            })?;

            match self.evaluate_day(natal, date) {
                Ok(day_events) => events.extend(day_events),
                Err(err) => match policy {
                    DayFailurePolicy::Abort => return Err(err),
                    DayFailurePolicy::Skip => warn!("skipping forecast day {}: {}", date, err),
                },
            }
        }
        Ok(events)
    }

    /// Evaluate one date on its own.
    pub fn evaluate_day(
        &self,
        natal: &Chart,
        date: NaiveDate,
    ) -> Result<Vec<ForecastEvent>, CalculationError> {
        let sky = self.transit_sky(date)?;
        let events = evaluate_rules(natal.sun().longitude(), &sky);
        debug!(
            "forecast {}: sun {:.3} moon {:.3} -> {} event(s)",
            date,
            sky.sun,
            sky.moon,
            events.len()
        );
        Ok(events)
    }

    /// Sun and Moon at noon UTC on `date`. Only these two bodies are needed,
    /// so no full chart is built.
    pub fn transit_sky(&self, date: NaiveDate) -> Result<TransitSky, CalculationError> {
        let noon = noon_utc(date)?;
        let sun = checked_longitude(self.ephemeris, Body::Sun, noon)?;
        let moon = checked_longitude(self.ephemeris, Body::Moon, noon)?;
        Ok(TransitSky { date, sun, moon })
    }
}

pub fn noon_utc(date: NaiveDate) -> Result<DateTime<Utc>, CalculationError> {
    date.and_hms_opt(12, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| CalculationError::InvalidInput(format!("no noon on {}", date)))
}

fn validate_horizon(horizon_days: u32) -> Result<(), CalculationError> {
    if horizon_days == 0 || horizon_days > MAX_HORIZON_DAYS {
        return Err(CalculationError::InvalidInput(format!(
            "horizon must be 1..={} days, got {}",
            MAX_HORIZON_DAYS, horizon_days
        )));
    }
    Ok(())
}
