pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{noon_utc, ForecastEngine, DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS};
pub use rules::{evaluate_rules, LUNAR_FUSION_ORB_DEG, PRESSURE_GATES, SOLAR_RETURN_ORB_DEG};
pub use types::{DayFailurePolicy, ForecastEvent, ForecastEventType, TransitSky};
