pub mod calculator;
pub mod types;

pub use calculator::{AspectCalculator, DEFAULT_ASPECT_ORB_DEG};
pub use types::{Aspect, AspectType};
