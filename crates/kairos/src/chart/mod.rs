pub mod builder;
pub mod moment;
pub mod types;

pub use builder::ChartBuilder;
pub use moment::{parse_birth_moment, MAX_UTC_OFFSET_MINUTES};
pub use types::{Chart, ChartKind, ChartPoint, PlanetPosition, PointSource};
