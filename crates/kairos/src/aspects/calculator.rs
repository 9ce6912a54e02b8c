use crate::aspects::types::{Aspect, AspectType};
use crate::chart::{Chart, ChartPoint, PlanetPosition, PointSource};
use crate::mapper::angular_distance;

/// Strict upper bound on the deviation from an exact aspect angle.
pub const DEFAULT_ASPECT_ORB_DEG: f64 = 6.0;

/// Aspect calculator
#[derive(Debug, Clone, Copy)]
pub struct AspectCalculator {
    orb: f64,
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self {
            orb: DEFAULT_ASPECT_ORB_DEG,
        }
    }
}

impl AspectCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orb(orb: f64) -> Self {
        Self { orb }
    }

    pub fn orb(&self) -> f64 {
        self.orb
    }

    /// The first aspect in [`AspectType::ALL`] order whose deviation is under
    /// the orb, with that deviation.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<(AspectType, f64)> {
        let angle = angular_distance(lon1, lon2);
        AspectType::ALL.into_iter().find_map(|aspect_type| {
            let deviation = (angle - aspect_type.exact_angle()).abs();
            (deviation < self.orb).then_some((aspect_type, deviation))
        })
    }

    /// Aspects between every pair of points in one chart, in chart order.
    ///
    /// Earth/Sun and South Node/North Node are left out: they are opposite by
    /// construction.
    pub fn compute_chart_aspects(&self, chart: &Chart) -> Vec<Aspect> {
        let positions = chart.positions();
        let mut aspects = Vec::new();
        for (i, p1) in positions.iter().enumerate() {
            for p2 in &positions[i + 1..] {
                if is_derived_pair(p1.point(), p2.point()) {
                    continue;
                }
                if let Some(aspect) = self.aspect_between(p1, p2) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    /// Aspects from every point of `from` to every point of `to`, e.g. a
    /// transit chart against a natal one. Same-named points are compared too.
    pub fn compute_inter_chart_aspects(&self, from: &Chart, to: &Chart) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for p1 in from.positions() {
            for p2 in to.positions() {
                if let Some(aspect) = self.aspect_between(p1, p2) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    fn aspect_between(&self, p1: &PlanetPosition, p2: &PlanetPosition) -> Option<Aspect> {
        self.calculate_aspect(p1.longitude(), p2.longitude())
            .map(|(aspect_type, orb)| Aspect {
                from: p1.point(),
                to: p2.point(),
                aspect_type,
                orb,
            })
    }
}

fn is_derived_pair(a: ChartPoint, b: ChartPoint) -> bool {
    match (a.source(), b.source()) {
        (PointSource::Observed(x), PointSource::Opposite(y))
        | (PointSource::Opposite(y), PointSource::Observed(x)) => x == y,
        _ => false,
    }
}
