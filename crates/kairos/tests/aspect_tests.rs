use chrono::{DateTime, TimeZone, Utc};
use kairos::aspects::{Aspect, AspectCalculator, AspectType};
use kairos::chart::{Chart, ChartBuilder, ChartKind, ChartPoint};
use kairos::ephemeris::{Body, GeoLocation, TableEphemeris};

fn birth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1990, 7, 15, 14, 30, 0).unwrap()
}

// Sun 0, Moon 90, Earth 180, North Node 200, South Node 20, Mercury 3,
// Venus 240, Mars 52, Jupiter 160, Saturn 290, Uranus 275, Neptune 283,
// Pluto 225.
fn sky(sun: f64) -> TableEphemeris {
    TableEphemeris::new()
        .with_fixed(Body::Sun, sun)
        .with_fixed(Body::Moon, 90.0)
        .with_fixed(Body::NorthNode, 200.0)
        .with_fixed(Body::Mercury, 3.0)
        .with_fixed(Body::Venus, 240.0)
        .with_fixed(Body::Mars, 52.0)
        .with_fixed(Body::Jupiter, 160.0)
        .with_fixed(Body::Saturn, 290.0)
        .with_fixed(Body::Uranus, 275.0)
        .with_fixed(Body::Neptune, 283.0)
        .with_fixed(Body::Pluto, 225.0)
}

fn natal() -> Chart {
    ChartBuilder::new(&sky(0.0))
        .build(birth(), 52.52, 13.40)
        .unwrap()
}

fn find(aspects: &[Aspect], from: ChartPoint, to: ChartPoint) -> Option<&Aspect> {
    aspects.iter().find(|a| a.from == from && a.to == to)
}

#[test]
fn test_chart_aspects_by_type() {
    let aspects = AspectCalculator::new().compute_chart_aspects(&natal());

    let expected = [
        (ChartPoint::Sun, ChartPoint::Moon, AspectType::Square, 0.0),
        (ChartPoint::Sun, ChartPoint::Mercury, AspectType::Conjunction, 3.0),
        (ChartPoint::Sun, ChartPoint::Venus, AspectType::Trine, 0.0),
        (ChartPoint::Sun, ChartPoint::Uranus, AspectType::Square, 5.0),
        (ChartPoint::Moon, ChartPoint::Earth, AspectType::Square, 0.0),
        (ChartPoint::Moon, ChartPoint::Uranus, AspectType::Opposition, 5.0),
    ];
    for (from, to, aspect_type, orb) in expected {
        let aspect = find(&aspects, from, to).unwrap_or_else(|| panic!("{} / {}", from, to));
        assert_eq!(aspect.aspect_type, aspect_type, "{} / {}", from, to);
        assert!((aspect.orb - orb).abs() < 1e-9, "{} / {}", from, to);
    }

    // 20° off any aspect
    assert!(find(&aspects, ChartPoint::Earth, ChartPoint::Jupiter).is_none());
    // a sextile, which is not checked
    assert!(find(&aspects, ChartPoint::Sun, ChartPoint::Mars).is_none());
}

#[test]
fn test_chart_aspects_skip_constructed_oppositions() {
    let aspects = AspectCalculator::new().compute_chart_aspects(&natal());
    assert!(find(&aspects, ChartPoint::Sun, ChartPoint::Earth).is_none());
    assert!(find(&aspects, ChartPoint::NorthNode, ChartPoint::SouthNode).is_none());
}

#[test]
fn test_chart_aspects_follow_chart_order_and_orb() {
    let aspects = AspectCalculator::new().compute_chart_aspects(&natal());
    assert!(!aspects.is_empty());
    for aspect in &aspects {
        assert!(aspect.from < aspect.to, "{} / {}", aspect.from, aspect.to);
        assert!(aspect.orb >= 0.0 && aspect.orb < 6.0);
    }
}

#[test]
fn test_narrow_orb_drops_wide_aspects() {
    let aspects = AspectCalculator::with_orb(1.0).compute_chart_aspects(&natal());
    assert!(find(&aspects, ChartPoint::Sun, ChartPoint::Moon).is_some());
    assert!(find(&aspects, ChartPoint::Sun, ChartPoint::Mercury).is_none());
    assert!(find(&aspects, ChartPoint::Moon, ChartPoint::Uranus).is_none());
}

#[test]
fn test_transit_to_natal_aspects() {
    let transit = ChartBuilder::new(&sky(0.5))
        .build_transit(birth(), GeoLocation::new(0.0, 0.0))
        .unwrap();
    assert_eq!(transit.kind(), ChartKind::Transit);

    let aspects = AspectCalculator::new().compute_inter_chart_aspects(&transit, &natal());
    let return_hit = find(&aspects, ChartPoint::Sun, ChartPoint::Sun).unwrap();
    assert_eq!(return_hit.aspect_type, AspectType::Conjunction);
    assert!((return_hit.orb - 0.5).abs() < 1e-9);

    // the transiting Earth is opposite the natal Sun here, unlike within one chart
    let earth = find(&aspects, ChartPoint::Earth, ChartPoint::Sun).unwrap();
    assert_eq!(earth.aspect_type, AspectType::Opposition);
}

#[test]
fn test_aspect_json_shape() {
    let aspects = AspectCalculator::new().compute_chart_aspects(&natal());
    let square = find(&aspects, ChartPoint::Sun, ChartPoint::Moon).unwrap();
    let value = serde_json::to_value(square).unwrap();
    assert_eq!(value["a"], "Sun");
    assert_eq!(value["b"], "Moon");
    assert_eq!(value["type"], "SQUARE");
    assert_eq!(value["orb"], 0.0);
}
