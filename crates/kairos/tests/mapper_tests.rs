use kairos::mapper::*;

#[test]
fn test_every_cell_is_a_wheel_gate_with_line_1_to_6() {
    for step in 0..36_000 {
        let lon = step as f64 * 0.01;
        let cell = gate_line_of(lon);
        assert!(GATE_WHEEL.contains(&cell.gate), "gate {} at {}", cell.gate, lon);
        assert!((1..=6).contains(&cell.line), "line {} at {}", cell.line, lon);
    }
}

#[test]
fn test_periodicity() {
    for lon in [0.5, 17.3, 99.9, 180.4, 302.7, 359.2] {
        let base = gate_line_of(lon);
        for k in [-3.0, -1.0, 1.0, 2.0, 5.0] {
            assert_eq!(gate_line_of(lon + 360.0 * k), base, "lon {} k {}", lon, k);
        }
        assert_eq!(zodiac_sign_of(lon + 720.0), zodiac_sign_of(lon));
    }
}

#[test]
fn test_wheel_anchor() {
    let cell = gate_line_of(302.25);
    assert_eq!(cell.gate, 41);
    assert_eq!(cell.line, 1);
    assert_eq!(cell.to_string(), "41.1");
}

#[test]
fn test_cell_midpoints_follow_wheel_order() {
    for (idx, &gate) in GATE_WHEEL.iter().enumerate() {
        let start = gate_start_longitude(gate).unwrap();
        assert_eq!(start, normalize_degrees(WHEEL_OFFSET_DEG + idx as f64 * GATE_WIDTH_DEG));
        for line in 1..=6u8 {
            let mid = start + LINE_WIDTH_DEG * (line as f64 - 0.5);
            assert_eq!(gate_line_of(mid), GateLine { gate, line });
        }
    }
}

#[test]
fn test_zodiac_boundaries() {
    assert_eq!(zodiac_sign_of(0.0), ZodiacSign::Aries);
    assert_eq!(zodiac_sign_of(359.999), ZodiacSign::Pisces);
    assert_eq!(zodiac_sign_of(-0.001), ZodiacSign::Pisces);
    for (idx, sign) in ZODIAC_SIGNS.iter().enumerate() {
        let start = idx as f64 * 30.0;
        assert_eq!(zodiac_sign_of(start), *sign);
        assert_eq!(zodiac_sign_of(start + 29.999), *sign);
    }
    assert_eq!(zodiac_sign_of(30.0), ZodiacSign::Taurus);
    assert_eq!(zodiac_sign_of(29.999_999), ZodiacSign::Aries);
}

#[test]
fn test_shortest_arc() {
    assert_eq!(angular_distance(350.0, 5.0), 15.0);
    assert_eq!(angular_distance(10.0, 190.0), 180.0);
    assert_eq!(angular_distance(720.0, 1.0), 1.0);
}

#[test]
fn test_sign_serializes_as_name() {
    let json = serde_json::to_string(&ZodiacSign::Sagittarius).unwrap();
    assert_eq!(json, "\"Sagittarius\"");
    assert_eq!(ZodiacSign::Sagittarius.to_string(), "Sagittarius");
}
