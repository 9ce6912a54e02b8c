//! Tropical zodiac signs.
//!
//! Twelve equal 30° segments starting at 0° Aries.

use super::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIGN_WIDTH_DEG: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Signs in ecliptic order, index 0 at 0°.
pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Position in [`ZODIAC_SIGNS`] (0 = Aries).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Longitude where this sign begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * SIGN_WIDTH_DEG
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign containing the given longitude.
pub fn zodiac_sign_of(longitude: f64) -> ZodiacSign {
    let lon = normalize_degrees(longitude);
    ZODIAC_SIGNS[(lon / SIGN_WIDTH_DEG) as usize % ZODIAC_SIGNS.len()]
}

/// Degrees into the containing sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    let lon = normalize_degrees(longitude);
    lon - zodiac_sign_of(lon).start_longitude()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_order_matches_index() {
        for (idx, sign) in ZODIAC_SIGNS.iter().enumerate() {
            assert_eq!(sign.index(), idx);
        }
    }

    #[test]
    fn test_degree_in_sign() {
        assert_eq!(degree_in_sign(0.0), 0.0);
        assert_eq!(degree_in_sign(45.0), 15.0);
        assert_eq!(degree_in_sign(-15.0), 15.0);
    }
}
