use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::planet_core::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks a `0xRRGGBB` integer. Bits above 24 are ignored.
    pub const fn from_hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Water,
    Terrain(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RampDef {
    terrain: Vec<Rgb>,
    water: Rgb,
}

/// Terrain colors ordered from the lowest elevation band to the highest, plus
/// the water color used for every negative height. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RampDef", into = "RampDef")]
pub struct ColorRamp {
    terrain: Vec<Rgb>,
    water: Rgb,
}

impl ColorRamp {
    pub fn new(terrain: Vec<Rgb>, water: Rgb) -> Result<Self, ConfigError> {
        if terrain.is_empty() {
            return Err(ConfigError::EmptyRamp);
        }
        Ok(Self { terrain, water })
    }

    pub fn terrain(&self) -> &[Rgb] {
        &self.terrain
    }

    pub fn water(&self) -> Rgb {
        self.water
    }

    pub fn band_count(&self) -> usize {
        self.terrain.len()
    }

    /// Maps an accumulated height to its band. Negative heights are water;
    /// the rest scale by the ramp length and clamp to the top band. A
    /// non-finite height lands in the lowest terrain band.
    pub fn classify(&self, height: f64) -> Band {
        if !height.is_finite() {
            return Band::Terrain(0);
        }
        if height < 0.0 {
            return Band::Water;
        }
        let last = self.terrain.len() - 1;
        let index = (height * self.terrain.len() as f64).floor() as usize;
        Band::Terrain(index.min(last))
    }

    pub fn color(&self, band: Band) -> Rgb {
        match band {
            Band::Water => self.water,
            Band::Terrain(index) => self.terrain[index.min(self.terrain.len() - 1)],
        }
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            terrain: vec![
                Rgb::from_hex(0xe5d9c2),
                Rgb::from_hex(0xb5ba61),
                Rgb::from_hex(0x7c8d4c),
                Rgb::from_hex(0x95a170),
                Rgb::from_hex(0xced6b6),
                Rgb::from_hex(0xfffafa),
            ],
            water: Rgb::from_hex(0xb6d0e3),
        }
    }
}

impl TryFrom<RampDef> for ColorRamp {
    type Error = ConfigError;

    fn try_from(def: RampDef) -> Result<Self, Self::Error> {
        Self::new(def.terrain, def.water)
    }
}

impl From<ColorRamp> for RampDef {
    fn from(ramp: ColorRamp) -> Self {
        Self {
            terrain: ramp.terrain,
            water: ramp.water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Band, ColorRamp, Rgb};
    use crate::planet_core::error::ConfigError;

    fn three_band() -> ColorRamp {
        ColorRamp::new(
            vec![Rgb::new(10, 0, 0), Rgb::new(20, 0, 0), Rgb::new(30, 0, 0)],
            Rgb::new(0, 0, 200),
        )
        .unwrap()
    }

    #[test]
    fn hex_unpacks_named_channels() {
        let c = Rgb::from_hex(0xb6d0e3);
        assert_eq!((c.r, c.g, c.b), (0xb6, 0xd0, 0xe3));
        assert_eq!(c.to_rgba(), [0xb6, 0xd0, 0xe3, 255]);
    }

    #[test]
    fn color_strings_parse_and_print() {
        assert_eq!("#e5d9c2".parse::<Rgb>().unwrap(), Rgb::from_hex(0xe5d9c2));
        assert_eq!("0x7C8D4C".parse::<Rgb>().unwrap(), Rgb::from_hex(0x7c8d4c));
        assert_eq!(Rgb::from_hex(0x0a0b0c).to_string(), "#0a0b0c");
        assert!(matches!("#12345".parse::<Rgb>(), Err(ConfigError::InvalidColor(_))));
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn empty_ramp_is_rejected() {
        assert_eq!(
            ColorRamp::new(Vec::new(), Rgb::new(0, 0, 0)),
            Err(ConfigError::EmptyRamp)
        );
    }

    #[test]
    fn empty_ramp_is_rejected_when_deserializing() {
        let parsed: Result<ColorRamp, _> =
            serde_json::from_str(r##"{"terrain": [], "water": "#000000"}"##);
        assert!(parsed.is_err());
    }

    #[test]
    fn ramp_round_trips_through_json() {
        let ramp = ColorRamp::default();
        let json = serde_json::to_string(&ramp).unwrap();
        assert!(json.contains("\"#e5d9c2\""));
        let back: ColorRamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ramp);
    }

    #[test]
    fn negative_heights_are_water() {
        let ramp = three_band();
        assert_eq!(ramp.classify(-1e-9), Band::Water);
        assert_eq!(ramp.classify(-0.7), Band::Water);
        assert_eq!(ramp.color(ramp.classify(-0.3)), ramp.water());
    }

    #[test]
    fn zero_height_is_lowest_terrain_band() {
        assert_eq!(three_band().classify(0.0), Band::Terrain(0));
    }

    #[test]
    fn bands_split_unit_interval_evenly() {
        let ramp = three_band();
        assert_eq!(ramp.classify(0.33), Band::Terrain(0));
        assert_eq!(ramp.classify(0.34), Band::Terrain(1));
        assert_eq!(ramp.classify(0.66), Band::Terrain(1));
        assert_eq!(ramp.classify(0.67), Band::Terrain(2));
    }

    #[test]
    fn heights_at_or_above_one_clamp_to_last_band() {
        let ramp = three_band();
        assert_eq!(ramp.classify(1.0), Band::Terrain(2));
        assert_eq!(ramp.classify(1.33), Band::Terrain(2));
        assert_eq!(ramp.classify(1e12), Band::Terrain(2));
    }

    #[test]
    fn banding_is_monotonic() {
        let ramp = ColorRamp::default();
        let index = |h: f64| match ramp.classify(h) {
            Band::Terrain(i) => i,
            Band::Water => panic!("non-negative height classified as water"),
        };
        let mut previous = 0;
        for step in 0..=1500 {
            let i = index(step as f64 * 0.001);
            assert!(i >= previous);
            previous = i;
        }
        assert_eq!(previous, ramp.band_count() - 1);
    }

    #[test]
    fn non_finite_heights_fall_back_to_lowest_band() {
        let ramp = three_band();
        assert_eq!(ramp.classify(f64::NAN), Band::Terrain(0));
        assert_eq!(ramp.classify(f64::INFINITY), Band::Terrain(0));
        assert_eq!(ramp.classify(f64::NEG_INFINITY), Band::Terrain(0));
    }
}
