//! Chart result model.
//!
//! [`ChartResult`] serializes straight into the success payload of the API,
//! so its serde names are the wire names (`Lagna`, `Moon Sign`, ...).

use std::fmt;

use serde::Serialize;

use crate::zodiac::{Nakshatra, ZodiacSign};

/// The seven classical bodies reported in every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

impl Planet {
    /// Report order.
    pub const ALL: [Planet; 7] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One sign per classical body. A struct rather than a map so a chart can
/// never carry fewer or extra planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetSigns {
    #[serde(rename = "Sun")]
    pub sun: ZodiacSign,
    #[serde(rename = "Moon")]
    pub moon: ZodiacSign,
    #[serde(rename = "Mars")]
    pub mars: ZodiacSign,
    #[serde(rename = "Mercury")]
    pub mercury: ZodiacSign,
    #[serde(rename = "Jupiter")]
    pub jupiter: ZodiacSign,
    #[serde(rename = "Venus")]
    pub venus: ZodiacSign,
    #[serde(rename = "Saturn")]
    pub saturn: ZodiacSign,
}

impl PlanetSigns {
    /// Builds the table by asking `sign_of` for each planet in report order.
    pub fn try_from_fn<E>(
        mut sign_of: impl FnMut(Planet) -> Result<ZodiacSign, E>,
    ) -> Result<Self, E> {
        Ok(PlanetSigns {
            sun: sign_of(Planet::Sun)?,
            moon: sign_of(Planet::Moon)?,
            mars: sign_of(Planet::Mars)?,
            mercury: sign_of(Planet::Mercury)?,
            jupiter: sign_of(Planet::Jupiter)?,
            venus: sign_of(Planet::Venus)?,
            saturn: sign_of(Planet::Saturn)?,
        })
    }

    pub fn get(&self, planet: Planet) -> ZodiacSign {
        match planet {
            Planet::Sun => self.sun,
            Planet::Moon => self.moon,
            Planet::Mars => self.mars,
            Planet::Mercury => self.mercury,
            Planet::Jupiter => self.jupiter,
            Planet::Venus => self.venus,
            Planet::Saturn => self.saturn,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Planet, ZodiacSign)> + '_ {
        Planet::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// Chart attributes computed for one birth moment and place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartResult {
    /// Ascendant (first house) sign.
    #[serde(rename = "Lagna")]
    pub lagna: ZodiacSign,
    #[serde(rename = "Moon Sign")]
    pub moon_sign: ZodiacSign,
    /// Lunar mansion of the Moon.
    #[serde(rename = "Nakshatra")]
    pub nakshatra: Nakshatra,
    pub planets: PlanetSigns,
}

impl ChartResult {
    /// The canned chart returned by the stub provider.
    pub fn fixed() -> Self {
        ChartResult {
            lagna: ZodiacSign::Libra,
            moon_sign: ZodiacSign::Taurus,
            nakshatra: Nakshatra::Rohini,
            planets: PlanetSigns {
                sun: ZodiacSign::Taurus,
                moon: ZodiacSign::Taurus,
                mars: ZodiacSign::Gemini,
                mercury: ZodiacSign::Aries,
                jupiter: ZodiacSign::Taurus,
                venus: ZodiacSign::Cancer,
                saturn: ZodiacSign::Taurus,
            },
        }
    }
}
