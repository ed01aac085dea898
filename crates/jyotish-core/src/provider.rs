//! Chart providers.
//!
//! The HTTP layer only sees [`ChartProvider`]. [`StubProvider`] returns a
//! canned chart for contract testing; [`EphemerisProvider`] computes one from
//! the birth moment and place.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

use crate::birth::BirthInput;
use crate::chart::{ChartResult, Planet, PlanetSigns};
use crate::ephemeris;
use crate::error::ChartError;
use crate::zodiac::{Nakshatra, ZodiacSign};

/// Earliest and latest birth years the ephemeris model is trusted for.
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1800..=2200;

/// Capability that turns validated birth data into chart attributes.
///
/// Implementations are synchronous and may block; callers on an async
/// runtime should run them on a blocking thread.
pub trait ChartProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn compute(&self, input: &BirthInput) -> Result<ChartResult, ChartError>;
}

/// Returns [`ChartResult::fixed`] for every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubProvider;

impl ChartProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn compute(&self, _input: &BirthInput) -> Result<ChartResult, ChartError> {
        Ok(ChartResult::fixed())
    }
}

/// Computes sidereal (Lahiri) whole-sign placements from the built-in
/// ephemeris.
#[derive(Debug, Clone, Copy)]
pub struct EphemerisProvider {
    /// Offset used to read the birth `date` and `time` as civil time.
    utc_offset: FixedOffset,
}

impl EphemerisProvider {
    pub fn new(utc_offset: FixedOffset) -> Self {
        EphemerisProvider { utc_offset }
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Julian day of the birth moment after date/time/offset resolution.
    fn birth_julian_day(&self, input: &BirthInput) -> Result<f64, ChartError> {
        let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d").map_err(|_| {
            ChartError::InvalidDate {
                value: input.date.clone(),
            }
        })?;
        if !SUPPORTED_YEARS.contains(&date.year()) {
            return Err(ChartError::OutOfRange {
                field: "date",
                value: input.date.clone(),
            });
        }

        let time = parse_clock_time(input.time.trim()).ok_or_else(|| ChartError::InvalidTime {
            value: input.time.clone(),
        })?;

        let local = NaiveDateTime::new(date, time);
        let at = self
            .utc_offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| {
                ChartError::Internal(format!("cannot resolve local time {}", local))
            })?
            .with_timezone(&Utc);
        Ok(ephemeris::julian_day(at))
    }
}

impl Default for EphemerisProvider {
    fn default() -> Self {
        EphemerisProvider::new(Utc.fix())
    }
}

impl ChartProvider for EphemerisProvider {
    fn name(&self) -> &'static str {
        "ephemeris"
    }

    fn compute(&self, input: &BirthInput) -> Result<ChartResult, ChartError> {
        check_coordinate("lat", input.lat, 90.0)?;
        check_coordinate("lng", input.lng, 180.0)?;
        let jd = self.birth_julian_day(input)?;

        let sidereal_of =
            |planet: Planet| ephemeris::sidereal(ephemeris::tropical_longitude(planet, jd), jd);

        let ramc = ephemeris::local_sidereal_time(jd, input.lng);
        let ascendant = ephemeris::ascendant(ramc, input.lat, ephemeris::obliquity(jd));
        let lagna = ZodiacSign::from_longitude(ephemeris::sidereal(ascendant, jd));

        let moon = sidereal_of(Planet::Moon);
        let planets = PlanetSigns::try_from_fn(|planet| {
            let lon = sidereal_of(planet);
            if lon.is_finite() {
                Ok(ZodiacSign::from_longitude(lon))
            } else {
                Err(ChartError::Internal(format!("non-finite longitude for {}", planet)))
            }
        })?;

        Ok(ChartResult {
            lagna,
            moon_sign: planets.moon,
            nakshatra: Nakshatra::from_longitude(moon),
            planets,
        })
    }
}

fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

fn check_coordinate(field: &'static str, value: f64, limit: f64) -> Result<(), ChartError> {
    if value.is_finite() && value.abs() <= limit {
        Ok(())
    } else {
        Err(ChartError::OutOfRange {
            field,
            value: value.to_string(),
        })
    }
}

/// Parses a UTC offset written as `+HH:MM`, `-HH:MM`, `+HHMM` or `Z`.
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Some(Utc.fix());
    }

    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };
    if !rest.is_ascii() {
        return None;
    }
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => return None,
    };
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
