//! Low-precision geocentric positions for the seven classical bodies.
//!
//! Mean orbital elements are linear in `d`, the number of days since
//! 2000 Jan 0.0 UT (JD 2451543.5), and already include precession, so the
//! resulting longitudes are tropical of date. Accuracy is on the order of a
//! degree for the Moon and better for the other bodies, good for sign
//! placement away from cusps within a few centuries of 2000.

use chrono::{DateTime, Utc};

use crate::chart::Planet;

/// Julian day of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Julian day of 2000 Jan 0.0 UT, the element epoch.
const ELEMENT_EPOCH_JD: f64 = 2_451_543.5;
/// Julian day of J2000.0.
const J2000_JD: f64 = 2_451_545.0;

/// Lahiri ayanamsa at J2000.0, degrees.
const LAHIRI_AT_J2000: f64 = 23.853;
/// General precession in longitude, degrees per Julian century.
const PRECESSION_PER_CENTURY: f64 = 1.397_2;

fn sind(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cosd(deg: f64) -> f64 {
    deg.to_radians().cos()
}

fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Normalizes an angle into [0, 360).
pub fn normalize(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Julian day number of a UTC instant.
pub fn julian_day(at: DateTime<Utc>) -> f64 {
    let seconds = at.timestamp() as f64 + f64::from(at.timestamp_subsec_millis()) / 1000.0;
    seconds / 86_400.0 + UNIX_EPOCH_JD
}

/// Days since the element epoch.
fn day_number(jd: f64) -> f64 {
    jd - ELEMENT_EPOCH_JD
}

/// Obliquity of the ecliptic, degrees.
pub fn obliquity(jd: f64) -> f64 {
    23.4393 - 3.563e-7 * day_number(jd)
}

/// Lahiri (Chitrapaksha) ayanamsa, degrees.
pub fn lahiri_ayanamsa(jd: f64) -> f64 {
    let centuries = (jd - J2000_JD) / 36_525.0;
    LAHIRI_AT_J2000 + PRECESSION_PER_CENTURY * centuries
}

/// Local sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_time(jd: f64, lng: f64) -> f64 {
    let gmst = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD);
    normalize(gmst + lng)
}

/// Ecliptic longitude of the ascendant, degrees.
///
/// `ramc` is the right ascension of the meridian (local sidereal time in
/// degrees), `lat` the geographic latitude.
pub fn ascendant(ramc: f64, lat: f64, obliquity: f64) -> f64 {
    let y = cosd(ramc);
    let x = -(sind(ramc) * cosd(obliquity) + lat.to_radians().tan() * sind(obliquity));
    normalize(atan2d(y, x))
}

/// Osculating-style orbital elements at one instant.
#[derive(Debug, Clone, Copy)]
struct Elements {
    /// Longitude of the ascending node.
    node: f64,
    inclination: f64,
    /// Argument of perihelion.
    perihelion: f64,
    /// Semi-major axis (AU, or Earth radii for the Moon).
    axis: f64,
    eccentricity: f64,
    mean_anomaly: f64,
}

impl Elements {
    fn sun(d: f64) -> Self {
        Elements {
            node: 0.0,
            inclination: 0.0,
            perihelion: 282.9404 + 4.70935e-5 * d,
            axis: 1.0,
            eccentricity: 0.016709 - 1.151e-9 * d,
            mean_anomaly: normalize(356.0470 + 0.985_600_258_5 * d),
        }
    }

    fn moon(d: f64) -> Self {
        Elements {
            node: normalize(125.1228 - 0.052_953_808_3 * d),
            inclination: 5.1454,
            perihelion: normalize(318.0634 + 0.164_357_322_3 * d),
            axis: 60.2666,
            eccentricity: 0.054900,
            mean_anomaly: normalize(115.3654 + 13.064_992_950_9 * d),
        }
    }

    fn mercury(d: f64) -> Self {
        Elements {
            node: 48.3313 + 3.24587e-5 * d,
            inclination: 7.0047 + 5.00e-8 * d,
            perihelion: 29.1241 + 1.01444e-5 * d,
            axis: 0.387098,
            eccentricity: 0.205635 + 5.59e-10 * d,
            mean_anomaly: normalize(168.6562 + 4.092_334_436_8 * d),
        }
    }

    fn venus(d: f64) -> Self {
        Elements {
            node: 76.6799 + 2.46590e-5 * d,
            inclination: 3.3946 + 2.75e-8 * d,
            perihelion: 54.8910 + 1.38374e-5 * d,
            axis: 0.723330,
            eccentricity: 0.006773 - 1.302e-9 * d,
            mean_anomaly: normalize(48.0052 + 1.602_130_224_4 * d),
        }
    }

    fn mars(d: f64) -> Self {
        Elements {
            node: 49.5574 + 2.11081e-5 * d,
            inclination: 1.8497 - 1.78e-8 * d,
            perihelion: 286.5016 + 2.92961e-5 * d,
            axis: 1.523688,
            eccentricity: 0.093405 + 2.516e-9 * d,
            mean_anomaly: normalize(18.6021 + 0.524_020_776_6 * d),
        }
    }

    fn jupiter(d: f64) -> Self {
        Elements {
            node: 100.4542 + 2.76854e-5 * d,
            inclination: 1.3030 - 1.557e-7 * d,
            perihelion: 273.8777 + 1.64505e-5 * d,
            axis: 5.20256,
            eccentricity: 0.048498 + 4.469e-9 * d,
            mean_anomaly: normalize(19.8950 + 0.083_085_300_1 * d),
        }
    }

    fn saturn(d: f64) -> Self {
        Elements {
            node: 113.6634 + 2.38980e-5 * d,
            inclination: 2.4886 - 1.081e-7 * d,
            perihelion: 339.3939 + 2.97661e-5 * d,
            axis: 9.55475,
            eccentricity: 0.055546 - 9.499e-9 * d,
            mean_anomaly: normalize(316.9670 + 0.033_444_228_2 * d),
        }
    }

    /// Mean longitude.
    fn mean_longitude(&self) -> f64 {
        normalize(self.mean_anomaly + self.perihelion + self.node)
    }

    /// Solves Kepler's equation, returning the eccentric anomaly in degrees.
    fn eccentric_anomaly(&self) -> f64 {
        let m = self.mean_anomaly;
        let e = self.eccentricity;
        let mut ea = m + e.to_degrees() * sind(m) * (1.0 + e * cosd(m));
        for _ in 0..10 {
            let next = ea - (ea - e.to_degrees() * sind(ea) - m) / (1.0 - e * cosd(ea));
            let done = (next - ea).abs() < 1e-6;
            ea = next;
            if done {
                break;
            }
        }
        ea
    }

    /// Distance and true anomaly in the orbital plane.
    fn in_orbit(&self) -> (f64, f64) {
        let ea = self.eccentric_anomaly();
        let e = self.eccentricity;
        let xv = self.axis * (cosd(ea) - e);
        let yv = self.axis * ((1.0 - e * e).sqrt() * sind(ea));
        ((xv * xv + yv * yv).sqrt(), atan2d(yv, xv))
    }

    /// Spherical ecliptic coordinates `(longitude, latitude, distance)`
    /// relative to the body the orbit is around.
    fn ecliptic(&self) -> Spherical {
        let (r, v) = self.in_orbit();
        let arg = v + self.perihelion;
        let (n, i) = (self.node, self.inclination);
        let x = r * (cosd(n) * cosd(arg) - sind(n) * sind(arg) * cosd(i));
        let y = r * (sind(n) * cosd(arg) + cosd(n) * sind(arg) * cosd(i));
        let z = r * (sind(arg) * sind(i));
        Spherical::from_rect(x, y, z)
    }
}

#[derive(Debug, Clone, Copy)]
struct Spherical {
    lon: f64,
    lat: f64,
    r: f64,
}

impl Spherical {
    fn from_rect(x: f64, y: f64, z: f64) -> Self {
        Spherical {
            lon: normalize(atan2d(y, x)),
            lat: atan2d(z, (x * x + y * y).sqrt()),
            r: (x * x + y * y + z * z).sqrt(),
        }
    }

    fn to_rect(self) -> (f64, f64, f64) {
        (
            self.r * cosd(self.lon) * cosd(self.lat),
            self.r * sind(self.lon) * cosd(self.lat),
            self.r * sind(self.lat),
        )
    }
}

/// Geocentric Sun: longitude and distance in AU.
fn sun_position(d: f64) -> (f64, f64) {
    let el = Elements::sun(d);
    let (r, v) = el.in_orbit();
    (normalize(v + el.perihelion), r)
}

fn moon_longitude(d: f64) -> f64 {
    let moon = Elements::moon(d);
    let sun = Elements::sun(d);
    let geo = moon.ecliptic();

    let ms = sun.mean_anomaly;
    let mm = moon.mean_anomaly;
    let ls = normalize(sun.mean_anomaly + sun.perihelion);
    let lm = moon.mean_longitude();
    let elong = lm - ls;
    let arg_lat = lm - moon.node;

    let correction = -1.274 * sind(mm - 2.0 * elong)
        + 0.658 * sind(2.0 * elong)
        - 0.186 * sind(ms)
        - 0.059 * sind(2.0 * mm - 2.0 * elong)
        - 0.057 * sind(mm - 2.0 * elong + ms)
        + 0.053 * sind(mm + 2.0 * elong)
        + 0.046 * sind(2.0 * elong - ms)
        + 0.041 * sind(mm - ms)
        - 0.035 * sind(elong)
        - 0.031 * sind(mm + ms)
        - 0.015 * sind(2.0 * arg_lat - 2.0 * elong)
        + 0.011 * sind(mm - 4.0 * elong);

    normalize(geo.lon + correction)
}

/// Mean anomalies of Jupiter and Saturn, which drive their mutual
/// perturbations.
fn giant_anomalies(d: f64) -> (f64, f64) {
    (
        Elements::jupiter(d).mean_anomaly,
        Elements::saturn(d).mean_anomaly,
    )
}

fn jupiter_heliocentric(d: f64) -> Spherical {
    let mut pos = Elements::jupiter(d).ecliptic();
    let (mj, ms) = giant_anomalies(d);
    pos.lon += -0.332 * sind(2.0 * mj - 5.0 * ms - 67.6)
        - 0.056 * sind(2.0 * mj - 2.0 * ms + 21.0)
        + 0.042 * sind(3.0 * mj - 5.0 * ms + 21.0)
        - 0.036 * sind(mj - 2.0 * ms)
        + 0.022 * cosd(mj - ms)
        + 0.023 * sind(2.0 * mj - 3.0 * ms + 52.0)
        - 0.016 * sind(mj - 5.0 * ms - 69.0);
    pos
}

fn saturn_heliocentric(d: f64) -> Spherical {
    let mut pos = Elements::saturn(d).ecliptic();
    let (mj, ms) = giant_anomalies(d);
    pos.lon += 0.812 * sind(2.0 * mj - 5.0 * ms - 67.6)
        - 0.229 * cosd(2.0 * mj - 4.0 * ms - 2.0)
        + 0.119 * sind(mj - 2.0 * ms - 3.0)
        + 0.046 * sind(2.0 * mj - 6.0 * ms - 69.0)
        + 0.014 * sind(mj - 3.0 * ms + 32.0);
    pos.lat += -0.020 * cosd(2.0 * mj - 4.0 * ms - 2.0) + 0.018 * sind(2.0 * mj - 6.0 * ms - 49.0);
    pos
}

/// Shifts a heliocentric position to the Earth by adding the Sun's
/// geocentric rectangular coordinates.
fn geocentric_longitude(d: f64, helio: Spherical) -> f64 {
    let (sun_lon, sun_r) = sun_position(d);
    let (x, y, z) = helio.to_rect();
    let xg = x + sun_r * cosd(sun_lon);
    let yg = y + sun_r * sind(sun_lon);
    Spherical::from_rect(xg, yg, z).lon
}

/// Tropical geocentric ecliptic longitude of `planet` at Julian day `jd`.
pub fn tropical_longitude(planet: Planet, jd: f64) -> f64 {
    let d = day_number(jd);
    match planet {
        Planet::Sun => sun_position(d).0,
        Planet::Moon => moon_longitude(d),
        Planet::Mercury => geocentric_longitude(d, Elements::mercury(d).ecliptic()),
        Planet::Venus => geocentric_longitude(d, Elements::venus(d).ecliptic()),
        Planet::Mars => geocentric_longitude(d, Elements::mars(d).ecliptic()),
        Planet::Jupiter => geocentric_longitude(d, jupiter_heliocentric(d)),
        Planet::Saturn => geocentric_longitude(d, saturn_heliocentric(d)),
    }
}

/// Converts a tropical longitude to sidereal (Lahiri).
pub fn sidereal(tropical: f64, jd: f64) -> f64 {
    normalize(tropical - lahiri_ayanamsa(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn jd_utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> f64 {
        julian_day(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
    }

    fn angle_diff(a: f64, b: f64) -> f64 {
        let d = normalize(a - b);
        d.min(360.0 - d)
    }

    #[test]
    fn julian_day_of_j2000() {
        assert!((jd_utc(2000, 1, 1, 12, 0) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn normalize_wraps_both_ways() {
        assert_eq!(normalize(370.0), 10.0);
        assert_eq!(normalize(-10.0), 350.0);
        assert_eq!(normalize(0.0), 0.0);
    }

    #[test]
    fn sun_at_j2000() {
        // apparent longitude is about 280.37; mean-element model within 0.3
        let lon = tropical_longitude(Planet::Sun, J2000_JD);
        assert!(angle_diff(lon, 280.4) < 0.3, "sun longitude {}", lon);
    }

    #[test]
    fn sun_near_june_solstice() {
        let lon = tropical_longitude(Planet::Sun, jd_utc(2024, 6, 20, 20, 51));
        assert!(angle_diff(lon, 90.0) < 0.2, "sun longitude {}", lon);
    }

    #[test]
    fn ayanamsa_grows_with_time() {
        let at_2000 = lahiri_ayanamsa(J2000_JD);
        let at_2024 = lahiri_ayanamsa(jd_utc(2024, 1, 1, 0, 0));
        assert!((at_2000 - 23.853).abs() < 1e-9);
        assert!((at_2024 - at_2000 - 0.335).abs() < 0.01);
    }

    #[test]
    fn ascendant_cardinal_cases_at_equator() {
        let eps = 23.44;
        assert!(angle_diff(ascendant(0.0, 0.0, eps), 90.0) < 1e-9);
        assert!(angle_diff(ascendant(90.0, 0.0, eps), 180.0) < 1e-9);
        assert!(angle_diff(ascendant(180.0, 0.0, eps), 270.0) < 1e-9);
        assert!(angle_diff(ascendant(270.0, 0.0, eps), 0.0) < 1e-9);
    }

    #[test]
    fn ascendant_is_east_of_meridian() {
        // the ascendant always lies in the half of the ecliptic following the MC
        for ramc in [10.0, 75.0, 140.0, 200.0, 310.0] {
            let asc = ascendant(ramc, 45.0, 23.44);
            let mc = normalize(atan2d(sind(ramc), cosd(ramc) * cosd(23.44)));
            let ahead = normalize(asc - mc);
            assert!(ahead > 0.0 && ahead < 180.0, "ramc {} asc {} mc {}", ramc, asc, mc);
        }
    }

    #[test]
    fn local_sidereal_time_shifts_with_longitude() {
        let jd = jd_utc(2024, 3, 1, 0, 0);
        let greenwich = local_sidereal_time(jd, 0.0);
        let east = local_sidereal_time(jd, 90.0);
        assert!(angle_diff(east, greenwich + 90.0) < 1e-9);
    }

    #[test]
    fn outer_planets_early_2024() {
        let jd = jd_utc(2024, 1, 1, 0, 0);
        // Jupiter stationed near 5.6 Taurus, Saturn near 3 Pisces
        let jupiter = tropical_longitude(Planet::Jupiter, jd);
        let saturn = tropical_longitude(Planet::Saturn, jd);
        assert!(angle_diff(jupiter, 35.6) < 1.0, "jupiter {}", jupiter);
        assert!(angle_diff(saturn, 333.3) < 1.0, "saturn {}", saturn);
    }

    #[test]
    fn moon_moves_about_thirteen_degrees_a_day() {
        let jd = jd_utc(2024, 1, 1, 0, 0);
        let a = tropical_longitude(Planet::Moon, jd);
        let b = tropical_longitude(Planet::Moon, jd + 1.0);
        let motion = normalize(b - a);
        assert!((10.5..15.5).contains(&motion), "moon motion {}", motion);
    }

    #[test]
    fn inner_planets_stay_near_the_sun() {
        let jd = jd_utc(2023, 9, 15, 0, 0);
        let sun = tropical_longitude(Planet::Sun, jd);
        let mercury = tropical_longitude(Planet::Mercury, jd);
        let venus = tropical_longitude(Planet::Venus, jd);
        assert!(angle_diff(mercury, sun) < 28.5, "mercury {} sun {}", mercury, sun);
        assert!(angle_diff(venus, sun) < 47.5, "venus {} sun {}", venus, sun);
    }
}
