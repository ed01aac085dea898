//! Domain library for the Jyotish chart API.
//!
//! Holds the birth-data validator, the chart result model, and the
//! [`ChartProvider`] capability with its stub and ephemeris implementations.

pub mod birth;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod provider;
pub mod zodiac;

// Re-export commonly used types
pub use birth::{BirthInput, ValidationErrors};
pub use chart::{ChartResult, Planet, PlanetSigns};
pub use error::ChartError;
pub use provider::{ChartProvider, EphemerisProvider, StubProvider};
pub use zodiac::{Nakshatra, ZodiacSign};
