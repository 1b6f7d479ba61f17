//! Domain types for decoded aviation weather.
//!
//! These are the canonical, fully-typed shapes returned to API consumers.
//! Upstream records are converted into them by [`crate::decode`].

mod metar;
mod report;
mod station;
mod taf;

pub use metar::{
    Altimeter, AltimeterUnit, Ceiling, CeilingCover, CloudCover, CloudLayer, DecodedMetar,
    FlightCategory, Visibility, VisibilityTier, VisibilityUnit, Wind, WindDirection, WindUnit,
};
pub use report::{MetarReport, StationReport, TafReport};
pub use station::Icao;
pub use taf::DecodedTaf;
