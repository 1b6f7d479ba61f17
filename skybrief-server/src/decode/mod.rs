//! Report decoding.
//!
//! Converts raw provider records into the canonical domain types:
//! - [`decode_metar`] applies the current-conditions heuristics (field
//!   alternates, ceiling selection, visibility tiers, altimeter units)
//! - [`normalize_taf`] defaults the top-level forecast fields and passes
//!   forecast periods through
//!
//! Both transforms are pure and total. [`get_decoded_metar`] and
//! [`get_taf`] pair them with a [`crate::noaa::ReportSource`] lookup.

mod fields;
mod metar;
mod service;
mod taf;

pub use fields::{
    GOOD_VISIBILITY_SM, HECTOPASCAL_THRESHOLD, MARGINAL_VISIBILITY_SM, altimeter_unit,
    parse_leading_number, visibility_tier,
};
pub use metar::{ceiling_from_layers, decode_metar};
pub use service::{get_decoded_metar, get_taf};
pub use taf::normalize_taf;
