//! NOAA Aviation Weather Center client.
//!
//! This module fetches raw METAR and TAF records from the provider's data
//! API (`https://aviationweather.gov/api/data`).
//!
//! Key characteristics of the provider:
//! - Unknown or quiet stations return an empty list (or 204), not an error
//! - Fields are optional and loosely typed; some concepts appear under two
//!   different names depending on feed vintage
//! - Units are not tagged on the altimeter or wind speed values

mod client;
mod error;
mod mock;
mod source;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, NoaaClient, NoaaConfig,
};
pub use error::NoaaError;
pub use mock::MockNoaaClient;
pub use source::ReportSource;
pub use types::{RawCloudLayer, RawField, RawMetar, RawTaf};
