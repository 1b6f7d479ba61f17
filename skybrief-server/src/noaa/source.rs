//! The fetch seam between the decoders and the provider.

use futures::future::BoxFuture;

use crate::domain::Icao;

use super::error::NoaaError;
use super::types::{RawMetar, RawTaf};

/// Something that can look up raw reports for a station.
///
/// Each call returns zero or more records; the first one is authoritative.
/// An empty list means the provider has nothing for the station and is not
/// an error.
pub trait ReportSource: Send + Sync {
    /// Fetch current-conditions records.
    fn fetch_metars<'a>(
        &'a self,
        station: &'a Icao,
    ) -> BoxFuture<'a, Result<Vec<RawMetar>, NoaaError>>;

    /// Fetch forecast records.
    fn fetch_tafs<'a>(
        &'a self,
        station: &'a Icao,
    ) -> BoxFuture<'a, Result<Vec<RawTaf>, NoaaError>>;
}
