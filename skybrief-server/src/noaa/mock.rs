//! In-memory report source for testing without network access.
//!
//! Serves fixed records keyed by station, as if they were provider
//! responses. Stations with no records get an empty list, exactly like an
//! unknown station upstream.

use std::collections::HashMap;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::domain::Icao;

use super::error::NoaaError;
use super::source::ReportSource;
use super::types::{RawMetar, RawTaf};

/// Mock report source backed by in-memory records.
#[derive(Debug, Clone, Default)]
pub struct MockNoaaClient {
    metars: HashMap<Icao, Vec<RawMetar>>,
    tafs: HashMap<Icao, Vec<RawTaf>>,
    /// When set, every lookup fails with this upstream status.
    failure_status: Option<u16>,
}

impl MockNoaaClient {
    /// An empty source: every station has no reports.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a METAR record for a station.
    pub fn with_metar(mut self, station: &str, metar: RawMetar) -> Self {
        self.metars
            .entry(Icao::normalize(station))
            .or_default()
            .push(metar);
        self
    }

    /// Add a TAF record for a station.
    pub fn with_taf(mut self, station: &str, taf: RawTaf) -> Self {
        self.tafs
            .entry(Icao::normalize(station))
            .or_default()
            .push(taf);
        self
    }

    /// Make every lookup fail as if the provider answered with `status`.
    pub fn failing(mut self, status: u16) -> Self {
        self.failure_status = Some(status);
        self
    }

    fn lookup<T: Clone>(
        &self,
        records: &HashMap<Icao, Vec<T>>,
        station: &Icao,
    ) -> Result<Vec<T>, NoaaError> {
        if let Some(status) = self.failure_status {
            return Err(NoaaError::Api {
                status,
                message: format!("mock failure for station {station}"),
            });
        }

        Ok(records.get(station).cloned().unwrap_or_default())
    }
}

impl ReportSource for MockNoaaClient {
    fn fetch_metars<'a>(
        &'a self,
        station: &'a Icao,
    ) -> BoxFuture<'a, Result<Vec<RawMetar>, NoaaError>> {
        futures::future::ready(self.lookup(&self.metars, station)).boxed()
    }

    fn fetch_tafs<'a>(
        &'a self,
        station: &'a Icao,
    ) -> BoxFuture<'a, Result<Vec<RawTaf>, NoaaError>> {
        futures::future::ready(self.lookup(&self.tafs, station)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noaa::RawField;

    fn metar(station: &str) -> RawMetar {
        RawMetar {
            icao_id: Some(RawField::from(station)),
            ..RawMetar::default()
        }
    }

    #[tokio::test]
    async fn serves_records_by_station() {
        let client = MockNoaaClient::new().with_metar("kjfk", metar("KJFK"));

        let records = client.fetch_metars(&Icao::normalize("KJFK")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], metar("KJFK"));
    }

    #[tokio::test]
    async fn unknown_station_is_empty() {
        let client = MockNoaaClient::new().with_metar("KJFK", metar("KJFK"));

        let metars = client.fetch_metars(&Icao::normalize("KXYZ")).await.unwrap();
        assert!(metars.is_empty());

        let tafs = client.fetch_tafs(&Icao::normalize("KJFK")).await.unwrap();
        assert!(tafs.is_empty());
    }

    #[tokio::test]
    async fn failing_source_returns_error() {
        let client = MockNoaaClient::new()
            .with_metar("KJFK", metar("KJFK"))
            .failing(503);

        let result = client.fetch_metars(&Icao::normalize("KJFK")).await;
        assert!(matches!(result, Err(NoaaError::Api { status: 503, .. })));
    }
}
