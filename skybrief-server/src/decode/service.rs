//! Station lookups: fetch the raw record, then decode it.
//!
//! These are the two entry points used by the HTTP layer. They normalize
//! the requested identifier, ask the [`ReportSource`] for records, take the
//! first one, and wrap the result in a [`StationReport`].

use chrono::Utc;
use tracing::debug;

use crate::domain::{DecodedTaf, Icao, MetarReport, StationReport, TafReport};
use crate::noaa::{NoaaError, RawField, ReportSource};

use super::metar::decode_metar;
use super::taf::normalize_taf;

/// Look up and decode the current METAR for a station.
///
/// No record upstream gives `success: false` with null data. A fetch
/// failure is returned as an error, never folded into the envelope.
pub async fn get_decoded_metar<S>(source: &S, station: &str) -> Result<MetarReport, NoaaError>
where
    S: ReportSource + ?Sized,
{
    let icao = Icao::normalize(station);
    let records = source.fetch_metars(&icao).await?;

    let Some(raw) = records.first() else {
        debug!(station = %icao, "no METAR available");
        return Ok(StationReport::not_found(icao, None));
    };

    let decoded = decode_metar(raw, &icao, Utc::now());
    Ok(StationReport::found(decoded.station.clone(), Some(decoded)))
}

/// Look up and normalize the current TAF for a station.
///
/// Unlike METAR, the not-found payload is an empty but well-formed
/// forecast rather than null.
pub async fn get_taf<S>(source: &S, station: &str) -> Result<TafReport, NoaaError>
where
    S: ReportSource + ?Sized,
{
    let icao = Icao::normalize(station);
    let records = source.fetch_tafs(&icao).await?;

    let Some(raw) = records.first() else {
        debug!(station = %icao, "no TAF available");
        return Ok(StationReport::not_found(icao, DecodedTaf::empty()));
    };

    let station = raw
        .icao_id
        .as_ref()
        .and_then(RawField::as_text)
        .map(str::to_string)
        .unwrap_or_else(|| icao.to_string());

    Ok(StationReport::found(station, normalize_taf(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noaa::{MockNoaaClient, RawMetar, RawTaf};
    use serde_json::json;

    fn metar(json: &str) -> RawMetar {
        serde_json::from_str(json).unwrap()
    }

    fn taf(json: &str) -> RawTaf {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn metar_not_found() {
        let source = MockNoaaClient::new();

        let report = get_decoded_metar(&source, "KXYZ").await.unwrap();

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"success": false, "station": "KXYZ", "data": null})
        );
    }

    #[tokio::test]
    async fn metar_station_normalized() {
        let source = MockNoaaClient::new().with_metar(
            "KJFK",
            metar(r#"{"rawOb": "KJFK 151051Z 31018KT 10SM CLR 08/M02 A2981"}"#),
        );

        let report = get_decoded_metar(&source, "  kjfk ").await.unwrap();

        assert!(report.success);
        assert_eq!(report.station, "KJFK");
        let data = report.data.unwrap();
        assert_eq!(data.station, "KJFK");
        assert_eq!(data.raw, "KJFK 151051Z 31018KT 10SM CLR 08/M02 A2981");
    }

    #[tokio::test]
    async fn metar_not_found_station_normalized() {
        let report = get_decoded_metar(&MockNoaaClient::new(), " kxyz").await.unwrap();
        assert!(!report.success);
        assert_eq!(report.station, "KXYZ");
    }

    #[tokio::test]
    async fn metar_upstream_station_echoed() {
        let source = MockNoaaClient::new().with_metar("JFK", metar(r#"{"icaoId": "KJFK"}"#));

        let report = get_decoded_metar(&source, "jfk").await.unwrap();

        assert_eq!(report.station, "KJFK");
        assert_eq!(report.data.unwrap().station, "KJFK");
    }

    #[tokio::test]
    async fn metar_first_record_wins() {
        let source = MockNoaaClient::new()
            .with_metar("KJFK", metar(r#"{"icaoId": "KJFK", "rawOb": "newest"}"#))
            .with_metar("KJFK", metar(r#"{"icaoId": "KJFK", "rawOb": "older"}"#));

        let report = get_decoded_metar(&source, "KJFK").await.unwrap();

        assert_eq!(report.data.unwrap().raw, "newest");
    }

    #[tokio::test]
    async fn metar_fetch_failure_is_error() {
        let source = MockNoaaClient::new().failing(502);

        let result = get_decoded_metar(&source, "KJFK").await;

        assert!(matches!(result, Err(NoaaError::Api { status: 502, .. })));
    }

    #[tokio::test]
    async fn taf_not_found_has_empty_shape() {
        let report = get_taf(&MockNoaaClient::new(), "kxyz").await.unwrap();

        assert!(!report.success);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "success": false,
                "station": "KXYZ",
                "data": {
                    "rawTAF": "",
                    "fcsts": [],
                    "issueTime": null,
                    "validTimeFrom": null,
                    "validTimeTo": null
                }
            })
        );
    }

    #[tokio::test]
    async fn taf_found() {
        let source = MockNoaaClient::new().with_taf(
            "EGLL",
            taf(r#"{
                "icaoId": "EGLL",
                "rawTAF": "TAF EGLL 151100Z ...",
                "issueTime": "2024-03-15T11:00:00Z",
                "fcsts": [{"fcstChange": null, "wspd": 12}]
            }"#),
        );

        let report = get_taf(&source, "egll").await.unwrap();

        assert!(report.success);
        assert_eq!(report.station, "EGLL");
        assert_eq!(report.data.raw_taf, "TAF EGLL 151100Z ...");
        assert_eq!(report.data.fcsts, vec![json!({"fcstChange": null, "wspd": 12})]);
        assert_eq!(report.data.valid_time_to, None);
    }

    #[tokio::test]
    async fn taf_station_falls_back_to_requested() {
        let source = MockNoaaClient::new().with_taf("LFPG", taf(r#"{"rawTAF": "TAF LFPG ..."}"#));

        let report = get_taf(&source, "lfpg").await.unwrap();

        assert_eq!(report.station, "LFPG");
    }

    #[tokio::test]
    async fn taf_fetch_failure_is_error() {
        let result = get_taf(&MockNoaaClient::new().failing(500), "EGLL").await;
        assert!(result.is_err());
    }
}
