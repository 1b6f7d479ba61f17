//! Result envelope shared by both report endpoints.

use serde::Serialize;

use super::{DecodedMetar, DecodedTaf};

/// Outcome of a station lookup.
///
/// `success` is false exactly when the provider had no report for the
/// station. Transport faults are not represented here; they are a separate
/// outcome handled by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport<T> {
    pub success: bool,
    pub station: String,
    pub data: T,
}

/// METAR envelope: `data` is null when no report exists.
pub type MetarReport = StationReport<Option<DecodedMetar>>;

/// TAF envelope: `data` is always a well-formed forecast, empty when no
/// report exists.
pub type TafReport = StationReport<DecodedTaf>;

impl<T> StationReport<T> {
    /// A report that was found.
    pub fn found(station: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            station: station.into(),
            data,
        }
    }

    /// No report for the station; `data` carries the not-found payload.
    pub fn not_found(station: impl Into<String>, data: T) -> Self {
        Self {
            success: false,
            station: station.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metar_not_found_has_null_data() {
        let report: MetarReport = StationReport::not_found("KXYZ", None);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"success": false, "station": "KXYZ", "data": null})
        );
    }

    #[test]
    fn taf_not_found_has_empty_data() {
        let report: TafReport = StationReport::not_found("KXYZ", DecodedTaf::empty());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["data"]["fcsts"], json!([]));
        assert_eq!(value["data"]["issueTime"], json!(null));
    }

    #[test]
    fn found_sets_success() {
        let report = StationReport::found("EGLL", DecodedTaf::empty());
        assert!(report.success);
        assert_eq!(report.station, "EGLL");
    }
}
