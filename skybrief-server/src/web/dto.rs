//! Response bodies that are not domain types.

use serde::Serialize;
use serde_json::Value;

use crate::domain::{DecodedMetar, Icao, StationReport};

/// TAF data sent alongside a 500: just enough shape for clients that read
/// `rawTAF` and `fcsts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TafFaultData {
    #[serde(rename = "rawTAF")]
    pub raw_taf: String,
    pub fcsts: Vec<Value>,
}

/// Envelope for a METAR lookup that failed.
pub fn metar_fault(station: &Icao) -> StationReport<Option<DecodedMetar>> {
    StationReport {
        success: false,
        station: station.to_string(),
        data: None,
    }
}

/// Envelope for a TAF lookup that failed.
pub fn taf_fault(station: &Icao) -> StationReport<TafFaultData> {
    StationReport {
        success: false,
        station: station.to_string(),
        data: TafFaultData::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metar_fault_shape() {
        let body = metar_fault(&Icao::normalize("kjfk"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": false, "station": "KJFK", "data": null})
        );
    }

    #[test]
    fn taf_fault_shape() {
        let body = taf_fault(&Icao::normalize("kjfk"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": false, "station": "KJFK", "data": {"rawTAF": "", "fcsts": []}})
        );
    }
}
