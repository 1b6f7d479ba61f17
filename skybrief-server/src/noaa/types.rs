//! NOAA Aviation Weather Center response DTOs.
//!
//! These types map the JSON records returned by `/api/data/metar` and
//! `/api/data/taf`. The provider's schema is not a contract: any field may be
//! missing, `null`, or carry a different JSON type than documented. Every
//! field is therefore optional and deserializes leniently, so one odd field
//! never invalidates the whole record.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// A single upstream scalar of unknown type.
///
/// NOAA sends most values as numbers, but some fields (visibility, wind
/// direction) switch to text for special cases such as `"10+"` or `"VRB"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    Other(Value),
}

impl RawField {
    /// The value if it was sent as a finite JSON number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawField::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// The value if it was sent as a JSON string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawField::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for RawField {
    fn from(n: f64) -> Self {
        RawField::Number(n)
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        RawField::Text(s.to_string())
    }
}

/// One record from the METAR endpoint.
///
/// Field names follow the provider. Two concepts arrive under alternate
/// names: the encoded text (`rawOb`, older feeds `rawText`) and the
/// observation time (`obsTime` as epoch seconds, `reportTime` as text).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetar {
    /// ICAO identifier of the reporting station.
    pub icao_id: Option<RawField>,

    /// Encoded report text.
    pub raw_ob: Option<RawField>,

    /// Encoded report text (legacy name).
    pub raw_text: Option<RawField>,

    /// Observation time, usually Unix epoch seconds.
    pub obs_time: Option<RawField>,

    /// Report time, usually `YYYY-MM-DD hh:mm:ss` text.
    pub report_time: Option<RawField>,

    /// Flight category computed by the provider.
    pub flt_cat: Option<RawField>,

    /// Wind direction in degrees, or `"VRB"`.
    pub wdir: Option<RawField>,

    /// Wind speed.
    pub wspd: Option<RawField>,

    /// Gust speed.
    pub wgst: Option<RawField>,

    /// Visibility in statute miles; may be text such as `"10+"`.
    pub visib: Option<RawField>,

    /// Space-delimited present weather, e.g. `"-RA BR"`.
    pub wx_string: Option<RawField>,

    /// Cloud layers, lowest first.
    #[serde(default, deserialize_with = "lenient_list")]
    pub clouds: Option<Vec<RawCloudLayer>>,

    /// Temperature in degrees Celsius.
    pub temp: Option<RawField>,

    /// Dewpoint in degrees Celsius.
    pub dewp: Option<RawField>,

    /// Altimeter setting, unit not tagged.
    pub altim: Option<RawField>,

    /// Free-text remarks.
    pub remarks: Option<RawField>,
}

/// A cloud layer inside a METAR record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCloudLayer {
    /// Cover code (`FEW`, `SCT`, `BKN`, `OVC`, `VV`, ...).
    pub cover: Option<RawField>,

    /// Base height in feet above ground.
    pub base: Option<RawField>,

    /// Convective type (`CB`, `TCU`).
    #[serde(rename = "type")]
    pub kind: Option<RawField>,
}

/// One record from the TAF endpoint.
///
/// Only the top-level fields are modelled. Forecast periods stay as opaque
/// JSON and are handed to consumers untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTaf {
    pub icao_id: Option<RawField>,

    #[serde(rename = "rawTAF")]
    pub raw_taf: Option<RawField>,

    /// Forecast periods.
    #[serde(default, deserialize_with = "lenient_list")]
    pub fcsts: Option<Vec<Value>>,

    /// Issue time (text).
    pub issue_time: Option<Value>,

    /// Start of validity (epoch seconds).
    pub valid_time_from: Option<Value>,

    /// End of validity (epoch seconds).
    pub valid_time_to: Option<Value>,
}

/// Deserialize a list field, tolerating a non-array value. Elements that do
/// not fit the element type keep their place as the type's default.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_metar() {
        let json = r#"{
            "icaoId": "KJFK",
            "receiptTime": "2024-03-15 10:56:12",
            "obsTime": 1710499860,
            "reportTime": "2024-03-15 11:00:00",
            "temp": 8.3,
            "dewp": -2.2,
            "wdir": 310,
            "wspd": 18,
            "wgst": 27,
            "visib": "10+",
            "altim": 1009.5,
            "wxString": "-RA BR",
            "rawOb": "KJFK 151051Z 31018G27KT 10SM -RA BR BKN045 OVC250 08/M02 A2981",
            "fltCat": "VFR",
            "clouds": [
                {"cover": "BKN", "base": 4500},
                {"cover": "OVC", "base": 25000}
            ]
        }"#;

        let metar: RawMetar = serde_json::from_str(json).unwrap();

        assert_eq!(metar.icao_id.as_ref().and_then(RawField::as_text), Some("KJFK"));
        assert_eq!(metar.obs_time.as_ref().and_then(RawField::as_number), Some(1710499860.0));
        assert_eq!(metar.wdir.as_ref().and_then(RawField::as_number), Some(310.0));
        assert_eq!(metar.visib.as_ref().and_then(RawField::as_text), Some("10+"));
        assert!(metar.raw_text.is_none());
        assert!(metar.remarks.is_none());

        let clouds = metar.clouds.unwrap();
        assert_eq!(clouds.len(), 2);
        assert_eq!(clouds[0].cover.as_ref().and_then(RawField::as_text), Some("BKN"));
        assert_eq!(clouds[0].base.as_ref().and_then(RawField::as_number), Some(4500.0));
    }

    #[test]
    fn null_fields_are_absent() {
        let json = r#"{"icaoId": "EGLL", "wgst": null, "wxString": null, "clouds": null}"#;

        let metar: RawMetar = serde_json::from_str(json).unwrap();

        assert!(metar.wgst.is_none());
        assert!(metar.wx_string.is_none());
        assert!(metar.clouds.is_none());
    }

    #[test]
    fn unexpected_types_do_not_fail_the_record() {
        let json = r#"{
            "icaoId": "EGLL",
            "wdir": "VRB",
            "wspd": "calm",
            "temp": {"value": 12},
            "remarks": true,
            "clouds": [{"cover": "SCT", "base": "unknown"}, 42, {"cover": null}]
        }"#;

        let metar: RawMetar = serde_json::from_str(json).unwrap();

        assert_eq!(metar.wdir, Some(RawField::Text("VRB".into())));
        assert_eq!(metar.wspd, Some(RawField::Text("calm".into())));
        assert!(matches!(metar.temp, Some(RawField::Other(_))));
        assert!(matches!(metar.remarks, Some(RawField::Other(_))));

        // The bare number is not a layer; it stays as an empty one
        let clouds = metar.clouds.unwrap();
        assert_eq!(clouds.len(), 3);
        assert_eq!(clouds[1], RawCloudLayer::default());
        assert!(clouds[2].cover.is_none());
    }

    #[test]
    fn clouds_not_a_list() {
        let json = r#"{"icaoId": "EGLL", "clouds": "CAVOK"}"#;
        let metar: RawMetar = serde_json::from_str(json).unwrap();
        assert!(metar.clouds.is_none());
    }

    #[test]
    fn non_finite_number_is_not_numeric() {
        assert_eq!(RawField::Number(f64::NAN).as_number(), None);
        assert_eq!(RawField::Number(29.92).as_number(), Some(29.92));
        assert_eq!(RawField::Text("29.92".into()).as_number(), None);
    }

    #[test]
    fn deserialize_taf() {
        let json = r#"{
            "icaoId": "KJFK",
            "issueTime": "2024-03-15T11:20:00Z",
            "validTimeFrom": 1710504000,
            "validTimeTo": 1710612000,
            "rawTAF": "TAF KJFK 151120Z 1512/1618 31015G25KT P6SM SCT050",
            "fcsts": [
                {"timeFrom": 1710504000, "timeTo": 1710525600, "wdir": 310, "wspd": 15}
            ]
        }"#;

        let taf: RawTaf = serde_json::from_str(json).unwrap();

        assert_eq!(taf.icao_id.as_ref().and_then(RawField::as_text), Some("KJFK"));
        assert_eq!(taf.issue_time, Some(Value::from("2024-03-15T11:20:00Z")));
        assert_eq!(taf.valid_time_from, Some(Value::from(1710504000)));
        assert_eq!(taf.fcsts.unwrap()[0]["wspd"], 15);
    }
}
