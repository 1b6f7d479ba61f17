//! Current-conditions decoding.
//!
//! Converts a loosely-typed provider record into a [`DecodedMetar`]. Where
//! a concept can arrive under several names, the fallback order is:
//!
//! | Output      | Tried in order                                   |
//! |-------------|--------------------------------------------------|
//! | `raw`       | `rawOb`, `rawText`, empty string                 |
//! | `time`      | `obsTime`, `reportTime`, current time            |
//! | `station`   | `icaoId`, requested identifier                   |
//!
//! Every other field has a single source and a documented default.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::{
    Altimeter, Ceiling, CloudCover, CloudLayer, DecodedMetar, FlightCategory, Icao, Visibility,
    VisibilityUnit, Wind, WindDirection, WindUnit,
};
use crate::noaa::{RawCloudLayer, RawField, RawMetar};

use super::fields::{
    altimeter_unit, first_match, lenient_number_or_zero, number_or_zero, text, visibility_tier,
};

/// Decode one METAR record.
///
/// `requested` is the identifier the caller asked for; it is used only if
/// the record does not name its station. `now` is the fallback observation
/// time. The function is pure: the same inputs always give the same output.
pub fn decode_metar(raw: &RawMetar, requested: &Icao, now: DateTime<Utc>) -> DecodedMetar {
    let layers = raw.clouds.as_deref().unwrap_or(&[]);
    let visibility = lenient_number_or_zero(raw.visib.as_ref());
    let altimeter = number_or_zero(raw.altim.as_ref());

    DecodedMetar {
        raw: report_text(raw),
        station: reported_station(raw, requested),
        time: observation_time(raw, now),
        flight_category: raw
            .flt_cat
            .as_ref()
            .and_then(RawField::as_text)
            .and_then(FlightCategory::parse)
            .unwrap_or_default(),
        wind: Wind {
            direction: wind_direction(raw.wdir.as_ref()),
            speed: number_or_zero(raw.wspd.as_ref()),
            gust: raw.wgst.as_ref().and_then(RawField::as_number),
            // The provider does not tag a unit; knots is assumed everywhere
            unit: WindUnit::Knots,
        },
        visibility: Visibility {
            value: visibility,
            unit: VisibilityUnit::StatuteMiles,
            qualitative: visibility_tier(visibility),
        },
        ceiling: ceiling_from_layers(layers),
        clouds: layers.iter().map(cloud_layer).collect(),
        weather: weather_tokens(raw.wx_string.as_ref()),
        temperature: number_or_zero(raw.temp.as_ref()),
        dewpoint: number_or_zero(raw.dewp.as_ref()),
        altimeter: Altimeter {
            value: altimeter,
            unit: altimeter_unit(altimeter),
        },
        remarks: raw.remarks.as_ref().and_then(text),
    }
}

/// Find the ceiling: the lowest broken, overcast or vertical-visibility
/// layer whose base is known. Among equal bases the first reported wins.
pub fn ceiling_from_layers(layers: &[RawCloudLayer]) -> Option<Ceiling> {
    layers
        .iter()
        .filter_map(|layer| {
            let kind = layer_cover(layer)?.ceiling_cover()?;
            let height = layer.base.as_ref().and_then(RawField::as_number)?;
            Some(Ceiling { height, kind })
        })
        .min_by(|a, b| a.height.total_cmp(&b.height))
}

fn report_text(raw: &RawMetar) -> String {
    first_match(&[raw.raw_ob.as_ref(), raw.raw_text.as_ref()], text).unwrap_or_default()
}

fn reported_station(raw: &RawMetar, requested: &Icao) -> String {
    first_match(&[raw.icao_id.as_ref()], text).unwrap_or_else(|| requested.to_string())
}

fn observation_time(raw: &RawMetar, now: DateTime<Utc>) -> String {
    first_match(&[raw.obs_time.as_ref(), raw.report_time.as_ref()], timestamp)
        .unwrap_or_else(|| iso_timestamp(now))
}

/// Text timestamps pass through; numbers are Unix epoch seconds.
fn timestamp(field: &RawField) -> Option<String> {
    match field {
        RawField::Text(s) => Some(s.clone()),
        number => {
            let secs = number.as_number()?;
            DateTime::from_timestamp(secs.trunc() as i64, 0).map(iso_timestamp)
        }
    }
}

fn iso_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Unknown direction is variable, never 0 (which would mean due north).
fn wind_direction(field: Option<&RawField>) -> WindDirection {
    match field {
        Some(RawField::Text(s)) if s.trim().eq_ignore_ascii_case("VRB") => WindDirection::Variable,
        Some(f) => f
            .as_number()
            .map(WindDirection::Degrees)
            .unwrap_or(WindDirection::Variable),
        None => WindDirection::Variable,
    }
}

fn layer_cover(layer: &RawCloudLayer) -> Option<CloudCover> {
    layer
        .cover
        .as_ref()
        .and_then(RawField::as_text)
        .and_then(CloudCover::parse)
}

fn cloud_layer(layer: &RawCloudLayer) -> CloudLayer {
    CloudLayer {
        cover: layer_cover(layer).unwrap_or(CloudCover::SkyClear),
        height: layer.base.as_ref().and_then(RawField::as_number),
    }
}

fn weather_tokens(field: Option<&RawField>) -> Vec<String> {
    field
        .and_then(RawField::as_text)
        .map(|s| s.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
