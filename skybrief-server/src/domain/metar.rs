//! Decoded current-conditions report.
//!
//! These types are the canonical shape returned to API consumers. They are
//! built fresh for every request by the decoder and never mutated afterwards.

use serde::{Serialize, Serializer};

/// A decoded METAR.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedMetar {
    /// Original encoded text, empty if the provider sent none.
    pub raw: String,

    /// Station identifier as reported by the provider.
    pub station: String,

    /// Observation time (ISO 8601).
    pub time: String,

    pub flight_category: FlightCategory,

    pub wind: Wind,

    pub visibility: Visibility,

    /// Lowest broken, overcast or vertical-visibility layer with a known base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<Ceiling>,

    /// Cloud layers in the order reported.
    pub clouds: Vec<CloudLayer>,

    /// Present weather tokens, e.g. `["-RA", "BR"]`.
    pub weather: Vec<String>,

    /// Degrees Celsius.
    pub temperature: f64,

    /// Degrees Celsius.
    pub dewpoint: f64,

    pub altimeter: Altimeter,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Coarse flyability classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightCategory {
    #[default]
    Vfr,
    Mvfr,
    Ifr,
    Lifr,
}

impl FlightCategory {
    /// Parse a provider category code, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VFR" => Some(FlightCategory::Vfr),
            "MVFR" => Some(FlightCategory::Mvfr),
            "IFR" => Some(FlightCategory::Ifr),
            "LIFR" => Some(FlightCategory::Lifr),
            _ => None,
        }
    }
}

/// Surface wind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wind {
    pub direction: WindDirection,
    pub speed: f64,
    /// Absent when no gust was reported, which is not the same as zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gust: Option<f64>,
    pub unit: WindUnit,
}

/// Wind direction: true degrees or variable.
///
/// Serializes as a bare number or the literal `"VRB"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindDirection {
    Degrees(f64),
    Variable,
}

impl Serialize for WindDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WindDirection::Degrees(deg) => serializer.serialize_f64(*deg),
            WindDirection::Variable => serializer.serialize_str("VRB"),
        }
    }
}

/// Wind speed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindUnit {
    #[serde(rename = "KT")]
    Knots,
}

/// Prevailing visibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visibility {
    pub value: f64,
    pub unit: VisibilityUnit,
    pub qualitative: VisibilityTier,
}

/// Visibility distance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisibilityUnit {
    #[serde(rename = "SM")]
    StatuteMiles,
}

/// Plain-language visibility tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisibilityTier {
    Good,
    Marginal,
    Poor,
}

/// Cloud ceiling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ceiling {
    /// Feet above ground.
    pub height: f64,
    #[serde(rename = "type")]
    pub kind: CeilingCover,
}

/// Cover codes that constitute a ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CeilingCover {
    #[serde(rename = "BKN")]
    Broken,
    #[serde(rename = "OVC")]
    Overcast,
    #[serde(rename = "VV")]
    VerticalVisibility,
}

/// A reported cloud layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudLayer {
    pub cover: CloudCover,
    /// Feet above ground, absent when the provider gave no numeric base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Sky cover code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CloudCover {
    #[serde(rename = "FEW")]
    Few,
    #[serde(rename = "SCT")]
    Scattered,
    #[serde(rename = "BKN")]
    Broken,
    #[serde(rename = "OVC")]
    Overcast,
    #[serde(rename = "CLR")]
    Clear,
    #[serde(rename = "SKC")]
    SkyClear,
    #[serde(rename = "VV")]
    VerticalVisibility,
}

impl CloudCover {
    /// Parse a provider cover code. Codes are matched exactly.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FEW" => Some(CloudCover::Few),
            "SCT" => Some(CloudCover::Scattered),
            "BKN" => Some(CloudCover::Broken),
            "OVC" => Some(CloudCover::Overcast),
            "CLR" => Some(CloudCover::Clear),
            "SKC" => Some(CloudCover::SkyClear),
            "VV" => Some(CloudCover::VerticalVisibility),
            _ => None,
        }
    }

    /// The ceiling kind for this cover, if it forms a ceiling.
    pub fn ceiling_cover(self) -> Option<CeilingCover> {
        match self {
            CloudCover::Broken => Some(CeilingCover::Broken),
            CloudCover::Overcast => Some(CeilingCover::Overcast),
            CloudCover::VerticalVisibility => Some(CeilingCover::VerticalVisibility),
            _ => None,
        }
    }
}

/// Altimeter setting with its inferred unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Altimeter {
    pub value: f64,
    pub unit: AltimeterUnit,
}

/// Pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AltimeterUnit {
    #[serde(rename = "inHg")]
    InchesOfMercury,
    #[serde(rename = "hPa")]
    Hectopascals,
}
