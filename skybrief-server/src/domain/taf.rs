//! Normalized forecast report.

use serde::Serialize;
use serde_json::Value;

/// A TAF with its top-level fields defaulted.
///
/// Forecast periods are passed through exactly as the provider sent them.
/// Times keep the provider's representation (text or epoch seconds).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedTaf {
    #[serde(rename = "rawTAF")]
    pub raw_taf: String,

    pub fcsts: Vec<Value>,

    pub issue_time: Option<Value>,

    pub valid_time_from: Option<Value>,

    pub valid_time_to: Option<Value>,
}

impl DecodedTaf {
    /// The well-formed payload sent when there is no forecast: empty text,
    /// no periods, null times.
    pub fn empty() -> Self {
        Self::default()
    }
}
