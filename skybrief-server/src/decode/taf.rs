//! Forecast normalization.
//!
//! Much shallower than METAR decoding: only the top-level fields are
//! defaulted. Forecast periods are handed through untouched.

use crate::domain::DecodedTaf;
use crate::noaa::{RawField, RawTaf};

/// Normalize one TAF record.
pub fn normalize_taf(raw: &RawTaf) -> DecodedTaf {
    DecodedTaf {
        raw_taf: raw
            .raw_taf
            .as_ref()
            .and_then(RawField::as_text)
            .map(str::to_string)
            .unwrap_or_default(),
        fcsts: raw.fcsts.clone().unwrap_or_default(),
        issue_time: raw.issue_time.clone(),
        valid_time_from: raw.valid_time_from.clone(),
        valid_time_to: raw.valid_time_to.clone(),
    }
}
