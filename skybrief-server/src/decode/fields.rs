//! Field resolution helpers and classification policies.
//!
//! Every function here is total: it maps any input, including absent or
//! oddly-typed fields, to a value. The decoders never fail on dirty data.
//!
//! The provider does not tag units on altimeter readings, and visibility
//! tiers are a presentation choice. Both are kept as named thresholds so they
//! can be revisited without touching decode control flow.

use crate::domain::{AltimeterUnit, VisibilityTier};
use crate::noaa::RawField;

/// Visibility (statute miles) at or above which conditions are Good.
pub const GOOD_VISIBILITY_SM: f64 = 5.0;

/// Visibility (statute miles) at or above which conditions are Marginal.
pub const MARGINAL_VISIBILITY_SM: f64 = 3.0;

/// Altimeter readings above this are taken as hectopascals (~980-1050);
/// readings at or below it as inches of mercury (~28-32). This is a
/// magnitude heuristic, not a schema field.
pub const HECTOPASCAL_THRESHOLD: f64 = 100.0;

/// Classify visibility. Each tier includes its lower bound.
pub fn visibility_tier(miles: f64) -> VisibilityTier {
    if miles >= GOOD_VISIBILITY_SM {
        VisibilityTier::Good
    } else if miles >= MARGINAL_VISIBILITY_SM {
        VisibilityTier::Marginal
    } else {
        VisibilityTier::Poor
    }
}

/// Infer the unit of an untagged altimeter reading.
pub fn altimeter_unit(reading: f64) -> AltimeterUnit {
    if reading > HECTOPASCAL_THRESHOLD {
        AltimeterUnit::Hectopascals
    } else {
        AltimeterUnit::InchesOfMercury
    }
}

/// Resolve a concept that may arrive under several field names.
///
/// Alternates are tried in order; the first one that is present and that
/// `pick` accepts wins.
pub fn first_match<'a, T>(
    alternates: &[Option<&'a RawField>],
    pick: impl Fn(&'a RawField) -> Option<T>,
) -> Option<T> {
    alternates.iter().copied().flatten().find_map(pick)
}

/// A text field as an owned string.
pub fn text(field: &RawField) -> Option<String> {
    field.as_text().map(str::to_string)
}

/// A numeric field, or 0 when absent or not a number.
pub fn number_or_zero(field: Option<&RawField>) -> f64 {
    field.and_then(RawField::as_number).unwrap_or(0.0)
}

/// A number, or a string that starts with one (`"10+"` is 10), else 0.
pub fn lenient_number_or_zero(field: Option<&RawField>) -> f64 {
    match field {
        Some(RawField::Text(s)) => parse_leading_number(s).unwrap_or(0.0),
        other => number_or_zero(other),
    }
}

/// Parse the longest decimal number at the start of `s`.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"10+"` gives 10 and `"1/2"` gives 1. Returns `None` if `s` does not
/// start with a number.
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = digits_from(end);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}
