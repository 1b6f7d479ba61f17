//! Station identifier type.

use std::fmt;

/// An ICAO station identifier as requested by a caller.
///
/// Normalization trims surrounding whitespace and upper-cases the code.
/// No syntax check is made: an identifier the provider does not know simply
/// yields no report.
///
/// # Examples
///
/// ```
/// use skybrief_server::domain::Icao;
///
/// let kjfk = Icao::normalize("  kjfk ");
/// assert_eq!(kjfk.as_str(), "KJFK");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Icao(String);

impl Icao {
    /// Normalize a caller-supplied identifier.
    pub fn normalize(s: &str) -> Self {
        Icao(s.trim().to_uppercase())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Icao({})", self.0)
    }
}

impl fmt::Display for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Icao> for String {
    fn from(icao: Icao) -> Self {
        icao.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing twice gives the same identifier as normalizing once
        #[test]
        fn normalize_idempotent(s in "[a-zA-Z0-9 \t]{0,12}") {
            let once = Icao::normalize(&s);
            let twice = Icao::normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        /// Surrounding whitespace never reaches the identifier
        #[test]
        fn padding_ignored(code in "[a-zA-Z]{4}", left in "[ \t]{0,3}", right in "[ \t\n]{0,3}") {
            let padded = format!("{left}{code}{right}");
            let icao = Icao::normalize(&padded);
            prop_assert_eq!(icao.as_str(), code.to_uppercase());
        }
    }
}
