//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station ID: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A validated GBFS station identifier.
///
/// Feeds use opaque strings for station IDs (older Citi Bike feeds use
/// short numerics like `"72"`, newer ones use UUIDs). This type only
/// guarantees the ID is non-empty and contains no whitespace, which is
/// enough to make it a trustworthy join key between the two feeds.
///
/// # Examples
///
/// ```
/// use dock_server::stations::StationId;
///
/// let id = StationId::parse("72").unwrap();
/// assert_eq!(id.as_str(), "72");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("72 b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station ID from a string.
    ///
    /// The input must be non-empty and free of whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationId {
                reason: "must not contain whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9._-]{1,40}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Strings containing whitespace are always rejected
        #[test]
        fn whitespace_rejected(
            s in "[a-z0-9]{0,5} [a-z0-9]{0,5}",
        ) {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
