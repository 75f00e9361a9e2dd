//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid 3-character WMATA station code.
///
/// Metrorail station codes are 3 uppercase ASCII alphanumeric characters,
/// a letter identifying the original line segment followed by two digits
/// (e.g. `A01` for Metro Center, `K08` for Vienna). This type guarantees
/// that any `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use wmata_client::domain::StationCode;
///
/// let metro_center = StationCode::parse("A01").unwrap();
/// assert_eq!(metro_center.as_str(), "A01");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("a01").is_err());
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("A1").is_err());
/// assert!(StationCode::parse("A011").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode([u8; 3]);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidStationCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(StationCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII letters and digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("A01").is_ok());
        assert!(StationCode::parse("K08").is_ok());
        assert!(StationCode::parse("C05").is_ok());
        assert!(StationCode::parse("N12").is_ok());
        assert!(StationCode::parse("F03").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("a01").is_err());
        assert!(StationCode::parse("k08").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("A").is_err());
        assert!(StationCode::parse("A0").is_err());
        assert!(StationCode::parse("A011").is_err());
        assert!(StationCode::parse("METRO").is_err());
    }

    #[test]
    fn reject_punctuation() {
        assert!(StationCode::parse("A-1").is_err());
        assert!(StationCode::parse("A 1").is_err());
        assert!(StationCode::parse("Ä01").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let code = StationCode::parse("A01").unwrap();
        assert_eq!(code.as_str(), "A01");
    }

    #[test]
    fn display() {
        let code = StationCode::parse("K08").unwrap();
        assert_eq!(format!("{}", code), "K08");
    }

    #[test]
    fn debug() {
        let code = StationCode::parse("C05").unwrap();
        assert_eq!(format!("{:?}", code), "StationCode(C05)");
    }

    #[test]
    fn equality() {
        let a = StationCode::parse("A01").unwrap();
        let b = StationCode::parse("A01").unwrap();
        let c = StationCode::parse("K08").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationCode::parse("A01").unwrap());
        assert!(set.contains(&StationCode::parse("A01").unwrap()));
        assert!(!set.contains(&StationCode::parse("K08").unwrap()));
    }
}
