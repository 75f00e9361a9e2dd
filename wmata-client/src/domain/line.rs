//! Rail line code type.

use std::fmt;

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// A valid 2-letter Metrorail line code.
///
/// Line codes identify the six Metrorail lines ("RD" for Red, "OR" for
/// Orange, "SV" for Silver, "BL" for Blue, "YL" for Yellow, "GR" for
/// Green). They are always 2 uppercase ASCII letters.
///
/// # Examples
///
/// ```
/// use wmata_client::domain::LineCode;
///
/// let red = LineCode::parse("RD").unwrap();
/// assert_eq!(red.as_str(), "RD");
///
/// // Lowercase is rejected
/// assert!(LineCode::parse("rd").is_err());
///
/// // Wrong length is rejected
/// assert!(LineCode::parse("R").is_err());
/// assert!(LineCode::parse("RED").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCode([u8; 2]);

impl LineCode {
    /// Parse a line code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidLineCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidLineCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(LineCode([bytes[0], bytes[1]]))
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.as_str())
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_lines() {
        for code in ["RD", "OR", "SV", "BL", "YL", "GR"] {
            assert!(LineCode::parse(code).is_ok(), "{code} should parse");
        }
    }

    #[test]
    fn reject_lowercase() {
        assert!(LineCode::parse("rd").is_err());
        assert!(LineCode::parse("Rd").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(LineCode::parse("").is_err());
        assert!(LineCode::parse("R").is_err());
        assert!(LineCode::parse("RED").is_err());
    }

    #[test]
    fn reject_digits() {
        assert!(LineCode::parse("R1").is_err());
        assert!(LineCode::parse("12").is_err());
    }

    #[test]
    fn display_and_debug() {
        let line = LineCode::parse("OR").unwrap();
        assert_eq!(format!("{}", line), "OR");
        assert_eq!(format!("{:?}", line), "LineCode(OR)");
    }
}
