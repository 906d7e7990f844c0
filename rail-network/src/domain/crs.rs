//! Station code types.

use std::fmt;

/// The way in which a candidate CRS code is malformed.
///
/// Checks run in declaration order, so a code with several problems
/// always reports the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsDefect {
    /// Not exactly 3 characters long.
    WrongLength,
    /// Contains a lowercase character, or no cased character at all.
    NotUppercase,
    /// Contains something other than the letters A-Z.
    NonLetters,
}

impl fmt::Display for CrsDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CrsDefect::WrongLength => "wrong length",
            CrsDefect::NotUppercase => "not uppercase",
            CrsDefect::NonLetters => "contains non-letters",
        })
    }
}

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code '{code}': {defect}")]
pub struct InvalidCrs {
    code: String,
    defect: CrsDefect,
}

impl InvalidCrs {
    /// The rejected input.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Which check the input failed.
    pub fn defect(&self) -> CrsDefect {
        self.defect
    }
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// CRS codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Crs` value is valid by construction.
///
/// # Examples
///
/// ```
/// use rail_network::domain::{Crs, CrsDefect};
///
/// let kgx = Crs::parse("KGX").unwrap();
/// assert_eq!(kgx.as_str(), "KGX");
///
/// assert_eq!(Crs::parse("KG").unwrap_err().defect(), CrsDefect::WrongLength);
/// assert_eq!(Crs::parse("kgx").unwrap_err().defect(), CrsDefect::NotUppercase);
/// assert_eq!(Crs::parse("K1X").unwrap_err().defect(), CrsDefect::NonLetters);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code from a string.
    ///
    /// Checks length, then case, then that every character is a letter.
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let defect = if s.chars().count() != 3 {
            Some(CrsDefect::WrongLength)
        } else if !is_uppercase(s) {
            Some(CrsDefect::NotUppercase)
        } else if !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            Some(CrsDefect::NonLetters)
        } else {
            None
        };

        if let Some(defect) = defect {
            return Err(InvalidCrs {
                code: s.to_string(),
                defect,
            });
        }

        let bytes = s.as_bytes();
        Ok(Crs([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse user-typed input, tolerating surrounding whitespace and
    /// lowercase letters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCrs> {
        Self::parse(&s.trim().to_uppercase())
    }

    /// Returns the CRS code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// At least one cased character and no lowercase ones.
fn is_uppercase(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
