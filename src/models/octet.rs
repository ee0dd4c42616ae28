//! Octet parsing, formatting and range validation.
//!
//! An octet travels as text at the edges (`"192"` or `"11000000"`) and as a
//! plain integer everywhere else.

use std::fmt;
use std::str::FromStr;

/// Largest value an octet can hold.
pub const MAX_OCTET: i64 = 255;

/// Width of a zero padded binary octet.
pub const BINARY_OCTET_WIDTH: usize = 8;

/// Numeral base used for octet text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// Base 10, e.g. `"192"`.
    #[default]
    Decimal,
    /// Base 2, zero padded to 8 digits, e.g. `"11000000"`.
    Binary,
}

impl Notation {
    /// Radix for [`i64::from_str_radix`].
    pub fn radix(self) -> u32 {
        match self {
            Notation::Decimal => 10,
            Notation::Binary => 2,
        }
    }

    /// The notation on the other side of a conversion.
    pub fn other(self) -> Notation {
        match self {
            Notation::Decimal => Notation::Binary,
            Notation::Binary => Notation::Decimal,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notation::Decimal => write!(f, "decimal"),
            Notation::Binary => write!(f, "binary"),
        }
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" | "dec" | "10" => Ok(Notation::Decimal),
            "binary" | "bin" | "2" => Ok(Notation::Binary),
            other => Err(format!("Unknown notation: {other}")),
        }
    }
}

/// Parse `text` as a numeral in the given notation.
///
/// Accepts an optional sign followed by digits of the base. Whitespace,
/// underscores and radix prefixes are rejected. A numeral too large for an
/// `i64` is also a parse failure. The result is not range checked, see
/// [`is_valid_octet`].
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::{parse_octet, Notation};
/// assert_eq!(parse_octet("300", Notation::Decimal), Some(300));
/// assert_eq!(parse_octet("101", Notation::Binary), Some(5));
/// assert_eq!(parse_octet("12a", Notation::Decimal), None);
/// ```
pub fn parse_octet(text: &str, notation: Notation) -> Option<i64> {
    match i64::from_str_radix(text, notation.radix()) {
        Ok(value) => Some(value),
        Err(e) => {
            log::trace!("parse_octet({text:?}, {notation}) rejected: {e}");
            None
        }
    }
}

/// Format an octet as decimal, or as 8 binary digits.
pub fn serialize_octet(value: u8, notation: Notation) -> String {
    match notation {
        Notation::Decimal => value.to_string(),
        Notation::Binary => format!("{value:0width$b}", width = BINARY_OCTET_WIDTH),
    }
}

/// Like [`serialize_octet`] for an unchecked integer; `None` outside 0..=255.
pub fn try_serialize_octet(value: i64, notation: Notation) -> Option<String> {
    u8::try_from(value)
        .ok()
        .map(|octet| serialize_octet(octet, notation))
}

/// True iff `0 <= value <= 255`.
pub fn is_valid_octet(value: i64) -> bool {
    (0..=MAX_OCTET).contains(&value)
}

/// Parse then range check.
pub fn is_valid_octet_text(text: &str, notation: Notation) -> bool {
    parse_octet(text, notation).is_some_and(is_valid_octet)
}

/// Parse a valid octet text straight into a `u8`.
pub fn parse_valid_octet(text: &str, notation: Notation) -> Option<u8> {
    parse_octet(text, notation).and_then(|v| u8::try_from(v).ok())
}

/// Re-express an octet written in `from` notation in the other notation.
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::{convert_octet_text, Notation};
/// assert_eq!(convert_octet_text("10", Notation::Decimal).as_deref(), Some("00001010"));
/// assert_eq!(convert_octet_text("1010", Notation::Binary).as_deref(), Some("10"));
/// ```
pub fn convert_octet_text(text: &str, from: Notation) -> Option<String> {
    parse_valid_octet(text, from).map(|octet| serialize_octet(octet, from.other()))
}
