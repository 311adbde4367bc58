//! # Integer literals
//!
//! Digit strings with an optional sign, an optional `0x`, `0o` or `0b` radix prefix and optional
//! `_` separators between digits, like `-0xFEDC_BA98`. Output never contains separators or
//! leading zeros.
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::integer::Digit;
use crate::integer::signed::Signed;
use crate::integer::unsigned::Unsigned;
use crate::io::error::{Parse as ParseError, ParseErrorKind, ParseResult};

mod read;
mod write;


/// Base of a positional number system, between 2 and 36 inclusive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);

    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub fn get(self) -> u32 {
        self.0
    }

    /// Literal prefix selecting this radix, if there is one.
    pub fn prefix(self) -> Option<&'static str> {
        match self.0 {
            2 => Some("0b"),
            8 => Some("0o"),
            16 => Some("0x"),
            _ => None,
        }
    }

    /// Largest power of the radix that fits in a digit, and its exponent.
    ///
    /// That many characters are converted with a single multi-digit operation.
    fn chunk(self) -> (Digit, usize) {
        let radix = self.0 as Digit;
        let mut power = radix;
        let mut exponent = 1;
        while let Some(next) = power.checked_mul(radix) {
            power = next;
            exponent += 1;
        }

        (power, exponent)
    }
}

impl TryFrom<u32> for Radix {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::new(ParseErrorKind::UnsupportedRadix(value), value.to_string(), 0))
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parse a literal, reading the radix from its prefix.
///
/// # Errors
///
/// When the text is empty, has no digits, has a character that is not a digit in the radix, has a
/// sign after the first position or has a separator that is not between two digits.
pub fn parse(text: &str) -> ParseResult<Signed> {
    read::Raw::split(text, None)?.into_value()
}

/// Parse a literal in a known radix.
///
/// A prefix is still accepted if it agrees with `radix`. Any other prefix is read as digits, so
/// `"0b1"` is `0xB1` in radix 16 and an error in radix 10.
///
/// # Errors
///
/// See `parse`.
pub fn parse_radix(text: &str, radix: Radix) -> ParseResult<Signed> {
    read::Raw::split(text, Some(radix))?.into_value()
}

/// Render the digits of a value in the given radix, with a leading `-` for negative values.
///
/// Zero is `"0"`, and letters are lowercase.
pub fn format(value: &Signed, radix: Radix) -> String {
    let digits = write::digits(value.magnitude(), radix, false);
    if value.is_negative() {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Like `format`, but with the radix prefix between sign and digits where the radix has one.
pub fn format_literal(value: &Signed, radix: Radix) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    let prefix = radix.prefix().unwrap_or("");

    format!("{}{}{}", sign, prefix, write::digits(value.magnitude(), radix, false))
}

impl FromStr for Signed {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}

macro_rules! impl_radix_format {
    ($trait:ident, $radix:expr, $prefix:expr, $uppercase:expr) => {
        impl fmt::$trait for Unsigned {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, $prefix, &write::digits(self, $radix, $uppercase))
            }
        }

        impl fmt::$trait for Signed {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let digits = write::digits(self.magnitude(), $radix, $uppercase);
                f.pad_integral(!self.is_negative(), $prefix, &digits)
            }
        }
    }
}

impl_radix_format!(Display, Radix::DECIMAL, "", false);
impl_radix_format!(LowerHex, Radix::HEXADECIMAL, "0x", false);
impl_radix_format!(UpperHex, Radix::HEXADECIMAL, "0x", true);
impl_radix_format!(Octal, Radix::OCTAL, "0o", false);
impl_radix_format!(Binary, Radix::BINARY, "0b", false);
