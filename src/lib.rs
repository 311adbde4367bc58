//! # Exact arbitrary precision integers
//!
//! Signed integers of unbounded size, with exact addition, subtraction, multiplication and
//! comparison. Values are immutable and canonical: two values are structurally equal exactly when
//! they are numerically equal.
//!
//! ```
//! use relp_integer::{parse, format, Radix};
//!
//! let x = parse("0xFEDCBA9876543210").unwrap();
//! let product = &x * &x;
//! assert_eq!(format(&product, Radix::HEXADECIMAL), "fdbac097c8dc5accdeec6cd7a44a4100");
//! ```
#![warn(missing_debug_implementations)]

pub use integer::{Digit, Sign};
pub use integer::convert::OutOfRange;
pub use integer::signed::Signed as IntegerBig;
pub use integer::unsigned::Unsigned as NaturalBig;
pub use io::error::{Parse as ParseError, ParseErrorKind, ParseResult};
pub use io::literal::{format, format_literal, parse, parse_radix, Radix};

pub mod integer;
pub mod io;
