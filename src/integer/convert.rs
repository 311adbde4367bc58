//! # Conversions between primitive and big integers
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use crate::integer::{BITS, Digit, Sign};
use crate::integer::signed::Signed;
use crate::integer::unsigned::Unsigned;

/// The big integer does not fit in the primitive type it is converted into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct OutOfRange;

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("integer out of range for the target type")
    }
}

impl Error for OutOfRange {}

macro_rules! from_unsigned_primitive {
    ($t:ident) => {
        impl From<$t> for Unsigned {
            fn from(value: $t) -> Self {
                Self::from_digits(std::iter::once(value as Digit))
            }
        }

        impl From<$t> for Signed {
            fn from(value: $t) -> Self {
                Self::from(Unsigned::from(value))
            }
        }
    }
}

from_unsigned_primitive!(u8);
from_unsigned_primitive!(u16);
from_unsigned_primitive!(u32);
from_unsigned_primitive!(u64);
from_unsigned_primitive!(usize);

impl From<u128> for Unsigned {
    fn from(value: u128) -> Self {
        Self::from_digits(vec![value as Digit, (value >> BITS) as Digit])
    }
}

impl From<u128> for Signed {
    fn from(value: u128) -> Self {
        Self::from(Unsigned::from(value))
    }
}

macro_rules! from_signed_primitive {
    ($t:ident) => {
        impl From<$t> for Signed {
            fn from(value: $t) -> Self {
                let magnitude = Self::from(value.unsigned_abs());
                if value < 0 {
                    -magnitude
                } else {
                    magnitude
                }
            }
        }
    }
}

from_signed_primitive!(i8);
from_signed_primitive!(i16);
from_signed_primitive!(i32);
from_signed_primitive!(i64);
from_signed_primitive!(i128);
from_signed_primitive!(isize);

impl TryFrom<&Unsigned> for u64 {
    type Error = OutOfRange;

    fn try_from(value: &Unsigned) -> Result<Self, Self::Error> {
        match value.digits() {
            [digit] => Ok(*digit),
            _ => Err(OutOfRange),
        }
    }
}

impl TryFrom<&Unsigned> for u128 {
    type Error = OutOfRange;

    fn try_from(value: &Unsigned) -> Result<Self, Self::Error> {
        match value.digits() {
            [low] => Ok(*low as u128),
            [low, high] => Ok((*high as u128) << BITS | *low as u128),
            _ => Err(OutOfRange),
        }
    }
}

macro_rules! try_into_primitive {
    ($signed:ident, $unsigned:ident) => {
        impl TryFrom<&Signed> for $unsigned {
            type Error = OutOfRange;

            fn try_from(value: &Signed) -> Result<Self, Self::Error> {
                match value.signum() {
                    Sign::Negative => Err(OutOfRange),
                    Sign::Zero | Sign::Positive => $unsigned::try_from(value.magnitude()),
                }
            }
        }

        impl TryFrom<&Signed> for $signed {
            type Error = OutOfRange;

            fn try_from(value: &Signed) -> Result<Self, Self::Error> {
                let magnitude = $unsigned::try_from(value.magnitude())?;
                match value.signum() {
                    Sign::Negative if magnitude <= $signed::MIN.unsigned_abs() => {
                        Ok((magnitude as $signed).wrapping_neg())
                    },
                    Sign::Zero | Sign::Positive if magnitude <= $signed::MAX as $unsigned => {
                        Ok(magnitude as $signed)
                    },
                    _ => Err(OutOfRange),
                }
            }
        }
    }
}

try_into_primitive!(i64, u64);
try_into_primitive!(i128, u128);
