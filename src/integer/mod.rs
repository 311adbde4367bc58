//! # Arbitrary precision integers
//!
//! Magnitudes are stored as little-endian vectors of machine words ("digits", or limbs), signed
//! values pair such a magnitude with a three-valued `Sign`.
use smallvec::SmallVec;

pub use sign::Sign;

#[macro_use]
mod macros;
pub mod convert;
pub mod sign;
pub mod signed;
pub(crate) mod slice;
pub mod unsigned;


pub type Digit = u64;
/// Wide enough to hold the product of two digits plus two carries.
pub type DoubleDigit = u128;

/// Number of bits in a single digit.
pub const BITS: u32 = Digit::BITS;

/// Magnitudes up to this many digits don't allocate.
const INLINE_DIGITS: usize = 4;

pub(crate) type Digits = SmallVec<[Digit; INLINE_DIGITS]>;
