use std::ops::{Mul, Neg};

/// Sign of an integer.
///
/// Unlike the sign of a nonzero value, zero gets a variant of its own. A value has sign `Zero` if
/// and only if its magnitude is zero.
///
/// The derived order is the order of the values carrying the sign.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// `x < 0`
    Negative,
    /// `x = 0`
    Zero,
    /// `x > 0`
    Positive,
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Positive, Sign::Positive) => Sign::Positive,
            (Sign::Positive, Sign::Negative) => Sign::Negative,
            (Sign::Negative, Sign::Positive) => Sign::Negative,
            (Sign::Negative, Sign::Negative) => Sign::Positive,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}
