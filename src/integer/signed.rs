use std::cmp::Ordering;
use std::ops::Neg;

use num_traits::{One, Zero};

use crate::integer::Sign;
use crate::integer::slice::{add_slice, cmp_slice, sub_slice};
use crate::integer::unsigned::Unsigned;

/// A big signed integer type.
///
/// Every integer has exactly one representation, so the derived equality and hash are numeric.
/// Values are never modified by arithmetic: operators on references build a new value.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Signed {
    sign: Sign,
    magnitude: Unsigned,
}

impl Signed {
    pub fn signum(&self) -> Sign {
        self.sign
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Absolute value as an unsigned integer.
    pub fn magnitude(&self) -> &Unsigned {
        &self.magnitude
    }

    pub fn into_magnitude(self) -> Unsigned {
        self.magnitude
    }

    pub fn abs(&self) -> Self {
        Self {
            sign: self.sign * self.sign,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Computes `self + (sign * magnitude)`.
    ///
    /// Shared by addition and subtraction, the latter passes the negated sign of its right-hand
    /// side instead of negating a copy of it.
    fn add_signed(&self, sign: Sign, magnitude: &Unsigned) -> Self {
        match (self.sign, sign) {
            (_, Sign::Zero) => self.clone(),
            (Sign::Zero, _) => Self { sign, magnitude: magnitude.clone(), },
            (left, right) if left == right => Self {
                sign,
                magnitude: Unsigned::from_normalized(add_slice(self.magnitude.digits(), magnitude.digits())),
            },
            _ => match cmp_slice(self.magnitude.digits(), magnitude.digits()) {
                // Opposite values cancel out, whatever the order of the operands
                Ordering::Equal => Self::zero(),
                Ordering::Greater => Self {
                    sign: self.sign,
                    magnitude: Unsigned::from_normalized(sub_slice(self.magnitude.digits(), magnitude.digits())),
                },
                Ordering::Less => Self {
                    sign,
                    magnitude: Unsigned::from_normalized(sub_slice(magnitude.digits(), self.magnitude.digits())),
                },
            },
        }
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        self.add_signed(rhs.sign, &rhs.magnitude)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        self.add_signed(-rhs.sign, &rhs.magnitude)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        match self.sign * rhs.sign {
            Sign::Zero => Self::zero(),
            sign => Self {
                sign,
                magnitude: &self.magnitude * &rhs.magnitude,
            },
        }
    }
}

impl From<Unsigned> for Signed {
    fn from(magnitude: Unsigned) -> Self {
        let sign = if magnitude.is_zero() { Sign::Zero } else { Sign::Positive };

        Self { sign, magnitude }
    }
}

impl PartialOrd for Signed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Signed {
    fn cmp(&self, other: &Self) -> Ordering {
        match Ord::cmp(&self.sign, &other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Zero => Ordering::Equal,
                Sign::Positive => Ord::cmp(&self.magnitude, &other.magnitude),
                Sign::Negative => Ord::cmp(&other.magnitude, &self.magnitude),
            },
            other => other,
        }
    }
}

forward_binary_operator!(Signed, Add, add, add_ref);
forward_binary_operator!(Signed, Sub, sub, sub_ref);
forward_binary_operator!(Signed, Mul, mul, mul_ref);
fold_iterator!(Signed);

impl Neg for Signed {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            sign: -self.sign,
            magnitude: self.magnitude,
        }
    }
}

impl Neg for &Signed {
    type Output = Signed;

    fn neg(self) -> Self::Output {
        Signed {
            sign: -self.sign,
            magnitude: self.magnitude.clone(),
        }
    }
}

impl Zero for Signed {
    fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            magnitude: Unsigned::zero(),
        }
    }

    fn set_zero(&mut self) {
        self.sign = Sign::Zero;
        self.magnitude.set_zero();
    }

    fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }
}

impl One for Signed {
    fn one() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Unsigned::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude.is_one()
    }
}
