use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use num_traits::{One, Zero};
use smallvec::smallvec;

use crate::integer::{Digit, Digits};
use crate::integer::slice::{add_slice, bits, cmp_slice, div_rem_small, is_normalized, is_zero, mul_add_small, mul_slice, normalize, sub_slice};

/// A big unsigned integer type.
///
/// Digits are stored least significant first, without leading zero digits. Zero is `[0]`.
#[derive(Debug, Clone)]
pub struct Unsigned {
    data: Digits,
}

impl Unsigned {
    /// Create a value from little-endian digits, which may contain leading zeros.
    pub fn from_digits<I: IntoIterator<Item = Digit>>(digits: I) -> Self {
        let mut data: Digits = digits.into_iter().collect();
        normalize(&mut data);

        Self { data }
    }

    pub(crate) fn from_normalized(data: Digits) -> Self {
        debug_assert!(is_normalized(&data));

        Self { data }
    }

    /// Little-endian digits, at least one.
    pub fn digits(&self) -> &[Digit] {
        &self.data
    }

    /// Number of significant bits, `0` for zero.
    pub fn bits(&self) -> u64 {
        bits(&self.data)
    }

    /// Computes `self - rhs`, or `None` when `rhs` is larger.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        match cmp_slice(&self.data, &rhs.data) {
            Ordering::Less => None,
            _ => Some(Self::from_normalized(sub_slice(&self.data, &rhs.data))),
        }
    }

    /// Computes `self * factor + addend` in place.
    pub(crate) fn mul_add_small(&mut self, factor: Digit, addend: Digit) {
        mul_add_small(&mut self.data, factor, addend);
    }

    /// Divides in place, returning the remainder.
    pub(crate) fn div_rem_small(&mut self, divisor: Digit) -> Digit {
        div_rem_small(&mut self.data, divisor)
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        Self::from_normalized(add_slice(&self.data, &rhs.data))
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self::from_normalized(mul_slice(&self.data, &rhs.data))
    }
}

impl PartialEq<Unsigned> for Unsigned {
    fn eq(&self, other: &Unsigned) -> bool {
        // Digit-wise equality is only numeric equality for normalized values
        debug_assert!(is_normalized(&self.data));
        debug_assert!(is_normalized(&other.data));

        self.data == other.data
    }
}
impl Eq for Unsigned {}

impl Hash for Unsigned {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl PartialOrd for Unsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Unsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_slice(&self.data, &other.data)
    }
}

forward_binary_operator!(Unsigned, Add, add, add_ref);
forward_binary_operator!(Unsigned, Mul, mul, mul_ref);
fold_iterator!(Unsigned);

impl Zero for Unsigned {
    fn zero() -> Self {
        Self { data: smallvec![0], }
    }

    fn set_zero(&mut self) {
        self.data.clear();
        self.data.push(0);
    }

    fn is_zero(&self) -> bool {
        is_zero(&self.data)
    }
}

impl One for Unsigned {
    fn one() -> Self {
        Self { data: smallvec![1], }
    }

    fn set_one(&mut self) {
        self.data.clear();
        self.data.push(1);
    }

    fn is_one(&self) -> bool {
        self.data[..] == [1]
    }
}
