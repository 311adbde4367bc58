//! # Digit slice arithmetic
//!
//! Operations on little-endian magnitudes. A slice is normalized when it is nonempty and its most
//! significant digit is nonzero, with the single exception of `[0]`. All inputs are expected to be
//! normalized and all outputs are.
use std::cmp::{max, Ordering};
use std::iter;

use itertools::{EitherOrBoth, Itertools};
use smallvec::smallvec;
use tracing::trace;

use crate::integer::{BITS, Digit, Digits, DoubleDigit};

/// Both operands need at least this many digits before multiplication splits them.
///
/// Below it, the schoolbook product is faster.
pub const KARATSUBA_THRESHOLD: usize = 32;

static ZERO: [Digit; 1] = [0];

pub(crate) fn is_normalized(digits: &[Digit]) -> bool {
    match digits {
        [] => false,
        [_] => true,
        [.., last] => *last != 0,
    }
}

pub(crate) fn is_zero(digits: &[Digit]) -> bool {
    debug_assert!(is_normalized(digits));

    digits == [0]
}

/// Drop the most significant zero digits, keeping at least one digit.
pub(crate) fn normalize(digits: &mut Digits) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

/// View of the minimal prefix representing the same value.
fn trim(digits: &[Digit]) -> &[Digit] {
    match digits.iter().rposition(|&digit| digit != 0) {
        Some(index) => &digits[..=index],
        None => &ZERO[..],
    }
}

pub(crate) fn cmp_slice(a: &[Digit], b: &[Digit]) -> Ordering {
    debug_assert!(is_normalized(a));
    debug_assert!(is_normalized(b));

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

pub(crate) fn add_slice(a: &[Digit], b: &[Digit]) -> Digits {
    debug_assert!(is_normalized(a));
    debug_assert!(is_normalized(b));

    let mut result = Digits::with_capacity(max(a.len(), b.len()) + 1);
    let mut carry = false;
    for pair in a.iter().zip_longest(b.iter()) {
        let (x, y) = match pair {
            EitherOrBoth::Both(x, y) => (*x, *y),
            EitherOrBoth::Left(x) | EitherOrBoth::Right(x) => (*x, 0),
        };
        let (sum, first_carry) = x.overflowing_add(y);
        let (sum, second_carry) = sum.overflowing_add(carry as Digit);
        result.push(sum);
        carry = first_carry || second_carry;
    }
    if carry {
        result.push(1);
    }

    normalize(&mut result);
    result
}

/// Computes `a - b`, requires `a >= b`.
pub(crate) fn sub_slice(a: &[Digit], b: &[Digit]) -> Digits {
    debug_assert_ne!(cmp_slice(a, b), Ordering::Less);

    let mut result = Digits::with_capacity(a.len());
    let mut borrow = false;
    for (&x, &y) in a.iter().zip(b.iter().chain(iter::repeat(&0))) {
        let (difference, first_borrow) = x.overflowing_sub(y);
        let (difference, second_borrow) = difference.overflowing_sub(borrow as Digit);
        result.push(difference);
        borrow = first_borrow || second_borrow;
    }
    debug_assert!(!borrow);

    normalize(&mut result);
    result
}

/// Computes `a * b`.
///
/// The result has at most `a.len() + b.len()` digits.
pub(crate) fn mul_slice(a: &[Digit], b: &[Digit]) -> Digits {
    debug_assert!(is_normalized(a));
    debug_assert!(is_normalized(b));

    if a.len() >= KARATSUBA_THRESHOLD && b.len() >= KARATSUBA_THRESHOLD {
        trace!(left = a.len(), right = b.len(), "splitting multiplication");
        karatsuba(a, b)
    } else {
        schoolbook(a, b)
    }
}

/// Textbook multiplication.
///
/// Every digit pair is multiplied in double width. The low half lands at `i + j`, the high half is
/// carried into `i + j + 1` and settled at the end of each row.
pub(crate) fn schoolbook(a: &[Digit], b: &[Digit]) -> Digits {
    let mut result: Digits = smallvec![0; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }

        let mut carry: DoubleDigit = 0;
        for (j, &y) in b.iter().enumerate() {
            // (2^64 - 1)^2 + 2 (2^64 - 1) = 2^128 - 1, so this never overflows
            let total = result[i + j] as DoubleDigit + x as DoubleDigit * y as DoubleDigit + carry;
            result[i + j] = total as Digit;
            carry = total >> BITS;
        }

        let mut index = i + b.len();
        while carry != 0 {
            let total = result[index] as DoubleDigit + carry;
            result[index] = total as Digit;
            carry = total >> BITS;
            index += 1;
        }
    }

    normalize(&mut result);
    result
}

/// Karatsuba multiplication.
///
/// With `x = x_0 + x_1 B^h`, the product is `z_0 + z_1 B^h + z_2 B^(2h)` where `z_0 = a_0 b_0`,
/// `z_2 = a_1 b_1` and `z_1 = (a_0 + a_1)(b_0 + b_1) - z_0 - z_2`. Falls back to the schoolbook
/// method once either operand is short.
pub(crate) fn karatsuba(a: &[Digit], b: &[Digit]) -> Digits {
    if a.len() < KARATSUBA_THRESHOLD || b.len() < KARATSUBA_THRESHOLD {
        return schoolbook(a, b);
    }

    let half = (max(a.len(), b.len()) + 1) / 2;
    let (a_low, a_high) = split(a, half);
    let (b_low, b_high) = split(b, half);

    let low = karatsuba(a_low, b_low);
    let high = karatsuba(a_high, b_high);
    let middle = {
        let a_sum = add_slice(a_low, a_high);
        let b_sum = add_slice(b_low, b_high);
        let cross = karatsuba(&a_sum, &b_sum);
        sub_slice(&sub_slice(&cross, &low), &high)
    };

    let mut result: Digits = smallvec![0; a.len() + b.len() + 1];
    add_shifted(&mut result, &low, 0);
    add_shifted(&mut result, &middle, half);
    add_shifted(&mut result, &high, 2 * half);

    normalize(&mut result);
    result
}

/// Split into a low part of at most `at` digits and the remaining high part, both normalized.
fn split(digits: &[Digit], at: usize) -> (&[Digit], &[Digit]) {
    if digits.len() <= at {
        (digits, &ZERO[..])
    } else {
        let (low, high) = digits.split_at(at);
        (trim(low), high)
    }
}

/// Add `source * B^offset` into `target`, which must be large enough to hold the sum.
fn add_shifted(target: &mut [Digit], source: &[Digit], offset: usize) {
    if source == [0] {
        return;
    }
    debug_assert!(offset + source.len() <= target.len());

    let target = &mut target[offset..];
    let mut carry = false;
    for (t, &s) in target.iter_mut().zip(source) {
        let (sum, first_carry) = t.overflowing_add(s);
        let (sum, second_carry) = sum.overflowing_add(carry as Digit);
        *t = sum;
        carry = first_carry || second_carry;
    }

    let mut index = source.len();
    while carry {
        let (sum, overflow) = target[index].overflowing_add(1);
        target[index] = sum;
        carry = overflow;
        index += 1;
    }
}

/// Computes `digits * factor + addend` in place.
pub(crate) fn mul_add_small(digits: &mut Digits, factor: Digit, addend: Digit) {
    debug_assert!(is_normalized(digits));

    let mut carry = addend as DoubleDigit;
    for digit in digits.iter_mut() {
        let total = *digit as DoubleDigit * factor as DoubleDigit + carry;
        *digit = total as Digit;
        carry = total >> BITS;
    }
    if carry != 0 {
        digits.push(carry as Digit);
    }

    normalize(digits);
}

/// Divides in place, returning the remainder.
pub(crate) fn div_rem_small(digits: &mut Digits, divisor: Digit) -> Digit {
    debug_assert!(is_normalized(digits));
    debug_assert_ne!(divisor, 0);

    let mut remainder: DoubleDigit = 0;
    for digit in digits.iter_mut().rev() {
        let total = (remainder << BITS) | *digit as DoubleDigit;
        *digit = (total / divisor as DoubleDigit) as Digit;
        remainder = total % divisor as DoubleDigit;
    }

    normalize(digits);
    remainder as Digit
}

/// Number of significant bits, `0` for zero.
pub(crate) fn bits(digits: &[Digit]) -> u64 {
    debug_assert!(is_normalized(digits));

    let last = digits[digits.len() - 1];
    (digits.len() as u64 - 1) * BITS as u64 + (BITS - last.leading_zeros()) as u64
}
