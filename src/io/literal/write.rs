use num_traits::Zero;

use crate::integer::{BITS, Digit};
use crate::integer::unsigned::Unsigned;
use crate::io::literal::Radix;

const CHARACTERS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Digits of a magnitude in the given radix, most significant first, without prefix or padding.
pub(crate) fn digits(magnitude: &Unsigned, radix: Radix, uppercase: bool) -> String {
    let values = if radix.get().is_power_of_two() {
        power_of_two_values(magnitude, radix.get().trailing_zeros())
    } else {
        chunked_values(magnitude, radix)
    };

    values.into_iter()
        .rev()
        .map(|value| {
            let character = CHARACTERS[value as usize] as char;
            if uppercase { character.to_ascii_uppercase() } else { character }
        })
        .collect()
}

/// Least significant first, every value holding `bits_per_value` bits of the magnitude.
fn power_of_two_values(magnitude: &Unsigned, bits_per_value: u32) -> Vec<u8> {
    let digits = magnitude.digits();
    let count = ((magnitude.bits() + bits_per_value as u64 - 1) / bits_per_value as u64).max(1);
    let mask = (1 << bits_per_value) - 1;

    (0..count)
        .map(|index| {
            let bit = index * bits_per_value as u64;
            let digit_index = (bit / BITS as u64) as usize;
            let offset = (bit % BITS as u64) as u32;

            let mut value = digits[digit_index] >> offset;
            if offset + bits_per_value > BITS && digit_index + 1 < digits.len() {
                value |= digits[digit_index + 1] << (BITS - offset);
            }

            (value & mask) as u8
        })
        .collect()
}

/// Least significant first, by repeatedly dividing off as many characters as fit in a digit.
fn chunked_values(magnitude: &Unsigned, radix: Radix) -> Vec<u8> {
    let (chunk_divisor, chunk_length) = radix.chunk();
    let radix = radix.get() as Digit;

    let mut remaining = magnitude.clone();
    let mut values = Vec::new();
    loop {
        let mut chunk = remaining.div_rem_small(chunk_divisor);
        let last = remaining.is_zero();
        for _ in 0..chunk_length {
            values.push((chunk % radix) as u8);
            chunk /= radix;
            if last && chunk == 0 {
                break;
            }
        }
        if last {
            break;
        }
    }

    // A zero magnitude still yields a single value
    while values.len() > 1 && values.last() == Some(&0) {
        values.pop();
    }
    values
}
