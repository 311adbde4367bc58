use criterion::{black_box, Criterion, criterion_group};

use relp_integer::{IntegerBig, NaturalBig};

/// A value with `limbs` digits, all of them set to a fixed irregular pattern.
fn filled(limbs: usize) -> IntegerBig {
    IntegerBig::from(NaturalBig::from_digits(
        (0..limbs as u64).map(|i| 0x9E37_79B9_7F4A_7C15_u64.wrapping_mul(i + 1)),
    ))
}

pub fn multiply_single_digit(c: &mut Criterion) {
    let (x, y) = (filled(1), -filled(1));
    c.bench_function("multiply two single digit values", |b| b.iter(|| {
        black_box(&x) * black_box(&y)
    }));
}

pub fn multiply_schoolbook(c: &mut Criterion) {
    let (x, y) = (filled(16), filled(16));
    c.bench_function("multiply two 16 digit values", |b| b.iter(|| {
        black_box(&x) * black_box(&y)
    }));
}

pub fn multiply_karatsuba(c: &mut Criterion) {
    let (x, y) = (filled(256), filled(256));
    c.bench_function("multiply two 256 digit values", |b| b.iter(|| {
        black_box(&x) * black_box(&y)
    }));
}

pub fn multiply_unbalanced(c: &mut Criterion) {
    let (x, y) = (filled(512), filled(3));
    c.bench_function("multiply a 512 digit value by a 3 digit value", |b| b.iter(|| {
        black_box(&x) * black_box(&y)
    }));
}

pub fn add_with_cancellation(c: &mut Criterion) {
    let (x, y) = (filled(256), -filled(255));
    c.bench_function("add 256 digit values of opposite sign", |b| b.iter(|| {
        black_box(&x) + black_box(&y)
    }));
}

criterion_group!(multiplication,
    multiply_single_digit,
    multiply_schoolbook,
    multiply_karatsuba,
    multiply_unbalanced,
    add_with_cancellation,
);
