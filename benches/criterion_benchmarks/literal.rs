use criterion::{black_box, Criterion, criterion_group};

use relp_integer::{format, parse, Radix};

fn long_decimal() -> String {
    "1234567890".repeat(100)
}

pub fn parse_decimal(c: &mut Criterion) {
    let text = long_decimal();
    c.bench_function("parse a 1000 digit decimal literal", |b| b.iter(|| {
        parse(black_box(&text))
    }));
}

pub fn parse_hexadecimal(c: &mut Criterion) {
    let text = format!("-0x{}", "FEDCBA9876543210".repeat(64));
    c.bench_function("parse a 1024 digit hexadecimal literal", |b| b.iter(|| {
        parse(black_box(&text))
    }));
}

pub fn format_decimal(c: &mut Criterion) {
    let value = parse(&long_decimal()).unwrap();
    c.bench_function("format a 1000 digit value in decimal", |b| b.iter(|| {
        format(black_box(&value), Radix::DECIMAL)
    }));
}

pub fn format_hexadecimal(c: &mut Criterion) {
    let value = parse(&long_decimal()).unwrap();
    c.bench_function("format a 1000 digit value in hexadecimal", |b| b.iter(|| {
        format(black_box(&value), Radix::HEXADECIMAL)
    }));
}

criterion_group!(literal,
    parse_decimal,
    parse_hexadecimal,
    format_decimal,
    format_hexadecimal,
);
