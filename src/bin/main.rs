//! # Command line calculator
//!
//! Evaluates a single operation on two integer literals, e.g.
//! `relp-integer 0xFEDCBA9876543210 '*' -0x2 --radix 16 --prefix`.
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::process;
use std::str::FromStr;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use relp_integer::{format, format_literal, parse, IntegerBig, ParseError, Radix};

#[derive(Parser, Debug)]
#[clap(name = "relp-integer", version, about = "Exact arithmetic on integer literals")]
struct Arguments {
    /// Left operand, like `-12`, `0xFF` or `1_000`
    #[clap(allow_hyphen_values = true)]
    left: String,
    /// One of `+`, `-`, `*` or `cmp`
    #[clap(allow_hyphen_values = true)]
    operator: Operator,
    /// Right operand
    #[clap(allow_hyphen_values = true)]
    right: String,
    /// Radix of the printed result, from 2 to 36
    #[clap(long, default_value = "10")]
    radix: u32,
    /// Print the `0x`, `0o` or `0b` prefix where the radix has one
    #[clap(long)]
    prefix: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Compare,
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" | "x" => Ok(Operator::Multiply),
            "cmp" => Ok(Operator::Compare),
            other => Err(format!("Unknown operator \"{}\", expected one of +, -, * or cmp", other)),
        }
    }
}

/// Compute the output line.
///
/// # Errors
///
/// When either operand is not a valid literal, or when the radix is not supported.
fn evaluate(arguments: &Arguments) -> Result<String, ParseError> {
    let radix = Radix::try_from(arguments.radix)
        .map_err(|error| error.wrap("Could not use the requested output radix"))?;
    let left = parse(&arguments.left)
        .map_err(|error| error.wrap("Could not read the left operand"))?;
    let right = parse(&arguments.right)
        .map_err(|error| error.wrap("Could not read the right operand"))?;
    debug!(operator = ?arguments.operator, %left, %right, "evaluating");

    let result: IntegerBig = match arguments.operator {
        Operator::Add => &left + &right,
        Operator::Subtract => &left - &right,
        Operator::Multiply => &left * &right,
        Operator::Compare => {
            return Ok(match left.cmp(&right) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            }.to_string());
        },
    };

    Ok(if arguments.prefix {
        format_literal(&result, radix)
    } else {
        format(&result, radix)
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let arguments = Arguments::parse();

    match evaluate(&arguments) {
        Ok(output) => println!("{}", output),
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        },
    }
}
