use num_traits::Zero;
use tracing::debug;

use crate::integer::Digit;
use crate::integer::signed::Signed;
use crate::integer::unsigned::Unsigned;
use crate::io::error::{Parse as ParseError, ParseErrorKind, ParseResult};
use crate::io::literal::Radix;

const SEPARATOR: char = '_';

/// A literal split into its parts, with the digits not yet validated.
pub(crate) struct Raw<'a> {
    text: &'a str,
    negative: bool,
    radix: Radix,
    /// Byte offset of the first digit in `text`.
    start: usize,
}

impl<'a> Raw<'a> {
    /// Strip the sign and the prefix.
    ///
    /// Without an explicit radix, the prefix decides and the default is decimal. With one, only a
    /// prefix for that same radix is stripped.
    pub(crate) fn split(text: &'a str, radix: Option<Radix>) -> ParseResult<Self> {
        if text.is_empty() {
            return Err(rejected(ParseErrorKind::Empty, text, 0));
        }

        let (negative, start) = match text.as_bytes()[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };

        let (radix, start) = match (prefix_radix(&text[start..]), radix) {
            (Some(prefixed), None) => (prefixed, start + 2),
            (Some(prefixed), Some(radix)) if prefixed == radix => (radix, start + 2),
            (_, Some(radix)) => (radix, start),
            (None, None) => (Radix::DECIMAL, start),
        };

        Ok(Self { text, negative, radix, start })
    }

    /// Validate the digits and accumulate them into a value.
    pub(crate) fn into_value(self) -> ParseResult<Signed> {
        let Raw { text, negative, radix, start } = self;

        let digits = &text[start..];
        if digits.is_empty() {
            return Err(rejected(ParseErrorKind::EmptyDigits, text, start));
        }

        let (chunk_factor, chunk_length) = radix.chunk();
        let mut magnitude = Unsigned::zero();
        let mut chunk: Digit = 0;
        let mut chunk_count = 0;

        let mut previous_is_digit = false;
        let mut characters = digits.char_indices().peekable();
        while let Some((index, character)) = characters.next() {
            let position = start + index;
            if character == SEPARATOR {
                let next_is_digit = characters.peek()
                    .map_or(false, |&(_, next)| next.is_digit(radix.get()));
                if !previous_is_digit || !next_is_digit {
                    return Err(rejected(ParseErrorKind::MisplacedSeparator, text, position));
                }
                previous_is_digit = false;
                continue;
            }

            let value = match character.to_digit(radix.get()) {
                Some(value) => value,
                None if character == '-' || character == '+' => {
                    return Err(rejected(ParseErrorKind::MisplacedSign, text, position));
                },
                None => return Err(rejected(ParseErrorKind::InvalidDigit(character), text, position)),
            };
            previous_is_digit = true;

            chunk = chunk * radix.get() as Digit + value as Digit;
            chunk_count += 1;
            if chunk_count == chunk_length {
                magnitude.mul_add_small(chunk_factor, chunk);
                chunk = 0;
                chunk_count = 0;
            }
        }
        if chunk_count > 0 {
            magnitude.mul_add_small((radix.get() as Digit).pow(chunk_count as u32), chunk);
        }

        let value = Signed::from(magnitude);
        Ok(if negative { -value } else { value })
    }
}

fn prefix_radix(text: &str) -> Option<Radix> {
    match text.as_bytes() {
        [b'0', b'x', ..] | [b'0', b'X', ..] => Some(Radix::HEXADECIMAL),
        [b'0', b'o', ..] | [b'0', b'O', ..] => Some(Radix::OCTAL),
        [b'0', b'b', ..] | [b'0', b'B', ..] => Some(Radix::BINARY),
        _ => None,
    }
}

fn rejected(kind: ParseErrorKind, text: &str, position: usize) -> ParseError {
    debug!(%kind, text, position, "rejected integer literal");

    ParseError::new(kind, text, position)
}
