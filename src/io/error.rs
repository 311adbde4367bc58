//! # Errors
//!
//! Arithmetic can't fail, so the only errors are about text that doesn't describe an integer.
use std::error::Error;
use std::fmt;

/// Reason that a literal was rejected.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// There was no text at all.
    Empty,
    /// A sign or radix prefix was not followed by any digits.
    EmptyDigits,
    /// A character that is not a digit in the radix of the literal.
    InvalidDigit(char),
    /// A `-` or `+` after the first position.
    MisplacedSign,
    /// A `_` that is not surrounded by two digits.
    MisplacedSeparator,
    /// Radices range from 2 to 36.
    UnsupportedRadix(u32),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Empty => f.write_str("empty literal"),
            ParseErrorKind::EmptyDigits => f.write_str("no digits"),
            ParseErrorKind::InvalidDigit(character) => write!(f, "invalid digit {:?}", character),
            ParseErrorKind::MisplacedSign => f.write_str("sign not in leading position"),
            ParseErrorKind::MisplacedSeparator => f.write_str("digit separator not between two digits"),
            ParseErrorKind::UnsupportedRadix(radix) => write!(f, "unsupported radix {}", radix),
        }
    }
}

/// A literal could not be read.
///
/// Holds the rejected text and the byte offset at which the problem was found, and optionally
/// the error this one gives context to.
#[derive(Debug)]
pub struct Parse {
    description: String,
    kind: ParseErrorKind,
    text: String,
    position: usize,
    source: Option<Box<Parse>>,
}

pub type ParseResult<T> = Result<T, Parse>;

impl Parse {
    pub(crate) fn new(kind: ParseErrorKind, text: impl Into<String>, position: usize) -> Self {
        let text = text.into();

        Self {
            description: format!("{} at byte {} of \"{}\"", kind, position, text),
            kind,
            text,
            position,
            source: None,
        }
    }

    /// Give context to this error.
    ///
    /// The kind, text and position of the original error are kept.
    pub fn wrap(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            kind: self.kind,
            text: self.text.clone(),
            position: self.position,
            source: Some(Box::new(self)),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The complete text that was rejected.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset into `text()` where the problem was found.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)?;
        if let Some(source) = &self.source {
            write!(f, ": {}", source)?;
        }

        Ok(())
    }
}

impl Error for Parse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}
