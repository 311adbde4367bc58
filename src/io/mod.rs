//! # Reading and writing integers
//!
//! Text is the only external representation: literals are parsed into big integers and rendered
//! back in any radix. Nothing here is needed for arithmetic.
pub mod error;
pub mod literal;
