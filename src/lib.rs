//! Lexical front end for the Lox scripting language.
//!
//! [`scan`] turns source text into a `Vec` of [`Token`]s ending in a single
//! `EndOfFile` token, or returns the first lexical [`Error`]. [`Scanner`]
//! exposes the same pass as a lazy iterator, and [`runner::Lox`] is the
//! driver used by the `lox` binary.

pub mod error;
pub mod runner;
pub mod scanner;
pub mod token;

pub use crate::error::{Error, Result};
pub use crate::scanner::Scanner;
pub use crate::token::{Literal, Span, Token, TokenKind};

pub fn scan(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan_tokens()
}
