use crate::{
    error::{Error, Result},
    token::{Literal, Span, Token, TokenKind},
};
use log::{debug, trace};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::{iter::FusedIterator, str::Chars};

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// What to do with the first character of a token.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Action {
    Emit(TokenKind),
    EmitWithLookahead { matched: TokenKind, unmatched: TokenKind },
    SlashOrComment,
    Skip,
    NewLine,
    StartString,
    StartNumber,
    StartIdentifier,
    Unexpected,
}

fn classify(c: char) -> Action {
    use Action::*;
    match c {
        '(' => Emit(TokenKind::LeftParen),
        ')' => Emit(TokenKind::RightParen),
        '{' => Emit(TokenKind::LeftBrace),
        '}' => Emit(TokenKind::RightBrace),
        ',' => Emit(TokenKind::Comma),
        '.' => Emit(TokenKind::Dot),
        '-' => Emit(TokenKind::Minus),
        '+' => Emit(TokenKind::Plus),
        ';' => Emit(TokenKind::Semicolon),
        '*' => Emit(TokenKind::Star),
        '!' => EmitWithLookahead { matched: TokenKind::BangEqual, unmatched: TokenKind::Bang },
        '=' => EmitWithLookahead { matched: TokenKind::EqualEqual, unmatched: TokenKind::Equal },
        '<' => EmitWithLookahead { matched: TokenKind::LessEqual, unmatched: TokenKind::Less },
        '>' => EmitWithLookahead { matched: TokenKind::GreaterEqual, unmatched: TokenKind::Greater },
        '/' => SlashOrComment,
        ' ' | '\r' | '\t' => Skip,
        '\n' => NewLine,
        '"' => StartString,
        c if c.is_ascii_digit() => StartNumber,
        c if can_start_identifier(&c) => StartIdentifier,
        _ => Unexpected,
    }
}

/// Turns source text into tokens, one at a time.
///
/// The iterator yields every token in source order followed by a single
/// `EndOfFile` token. The first lexical error is yielded in place of a token
/// and ends the scan.
pub struct Scanner<'a> {
    source: &'a str,
    src: PeekMoreIterator<Chars<'a>>,
    start: usize,
    current: usize,
    line: usize,
    finished: bool,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.finished {
            return None;
        }

        loop {
            self.start = self.current;
            let c = match self.advance() {
                Some(c) => c,
                None => {
                    self.finished = true;
                    return Some(Ok(Token::end_of_file(self.current, self.line)));
                },
            };

            match self.scan_token(c) {
                Ok(None) => continue,
                Ok(Some(token)) => {
                    trace!("scanned {}", token);
                    return Some(Ok(token));
                },
                Err(e) => {
                    debug!("scan halted: {}", e);
                    self.finished = true;
                    return Some(Err(e));
                },
            }
        }
    }
}

impl <'a> FusedIterator for Scanner<'a> {}

impl <'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            src: source.chars().peekmore(),
            start: 0,
            current: 0,
            line: 1,
            finished: false,
        }
    }

    pub fn scan_tokens(self) -> Result<Vec<Token>> {
        debug!("scanning {} bytes", self.source.len());
        self.collect()
    }

    fn scan_token(&mut self, c: char) -> Result<Option<Token>> {
        match classify(c) {
            Action::Emit(kind) => Ok(Some(self.make_token(kind, None, self.line))),
            Action::EmitWithLookahead { matched, unmatched } => {
                let kind = if self.does_next_match('=') { matched } else { unmatched };
                Ok(Some(self.make_token(kind, None, self.line)))
            },
            Action::SlashOrComment => {
                if self.does_next_match('/') {
                    self.advance_until(|n| n == &'\n');
                    Ok(None)
                } else {
                    Ok(Some(self.make_token(TokenKind::Slash, None, self.line)))
                }
            },
            Action::Skip => Ok(None),
            Action::NewLine => {
                self.line += 1;
                Ok(None)
            },
            Action::StartString => self.extract_string().map(Some),
            Action::StartNumber => self.extract_number().map(Some),
            Action::StartIdentifier => Ok(Some(self.extract_identifier())),
            Action::Unexpected => Err(Error::UnexpectedCharacter { line: self.line, character: c }),
        }
    }

    fn make_token(&self, kind: TokenKind, literal: Option<Literal>, line: usize) -> Token {
        let span = Span { start: self.start, end: self.current };
        Token::new(kind, span.slice(self.source), literal, line, span)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.src.next()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn does_next_match(&mut self, c: char) -> bool {
        match self.src.peek() {
            Some(next) if c == *next => {
                self.advance();
                true
            },
            _ => false,
        }
    }

    fn extract_string(&mut self) -> Result<Token> {
        let line = self.line;
        let mut newline_count = 0;
        self.advance_until_for_each(|n| n == &'"', |c| if c == '\n' { newline_count += 1 });
        self.line += newline_count;

        if self.advance().is_none() {
            return Err(Error::UnterminatedString { line: self.line });
        }

        // quotes are always one byte wide
        let value = &self.source[self.start + 1..self.current - 1];
        Ok(self.make_token(TokenKind::String, Some(Literal::String(value.to_string())), line))
    }

    fn extract_number(&mut self) -> Result<Token> {
        self.advance_until(|n| !n.is_ascii_digit());

        let has_fraction = self.src.peek() == Some(&'.')
            && self.src.peek_nth(1).map_or(false, char::is_ascii_digit);
        if has_fraction {
            self.advance();
            self.advance_until(|n| !n.is_ascii_digit());
        }

        let lexeme = &self.source[self.start..self.current];
        match lexeme.parse() {
            Ok(number) => Ok(self.make_token(TokenKind::Number, Some(Literal::Number(number)), self.line)),
            Err(_) => Err(Error::InvalidNumber { line: self.line, lexeme: lexeme.to_string() }),
        }
    }

    fn extract_identifier(&mut self) -> Token {
        self.advance_until(|n| !is_part_of_valid_identifier(n));

        let text = &self.source[self.start..self.current];
        let kind = KEYWORDS.get(text).copied().unwrap_or(TokenKind::Identifier);
        self.make_token(kind, None, self.line)
    }

    fn advance_until(&mut self, should_stop: impl Fn(&char) -> bool) {
        self.advance_until_for_each(should_stop, |_| {})
    }

    fn advance_until_for_each(
        &mut self,
        should_stop: impl Fn(&char) -> bool,
        mut f: impl FnMut(char),
    ) {
        while let Some(next) = self.src.peek() {
            if should_stop(next) {
                break;
            }
            if let Some(c) = self.advance() {
                f(c);
            }
        }
    }
}

fn can_start_identifier(c: &char) -> bool {
    c.is_ascii_alphabetic() || c == &'_'
}

fn is_part_of_valid_identifier(c: &char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}
