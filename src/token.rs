use std::fmt::{self, Display};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    Identifier, String, Number,

    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    #[strum(serialize = "EOF")]
    EndOfFile,
}

/// The decoded value of a string or number token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{}", s),
            Literal::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Half-open byte range of a token within its source.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    literal: Option<Literal>,
    line: usize,
    span: Span,
}

impl Token {
    pub(crate) fn new(
        kind: TokenKind,
        lexeme: &str,
        literal: Option<Literal>,
        line: usize,
        span: Span,
    ) -> Self {
        Self { kind, lexeme: lexeme.to_string(), literal, line, span }
    }

    pub(crate) fn end_of_file(offset: usize, line: usize) -> Self {
        let span = Span { start: offset, end: offset };
        Self::new(TokenKind::EndOfFile, "", None, line, span)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {} Lexeme: {:?} Literal: ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(Literal::String(s)) => write!(f, "{}", s.escape_debug())?,
            Some(literal) => write!(f, "{}", literal)?,
            None => write!(f, "None")?,
        }
        write!(f, " Line: {}", self.line)
    }
}
