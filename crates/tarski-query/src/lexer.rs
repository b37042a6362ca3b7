use logos::Logos;
use std::fmt;

/// Token type for the query language.
///
/// Keyword recognition (`true`, `false`) happens in the parser; the lexer only
/// produces `Token::Ident` for words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Left parenthesis `(`.
    LParen,
    /// Right parenthesis `)`.
    RParen,
    /// Comma separator `,`.
    Comma,
    /// Negation `!`.
    Bang,
    /// Conjunction `&&`.
    AndAnd,
    /// Disjunction `||`.
    OrOr,
    /// Implication `->`.
    Arrow,
    /// Biconditional `<->`.
    DoubleArrow,
    /// Identifier (object key, predicate name, or keyword).
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Bang => write!(f, "!"),
            Token::AndAnd => write!(f, "&&"),
            Token::OrOr => write!(f, "||"),
            Token::Arrow => write!(f, "->"),
            Token::DoubleArrow => write!(f, "<->"),
            Token::Ident(w) => write!(f, "{w}"),
        }
    }
}

/// Internal logos token. Borrows from the source while lexing.
/// Converted to owned `Token` after lexing.
#[derive(Logos, Debug)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token("!")]
    Bang,

    #[token("&&")]
    AndAnd,

    #[token("||")]
    OrOr,

    #[token("->")]
    Arrow,

    #[token("<->")]
    DoubleArrow,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// A lexer error with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte range of the erroneous input in the source.
    pub span: std::ops::Range<usize>,
    /// Human-readable description of the lexer error.
    pub message: String,
}

/// Lex a query into a sequence of `(Token, Span)` pairs.
///
/// Returns the token stream and any lexer errors. Lexing continues past
/// errors so every bad character is reported at once.
pub fn lex(source: &str) -> (Vec<(Token, std::ops::Range<usize>)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(raw) => {
                let token = match raw {
                    RawToken::LParen => Token::LParen,
                    RawToken::RParen => Token::RParen,
                    RawToken::Comma => Token::Comma,
                    RawToken::Bang => Token::Bang,
                    RawToken::AndAnd => Token::AndAnd,
                    RawToken::OrOr => Token::OrOr,
                    RawToken::Arrow => Token::Arrow,
                    RawToken::DoubleArrow => Token::DoubleArrow,
                    RawToken::Ident => Token::Ident(lexer.slice().to_string()),
                };
                tokens.push((token, span));
            }
            Err(()) => {
                let text = &source[span.clone()];
                let message = match text {
                    "&" => "unexpected character: '&' (did you mean '&&'?)".to_string(),
                    "|" => "unexpected character: '|' (did you mean '||'?)".to_string(),
                    _ => format!("unexpected character: {text:?}"),
                };
                errors.push(LexError { span, message });
            }
        }
    }

    (tokens, errors)
}
