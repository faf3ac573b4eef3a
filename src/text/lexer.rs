//! Splits the exercise input files into tokens.
//!
//! The inputs are whitespace-separated integers and names, read positionally.
//! Line breaks are kept as tokens so that documents keep their line structure.

use logos::{Lexer, Logos};

use super::document::{Span, Spanned};

#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"([^\S\n]+|#[^\n]*)")]
pub enum Token<'src> {
    #[token("\n")]
    Newline,

    #[regex(r"-?[0-9]+", parse_num, priority = 3)]
    Num(i64),

    // A name, such as a station name. Any run that is not a whole integer,
    // so `7Eleven` and `x-1` are names.
    #[regex(r"[^\s#]+", priority = 2)]
    Word(&'src str),

    // An integer that does not fit in `i64`.
    //
    // The parser reports these, so the lexer itself never fails.
    Invalid(&'src str),
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Newline => write!(f, "end of line"),
            Token::Num(n) => write!(f, "{}", n),
            Token::Word(w) => write!(f, "`{}`", w),
            Token::Invalid(s) => write!(f, "invalid token `{}`", s),
        }
    }
}

/// Splits the input text into a sequence of tokens.
pub fn tokenize(src: &str) -> Vec<Spanned<Token<'_>>> {
    Token::lexer(src)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Spanned::new(token, Span::from(span)),
            // Every other character is skipped or starts a word, so only
            // an overflowing `Num` fails.
            Err(_) => Spanned::new(Token::Invalid(&src[span.clone()]), Span::from(span)),
        })
        .collect()
}

fn parse_num<'src>(lex: &Lexer<'src, Token<'src>>) -> Option<i64> {
    lex.slice().parse().ok()
}
