use chumsky::{prelude::*, Stream};

use super::{
    document::{Span, Spanned},
    lexer::Token,
};

pub type ParseError<'src> = Simple<Token<'src>, Span>;

/// A single whitespace-separated value.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Num(i64),
    Word(String),
}

/// A non-empty line of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub fields: Vec<Spanned<Field>>,
    pub span: Span,
}

pub fn parse<'src>(tokens: Vec<Spanned<Token<'src>>>) -> Result<Vec<Line>, Vec<ParseError<'src>>> {
    let end = tokens.last().map_or(0, |token| token.span.end.offset);
    let end_of_input = Span::new(end, end + 1);
    let stream = Stream::from_iter(
        end_of_input,
        tokens
            .into_iter()
            .map(|Spanned { span, value }| (value, span)),
    );

    document_parser().parse(stream)
}

fn document_parser<'src>() -> impl Parser<Token<'src>, Vec<Line>, Error = ParseError<'src>> {
    let newline = just(Token::Newline);

    let field = select! {
        Token::Num(n) => Field::Num(n),
        Token::Word(w) => Field::Word(w.to_string()),
    }
    .map_with_span(Spanned::new)
    .labelled("field");

    let line = field
        .repeated()
        .at_least(1)
        .map_with_span(|fields, span| Line { fields, span })
        .labelled("line");

    newline
        .clone()
        .repeated()
        .ignore_then(
            line.separated_by(newline.repeated().at_least(1))
                .allow_trailing(),
        )
        .then_ignore(end())
        .labelled("document")
}

/// Renders a parse error as a one-line message.
pub fn describe(error: &ParseError<'_>) -> String {
    let span = error.span();
    match error.found() {
        Some(token) => format!("unexpected {} at {}..{}", token, span.start, span.end),
        None => format!("unexpected end of input at {}", span.start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::lexer::tokenize;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn num(n: i64, start: usize, end: usize) -> Spanned<Field> {
        Spanned::new(Field::Num(n), Span::new(start, end))
    }

    #[test]
    fn empty_document() {
        let lines = parse(tokenize("\n\n"));
        assert_eq!(lines, Ok(vec![]));
    }

    #[test]
    fn lines_are_split_on_newlines() {
        let src = indoc! {"
            2 1

            0 1
        "};
        let lines = parse(tokenize(src));
        let expected = vec![
            Line {
                fields: vec![num(2, 0, 1), num(1, 2, 3)],
                span: Span::new(0, 3),
            },
            Line {
                fields: vec![num(0, 5, 6), num(1, 7, 8)],
                span: Span::new(5, 8),
            },
        ];
        assert_eq!(lines, Ok(expected));
    }

    #[test]
    fn words_and_numbers_mix() {
        let lines = parse(tokenize("7 Banqiao")).unwrap();
        assert_eq!(
            lines[0].fields,
            vec![
                num(7, 0, 1),
                Spanned::new(Field::Word("Banqiao".to_string()), Span::new(2, 9)),
            ]
        );
    }

    #[test]
    fn invalid_token_is_reported() {
        let errors = parse(tokenize("1 99999999999999999999")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            describe(&errors[0]),
            "unexpected invalid token `99999999999999999999` at 2..22"
        );
    }
}
