//! Reader for the whitespace-positional input files used by the exercises
//! (graph descriptions, station lists, booking records).

pub use document::{Position, Span, Spanned};
pub use parser::{Field, Line, ParseError};

mod document;
pub mod lexer;
pub mod parser;

use crate::error::InputError;

/// Tokenizes and parses `source` into its non-empty lines.
pub fn read_lines(source: &str) -> Result<Vec<Line>, InputError> {
    let tokens = lexer::tokenize(source);
    parser::parse(tokens).map_err(|errors| InputError::Syntax {
        messages: errors.iter().map(parser::describe).collect(),
    })
}

/// Flattens the lines of a document into one stream of fields,
/// for formats that are read positionally regardless of line breaks.
pub fn fields(lines: &[Line]) -> impl Iterator<Item = &Spanned<Field>> {
    lines.iter().flat_map(|line| line.fields.iter())
}

impl Spanned<Field> {
    pub fn as_num(&self) -> Result<i64, InputError> {
        match self.value {
            Field::Num(n) => Ok(n),
            Field::Word(_) => Err(InputError::UnexpectedField {
                expected: "an integer",
                span: self.span,
            }),
        }
    }

    /// Non-negative integer, such as a count or an index.
    pub fn as_count(&self) -> Result<usize, InputError> {
        self.as_num()
            .ok()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(InputError::UnexpectedField {
                expected: "a non-negative integer",
                span: self.span,
            })
    }

    /// The field as written; numbers are accepted as names too.
    pub fn as_name(&self) -> String {
        match &self.value {
            Field::Num(n) => n.to_string(),
            Field::Word(w) => w.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_lines_reports_syntax_errors() {
        let result = read_lines("3 99999999999999999999");
        assert_eq!(
            result,
            Err(InputError::Syntax {
                messages: vec![
                    "unexpected invalid token `99999999999999999999` at 2..22".to_string()
                ],
            })
        );
    }

    #[test]
    fn fields_flatten_lines() {
        let lines = read_lines("1 2\n3\n").unwrap();
        let numbers: Vec<i64> = fields(&lines).map(|f| f.as_num().unwrap()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn as_count_rejects_negative_and_words() {
        let lines = read_lines("-1 x").unwrap();
        let fields: Vec<_> = fields(&lines).collect();
        assert_eq!(
            fields[0].as_count(),
            Err(InputError::UnexpectedField {
                expected: "a non-negative integer",
                span: Span::new(0, 2),
            })
        );
        assert!(fields[1].as_num().is_err());
        assert_eq!(fields[1].as_name(), "x");
    }
}
