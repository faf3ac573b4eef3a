use thiserror::Error;

use crate::text::Span;

/// Failures of the bounded stacks and queues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollectionError {
    #[error("The container is empty")]
    Empty,

    #[error("The container is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("The value was not found in the container")]
    NotFound,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListError {
    #[error("List is empty")]
    Empty,

    #[error("Target not found")]
    NotFound,

    #[error("Index out of range: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Invalid rotation direction: {0:?}")]
    InvalidDirection(char),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex not found: {label}")]
    VertexNotFound { label: i64 },

    #[error("Vertex index out of range: {index} (vertex count {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Shortest paths require non-negative weights, found {weight}")]
    NegativeWeight { weight: i64 },

    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Station not found: {id}")]
    StationNotFound { id: i64 },

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised while reading the whitespace-positional input formats.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Syntax error: {}", .messages.join("; "))]
    Syntax { messages: Vec<String> },

    #[error("The input does not start with a `vertices edges` header line")]
    MissingHeader,

    #[error("Expected {expected} {what}, found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Expected {expected} at {}..{}", .span.start, .span.end)]
    UnexpectedField { expected: &'static str, span: Span },
}
