pub use error::{BookingError, CollectionError, GraphError, InputError, ListError};
pub use graph::{parse, Graph, GraphKind};

pub mod booking;
pub mod bst;
pub mod error;
pub mod graph;
pub mod header_tree;
pub mod list;
pub mod queue;
pub mod stack;
pub mod text;
