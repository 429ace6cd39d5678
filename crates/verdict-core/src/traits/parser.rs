//! Document parser seam.

use crate::errors::ParserError;

use super::object::ObjectRef;

/// Supplies the root of a document's object graph.
///
/// Children are reached transitively through
/// [`GraphObject::linked_objects`](super::GraphObject::linked_objects);
/// the engine only calls the parser during traversal.
pub trait DocumentParser {
    /// The root object of the document.
    fn root(&self) -> Result<ObjectRef, ParserError>;
}
