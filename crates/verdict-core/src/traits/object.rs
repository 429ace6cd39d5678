//! Graph-node capability.

use std::rc::Rc;

use crate::errors::ParserError;
use crate::model::AttrValue;

/// Shared handle to a graph node. Traversal is single-threaded, so nodes
/// are reference-counted without atomics.
pub type ObjectRef = Rc<dyn GraphObject>;

/// A typed node of the document object graph.
///
/// Opaque to the engine: the parser decides how nodes are backed and may
/// materialise children lazily inside [`linked_objects`](Self::linked_objects).
/// Nodes are read-only during validation.
pub trait GraphObject {
    /// The node's type name, used for rule and variable dispatch.
    fn object_type(&self) -> &str;

    /// Super-type names, most-derived first. Rules targeting any of these
    /// also apply to this node.
    fn super_types(&self) -> &[String];

    /// Stable identifier. `None` means the node is not deduplicable and may
    /// be visited more than once.
    fn id(&self) -> Option<&str>;

    /// The node's self-label, reported alongside assertions.
    fn context(&self) -> &str;

    /// Optional suffix appended to the node's context path in braces.
    fn extra_context(&self) -> Option<&str> {
        None
    }

    /// Outgoing link names in declaration order.
    fn links(&self) -> Vec<String>;

    /// The ordered children behind `link`. May block while the parser
    /// materialises them; a link that cannot be resolved is a fault.
    fn linked_objects(&self, link: &str) -> Result<Vec<ObjectRef>, ParserError>;

    /// Names of the attributes readable by profile expressions.
    fn attribute_names(&self) -> Vec<String>;

    /// The value of a single attribute, or `None` when absent.
    fn attribute(&self, name: &str) -> Option<AttrValue>;
}
