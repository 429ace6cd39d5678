//! In-memory graph nodes with a builder API.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::errors::ParserError;
use crate::traits::{DocumentParser, GraphObject, ObjectRef};

use super::value::AttrValue;

/// A concrete in-memory graph node.
///
/// Links live behind a `RefCell` so cyclic graphs can be wired after the
/// nodes are reference-counted:
///
/// ```
/// use std::rc::Rc;
/// use verdict_core::model::ObjectNode;
///
/// let a = Rc::new(ObjectNode::new("A").with_id("1"));
/// let b = Rc::new(ObjectNode::new("B"));
/// a.add_link("next", vec![b.clone()]);
/// b.add_link("back", vec![a.clone()]);
/// ```
pub struct ObjectNode {
    object_type: String,
    super_types: Vec<String>,
    id: Option<String>,
    context: String,
    extra_context: Option<String>,
    attributes: BTreeMap<String, AttrValue>,
    links: RefCell<Vec<(String, Vec<ObjectRef>)>>,
}

impl std::fmt::Debug for ObjectNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectNode")
            .field("object_type", &self.object_type)
            .field("super_types", &self.super_types)
            .field("id", &self.id)
            .field("context", &self.context)
            .field("extra_context", &self.extra_context)
            .field("attributes", &self.attributes)
            .field(
                "links",
                &self
                    .links
                    .borrow()
                    .iter()
                    .map(|(name, children)| (name.clone(), children.len()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ObjectNode {
    /// Create a node of the given type. The context self-label defaults to
    /// the type name.
    pub fn new(object_type: impl Into<String>) -> Self {
        let object_type = object_type.into();
        Self {
            context: object_type.clone(),
            object_type,
            super_types: Vec::new(),
            id: None,
            extra_context: None,
            attributes: BTreeMap::new(),
            links: RefCell::new(Vec::new()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_extra_context(mut self, extra: impl Into<String>) -> Self {
        self.extra_context = Some(extra.into());
        self
    }

    pub fn with_super_type(mut self, super_type: impl Into<String>) -> Self {
        self.super_types.push(super_type.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a link with its ordered children. Usable after the node is
    /// shared, which is what makes cycles expressible.
    pub fn add_link(&self, name: impl Into<String>, children: Vec<ObjectRef>) {
        self.links.borrow_mut().push((name.into(), children));
    }
}

impl GraphObject for ObjectNode {
    fn object_type(&self) -> &str {
        &self.object_type
    }

    fn super_types(&self) -> &[String] {
        &self.super_types
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn context(&self) -> &str {
        &self.context
    }

    fn extra_context(&self) -> Option<&str> {
        self.extra_context.as_deref()
    }

    fn links(&self) -> Vec<String> {
        self.links
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn linked_objects(&self, link: &str) -> Result<Vec<ObjectRef>, ParserError> {
        self.links
            .borrow()
            .iter()
            .find(|(name, _)| name == link)
            .map(|(_, children)| children.clone())
            .ok_or_else(|| ParserError::UnresolvableLink {
                link: link.to_string(),
            })
    }

    fn attribute_names(&self) -> Vec<String> {
        self.attributes.keys().cloned().collect()
    }

    fn attribute(&self, name: &str) -> Option<AttrValue> {
        self.attributes.get(name).cloned()
    }
}

/// A parser over a prebuilt in-memory graph.
pub struct InMemoryParser {
    root: ObjectRef,
}

impl InMemoryParser {
    pub fn new(root: ObjectRef) -> Self {
        Self { root }
    }
}

impl From<ObjectNode> for InMemoryParser {
    fn from(node: ObjectNode) -> Self {
        Self::new(Rc::new(node))
    }
}

impl DocumentParser for InMemoryParser {
    fn root(&self) -> Result<ObjectRef, ParserError> {
        Ok(self.root.clone())
    }
}
