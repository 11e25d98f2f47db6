use std::fmt;
use std::sync::Arc;

use crate::cache::AttrCache;
use crate::{ClassNode, TypeNode};

/// An array whose element type is generic: `T[]`, `java.util.List<T>[][]`.
///
/// Arrays of plain classes are [`ClassNode`]s; this variant only appears when the element mentions
/// a type variable or a parameterized type.
#[derive(Clone)]
pub struct GenericArrayNode(pub(crate) Arc<GenericArrayInner>);

pub(crate) struct GenericArrayInner {
    element: TypeNode,
    object: ClassNode,
    id: AttrCache<String>,
    pub(crate) display: AttrCache<String>,
}

impl GenericArrayNode {
    pub fn new(element: TypeNode, object: ClassNode) -> Self {
        Self(Arc::new(GenericArrayInner {
            element,
            object,
            id: AttrCache::new(),
            display: AttrCache::new(),
        }))
    }

    pub fn id(&self) -> &str {
        self.0
            .id
            .get_or_init(|| format!("{}[]", self.0.element.id()))
    }

    pub fn element_type(&self) -> &TypeNode {
        &self.0.element
    }

    pub(crate) fn object(&self) -> &ClassNode {
        &self.0.object
    }

    pub fn to_node(&self) -> TypeNode {
        TypeNode::GenericArray(self.clone())
    }
}

impl fmt::Debug for GenericArrayNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GenericArrayNode").field(&self.id()).finish()
    }
}
