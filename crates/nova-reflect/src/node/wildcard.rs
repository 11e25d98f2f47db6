use std::fmt;
use std::sync::Arc;

use crate::cache::AttrCache;
use crate::{ClassNode, TypeNode};

/// `?`, `? extends A & B` or `? super A`.
#[derive(Clone)]
pub struct WildcardNode(pub(crate) Arc<WildcardInner>);

pub(crate) struct WildcardInner {
    extends_bounds: Vec<TypeNode>,
    super_bounds: Vec<TypeNode>,
    object: ClassNode,
    id: AttrCache<String>,
    pub(crate) display: AttrCache<String>,
}

impl WildcardNode {
    /// Bounds are taken as given; callers drop implicit `java.lang.Object` bounds beforehand.
    pub fn new(extends_bounds: Vec<TypeNode>, super_bounds: Vec<TypeNode>, object: ClassNode) -> Self {
        Self(Arc::new(WildcardInner {
            extends_bounds,
            super_bounds,
            object,
            id: AttrCache::new(),
            display: AttrCache::new(),
        }))
    }

    pub fn id(&self) -> &str {
        self.0.id.get_or_init(|| {
            let mut id = String::from("WildcardType:?");
            push_bound_ids(&mut id, " super ", &self.0.super_bounds);
            push_bound_ids(&mut id, " extends ", &self.0.extends_bounds);
            id
        })
    }

    pub fn extends_bounds(&self) -> &[TypeNode] {
        &self.0.extends_bounds
    }

    pub fn super_bounds(&self) -> &[TypeNode] {
        &self.0.super_bounds
    }

    pub(crate) fn object(&self) -> &ClassNode {
        &self.0.object
    }

    pub fn to_node(&self) -> TypeNode {
        TypeNode::Wildcard(self.clone())
    }
}

fn push_bound_ids(out: &mut String, keyword: &str, bounds: &[TypeNode]) {
    if bounds.is_empty() {
        return;
    }
    out.push_str(keyword);
    for (idx, bound) in bounds.iter().enumerate() {
        if idx != 0 {
            out.push_str(" & ");
        }
        out.push_str(bound.id());
    }
}

impl fmt::Debug for WildcardNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WildcardNode").field(&self.id()).finish()
    }
}
