use std::fmt;
use std::sync::Arc;

use nova_reflect_host::{Annotated, RawTypeVarRef};

use crate::cache::AttrCache;
use crate::{ClassNode, Element, Reflector, Result, TypeNode};

/// A type variable, optionally bound to a value.
///
/// The identity (`{owner id}|TypeVariable:{name}`) comes from the declaring class, method or
/// constructor and survives binding: a bound variable reports the same id as the free one.
#[derive(Clone)]
pub struct TypeVariableNode(pub(crate) Arc<TypeVarInner>);

pub(crate) struct TypeVarInner {
    decl: Arc<VarDecl>,
    value: Option<TypeNode>,
    pub(crate) display: AttrCache<String>,
}

/// The declaration side, shared by every binding of the same variable handle.
struct VarDecl {
    reflector: Reflector,
    var: RawTypeVarRef,
    name: String,
    id: String,
    bounds: AttrCache<Vec<TypeNode>>,
    object: ClassNode,
}

impl TypeVariableNode {
    pub(crate) fn new(
        reflector: Reflector,
        var: RawTypeVarRef,
        name: String,
        id: String,
        object: ClassNode,
    ) -> Self {
        let decl = Arc::new(VarDecl {
            reflector,
            var,
            name,
            id,
            bounds: AttrCache::new(),
            object,
        });
        Self::with_decl(decl, None)
    }

    fn with_decl(decl: Arc<VarDecl>, value: Option<TypeNode>) -> Self {
        Self(Arc::new(TypeVarInner {
            decl,
            value,
            display: AttrCache::new(),
        }))
    }

    pub fn id(&self) -> &str {
        &self.0.decl.id
    }

    pub fn name(&self) -> &str {
        &self.0.decl.name
    }

    pub fn raw(&self) -> RawTypeVarRef {
        self.0.decl.var
    }

    pub fn value(&self) -> Option<&TypeNode> {
        self.0.value.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.0.value.is_some()
    }

    /// The same variable bound to `value`.
    ///
    /// Binding a variable to its own free self yields the free variable, so `C -> C` never forms
    /// a chain that resolves through itself.
    pub fn with_value(&self, value: TypeNode) -> TypeVariableNode {
        if let TypeNode::TypeVariable(var) = &value {
            if var.id() == self.id() && !var.is_bound() {
                return self.unbound();
            }
        }
        Self::with_decl(Arc::clone(&self.0.decl), Some(value))
    }

    /// The unbound variable.
    pub fn unbound(&self) -> TypeVariableNode {
        match self.0.value {
            None => self.clone(),
            Some(_) => Self::with_decl(Arc::clone(&self.0.decl), None),
        }
    }

    /// Declared upper bounds, without the implicit `java.lang.Object`.
    pub fn extends_bounds(&self) -> Result<&[TypeNode]> {
        let decl = &self.0.decl;
        let bounds = decl.bounds.get_or_try_init(|| {
            let raw = decl.reflector.host().type_param(decl.var);
            decl.reflector.resolve_bounds(&raw.bounds)
        })?;
        Ok(bounds)
    }

    pub(crate) fn object(&self) -> &ClassNode {
        &self.0.decl.object
    }

    pub fn to_node(&self) -> TypeNode {
        TypeNode::TypeVariable(self.clone())
    }
}

impl Element for TypeVariableNode {
    fn id(&self) -> &str {
        TypeVariableNode::id(self)
    }

    fn annotated_element(&self) -> Option<&dyn Annotated> {
        let decl = &self.0.decl;
        Some(decl.reflector.host().type_param(decl.var))
    }
}

impl fmt::Debug for TypeVariableNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TypeVariableNode");
        s.field("id", &self.id());
        if let Some(value) = self.value() {
            s.field("value", &value.id());
        }
        s.finish()
    }
}
