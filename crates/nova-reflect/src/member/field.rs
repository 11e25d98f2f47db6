use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use nova_reflect_host::{Annotated, Modifiers, RawField};

use super::executable::write_modifiers;
use super::MemberScope;
use crate::cache::AttrCache;
use crate::render;
use crate::subst::resolve_in_scope;
use crate::{Element, HasTypeVariables, Result, TypeNode, TypeVariableNode};

/// A field, with its type resolved through the declaring type.
#[derive(Clone)]
pub struct FieldNode(Arc<FieldInner>);

struct FieldInner {
    scope: Arc<MemberScope>,
    index: usize,
    id: String,
    ty: TypeNode,
    type_variables: Vec<TypeVariableNode>,
    display: AttrCache<String>,
}

impl FieldNode {
    pub(crate) fn new(scope: Arc<MemberScope>, index: usize) -> Result<Self> {
        let raw = &scope.raw_class().fields[index];
        let type_variables = scope.effective(raw.modifiers, &[]);
        let ty = resolve_in_scope(&scope.reflector().resolve(&raw.ty)?, &type_variables);
        let id = format!("{}|Field:{}", scope.declaring_id(), raw.name);

        Ok(Self(Arc::new(FieldInner {
            scope,
            index,
            id,
            ty,
            type_variables,
            display: AttrCache::new(),
        })))
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn raw(&self) -> &RawField {
        &self.0.scope.raw_class().fields[self.0.index]
    }

    pub fn name(&self) -> &str {
        &self.raw().name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.raw().modifiers
    }

    pub fn is_static(&self) -> bool {
        self.modifiers().is_static()
    }

    pub fn scope(&self) -> &MemberScope {
        &self.0.scope
    }

    pub fn declaring(&self) -> Option<TypeNode> {
        self.0.scope.declaring()
    }

    pub fn ty(&self) -> &TypeNode {
        &self.0.ty
    }

    /// `public java.lang.String name`, computed once.
    pub fn display_string(&self) -> Result<&str> {
        let display = self.0.display.get_or_try_init(|| -> Result<String> {
            let mut ctx = self.0.scope.context();
            let mut out = String::new();
            write_modifiers(&mut out, self.modifiers());
            render::write_node(&mut out, &self.0.ty, &mut ctx, true)?;
            out.push(' ');
            out.push_str(self.name());
            Ok(out)
        })?;
        Ok(display)
    }

    /// Static fields first, then by name.
    pub fn display_order(a: &FieldNode, b: &FieldNode) -> Ordering {
        b.is_static()
            .cmp(&a.is_static())
            .then_with(|| a.name().cmp(b.name()))
    }
}

impl Element for FieldNode {
    fn id(&self) -> &str {
        FieldNode::id(self)
    }

    fn annotated_element(&self) -> Option<&dyn Annotated> {
        Some(self.raw())
    }
}

impl HasTypeVariables for FieldNode {
    fn type_variables(&self) -> &[TypeVariableNode] {
        &self.0.type_variables
    }

    /// Fields declare no variables of their own.
    fn declared_type_variables(&self) -> &[TypeVariableNode] {
        &[]
    }
}

impl PartialEq for FieldNode {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for FieldNode {}

impl fmt::Debug for FieldNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldNode")
            .field("id", &self.0.id)
            .field("type", &self.0.ty.id())
            .finish()
    }
}

impl fmt::Display for FieldNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_string() {
            Ok(display) => f.write_str(display),
            Err(_) => f.write_str(&self.0.id),
        }
    }
}
