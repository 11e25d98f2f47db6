use std::fmt;
use std::sync::{Arc, Weak};

use nova_reflect_host::{
    Annotated, ClassKind, GenericOwner, Modifiers, Nesting, RawClass, RawClassId, RawTypeVarRef,
};

use crate::cache::AttrCache;
use crate::member::{ConstructorNode, FieldNode, MemberCaches, MethodNode, Owner};
use crate::{Element, Reflector, Result, TypeNode, TypeVariableNode};

/// A class, interface, primitive or array class, unparameterized.
///
/// Class nodes are interned by [`Reflector::class`]; every query is computed on first use.
#[derive(Clone)]
pub struct ClassNode(pub(crate) Arc<ClassInner>);

pub(crate) struct ClassInner {
    reflector: Reflector,
    raw: RawClassId,
    id: String,
    declared_type_variables: AttrCache<Vec<TypeVariableNode>>,
    super_type: AttrCache<Option<TypeNode>>,
    interfaces: AttrCache<Vec<TypeNode>>,
    element_type: AttrCache<Option<TypeNode>>,
    pub(crate) members: MemberCaches,
    pub(crate) display: AttrCache<String>,
}

impl ClassNode {
    pub(crate) fn new(reflector: Reflector, raw: RawClassId) -> Self {
        let id = format!("Class:{}", reflector.host().class(raw).binary_name);
        Self(Arc::new(ClassInner {
            reflector,
            raw,
            id,
            declared_type_variables: AttrCache::new(),
            super_type: AttrCache::new(),
            interfaces: AttrCache::new(),
            element_type: AttrCache::new(),
            members: MemberCaches::default(),
            display: AttrCache::new(),
        }))
    }

    pub(crate) fn downgrade(&self) -> Weak<ClassInner> {
        Arc::downgrade(&self.0)
    }

    pub(crate) fn from_inner(inner: Arc<ClassInner>) -> Self {
        Self(inner)
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    /// Whether both handles point at the same interned node.
    pub fn ptr_eq(&self, other: &ClassNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn reflector(&self) -> &Reflector {
        &self.0.reflector
    }

    pub fn raw_id(&self) -> RawClassId {
        self.0.raw
    }

    pub fn raw(&self) -> &RawClass {
        self.0.reflector.host().class(self.0.raw)
    }

    pub fn binary_name(&self) -> &str {
        &self.raw().binary_name
    }

    /// `None` for anonymous and local classes.
    pub fn canonical_name(&self) -> Option<&str> {
        self.raw().canonical_name.as_deref()
    }

    pub fn simple_name(&self) -> &str {
        &self.raw().simple_name
    }

    pub fn package_name(&self) -> &str {
        &self.raw().package
    }

    pub fn modifiers(&self) -> Modifiers {
        self.raw().modifiers
    }

    pub fn is_primitive(&self) -> bool {
        self.raw().kind == ClassKind::Primitive
    }

    pub fn is_array(&self) -> bool {
        self.raw().kind == ClassKind::Array
    }

    pub fn is_enum(&self) -> bool {
        self.raw().kind == ClassKind::Enum
    }

    pub fn is_interface(&self) -> bool {
        self.raw().is_interface()
    }

    pub fn is_annotation(&self) -> bool {
        self.raw().kind == ClassKind::Annotation
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self.raw().nesting, Nesting::Anonymous { .. })
    }

    pub fn is_member(&self) -> bool {
        matches!(self.raw().nesting, Nesting::Member { .. })
    }

    pub fn is_local(&self) -> bool {
        matches!(self.raw().nesting, Nesting::Local { .. })
    }

    pub fn is_synthetic(&self) -> bool {
        self.raw().synthetic
    }

    pub fn enum_values(&self) -> &[String] {
        &self.raw().enum_constants
    }

    /// Component class of an array class.
    pub fn element_type(&self) -> Option<&TypeNode> {
        self.0
            .element_type
            .get_or_init(|| {
                self.raw()
                    .component
                    .map(|component| TypeNode::Class(self.0.reflector.class(component)))
            })
            .as_ref()
    }

    pub fn declared_type_variables(&self) -> &[TypeVariableNode] {
        self.0.declared_type_variables.get_or_init(|| {
            (0..self.raw().type_params.len())
                .map(|index| {
                    self.0.reflector.type_variable(RawTypeVarRef {
                        owner: GenericOwner::Class(self.0.raw),
                        index,
                    })
                })
                .collect()
        })
    }

    /// Generic super class; `None` for `java.lang.Object`, interfaces and primitives.
    pub fn super_type(&self) -> Result<Option<&TypeNode>> {
        let super_type = self.0.super_type.get_or_try_init(|| {
            self.raw()
                .super_class
                .as_ref()
                .map(|raw| self.0.reflector.resolve(raw))
                .transpose()
        })?;
        Ok(super_type.as_ref())
    }

    pub fn interfaces(&self) -> Result<&[TypeNode]> {
        let interfaces = self
            .0
            .interfaces
            .get_or_try_init(|| self.0.reflector.resolve_all(&self.raw().interfaces))?;
        Ok(interfaces)
    }

    pub fn declared_fields(&self) -> Result<&[FieldNode]> {
        self.0.members.declared_fields(Owner::Class(self))
    }

    pub fn public_fields(&self) -> Result<&[FieldNode]> {
        self.0.members.public_fields(Owner::Class(self))
    }

    pub fn declared_constructors(&self) -> Result<&[ConstructorNode]> {
        self.0.members.declared_constructors(Owner::Class(self))
    }

    pub fn public_constructors(&self) -> Result<&[ConstructorNode]> {
        self.0.members.public_constructors(Owner::Class(self))
    }

    pub fn declared_methods(&self) -> Result<&[MethodNode]> {
        self.0.members.declared_methods(Owner::Class(self))
    }

    pub fn public_methods(&self) -> Result<&[MethodNode]> {
        self.0.members.public_methods(Owner::Class(self))
    }

    pub fn to_node(&self) -> TypeNode {
        TypeNode::Class(self.clone())
    }
}

impl Element for ClassNode {
    fn id(&self) -> &str {
        ClassNode::id(self)
    }

    fn annotated_element(&self) -> Option<&dyn Annotated> {
        Some(self.raw())
    }
}

impl PartialEq for ClassNode {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for ClassNode {}

impl std::hash::Hash for ClassNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for ClassNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassNode").field(&self.0.id).finish()
    }
}
