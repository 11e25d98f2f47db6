use std::fmt;
use std::sync::{Arc, Weak};

use nova_reflect_host::Annotated;

use crate::cache::AttrCache;
use crate::member::{ConstructorNode, FieldNode, MemberCaches, MethodNode, Owner};
use crate::subst::substitute;
use crate::{ClassNode, Element, Result, TypeNode, TypeVariableNode};

/// A class applied to type arguments, e.g. `java.util.List<java.lang.String>`.
///
/// Each binding is one of the class's declared variables carrying its argument as value. Every
/// structural query goes through the raw class and is then substituted with the bindings.
#[derive(Clone)]
pub struct ParameterizedNode(pub(crate) Arc<ParameterizedInner>);

pub(crate) struct ParameterizedInner {
    class: ClassNode,
    bindings: Vec<TypeVariableNode>,
    id: AttrCache<String>,
    super_type: AttrCache<Option<TypeNode>>,
    interfaces: AttrCache<Vec<TypeNode>>,
    pub(crate) members: MemberCaches,
    pub(crate) display: AttrCache<String>,
}

impl ParameterizedNode {
    pub fn new(class: ClassNode, bindings: Vec<TypeVariableNode>) -> Self {
        Self(Arc::new(ParameterizedInner {
            class,
            bindings,
            id: AttrCache::new(),
            super_type: AttrCache::new(),
            interfaces: AttrCache::new(),
            members: MemberCaches::default(),
            display: AttrCache::new(),
        }))
    }

    /// Bind the class's declared variables, in order, to `args`.
    pub fn from_args(class: ClassNode, args: Vec<TypeNode>) -> Self {
        let bindings = class
            .declared_type_variables()
            .iter()
            .zip(args)
            .map(|(var, arg)| var.with_value(arg))
            .collect();
        Self::new(class, bindings)
    }

    pub(crate) fn downgrade(&self) -> Weak<ParameterizedInner> {
        Arc::downgrade(&self.0)
    }

    /// `ParameterizedType:{binary name}<{argument ids}>`; unbound variables contribute their own id.
    pub fn id(&self) -> &str {
        self.0.id.get_or_init(|| {
            let args: Vec<&str> = self
                .0
                .bindings
                .iter()
                .map(|binding| match binding.value() {
                    Some(value) => value.id(),
                    None => binding.id(),
                })
                .collect();
            format!(
                "ParameterizedType:{}<{}>",
                self.0.class.binary_name(),
                args.join(", ")
            )
        })
    }

    /// The raw class.
    pub fn class(&self) -> &ClassNode {
        &self.0.class
    }

    pub fn bindings(&self) -> &[TypeVariableNode] {
        &self.0.bindings
    }

    pub fn super_type(&self) -> Result<Option<&TypeNode>> {
        let super_type = self.0.super_type.get_or_try_init(|| {
            Ok::<_, crate::ReflectError>(
                self.0
                    .class
                    .super_type()?
                    .map(|super_type| substitute(super_type, &self.0.bindings)),
            )
        })?;
        Ok(super_type.as_ref())
    }

    pub fn interfaces(&self) -> Result<&[TypeNode]> {
        let interfaces = self.0.interfaces.get_or_try_init(|| {
            Ok::<_, crate::ReflectError>(
                self.0
                    .class
                    .interfaces()?
                    .iter()
                    .map(|iface| substitute(iface, &self.0.bindings))
                    .collect(),
            )
        })?;
        Ok(interfaces)
    }

    pub fn declared_fields(&self) -> Result<&[FieldNode]> {
        self.0.members.declared_fields(Owner::Parameterized(self))
    }

    pub fn public_fields(&self) -> Result<&[FieldNode]> {
        self.0.members.public_fields(Owner::Parameterized(self))
    }

    pub fn declared_constructors(&self) -> Result<&[ConstructorNode]> {
        self.0.members.declared_constructors(Owner::Parameterized(self))
    }

    pub fn public_constructors(&self) -> Result<&[ConstructorNode]> {
        self.0.members.public_constructors(Owner::Parameterized(self))
    }

    pub fn declared_methods(&self) -> Result<&[MethodNode]> {
        self.0.members.declared_methods(Owner::Parameterized(self))
    }

    pub fn public_methods(&self) -> Result<&[MethodNode]> {
        self.0.members.public_methods(Owner::Parameterized(self))
    }

    pub fn to_node(&self) -> TypeNode {
        TypeNode::Parameterized(self.clone())
    }
}

impl Element for ParameterizedNode {
    fn id(&self) -> &str {
        ParameterizedNode::id(self)
    }

    fn annotated_element(&self) -> Option<&dyn Annotated> {
        Some(self.0.class.raw())
    }
}

impl fmt::Debug for ParameterizedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParameterizedNode").field(&self.id()).finish()
    }
}
