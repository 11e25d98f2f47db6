//! Fields, constructors and methods as seen through a declaring type.
//!
//! Members are built from the raw declarations of the declaring class, with every field, parameter
//! and return type resolved against the variables in scope at the member. Seen through
//! `Box<String>`, a field declared as `T value` has type `java.lang.String`.

mod constructor;
mod executable;
mod field;
mod method;

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use nova_reflect_host::{Modifiers, RawClass, RawClassId};

pub use constructor::ConstructorNode;
pub use executable::ParameterNode;
pub use field::FieldNode;
pub use method::MethodNode;

use crate::cache::AttrCache;
use crate::node::{ClassInner, ParameterizedInner};
use crate::render::{self, DefaultContext};
use crate::{ClassNode, ParameterizedNode, Reflector, Result, TypeNode, TypeVariableNode};

/// What every member of one declaring type shares.
pub struct MemberScope {
    declaring: Declaring,
    declaring_id: String,
    declaring_simple_name: String,
    type_variables: Vec<TypeVariableNode>,
    /// Variable ids defined by rendering the declaring type, so member strings print them bare.
    primed: Vec<String>,
    reflector: Reflector,
    raw: RawClassId,
}

enum Declaring {
    Class(Weak<ClassInner>),
    Parameterized(Weak<ParameterizedInner>),
}

impl MemberScope {
    fn new(owner: Owner<'_>) -> Result<Self> {
        let class = owner.class();
        let mut ctx = DefaultContext::new();
        render::render(&owner.node(), &mut ctx, true)?;

        Ok(Self {
            declaring: owner.declaring(),
            declaring_id: owner.id().to_string(),
            declaring_simple_name: class.simple_name().to_string(),
            type_variables: owner.type_variables().to_vec(),
            primed: ctx.defined().into_iter().map(str::to_string).collect(),
            reflector: class.reflector().clone(),
            raw: class.raw_id(),
        })
    }

    /// The declaring type, if it is still alive.
    pub fn declaring(&self) -> Option<TypeNode> {
        match &self.declaring {
            Declaring::Class(weak) => weak
                .upgrade()
                .map(|inner| TypeNode::Class(ClassNode::from_inner(inner))),
            Declaring::Parameterized(weak) => weak
                .upgrade()
                .map(|inner| TypeNode::Parameterized(ParameterizedNode(inner))),
        }
    }

    pub fn declaring_id(&self) -> &str {
        &self.declaring_id
    }

    /// Variables of the declaring type: free ones for a class, the bindings for a parameterized
    /// type.
    pub fn type_variables(&self) -> &[TypeVariableNode] {
        &self.type_variables
    }

    pub(crate) fn declaring_simple_name(&self) -> &str {
        &self.declaring_simple_name
    }

    pub(crate) fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub(crate) fn raw(&self) -> RawClassId {
        self.raw
    }

    pub(crate) fn raw_class(&self) -> &RawClass {
        self.reflector.host().class(self.raw)
    }

    /// Variables in scope at a member: the declaring type's (unless the member is static), then
    /// the member's own.
    pub(crate) fn effective(
        &self,
        modifiers: Modifiers,
        declared: &[TypeVariableNode],
    ) -> Vec<TypeVariableNode> {
        let mut vars = Vec::with_capacity(self.type_variables.len() + declared.len());
        if !modifiers.is_static() {
            vars.extend(self.type_variables.iter().cloned());
        }
        vars.extend(declared.iter().cloned());
        vars
    }

    /// A render context in which the declaring type's variables are already defined.
    pub(crate) fn context(&self) -> DefaultContext {
        DefaultContext::primed(self.primed.iter().map(String::as_str))
    }
}

/// The node whose members are being listed.
#[derive(Clone, Copy)]
pub(crate) enum Owner<'a> {
    Class(&'a ClassNode),
    Parameterized(&'a ParameterizedNode),
}

impl<'a> Owner<'a> {
    fn node(self) -> TypeNode {
        match self {
            Owner::Class(class) => class.to_node(),
            Owner::Parameterized(param) => param.to_node(),
        }
    }

    fn id(self) -> &'a str {
        match self {
            Owner::Class(class) => class.id(),
            Owner::Parameterized(param) => param.id(),
        }
    }

    fn class(self) -> &'a ClassNode {
        match self {
            Owner::Class(class) => class,
            Owner::Parameterized(param) => param.class(),
        }
    }

    fn type_variables(self) -> &'a [TypeVariableNode] {
        match self {
            Owner::Class(class) => class.declared_type_variables(),
            Owner::Parameterized(param) => param.bindings(),
        }
    }

    fn super_type(self) -> Result<Option<&'a TypeNode>> {
        match self {
            Owner::Class(class) => class.super_type(),
            Owner::Parameterized(param) => param.super_type(),
        }
    }

    fn interfaces(self) -> Result<&'a [TypeNode]> {
        match self {
            Owner::Class(class) => class.interfaces(),
            Owner::Parameterized(param) => param.interfaces(),
        }
    }

    fn declaring(self) -> Declaring {
        match self {
            Owner::Class(class) => Declaring::Class(class.downgrade()),
            Owner::Parameterized(param) => Declaring::Parameterized(param.downgrade()),
        }
    }
}

/// Lazily built member listings of one class or parameterized node.
#[derive(Default)]
pub(crate) struct MemberCaches {
    scope: AttrCache<Arc<MemberScope>>,
    declared_fields: AttrCache<Vec<FieldNode>>,
    public_fields: AttrCache<Vec<FieldNode>>,
    declared_constructors: AttrCache<Vec<ConstructorNode>>,
    public_constructors: AttrCache<Vec<ConstructorNode>>,
    declared_methods: AttrCache<Vec<MethodNode>>,
    public_methods: AttrCache<Vec<MethodNode>>,
}

impl MemberCaches {
    fn scope(&self, owner: Owner<'_>) -> Result<&Arc<MemberScope>> {
        self.scope
            .get_or_try_init(|| MemberScope::new(owner).map(Arc::new))
    }

    pub(crate) fn declared_fields(&self, owner: Owner<'_>) -> Result<&[FieldNode]> {
        let fields = self
            .declared_fields
            .get_or_try_init(|| -> Result<Vec<FieldNode>> {
                let scope = self.scope(owner)?;
                (0..scope.raw_class().fields.len())
                    .map(|index| FieldNode::new(Arc::clone(scope), index))
                    .collect()
            })?;
        Ok(fields)
    }

    /// Public fields of the super class, then this type's own; a field declared here hides an
    /// inherited one of the same name.
    pub(crate) fn public_fields(&self, owner: Owner<'_>) -> Result<&[FieldNode]> {
        let fields = self
            .public_fields
            .get_or_try_init(|| -> Result<Vec<FieldNode>> {
                let mut by_name = BTreeMap::new();
                if let Some(super_type) = owner.super_type()? {
                    for field in super_type.public_fields()? {
                        by_name.insert(field.name().to_string(), field.clone());
                    }
                }
                for field in self.declared_fields(owner)? {
                    if field.modifiers().is_public() {
                        by_name.insert(field.name().to_string(), field.clone());
                    }
                }
                Ok(by_name.into_values().collect())
            })?;
        Ok(fields)
    }

    pub(crate) fn declared_constructors(&self, owner: Owner<'_>) -> Result<&[ConstructorNode]> {
        let constructors = self
            .declared_constructors
            .get_or_try_init(|| -> Result<Vec<ConstructorNode>> {
                let scope = self.scope(owner)?;
                (0..scope.raw_class().constructors.len())
                    .map(|index| ConstructorNode::new(Arc::clone(scope), index))
                    .collect()
            })?;
        Ok(constructors)
    }

    /// Constructors are not inherited.
    pub(crate) fn public_constructors(&self, owner: Owner<'_>) -> Result<&[ConstructorNode]> {
        let constructors = self
            .public_constructors
            .get_or_try_init(|| -> Result<Vec<ConstructorNode>> {
                Ok(self
                    .declared_constructors(owner)?
                    .iter()
                    .filter(|constructor| constructor.modifiers().is_public())
                    .cloned()
                    .collect())
            })?;
        Ok(constructors)
    }

    pub(crate) fn declared_methods(&self, owner: Owner<'_>) -> Result<&[MethodNode]> {
        let methods = self
            .declared_methods
            .get_or_try_init(|| -> Result<Vec<MethodNode>> {
                let scope = self.scope(owner)?;
                let skip_bridges = scope.reflector().config().skip_bridge_methods;
                scope
                    .raw_class()
                    .methods
                    .iter()
                    .enumerate()
                    .filter(|(_, method)| !(skip_bridges && method.bridge))
                    .map(|(index, _)| MethodNode::new(Arc::clone(scope), index))
                    .collect()
            })?;
        Ok(methods)
    }

    /// Interface methods, then super class methods, then this type's own public methods, keyed
    /// by name and parameter types so that later declarations replace the ones they override.
    pub(crate) fn public_methods(&self, owner: Owner<'_>) -> Result<&[MethodNode]> {
        let methods = self
            .public_methods
            .get_or_try_init(|| -> Result<Vec<MethodNode>> {
                let mut by_key = BTreeMap::new();
                for iface in owner.interfaces()? {
                    for method in iface.public_methods()? {
                        if !method.modifiers().is_static() {
                            by_key.insert(method.override_key().to_string(), method.clone());
                        }
                    }
                }
                if let Some(super_type) = owner.super_type()? {
                    for method in super_type.public_methods()? {
                        if !method.modifiers().is_static() {
                            by_key.insert(method.override_key().to_string(), method.clone());
                        }
                    }
                }
                for method in self.declared_methods(owner)? {
                    if method.modifiers().is_public() {
                        by_key.insert(method.override_key().to_string(), method.clone());
                    }
                }

                let mut methods: Vec<MethodNode> = by_key.into_values().collect();
                methods.sort_by(|a, b| a.signature().cmp(b.signature()));
                tracing::trace!(
                    target: "nova.reflect.member",
                    declaring = owner.id(),
                    methods = methods.len(),
                    "collected public methods"
                );
                Ok(methods)
            })?;
        Ok(methods)
    }
}
