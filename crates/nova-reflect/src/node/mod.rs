//! The five type node variants and the query surface they share.

mod array;
mod class;
mod parameterized;
mod type_var;
mod wildcard;

use std::borrow::Cow;
use std::fmt;

use nova_reflect_host::{Annotated, Modifiers};

pub use array::GenericArrayNode;
pub use class::ClassNode;
pub use parameterized::ParameterizedNode;
pub use type_var::TypeVariableNode;
pub use wildcard::WildcardNode;

pub(crate) use class::ClassInner;
pub(crate) use parameterized::ParameterizedInner;

use crate::cache::AttrCache;
use crate::member::{ConstructorNode, FieldNode, MethodNode};
use crate::render::{self, DefaultContext, RenderContext};
use crate::{subst, Element, HasTypeVariables, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Parameterized,
    TypeVariable,
    Wildcard,
    GenericArray,
}

/// A reflected type.
///
/// Queries that make no sense for a variant answer empty rather than failing: a wildcard has no
/// fields, an unbound type variable has no super type. Wildcards, unbound type variables and
/// generic arrays expose the methods of `java.lang.Object`. A bound type variable answers
/// structural queries through its value while keeping its own id and name.
///
/// Equality and hashing use [`TypeNode::id`].
#[derive(Clone)]
pub enum TypeNode {
    Class(ClassNode),
    Parameterized(ParameterizedNode),
    TypeVariable(TypeVariableNode),
    Wildcard(WildcardNode),
    GenericArray(GenericArrayNode),
}

impl TypeNode {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeNode::Class(_) => TypeKind::Class,
            TypeNode::Parameterized(_) => TypeKind::Parameterized,
            TypeNode::TypeVariable(_) => TypeKind::TypeVariable,
            TypeNode::Wildcard(_) => TypeKind::Wildcard,
            TypeNode::GenericArray(_) => TypeKind::GenericArray,
        }
    }

    /// Stable structural key: equal ids mean the same logical type.
    pub fn id(&self) -> &str {
        match self {
            TypeNode::Class(class) => class.id(),
            TypeNode::Parameterized(param) => param.id(),
            TypeNode::TypeVariable(var) => var.id(),
            TypeNode::Wildcard(wildcard) => wildcard.id(),
            TypeNode::GenericArray(array) => array.id(),
        }
    }

    /// The node structural queries are answered by: the value of a bound type variable
    /// (transitively), otherwise `self`.
    fn structural(&self) -> &TypeNode {
        let mut node = self;
        while let TypeNode::TypeVariable(var) = node {
            match var.value() {
                Some(value) => node = value,
                None => break,
            }
        }
        node
    }

    pub fn as_class(&self) -> Option<&ClassNode> {
        match self {
            TypeNode::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_parameterized(&self) -> Option<&ParameterizedNode> {
        match self {
            TypeNode::Parameterized(param) => Some(param),
            _ => None,
        }
    }

    pub fn as_type_variable(&self) -> Option<&TypeVariableNode> {
        match self {
            TypeNode::TypeVariable(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_wildcard(&self) -> Option<&WildcardNode> {
        match self {
            TypeNode::Wildcard(wildcard) => Some(wildcard),
            _ => None,
        }
    }

    pub fn as_generic_array(&self) -> Option<&GenericArrayNode> {
        match self {
            TypeNode::GenericArray(array) => Some(array),
            _ => None,
        }
    }

    /// The raw class behind a class or parameterized type.
    fn raw_class(&self) -> Option<&ClassNode> {
        match self.structural() {
            TypeNode::Class(class) => Some(class),
            TypeNode::Parameterized(param) => Some(param.class()),
            TypeNode::TypeVariable(_) | TypeNode::Wildcard(_) | TypeNode::GenericArray(_) => None,
        }
    }

    /// `Class.getName()` style name; empty for type variables and wildcards.
    pub fn binary_name(&self) -> &str {
        self.raw_class().map_or("", ClassNode::binary_name)
    }

    pub fn canonical_name(&self) -> Option<Cow<'_, str>> {
        match self.structural() {
            TypeNode::GenericArray(array) => array
                .element_type()
                .canonical_name()
                .map(|name| Cow::Owned(format!("{name}[]"))),
            node => node
                .raw_class()
                .and_then(ClassNode::canonical_name)
                .map(Cow::Borrowed),
        }
    }

    pub fn simple_name(&self) -> Cow<'_, str> {
        match self.structural() {
            TypeNode::GenericArray(array) => {
                Cow::Owned(format!("{}[]", array.element_type().simple_name()))
            }
            node => Cow::Borrowed(node.raw_class().map_or("", ClassNode::simple_name)),
        }
    }

    pub fn package_name(&self) -> &str {
        self.raw_class().map_or("", ClassNode::package_name)
    }

    pub fn modifiers(&self) -> Modifiers {
        self.raw_class()
            .map_or(Modifiers::NONE, ClassNode::modifiers)
    }

    pub fn is_primitive(&self) -> bool {
        self.raw_class().is_some_and(ClassNode::is_primitive)
    }

    pub fn is_array(&self) -> bool {
        match self.structural() {
            TypeNode::GenericArray(_) => true,
            node => node.raw_class().is_some_and(ClassNode::is_array),
        }
    }

    /// Element type of an array class or generic array.
    pub fn element_type(&self) -> Option<&TypeNode> {
        match self.structural() {
            TypeNode::GenericArray(array) => Some(array.element_type()),
            node => node.raw_class().and_then(ClassNode::element_type),
        }
    }

    pub fn is_enum(&self) -> bool {
        self.raw_class().is_some_and(ClassNode::is_enum)
    }

    pub fn enum_values(&self) -> &[String] {
        self.raw_class()
            .map(ClassNode::enum_values)
            .unwrap_or_default()
    }

    pub fn is_interface(&self) -> bool {
        self.raw_class().is_some_and(ClassNode::is_interface)
    }

    pub fn is_annotation(&self) -> bool {
        self.raw_class().is_some_and(ClassNode::is_annotation)
    }

    pub fn is_anonymous(&self) -> bool {
        self.raw_class().is_some_and(ClassNode::is_anonymous)
    }

    pub fn is_member(&self) -> bool {
        self.raw_class().is_some_and(ClassNode::is_member)
    }

    pub fn is_local(&self) -> bool {
        self.raw_class().is_some_and(ClassNode::is_local)
    }

    pub fn is_synthetic(&self) -> bool {
        self.raw_class().is_some_and(ClassNode::is_synthetic)
    }

    pub fn is_type_variable(&self) -> bool {
        matches!(self, TypeNode::TypeVariable(_))
    }

    pub fn type_variable_name(&self) -> Option<&str> {
        self.as_type_variable().map(TypeVariableNode::name)
    }

    pub fn type_variable_value(&self) -> Option<&TypeNode> {
        self.as_type_variable().and_then(TypeVariableNode::value)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, TypeNode::Wildcard(_))
    }

    /// Upper bounds of a type variable or wildcard, without the implicit `java.lang.Object`.
    pub fn extends_bounds(&self) -> Result<&[TypeNode]> {
        match self {
            TypeNode::TypeVariable(var) => var.extends_bounds(),
            TypeNode::Wildcard(wildcard) => Ok(wildcard.extends_bounds()),
            TypeNode::Class(_) | TypeNode::Parameterized(_) | TypeNode::GenericArray(_) => Ok(&[]),
        }
    }

    /// Lower bounds of a wildcard.
    pub fn super_bounds(&self) -> &[TypeNode] {
        self.as_wildcard()
            .map(WildcardNode::super_bounds)
            .unwrap_or_default()
    }

    pub fn super_type(&self) -> Result<Option<&TypeNode>> {
        match self.structural() {
            TypeNode::Class(class) => class.super_type(),
            TypeNode::Parameterized(param) => param.super_type(),
            TypeNode::TypeVariable(_) | TypeNode::Wildcard(_) | TypeNode::GenericArray(_) => {
                Ok(None)
            }
        }
    }

    pub fn interfaces(&self) -> Result<&[TypeNode]> {
        match self.structural() {
            TypeNode::Class(class) => class.interfaces(),
            TypeNode::Parameterized(param) => param.interfaces(),
            TypeNode::TypeVariable(_) | TypeNode::Wildcard(_) | TypeNode::GenericArray(_) => {
                Ok(&[])
            }
        }
    }

    pub fn declared_fields(&self) -> Result<&[FieldNode]> {
        match self.structural() {
            TypeNode::Class(class) => class.declared_fields(),
            TypeNode::Parameterized(param) => param.declared_fields(),
            TypeNode::TypeVariable(_) | TypeNode::Wildcard(_) | TypeNode::GenericArray(_) => {
                Ok(&[])
            }
        }
    }

    /// Public fields including inherited ones, sorted by name.
    pub fn public_fields(&self) -> Result<&[FieldNode]> {
        match self.structural() {
            TypeNode::Class(class) => class.public_fields(),
            TypeNode::Parameterized(param) => param.public_fields(),
            TypeNode::TypeVariable(_) | TypeNode::Wildcard(_) | TypeNode::GenericArray(_) => {
                Ok(&[])
            }
        }
    }

    pub fn public_field(&self, name: &str) -> Result<Option<&FieldNode>> {
        Ok(self
            .public_fields()?
            .iter()
            .find(|field| field.name() == name))
    }

    pub fn declared_constructors(&self) -> Result<&[ConstructorNode]> {
        match self.structural() {
            TypeNode::Class(class) => class.declared_constructors(),
            TypeNode::Parameterized(param) => param.declared_constructors(),
            TypeNode::TypeVariable(_) | TypeNode::Wildcard(_) | TypeNode::GenericArray(_) => {
                Ok(&[])
            }
        }
    }

    pub fn public_constructors(&self) -> Result<&[ConstructorNode]> {
        match self.structural() {
            TypeNode::Class(class) => class.public_constructors(),
            TypeNode::Parameterized(param) => param.public_constructors(),
            TypeNode::TypeVariable(_) | TypeNode::Wildcard(_) | TypeNode::GenericArray(_) => {
                Ok(&[])
            }
        }
    }

    pub fn declared_methods(&self) -> Result<&[MethodNode]> {
        match self.structural() {
            TypeNode::Class(class) => class.declared_methods(),
            TypeNode::Parameterized(param) => param.declared_methods(),
            TypeNode::TypeVariable(var) => var.object().declared_methods(),
            TypeNode::Wildcard(wildcard) => wildcard.object().declared_methods(),
            TypeNode::GenericArray(array) => array.object().declared_methods(),
        }
    }

    /// Public methods including inherited ones, de-duplicated by override key and sorted by
    /// signature.
    pub fn public_methods(&self) -> Result<&[MethodNode]> {
        match self.structural() {
            TypeNode::Class(class) => class.public_methods(),
            TypeNode::Parameterized(param) => param.public_methods(),
            TypeNode::TypeVariable(var) => var.object().public_methods(),
            TypeNode::Wildcard(wildcard) => wildcard.object().public_methods(),
            TypeNode::GenericArray(array) => array.object().public_methods(),
        }
    }

    /// Declared variables of a class, or the bindings of a parameterized type.
    pub fn declared_type_variables(&self) -> &[TypeVariableNode] {
        match self {
            TypeNode::Class(class) => class.declared_type_variables(),
            TypeNode::Parameterized(param) => param.bindings(),
            TypeNode::TypeVariable(_) | TypeNode::Wildcard(_) | TypeNode::GenericArray(_) => &[],
        }
    }

    /// Inherited and declared variables. Types do not inherit variables from enclosing classes,
    /// so this equals [`TypeNode::declared_type_variables`].
    pub fn type_variables(&self) -> &[TypeVariableNode] {
        self.declared_type_variables()
    }

    /// The class this type erases to. Generic arrays have no class in the model.
    pub fn erasure(&self) -> Result<Option<ClassNode>> {
        match self {
            TypeNode::Class(class) => Ok(Some(class.clone())),
            TypeNode::Parameterized(param) => Ok(Some(param.class().clone())),
            TypeNode::TypeVariable(var) => match var.value() {
                Some(value) => value.erasure(),
                None => match var.extends_bounds()?.first() {
                    Some(bound) => bound.erasure(),
                    None => Ok(Some(var.object().clone())),
                },
            },
            TypeNode::Wildcard(wildcard) => match wildcard.extends_bounds().first() {
                Some(bound) => bound.erasure(),
                None => Ok(Some(wildcard.object().clone())),
            },
            TypeNode::GenericArray(_) => Ok(None),
        }
    }

    /// A copy of this type with type variables replaced by the values in `bindings`.
    pub fn substitute(&self, bindings: &[TypeVariableNode]) -> TypeNode {
        subst::substitute(self, bindings)
    }

    pub fn render(
        &self,
        ctx: &mut dyn RenderContext,
        include_type_variables: bool,
    ) -> Result<String> {
        render::render(self, ctx, include_type_variables)
    }

    /// Fully qualified rendering with type variables, computed once.
    pub fn display_string(&self) -> Result<&str> {
        let cache: &AttrCache<String> = match self {
            TypeNode::Class(class) => &class.0.display,
            TypeNode::Parameterized(param) => &param.0.display,
            TypeNode::TypeVariable(var) => &var.0.display,
            TypeNode::Wildcard(wildcard) => &wildcard.0.display,
            TypeNode::GenericArray(array) => &array.0.display,
        };
        let display = cache.get_or_try_init(|| self.render(&mut DefaultContext::new(), true))?;
        Ok(display)
    }
}

impl Element for TypeNode {
    fn id(&self) -> &str {
        TypeNode::id(self)
    }

    fn annotated_element(&self) -> Option<&dyn Annotated> {
        match self {
            TypeNode::Class(class) => class.annotated_element(),
            TypeNode::Parameterized(param) => param.annotated_element(),
            TypeNode::TypeVariable(var) => var.annotated_element(),
            TypeNode::Wildcard(_) | TypeNode::GenericArray(_) => None,
        }
    }
}

impl HasTypeVariables for TypeNode {
    fn type_variables(&self) -> &[TypeVariableNode] {
        TypeNode::type_variables(self)
    }

    fn declared_type_variables(&self) -> &[TypeVariableNode] {
        TypeNode::declared_type_variables(self)
    }
}

impl PartialEq for TypeNode {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TypeNode {}

impl std::hash::Hash for TypeNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Class(class) => fmt::Debug::fmt(class, f),
            TypeNode::Parameterized(param) => fmt::Debug::fmt(param, f),
            TypeNode::TypeVariable(var) => fmt::Debug::fmt(var, f),
            TypeNode::Wildcard(wildcard) => fmt::Debug::fmt(wildcard, f),
            TypeNode::GenericArray(array) => fmt::Debug::fmt(array, f),
        }
    }
}

/// The default rendering; falls back to the id when a bound cannot be resolved.
impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_string() {
            Ok(display) => f.write_str(display),
            Err(_) => f.write_str(self.id()),
        }
    }
}

impl From<ClassNode> for TypeNode {
    fn from(node: ClassNode) -> Self {
        TypeNode::Class(node)
    }
}

impl From<ParameterizedNode> for TypeNode {
    fn from(node: ParameterizedNode) -> Self {
        TypeNode::Parameterized(node)
    }
}

impl From<TypeVariableNode> for TypeNode {
    fn from(node: TypeVariableNode) -> Self {
        TypeNode::TypeVariable(node)
    }
}

impl From<WildcardNode> for TypeNode {
    fn from(node: WildcardNode) -> Self {
        TypeNode::Wildcard(node)
    }
}

impl From<GenericArrayNode> for TypeNode {
    fn from(node: GenericArrayNode) -> Self {
        TypeNode::GenericArray(node)
    }
}
