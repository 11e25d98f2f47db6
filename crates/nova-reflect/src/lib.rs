//! A navigable model of reflected Java-like types.
//!
//! [`Reflector`] turns raw handles from a [`nova_reflect_host::TypeHost`] into [`TypeNode`]s:
//! classes, parameterized types, type variables, wildcards and generic arrays. Nodes answer
//! structural queries (super type, interfaces, members) lazily, resolve generic variables through
//! parameterization and inheritance, and render deterministic Java-style strings.
//!
//! ```ignore
//! let reflector = Reflector::new(Arc::new(ClassUniverse::with_minimal_jdk()));
//! let list = reflector.resolve_name("java.util.List")?;
//! assert_eq!(list.display_string()?, "java.util.List<E>");
//! ```

#![forbid(unsafe_code)]

pub mod cache;
mod config;
mod element;
mod error;
mod member;
mod node;
mod registry;
pub mod render;
pub mod subst;

pub use cache::AttrCache;
pub use config::{ConfigError, ReflectConfig};
pub use element::{Element, HasTypeVariables};
pub use error::{ReflectError, Result};
pub use member::{ConstructorNode, FieldNode, MemberScope, MethodNode, ParameterNode};
pub use node::{
    ClassNode, GenericArrayNode, ParameterizedNode, TypeKind, TypeNode, TypeVariableNode,
    WildcardNode,
};
pub use registry::Reflector;
pub use render::{DefaultContext, ImportContext, RenderContext};
pub use subst::{resolve_in_scope, substitute};
