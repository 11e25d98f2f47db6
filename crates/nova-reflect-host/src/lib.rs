//! Raw reflection handles for a Java-like class model.
//!
//! This crate is the "host" side of `nova-reflect`: it describes classes, members and generic
//! signatures exactly as a reflection facility would hand them out, addressed by small copyable
//! ids so that self-referential graphs (`Enum<E extends Enum<E>>`) need no shared ownership.
//! [`ClassUniverse`] is an in-memory [`TypeHost`] that can be populated with a builder API.

#![forbid(unsafe_code)]

mod annotation;
mod builder;
mod descriptor;
mod jdk;
mod modifiers;
mod raw;
mod universe;

pub use annotation::{Annotated, Annotation, ConstValue, ElementValue};
pub use builder::{ClassBuilder, ConstructorBuilder, MethodBuilder};
pub use descriptor::BaseType;
pub use modifiers::Modifiers;
pub use raw::{
    ClassKind, GenericOwner, Nesting, RawClass, RawClassId, RawConstructor, RawField, RawMethod,
    RawParameter, RawType, RawTypeParam, RawTypeVarRef,
};
pub use universe::ClassUniverse;

/// Read access to raw class descriptions.
///
/// Ids handed out by a host must stay valid for the host's lifetime; `class` may panic when given
/// an id that did not come from this host.
pub trait TypeHost: Send + Sync {
    fn class(&self, id: RawClassId) -> &RawClass;

    /// Look up a class by binary name (`java.util.Map$Entry`, `[I`).
    fn class_for_name(&self, name: &str) -> Option<RawClassId>;

    /// The root of the class hierarchy, `java.lang.Object`.
    fn object_class(&self) -> RawClassId;

    /// The declaration a type variable reference points at.
    fn type_param(&self, var: RawTypeVarRef) -> &RawTypeParam {
        let params = match var.owner {
            GenericOwner::Class(class) => &self.class(class).type_params,
            GenericOwner::Method { class, index } => &self.class(class).methods[index].type_params,
            GenericOwner::Constructor { class, index } => {
                &self.class(class).constructors[index].type_params
            }
        };
        &params[var.index]
    }
}
