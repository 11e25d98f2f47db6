use nova_reflect_host::{Annotated, Annotation};

use crate::TypeVariableNode;

/// Anything with a structural id that may carry annotations: type nodes and members.
pub trait Element {
    fn id(&self) -> &str;

    /// The raw element annotations are read from, if there is a natural one.
    fn annotated_element(&self) -> Option<&dyn Annotated>;

    fn annotations(&self) -> &[Annotation] {
        match self.annotated_element() {
            Some(element) => element.annotations(),
            None => &[],
        }
    }

    fn annotation(&self, type_name: &str) -> Option<&Annotation> {
        self.annotated_element()
            .and_then(|element| element.annotation(type_name))
    }

    fn has_annotation(&self, type_name: &str) -> bool {
        self.annotation(type_name).is_some()
    }
}

pub trait HasTypeVariables {
    /// Variables in scope: inherited ones first, then declared ones.
    fn type_variables(&self) -> &[TypeVariableNode];

    fn declared_type_variables(&self) -> &[TypeVariableNode];

    fn has_type_variables(&self) -> bool {
        !self.type_variables().is_empty()
    }

    fn has_declared_type_variables(&self) -> bool {
        !self.declared_type_variables().is_empty()
    }
}
