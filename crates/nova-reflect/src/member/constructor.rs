use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use nova_reflect_host::{Annotated, Modifiers, RawConstructor};

use super::executable::{Executable, ExecutableKind, ParameterNode};
use super::MemberScope;
use crate::cache::AttrCache;
use crate::{Element, HasTypeVariables, Result, TypeNode, TypeVariableNode};

/// A constructor. Its name is the simple name of the declaring class.
#[derive(Clone)]
pub struct ConstructorNode(Arc<ConstructorInner>);

struct ConstructorInner {
    exec: Executable,
    id: String,
    signature: String,
    display: AttrCache<String>,
}

impl ConstructorNode {
    pub(crate) fn new(scope: Arc<MemberScope>, index: usize) -> Result<Self> {
        let exec = Executable::new(scope, index, ExecutableKind::Constructor)?;
        let id = format!("{}|Constructor", exec.scope.declaring_id());
        let signature = exec.signature(None, exec.scope.declaring_simple_name())?;

        Ok(Self(Arc::new(ConstructorInner {
            exec,
            id,
            signature,
            display: AttrCache::new(),
        })))
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn raw(&self) -> &RawConstructor {
        &self.0.exec.scope.raw_class().constructors[self.0.exec.index]
    }

    pub fn name(&self) -> &str {
        self.0.exec.scope.declaring_simple_name()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.0.exec.modifiers
    }

    pub fn scope(&self) -> &MemberScope {
        &self.0.exec.scope
    }

    pub fn declaring(&self) -> Option<TypeNode> {
        self.0.exec.scope.declaring()
    }

    pub fn parameters(&self) -> &[ParameterNode] {
        &self.0.exec.parameters
    }

    pub fn exception_types(&self) -> &[TypeNode] {
        &self.0.exec.exceptions
    }

    pub fn signature(&self) -> &str {
        &self.0.signature
    }

    pub fn display_string(&self) -> Result<&str> {
        let display = self
            .0
            .display
            .get_or_try_init(|| self.0.exec.default_string(None, self.name()))?;
        Ok(display)
    }

    pub fn display_order(a: &ConstructorNode, b: &ConstructorNode) -> Ordering {
        a.signature().cmp(b.signature())
    }
}

impl Element for ConstructorNode {
    fn id(&self) -> &str {
        ConstructorNode::id(self)
    }

    fn annotated_element(&self) -> Option<&dyn Annotated> {
        Some(self.raw())
    }
}

impl HasTypeVariables for ConstructorNode {
    fn type_variables(&self) -> &[TypeVariableNode] {
        &self.0.exec.type_variables
    }

    fn declared_type_variables(&self) -> &[TypeVariableNode] {
        &self.0.exec.declared_type_variables
    }
}

impl fmt::Debug for ConstructorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorNode")
            .field("id", &self.0.id)
            .field("signature", &self.0.signature)
            .finish()
    }
}

impl fmt::Display for ConstructorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_string() {
            Ok(display) => f.write_str(display),
            Err(_) => f.write_str(&self.0.signature),
        }
    }
}
