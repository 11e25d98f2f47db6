use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use nova_reflect_host::{Annotated, Modifiers, RawMethod};

use super::executable::{Executable, ExecutableKind, ParameterNode};
use super::MemberScope;
use crate::cache::AttrCache;
use crate::{Element, HasTypeVariables, Result, TypeNode, TypeVariableNode};

/// A method, with parameter and return types resolved through its declaring type.
#[derive(Clone)]
pub struct MethodNode(Arc<MethodInner>);

struct MethodInner {
    exec: Executable,
    id: String,
    return_type: TypeNode,
    signature: String,
    override_key: String,
    display: AttrCache<String>,
}

impl MethodNode {
    pub(crate) fn new(scope: Arc<MemberScope>, index: usize) -> Result<Self> {
        let exec = Executable::new(scope, index, ExecutableKind::Method)?;
        let raw = &exec.scope.raw_class().methods[index];
        let return_type = exec.resolve(&raw.return_type)?;
        let id = format!("{}|Method:{}", exec.scope.declaring_id(), raw.name);
        let signature = exec.signature(Some(&return_type), &raw.name)?;
        let override_key = exec.override_key(&raw.name)?;

        Ok(Self(Arc::new(MethodInner {
            exec,
            id,
            return_type,
            signature,
            override_key,
            display: AttrCache::new(),
        })))
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn raw(&self) -> &RawMethod {
        &self.0.exec.scope.raw_class().methods[self.0.exec.index]
    }

    pub fn name(&self) -> &str {
        &self.raw().name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.0.exec.modifiers
    }

    pub fn is_static(&self) -> bool {
        self.0.exec.modifiers.is_static()
    }

    pub fn is_bridge(&self) -> bool {
        self.raw().bridge
    }

    pub fn scope(&self) -> &MemberScope {
        &self.0.exec.scope
    }

    /// The declaring type, if it is still alive.
    pub fn declaring(&self) -> Option<TypeNode> {
        self.0.exec.scope.declaring()
    }

    pub fn return_type(&self) -> &TypeNode {
        &self.0.return_type
    }

    pub fn parameters(&self) -> &[ParameterNode] {
        &self.0.exec.parameters
    }

    /// Thrown types exactly as declared; they are not resolved through the declaring type.
    pub fn exception_types(&self) -> &[TypeNode] {
        &self.0.exec.exceptions
    }

    /// `<T> R name(A, B)`, fully qualified.
    pub fn signature(&self) -> &str {
        &self.0.signature
    }

    /// Name and parameter types; shared by a method and the methods it overrides.
    pub fn override_key(&self) -> &str {
        &self.0.override_key
    }

    /// `public <T> R name(A a, B b) throws E`, computed once.
    pub fn display_string(&self) -> Result<&str> {
        let display = self.0.display.get_or_try_init(|| {
            self.0
                .exec
                .default_string(Some(&self.0.return_type), self.name())
        })?;
        Ok(display)
    }

    /// Static methods first, then by name, then by signature.
    pub fn display_order(a: &MethodNode, b: &MethodNode) -> Ordering {
        b.is_static()
            .cmp(&a.is_static())
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| a.signature().cmp(b.signature()))
    }
}

impl Element for MethodNode {
    fn id(&self) -> &str {
        MethodNode::id(self)
    }

    fn annotated_element(&self) -> Option<&dyn Annotated> {
        Some(self.raw())
    }
}

impl HasTypeVariables for MethodNode {
    fn type_variables(&self) -> &[TypeVariableNode] {
        &self.0.exec.type_variables
    }

    fn declared_type_variables(&self) -> &[TypeVariableNode] {
        &self.0.exec.declared_type_variables
    }
}

impl PartialEq for MethodNode {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id && self.0.signature == other.0.signature
    }
}

impl Eq for MethodNode {}

impl fmt::Debug for MethodNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodNode")
            .field("id", &self.0.id)
            .field("signature", &self.0.signature)
            .finish()
    }
}

impl fmt::Display for MethodNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_string() {
            Ok(display) => f.write_str(display),
            Err(_) => f.write_str(&self.0.signature),
        }
    }
}
