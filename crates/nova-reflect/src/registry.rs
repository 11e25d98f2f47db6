use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use nova_reflect_host::{GenericOwner, RawClassId, RawType, RawTypeVarRef, TypeHost};
use parking_lot::RwLock;

use crate::node::{ClassNode, GenericArrayNode, ParameterizedNode, TypeVariableNode, WildcardNode};
use crate::{ReflectConfig, ReflectError, Result, TypeNode};

/// Entry point of the reflection model and interner of canonical [`ClassNode`]s.
///
/// Cloning is cheap; clones share the same interned classes. Nodes keep their `Reflector`
/// alive, so interned classes live as long as any node or clone does.
#[derive(Clone)]
pub struct Reflector {
    inner: Arc<ReflectorInner>,
}

struct ReflectorInner {
    host: Arc<dyn TypeHost>,
    config: ReflectConfig,
    classes: RwLock<HashMap<RawClassId, ClassNode>>,
}

impl Reflector {
    pub fn new(host: Arc<dyn TypeHost>) -> Self {
        Self::with_config(host, ReflectConfig::default())
    }

    pub fn with_config(host: Arc<dyn TypeHost>, config: ReflectConfig) -> Self {
        Self {
            inner: Arc::new(ReflectorInner {
                host,
                config,
                classes: RwLock::new(HashMap::new()),
            }),
        }
    }

    pub fn host(&self) -> &dyn TypeHost {
        self.inner.host.as_ref()
    }

    pub fn config(&self) -> &ReflectConfig {
        &self.inner.config
    }

    /// The canonical node for a raw class, created on first request.
    pub fn class(&self, id: RawClassId) -> ClassNode {
        if let Some(node) = self.inner.classes.read().get(&id) {
            tracing::trace!(target: "nova.reflect.registry", class = node.binary_name(), "registry hit");
            return node.clone();
        }

        // Construction only reads the host, so a racing thread may build the same node; whichever
        // lands first is kept.
        let node = ClassNode::new(self.clone(), id);
        let mut classes = self.inner.classes.write();
        let node = classes.entry(id).or_insert(node).clone();
        tracing::debug!(
            target: "nova.reflect.registry",
            class = node.binary_name(),
            interned = classes.len(),
            "interned class"
        );
        node
    }

    /// `java.lang.Object`.
    pub fn object_class(&self) -> ClassNode {
        self.class(self.host().object_class())
    }

    /// Number of interned classes.
    pub fn len(&self) -> usize {
        self.inner.classes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.classes.read().is_empty()
    }

    /// Turn a raw handle into a node, dispatching on its shape.
    pub fn resolve(&self, raw: &RawType) -> Result<TypeNode> {
        match raw {
            RawType::Class(id) => Ok(TypeNode::Class(self.class(*id))),
            RawType::Parameterized { raw, args } => {
                let class = self.class(*raw);
                let args = self.resolve_all(args)?;
                Ok(TypeNode::Parameterized(ParameterizedNode::from_args(
                    class, args,
                )))
            }
            RawType::TypeVariable(var) => Ok(TypeNode::TypeVariable(self.type_variable(*var))),
            RawType::Wildcard { upper, lower } => Ok(TypeNode::Wildcard(WildcardNode::new(
                self.resolve_bounds(upper)?,
                self.resolve_bounds(lower)?,
                self.object_class(),
            ))),
            RawType::GenericArray(element) => Ok(TypeNode::GenericArray(GenericArrayNode::new(
                self.resolve(element)?,
                self.object_class(),
            ))),
            RawType::Other(shape) => {
                tracing::debug!(target: "nova.reflect.registry", shape = %shape, "unsupported raw type");
                Err(ReflectError::UnsupportedKind {
                    shape: shape.clone(),
                })
            }
        }
    }

    /// Look up a class by binary name (`java.util.Map$Entry`).
    pub fn resolve_name(&self, name: &str) -> Result<TypeNode> {
        match self.host().class_for_name(name) {
            Some(id) => Ok(TypeNode::Class(self.class(id))),
            None => {
                tracing::debug!(target: "nova.reflect.registry", name, "class not found");
                Err(ReflectError::NotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    pub(crate) fn resolve_all(&self, raws: &[RawType]) -> Result<Vec<TypeNode>> {
        raws.iter().map(|raw| self.resolve(raw)).collect()
    }

    /// Like [`Reflector::resolve_all`], dropping implicit `java.lang.Object` bounds.
    pub(crate) fn resolve_bounds(&self, bounds: &[RawType]) -> Result<Vec<TypeNode>> {
        let object = self.host().object_class();
        bounds
            .iter()
            .filter(|bound| !matches!(bound, RawType::Class(id) if *id == object))
            .map(|bound| self.resolve(bound))
            .collect()
    }

    /// A free variable for the referenced type parameter.
    pub(crate) fn type_variable(&self, var: RawTypeVarRef) -> TypeVariableNode {
        let host = self.host();
        let name = host.type_param(var).name.clone();
        let id = format!("{}|TypeVariable:{name}", self.owner_id(var.owner));
        TypeVariableNode::new(self.clone(), var, name, id, self.object_class())
    }

    fn owner_id(&self, owner: GenericOwner) -> String {
        let class = self.host().class(owner.class());
        match owner {
            GenericOwner::Class(_) => format!("Class:{}", class.binary_name),
            GenericOwner::Method { index, .. } => {
                let name = &class.methods[index].name;
                let overloads = class.methods.iter().filter(|method| method.name == *name);
                let position = class.methods[..index]
                    .iter()
                    .filter(|method| method.name == *name)
                    .count();
                format!(
                    "Class:{}|Method:{name}{}",
                    class.binary_name,
                    overload_suffix(overloads.count(), position)
                )
            }
            GenericOwner::Constructor { index, .. } => format!(
                "Class:{}|Constructor{}",
                class.binary_name,
                overload_suffix(class.constructors.len(), index)
            ),
        }
    }
}

/// `#n` for the n-th of several same-named executables; nothing when there is only one.
fn overload_suffix(count: usize, position: usize) -> String {
    if count > 1 {
        format!("#{position}")
    } else {
        String::new()
    }
}

impl fmt::Debug for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reflector")
            .field("config", &self.inner.config)
            .field("interned", &self.len())
            .finish_non_exhaustive()
    }
}
