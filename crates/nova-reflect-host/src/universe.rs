use std::collections::HashMap;

use crate::builder::ClassBuilder;
use crate::descriptor::{array_binary_name, BaseType};
use crate::raw::{ClassKind, RawClass, RawClassId, RawType};
use crate::{Modifiers, TypeHost};

pub(crate) const OBJECT: &str = "java.lang.Object";

/// An in-memory [`TypeHost`] populated programmatically.
///
/// Classes are declared first (which reserves a [`RawClassId`]) and defined afterwards, so
/// mutually referencing classes can be described in any order.
#[derive(Debug, Clone)]
pub struct ClassUniverse {
    classes: Vec<RawClass>,
    by_name: HashMap<String, RawClassId>,
    arrays: HashMap<RawClassId, RawClassId>,
    object: RawClassId,
}

impl Default for ClassUniverse {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassUniverse {
    /// A universe containing `java.lang.Object` and the primitive classes.
    pub fn new() -> Self {
        let mut universe = Self {
            classes: Vec::new(),
            by_name: HashMap::new(),
            arrays: HashMap::new(),
            object: RawClassId::new(0),
        };

        let object = universe.insert(RawClass::named(OBJECT));
        universe.object = object;

        for base in BaseType::ALL {
            let mut class = RawClass::named(base.keyword());
            class.kind = ClassKind::Primitive;
            class.modifiers = Modifiers::PUBLIC | Modifiers::ABSTRACT | Modifiers::FINAL;
            universe.insert(class);
        }

        universe
    }

    /// [`ClassUniverse::new`] plus the handful of `java.lang`/`java.util`/`java.io` types that
    /// generic code routinely mentions.
    pub fn with_minimal_jdk() -> Self {
        let mut universe = Self::new();
        crate::jdk::populate(&mut universe);
        universe
    }

    fn insert(&mut self, class: RawClass) -> RawClassId {
        let id = RawClassId::new(
            self.classes
                .len()
                .try_into()
                .expect("too many classes in universe"),
        );
        self.by_name.insert(class.binary_name.clone(), id);
        self.classes.push(class);
        id
    }

    /// Reserve an id for `binary_name` (e.g. `com.example.Outer$Inner`).
    ///
    /// Declaring an already known name returns the existing id. New classes start out as public
    /// top-level classes extending `java.lang.Object`, with no members.
    pub fn declare(&mut self, binary_name: &str) -> RawClassId {
        if let Some(&id) = self.by_name.get(binary_name) {
            return id;
        }
        let mut class = RawClass::named(binary_name);
        class.super_class = Some(RawType::Class(self.object));
        let id = self.insert(class);
        tracing::trace!(target: "nova.reflect.host", class = binary_name, ?id, "declared class");
        id
    }

    /// Fill in (or extend) the definition of a declared class.
    pub fn define(&mut self, id: RawClassId, f: impl FnOnce(&mut ClassBuilder<'_>)) {
        let draft = self.classes[id.index()].clone();
        let mut builder = ClassBuilder::new(self, id, draft);
        f(&mut builder);
        let draft = builder.finish();
        self.classes[id.index()] = draft;
    }

    /// [`ClassUniverse::declare`] followed by [`ClassUniverse::define`].
    pub fn define_class(
        &mut self,
        binary_name: &str,
        f: impl FnOnce(&mut ClassBuilder<'_>),
    ) -> RawClassId {
        let id = self.declare(binary_name);
        self.define(id, f);
        id
    }

    /// The array class whose component type is `component`, creating it on first use.
    pub fn array_of(&mut self, component: RawClassId) -> RawClassId {
        if let Some(&id) = self.arrays.get(&component) {
            return id;
        }

        let comp = &self.classes[component.index()];
        let mut interfaces = Vec::new();
        for name in ["java.lang.Cloneable", "java.io.Serializable"] {
            if let Some(&iface) = self.by_name.get(name) {
                interfaces.push(RawType::Class(iface));
            }
        }

        let class = RawClass {
            binary_name: array_binary_name(comp),
            canonical_name: comp.canonical_name.as_ref().map(|name| format!("{name}[]")),
            simple_name: format!("{}[]", comp.simple_name),
            package: String::new(),
            modifiers: comp.modifiers.access() | Modifiers::ABSTRACT | Modifiers::FINAL,
            kind: ClassKind::Array,
            component: Some(component),
            super_class: Some(RawType::Class(self.object)),
            interfaces,
            ..RawClass::named("")
        };

        let id = self.insert(class);
        self.arrays.insert(component, id);
        id
    }

    /// The primitive class for `keyword` (`int`, `boolean`, `void`, ...).
    pub fn primitive(&self, keyword: &str) -> Option<RawClassId> {
        BaseType::from_keyword(keyword).and_then(|base| self.class_id(base.keyword()))
    }

    pub fn class_id(&self, binary_name: &str) -> Option<RawClassId> {
        self.by_name.get(binary_name).copied()
    }

    pub fn object(&self) -> RawClassId {
        self.object
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RawClassId, &RawClass)> + '_ {
        self.classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (RawClassId::new(idx as u32), class))
    }
}

impl TypeHost for ClassUniverse {
    fn class(&self, id: RawClassId) -> &RawClass {
        &self.classes[id.index()]
    }

    fn class_for_name(&self, name: &str) -> Option<RawClassId> {
        self.class_id(name)
    }

    fn object_class(&self) -> RawClassId {
        self.object
    }
}
