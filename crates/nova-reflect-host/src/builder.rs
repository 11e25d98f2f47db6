use crate::raw::{
    ClassKind, GenericOwner, Nesting, RawClass, RawClassId, RawConstructor, RawField, RawMethod,
    RawParameter, RawType, RawTypeParam, RawTypeVarRef,
};
use crate::{Annotation, ClassUniverse, Modifiers};

/// Builds the body of a class declared in a [`ClassUniverse`].
pub struct ClassBuilder<'u> {
    universe: &'u mut ClassUniverse,
    id: RawClassId,
    draft: RawClass,
}

impl<'u> ClassBuilder<'u> {
    pub(crate) fn new(universe: &'u mut ClassUniverse, id: RawClassId, draft: RawClass) -> Self {
        Self {
            universe,
            id,
            draft,
        }
    }

    pub(crate) fn finish(self) -> RawClass {
        self.draft
    }

    pub fn id(&self) -> RawClassId {
        self.id
    }

    /// `RawType::Class` for the class being built.
    pub fn this_type(&self) -> RawType {
        RawType::Class(self.id)
    }

    /// Change the class kind.
    ///
    /// Interfaces and annotations lose the implicit `java.lang.Object` super class and gain the
    /// `interface abstract` modifier bits; enums extend `java.lang.Enum<Self>` when the universe
    /// knows `java.lang.Enum`.
    pub fn kind(&mut self, kind: ClassKind) -> &mut Self {
        self.draft.kind = kind;
        match kind {
            ClassKind::Interface | ClassKind::Annotation => {
                self.draft.modifiers |= Modifiers::INTERFACE | Modifiers::ABSTRACT;
                self.draft.super_class = None;
            }
            ClassKind::Enum => {
                if let Some(enum_class) = self.universe.class_id("java.lang.Enum") {
                    self.draft.super_class =
                        Some(RawType::parameterized(enum_class, vec![self.this_type()]));
                }
            }
            ClassKind::Class | ClassKind::Primitive | ClassKind::Array => {}
        }
        self
    }

    /// Replace the modifiers. Interface bits added by [`ClassBuilder::kind`] are kept.
    pub fn modifiers(&mut self, modifiers: Modifiers) -> &mut Self {
        let interface = self
            .draft
            .modifiers
            .intersection(Modifiers::INTERFACE | Modifiers::ABSTRACT);
        self.draft.modifiers = if self.draft.is_interface() {
            modifiers | interface
        } else {
            modifiers
        };
        self
    }

    /// Mark the class as nested. Local and anonymous classes have no canonical name; their
    /// simple name drops the compiler-generated index (`Outer$1Local` -> `Local`, `Outer$1` -> ``).
    pub fn nesting(&mut self, nesting: Nesting) -> &mut Self {
        self.draft.nesting = nesting;
        match nesting {
            Nesting::TopLevel | Nesting::Member { .. } => {}
            Nesting::Local { .. } | Nesting::Anonymous { .. } => {
                self.draft.canonical_name = None;
                let local = self
                    .draft
                    .binary_name
                    .rsplit('$')
                    .next()
                    .unwrap_or_default();
                self.draft.simple_name = local
                    .trim_start_matches(|c: char| c.is_ascii_digit())
                    .to_string();
            }
        }
        self
    }

    pub fn synthetic(&mut self) -> &mut Self {
        self.draft.synthetic = true;
        self
    }

    /// Declare a class type parameter without bounds.
    pub fn type_param(&mut self, name: &str) -> RawType {
        self.type_param_with(name, |_| Vec::new())
    }

    /// Declare a class type parameter whose bounds may mention the parameter itself.
    pub fn type_param_with(
        &mut self,
        name: &str,
        bounds: impl FnOnce(&RawType) -> Vec<RawType>,
    ) -> RawType {
        push_type_param(
            &mut self.draft.type_params,
            GenericOwner::Class(self.id),
            name,
            bounds,
        )
    }

    /// Set the generic super class.
    pub fn extends(&mut self, super_class: RawType) -> &mut Self {
        self.draft.super_class = Some(super_class);
        self
    }

    pub fn implements(&mut self, interface: RawType) -> &mut Self {
        self.draft.interfaces.push(interface);
        self
    }

    pub fn field(&mut self, name: &str, modifiers: Modifiers, ty: RawType) -> &mut RawField {
        self.draft.fields.push(RawField {
            name: name.to_string(),
            modifiers,
            ty,
            annotations: Vec::new(),
        });
        let idx = self.draft.fields.len() - 1;
        &mut self.draft.fields[idx]
    }

    pub fn method(
        &mut self,
        name: &str,
        modifiers: Modifiers,
        f: impl FnOnce(&mut MethodBuilder<'_>),
    ) -> &mut Self {
        let void = self.universe.primitive("void").map(RawType::Class);
        let mut builder = MethodBuilder {
            universe: &mut *self.universe,
            owner: GenericOwner::Method {
                class: self.id,
                index: self.draft.methods.len(),
            },
            raw: RawMethod {
                name: name.to_string(),
                modifiers,
                type_params: Vec::new(),
                return_type: void.unwrap_or_else(|| RawType::Other("void".to_string())),
                params: Vec::new(),
                exceptions: Vec::new(),
                bridge: false,
                annotations: Vec::new(),
            },
        };
        f(&mut builder);
        let raw = builder.raw;
        self.draft.methods.push(raw);
        self
    }

    pub fn constructor(
        &mut self,
        modifiers: Modifiers,
        f: impl FnOnce(&mut ConstructorBuilder<'_>),
    ) -> &mut Self {
        let mut builder = ConstructorBuilder {
            universe: &mut *self.universe,
            owner: GenericOwner::Constructor {
                class: self.id,
                index: self.draft.constructors.len(),
            },
            raw: RawConstructor {
                modifiers,
                type_params: Vec::new(),
                params: Vec::new(),
                exceptions: Vec::new(),
                annotations: Vec::new(),
            },
        };
        f(&mut builder);
        let raw = builder.raw;
        self.draft.constructors.push(raw);
        self
    }

    pub fn enum_constant(&mut self, name: &str) -> &mut Self {
        self.draft.enum_constants.push(name.to_string());
        self
    }

    pub fn annotate(&mut self, annotation: Annotation) -> &mut Self {
        self.draft.annotations.push(annotation);
        self
    }

    pub fn array_of(&mut self, component: RawClassId) -> RawType {
        RawType::Class(self.universe.array_of(component))
    }

    pub fn class_id(&self, binary_name: &str) -> Option<RawClassId> {
        self.universe.class_id(binary_name)
    }
}

fn push_type_param(
    params: &mut Vec<RawTypeParam>,
    owner: GenericOwner,
    name: &str,
    bounds: impl FnOnce(&RawType) -> Vec<RawType>,
) -> RawType {
    let var = RawType::TypeVariable(RawTypeVarRef {
        owner,
        index: params.len(),
    });
    let mut param = RawTypeParam::new(name);
    param.bounds = bounds(&var);
    params.push(param);
    var
}

fn parameter(name: &str, ty: RawType) -> RawParameter {
    RawParameter {
        name: name.to_string(),
        ty,
        annotations: Vec::new(),
    }
}

/// Builds a method; the return type defaults to `void`.
pub struct MethodBuilder<'u> {
    universe: &'u mut ClassUniverse,
    owner: GenericOwner,
    raw: RawMethod,
}

impl MethodBuilder<'_> {
    pub fn type_param(&mut self, name: &str) -> RawType {
        self.type_param_with(name, |_| Vec::new())
    }

    pub fn type_param_with(
        &mut self,
        name: &str,
        bounds: impl FnOnce(&RawType) -> Vec<RawType>,
    ) -> RawType {
        push_type_param(&mut self.raw.type_params, self.owner, name, bounds)
    }

    pub fn returns(&mut self, ty: RawType) -> &mut Self {
        self.raw.return_type = ty;
        self
    }

    pub fn param(&mut self, name: &str, ty: RawType) -> &mut Self {
        self.raw.params.push(parameter(name, ty));
        self
    }

    pub fn annotated_param(&mut self, name: &str, ty: RawType, annotation: Annotation) -> &mut Self {
        let mut param = parameter(name, ty);
        param.annotations.push(annotation);
        self.raw.params.push(param);
        self
    }

    pub fn throws(&mut self, ty: RawType) -> &mut Self {
        self.raw.exceptions.push(ty);
        self
    }

    pub fn bridge(&mut self) -> &mut Self {
        self.raw.bridge = true;
        self
    }

    pub fn annotate(&mut self, annotation: Annotation) -> &mut Self {
        self.raw.annotations.push(annotation);
        self
    }

    pub fn array_of(&mut self, component: RawClassId) -> RawType {
        RawType::Class(self.universe.array_of(component))
    }
}

pub struct ConstructorBuilder<'u> {
    universe: &'u mut ClassUniverse,
    owner: GenericOwner,
    raw: RawConstructor,
}

impl ConstructorBuilder<'_> {
    pub fn type_param(&mut self, name: &str) -> RawType {
        self.type_param_with(name, |_| Vec::new())
    }

    pub fn type_param_with(
        &mut self,
        name: &str,
        bounds: impl FnOnce(&RawType) -> Vec<RawType>,
    ) -> RawType {
        push_type_param(&mut self.raw.type_params, self.owner, name, bounds)
    }

    pub fn param(&mut self, name: &str, ty: RawType) -> &mut Self {
        self.raw.params.push(parameter(name, ty));
        self
    }

    pub fn throws(&mut self, ty: RawType) -> &mut Self {
        self.raw.exceptions.push(ty);
        self
    }

    pub fn annotate(&mut self, annotation: Annotation) -> &mut Self {
        self.raw.annotations.push(annotation);
        self
    }

    pub fn array_of(&mut self, component: RawClassId) -> RawType {
        RawType::Class(self.universe.array_of(component))
    }
}
