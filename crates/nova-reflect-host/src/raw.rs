use std::fmt;

use crate::{Annotated, Annotation, Modifiers};

/// Identity of a raw class inside a [`crate::TypeHost`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawClassId(u32);

impl RawClassId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for RawClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawClassId({})", self.0)
    }
}

/// The element that declares a type variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericOwner {
    Class(RawClassId),
    Method { class: RawClassId, index: usize },
    Constructor { class: RawClassId, index: usize },
}

impl GenericOwner {
    pub fn class(self) -> RawClassId {
        match self {
            GenericOwner::Class(class)
            | GenericOwner::Method { class, .. }
            | GenericOwner::Constructor { class, .. } => class,
        }
    }
}

/// A reference to the `index`-th type parameter of `owner`.
///
/// Type variables are referenced rather than embedded so that bounds may mention the variable
/// itself (`T extends Comparable<T>`) without making raw types cyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTypeVarRef {
    pub owner: GenericOwner,
    pub index: usize,
}

/// Raw type handle shapes, as supplied by the host reflection facility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawType {
    /// A class, interface, primitive or array class.
    Class(RawClassId),
    /// `raw<args...>`.
    Parameterized { raw: RawClassId, args: Vec<RawType> },
    TypeVariable(RawTypeVarRef),
    /// `? extends upper & ...` / `? super lower & ...`. An unbounded wildcard has no bounds (or
    /// only `java.lang.Object` as its upper bound).
    Wildcard { upper: Vec<RawType>, lower: Vec<RawType> },
    /// An array whose element type is generic, e.g. `T[]` or `List<String>[]`.
    GenericArray(Box<RawType>),
    /// Any host shape outside of the five above (intersection types, annotated types, ...).
    Other(String),
}

impl RawType {
    pub fn class(id: RawClassId) -> Self {
        RawType::Class(id)
    }

    pub fn parameterized(raw: RawClassId, args: Vec<RawType>) -> Self {
        RawType::Parameterized { raw, args }
    }

    /// `?`
    pub fn wildcard() -> Self {
        RawType::Wildcard {
            upper: Vec::new(),
            lower: Vec::new(),
        }
    }

    /// `? extends bound`
    pub fn wildcard_extends(bound: RawType) -> Self {
        RawType::Wildcard {
            upper: vec![bound],
            lower: Vec::new(),
        }
    }

    /// `? super bound`
    pub fn wildcard_super(bound: RawType) -> Self {
        RawType::Wildcard {
            upper: Vec::new(),
            lower: vec![bound],
        }
    }

    /// `element[]` for a generic element type.
    pub fn generic_array(element: RawType) -> Self {
        RawType::GenericArray(Box::new(element))
    }

    /// Short name of the shape, used in diagnostics.
    pub fn shape(&self) -> &str {
        match self {
            RawType::Class(_) => "Class",
            RawType::Parameterized { .. } => "ParameterizedType",
            RawType::TypeVariable(_) => "TypeVariable",
            RawType::Wildcard { .. } => "WildcardType",
            RawType::GenericArray(_) => "GenericArrayType",
            RawType::Other(shape) => shape,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawTypeParam {
    pub name: String,
    /// Declared bounds. An empty list (or just `java.lang.Object`) means unbounded.
    pub bounds: Vec<RawType>,
    pub annotations: Vec<Annotation>,
}

impl RawTypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
    Primitive,
    Array,
}

/// Where a class is declared relative to other classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Nesting {
    #[default]
    TopLevel,
    Member { enclosing: RawClassId },
    Local { enclosing: RawClassId },
    Anonymous { enclosing: RawClassId },
}

impl Nesting {
    pub fn enclosing(self) -> Option<RawClassId> {
        match self {
            Nesting::TopLevel => None,
            Nesting::Member { enclosing }
            | Nesting::Local { enclosing }
            | Nesting::Anonymous { enclosing } => Some(enclosing),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawClass {
    /// `Class.getName()`: `java.util.Map$Entry`, `[Ljava.lang.String;`, `int`.
    pub binary_name: String,
    /// `Class.getCanonicalName()`; absent for anonymous and local classes.
    pub canonical_name: Option<String>,
    pub simple_name: String,
    /// Empty for the default package, primitives and arrays.
    pub package: String,
    pub modifiers: Modifiers,
    pub kind: ClassKind,
    pub nesting: Nesting,
    pub synthetic: bool,
    /// Component class of an array class.
    pub component: Option<RawClassId>,
    pub type_params: Vec<RawTypeParam>,
    /// Generic super class; `None` for `java.lang.Object`, interfaces and primitives.
    pub super_class: Option<RawType>,
    pub interfaces: Vec<RawType>,
    pub fields: Vec<RawField>,
    pub constructors: Vec<RawConstructor>,
    pub methods: Vec<RawMethod>,
    pub enum_constants: Vec<String>,
    pub annotations: Vec<Annotation>,
}

impl RawClass {
    /// A class shell derived from its binary name (`pkg.Outer$Inner`), with no members.
    pub fn named(binary_name: &str) -> Self {
        let (package, local) = match binary_name.rfind('.') {
            Some(dot) => (&binary_name[..dot], &binary_name[dot + 1..]),
            None => ("", binary_name),
        };
        let simple_name = local.rsplit('$').next().unwrap_or(local).to_string();
        Self {
            binary_name: binary_name.to_string(),
            canonical_name: Some(binary_name.replace('$', ".")),
            simple_name,
            package: package.to_string(),
            modifiers: Modifiers::PUBLIC,
            kind: ClassKind::Class,
            nesting: Nesting::TopLevel,
            synthetic: false,
            component: None,
            type_params: Vec::new(),
            super_class: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            enum_constants: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, ClassKind::Interface | ClassKind::Annotation)
    }
}

impl Annotated for RawClass {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    pub name: String,
    pub modifiers: Modifiers,
    pub ty: RawType,
    pub annotations: Vec<Annotation>,
}

impl Annotated for RawField {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawParameter {
    pub name: String,
    pub ty: RawType,
    pub annotations: Vec<Annotation>,
}

impl Annotated for RawParameter {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawMethod {
    pub name: String,
    pub modifiers: Modifiers,
    pub type_params: Vec<RawTypeParam>,
    pub return_type: RawType,
    pub params: Vec<RawParameter>,
    pub exceptions: Vec<RawType>,
    /// Compiler-generated bridge method.
    pub bridge: bool,
    pub annotations: Vec<Annotation>,
}

impl Annotated for RawMethod {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawConstructor {
    pub modifiers: Modifiers,
    pub type_params: Vec<RawTypeParam>,
    pub params: Vec<RawParameter>,
    pub exceptions: Vec<RawType>,
    pub annotations: Vec<Annotation>,
}

impl Annotated for RawConstructor {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl Annotated for RawTypeParam {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}
