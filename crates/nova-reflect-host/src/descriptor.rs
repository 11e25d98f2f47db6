use crate::raw::{ClassKind, RawClass};

/// JVM base types, including `void` so primitive classes can be looked up uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
    Void,
}

impl BaseType {
    pub const ALL: [BaseType; 9] = [
        BaseType::Byte,
        BaseType::Char,
        BaseType::Double,
        BaseType::Float,
        BaseType::Int,
        BaseType::Long,
        BaseType::Short,
        BaseType::Boolean,
        BaseType::Void,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            BaseType::Byte => "byte",
            BaseType::Char => "char",
            BaseType::Double => "double",
            BaseType::Float => "float",
            BaseType::Int => "int",
            BaseType::Long => "long",
            BaseType::Short => "short",
            BaseType::Boolean => "boolean",
            BaseType::Void => "void",
        }
    }

    pub fn descriptor(self) -> char {
        match self {
            BaseType::Byte => 'B',
            BaseType::Char => 'C',
            BaseType::Double => 'D',
            BaseType::Float => 'F',
            BaseType::Int => 'I',
            BaseType::Long => 'J',
            BaseType::Short => 'S',
            BaseType::Boolean => 'Z',
            BaseType::Void => 'V',
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<BaseType> {
        BaseType::ALL.into_iter().find(|ty| ty.keyword() == keyword)
    }
}

/// `Class.getName()` of an array whose component is `component`: `[I`, `[[I`,
/// `[Ljava.lang.String;`.
pub(crate) fn array_binary_name(component: &RawClass) -> String {
    match component.kind {
        ClassKind::Array => format!("[{}", component.binary_name),
        ClassKind::Primitive => match BaseType::from_keyword(&component.binary_name) {
            Some(base) => format!("[{}", base.descriptor()),
            None => format!("[L{};", component.binary_name),
        },
        _ => format!("[L{};", component.binary_name),
    }
}
