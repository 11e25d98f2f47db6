/// An annotation attached to a raw element.
///
/// Values are carried through untouched; nothing in the reflection model interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Binary name of the annotation type, e.g. `java.lang.Deprecated`.
    pub type_name: String,
    pub elements: Vec<(String, ElementValue)>,
}

impl Annotation {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, name: impl Into<String>, value: ElementValue) -> Self {
        self.elements.push((name.into(), value));
        self
    }

    pub fn element(&self, name: &str) -> Option<&ElementValue> {
        self.elements
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    Const(ConstValue),
    Enum { type_name: String, const_name: String },
    Class(String),
    Annotation(Box<Annotation>),
    Array(Vec<ElementValue>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    String(String),
}

/// Something annotations can be read from.
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];

    fn annotation(&self, type_name: &str) -> Option<&Annotation> {
        self.annotations().iter().find(|a| a.type_name == type_name)
    }

    fn has_annotation(&self, type_name: &str) -> bool {
        self.annotation(type_name).is_some()
    }
}
