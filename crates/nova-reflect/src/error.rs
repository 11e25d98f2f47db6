use thiserror::Error;

pub type Result<T, E = ReflectError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// A lookup by binary name found no class.
    #[error("`{name}` is not found")]
    NotFound { name: String },
    /// A raw type handle outside the five modeled shapes.
    #[error("`{shape}` is not supported")]
    UnsupportedKind { shape: String },
}
