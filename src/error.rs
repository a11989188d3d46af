use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Wiring mistakes caught when a registry is built. Classification itself
/// has no error path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Registry entry #{index} has an empty tag")]
    EmptyTag { index: usize },
    #[error("Tag '{0}' is produced by the built-in rules and cannot be registered")]
    ReservedTag(String),
    #[error("Tag '{0}' is registered more than once")]
    DuplicateTag(String),
}
