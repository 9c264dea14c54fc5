use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("resource '{name}' is already registered with different contents")]
    Duplicate { name: String },

    #[error("resource '{name}' not found")]
    NotFound { name: String },
}
