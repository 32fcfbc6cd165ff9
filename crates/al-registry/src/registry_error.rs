use std::fmt::Debug;
use thiserror::Error;

/// Result alias for fallible `Registry` operations
pub type RegistryResult<T, I> = Result<T, RegistryError<I>>;

/// Error type for `Registry` lookups and insertions, carrying the offending id
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError<I: Debug> {
    /// Returned by `Registry::get` when nothing is registered under the id
    #[error("Id \"{0:?}\" not found in registry")]
    IdNotFound(I),
    /// Returned by `Registry::add` when the id is already registered
    #[error("Id \"{0:?}\" already exists in registry")]
    IdExists(I),
}

impl<I: Debug> RegistryError<I> {
    /// The id that caused the error
    pub fn id(&self) -> &I {
        match self {
            RegistryError::IdNotFound(id) | RegistryError::IdExists(id) => id,
        }
    }
}
