use std::{fmt::Debug, hash::Hash};

mod sealed {
    /// Private marker trait ensures all required traits are impl'd for registry ids
    pub trait RegistryIdMarker: Eq + std::hash::Hash + Clone + std::fmt::Debug {}
}

/// `RegistryIdRequirements` is auto impl'd for any type usable as a `Registry` key.
/// Ids are stored twice (lookup map and ordered list), so they must be `Clone`
pub trait RegistryIdRequirements: sealed::RegistryIdMarker {}
impl<T: Eq + Hash + Clone + Debug> sealed::RegistryIdMarker for T {}
impl<T: sealed::RegistryIdMarker> RegistryIdRequirements for T {}

/// Callback invoked by a `RegistryHandler` with the id and object of a mutated entry
pub trait HandlerFn<I, O>: Fn(&I, &O) + Send + Sync {}
impl<I, O, F: Fn(&I, &O) + Send + Sync> HandlerFn<I, O> for F {}
