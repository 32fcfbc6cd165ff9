use crate::{
    RegistryConfig, RegistryError, RegistryHandlers, RegistryIdRequirements, RegistryResult,
};
use std::{collections::HashMap, fmt::Debug, iter::Zip, slice::Iter};

/// Keyed collection of objects that remembers insertion order and notifies
/// handlers after entries are added or removed.
///
/// `ids` and `objects` are index aligned: `objects[i]` is registered under `ids[i]`
/// and `indices[&ids[i]] == i`. Removal goes through `indices` so equal objects
/// registered under different ids are never confused.
///
/// Handlers run synchronously before the mutating call returns. They can't borrow
/// the registry dispatching to them; reaching it through a lock captured by the
/// handler itself will deadlock and isn't supported.
pub struct Registry<I, O> {
    indices: HashMap<I, usize>,
    ids: Vec<I>,
    objects: Vec<O>,
    addition_handlers: RegistryHandlers<I, O>,
    removal_handlers: RegistryHandlers<I, O>,
}

impl<I: RegistryIdRequirements, O> Registry<I, O> {
    pub fn new() -> Self {
        Self::from_config(RegistryConfig::default())
    }

    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::from_config(initial_capacity)
    }

    pub fn from_config(config: impl Into<RegistryConfig>) -> Self {
        let config = config.into();
        Self {
            indices: HashMap::with_capacity(config.initial_capacity),
            ids: Vec::with_capacity(config.initial_capacity),
            objects: Vec::with_capacity(config.initial_capacity),
            addition_handlers: RegistryHandlers::new(),
            removal_handlers: RegistryHandlers::new(),
        }
    }

    pub fn contains_id(&self, id: &I) -> bool {
        self.indices.contains_key(id)
    }

    /// Linear scan using `PartialEq` of the objects
    pub fn contains_object(&self, object: &O) -> bool
    where
        O: PartialEq,
    {
        self.objects.contains(object)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn get(&self, id: &I) -> RegistryResult<&O, I> {
        self.get_opt(id)
            .ok_or_else(|| RegistryError::IdNotFound(id.clone()))
    }

    /// Get the object registered under `id`, or `fallback` if there is none
    pub fn get_or<'a>(&'a self, id: &I, fallback: &'a O) -> &'a O {
        self.get_opt(id).unwrap_or(fallback)
    }

    pub fn get_opt(&self, id: &I) -> Option<&O> {
        self.indices.get(id).map(|&index| &self.objects[index])
    }

    /// All objects in insertion order
    pub fn get_all(&self) -> &[O] {
        &self.objects
    }

    /// All ids in insertion order, aligned with `get_all`
    pub fn get_all_ids(&self) -> &[I] {
        &self.ids
    }

    /// `(id, object)` pairs in insertion order
    pub fn iter(&self) -> Zip<Iter<'_, I>, Iter<'_, O>> {
        self.ids.iter().zip(self.objects.iter())
    }

    /// Register `object` under `id`, then run the addition handlers.
    /// An existing id is never overwritten and leaves the registry untouched
    pub fn add(&mut self, id: I, object: O) -> RegistryResult<&O, I> {
        if self.indices.contains_key(&id) {
            return Err(RegistryError::IdExists(id));
        }
        Ok(self.insert(id, object))
    }

    /// Register `object` under `id` unless the id is taken, in which case the
    /// already registered object is returned and `object` is dropped
    pub fn add_if_absent(&mut self, id: I, object: O) -> &O {
        if let Some(&index) = self.indices.get(&id) {
            return &self.objects[index];
        }
        self.insert(id, object)
    }

    /// Remove the entry under `id` and run the removal handlers. Absent ids are ignored
    pub fn remove(&mut self, id: &I) -> &mut Self {
        self.take(id);
        self
    }

    /// Remove the entry under `id`, run the removal handlers and hand the entry back
    pub fn take(&mut self, id: &I) -> Option<(I, O)> {
        let (id, object) = self.detach(id)?;
        if !self.removal_handlers.is_empty() {
            self.removal_handlers.handle(&id, &object);
        }
        Some((id, object))
    }

    /// Remove every entry. State is emptied first, then the removal handlers run once per
    /// former entry in insertion order
    pub fn clear(&mut self) {
        let ids = std::mem::take(&mut self.ids);
        let objects = std::mem::take(&mut self.objects);
        self.indices.clear();
        tracing::debug!(
            object_type = %tynm::type_name::<O>(),
            count = ids.len(),
            "cleared registry"
        );

        if !self.removal_handlers.is_empty() {
            for (id, object) in ids.iter().zip(objects.iter()) {
                self.removal_handlers.handle(id, object);
            }
        }
    }

    pub fn addition_handlers(&self) -> &RegistryHandlers<I, O> {
        &self.addition_handlers
    }

    pub fn addition_handlers_mut(&mut self) -> &mut RegistryHandlers<I, O> {
        &mut self.addition_handlers
    }

    pub fn removal_handlers(&self) -> &RegistryHandlers<I, O> {
        &self.removal_handlers
    }

    pub fn removal_handlers_mut(&mut self) -> &mut RegistryHandlers<I, O> {
        &mut self.removal_handlers
    }

    /// Caller must have checked `id` is absent
    fn insert(&mut self, id: I, object: O) -> &O {
        let index = self.objects.len();
        self.indices.insert(id.clone(), index);
        self.ids.push(id);
        self.objects.push(object);
        tracing::trace!(
            object_type = %tynm::type_name::<O>(),
            id = ?self.ids[index],
            index,
            "registered object"
        );

        if !self.addition_handlers.is_empty() {
            self.addition_handlers
                .handle(&self.ids[index], &self.objects[index]);
        }
        &self.objects[index]
    }

    /// Unlink the entry under `id` from all three containers and shift the
    /// cached indices of every later entry down by one
    fn detach(&mut self, id: &I) -> Option<(I, O)> {
        let index = self.indices.remove(id)?;
        let id = self.ids.remove(index);
        let object = self.objects.remove(index);
        for cached in self.indices.values_mut() {
            if *cached > index {
                *cached -= 1;
            }
        }
        tracing::trace!(
            object_type = %tynm::type_name::<O>(),
            id = ?id,
            index,
            "removed object"
        );
        Some((id, object))
    }
}

impl<I, O> Default for Registry<I, O> {
    fn default() -> Self {
        Self {
            indices: HashMap::new(),
            ids: Vec::new(),
            objects: Vec::new(),
            addition_handlers: RegistryHandlers::new(),
            removal_handlers: RegistryHandlers::new(),
        }
    }
}

impl<'a, I: RegistryIdRequirements, O> IntoIterator for &'a Registry<I, O> {
    type Item = (&'a I, &'a O);
    type IntoIter = Zip<Iter<'a, I>, Iter<'a, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I: Debug, O: Debug> Debug for Registry<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("ids", &self.ids)
            .field("objects", &self.objects)
            .field("addition_handlers", &self.addition_handlers)
            .field("removal_handlers", &self.removal_handlers)
            .finish()
    }
}
