use crate::{HandlerFn, RegistryHandler};
use std::fmt::Debug;

/// An ordered group of `RegistryHandler`s, kept sorted by ascending priority.
/// Handlers sharing a priority run in the order they were added
pub struct RegistryHandlers<I, O> {
    handlers: Vec<RegistryHandler<I, O>>,
}

impl<I, O> RegistryHandlers<I, O> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// `sort_by` is stable so equal priorities keep their insertion order.
    /// `total_cmp` places NaN priorities after every other value
    fn reorder_handlers(&mut self) {
        self.handlers
            .sort_by(|a, b| a.priority().total_cmp(&b.priority()));
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Priorities of the held handlers in the order they will run
    pub fn priorities(&self) -> impl Iterator<Item = f32> + '_ {
        self.handlers.iter().map(RegistryHandler::priority)
    }

    pub fn add(&mut self, handler: RegistryHandler<I, O>) -> &mut Self {
        tracing::debug!(
            priority = handler.priority(),
            count = self.handlers.len() + 1,
            "adding registry handler"
        );
        self.handlers.push(handler);
        self.reorder_handlers();
        self
    }

    pub fn add_fn(
        &mut self,
        priority: f32,
        handler: impl HandlerFn<I, O> + 'static,
    ) -> &mut Self {
        self.add(RegistryHandler::new(priority, handler))
    }

    /// Run every handler in priority order.
    /// A panicking handler unwinds straight to the caller and the remaining handlers are skipped
    pub fn handle(&self, id: &I, object: &O) -> &Self {
        for handler in self.handlers.iter() {
            handler.handle(id, object);
        }
        self
    }
}

impl<I, O> Default for RegistryHandlers<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Debug for RegistryHandlers<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryHandlers")
            .field("handlers", &self.handlers)
            .finish()
    }
}
