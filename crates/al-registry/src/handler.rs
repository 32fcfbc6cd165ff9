use crate::HandlerFn;
use std::{fmt::Debug, sync::Arc};

/// A callback paired with the priority it runs at. Lower priorities run first
pub struct RegistryHandler<I, O> {
    priority: f32,
    handler: Arc<dyn HandlerFn<I, O>>,
}

impl<I, O> RegistryHandler<I, O> {
    pub fn new(priority: f32, handler: impl HandlerFn<I, O> + 'static) -> Self {
        Self {
            priority,
            handler: Arc::new(handler),
        }
    }

    pub fn priority(&self) -> f32 {
        self.priority
    }

    pub fn handler(&self) -> &Arc<dyn HandlerFn<I, O>> {
        &self.handler
    }

    /// Run the callback against a registry entry
    pub fn handle(&self, id: &I, object: &O) -> &Self {
        (self.handler)(id, object);
        self
    }
}

impl<I, O> Clone for RegistryHandler<I, O> {
    fn clone(&self) -> Self {
        Self {
            priority: self.priority,
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<I, O> From<(f32, Arc<dyn HandlerFn<I, O>>)> for RegistryHandler<I, O> {
    fn from((priority, handler): (f32, Arc<dyn HandlerFn<I, O>>)) -> Self {
        Self { priority, handler }
    }
}

/// Impl Debug manually as `Fn()` doesn't support `Debug`
impl<I, O> Debug for RegistryHandler<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryHandler")
            .field("priority", &self.priority)
            .field("handler", &"<HandlerFn>")
            .finish()
    }
}
