mod handler;
mod handlers;
mod markers;
mod registry;
mod registry_config;
mod registry_error;

pub use handler::RegistryHandler;
pub use handlers::RegistryHandlers;
pub use markers::HandlerFn;
pub use markers::RegistryIdRequirements;
pub use registry::Registry;
pub use registry_config::RegistryConfig;
pub use registry_error::RegistryError;
pub use registry_error::RegistryResult;
