use models::{Customer, Entity};
use service::ResourceService;

/// Per-process application state, built once at startup and handed to the
/// router. Tests build their own isolated instances.
#[derive(Clone)]
pub struct AppState {
    pub customers: ResourceService<Customer>,
    pub entities: ResourceService<Entity>,
}

impl AppState {
    pub fn new(customers: ResourceService<Customer>, entities: ResourceService<Entity>) -> Self {
        Self { customers, entities }
    }

    /// Empty in-memory stores for both resources.
    pub fn in_memory() -> Self {
        Self::new(ResourceService::in_memory(), ResourceService::in_memory())
    }
}
