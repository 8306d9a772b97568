use crate::domain::ScaffoldConfig;
use crate::ports::ScaffoldStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ScaffoldStore> {
    store: S,
    config: ScaffoldConfig,
}

impl<S: ScaffoldStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S, config: ScaffoldConfig) -> Self {
        Self { store, config }
    }

    /// Get a reference to the scaffold store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }
}
