use crate::domain::model::{Service, ServiceId, CONFIG_KEY};
use crate::domain::ports::{EntityManager, Executor, FixtureLoader, Purger, ServiceContainer};
use crate::utils::error::ContainerError;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory service container keyed by string.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: HashMap<String, Service>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `service` under `key`, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, service: Service) -> &mut Self {
        let key = key.into();
        tracing::debug!("Registering {} under `{}`", service.kind(), key);
        self.services.insert(key, service);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Service> {
        self.services.remove(key)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn with_entity_manager(mut self, manager: Arc<dyn EntityManager>) -> Self {
        self.register(ServiceId::EntityManager.key(), Service::EntityManager(manager));
        self
    }

    pub fn with_loader(mut self, loader: Arc<dyn FixtureLoader>) -> Self {
        self.register(ServiceId::Loader.key(), Service::Loader(loader));
        self
    }

    pub fn with_purger(mut self, purger: Arc<dyn Purger>) -> Self {
        self.register(ServiceId::Purger.key(), Service::Purger(purger));
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.register(ServiceId::Executor.key(), Service::Executor(executor));
        self
    }

    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.register(CONFIG_KEY, Service::Config(config));
        self
    }
}

impl ServiceContainer for ServiceRegistry {
    fn has(&self, key: &str) -> bool {
        self.services.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<Service, ContainerError> {
        self.services
            .get(key)
            .cloned()
            .ok_or_else(|| ContainerError::NotRegistered {
                key: key.to_string(),
            })
    }
}
