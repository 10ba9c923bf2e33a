use crate::adapters::registry::ServiceRegistry;
use crate::domain::ports::{EntityManager, Executor, Fixture, FixtureLoader, Purger};
use crate::utils::error::Result;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug)]
pub struct NullEntityManager;

impl EntityManager for NullEntityManager {
    fn connection_name(&self) -> &str {
        "default"
    }
}

#[derive(Debug)]
pub struct EmptyLoader;

impl FixtureLoader for EmptyLoader {
    fn load_from_directory(&self, _dir: &Path) -> Result<usize> {
        Ok(0)
    }

    fn fixtures(&self) -> Vec<Arc<dyn Fixture>> {
        Vec::new()
    }
}

#[derive(Debug)]
pub struct NoopPurger;

impl Purger for NoopPurger {
    fn purge(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug)]
pub struct NoopExecutor;

impl Executor for NoopExecutor {
    fn execute(&self, _fixtures: &[Arc<dyn Fixture>], _append: bool) -> Result<()> {
        Ok(())
    }
}

pub fn entity_manager() -> Arc<dyn EntityManager> {
    Arc::new(NullEntityManager)
}

pub fn purger() -> Arc<dyn Purger> {
    Arc::new(NoopPurger)
}

pub fn full_registry(config: serde_json::Value) -> ServiceRegistry {
    ServiceRegistry::new()
        .with_entity_manager(entity_manager())
        .with_loader(Arc::new(EmptyLoader))
        .with_purger(purger())
        .with_executor(Arc::new(NoopExecutor))
        .with_config(config)
}
