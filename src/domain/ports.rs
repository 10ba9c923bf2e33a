use crate::domain::model::Service;
use crate::utils::error::{ContainerError, Result};
use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

/// Service lookup boundary consumed by the factory.
///
/// Keys are plain strings: either a [`ServiceId`](crate::domain::model::ServiceId)
/// key or a reserved name such as [`CONFIG_KEY`](crate::domain::model::CONFIG_KEY).
pub trait ServiceContainer {
    fn has(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> std::result::Result<Service, ContainerError>;
}

/// Persistence session the fixtures are written through.
pub trait EntityManager: Debug + Send + Sync {
    fn connection_name(&self) -> &str;
}

pub trait Fixture: Debug + Send + Sync {
    fn name(&self) -> &str;
    fn load(&self, manager: &dyn EntityManager) -> Result<()>;
}

pub trait FixtureLoader: Debug + Send + Sync {
    /// Discovers fixtures under `dir`, returning how many were added.
    fn load_from_directory(&self, dir: &Path) -> Result<usize>;
    fn fixtures(&self) -> Vec<Arc<dyn Fixture>>;
}

pub trait Purger: Debug + Send + Sync {
    fn purge(&self) -> Result<()>;
}

pub trait Executor: Debug + Send + Sync {
    fn execute(&self, fixtures: &[Arc<dyn Fixture>], append: bool) -> Result<()>;
}
