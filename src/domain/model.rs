use crate::domain::ports::{EntityManager, Executor, FixtureLoader, Purger};
use crate::utils::error::Result;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Reserved container key holding the application configuration blob.
pub const CONFIG_KEY: &str = "config";

/// The collaborators the fixtures command needs, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceId {
    EntityManager,
    Loader,
    Purger,
    Executor,
}

impl ServiceId {
    pub const REQUIRED: [ServiceId; 4] = [
        ServiceId::EntityManager,
        ServiceId::Loader,
        ServiceId::Purger,
        ServiceId::Executor,
    ];

    /// Container key, also used in error messages.
    pub fn key(self) -> &'static str {
        match self {
            ServiceId::EntityManager => "EntityManager",
            ServiceId::Loader => "Loader",
            ServiceId::Purger => "ORMPurger",
            ServiceId::Executor => "ORMExecutor",
        }
    }

    /// Matches [`Service::kind`] of the service registered under this id.
    pub fn kind(self) -> &'static str {
        match self {
            ServiceId::EntityManager => "entity manager",
            ServiceId::Loader => "fixture loader",
            ServiceId::Purger => "purger",
            ServiceId::Executor => "executor",
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A value stored in a service container.
#[derive(Debug, Clone)]
pub enum Service {
    EntityManager(Arc<dyn EntityManager>),
    Loader(Arc<dyn FixtureLoader>),
    Purger(Arc<dyn Purger>),
    Executor(Arc<dyn Executor>),
    /// `Value::Null` when the key is registered without data.
    Config(serde_json::Value),
}

impl Service {
    pub fn kind(&self) -> &'static str {
        match self {
            Service::EntityManager(_) => "entity manager",
            Service::Loader(_) => "fixture loader",
            Service::Purger(_) => "purger",
            Service::Executor(_) => "executor",
            Service::Config(_) => "configuration",
        }
    }

    pub fn into_entity_manager(self) -> Option<Arc<dyn EntityManager>> {
        match self {
            Service::EntityManager(manager) => Some(manager),
            _ => None,
        }
    }

    pub fn into_loader(self) -> Option<Arc<dyn FixtureLoader>> {
        match self {
            Service::Loader(loader) => Some(loader),
            _ => None,
        }
    }

    pub fn into_purger(self) -> Option<Arc<dyn Purger>> {
        match self {
            Service::Purger(purger) => Some(purger),
            _ => None,
        }
    }

    pub fn into_executor(self) -> Option<Arc<dyn Executor>> {
        match self {
            Service::Executor(executor) => Some(executor),
            _ => None,
        }
    }

    pub fn into_config(self) -> Option<serde_json::Value> {
        match self {
            Service::Config(value) => Some(value),
            _ => None,
        }
    }
}

/// Everything needed to load, purge and execute the fixtures of one directory.
///
/// Built only with all four collaborators and a resolved path; there is no
/// partially wired state.
#[derive(Debug, Clone)]
pub struct FixturesCommand {
    entity_manager: Arc<dyn EntityManager>,
    loader: Arc<dyn FixtureLoader>,
    purger: Arc<dyn Purger>,
    executor: Arc<dyn Executor>,
    path: String,
}

impl FixturesCommand {
    pub const NAME: &'static str = "fixtures:execute";

    pub fn new(
        entity_manager: Arc<dyn EntityManager>,
        loader: Arc<dyn FixtureLoader>,
        purger: Arc<dyn Purger>,
        executor: Arc<dyn Executor>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            entity_manager,
            loader,
            purger,
            executor,
            path: path.into(),
        }
    }

    pub fn entity_manager(&self) -> &Arc<dyn EntityManager> {
        &self.entity_manager
    }

    pub fn loader(&self) -> &Arc<dyn FixtureLoader> {
        &self.loader
    }

    pub fn purger(&self) -> &Arc<dyn Purger> {
        &self.purger
    }

    pub fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Loads the fixtures under [`path`](Self::path) and hands them to the executor.
    ///
    /// Without `append` the purger clears existing data first. Returns the
    /// number of fixtures executed.
    pub fn run(&self, append: bool) -> Result<usize> {
        let discovered = self.loader.load_from_directory(Path::new(&self.path))?;
        tracing::debug!("Loader discovered {} fixture(s) in {}", discovered, self.path);

        let fixtures = self.loader.fixtures();
        if fixtures.is_empty() {
            tracing::warn!("No fixtures found in {}", self.path);
            return Ok(0);
        }

        if append {
            tracing::info!("Appending fixtures, existing data is kept");
        } else {
            tracing::info!(
                "Purging database on connection {}",
                self.entity_manager.connection_name()
            );
            self.purger.purge()?;
        }

        self.executor.execute(&fixtures, append)?;

        tracing::info!("Executed {} fixture(s)", fixtures.len());
        Ok(fixtures.len())
    }
}
