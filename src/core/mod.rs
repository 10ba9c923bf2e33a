pub mod assembler;
pub mod config_path;
pub mod factory;
pub mod resolver;

#[cfg(test)]
pub(crate) mod stubs;

pub use crate::domain::model::{FixturesCommand, Service, ServiceId, CONFIG_KEY};
pub use crate::domain::ports::{EntityManager, Executor, Fixture, FixtureLoader, Purger, ServiceContainer};
pub use crate::utils::error::Result;
