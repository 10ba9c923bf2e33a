pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::registry::ServiceRegistry;
pub use config::CliConfig;
pub use core::factory::{create_fixtures_command, ExecuteFixturesCommandFactory};
pub use domain::model::{FixturesCommand, Service, ServiceId, CONFIG_KEY};
pub use domain::ports::{EntityManager, Executor, Fixture, FixtureLoader, Purger, ServiceContainer};
pub use utils::error::{ContainerError, FixturesError, Result};
