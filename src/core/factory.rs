use crate::core::{assembler, config_path, resolver};
use crate::domain::model::FixturesCommand;
use crate::domain::ports::ServiceContainer;
use crate::utils::error::Result;

/// Builds a [`FixturesCommand`] out of a service container.
///
/// Stateless: every call performs the full lookup sequence and returns a new
/// command.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecuteFixturesCommandFactory;

impl ExecuteFixturesCommandFactory {
    pub fn new() -> Self {
        Self
    }

    /// Presence checks, then `doctrine.fixtures`, then retrieval and assembly.
    ///
    /// The first missing piece aborts with a `NotFound` error naming it.
    pub fn create<C: ServiceContainer + ?Sized>(&self, container: &C) -> Result<FixturesCommand> {
        resolver::ensure_registered(container)?;
        let path = config_path::fixtures_path(container)?;
        let command = assembler::assemble(container, path)?;

        tracing::info!(
            "Created {} command for {}",
            FixturesCommand::NAME,
            command.path()
        );
        Ok(command)
    }
}

pub fn create_fixtures_command<C: ServiceContainer + ?Sized>(container: &C) -> Result<FixturesCommand> {
    ExecuteFixturesCommandFactory::new().create(container)
}
