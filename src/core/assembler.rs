use crate::domain::model::{FixturesCommand, Service, ServiceId};
use crate::domain::ports::ServiceContainer;
use crate::utils::error::{ContainerError, Result};

fn fetch<C, T>(container: &C, id: ServiceId, pick: fn(Service) -> Option<T>) -> Result<T>
where
    C: ServiceContainer + ?Sized,
{
    let service = container.get(id.key())?;
    let found = service.kind();
    pick(service).ok_or_else(|| {
        ContainerError::TypeMismatch {
            key: id.key().to_string(),
            expected: id.kind(),
            found,
        }
        .into()
    })
}

/// Retrieves the four collaborators and builds the command around `path`.
///
/// Expects the presence checks to have passed; a failing `get` here is a
/// container fault and is returned unchanged.
pub fn assemble<C: ServiceContainer + ?Sized>(container: &C, path: String) -> Result<FixturesCommand> {
    let entity_manager = fetch(container, ServiceId::EntityManager, Service::into_entity_manager)?;
    let loader = fetch(container, ServiceId::Loader, Service::into_loader)?;
    let purger = fetch(container, ServiceId::Purger, Service::into_purger)?;
    let executor = fetch(container, ServiceId::Executor, Service::into_executor)?;

    Ok(FixturesCommand::new(entity_manager, loader, purger, executor, path))
}
