use crate::domain::model::ServiceId;
use crate::domain::ports::ServiceContainer;
use crate::utils::error::{FixturesError, Result};

/// Outcome of the presence pass over [`ServiceId::REQUIRED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    AllRegistered,
    Missing(ServiceId),
}

/// Queries `has` for each required service in order, stopping at the first gap.
///
/// Never calls `get`.
pub fn check_presence<C: ServiceContainer + ?Sized>(container: &C) -> Presence {
    for id in ServiceId::REQUIRED {
        tracing::debug!("Checking container for {}", id);
        if !container.has(id.key()) {
            return Presence::Missing(id);
        }
    }
    Presence::AllRegistered
}

pub fn ensure_registered<C: ServiceContainer + ?Sized>(container: &C) -> Result<()> {
    match check_presence(container) {
        Presence::AllRegistered => Ok(()),
        Presence::Missing(id) => {
            tracing::warn!("{} is not registered in the container", id);
            Err(FixturesError::not_found(format!("{} not found.", id)))
        }
    }
}
