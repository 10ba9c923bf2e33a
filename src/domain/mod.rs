// Domain layer: the command, the service identifiers and the collaborator ports.

pub mod model;
pub mod ports;
