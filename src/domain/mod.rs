// Domain layer: value types and collaborator ports. No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
