// Domain layer: rule/counter models and the ports the engine depends on.

pub mod model;
pub mod ports;
