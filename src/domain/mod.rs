// Domain layer: value types and ports (interfaces). No I/O happens here.

pub mod model;
pub mod ports;
