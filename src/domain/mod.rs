// Domain layer: boat records and the store boundary. No I/O here.

pub mod model;
pub mod ports;
