// Domain layer: operators and evaluated calculations. No I/O here.

pub mod model;
