// Domain layer: operand model and the conversion port used by `sum`.

pub mod model;
pub mod ports;
