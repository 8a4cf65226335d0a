pub mod calculator;

pub use crate::domain::model::Operand;
pub use crate::domain::ports::IntoOperand;
pub use crate::utils::error::Result;
