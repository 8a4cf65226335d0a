pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, OutputFormat, Settings};
pub use crate::core::calculator::sum;
pub use domain::{model::Operand, ports::IntoOperand};
pub use utils::error::{CalcError, Result};
