pub mod toml_config;

use crate::domain::model::Operand;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["plain", "json"];
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "calculator")]
#[command(about = "Adds two numbers")]
pub struct CliConfig {
    /// First operand
    #[arg(allow_negative_numbers = true)]
    pub a: String,

    /// Second operand
    #[arg(allow_negative_numbers = true)]
    pub b: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override output format from config
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Override float display precision from config
    #[arg(short, long)]
    pub precision: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔 (若有指定)
    pub fn load_file(&self) -> Result<TomlConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        file.validate()?;
        Ok(file)
    }

    /// 命令列參數覆蓋設定檔
    pub fn settings(&self, file: &TomlConfig) -> Settings {
        Settings {
            format: self.format.unwrap_or_else(|| file.output_format()),
            precision: self.precision.or_else(|| file.precision()),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision {
            validate_range("--precision", precision, 0, toml_config::MAX_PRECISION)?;
        }
        Ok(())
    }
}

/// 合併後的輸出設定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub precision: Option<usize>,
}

#[derive(Serialize)]
struct SumReport {
    a: Operand,
    b: Operand,
    sum: Operand,
}

impl Settings {
    pub fn render(&self, a: Operand, b: Operand, sum: Operand) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(sum.display_with(self.precision)),
            OutputFormat::Json => {
                let report = SumReport {
                    a: a.rounded(self.precision),
                    b: b.rounded(self.precision),
                    sum: sum.rounded(self.precision),
                };
                Ok(serde_json::to_string(&report)?)
            }
        }
    }
}
