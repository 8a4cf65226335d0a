use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid operand `{operand}` ({value}): {reason}")]
    InvalidOperand {
        operand: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    /// 建立運算元錯誤
    pub fn invalid_operand(
        operand: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidOperand {
            operand: operand.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// 標記是哪一個運算元出錯 (a 或 b)
    pub fn for_operand(self, name: &str) -> Self {
        match self {
            CalcError::InvalidOperand { value, reason, .. } => CalcError::InvalidOperand {
                operand: name.to_string(),
                value,
                reason,
            },
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidOperand { .. } => ErrorCategory::Input,
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度對應的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::InvalidOperand { .. } => {
                "Pass two numbers, e.g. `calculator 3 4` or `calculator 2.5 -1`".to_string()
            }
            CalcError::ConfigValidationError { .. } => {
                "Check that the configuration file is valid TOML".to_string()
            }
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of `{}` in the configuration file", field)
            }
            CalcError::IoError(_) => {
                "Make sure the file exists and is readable".to_string()
            }
            CalcError::SerializationError(_) => {
                "Retry with `--format plain`".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidOperand { operand, value, .. } => {
                format!("Operand {} is not a number: {:?}", operand, value)
            }
            CalcError::ConfigValidationError { message, .. } => {
                format!("Could not read configuration: {}", message)
            }
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value {} = {:?} is invalid: {}", field, value, reason)
            }
            CalcError::IoError(e) => format!("File access failed: {}", e),
            CalcError::SerializationError(e) => format!("Could not render output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
