use thiserror::Error;

/// Failures of the single data-document fetch. One attempt per page render,
/// no retry; the orchestrator collapses all of these into the error page.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("data request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("data document malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("data document unreadable: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("data load failed: {0}")]
    DataLoad(#[from] DataLoadError),

    #[error("unexpected data shape: missing `{field}`")]
    UnexpectedShape { field: &'static str },

    #[error("mount point not found: #{id}")]
    MissingMount { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("config file error: {0}")]
    ConfigFileError(#[from] toml::de::Error),

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Page,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::DataLoad(DataLoadError::Request(_)) => ErrorCategory::Network,
            PortfolioError::DataLoad(_) | PortfolioError::UnexpectedShape { .. } => {
                ErrorCategory::Data
            }
            PortfolioError::MissingMount { .. } => ErrorCategory::Page,
            PortfolioError::ConfigFileError(_)
            | PortfolioError::ConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            PortfolioError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Page => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::DataLoad(DataLoadError::Request(_)) => {
                "Could not reach the data document".to_string()
            }
            PortfolioError::DataLoad(_) => "The data document could not be read".to_string(),
            PortfolioError::UnexpectedShape { field } => {
                format!("The data document is missing the `{}` section", field)
            }
            PortfolioError::MissingMount { id } => {
                format!("The page shell has no #{} element", id)
            }
            PortfolioError::ConfigFileError(_)
            | PortfolioError::ConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => {
                "The configuration is invalid".to_string()
            }
            PortfolioError::IoError(_) => "A file operation failed".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check the data URL and your network connection".to_string()
            }
            ErrorCategory::Data => {
                "Check data.json against the expected portfolio schema".to_string()
            }
            ErrorCategory::Page => {
                "Render into the built-in portfolio shell or add the missing mount point"
                    .to_string()
            }
            ErrorCategory::Config => "Fix the flagged configuration value and retry".to_string(),
            ErrorCategory::System => "Check file permissions and disk space".to_string(),
        }
    }
}
