use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("load was cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigParse { message: String },
}

impl FetchError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidConfigValue { .. } | FetchError::ConfigParse { .. }
        )
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::Api(_) | FetchError::Status { .. } => {
                "Could not load dog breeds. Please try again.".to_string()
            }
            FetchError::Cancelled => "The breed load was cancelled.".to_string(),
            FetchError::Io(e) => format!("Could not write the output file: {}", e),
            FetchError::Csv(_) | FetchError::Serialization(_) => {
                "Could not render the breed list.".to_string()
            }
            FetchError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            FetchError::ConfigParse { message } => {
                format!("Configuration problem: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::Api(_) => "Check your network connection and the endpoint URLs",
            FetchError::Status { .. } => "The breed service may be down; retry later",
            FetchError::Cancelled => "Run the command again",
            FetchError::Io(_) => "Check that the output path exists and is writable",
            FetchError::Csv(_) | FetchError::Serialization(_) => "Try a different output format",
            FetchError::InvalidConfigValue { .. } | FetchError::ConfigParse { .. } => {
                "Fix the configuration value and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
