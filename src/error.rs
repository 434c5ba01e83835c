use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ValidationError: {0}")]
    Validation(#[from] ValidationError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ServiceError: {0}")]
    Service(#[from] ServiceError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
    #[error("Tool '{name}' reported a failure")]
    ToolFailed { name: String },
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {endpoint}")]
    NotFound { endpoint: String },
    #[error("Rate limited by upstream: {endpoint}")]
    RateLimited { endpoint: String },
    #[error("Upstream server error {status} at {endpoint}")]
    Server { status: u16, endpoint: String },
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("Connection failed for {endpoint}: {message}")]
    Connection { endpoint: String, message: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Failed to parse response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },
}

impl ApiError {
    /// Human-readable message returned to tool callers.
    pub fn localized_message(&self) -> String {
        match self {
            ApiError::NotFound { .. } => {
                "查無資料：所查詢的資源不存在 (404)。請檢查參數是否正確。".to_string()
            }
            ApiError::RateLimited { .. } => "請求過於頻繁 (429)。請稍後再試。".to_string(),
            ApiError::Server { status, .. } => format!(
                "伺服器錯誤 ({})。API 服務可能暫時不可用，請稍後再試。",
                status
            ),
            ApiError::Timeout { .. } => "請求逾時。API 服務可能繁忙，請稍後再試。".to_string(),
            ApiError::Connection { .. } => {
                "連線錯誤。請檢查網路連線或 API 服務是否正常。".to_string()
            }
            ApiError::Http { status: 0, message, .. } => format!("未預期的錯誤：{}", message),
            ApiError::Http { status, .. } => format!("API 請求失敗：HTTP {}", status),
            ApiError::Parse { message, .. } => {
                format!("回應格式錯誤：無法解析 JSON ({})", message)
            }
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::NotFound { endpoint }
            | ApiError::RateLimited { endpoint }
            | ApiError::Server { endpoint, .. }
            | ApiError::Timeout { endpoint, .. }
            | ApiError::Connection { endpoint, .. }
            | ApiError::Http { endpoint, .. }
            | ApiError::Parse { endpoint, .. } => endpoint,
        }
    }
}

/// Caller contract violations caught before any request is sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("參數錯誤：page 必須大於或等於 1")]
    InvalidPage,
    #[error("參數錯誤：limit 必須大於或等於 1")]
    InvalidLimit,
    #[error("參數錯誤：{field} 不可為空")]
    EmptyIdentifier { field: String },
    #[error("參數錯誤：{field} 含有不允許的字元 ({value})")]
    InvalidIdentifier { field: String, value: String },
    #[error("參數錯誤：{field} 必須為 YYYY-MM-DD 格式的日期 ({value})")]
    InvalidDate { field: String, value: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration serialize error: {message}")]
    ConfigSerializeError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("MCP service error: {message}")]
    Mcp { message: String },
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Server { .. } => ErrorSeverity::High,
                ApiError::Connection { .. } => ErrorSeverity::High,
                ApiError::Parse { .. } => ErrorSeverity::High,
                ApiError::Timeout { .. } | ApiError::RateLimited { .. } => ErrorSeverity::Medium,
                ApiError::Http { status, .. } if *status >= 500 || *status == 0 => {
                    ErrorSeverity::High
                }
                _ => ErrorSeverity::Low,
            },
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Service(ServiceError::Mcp { .. }) => ErrorSeverity::Critical,
            AppError::Service(_) => ErrorSeverity::Medium,
        }
    }

    /// Message shown to tool callers, localized where the upstream API is concerned.
    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Api(api_error) => api_error.localized_message(),
            AppError::Validation(validation_error) => validation_error.to_string(),
            _ => format!("未預期的錯誤：{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::UnknownKey { .. }) => Some(
                "Valid keys: api.base_url, api.timeout_seconds, cache.enabled, cache.capacity, cache.ttl_seconds"
                    .to_string(),
            ),
            AppError::Api(ApiError::Timeout { .. } | ApiError::Connection { .. }) => Some(
                "Check your internet connection or override the endpoint with --base-url"
                    .to_string(),
            ),
            AppError::Cli(CliError::UnknownTool { .. }) => {
                Some("'ly-mcp tools' lists the available tools".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove the configuration file shown by 'ly-mcp config path'".to_string())
            }
            _ => None,
        }
    }
}
