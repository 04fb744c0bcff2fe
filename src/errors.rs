use std::fmt;

/// Failure kind of a remote call, used by presentation code that only needs
/// to branch on the class of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Network,
    Validation,
    NotFound,
    Server,
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    /// Transport-level failure: refused connection, DNS, timeout.
    Network(String),
    /// The backend rejected the request payload (4xx on shorten).
    Validation(String),
    /// The backend does not know the requested short code (404).
    NotFound(String),
    /// The backend failed or answered outside its contract (5xx, bad body).
    Server(String),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Network(_) => "E001",
            ServiceError::Validation(_) => "E002",
            ServiceError::NotFound(_) => "E003",
            ServiceError::Server(_) => "E004",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ServiceError::Network(_) => "Network Error",
            ServiceError::Validation(_) => "Validation Error",
            ServiceError::NotFound(_) => "Resource Not Found",
            ServiceError::Server(_) => "Server Error",
        }
    }

    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceError::Network(_) => ServiceKind::Network,
            ServiceError::Validation(_) => ServiceKind::Validation,
            ServiceError::NotFound(_) => ServiceKind::NotFound,
            ServiceError::Server(_) => ServiceKind::Server,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceError::Network(msg) => msg,
            ServiceError::Validation(msg) => msg,
            ServiceError::NotFound(msg) => msg,
            ServiceError::Server(msg) => msg,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }

    /// Colored one-liner for CLI output.
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ServiceError {}

// Convenience constructors
impl ServiceError {
    pub fn network<T: Into<String>>(msg: T) -> Self {
        ServiceError::Network(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ServiceError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ServiceError::NotFound(msg.into())
    }

    pub fn server<T: Into<String>>(msg: T) -> Self {
        ServiceError::Server(msg.into())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Server(err.to_string())
    }
}

impl From<url::ParseError> for ServiceError {
    fn from(err: url::ParseError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
