use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(
        "Invalid date notation '{value}'. Accepted formats: \
         date only [[date:2025-06-18]], \
         date and time [[date:2025-06-18T08:00]], \
         date range [[date:2025-06-18/2025-06-19]], \
         timed start with date end [[date:2025-06-18T08:00/2025-06-19]], \
         date-time range [[date:2025-06-18T08:00/2025-06-19T17:00]]"
    )]
    #[diagnostic(code(notecal::malformed_notation))]
    MalformedNotation { value: String },

    #[error("Event '{event_id}' not found in calendar '{calendar_id}'")]
    #[diagnostic(code(notecal::event_not_found))]
    EventNotFound {
        calendar_id: String,
        event_id: String,
    },

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(notecal::backend))]
    Backend(String),

    #[error("HTTP error: {0}")]
    #[diagnostic(code(notecal::http))]
    Http(#[from] reqwest::Error),

    #[error("Date token '{0}' is neither a date nor a date-time")]
    #[diagnostic(
        code(notecal::invalid_date_token),
        help("the notation parser accepted a token the time builder cannot handle")
    )]
    InvalidDateToken(String),

    #[error("Invalid timezone: {0}")]
    #[diagnostic(code(notecal::invalid_timezone))]
    InvalidTimezone(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(notecal::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(notecal::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(notecal::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(notecal::serialization))]
    Serialization(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Config(format!("Invalid calendar API URL: {}", err))
    }
}

/// Type alias for Result with our Error type
pub type NoteCalResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create Google Calendar errors
pub fn backend_error(message: &str) -> Error {
    Error::Backend(message.to_string())
}
