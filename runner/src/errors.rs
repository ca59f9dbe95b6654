use thiserror::Error;

/// Failures of a single page capability call.
///
/// Resolvers treat every variant as "skip this candidate"; only the orchestrator
/// decides whether a page error is fatal.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("element not found: {0}")]
    NotFound(String),

    #[error("timed out after {0} ms")]
    Timeout(u64),

    #[error("unsupported on this element: {0}")]
    Unsupported(String),

    #[error("driver error: {0}")]
    Driver(String),
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("login failed at '{step}': {source}")]
    LoginFailed {
        step: String,
        #[source]
        source: PageError,
    },

    #[error("submit failed: {0}")]
    SubmitFailed(#[source] PageError),

    #[error("csv error: {0}")]
    Csv(String),

    #[error("csv header mismatch: {0}")]
    Schema(String),

    #[error("webdriver session error: {0}")]
    WebDriver(String),
}

impl From<fantoccini::error::CmdError> for PageError {
    fn from(err: fantoccini::error::CmdError) -> Self {
        PageError::Driver(err.to_string())
    }
}

impl From<csv::Error> for RunError {
    fn from(err: csv::Error) -> Self {
        RunError::Csv(err.to_string())
    }
}

impl From<fantoccini::error::NewSessionError> for RunError {
    fn from(err: fantoccini::error::NewSessionError) -> Self {
        RunError::WebDriver(err.to_string())
    }
}
